//! Scroll-linked motion.
//!
//! Maps vertical scroll over a pinned range to horizontal translation of a
//! panel track. The math lives in plain functions; [`ScrollScene`] owns the
//! listener and inline styles and reverts both on release.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::Callback;

/// Quiet period after the last scroll event before a snap settles.
const SNAP_QUIET_MS: u32 = 120;

/// Horizontal distance the track has to cover. This is also the vertical
/// scroll budget of the pinned range, so one scrolled pixel moves the track
/// one pixel.
pub fn travel(track_width: f64, viewport_width: f64) -> f64 {
    (track_width - viewport_width).max(0.0)
}

/// Progress through the pinned range, clamped to [0, 1].
pub fn progress(scroll_y: f64, pin_top: f64, range: f64) -> f64 {
    if range <= 0.0 {
        return 0.0;
    }
    ((scroll_y - pin_top) / range).clamp(0.0, 1.0)
}

/// Quantize to the nearest of the `panel_count - 1` evenly spaced stops.
/// Fewer than two panels leaves no stop spacing to compute; that is a
/// caller bug, not a runtime case.
pub fn snap_target(progress: f64, panel_count: usize) -> f64 {
    debug_assert!(panel_count >= 2, "snap needs at least two panels");
    let stops = (panel_count - 1) as f64;
    (progress * stops).round() / stops
}

pub struct ScrollSceneOptions {
    pub panel_count: usize,
    pub snap: bool,
    pub on_progress: Option<Callback<f64>>,
}

/// A live pinned-scroll region. Engaging registers the window scroll
/// listener and sizes the wrapper; releasing reverts every external
/// mutation it made.
pub struct ScrollScene {
    on_scroll: Closure<dyn FnMut()>,
    snap_timer: Rc<RefCell<Option<Timeout>>>,
    wrapper: HtmlElement,
    track: HtmlElement,
}

impl ScrollScene {
    /// Measure the pinned range and start steering the track.
    ///
    /// The range is measured once, here. A viewport resize afterwards
    /// desyncs scroll offset from translation until the page reloads;
    /// known limitation of the pattern.
    pub fn engage(
        wrapper: HtmlElement,
        track: HtmlElement,
        opts: ScrollSceneOptions,
    ) -> Option<ScrollScene> {
        let window = web_sys::window()?;
        let viewport_w = window.inner_width().ok()?.as_f64()?;
        let range = travel(track.scroll_width() as f64, viewport_w);

        let scroll_y = window.scroll_y().ok()?;
        let pin_top = wrapper.get_bounding_client_rect().top() + scroll_y;

        // The wrapper reserves one viewport plus the whole horizontal
        // distance, which is what keeps the scrub ratio 1:1.
        let _ = wrapper.set_attribute("style", &format!("height: calc(100vh + {range}px);"));

        let snap_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

        let on_scroll = {
            let window = window.clone();
            let track = track.clone();
            let snap_timer = snap_timer.clone();
            let on_progress = opts.on_progress.clone();
            let panel_count = opts.panel_count;
            let snap = opts.snap;
            Closure::wrap(Box::new(move || {
                let scroll_y = window.scroll_y().unwrap_or(0.0);
                let p = progress(scroll_y, pin_top, range);
                let x = -p * range;
                let _ = track.set_attribute("style", &format!("transform: translate3d({x}px, 0, 0);"));

                // Notifies the owner; state updates over there re-render,
                // they do not feed back into scroll handling.
                if let Some(on_progress) = &on_progress {
                    on_progress.emit(p);
                }

                // A gesture is over once no scroll event lands for the
                // quiet period; each event resets the timer.
                if snap && p > 0.0 && p < 1.0 {
                    let window = window.clone();
                    let timer = Timeout::new(SNAP_QUIET_MS, move || {
                        let settle = ScrollToOptions::new();
                        settle.set_top(pin_top + snap_target(p, panel_count) * range);
                        settle.set_behavior(ScrollBehavior::Smooth);
                        window.scroll_to_with_scroll_to_options(&settle);
                    });
                    *snap_timer.borrow_mut() = Some(timer);
                }
            }) as Box<dyn FnMut()>)
        };

        window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
            .ok()?;

        // Apply the current position straight away.
        let _ = on_scroll
            .as_ref()
            .unchecked_ref::<web_sys::js_sys::Function>()
            .call0(&JsValue::NULL);

        Some(ScrollScene {
            on_scroll,
            snap_timer,
            wrapper,
            track,
        })
    }

    /// Synchronously unhook the listener, cancel any pending snap and clear
    /// the inline styles, leaving no pin on the document.
    pub fn release(self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.on_scroll.as_ref().unchecked_ref(),
            );
        }
        if let Some(timer) = self.snap_timer.borrow_mut().take() {
            timer.cancel();
        }
        let _ = self.track.remove_attribute("style");
        let _ = self.wrapper.remove_attribute("style");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travel_is_track_minus_viewport_floored_at_zero() {
        assert_eq!(travel(4000.0, 1000.0), 3000.0);
        assert_eq!(travel(800.0, 1000.0), 0.0);
    }

    #[test]
    fn progress_hits_both_endpoints() {
        assert_eq!(progress(500.0, 500.0, 3000.0), 0.0);
        assert_eq!(progress(3500.0, 500.0, 3000.0), 1.0);
    }

    #[test]
    fn progress_clamps_outside_the_pinned_range() {
        assert_eq!(progress(0.0, 500.0, 3000.0), 0.0);
        assert_eq!(progress(9999.0, 500.0, 3000.0), 1.0);
    }

    #[test]
    fn progress_is_monotonic_in_scroll_offset() {
        let pin_top = 120.0;
        let range = 2400.0;
        let mut last = -1.0;
        for step in 0..=100 {
            let y = pin_top - 200.0 + step as f64 * 30.0;
            let p = progress(y, pin_top, range);
            assert!(p >= last, "progress regressed at y={y}");
            last = p;
        }
    }

    #[test]
    fn degenerate_range_reports_zero_progress() {
        assert_eq!(progress(100.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn snap_settles_on_evenly_spaced_stops() {
        let n = 4;
        for (p, want) in [
            (0.0, 0.0),
            (0.1, 0.0),
            (0.2, 1.0 / 3.0),
            (0.5, 2.0 / 3.0),
            (0.49, 1.0 / 3.0),
            (0.9, 1.0),
            (1.0, 1.0),
        ] {
            assert!((snap_target(p, n) - want).abs() < 1e-12, "p={p}");
        }
    }

    #[test]
    fn snap_result_is_always_k_over_stops() {
        let n = 5;
        for step in 0..=1000 {
            let p = step as f64 / 1000.0;
            let s = snap_target(p, n);
            let k = (s * (n - 1) as f64).round();
            assert!((s - k / (n - 1) as f64).abs() < 1e-12);
            assert!((0.0..=(n - 1) as f64).contains(&k));
        }
    }
}
