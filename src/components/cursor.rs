//! Circle cursor that replaces the native one.
//!
//! Follows the pointer with a short smoothing window and swells into the
//! accent color over anything tagged `data-cursor="hover"`. Touch devices
//! keep their native behavior; the component renders nothing there.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::theme;

#[derive(Properties, PartialEq)]
pub struct CustomCursorProps {
    /// Diameter in px.
    #[prop_or(20)]
    pub size: u32,
    #[prop_or(AttrValue::Static(theme::TEXT_PRIMARY))]
    pub color: AttrValue,
    #[prop_or(3.0)]
    pub hover_scale: f64,
    #[prop_or(AttrValue::Static(theme::ACCENT))]
    pub hover_color: AttrValue,
    #[prop_or(AttrValue::Static("difference"))]
    pub mix_blend_mode: AttrValue,
}

fn is_touch_device() -> bool {
    web_sys::window()
        .map(|w| w.navigator().max_touch_points() > 0)
        .unwrap_or(false)
}

fn place(cursor: &HtmlElement, x: f64, y: f64, scale: f64) {
    // transform is the only inline style; everything else lives in the
    // class so this write cannot clobber it.
    let _ = cursor.set_attribute(
        "style",
        &format!("transform: translate3d({x}px, {y}px, 0) scale({scale});"),
    );
}

#[function_component(CustomCursor)]
pub fn custom_cursor(props: &CustomCursorProps) -> Html {
    let cursor_ref = use_node_ref();
    let touch = is_touch_device();

    {
        let cursor_ref = cursor_ref.clone();
        let size = props.size as f64;
        let hover_scale = props.hover_scale;
        use_effect_with_deps(
            move |_| {
                let mut cleanup: Option<Box<dyn FnOnce()>> = None;

                if !touch {
                    if let (Some(window), Some(cursor)) =
                        (web_sys::window(), cursor_ref.cast::<HtmlElement>())
                    {
                        let document = window.document().unwrap();
                        if let Some(body) = document.body() {
                            let _ = body.style().set_property("cursor", "none");
                        }

                        let position = Rc::new(Cell::new((-100.0, -100.0)));
                        let hovering = Rc::new(Cell::new(false));

                        let on_move = {
                            let cursor = cursor.clone();
                            let position = position.clone();
                            let hovering = hovering.clone();
                            Closure::wrap(Box::new(move |e: MouseEvent| {
                                let x = e.client_x() as f64 - size / 2.0;
                                let y = e.client_y() as f64 - size / 2.0;
                                position.set((x, y));
                                let scale = if hovering.get() { hover_scale } else { 1.0 };
                                place(&cursor, x, y, scale);
                            })
                                as Box<dyn FnMut(MouseEvent)>)
                        };

                        // One delegated listener instead of wiring every
                        // hover target: whatever the pointer lands on,
                        // check if it sits inside a tagged element.
                        let on_over = {
                            let cursor = cursor.clone();
                            let position = position.clone();
                            let hovering = hovering.clone();
                            Closure::wrap(Box::new(move |e: MouseEvent| {
                                let over_target = e
                                    .target()
                                    .and_then(|t| t.dyn_into::<Element>().ok())
                                    .and_then(|el| {
                                        el.closest("[data-cursor='hover']").ok().flatten()
                                    })
                                    .is_some();
                                if over_target != hovering.get() {
                                    hovering.set(over_target);
                                    let _ = cursor.class_list().toggle_with_force(
                                        "is-hover",
                                        over_target,
                                    );
                                    let (x, y) = position.get();
                                    let scale = if over_target { hover_scale } else { 1.0 };
                                    place(&cursor, x, y, scale);
                                }
                            })
                                as Box<dyn FnMut(MouseEvent)>)
                        };

                        let _ = window.add_event_listener_with_callback(
                            "mousemove",
                            on_move.as_ref().unchecked_ref(),
                        );
                        let _ = document.add_event_listener_with_callback(
                            "mouseover",
                            on_over.as_ref().unchecked_ref(),
                        );

                        cleanup = Some(Box::new(move || {
                            let _ = window.remove_event_listener_with_callback(
                                "mousemove",
                                on_move.as_ref().unchecked_ref(),
                            );
                            let _ = document.remove_event_listener_with_callback(
                                "mouseover",
                                on_over.as_ref().unchecked_ref(),
                            );
                            if let Some(body) = document.body() {
                                let _ = body.style().remove_property("cursor");
                            }
                        }));
                    }
                }

                move || {
                    if let Some(cleanup) = cleanup {
                        cleanup();
                    }
                }
            },
            (),
        );
    }

    if touch {
        return html! {};
    }

    let css = format!(
        r#"
            .custom-cursor {{
                position: fixed;
                top: 0;
                left: 0;
                width: {size}px;
                height: {size}px;
                border-radius: 50%;
                background-color: {color};
                pointer-events: none;
                z-index: 9999;
                mix-blend-mode: {blend};
                transform: translate3d(-100px, -100px, 0);
                transition: transform 0.15s ease-out, background-color 0.3s ease;
            }}
            .custom-cursor.is-hover {{
                background-color: {hover_color};
            }}
        "#,
        size = props.size,
        color = props.color,
        blend = props.mix_blend_mode,
        hover_color = props.hover_color,
    );

    html! {
        <>
            <style>{css}</style>
            <div class="custom-cursor" ref={cursor_ref}></div>
        </>
    }
}
