//! Full-screen loading intro.
//!
//! Plays once per mount: the brand name rises in character by character,
//! the tagline fades in over the tail of that, a short hold, then the
//! whole screen slides out. Clicking anywhere skips straight to the end.
//! Stage advancement runs on timers, not on CSS, so the page still
//! unblocks on schedule if styles never apply.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::theme;

const CHAR_STAGGER_MS: u32 = 60;
const CHAR_RISE_MS: u32 = 500;
const TAGLINE_FADE_MS: u32 = 500;
const EXIT_MS: u32 = 600;

/// Stage boundaries in ms from timeline start.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct IntroSchedule {
    pub tagline_at: u32,
    pub hold_at: u32,
    pub exit_at: u32,
    pub done_at: u32,
}

/// Lays the four stages out over the configured total duration. The
/// tagline overlaps the character stagger by 15% of the total; the hold
/// is 20% of it.
pub fn schedule(char_count: usize, total_secs: f64) -> IntroSchedule {
    let total_ms = (total_secs * 1000.0) as u32;
    let chars_end = CHAR_RISE_MS + CHAR_STAGGER_MS * char_count.saturating_sub(1) as u32;
    let overlap = (total_ms as f64 * 0.15) as u32;
    let tagline_at = chars_end.saturating_sub(overlap);
    let hold_at = tagline_at + TAGLINE_FADE_MS;
    let exit_at = hold_at + (total_ms as f64 * 0.2) as u32;
    IntroSchedule {
        tagline_at,
        hold_at,
        exit_at,
        done_at: exit_at + EXIT_MS,
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Stage {
    Chars,
    Tagline,
    Hold,
    Exit,
    Done,
}

#[derive(Properties, PartialEq)]
pub struct LoadingIntroProps {
    #[prop_or(AttrValue::Static("VOIDFRAME"))]
    pub brand: AttrValue,
    #[prop_or(AttrValue::Static("WE FRAME THE VOID"))]
    pub tagline: AttrValue,
    /// Total timeline length in seconds.
    #[prop_or(2.5)]
    pub duration: f64,
    #[prop_or_default]
    pub on_complete: Callback<()>,
    #[prop_or(true)]
    pub skippable: bool,
}

#[function_component(LoadingIntro)]
pub fn loading_intro(props: &LoadingIntroProps) -> Html {
    let stage = use_state(|| Stage::Chars);
    let completed = use_mut_ref(|| false);

    let chars: Vec<char> = props.brand.chars().collect();
    let sched = schedule(chars.len(), props.duration);

    {
        let stage_setter = stage.clone();
        let completed = completed.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |current: &Stage| {
                let mut timer = None;
                let next = match *current {
                    Stage::Chars => Some((Stage::Tagline, sched.tagline_at)),
                    Stage::Tagline => Some((Stage::Hold, sched.hold_at - sched.tagline_at)),
                    Stage::Hold => Some((Stage::Exit, sched.exit_at - sched.hold_at)),
                    Stage::Exit => Some((Stage::Done, sched.done_at - sched.exit_at)),
                    Stage::Done => {
                        // Single firing point for both the natural and the
                        // skip path.
                        let mut fired = completed.borrow_mut();
                        if !*fired {
                            *fired = true;
                            on_complete.emit(());
                        }
                        None
                    }
                };
                if let Some((to, delay)) = next {
                    timer = Some(Timeout::new(delay, move || stage_setter.set(to)));
                }
                // A pending hop is cancelled when the stage moves on its
                // own (skip) or the component unmounts.
                move || drop(timer)
            },
            *stage,
        );
    }

    let skip = {
        let stage = stage.clone();
        let skippable = props.skippable;
        Callback::from(move |_: MouseEvent| {
            if skippable && *stage != Stage::Done {
                stage.set(Stage::Done);
            }
        })
    };

    if *stage == Stage::Done {
        return html! {};
    }

    let tagline_visible = matches!(*stage, Stage::Tagline | Stage::Hold | Stage::Exit);
    let leaving = *stage == Stage::Exit;

    let css = format!(
        r#"
            @keyframes intro-char-rise {{
                from {{ opacity: 0; transform: translateY(40px); }}
                to {{ opacity: 1; transform: translateY(0); }}
            }}
            .loading-intro {{
                position: fixed;
                top: 0;
                left: 0;
                width: 100vw;
                height: 100vh;
                background-color: {bg};
                z-index: 9998;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                transition: transform 0.6s cubic-bezier(0.645, 0.045, 0.355, 1);
            }}
            .loading-intro.leaving {{
                transform: translateY(-100%);
            }}
            .loading-intro .intro-brand {{
                display: flex;
                overflow: hidden;
            }}
            .loading-intro .intro-char {{
                display: inline-block;
                opacity: 0;
                font-size: clamp(3rem, 10vw, 8rem);
                font-weight: 900;
                color: {text};
                line-height: 1;
                letter-spacing: {tracking};
                animation: intro-char-rise 0.5s cubic-bezier(0.215, 0.61, 0.355, 1) forwards;
            }}
            .loading-intro .intro-tagline {{
                color: {secondary};
                font-size: {overline};
                font-weight: 600;
                letter-spacing: 0.2em;
                text-transform: uppercase;
                margin-top: 1rem;
                opacity: 0;
                transition: opacity 0.5s ease-out;
            }}
            .loading-intro .intro-tagline.visible {{
                opacity: 1;
            }}
        "#,
        bg = theme::BG,
        text = theme::TEXT_PRIMARY,
        secondary = theme::TEXT_SECONDARY,
        overline = theme::SIZE_OVERLINE,
        tracking = theme::TRACKING_DISPLAY,
    );

    let cursor_style = if props.skippable {
        "cursor: pointer;"
    } else {
        "cursor: default;"
    };

    html! {
        <div
            class={classes!("loading-intro", leaving.then(|| "leaving"))}
            style={cursor_style}
            onclick={skip}
        >
            <style>{css}</style>
            <div class="intro-brand">
                { for chars.iter().enumerate().map(|(i, c)| {
                    let shown = if *c == ' ' { '\u{a0}' } else { *c };
                    let delay = format!("animation-delay: {}ms;", i as u32 * CHAR_STAGGER_MS);
                    html! { <span class="intro-char" style={delay}>{ shown }</span> }
                }) }
            </div>
            <span class={classes!("intro-tagline", tagline_visible.then(|| "visible"))}>
                { props.tagline.clone() }
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_come_in_declared_order() {
        let s = schedule(9, 2.5);
        assert!(s.tagline_at < s.hold_at);
        assert!(s.hold_at < s.exit_at);
        assert!(s.exit_at < s.done_at);
    }

    #[test]
    fn default_timeline_finishes_within_the_configured_total() {
        let s = schedule("VOIDFRAME".chars().count(), 2.5);
        assert!(s.done_at <= 2500, "done at {}ms", s.done_at);
    }

    #[test]
    fn tagline_overlaps_the_character_stagger() {
        let chars = 9;
        let s = schedule(chars, 2.5);
        let chars_end = CHAR_RISE_MS + CHAR_STAGGER_MS * (chars as u32 - 1);
        assert!(s.tagline_at < chars_end);
    }

    #[test]
    fn single_character_brand_does_not_underflow() {
        let s = schedule(1, 0.5);
        assert!(s.tagline_at <= s.hold_at);
        assert!(s.done_at > 0);
    }

    #[test]
    fn longer_brands_push_the_tagline_later() {
        let short = schedule(4, 2.5);
        let long = schedule(24, 2.5);
        assert!(long.tagline_at > short.tagline_at);
    }
}
