//! Fixed sound on/off control wired to the shared audio handle.

use yew::prelude::*;

use crate::audio::use_audio;
use crate::config;
use crate::theme;

#[derive(Properties, PartialEq)]
pub struct AudioToggleProps {
    #[prop_or(AttrValue::Static("SOUND ON"))]
    pub label_on: AttrValue,
    #[prop_or(AttrValue::Static("SOUND OFF"))]
    pub label_off: AttrValue,
    #[prop_or(AttrValue::Static(config::BGM_SRC))]
    pub src: AttrValue,
    /// Offset from the top right corner, px.
    #[prop_or((24, 24))]
    pub position: (u32, u32),
}

#[function_component(AudioToggle)]
pub fn audio_toggle(props: &AudioToggleProps) -> Html {
    let audio = use_audio();
    let muted = audio.muted();

    let onclick = {
        let src = props.src.clone();
        Callback::from(move |_: MouseEvent| {
            audio.toggle_background(&src);
        })
    };

    let icon = if muted {
        html! {
            <svg width="18" height="18" viewBox="0 0 24 24" fill="none"
                stroke={theme::TEXT_PRIMARY} stroke-width="2"
                stroke-linecap="round" stroke-linejoin="round">
                <polygon points="11 5 6 9 2 9 2 15 6 15 11 19 11 5"></polygon>
                <line x1="23" y1="9" x2="17" y2="15"></line>
                <line x1="17" y1="9" x2="23" y2="15"></line>
            </svg>
        }
    } else {
        html! {
            <svg width="18" height="18" viewBox="0 0 24 24" fill="none"
                stroke={theme::TEXT_PRIMARY} stroke-width="2"
                stroke-linecap="round" stroke-linejoin="round">
                <polygon points="11 5 6 9 2 9 2 15 6 15 11 19 11 5"></polygon>
                <path d="M15.54 8.46a5 5 0 0 1 0 7.07"></path>
                <path d="M19.07 4.93a10 10 0 0 1 0 14.14"></path>
            </svg>
        }
    };

    let (top, right) = props.position;
    let css = format!(
        r#"
            .audio-toggle {{
                position: fixed;
                z-index: 1000;
                display: flex;
                align-items: center;
                gap: 0.5rem;
                cursor: pointer;
                opacity: 0.7;
                transition: opacity 0.3s ease;
                user-select: none;
            }}
            .audio-toggle:hover {{
                opacity: 1;
            }}
            .audio-toggle .audio-toggle-label {{
                color: {text};
                font-size: {caption};
                font-weight: 600;
                letter-spacing: 0.1em;
            }}
        "#,
        text = theme::TEXT_PRIMARY,
        caption = theme::SIZE_OVERLINE,
    );

    html! {
        <div
            class="audio-toggle"
            style={format!("top: {top}px; right: {right}px;")}
            data-cursor="hover"
            {onclick}
        >
            <style>{css}</style>
            { icon }
            <span class="audio-toggle-label">
                { if muted { props.label_off.clone() } else { props.label_on.clone() } }
            </span>
        </div>
    }
}
