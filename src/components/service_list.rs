//! Interactive service list.
//!
//! Numbered display-size rows; the hovered row lifts, indents and takes
//! the accent color while every other row dims. An underline sweeps in
//! under the hovered row. Optionally clicks a short blip through the
//! shared audio handle on hover.

use yew::prelude::*;

use crate::audio::use_audio;
use crate::config;
use crate::theme;

#[derive(Properties, PartialEq)]
pub struct InteractiveServiceListProps {
    pub items: Vec<AttrValue>,
    #[prop_or(AttrValue::Static("clamp(2rem, 6vw, 5rem)"))]
    pub font_size: AttrValue,
    #[prop_or(AttrValue::Static(theme::ACCENT))]
    pub accent: AttrValue,
    #[prop_or(true)]
    pub numbered: bool,
    #[prop_or(true)]
    pub divided: bool,
    /// Play a one-shot blip when a row is entered.
    #[prop_or(false)]
    pub hover_blip: bool,
}

#[function_component(InteractiveServiceList)]
pub fn interactive_service_list(props: &InteractiveServiceListProps) -> Html {
    let hovered = use_state(|| None::<usize>);
    let audio = use_audio();

    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };

    let css = format!(
        r#"
            .service-list {{
                display: flex;
                flex-direction: column;
                width: 100%;
            }}
            .service-list .service-item {{
                position: relative;
                display: flex;
                align-items: center;
                gap: 2rem;
                padding: 1.5rem 0;
                cursor: pointer;
                color: {text};
                transform-origin: left center;
                transition: transform 0.3s ease-out, color 0.3s ease-out,
                    opacity 0.3s ease-out;
            }}
            .service-list.divided .service-item {{
                border-bottom: 1px solid {divider};
            }}
            .service-list.divided .service-item:first-child {{
                border-top: 1px solid {divider};
            }}
            .service-list .service-item.lifted {{
                transform: translateX(16px) scale(1.02);
                color: {accent};
            }}
            .service-list .service-item.dimmed {{
                opacity: 0.3;
            }}
            .service-list .service-item::after {{
                content: "";
                position: absolute;
                bottom: 0;
                left: 0;
                width: 0%;
                height: 2px;
                background-color: {accent};
                transition: width 0.4s ease;
            }}
            .service-list .service-item.lifted::after {{
                width: 100%;
            }}
            .service-list .service-number {{
                min-width: 3ch;
                font-size: {overline};
                font-weight: 600;
                letter-spacing: {tracking};
                opacity: 0.4;
            }}
            .service-list .service-label {{
                font-size: {font_size};
                font-weight: 800;
                line-height: 1.1;
                text-transform: uppercase;
                letter-spacing: -0.02em;
            }}
        "#,
        text = theme::TEXT_PRIMARY,
        divider = theme::DIVIDER,
        accent = props.accent,
        overline = theme::SIZE_OVERLINE,
        tracking = theme::TRACKING_OVERLINE,
        font_size = props.font_size,
    );

    html! {
        <div class={classes!("service-list", props.divided.then(|| "divided"))}>
            <style>{css}</style>
            { for props.items.iter().enumerate().map(|(index, item)| {
                let on_enter = {
                    let hovered = hovered.clone();
                    let audio = audio.clone();
                    let hover_blip = props.hover_blip;
                    Callback::from(move |_: MouseEvent| {
                        hovered.set(Some(index));
                        if hover_blip {
                            audio.play_one_shot(config::HOVER_BLIP_SRC, 0.35);
                        }
                    })
                };
                let state = match *hovered {
                    Some(h) if h == index => Some("lifted"),
                    Some(_) => Some("dimmed"),
                    None => None,
                };
                html! {
                    <div
                        class={classes!("service-item", state)}
                        data-cursor="hover"
                        onmouseenter={on_enter}
                        onmouseleave={on_leave.clone()}
                    >
                        { if props.numbered {
                            html! {
                                <span class="service-number">
                                    { format!("{:02}", index + 1) }
                                </span>
                            }
                        } else {
                            html! {}
                        } }
                        <span class="service-label">{ item.clone() }</span>
                    </div>
                }
            }) }
        </div>
    }
}
