//! Three stacked marquees at different speeds and directions, the third a
//! ghost watermark.

use yew::prelude::*;

use crate::components::layout::FullPageContainer;
use crate::components::marquee::{MarqueeDirection, MarqueeText};
use crate::config;
use crate::theme;

#[function_component(MarqueeSection)]
pub fn marquee_section() -> Html {
    let css = format!(
        r#"
            .marquee-wall {{
                background-color: {bg};
                overflow: hidden;
            }}
            .marquee-wall .marquee-wall-rows {{
                display: flex;
                flex-direction: column;
                justify-content: center;
                gap: 2rem;
                width: 100%;
                position: relative;
                z-index: 1;
            }}
            .marquee-wall .marquee-wall-decoration {{
                position: absolute;
                filter: invert(1);
                pointer-events: none;
            }}
            .marquee-wall .marquee-row-white {{
                color: {text};
            }}
            .marquee-wall .marquee-row-accent {{
                color: {accent};
            }}
            .marquee-wall .marquee-row-ghost {{
                color: rgba(255, 255, 255, 0.06);
            }}
        "#,
        bg = theme::BG,
        text = theme::TEXT_PRIMARY,
        accent = theme::ACCENT,
    );

    html! {
        <FullPageContainer class={classes!("marquee-wall")}>
            <style>{css}</style>
            <img
                class="marquee-wall-decoration"
                style="right: 6%; top: 12%; width: 200px; opacity: 0.07;"
                src={config::asset("voidframe/feedback-success.png")}
                alt=""
            />
            <img
                class="marquee-wall-decoration"
                style="left: 3%; bottom: 10%; width: 240px; opacity: 0.05;"
                src={config::asset("voidframe/squirrel-grafyti-stop.png")}
                alt=""
            />
            <div class="marquee-wall-rows">
                <MarqueeText
                    text="COLLABORATE"
                    speed={25}
                    class={classes!("marquee-row-white")}
                />
                <MarqueeText
                    text="CREATE TOGETHER"
                    speed={18}
                    direction={MarqueeDirection::Right}
                    font_size="clamp(2.5rem, 8vw, 6rem)"
                    class={classes!("marquee-row-accent")}
                />
                <MarqueeText
                    text="VOIDFRAME"
                    speed={35}
                    font_size="clamp(4rem, 14vw, 12rem)"
                    class={classes!("marquee-row-ghost")}
                />
            </div>
        </FullPageContainer>
    }
}
