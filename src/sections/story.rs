//! Horizontal story: four viewport-wide panels driven by vertical scroll.
//! Stats, philosophy wordmark, approach split, then the red hand-off into
//! the services section.

use yew::prelude::*;

use crate::components::headline::StretchedHeadlineMultiline;
use crate::components::horizontal_scroll::{HorizontalPanel, HorizontalScrollSection};
use crate::components::layout::SplitScreen;
use crate::config;
use crate::theme;

const STATS: [(&str, &str); 3] = [
    ("69+", "Projects Completed"),
    ("5", "Years of Experience"),
    ("300+", "Films Produced"),
];

#[function_component(HorizontalStorySection)]
pub fn horizontal_story_section() -> Html {
    let css = format!(
        r#"
            .story-panel-dark {{
                background-color: {bg};
                padding: 0 4rem;
            }}
            .story-panel-surface {{
                background-color: {surface};
            }}
            .story-panel-accent {{
                background-color: {accent};
            }}
            .story-stats {{
                display: flex;
                flex-direction: column;
                justify-content: center;
                height: 100%;
                gap: 3rem;
                padding: 0 3rem;
            }}
            .story-stat-number {{
                font-size: {h2};
                font-weight: 900;
                line-height: 1;
                color: {text};
                letter-spacing: {tracking};
            }}
            .story-stat-label {{
                display: block;
                color: rgba(255, 255, 255, 0.4);
                font-size: {overline};
                font-weight: 600;
                letter-spacing: 0.15em;
                text-transform: uppercase;
                margin-top: 0.25rem;
            }}
            .story-blurb {{
                position: relative;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                height: 100%;
                padding: 0 2rem;
            }}
            .story-blurb p {{
                color: {secondary};
                max-width: 40ch;
                line-height: 1.8;
                font-size: {body};
                position: relative;
                z-index: 1;
            }}
            .story-crew {{
                position: absolute;
                top: 50%;
                left: 50%;
                transform: translate(-50%, -50%);
                width: 90%;
                max-width: 400px;
                filter: invert(1);
                opacity: 0.15;
                pointer-events: none;
            }}
            .story-decoration {{
                position: absolute;
                filter: invert(1);
                pointer-events: none;
            }}
            .story-wordmark {{
                padding: 0 4rem;
                width: 100%;
                max-width: 90vw;
                position: relative;
                z-index: 1;
            }}
            .story-approach {{
                position: relative;
                display: flex;
                flex-direction: column;
                justify-content: center;
                height: 100%;
                padding: 0 3rem;
            }}
            .story-approach-overline {{
                color: {accent};
                font-size: {overline};
                font-weight: 600;
                letter-spacing: 0.15em;
                text-transform: uppercase;
                margin-bottom: 1rem;
                position: relative;
                z-index: 1;
            }}
            .story-approach h3 {{
                color: {text};
                font-size: {h3};
                font-weight: 800;
                line-height: 1.1;
                position: relative;
                z-index: 1;
            }}
            .story-process {{
                display: flex;
                flex-direction: column;
                justify-content: center;
                height: 100%;
                gap: 1.5rem;
                padding: 0 3rem;
            }}
            .story-process p {{
                line-height: 1.8;
                font-size: {body};
            }}
            .story-process .story-process-lead {{
                color: rgba(255, 255, 255, 0.6);
            }}
            .story-process .story-process-tail {{
                color: rgba(255, 255, 255, 0.4);
            }}
            .story-icon-row {{
                display: flex;
                gap: 2.5rem;
                margin-top: 1.5rem;
                align-items: center;
            }}
            .story-icon-row img {{
                width: 64px;
                height: 64px;
                object-fit: contain;
                filter: invert(1);
                opacity: 0.5;
            }}
        "#,
        bg = theme::BG,
        surface = theme::SURFACE,
        accent = theme::ACCENT,
        text = theme::TEXT_PRIMARY,
        secondary = theme::TEXT_SECONDARY,
        h2 = theme::SIZE_H2,
        h3 = theme::SIZE_H3,
        body = theme::SIZE_BODY,
        overline = theme::SIZE_OVERLINE,
        tracking = theme::TRACKING_DISPLAY,
    );

    let stats = html! {
        <div class="story-stats">
            { for STATS.iter().map(|(number, label)| html! {
                <div>
                    <span class="story-stat-number">{ *number }</span>
                    <span class="story-stat-label">{ *label }</span>
                </div>
            }) }
        </div>
    };

    let blurb = html! {
        <div class="story-blurb">
            <img class="story-crew" src={config::asset("voidframe/crew-stop.png")} alt="" />
            <p>
                {"We are a collective of filmmakers, designers, and storytellers \
                  who believe in the power of moving images to shape perception \
                  and define brands."}
            </p>
        </div>
    };

    let approach = html! {
        <div class="story-approach">
            <img
                class="story-decoration"
                style="right: -40px; top: 10%; width: 240px; opacity: 0.08;"
                src={config::asset("voidframe/grafyti-stop.png")}
                alt=""
            />
            <span class="story-approach-overline">{"OUR APPROACH"}</span>
            <h3>{"Every frame is a decision. Every cut, a conviction."}</h3>
        </div>
    };

    let process = html! {
        <div class="story-process">
            <p class="story-process-lead">
                {"We don't just produce videos. We architect visual narratives \
                  that cut through noise. From concept to final grade, every \
                  element serves the story."}
            </p>
            <p class="story-process-tail">
                {"Our process is collaborative, iterative, and relentlessly \
                  focused on craft. We work with brands who refuse to settle \
                  for ordinary."}
            </p>
            <div class="story-icon-row">
                { for ["program-link-1.png", "program-link-2.png", "program-link-3.png"]
                    .iter()
                    .map(|icon| html! {
                        <img src={config::asset(&format!("voidframe/{icon}"))} alt="" />
                    }) }
            </div>
        </div>
    };

    html! {
        <HorizontalScrollSection panel_count={4}>
            <style>{css}</style>
            <HorizontalPanel class={classes!("story-panel-dark")}>
                <SplitScreen ratio="60:40" stack_at="sm" left={stats} right={blurb} />
            </HorizontalPanel>
            <HorizontalPanel class={classes!("story-panel-surface")}>
                <img
                    class="story-decoration"
                    style="right: 3%; top: 8%; width: 320px; opacity: 0.06;"
                    src={config::asset("voidframe/promo-crew-stop.png")}
                    alt=""
                />
                <img
                    class="story-decoration"
                    style="left: -3%; bottom: 5%; width: 300px; opacity: 0.08;"
                    src={config::asset("voidframe/lines.svg")}
                    alt=""
                />
                <div class="story-wordmark">
                    <StretchedHeadlineMultiline
                        lines={vec![
                            AttrValue::Static("STORIES"),
                            AttrValue::Static("WORTH"),
                            AttrValue::Static("TELLING"),
                        ]}
                        font_size="clamp(3rem, 10vw, 9rem)"
                        line_height="0.95"
                    />
                </div>
            </HorizontalPanel>
            <HorizontalPanel class={classes!("story-panel-dark")}>
                <SplitScreen ratio="45:55" stack_at="sm" left={approach} right={process} />
            </HorizontalPanel>
            <HorizontalPanel class={classes!("story-panel-accent")}>
                <img
                    class="story-decoration"
                    style="left: 4%; top: 10%; width: 280px; opacity: 0.1; filter: none;"
                    src={config::asset("voidframe/squirrel.svg")}
                    alt=""
                />
                <img
                    class="story-decoration"
                    style="right: 5%; bottom: 8%; width: 220px; opacity: 0.08; filter: none;"
                    src={config::asset("voidframe/wheel.svg")}
                    alt=""
                />
                <div class="story-wordmark">
                    <StretchedHeadlineMultiline
                        lines={vec![AttrValue::Static("WHAT"), AttrValue::Static("WE DO")]}
                        font_size="clamp(4rem, 12vw, 12rem)"
                    />
                </div>
            </HorizontalPanel>
        </HorizontalScrollSection>
    }
}
