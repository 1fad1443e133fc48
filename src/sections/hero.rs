//! Hero: full-screen stacked wordmark, tagline, scroll hint and the car
//! illustration, with a timed entrance after the intro hands over.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::headline::StretchedHeadlineMultiline;
use crate::components::layout::FullPageContainer;
use crate::config;
use crate::theme;

/// Entrance starts this long after mount, like the intro's hand-off
/// breath.
const ENTRANCE_DELAY_MS: u32 = 300;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let entered = use_state(|| false);

    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let timer = Timeout::new(ENTRANCE_DELAY_MS, move || entered.set(true));
                move || drop(timer)
            },
            (),
        );
    }

    let css = format!(
        r#"
            @keyframes hero-arrow-bounce {{
                from {{ transform: translateY(0); }}
                to {{ transform: translateY(8px); }}
            }}
            .hero {{
                background-color: {bg};
                padding: 0 3rem;
            }}
            .hero .hero-fire {{
                position: absolute;
                left: -20px;
                top: 15%;
                width: clamp(200px, 24vw, 320px);
                opacity: 0.12;
                pointer-events: none;
                z-index: 0;
            }}
            .hero .hero-car {{
                position: absolute;
                right: 5%;
                bottom: 15%;
                width: clamp(280px, 38vw, 560px);
                pointer-events: none;
                z-index: 0;
                filter: invert(1);
                opacity: 0;
                transform: translateX(120px);
                transition: opacity 1.2s cubic-bezier(0.215, 0.61, 0.355, 1) 0.4s,
                    transform 1.2s cubic-bezier(0.215, 0.61, 0.355, 1) 0.4s;
            }}
            .hero .hero-content {{
                display: flex;
                flex-direction: column;
                align-items: center;
                text-align: center;
                width: 100%;
                max-width: 90vw;
                position: relative;
                z-index: 1;
                opacity: 0;
                transform: translateY(40px);
                transition: opacity 1s cubic-bezier(0.215, 0.61, 0.355, 1),
                    transform 1s cubic-bezier(0.215, 0.61, 0.355, 1);
            }}
            .hero.entered .hero-content {{
                opacity: 1;
                transform: translateY(0);
            }}
            .hero.entered .hero-car {{
                opacity: 1;
                transform: translateX(0);
            }}
            .hero .hero-tagline {{
                color: {secondary};
                margin-top: 2rem;
                font-size: clamp(0.7rem, 1.2vw, 1rem);
                font-weight: 600;
                letter-spacing: 0.2em;
                text-transform: uppercase;
            }}
            .hero .hero-byline {{
                color: {faint};
                margin-top: 0.5rem;
                font-style: italic;
                letter-spacing: 0.05em;
                font-size: 0.875rem;
            }}
            .hero .hero-scroll {{
                position: absolute;
                bottom: 48px;
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 0.5rem;
                z-index: 1;
                opacity: 0;
                transition: opacity 0.5s ease 1.3s;
            }}
            .hero.entered .hero-scroll {{
                opacity: 1;
            }}
            .hero .hero-scroll-label {{
                color: rgba(255, 255, 255, 0.4);
                font-size: {overline};
                font-weight: 600;
                letter-spacing: 0.2em;
            }}
            .hero .hero-scroll-arrow {{
                animation: hero-arrow-bounce 0.8s ease-in-out infinite alternate;
            }}
        "#,
        bg = theme::BG,
        secondary = theme::TEXT_SECONDARY,
        faint = theme::TEXT_FAINT,
        overline = theme::SIZE_OVERLINE,
    );

    html! {
        <FullPageContainer class={classes!("hero", (*entered).then(|| "entered"))}>
            <style>{css}</style>
            <img class="hero-fire" src={config::asset("voidframe/fire-m.png")} alt="" />
            <img class="hero-car" src={config::asset("voidframe/car.gif")} alt="" />
            <div class="hero-content">
                <StretchedHeadlineMultiline
                    lines={vec![AttrValue::Static("VOID"), AttrValue::Static("FRAME")]}
                    font_size="clamp(4rem, 15vw, 14rem)"
                />
                <p class="hero-tagline">{"WE FRAME THE VOID"}</p>
                <p class="hero-byline">{"Moving images. Unmoved ambition."}</p>
            </div>
            <div class="hero-scroll">
                <span class="hero-scroll-label">{"SCROLL"}</span>
                <div class="hero-scroll-arrow">
                    <svg width="20" height="20" viewBox="0 0 24 24" fill="none"
                        stroke="rgba(255, 255, 255, 0.4)" stroke-width="2"
                        stroke-linecap="round" stroke-linejoin="round">
                        <polyline points="6 9 12 15 18 9"></polyline>
                    </svg>
                </div>
            </div>
        </FullPageContainer>
    }
}
