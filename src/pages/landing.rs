//! The landing page: composition root for the whole experience.
//!
//! Audio context on the outside, the global interaction layers (cursor,
//! intro, sound toggle) next, then the five sections in scroll order. The
//! main content sits at zero opacity until the intro reports done.

use yew::prelude::*;

use crate::audio::AudioProvider;
use crate::components::audio_toggle::AudioToggle;
use crate::components::cursor::CustomCursor;
use crate::components::intro::LoadingIntro;
use crate::sections::contact::ContactSection;
use crate::sections::hero::HeroSection;
use crate::sections::marquee_wall::MarqueeSection;
use crate::sections::services::ServiceListSection;
use crate::sections::story::HorizontalStorySection;

#[function_component(Landing)]
pub fn landing() -> Html {
    let loaded = use_state(|| false);

    // Scroll to top only on initial mount.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let on_intro_complete = {
        let loaded = loaded.clone();
        Callback::from(move |_| loaded.set(true))
    };

    html! {
        <AudioProvider>
            <style>
                {r#"
                    .landing-main {
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .landing-main.loaded {
                        opacity: 1;
                    }
                "#}
            </style>
            <CustomCursor />
            <LoadingIntro
                brand="VOIDFRAME"
                tagline="WE FRAME THE VOID"
                on_complete={on_intro_complete}
            />
            <div class={classes!("landing-main", (*loaded).then(|| "loaded"))}>
                <AudioToggle />
                <HeroSection />
                <HorizontalStorySection />
                <ServiceListSection />
                <MarqueeSection />
                <ContactSection />
            </div>
        </AudioProvider>
    }
}
