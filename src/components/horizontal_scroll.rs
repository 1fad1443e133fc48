//! Vertical-scroll-driven horizontal section.
//!
//! The wrapper reserves the vertical room, a sticky inner viewport holds
//! the panel track, and a [`ScrollScene`] steers the track's translation
//! from the window scroll position. One scrolled pixel moves the track one
//! pixel.

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::motion::{ScrollScene, ScrollSceneOptions};

#[derive(Properties, PartialEq)]
pub struct HorizontalScrollSectionProps {
    /// Number of viewport-wide panels in the track. Two at minimum; the
    /// snap stop spacing is undefined below that.
    pub panel_count: usize,
    #[prop_or(false)]
    pub snap: bool,
    #[prop_or_default]
    pub on_progress: Option<Callback<f64>>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(HorizontalScrollSection)]
pub fn horizontal_scroll_section(props: &HorizontalScrollSectionProps) -> Html {
    let wrapper_ref = use_node_ref();
    let track_ref = use_node_ref();

    {
        let wrapper_ref = wrapper_ref.clone();
        let track_ref = track_ref.clone();
        let on_progress = props.on_progress.clone();
        use_effect_with_deps(
            move |&(panel_count, snap)| {
                let scene = wrapper_ref
                    .cast::<HtmlElement>()
                    .zip(track_ref.cast::<HtmlElement>())
                    .and_then(|(wrapper, track)| {
                        ScrollScene::engage(
                            wrapper,
                            track,
                            ScrollSceneOptions {
                                panel_count,
                                snap,
                                on_progress,
                            },
                        )
                    });
                move || {
                    if let Some(scene) = scene {
                        scene.release();
                    }
                }
            },
            (props.panel_count, props.snap),
        );
    }

    html! {
        <div class={classes!("hscroll", props.class.clone())} ref={wrapper_ref}>
            <style>
                {r#"
                    .hscroll {
                        position: relative;
                    }
                    .hscroll .hscroll-viewport {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                        overflow: hidden;
                    }
                    .hscroll .hscroll-track {
                        display: flex;
                        flex-wrap: nowrap;
                        width: max-content;
                        height: 100%;
                    }
                    .hpanel {
                        width: 100vw;
                        height: 100%;
                        flex-shrink: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        position: relative;
                    }
                "#}
            </style>
            <div class="hscroll-viewport">
                <div class="hscroll-track" ref={track_ref}>
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HorizontalPanelProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// One viewport-wide slice of the track.
#[function_component(HorizontalPanel)]
pub fn horizontal_panel(props: &HorizontalPanelProps) -> Html {
    html! {
        <div class={classes!("hpanel", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
