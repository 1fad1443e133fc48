//! Service list section: EXPERTISE / OUR CRAFT title over the interactive
//! list, graffiti scattered behind.

use yew::prelude::*;

use crate::components::layout::SectionTitle;
use crate::components::service_list::InteractiveServiceList;
use crate::config;
use crate::theme;

const SERVICES: [&str; 6] = [
    "Film Production",
    "Commercial Video",
    "Motion Design",
    "Brand Films",
    "Music Videos",
    "Post Production",
];

#[function_component(ServiceListSection)]
pub fn service_list_section() -> Html {
    let items: Vec<AttrValue> = SERVICES
        .iter()
        .map(|s| AttrValue::Static(*s))
        .collect();

    let css = format!(
        r#"
            .services {{
                position: relative;
                background-color: {bg};
                padding: 8rem 4rem;
                min-height: 100vh;
                display: flex;
                flex-direction: column;
                justify-content: center;
                overflow: hidden;
            }}
            .services .services-decoration {{
                position: absolute;
                filter: invert(1);
                pointer-events: none;
            }}
            .services .section-title {{
                margin-bottom: 3rem;
                position: relative;
                z-index: 1;
            }}
            .services .service-list {{
                position: relative;
                z-index: 1;
            }}
        "#,
        bg = theme::BG,
    );

    html! {
        <section class="services">
            <style>{css}</style>
            <img
                class="services-decoration"
                style="right: 5%; top: 8%; width: 180px; opacity: 0.06;"
                src={config::asset("voidframe/prise-grafyti-1-stop.png")}
                alt=""
            />
            <img
                class="services-decoration"
                style="left: -2%; bottom: 15%; width: 220px; opacity: 0.05;"
                src={config::asset("voidframe/prise-grafyti-2-stop.png")}
                alt=""
            />
            <img
                class="services-decoration"
                style="right: 8%; bottom: 5%; width: 160px; opacity: 0.04;"
                src={config::asset("voidframe/prise-grafyti-3-stop.png")}
                alt=""
            />
            <SectionTitle overline="EXPERTISE" title="OUR CRAFT" />
            <InteractiveServiceList {items} hover_blip={true} />
        </section>
    }
}
