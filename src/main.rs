use log::{info, Level};
use stylist::yew::Global;
use yew::prelude::*;
use yew_router::prelude::*;

mod audio;
mod config;
mod motion;
mod theme;

mod components {
    pub mod audio_toggle;
    pub mod cursor;
    pub mod form;
    pub mod headline;
    pub mod horizontal_scroll;
    pub mod intro;
    pub mod layout;
    pub mod marquee;
    pub mod service_list;
}

mod sections {
    pub mod contact;
    pub mod hero;
    pub mod marquee_wall;
    pub mod services;
    pub mod story;
}

mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Global css={theme::global_css()} />
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
