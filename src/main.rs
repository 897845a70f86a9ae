use yew::prelude::*;

mod config;

mod components {
    pub mod contact_popup;
    pub mod countdown;
    pub mod email_form;
    pub mod particles;
    pub mod spline_hero;
    pub mod status_bar;
}

mod pages {
    pub mod landing;
}

mod utils {
    pub mod api;
    pub mod listeners;
    pub mod parallax;
    pub mod scene;
    pub mod submission;
    pub mod viewport;
}

use pages::landing::Landing;
use utils::submission::Submitter;

#[function_component(App)]
fn app() -> Html {
    let submitter = use_state(Submitter::from_config);

    html! {
        <Landing submitter={(*submitter).clone()} />
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    yew::Renderer::<App>::new().render();
}
