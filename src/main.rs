use log::info;
use yew::prelude::*;

mod config;
mod contact;
mod content;
mod navigation;
mod theme;

mod components {
    pub mod icon;
    pub mod nav;
    pub mod notification;
}
mod pages {
    pub mod portfolio;
}

use pages::portfolio::Page;

#[function_component]
fn App() -> Html {
    info!("Rendering portfolio page");
    html! { <Page /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
