use log::info;
use yew::prelude::*;

mod config;
mod content;
mod error;
mod state;
mod motion {
    pub mod dom;
    pub mod easing;
    pub mod hooks;
    pub mod reveal;
    pub mod scroll;
    #[cfg(test)]
    pub mod testing;
}
mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod heading;
    pub mod hero;
    pub mod nav;
    pub mod progress_bar;
    pub mod rates;
    pub mod services;
    pub mod why_us;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <Home />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting Prime Group site with {:?} motion", config::motion().scroll.easing);
    yew::Renderer::<App>::new().render();
}
