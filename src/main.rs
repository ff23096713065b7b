use yew::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod inquiry;
mod reveal;
mod scroll;
mod components {
    pub mod header;
    pub mod icons;
    pub mod progress_bar;
}
mod sections {
    pub mod hero;
    pub mod services;
    pub mod testimonials;
    pub mod about;
    pub mod contact;
    pub mod footer;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    info!("Rendering Landing page");
    html! {
        <Landing />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
