use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

mod config;
mod components {
    pub mod audio_toggle;
    pub mod background;
    pub mod booking;
    pub mod carousel;
    pub mod detail_overlay;
    pub mod hotspot;
    pub mod icon;
    pub mod particles;
    pub mod presence;
    pub mod subscribe;
}
mod pages {
    pub mod venue;
}
mod venue {
    pub mod carousel;
    pub mod catalog;
    pub mod forms;
    pub mod icon;
    pub mod particle;
    pub mod playback;
    pub mod state;
}

use pages::venue::InteractiveVenue;
use venue::catalog::VenueCatalog;

fn load_catalog() -> VenueCatalog {
    match VenueCatalog::load_embedded() {
        Ok(catalog) => {
            info!("Loaded {} venue areas", catalog.len());
            catalog
        }
        Err(e) => {
            // The rest of the page still works without hotspots.
            error!("Venue content unavailable: {}", e);
            VenueCatalog::default()
        }
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    catalog: Rc<VenueCatalog>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <InteractiveVenue catalog={props.catalog.clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting venue display");
    let catalog = Rc::new(load_catalog());
    yew::Renderer::<App>::with_props(AppProps { catalog }).render();
}
