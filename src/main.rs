mod components;
mod config;
mod deck;
mod measure;
mod primitives;
mod swap;

use dioxus::prelude::*;
use config::DeckConfig;
use deck::{Slide, Stage, Title};

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Title {},
    #[route("/slide/:index/:step")]
    Slide { index: usize, step: usize },
}

#[allow(non_snake_case)]
fn Shell() -> Element {
    rsx! {
        Stage { Outlet::<Route> {} }
    }
}

#[allow(non_snake_case)]
fn App() -> Element {
    // Read once; every transition on every slide shares these timings.
    use_context_provider(DeckConfig::from_location);

    rsx! {
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}
