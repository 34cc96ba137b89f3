use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod controller;
mod diagnostics;

use components::MoodPlaylistApp;
use config::AppConfig;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(AppConfig::resolve);
    use_context_provider(|| config.clone());

    rsx! {
        document::Title { "MoodBeats" }
        document::Meta { name: "theme-color", content: "#111428" }
        document::Stylesheet { href: APP_CSS }

        MoodPlaylistApp {}
    }
}
