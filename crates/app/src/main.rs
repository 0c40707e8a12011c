use dioxus::prelude::*;

mod loader;
mod routes;
mod session;

use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
