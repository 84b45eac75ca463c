use dioxus::prelude::*;

mod api;
mod catalog;
mod components;

use components::AppShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "SongGrid" }

        // Theme color for mobile browsers
        document::Meta { name: "theme-color", content: "#111827" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }

        document::Stylesheet { href: TAILWIND_CSS }
        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
