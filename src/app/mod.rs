pub mod components;
pub mod layouts;

use dioxus::prelude::*;

use crate::domain::models::NavbarConfig;
use layouts::Navbar;

/// Root component. Renders the header with the `NavbarConfig` provided as
/// launch context, or the defaults when none was provided.
#[component]
pub fn App() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let config = try_use_context::<NavbarConfig>().unwrap_or_default();

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        Navbar { config }
    }
}
