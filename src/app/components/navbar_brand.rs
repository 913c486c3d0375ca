use dioxus::prelude::*;

use crate::domain::services::BRAND_CLASS;

/// Brand label of the header. An empty `href` renders an inert link.
#[component]
pub fn NavbarBrand(text: String, href: String) -> Element {
    rsx! {
        a {
            class: BRAND_CLASS,
            href: "{href}",
            "{text}"
        }
    }
}
