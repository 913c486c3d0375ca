use dioxus::prelude::*;

use crate::config::TOGGLE_ARIA_LABEL;
use crate::domain::models::ToggleTarget;
use crate::domain::services::{TOGGLER_CLASS, TOGGLER_ICON_CLASS};

/// Collapse toggle of the header.
///
/// Only announces which region it controls through `aria-controls`; it has
/// no click handler and never expands anything.
#[component]
pub fn NavbarToggle(target: ToggleTarget) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: TOGGLER_CLASS,
            "aria-controls": "{target}",
            "aria-label": TOGGLE_ARIA_LABEL,
            "aria-expanded": "false",
            span { class: TOGGLER_ICON_CLASS }
        }
    }
}
