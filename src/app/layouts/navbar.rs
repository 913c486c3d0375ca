use dioxus::prelude::*;

use crate::app::components::{NavbarBrand, NavbarToggle};
use crate::domain::models::{BarTheme, NavbarConfig, ToggleTarget};
use crate::domain::services::bar_class;

/// Top navigation header: brand link followed by the collapse toggle.
///
/// Starts from `config` (or the defaults) and applies whichever individual
/// props are set on top.
#[component]
pub fn Navbar(
    config: Option<NavbarConfig>,
    theme: Option<BarTheme>,
    brand_text: Option<String>,
    brand_href: Option<String>,
    toggle_target: Option<ToggleTarget>,
) -> Element {
    let config = apply_overrides(
        config.unwrap_or_default(),
        theme,
        brand_text,
        brand_href,
        toggle_target,
    );
    let class = bar_class(config.theme);
    let theme = config.theme.as_str();

    rsx! {
        nav {
            class: "{class}",
            "data-bg": theme,
            NavbarBrand {
                text: config.brand.text,
                href: config.brand.href,
            }
            NavbarToggle { target: config.toggle_target }
        }
    }
}

fn apply_overrides(
    mut config: NavbarConfig,
    theme: Option<BarTheme>,
    brand_text: Option<String>,
    brand_href: Option<String>,
    toggle_target: Option<ToggleTarget>,
) -> NavbarConfig {
    if let Some(theme) = theme {
        config.theme = theme;
    }
    if let Some(text) = brand_text {
        config.brand.text = text;
    }
    if let Some(href) = brand_href {
        config.brand.href = href;
    }
    if let Some(target) = toggle_target {
        config.toggle_target = target;
    }
    config
}
