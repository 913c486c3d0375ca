//! Pure rendering of the navigation header into a [`MarkupNode`] tree.
//!
//! The class and attribute helpers here are shared with the Dioxus
//! components so the DOM and the tree never drift apart.

use crate::config::TOGGLE_ARIA_LABEL;
use crate::domain::models::{BarTheme, MarkupNode, NavbarConfig};

pub const BRAND_CLASS: &str = "navbar-brand";
pub const TOGGLER_CLASS: &str = "navbar-toggler collapsed";
pub const TOGGLER_ICON_CLASS: &str = "navbar-toggler-icon";

/// Class list of the bar container for `theme`
pub fn bar_class(theme: BarTheme) -> String {
    format!(
        "navbar navbar-expand-lg navbar-{} bg-{}",
        theme.variant(),
        theme.as_str()
    )
}

/// Render the header: a `nav` bar holding the brand link, then the toggle.
///
/// Emits no log events; callers that want render diagnostics log the
/// returned tree themselves.
pub fn navbar_markup(config: &NavbarConfig) -> MarkupNode {
    let brand = MarkupNode::element("a")
        .with_attr("class", BRAND_CLASS)
        .with_attr("href", config.brand.href.as_str())
        .with_text(config.brand.text.as_str());

    let toggle = MarkupNode::element("button")
        .with_attr("type", "button")
        .with_attr("class", TOGGLER_CLASS)
        .with_attr("aria-controls", config.toggle_target.as_str())
        .with_attr("aria-label", TOGGLE_ARIA_LABEL)
        .with_attr("aria-expanded", "false")
        .with_child(MarkupNode::element("span").with_attr("class", TOGGLER_ICON_CLASS));

    MarkupNode::element("nav")
        .with_attr("class", bar_class(config.theme))
        .with_attr("data-bg", config.theme.as_str())
        .with_child(brand)
        .with_child(toggle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ToggleTarget, has_paired_region};

    #[test]
    fn test_default_render() {
        let tree = navbar_markup(&NavbarConfig::default());

        assert_eq!(tree.tag, "nav");
        assert_eq!(tree.attr("data-bg"), Some("light"));
        assert_eq!(tree.attr("class"), Some("navbar navbar-expand-lg navbar-light bg-light"));
        assert_eq!(tree.children.len(), 2);

        let brand = &tree.children[0];
        assert_eq!(brand.tag, "a");
        assert_eq!(brand.text.as_deref(), Some("Venja"));
        assert_eq!(brand.attr("href"), Some(""));

        let toggle = &tree.children[1];
        assert_eq!(toggle.tag, "button");
        assert_eq!(toggle.attr("aria-controls"), Some("basic-navbar-nav"));
        assert_eq!(toggle.attr("aria-label"), Some("Toggle navigation"));
    }

    #[test]
    fn test_custom_brand_changes_only_brand() {
        let config = NavbarConfig::builder()
            .brand_text("Acme")
            .brand_href("/")
            .build()
            .unwrap();
        let tree = navbar_markup(&config);
        let default_tree = navbar_markup(&NavbarConfig::default());

        assert_eq!(tree.children[0].text.as_deref(), Some("Acme"));
        assert_eq!(tree.children[0].attr("href"), Some("/"));
        assert_eq!(tree.attributes, default_tree.attributes);
        assert_eq!(tree.children[1], default_tree.children[1]);
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = NavbarConfig::builder()
            .theme(BarTheme::Dark)
            .toggle_target("main-menu")
            .build()
            .unwrap();
        let first = navbar_markup(&config);
        let second = navbar_markup(&config);
        assert_eq!(first, second);
        assert_eq!(first.to_html(), second.to_html());
    }

    #[test]
    fn test_render_leaves_config_untouched() {
        let config = NavbarConfig::default();
        let before = config.clone();
        for _ in 0..10 {
            navbar_markup(&config);
        }
        assert_eq!(config, before);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_render_emits_no_events() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};
        use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

        struct EventCounter(Arc<AtomicUsize>);

        impl<S: tracing::Subscriber> Layer<S> for EventCounter {
            fn on_event(&self, _event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(EventCounter(count.clone()));
        tracing::subscriber::with_default(subscriber, || {
            let config = NavbarConfig::default();
            for _ in 0..3 {
                navbar_markup(&config);
            }
        });
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_brand_precedes_toggle_for_every_theme() {
        for theme in [
            BarTheme::Light,
            BarTheme::Dark,
            BarTheme::Primary,
            BarTheme::Warning,
            BarTheme::Transparent,
        ] {
            let config = NavbarConfig::builder().theme(theme).build().unwrap();
            let tree = navbar_markup(&config);
            let tags: Vec<&str> = tree.children.iter().map(|c| c.tag.as_str()).collect();
            assert_eq!(tags, ["a", "button"]);
            assert_eq!(tree.attr("data-bg"), Some(theme.as_str()));
        }
    }

    #[test]
    fn test_toggle_target_is_copied_exactly() {
        let config = NavbarConfig {
            toggle_target: ToggleTarget::new("nav-\u{e9}").unwrap(),
            ..NavbarConfig::default()
        };
        let tree = navbar_markup(&config);
        assert_eq!(tree.children[1].attr("aria-controls"), Some("nav-\u{e9}"));
    }

    #[test]
    fn test_toggle_region_is_not_rendered() {
        let tree = navbar_markup(&NavbarConfig::default());
        assert!(!has_paired_region(&tree));
    }

    #[test]
    fn test_bar_class_dark_theme() {
        assert_eq!(bar_class(BarTheme::Dark), "navbar navbar-expand-lg navbar-dark bg-dark");
    }

    #[test]
    fn test_default_html() {
        let html = navbar_markup(&NavbarConfig::default()).to_html();
        assert_eq!(
            html,
            concat!(
                r#"<nav class="navbar navbar-expand-lg navbar-light bg-light" data-bg="light">"#,
                r#"<a class="navbar-brand" href="">Venja</a>"#,
                r#"<button aria-controls="basic-navbar-nav" aria-expanded="false" aria-label="Toggle navigation" class="navbar-toggler collapsed" type="button">"#,
                r#"<span class="navbar-toggler-icon"></span>"#,
                "</button></nav>"
            )
        );
    }
}
