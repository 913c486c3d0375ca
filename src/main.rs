//! Venja web - entry point
//!
//! Launches the `App` root on whichever renderer feature is enabled
//! (`web` or `desktop`).

use venja_web::domain::models::has_paired_region;
use venja_web::shared::logging;
use venja_web::{App, NavbarConfig, navbar_markup};

/// Log the shape of the header about to be launched
fn log_navbar_diagnostics(config: &NavbarConfig) {
    let tree = navbar_markup(config);
    logging::log_render(config.theme.as_str(), tree.children.len());
    if !has_paired_region(&tree) {
        logging::log_unpaired_toggle(config.toggle_target.as_str());
    }
}

// Browser entry point
#[cfg(target_arch = "wasm32")]
fn main() -> anyhow::Result<()> {
    web_sys::console::log_1(&"[WASM] Venja navbar initialized".into());

    let config = NavbarConfig::builder().build()?;
    log_navbar_diagnostics(&config);
    dioxus::LaunchBuilder::new().with_context(config).launch(App);
    Ok(())
}

// Native entry point (desktop)
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use venja_web::config::DEFAULT_LOG_LEVEL;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(DEFAULT_LOG_LEVEL))
        .init();

    let config = NavbarConfig::builder().build()?;
    tracing::info!(
        theme = config.theme.as_str(),
        brand_text = %config.brand.text,
        "Starting Venja navbar..."
    );
    log_navbar_diagnostics(&config);

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
    Ok(())
}
