//! Compile-time defaults for the navigation header.
//!
//! The header has no runtime configuration source: these literals are what
//! `NavbarConfig::default()` renders, and what builder fields fall back to.

use crate::domain::models::BarTheme;

/// Background theme used when none is configured.
pub const DEFAULT_THEME: BarTheme = BarTheme::Light;

/// Brand label shown in the header.
pub const DEFAULT_BRAND_TEXT: &str = "Venja";

/// Brand link target. Empty means the brand does not navigate anywhere.
pub const DEFAULT_BRAND_HREF: &str = "";

/// Id of the collapsible region the toggle controls.
pub const DEFAULT_TOGGLE_TARGET: &str = "basic-navbar-nav";

/// Accessible name announced for the toggle button.
pub const TOGGLE_ARIA_LABEL: &str = "Toggle navigation";

/// Default log filter for the native binary.
pub const DEFAULT_LOG_LEVEL: &str = "info";
