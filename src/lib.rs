//! Navigation header for the Venja habit tracker.
//!
//! `domain` holds the configuration model and a pure render to a markup
//! tree; `app` holds the Dioxus components that put the same tree on screen.

pub mod config;
pub mod domain;
pub mod shared;

pub mod app;

pub use app::App;
pub use domain::models::{BarTheme, BrandLink, MarkupNode, NavbarConfig, ToggleTarget};
pub use domain::services::navbar_markup;
pub use shared::{NavbarError, Result};
