// Domain models
// Pure Rust, no framework dependencies

pub mod markup;
pub mod navbar;

pub use markup::{MarkupNode, has_paired_region};
pub use navbar::{BarTheme, BrandLink, NavbarConfig, NavbarConfigBuilder, ToggleTarget};
