// Rendering services
// Framework-agnostic, 100% testable

pub mod navbar_markup;
pub use navbar_markup::*;
