pub mod navbar_brand;
pub mod navbar_toggle;

pub use navbar_brand::NavbarBrand;
pub use navbar_toggle::NavbarToggle;
