use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::{DEFAULT_BRAND_HREF, DEFAULT_BRAND_TEXT, DEFAULT_THEME, DEFAULT_TOGGLE_TARGET};
use crate::shared::errors::{NavbarError, Result};
use crate::shared::logging::{self, LogOperation};

/// Background variants of the bar container
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarTheme {
    Light,
    Dark,
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    White,
    Transparent,
}

impl BarTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            BarTheme::Light => "light",
            BarTheme::Dark => "dark",
            BarTheme::Primary => "primary",
            BarTheme::Secondary => "secondary",
            BarTheme::Success => "success",
            BarTheme::Danger => "danger",
            BarTheme::Warning => "warning",
            BarTheme::Info => "info",
            BarTheme::White => "white",
            BarTheme::Transparent => "transparent",
        }
    }

    /// Whether the background needs light foreground text
    pub fn is_dark(&self) -> bool {
        matches!(
            self,
            BarTheme::Dark
                | BarTheme::Primary
                | BarTheme::Secondary
                | BarTheme::Success
                | BarTheme::Danger
                | BarTheme::Info
        )
    }

    /// Foreground contrast variant, `light` or `dark`
    pub fn variant(&self) -> &'static str {
        if self.is_dark() { "dark" } else { "light" }
    }
}

impl Default for BarTheme {
    fn default() -> Self {
        DEFAULT_THEME
    }
}

impl fmt::Display for BarTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BarTheme {
    type Err = NavbarError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(BarTheme::Light),
            "dark" => Ok(BarTheme::Dark),
            "primary" => Ok(BarTheme::Primary),
            "secondary" => Ok(BarTheme::Secondary),
            "success" => Ok(BarTheme::Success),
            "danger" => Ok(BarTheme::Danger),
            "warning" => Ok(BarTheme::Warning),
            "info" => Ok(BarTheme::Info),
            "white" => Ok(BarTheme::White),
            "transparent" => Ok(BarTheme::Transparent),
            other => Err(NavbarError::UnknownTheme(other.to_string())),
        }
    }
}

/// The clickable brand label
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandLink {
    pub text: String,
    /// Empty means no navigation
    pub href: String,
}

impl Default for BrandLink {
    fn default() -> Self {
        Self {
            text: DEFAULT_BRAND_TEXT.to_string(),
            href: DEFAULT_BRAND_HREF.to_string(),
        }
    }
}

/// Id of the region a toggle control expands or collapses.
///
/// Always a valid HTML id token: non-empty, no whitespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ToggleTarget(String);

impl ToggleTarget {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(NavbarError::EmptyToggleTarget);
        }
        if id.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(NavbarError::InvalidToggleTarget(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ToggleTarget {
    fn default() -> Self {
        Self(DEFAULT_TOGGLE_TARGET.to_string())
    }
}

impl fmt::Display for ToggleTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ToggleTarget {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = String::deserialize(deserializer)?;
        ToggleTarget::new(id).map_err(serde::de::Error::custom)
    }
}

/// Everything the navigation header needs to render
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NavbarConfigFields", into = "NavbarConfigFields")]
pub struct NavbarConfig {
    pub theme: BarTheme,
    pub brand: BrandLink,
    pub toggle_target: ToggleTarget,
}

impl NavbarConfig {
    pub fn builder() -> NavbarConfigBuilder {
        NavbarConfigBuilder::default()
    }

    /// Parse a host-supplied JSON object. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        match serde_json::from_str::<NavbarConfig>(json) {
            Ok(config) => {
                logging::log_config_built(
                    config.theme.as_str(),
                    &config.brand.text,
                    config.toggle_target.as_str(),
                );
                Ok(config)
            }
            Err(e) => {
                logging::log_config_rejected(LogOperation::ConfigParse, &e.to_string());
                Err(e.into())
            }
        }
    }
}

/// Flat wire shape: `{ theme, brandText, brandHref, toggleTargetId }`
#[derive(Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct NavbarConfigFields {
    theme: BarTheme,
    brand_text: String,
    brand_href: String,
    toggle_target_id: ToggleTarget,
}

impl Default for NavbarConfigFields {
    fn default() -> Self {
        NavbarConfig::default().into()
    }
}

impl From<NavbarConfigFields> for NavbarConfig {
    fn from(fields: NavbarConfigFields) -> Self {
        Self {
            theme: fields.theme,
            brand: BrandLink {
                text: fields.brand_text,
                href: fields.brand_href,
            },
            toggle_target: fields.toggle_target_id,
        }
    }
}

impl From<NavbarConfig> for NavbarConfigFields {
    fn from(config: NavbarConfig) -> Self {
        Self {
            theme: config.theme,
            brand_text: config.brand.text,
            brand_href: config.brand.href,
            toggle_target_id: config.toggle_target,
        }
    }
}

/// Builder for [`NavbarConfig`]. Unset fields fall back to the defaults.
#[derive(Clone, Debug, Default)]
pub struct NavbarConfigBuilder {
    theme: Option<BarTheme>,
    brand_text: Option<String>,
    brand_href: Option<String>,
    toggle_target: Option<String>,
}

impl NavbarConfigBuilder {
    pub fn theme(mut self, theme: BarTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn brand_text(mut self, text: impl Into<String>) -> Self {
        self.brand_text = Some(text.into());
        self
    }

    pub fn brand_href(mut self, href: impl Into<String>) -> Self {
        self.brand_href = Some(href.into());
        self
    }

    pub fn toggle_target(mut self, id: impl Into<String>) -> Self {
        self.toggle_target = Some(id.into());
        self
    }

    pub fn build(self) -> Result<NavbarConfig> {
        let toggle_target = match self.toggle_target {
            Some(id) => ToggleTarget::new(id).inspect_err(|e| {
                logging::log_config_rejected(LogOperation::ConfigBuild, &e.to_string());
            })?,
            None => ToggleTarget::default(),
        };

        let defaults = BrandLink::default();
        let config = NavbarConfig {
            theme: self.theme.unwrap_or_default(),
            brand: BrandLink {
                text: self.brand_text.unwrap_or(defaults.text),
                href: self.brand_href.unwrap_or(defaults.href),
            },
            toggle_target,
        };

        logging::log_config_built(
            config.theme.as_str(),
            &config.brand.text,
            config.toggle_target.as_str(),
        );
        Ok(config)
    }
}
