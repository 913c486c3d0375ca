use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavbarError {
    #[error("Toggle target id must not be empty")]
    EmptyToggleTarget,

    #[error("Invalid toggle target id: {0:?} (ids cannot contain whitespace)")]
    InvalidToggleTarget(String),

    #[error("Unknown bar theme: {0}")]
    UnknownTheme(String),

    #[error("Invalid navbar configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NavbarError>;
