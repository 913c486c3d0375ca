//! Structured logging for the navigation header
//!
//! Every event carries an `operation` field so render and configuration
//! events can be filtered apart. Nothing here installs a subscriber; the
//! binary does that.

/// Operations that emit log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    ConfigBuild,
    ConfigParse,
    Render,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::ConfigBuild => "config_build",
            LogOperation::ConfigParse => "config_parse",
            LogOperation::Render => "render",
        }
    }
}

/// Log a successfully validated configuration
pub fn log_config_built(theme: &str, brand_text: &str, toggle_target: &str) {
    tracing::debug!(
        operation = LogOperation::ConfigBuild.as_str(),
        theme = theme,
        brand_text = brand_text,
        toggle_target = toggle_target,
        "Navbar configuration built"
    );
}

/// Log a configuration rejected during validation
pub fn log_config_rejected(operation: LogOperation, error: &str) {
    tracing::warn!(
        operation = operation.as_str(),
        error = error,
        "Navbar configuration rejected"
    );
}

/// Log a render of the header tree
pub fn log_render(theme: &str, child_count: usize) {
    tracing::trace!(
        operation = LogOperation::Render.as_str(),
        theme = theme,
        child_count = child_count,
        "Rendered navbar markup"
    );
}

/// Log a toggle whose controlled region is absent from the tree
pub fn log_unpaired_toggle(toggle_target: &str) {
    tracing::debug!(
        operation = LogOperation::Render.as_str(),
        toggle_target = toggle_target,
        "Toggle target has no matching region in this tree"
    );
}
