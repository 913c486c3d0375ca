//! Framework-independent markup tree
//!
//! The navigation header is described as a plain tree of elements so it can
//! be compared, serialized, and inspected without a running UI runtime. The
//! Dioxus components render the same shape into the DOM.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupNode {
    pub tag: String,
    /// Sorted so serialization is stable
    pub attributes: BTreeMap<String, String>,
    pub text: Option<String>,
    pub children: Vec<MarkupNode>,
}

impl MarkupNode {
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: MarkupNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Depth-first search, including `self`
    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&MarkupNode> {
        if self.attr(name) == Some(value) {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find_by_attr(name, value))
    }

    /// Serialize to an HTML string. Text precedes child elements.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&escape_html(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Whether the region named by a toggle's `aria-controls` exists in `tree`.
///
/// Returns `false` when the tree has no toggle at all.
pub fn has_paired_region(tree: &MarkupNode) -> bool {
    fn toggle_target(node: &MarkupNode) -> Option<&str> {
        node.attr("aria-controls")
            .or_else(|| node.children.iter().find_map(toggle_target))
    }

    match toggle_target(tree) {
        Some(id) => tree.find_by_attr("id", id).is_some(),
        None => false,
    }
}
