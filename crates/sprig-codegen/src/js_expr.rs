//! JavaScript expression fragments with escaping discipline

use super::escape::escape_js_string;

/// A fragment of lowered JavaScript source
///
/// Tracks whether content is already valid source or raw text that still
/// needs escaping, which is what prevents both script injection and
/// double-escaping: text crosses the boundary exactly once, at `to_js`.
#[derive(Debug, Clone, PartialEq)]
pub enum JsExpr {
    /// Already-valid source: `h(...)`, `Fragment`, `{id: "app"}`
    Raw(String),

    /// Plain text that will be escaped and quoted when serialized
    Text(String),

    /// A list of expressions, serialized as an array literal
    Array(Vec<JsExpr>),
}

impl JsExpr {
    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn array(values: Vec<JsExpr>) -> Self {
        Self::Array(values)
    }

    /// Serialize to JavaScript source
    pub fn to_js(&self) -> String {
        match self {
            JsExpr::Raw(s) => s.clone(),
            JsExpr::Text(s) => format!("\"{}\"", escape_js_string(s)),
            JsExpr::Array(items) => {
                let elements: Vec<String> = items.iter().map(|v| v.to_js()).collect();
                format!("[{}]", elements.join(", "))
            }
        }
    }
}
