//! # sprig-codegen
//!
//! Lowering for sprig element trees.
//!
//! A declarative tree is just data; this crate turns it into source text in
//! two ways:
//!
//! - [`lower_to_calls`] emits the nested construction calls the declarative
//!   syntax is sugar for: `h("div", {id: "app"}, h("span", null, "hi"))`.
//! - [`render_html`] emits static HTML with default escaping of text and
//!   attribute values.
//!
//! Text content is escaped exactly once in either backend; raw nodes are
//! the single, explicit way around that.

pub mod calls;
pub mod error;
pub mod escape;
pub mod html;
pub mod js_expr;

pub use calls::lower_to_calls;
pub use error::CodegenError;
pub use escape::{
    escape_attr, escape_html, escape_js_string, is_valid_attr_name, is_valid_identifier,
};
pub use html::render_html;
pub use js_expr::JsExpr;

use bon::Builder;

/// Options for construction-call lowering
#[derive(Builder, Debug, Clone)]
pub struct LowerOptions {
    /// Name of the construction function each element lowers to
    #[builder(default = "h".to_string(), into)]
    pub runtime_fn: String,

    /// Identifier emitted for fragment nodes
    #[builder(default = "Fragment".to_string(), into)]
    pub fragment_ident: String,

    /// Name of the runtime helper raw nodes lower through
    #[builder(default = "rawHtml".to_string(), into)]
    pub raw_fn: String,

    /// Indent nested calls across lines instead of emitting one expression
    #[builder(default = false)]
    pub pretty: bool,
}

impl Default for LowerOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = LowerOptions::default();
        assert_eq!(options.runtime_fn, "h");
        assert_eq!(options.fragment_ident, "Fragment");
        assert_eq!(options.raw_fn, "rawHtml");
        assert!(!options.pretty);
    }

    #[test]
    fn test_builder_into_string() {
        let options = LowerOptions::builder().runtime_fn("_jsx").build();
        assert_eq!(options.runtime_fn, "_jsx");
    }
}
