//! Lowering errors with context and suggestions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Codegen error with enough context to point at the offending node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodegenError {
    /// The error message
    pub message: String,
    /// Tag name of the node being lowered, when known
    pub tag: Option<String>,
    /// Helpful suggestion to fix the input
    pub suggestion: Option<String>,
}

impl CodegenError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tag: None,
            suggestion: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// A void element was given children.
    pub fn void_with_children(tag: &str) -> Self {
        Self::new(format!("void element <{tag}> cannot have children"))
            .with_tag(tag)
            .with_suggestion(
                "Void elements like <br> and <img> are self-closing. Move the children to a sibling or wrap them in a container element.",
            )
    }

    /// An attribute name that cannot be emitted safely.
    pub fn invalid_attr_name(tag: &str, name: &str) -> Self {
        Self::new(format!("attribute name {name:?} cannot be emitted as HTML"))
            .with_tag(tag)
            .with_suggestion(
                "Attribute names may not contain whitespace, quotes, '=', '<', '>', '/' or '&'. Rename the attribute; its value is the place for arbitrary text.",
            )
    }

    /// Wrap a lower-level failure from the tree walk.
    pub fn lowering_error(message: String) -> Self {
        Self::new(format!("Failed to lower tree: {message}"))
    }
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Codegen error: {}", self.message)?;

        if let Some(ref tag) = self.tag {
            write!(f, "\n  in <{tag}>")?;
        }

        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n  suggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for CodegenError {}

impl From<anyhow::Error> for CodegenError {
    fn from(err: anyhow::Error) -> Self {
        // Preserve a typed error if the chain carries one
        match err.downcast::<CodegenError>() {
            Ok(typed) => typed,
            Err(err) => Self::lowering_error(format!("{err:#}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_error() {
        let err = CodegenError::new("something broke");
        assert_eq!(err.message, "something broke");
        assert!(err.tag.is_none());
    }

    #[test]
    fn test_void_with_children() {
        let err = CodegenError::void_with_children("br");
        assert!(err.message.contains("<br>"));
        assert_eq!(err.tag.as_deref(), Some("br"));
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn test_display_includes_suggestion() {
        let err = CodegenError::new("bad input")
            .with_tag("img")
            .with_suggestion("check the node");

        let display = format!("{err}");
        assert!(display.contains("Codegen error: bad input"));
        assert!(display.contains("in <img>"));
        assert!(display.contains("suggestion: check the node"));
    }

    #[test]
    fn test_error_json_round_trip() {
        let err = CodegenError::void_with_children("br");
        let json = serde_json::to_string(&err).unwrap();
        let back: CodegenError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.message, err.message);
        assert_eq!(back.tag, err.tag);
        assert_eq!(back.suggestion, err.suggestion);
    }

    #[test]
    fn test_anyhow_downcast_preserves_typed_error() {
        let typed = CodegenError::void_with_children("hr");
        let chained: anyhow::Error = typed.into();
        let back: CodegenError = chained.into();
        assert_eq!(back.tag.as_deref(), Some("hr"));
    }
}
