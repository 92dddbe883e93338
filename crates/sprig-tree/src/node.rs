//! Element-tree node model
//!
//! A [`VNode`] is the in-memory form of a declarative tree literal. The
//! variants mirror what the syntax can express: elements with attribute
//! bags and children, plain text, pre-rendered raw markup, and fragments
//! that group siblings without introducing a node of their own.

use serde::{Deserialize, Serialize};

use crate::error::TreeError;
use crate::props::Props;

/// Element tag, split by how it lowers
///
/// Intrinsic tags (lowercase) lower to quoted strings; component tags
/// (leading capital) lower to bare identifiers resolved at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum Tag {
    Intrinsic(String),
    Component(String),
}

impl Tag {
    /// Parse and validate a tag name.
    ///
    /// A leading ASCII uppercase letter means component, anything else is
    /// an intrinsic element. Empty names and names containing whitespace
    /// are rejected.
    pub fn parse(name: &str) -> Result<Self, TreeError> {
        let Some(first) = name.chars().next() else {
            return Err(TreeError::EmptyTag);
        };
        if name.chars().any(char::is_whitespace) {
            return Err(TreeError::TagWhitespace(name.to_string()));
        }
        if !first.is_alphabetic() {
            return Err(TreeError::TagInvalidStart(name.to_string()));
        }

        if first.is_ascii_uppercase() {
            Ok(Self::Component(name.to_string()))
        } else {
            Ok(Self::Intrinsic(name.to_string()))
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Intrinsic(name) | Self::Component(name) => name,
        }
    }

    pub fn is_component(&self) -> bool {
        matches!(self, Self::Component(_))
    }
}

/// An element node: tag, attributes, optional key, children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VElement {
    pub tag: Tag,
    #[serde(default, skip_serializing_if = "Props::is_empty")]
    pub props: Props,
    /// Stable identity used by keyed reconciliation of sibling lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<VNode>,
}

/// A node in the declarative tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VNode {
    Element(VElement),
    Text { value: String },
    /// Pre-rendered markup that bypasses escaping. Opaque to the differ.
    Raw { value: String },
    Fragment { children: Vec<VNode> },
}

impl VNode {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
        }
    }

    pub fn raw(value: impl Into<String>) -> Self {
        Self::Raw {
            value: value.into(),
        }
    }

    /// Splice fragments into their parent's child list.
    ///
    /// After flattening, fragments only remain at the root; empty fragments
    /// inside a child list vanish entirely. Diffing and lowering both work
    /// on flattened trees so that `fragment([a, b])` and the siblings
    /// `a, b` are indistinguishable as children.
    pub fn flatten(self) -> VNode {
        match self {
            Self::Element(mut element) => {
                element.children = flatten_children(element.children);
                Self::Element(element)
            }
            Self::Fragment { children } => Self::Fragment {
                children: flatten_children(children),
            },
            other => other,
        }
    }

    /// Child list of this node, if the variant has one.
    pub fn children(&self) -> Option<&[VNode]> {
        match self {
            Self::Element(element) => Some(&element.children),
            Self::Fragment { children } => Some(children),
            _ => None,
        }
    }
}

fn flatten_children(children: Vec<VNode>) -> Vec<VNode> {
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        match child.flatten() {
            VNode::Fragment { children } => out.extend(children),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_parse_intrinsic() {
        assert_eq!(Tag::parse("div").unwrap(), Tag::Intrinsic("div".into()));
        assert_eq!(Tag::parse("span").unwrap(), Tag::Intrinsic("span".into()));
    }

    #[test]
    fn test_tag_parse_component() {
        assert_eq!(
            Tag::parse("Button").unwrap(),
            Tag::Component("Button".into())
        );
        assert!(Tag::parse("Button").unwrap().is_component());
    }

    #[test]
    fn test_tag_parse_rejects_bad_names() {
        assert_eq!(Tag::parse(""), Err(TreeError::EmptyTag));
        assert_eq!(
            Tag::parse("my tag"),
            Err(TreeError::TagWhitespace("my tag".into()))
        );
        assert_eq!(
            Tag::parse("1up"),
            Err(TreeError::TagInvalidStart("1up".into()))
        );
    }

    #[test]
    fn test_flatten_splices_fragments() {
        let tree = VNode::Element(VElement {
            tag: Tag::parse("ul").unwrap(),
            props: Props::new(),
            key: None,
            children: vec![
                VNode::text("a"),
                VNode::Fragment {
                    children: vec![VNode::text("b"), VNode::text("c")],
                },
                VNode::text("d"),
            ],
        });

        let flat = tree.flatten();
        let children = flat.children().unwrap();
        assert_eq!(children.len(), 4);
        assert_eq!(children[1], VNode::text("b"));
        assert_eq!(children[3], VNode::text("d"));
    }

    #[test]
    fn test_flatten_removes_empty_fragments() {
        let tree = VNode::Element(VElement {
            tag: Tag::parse("div").unwrap(),
            props: Props::new(),
            key: None,
            children: vec![
                VNode::Fragment { children: vec![] },
                VNode::text("only"),
            ],
        });

        let flat = tree.flatten();
        assert_eq!(flat.children().unwrap().len(), 1);
    }

    #[test]
    fn test_flatten_handles_nested_fragments() {
        let tree = VNode::Fragment {
            children: vec![VNode::Fragment {
                children: vec![VNode::Fragment {
                    children: vec![VNode::text("deep")],
                }],
            }],
        };

        let flat = tree.flatten();
        assert_eq!(flat.children().unwrap(), &[VNode::text("deep")]);
    }
}
