//! Chainable tree construction
//!
//! The builder is the "construction call" side of the declarative syntax:
//! a nested tree literal lowers to exactly these calls.
//!
//! ```
//! use sprig_tree::{el, text};
//!
//! let tree = el("div")
//!     .attr("id", "app")
//!     .child(el("span").child(text("hi")).build())
//!     .build();
//! ```

use crate::error::TreeError;
use crate::node::{Tag, VElement, VNode};
use crate::props::{PropValue, Props};

/// Builder for a single element and its subtree
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    tag: Tag,
    props: Props,
    key: Option<String>,
    children: Vec<VNode>,
}

impl ElementBuilder {
    fn new(tag: Tag) -> Self {
        Self {
            tag,
            props: Props::new(),
            key: None,
            children: Vec::new(),
        }
    }

    /// Set a single attribute. Later calls override earlier values for the
    /// same name, including values supplied by a previous `spread`.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.set(name, value);
        self
    }

    /// Spread a whole attribute bag, later keys winning.
    pub fn spread(mut self, props: Props) -> Self {
        self.props.spread(props);
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn child(mut self, node: VNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = VNode>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn build(self) -> VNode {
        VNode::Element(VElement {
            tag: self.tag,
            props: self.props,
            key: self.key,
            children: self.children,
        })
    }
}

/// Start building an intrinsic or component element from a tag name.
///
/// Panics on an invalid tag name; use [`try_el`] for fallible construction
/// from untrusted input.
pub fn el(tag: &str) -> ElementBuilder {
    match try_el(tag) {
        Ok(builder) => builder,
        Err(err) => panic!("invalid tag {tag:?}: {err}"),
    }
}

/// Fallible variant of [`el`] for tag names from untrusted input.
pub fn try_el(tag: &str) -> Result<ElementBuilder, TreeError> {
    Ok(ElementBuilder::new(Tag::parse(tag)?))
}

/// Start building a component element, regardless of name casing.
pub fn component(name: &str) -> ElementBuilder {
    ElementBuilder::new(Tag::Component(name.to_string()))
}

/// A plain text node; escaped by default when lowered or rendered.
pub fn text(value: impl Into<String>) -> VNode {
    VNode::text(value)
}

/// Pre-rendered markup that bypasses escaping.
///
/// The caller is responsible for the safety of the markup: injecting
/// untrusted content through this constructor is a script-injection hole,
/// which is exactly why it is a separate, loudly named entry point.
pub fn raw_html(value: impl Into<String>) -> VNode {
    VNode::raw(value)
}

/// Group siblings without introducing an element.
pub fn fragment(children: impl IntoIterator<Item = VNode>) -> VNode {
    VNode::Fragment {
        children: children.into_iter().collect(),
    }
}
