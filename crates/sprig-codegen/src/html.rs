//! Static HTML rendering with default escaping

use anyhow::{Result, anyhow};
use sprig_tree::{PropValue, Tag, VElement, VNode};

use crate::error::CodegenError;
use crate::escape::{escape_attr, escape_html, is_valid_attr_name};

/// Elements that self-close and cannot hold children
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Render a tree to static HTML.
///
/// Text and attribute values are entity-escaped by default; only
/// [`Raw`](VNode::Raw) nodes pass through verbatim. Component tags cannot
/// be rendered statically and are rejected.
pub fn render_html(node: &VNode) -> Result<String, CodegenError> {
    let flattened = node.clone().flatten();
    let mut out = String::new();
    write_node(&flattened, &mut out).map_err(CodegenError::from)?;
    Ok(out)
}

fn write_node(node: &VNode, out: &mut String) -> Result<()> {
    match node {
        VNode::Text { value } => {
            out.push_str(&escape_html(value));
            Ok(())
        }
        VNode::Raw { value } => {
            // Explicit escape hatch: the caller vouched for this markup
            out.push_str(value);
            Ok(())
        }
        VNode::Fragment { children } => {
            for child in children {
                write_node(child, out)?;
            }
            Ok(())
        }
        VNode::Element(element) => write_element(element, out),
    }
}

fn write_element(element: &VElement, out: &mut String) -> Result<()> {
    let name = match &element.tag {
        Tag::Intrinsic(name) => name,
        Tag::Component(name) => {
            return Err(anyhow!(CodegenError::new(format!(
                "component <{name}> cannot be rendered to static HTML"
            ))
            .with_tag(name.clone())
            .with_suggestion(
                "Resolve components to intrinsic elements before rendering, or lower to construction calls instead.",
            )));
        }
    };

    out.push('<');
    out.push_str(name);

    for (attr_name, value) in element.props.iter() {
        // Names are emitted bare, so a malformed one is rejected outright
        if !is_valid_attr_name(attr_name) {
            return Err(anyhow!(CodegenError::invalid_attr_name(name, attr_name)));
        }
        match value {
            // False booleans and nulls drop the attribute entirely
            PropValue::Bool(false) | PropValue::Null => {}
            PropValue::Bool(true) => {
                out.push(' ');
                out.push_str(attr_name);
            }
            PropValue::String(s) => {
                out.push(' ');
                out.push_str(attr_name);
                out.push_str("=\"");
                out.push_str(&escape_attr(s));
                out.push('"');
            }
            PropValue::Number(n) => {
                out.push(' ');
                out.push_str(attr_name);
                out.push_str("=\"");
                out.push_str(&n.to_string());
                out.push('"');
            }
        }
    }

    if VOID_ELEMENTS.contains(&name.as_str()) {
        if !element.children.is_empty() {
            return Err(anyhow!(CodegenError::void_with_children(name)));
        }
        out.push_str(" />");
        return Ok(());
    }

    out.push('>');
    for child in &element.children {
        write_node(child, out)?;
    }
    out.push_str("</");
    out.push_str(name);
    out.push('>');
    Ok(())
}
