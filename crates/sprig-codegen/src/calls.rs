//! Lowering a tree to nested construction calls
//!
//! This is what the declarative syntax desugars to: every element becomes a
//! call to the runtime function, with its tag, its props object, and its
//! lowered children as trailing arguments.

use anyhow::Result;
use sprig_tree::{PropValue, Props, Tag, VElement, VNode};

use crate::LowerOptions;
use crate::error::CodegenError;
use crate::escape::{escape_js_string, is_valid_identifier};
use crate::js_expr::JsExpr;

/// Lower a tree to nested construction-call source.
///
/// Intrinsic tags lower to quoted strings, component tags to bare
/// identifiers, and an empty props bag to `null`:
///
/// ```
/// use sprig_codegen::{LowerOptions, lower_to_calls};
/// use sprig_tree::{el, text};
///
/// let tree = el("div")
///     .attr("id", "app")
///     .child(el("span").child(text("hi")).build())
///     .build();
///
/// let js = lower_to_calls(&tree, &LowerOptions::default()).unwrap();
/// assert_eq!(js, r#"h("div", {id: "app"}, h("span", null, "hi"))"#);
/// ```
pub fn lower_to_calls(node: &VNode, options: &LowerOptions) -> Result<String, CodegenError> {
    let flattened = node.clone().flatten();
    let expr = node_expr(&flattened, options, 0).map_err(CodegenError::from)?;
    Ok(expr.to_js())
}

fn node_expr(node: &VNode, options: &LowerOptions, depth: usize) -> Result<JsExpr> {
    match node {
        VNode::Text { value } => Ok(JsExpr::text(value.clone())),
        VNode::Raw { value } => Ok(JsExpr::raw(format!(
            "{}(\"{}\")",
            options.raw_fn,
            escape_js_string(value)
        ))),
        VNode::Fragment { children } => assemble_call(
            options.fragment_ident.clone(),
            None,
            children,
            options,
            depth,
        ),
        VNode::Element(element) => element_expr(element, options, depth),
    }
}

fn element_expr(element: &VElement, options: &LowerOptions, depth: usize) -> Result<JsExpr> {
    let tag_expr = match &element.tag {
        // Components resolve at runtime, so the identifier stays bare
        Tag::Component(name) => name.clone(),
        Tag::Intrinsic(name) => format!("\"{}\"", escape_js_string(name)),
    };

    tracing::debug!(
        tag = element.tag.name(),
        is_component = element.tag.is_component(),
        "Lowering element tag"
    );

    let props = props_object(&element.props, element.key.as_deref());
    assemble_call(tag_expr, props, &element.children, options, depth)
}

fn assemble_call(
    tag_expr: String,
    props: Option<String>,
    children: &[VNode],
    options: &LowerOptions,
    depth: usize,
) -> Result<JsExpr> {
    let props = props.unwrap_or_else(|| "null".to_string());

    if children.is_empty() {
        return Ok(JsExpr::raw(format!(
            "{}({}, {})",
            options.runtime_fn, tag_expr, props
        )));
    }

    let lowered: Vec<String> = children
        .iter()
        .map(|child| node_expr(child, options, depth + 1).map(|e| e.to_js()))
        .collect::<Result<_>>()?;

    let call = if options.pretty {
        let indent = "  ".repeat(depth + 1);
        format!(
            "{}({}, {},\n{indent}{})",
            options.runtime_fn,
            tag_expr,
            props,
            lowered.join(&format!(",\n{indent}"))
        )
    } else {
        format!(
            "{}({}, {}, {})",
            options.runtime_fn,
            tag_expr,
            props,
            lowered.join(", ")
        )
    };

    Ok(JsExpr::raw(call))
}

/// Lower an attribute bag to an object literal, `None` when empty.
///
/// The reconciliation key rides along as a `key` property, ahead of the
/// declared attributes.
fn props_object(props: &Props, key: Option<&str>) -> Option<String> {
    if props.is_empty() && key.is_none() {
        return None;
    }

    let mut entries = Vec::with_capacity(props.len() + 1);

    if let Some(key) = key {
        entries.push(format!("key: \"{}\"", escape_js_string(key)));
    }

    for (name, value) in props.iter() {
        // Quote prop names that aren't valid identifiers (kebab-case, etc.)
        let lowered_name = if is_valid_identifier(name) {
            name.to_string()
        } else {
            format!("\"{}\"", escape_js_string(name))
        };
        entries.push(format!("{}: {}", lowered_name, prop_value_js(value)));
    }

    Some(format!("{{{}}}", entries.join(", ")))
}

fn prop_value_js(value: &PropValue) -> String {
    match value {
        PropValue::String(s) => format!("\"{}\"", escape_js_string(s)),
        PropValue::Number(n) if n.is_finite() => format!("{n}"),
        // NaN and infinities are not representable as literals worth emitting
        PropValue::Number(_) => "null".to_string(),
        PropValue::Bool(b) => b.to_string(),
        PropValue::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_tree::{component, el, fragment, raw_html, text};

    fn lower(node: &VNode) -> String {
        lower_to_calls(node, &LowerOptions::default()).unwrap()
    }

    #[test]
    fn test_intrinsic_tag_is_quoted() {
        assert_eq!(lower(&el("br").build()), "h(\"br\", null)");
    }

    #[test]
    fn test_component_tag_is_bare_identifier() {
        assert_eq!(
            lower(&component("Button").attr("label", "Go").build()),
            "h(Button, {label: \"Go\"})"
        );
    }

    #[test]
    fn test_nested_calls() {
        let tree = el("div")
            .attr("id", "app")
            .child(el("span").child(text("hi")).build())
            .build();
        assert_eq!(
            lower(&tree),
            "h(\"div\", {id: \"app\"}, h(\"span\", null, \"hi\"))"
        );
    }

    #[test]
    fn test_empty_fragment_lowers_without_children() {
        assert_eq!(lower(&fragment([])), "h(Fragment, null)");
    }

    #[test]
    fn test_fragment_children_splice_before_lowering() {
        let tree = el("p")
            .child(fragment([text("a"), text("b")]))
            .build();
        assert_eq!(lower(&tree), "h(\"p\", null, \"a\", \"b\")");
    }

    #[test]
    fn test_raw_node_uses_raw_helper() {
        assert_eq!(
            lower(&raw_html("<b>bold</b>")),
            "rawHtml(\"<b>bold</b>\")"
        );
    }

    #[test]
    fn test_text_is_escaped_once() {
        assert_eq!(
            lower(&text("line\nbreak \"quoted\"")),
            "\"line\\nbreak \\\"quoted\\\"\""
        );
    }

    #[test]
    fn test_key_rides_in_props() {
        let tree = el("li").key("row-1").attr("class", "x").build();
        assert_eq!(lower(&tree), "h(\"li\", {key: \"row-1\", class: \"x\"})");
    }

    #[test]
    fn test_reserved_word_prop_is_quoted() {
        let tree = el("a").attr("for", "field").attr("data-x", "1").build();
        assert_eq!(
            lower(&tree),
            "h(\"a\", {\"for\": \"field\", \"data-x\": \"1\"})"
        );
    }

    #[test]
    fn test_number_and_bool_props() {
        let tree = el("input")
            .attr("tabindex", 3)
            .attr("disabled", true)
            .attr("step", 0.5)
            .build();
        assert_eq!(
            lower(&tree),
            "h(\"input\", {tabindex: 3, disabled: true, step: 0.5})"
        );
    }

    #[test]
    fn test_non_finite_number_lowers_to_null() {
        let tree = el("i").attr("x", f64::NAN).build();
        assert_eq!(lower(&tree), "h(\"i\", {x: null})");
    }

    #[test]
    fn test_custom_runtime_names() {
        let options = LowerOptions::builder()
            .runtime_fn("_jsx")
            .fragment_ident("_Fragment")
            .build();
        let tree = fragment([text("x")]);
        assert_eq!(
            lower_to_calls(&tree, &options).unwrap(),
            "_jsx(_Fragment, null, \"x\")"
        );
    }

    #[test]
    fn test_pretty_output_indents_children() {
        let tree = el("div")
            .child(el("span").child(text("hi")).build())
            .child(text("tail"))
            .build();
        let options = LowerOptions::builder().pretty(true).build();
        let js = lower_to_calls(&tree, &options).unwrap();
        assert_eq!(
            js,
            "h(\"div\", null,\n  h(\"span\", null,\n    \"hi\"),\n  \"tail\")"
        );
    }
}
