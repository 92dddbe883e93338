//! Tree diffing
//!
//! Produces the minimal ordered patch list that turns one tree into
//! another. Ordering rules keep every emitted path valid at the moment it
//! is applied: parents are patched before their children, a node's
//! attribute patches precede its child-list patches, and removals within a
//! child list are emitted in descending index order.

use rustc_hash::FxHashMap;
use sprig_tree::{Props, VElement, VNode};
use thiserror::Error;

use crate::patch::Patch;

/// Recursion guard for pathological tree depth
pub const DEFAULT_DEPTH_LIMIT: usize = 512;

/// Errors raised while diffing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiffError {
    #[error("tree depth exceeds limit of {limit}")]
    DepthLimitExceeded { limit: usize },
}

/// Walk state shared across the recursive diff
struct DiffCtx {
    patches: Vec<Patch>,
    path: Vec<usize>,
}

impl DiffCtx {
    fn new() -> Self {
        Self {
            patches: Vec::new(),
            path: Vec::new(),
        }
    }

    fn emit(&mut self, patch: Patch) {
        tracing::debug!(patch = ?patch, "emitting patch");
        self.patches.push(patch);
    }

    fn here(&self) -> Vec<usize> {
        self.path.clone()
    }
}

/// Compare two trees and produce the patches that turn `old` into `new`.
///
/// Both inputs are flattened first, so fragments used for grouping do not
/// affect the result. Identical trees produce an empty list.
pub fn diff(old: &VNode, new: &VNode) -> Result<Vec<Patch>, DiffError> {
    let old = old.clone().flatten();
    let new = new.clone().flatten();

    let mut ctx = DiffCtx::new();
    diff_node(&old, &new, &mut ctx, DEFAULT_DEPTH_LIMIT)?;
    Ok(ctx.patches)
}

fn diff_node(
    old: &VNode,
    new: &VNode,
    ctx: &mut DiffCtx,
    depth: usize,
) -> Result<(), DiffError> {
    if depth == 0 {
        return Err(DiffError::DepthLimitExceeded {
            limit: DEFAULT_DEPTH_LIMIT,
        });
    }

    match (old, new) {
        (VNode::Text { value: a }, VNode::Text { value: b }) => {
            if a != b {
                let path = ctx.here();
                ctx.emit(Patch::SetText {
                    path,
                    text: b.clone(),
                });
            }
        }
        // Raw markup is opaque: any change replaces the node wholesale
        (VNode::Raw { value: a }, VNode::Raw { value: b }) => {
            if a != b {
                let path = ctx.here();
                ctx.emit(Patch::ReplaceNode {
                    path,
                    with: new.clone(),
                });
            }
        }
        (VNode::Fragment { children: a }, VNode::Fragment { children: b }) => {
            diff_children(a, b, ctx, depth)?;
        }
        // A changed key means a different identity, not a mutation of the
        // same element, so it replaces like a tag change does
        (VNode::Element(a), VNode::Element(b)) if a.tag == b.tag && a.key == b.key => {
            diff_props(&a.props, &b.props, ctx);
            diff_children(&a.children, &b.children, ctx, depth)?;
        }
        // Different kinds, elements with different tags, or changed keys
        _ => {
            let path = ctx.here();
            ctx.emit(Patch::ReplaceNode {
                path,
                with: new.clone(),
            });
        }
    }

    Ok(())
}

fn diff_props(old: &Props, new: &Props, ctx: &mut DiffCtx) {
    for (name, value) in new.iter() {
        if old.get(name) != Some(value) {
            let path = ctx.here();
            ctx.emit(Patch::SetProp {
                path,
                name: name.to_string(),
                value: value.clone(),
            });
        }
    }
    for name in old.keys() {
        if !new.contains(name) {
            let path = ctx.here();
            ctx.emit(Patch::RemoveProp {
                path,
                name: name.to_string(),
            });
        }
    }
}

fn diff_children(
    old: &[VNode],
    new: &[VNode],
    ctx: &mut DiffCtx,
    depth: usize,
) -> Result<(), DiffError> {
    if let (Some(old_keys), Some(new_keys)) = (unique_keys(old), unique_keys(new)) {
        diff_keyed(old, &old_keys, new, &new_keys, ctx, depth)
    } else {
        diff_positional(old, new, ctx, depth)
    }
}

/// Keys of a child list, if every child is a keyed element with a unique
/// key. Anything else opts the list out of keyed reconciliation.
fn unique_keys(children: &[VNode]) -> Option<Vec<&str>> {
    if children.is_empty() {
        return None;
    }

    let mut keys = Vec::with_capacity(children.len());
    for child in children {
        let VNode::Element(VElement { key: Some(key), .. }) = child else {
            return None;
        };
        keys.push(key.as_str());
    }

    let mut seen = FxHashMap::default();
    for key in &keys {
        if seen.insert(*key, ()).is_some() {
            return None;
        }
    }

    Some(keys)
}

fn diff_positional(
    old: &[VNode],
    new: &[VNode],
    ctx: &mut DiffCtx,
    depth: usize,
) -> Result<(), DiffError> {
    let shared = old.len().min(new.len());

    // Trailing removals first, in descending index order
    for index in (shared..old.len()).rev() {
        let path = ctx.here();
        ctx.emit(Patch::RemoveChild { path, index });
    }

    for node in &new[shared..] {
        let path = ctx.here();
        ctx.emit(Patch::AppendChild {
            path,
            node: node.clone(),
        });
    }

    for (index, (old_child, new_child)) in old.iter().zip(new).enumerate() {
        ctx.path.push(index);
        let result = diff_node(old_child, new_child, ctx, depth - 1);
        ctx.path.pop();
        result?;
    }

    Ok(())
}

fn diff_keyed(
    old: &[VNode],
    old_keys: &[&str],
    new: &[VNode],
    new_keys: &[&str],
    ctx: &mut DiffCtx,
    depth: usize,
) -> Result<(), DiffError> {
    let new_index: FxHashMap<&str, usize> =
        new_keys.iter().enumerate().map(|(i, k)| (*k, i)).collect();

    // Phase 1: remove old children whose key is gone, back to front
    let mut working: Vec<&str> = old_keys.to_vec();
    for index in (0..old_keys.len()).rev() {
        if !new_index.contains_key(old_keys[index]) {
            let path = ctx.here();
            ctx.emit(Patch::RemoveChild { path, index });
            working.remove(index);
        }
    }

    // Phase 2: bring surviving children into the new order, appending the
    // genuinely new ones. `working` mirrors the target's child list after
    // each operation, so indices always refer to the current state.
    for (target, key) in new_keys.iter().enumerate() {
        if let Some(current) = working.iter().position(|k| k == key) {
            if current != target {
                let path = ctx.here();
                ctx.emit(Patch::MoveChild {
                    path,
                    from: current,
                    to: target,
                });
                let moved = working.remove(current);
                working.insert(target, moved);
            }
        } else {
            let path = ctx.here();
            ctx.emit(Patch::AppendChild {
                path,
                node: new[target].clone(),
            });
            working.push(key);
            let last = working.len() - 1;
            if last != target {
                let path = ctx.here();
                ctx.emit(Patch::MoveChild {
                    path,
                    from: last,
                    to: target,
                });
                let moved = working.remove(last);
                working.insert(target, moved);
            }
        }
    }

    debug_assert_eq!(working, new_keys);

    // Phase 3: recurse into pairs that existed on both sides, addressed by
    // their final position
    let old_by_key: FxHashMap<&str, &VNode> = old_keys
        .iter()
        .zip(old)
        .map(|(key, node)| (*key, node))
        .collect();

    for (target, key) in new_keys.iter().enumerate() {
        if let Some(old_child) = old_by_key.get(key) {
            ctx.path.push(target);
            let result = diff_node(old_child, &new[target], ctx, depth - 1);
            ctx.path.pop();
            result?;
        }
    }

    Ok(())
}
