//! Patch operations and application errors
//!
//! A patch addresses its node by a child-index path from the root: `[]` is
//! the root itself, `[1, 0]` is the first child of the root's second child.
//! Patch lists are plain data and serialize cleanly, so they can be logged,
//! snapshotted, or shipped across a boundary.

use serde::{Deserialize, Serialize};
use sprig_tree::{PropValue, VNode};
use thiserror::Error;

/// A single mutation produced by the differ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Patch {
    /// Swap out the whole subtree at `path`
    ReplaceNode { path: Vec<usize>, with: VNode },
    /// Update the content of the text node at `path`
    SetText { path: Vec<usize>, text: String },
    /// Set or overwrite one attribute of the element at `path`
    SetProp {
        path: Vec<usize>,
        name: String,
        value: PropValue,
    },
    /// Drop one attribute of the element at `path`
    RemoveProp { path: Vec<usize>, name: String },
    /// Append a new child to the node at `path`
    AppendChild { path: Vec<usize>, node: VNode },
    /// Remove the child at `index` of the node at `path`
    RemoveChild { path: Vec<usize>, index: usize },
    /// Move the child at `from` to position `to` within the node at `path`
    MoveChild {
        path: Vec<usize>,
        from: usize,
        to: usize,
    },
}

impl Patch {
    /// The path this patch addresses.
    pub fn path(&self) -> &[usize] {
        match self {
            Self::ReplaceNode { path, .. }
            | Self::SetText { path, .. }
            | Self::SetProp { path, .. }
            | Self::RemoveProp { path, .. }
            | Self::AppendChild { path, .. }
            | Self::RemoveChild { path, .. }
            | Self::MoveChild { path, .. } => path,
        }
    }
}

/// Errors raised while applying patches to a target
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatchError {
    #[error("no node at path {path:?}")]
    PathNotFound { path: Vec<usize> },

    #[error("node at path {path:?} is not a {expected}")]
    KindMismatch {
        path: Vec<usize>,
        expected: &'static str,
    },

    #[error("index {index} out of bounds at path {path:?}")]
    IndexOutOfBounds { path: Vec<usize>, index: usize },
}
