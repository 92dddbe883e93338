//! # sprig-tree
//!
//! Declarative element-tree model for sprig.
//!
//! This crate provides the in-memory node graph that the rest of the
//! workspace lowers and diffs: [`VNode`] and its element/text/raw/fragment
//! variants, the insertion-ordered [`Props`] attribute bag, and a chainable
//! builder for constructing trees in code.

pub mod builder;
pub mod error;
pub mod node;
pub mod props;

// Re-export public types
pub use builder::{ElementBuilder, component, el, fragment, raw_html, text};
pub use error::TreeError;
pub use node::{Tag, VElement, VNode};
pub use props::{PropValue, Props};
