//! # sprig-dom
//!
//! Reconciliation for sprig element trees.
//!
//! [`diff`] compares two trees and produces an ordered list of [`Patch`]
//! operations; [`apply`] drives any [`PatchTarget`] through that list.
//! [`TestDom`] is an in-memory target used to verify that applying the
//! patches really does turn the old tree into the new one.

pub mod apply;
pub mod diff;
pub mod patch;
pub mod test_dom;

pub use apply::{PatchTarget, apply};
pub use diff::{DEFAULT_DEPTH_LIMIT, DiffError, diff};
pub use patch::{Patch, PatchError};
pub use test_dom::TestDom;
