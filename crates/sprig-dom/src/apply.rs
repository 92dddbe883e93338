//! Driving a mutable target through a patch list

use sprig_tree::{PropValue, VNode};

use crate::patch::{Patch, PatchError};

/// A mutable structure patches can be applied to
///
/// A real renderer would implement this over browser DOM handles; tests
/// implement it with [`TestDom`](crate::TestDom). Each method addresses its
/// node by child-index path and fails if the path does not resolve to a
/// node of the right kind.
pub trait PatchTarget {
    fn replace_node(&mut self, path: &[usize], with: &VNode) -> Result<(), PatchError>;
    fn set_text(&mut self, path: &[usize], text: &str) -> Result<(), PatchError>;
    fn set_prop(&mut self, path: &[usize], name: &str, value: &PropValue)
    -> Result<(), PatchError>;
    fn remove_prop(&mut self, path: &[usize], name: &str) -> Result<(), PatchError>;
    fn append_child(&mut self, path: &[usize], node: &VNode) -> Result<(), PatchError>;
    fn remove_child(&mut self, path: &[usize], index: usize) -> Result<(), PatchError>;
    fn move_child(&mut self, path: &[usize], from: usize, to: usize) -> Result<(), PatchError>;
}

/// Apply patches in order, stopping at the first failure.
pub fn apply(target: &mut impl PatchTarget, patches: &[Patch]) -> Result<(), PatchError> {
    for patch in patches {
        tracing::debug!(patch = ?patch, "applying patch");
        match patch {
            Patch::ReplaceNode { path, with } => target.replace_node(path, with)?,
            Patch::SetText { path, text } => target.set_text(path, text)?,
            Patch::SetProp { path, name, value } => target.set_prop(path, name, value)?,
            Patch::RemoveProp { path, name } => target.remove_prop(path, name)?,
            Patch::AppendChild { path, node } => target.append_child(path, node)?,
            Patch::RemoveChild { path, index } => target.remove_child(path, *index)?,
            Patch::MoveChild { path, from, to } => target.move_child(path, *from, *to)?,
        }
    }
    Ok(())
}
