//! In-memory patch target
//!
//! `TestDom` stands in for a real mutable document: it holds a plain
//! `VNode` tree and implements [`PatchTarget`] over it. Because it can hand
//! the tree back with [`TestDom::to_vnode`], tests can assert that
//! diff-then-apply really reaches the new tree.

use sprig_tree::{PropValue, VNode};

use crate::apply::PatchTarget;
use crate::patch::PatchError;

/// Mutable in-memory tree implementing [`PatchTarget`]
#[derive(Debug, Clone, PartialEq)]
pub struct TestDom {
    root: VNode,
}

impl TestDom {
    /// Build a target from a tree. The tree is flattened so that its shape
    /// matches what the differ addresses.
    pub fn from_vnode(root: VNode) -> Self {
        Self {
            root: root.flatten(),
        }
    }

    /// The current state of the document as a tree.
    pub fn to_vnode(&self) -> VNode {
        self.root.clone()
    }

    fn node_at_mut(&mut self, path: &[usize]) -> Result<&mut VNode, PatchError> {
        let mut node = &mut self.root;
        for (pos, &index) in path.iter().enumerate() {
            let children = match node {
                VNode::Element(element) => &mut element.children,
                VNode::Fragment { children } => children,
                _ => {
                    return Err(PatchError::KindMismatch {
                        path: path[..pos].to_vec(),
                        expected: "node with children",
                    });
                }
            };
            node = children
                .get_mut(index)
                .ok_or_else(|| PatchError::PathNotFound {
                    path: path[..=pos].to_vec(),
                })?;
        }
        Ok(node)
    }

    fn children_at_mut(&mut self, path: &[usize]) -> Result<&mut Vec<VNode>, PatchError> {
        match self.node_at_mut(path)? {
            VNode::Element(element) => Ok(&mut element.children),
            VNode::Fragment { children } => Ok(children),
            _ => Err(PatchError::KindMismatch {
                path: path.to_vec(),
                expected: "node with children",
            }),
        }
    }
}

impl PatchTarget for TestDom {
    fn replace_node(&mut self, path: &[usize], with: &VNode) -> Result<(), PatchError> {
        let node = self.node_at_mut(path)?;
        *node = with.clone();
        Ok(())
    }

    fn set_text(&mut self, path: &[usize], text: &str) -> Result<(), PatchError> {
        match self.node_at_mut(path)? {
            VNode::Text { value } => {
                *value = text.to_string();
                Ok(())
            }
            _ => Err(PatchError::KindMismatch {
                path: path.to_vec(),
                expected: "text node",
            }),
        }
    }

    fn set_prop(
        &mut self,
        path: &[usize],
        name: &str,
        value: &PropValue,
    ) -> Result<(), PatchError> {
        match self.node_at_mut(path)? {
            VNode::Element(element) => {
                element.props.set(name, value.clone());
                Ok(())
            }
            _ => Err(PatchError::KindMismatch {
                path: path.to_vec(),
                expected: "element",
            }),
        }
    }

    fn remove_prop(&mut self, path: &[usize], name: &str) -> Result<(), PatchError> {
        match self.node_at_mut(path)? {
            VNode::Element(element) => {
                element.props.remove(name);
                Ok(())
            }
            _ => Err(PatchError::KindMismatch {
                path: path.to_vec(),
                expected: "element",
            }),
        }
    }

    fn append_child(&mut self, path: &[usize], node: &VNode) -> Result<(), PatchError> {
        let children = self.children_at_mut(path)?;
        children.push(node.clone());
        Ok(())
    }

    fn remove_child(&mut self, path: &[usize], index: usize) -> Result<(), PatchError> {
        let children = self.children_at_mut(path)?;
        if index >= children.len() {
            return Err(PatchError::IndexOutOfBounds {
                path: path.to_vec(),
                index,
            });
        }
        children.remove(index);
        Ok(())
    }

    fn move_child(&mut self, path: &[usize], from: usize, to: usize) -> Result<(), PatchError> {
        let children = self.children_at_mut(path)?;
        if from >= children.len() {
            return Err(PatchError::IndexOutOfBounds {
                path: path.to_vec(),
                index: from,
            });
        }
        if to >= children.len() {
            return Err(PatchError::IndexOutOfBounds {
                path: path.to_vec(),
                index: to,
            });
        }
        let node = children.remove(from);
        children.insert(to, node);
        Ok(())
    }
}
