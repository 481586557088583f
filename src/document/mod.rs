//! Document loading and serialization
//!
//! Feed content is parsed into an arena of nodes addressed by [`NodeId`]
//! handles. Parent and child links are arena indices, so elements can be
//! mutated in place while walking their ancestors.

pub mod loader;
pub mod node;
pub mod serialize;

use ego_tree::Tree;

pub use ego_tree::NodeId;
pub use loader::{load, wrap};
pub use node::{ElementData, HtmlNode};

/// A loaded HTML fragment
#[derive(Debug, Clone)]
pub struct Document {
    tree: Tree<HtmlNode>,
    /// First top-level element, normally the synthetic wrapper
    root: Option<NodeId>,
}

impl Document {
    /// Top-level element of the fragment, if parsing produced one
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Sentinel state: nothing parseable was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.tree.get(id)?.value().as_element()
    }

    /// Mutate an element in place; `None` when `id` is not an element
    pub fn update_element<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut ElementData) -> R,
    ) -> Option<R> {
        let mut node = self.tree.get_mut(id)?;
        node.value().as_element_mut().map(f)
    }

    /// Elements with the given tag below the root, in document order
    #[must_use]
    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        let Some(root) = self.root.and_then(|id| self.tree.get(id)) else {
            return Vec::new();
        };
        root.descendants()
            .filter(|node| matches!(node.value(), HtmlNode::Element(e) if e.is(tag)))
            .map(|node| node.id())
            .collect()
    }

    /// Parent element of a node, never climbing above the root
    #[must_use]
    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        if Some(id) == self.root {
            return None;
        }
        let parent = self.tree.get(id)?.parent()?;
        if Some(parent.id()) == self.root {
            return None;
        }
        parent.value().as_element().map(|_| parent.id())
    }

    /// Element ancestors of a node, nearest first, stopping below the root
    pub fn ancestor_elements(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent_element(id), move |&current| {
            self.parent_element(current)
        })
    }

    /// Serialize the whole fragment without the root's own tags
    #[must_use]
    pub fn to_html(&self) -> String {
        self.root
            .map(|root| self.serialize(root))
            .unwrap_or_default()
    }
}
