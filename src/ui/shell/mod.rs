//! Page shells.
//!
//! A shell places one caller-supplied [`LayoutSlot`] into a fixed arrangement
//! of named [`Region`]s and returns a [`RenderedTree`]. Shells are pure: the
//! same slot always yields the same tree and nothing is retained between
//! calls.

mod account;
mod public;

pub use account::AccountShell;
pub use public::PublicShell;

use crate::ui::node::{Element, Node, Region};

/// The single content value a shell accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutSlot(Option<Node>);

impl LayoutSlot {
    /// A slot with no content. The receiving region still renders, empty.
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn is_empty(&self) -> bool {
        self.0.as_ref().is_none_or(Node::is_empty)
    }

    /// The nodes a region holds for this slot: nothing, or the content as-is.
    fn into_payload(self) -> Vec<Node> {
        self.0.into_iter().collect()
    }
}

impl From<Node> for LayoutSlot {
    fn from(node: Node) -> Self {
        Self(Some(node))
    }
}

impl From<Option<Node>> for LayoutSlot {
    fn from(node: Option<Node>) -> Self {
        Self(node)
    }
}

impl From<Element> for LayoutSlot {
    fn from(el: Element) -> Self {
        Self(Some(Node::Element(el)))
    }
}

impl From<&str> for LayoutSlot {
    fn from(s: &str) -> Self {
        Self(Some(Node::from(s)))
    }
}

impl From<String> for LayoutSlot {
    fn from(s: String) -> Self {
        Self(Some(Node::from(s)))
    }
}

/// Output of a shell render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTree {
    root: Node,
}

impl RenderedTree {
    fn new(root: impl Into<Node>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Regions in document order.
    pub fn regions(&self) -> Vec<Region> {
        self.root.elements().iter().filter_map(|el| el.region).collect()
    }

    /// The first element tagged with `region`.
    pub fn region(&self, region: Region) -> Option<&Element> {
        self.root
            .elements()
            .into_iter()
            .find(|el| el.region == Some(region))
    }

    /// The children placed into `region`.
    pub fn payload(&self, region: Region) -> Option<&[Node]> {
        self.region(region).map(|el| el.children.as_slice())
    }

    /// The tree as it exists at a viewport `width`: regions hidden at that
    /// width are removed, not merely styled away.
    #[must_use]
    pub fn at_width(&self, width: u32) -> Self {
        Self {
            root: self.root.resolve(width).unwrap_or_else(Node::empty),
        }
    }

    pub fn to_html(&self) -> String {
        self.root.to_html()
    }
}

impl From<RenderedTree> for LayoutSlot {
    fn from(tree: RenderedTree) -> Self {
        Self(Some(tree.root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slot_has_no_payload() {
        assert!(LayoutSlot::empty().is_empty());
        assert!(LayoutSlot::empty().into_payload().is_empty());
    }

    #[test]
    fn slot_payload_is_the_content_unchanged() {
        let content = Node::Fragment(vec![Node::text("a"), Node::text("b")]);
        let payload = LayoutSlot::from(content.clone()).into_payload();
        assert_eq!(payload, vec![content]);
    }

    #[test]
    fn blank_text_counts_as_empty() {
        assert!(LayoutSlot::from("").is_empty());
        assert!(!LayoutSlot::from("x").is_empty());
    }
}
