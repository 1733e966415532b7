//! Attachment points for rendered nodes

use crate::error::Result;
use crate::vnode::VNode;

/// A mutable node that receives rendered subtrees
pub trait Container {
    /// Append one top-level child after any existing children
    fn append_child(&mut self, node: VNode) -> Result<()>;

    /// Current children, in attachment order
    fn children(&self) -> &[VNode];

    fn child_count(&self) -> usize {
        self.children().len()
    }
}

/// In-memory container, serialised as `<main id="...">`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentNode {
    id: String,
    children: Vec<VNode>,
}

impl ContentNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Remove every child
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// HTML of the children only
    pub fn to_fragment(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_html(&mut out);
            out.push('\n');
        }
        out
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        out.push_str("<main id=\"");
        crate::vnode::escape_into(&self.id, out);
        out.push_str("\">\n");
        out.push_str(&self.to_fragment());
        out.push_str("</main>\n");
    }
}

impl Container for ContentNode {
    fn append_child(&mut self, node: VNode) -> Result<()> {
        self.children.push(node);
        Ok(())
    }

    fn children(&self) -> &[VNode] {
        &self.children
    }
}
