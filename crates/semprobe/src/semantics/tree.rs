//! Semantics tree snapshots.
//!
//! A [`SemanticsTree`] is rebuilt from the composed UI on every fetch. The
//! unmerged view has one node per UI element carrying semantics (plus the
//! root). The merged view folds each merging node's descendants into it and
//! drops the absorbed nodes.

use super::configuration::SemanticsConfiguration;
use super::properties::SemanticsProperties;
use crate::graphics::{Offset, Rect};
use crate::ui::UiNode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a semantics node, stable between the two views of one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    id: NodeId,
    parent: Option<usize>,
    children: Vec<usize>,
    bounds: Rect,
    placed: bool,
    config: SemanticsConfiguration,
}

/// Snapshot of the semantics of a composed UI
#[derive(Debug, Clone)]
pub struct SemanticsTree {
    nodes: Vec<NodeData>,
    viewport: Rect,
    merged: bool,
}

impl SemanticsTree {
    /// Build the unmerged tree for `root`, displayed through `viewport`
    #[must_use]
    pub fn from_root(root: &UiNode, viewport: Rect) -> Self {
        let bounds = root.local_bounds();
        let mut nodes = vec![NodeData {
            id: NodeId(1),
            parent: None,
            children: Vec::new(),
            bounds,
            placed: root.is_placed(),
            config: root.modifier().semantics_configuration().unwrap_or_default(),
        }];
        for child in root.child_nodes() {
            collect(child, bounds.origin(), root.is_placed(), 0, &mut nodes);
        }
        Self {
            nodes,
            viewport,
            merged: false,
        }
    }

    /// Merged view of this snapshot
    #[must_use]
    pub fn merged(&self) -> Self {
        if self.merged {
            return self.clone();
        }
        let absorbed: Vec<bool> = (0..self.nodes.len())
            .map(|index| {
                !self.nodes[index].config.merges_descendants() && self.has_merging_ancestor(index)
            })
            .collect();

        let mut remap = vec![usize::MAX; self.nodes.len()];
        let mut nodes = Vec::new();
        for (index, data) in self.nodes.iter().enumerate() {
            if absorbed[index] {
                continue;
            }
            let mut config = data.config.clone();
            if config.merges_descendants() {
                self.merge_descendants_into(index, &mut config);
            }
            remap[index] = nodes.len();
            nodes.push(NodeData {
                id: data.id,
                parent: None,
                children: Vec::new(),
                bounds: data.bounds,
                placed: data.placed,
                config,
            });
        }

        for (index, data) in self.nodes.iter().enumerate() {
            if absorbed[index] {
                continue;
            }
            let mut ancestor = data.parent;
            while let Some(candidate) = ancestor {
                if !absorbed[candidate] {
                    break;
                }
                ancestor = self.nodes[candidate].parent;
            }
            if let Some(parent) = ancestor {
                let (child, parent) = (remap[index], remap[parent]);
                nodes[child].parent = Some(parent);
                nodes[parent].children.push(child);
            }
        }

        Self {
            nodes,
            viewport: self.viewport,
            merged: true,
        }
    }

    fn has_merging_ancestor(&self, index: usize) -> bool {
        let mut ancestor = self.nodes[index].parent;
        while let Some(candidate) = ancestor {
            if self.nodes[candidate].config.merges_descendants() {
                return true;
            }
            ancestor = self.nodes[candidate].parent;
        }
        false
    }

    fn merge_descendants_into(&self, index: usize, config: &mut SemanticsConfiguration) {
        for &child in &self.nodes[index].children {
            let child_config = &self.nodes[child].config;
            if child_config.merges_descendants() {
                continue;
            }
            config.merge_child(child_config);
            self.merge_descendants_into(child, config);
        }
    }

    /// Whether this is the merged view
    #[must_use]
    pub const fn is_merged(&self) -> bool {
        self.merged
    }

    /// Visible area nodes are checked against
    #[must_use]
    pub const fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Number of nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Root node
    #[must_use]
    pub fn root(&self) -> Option<SemanticsNode<'_>> {
        (!self.nodes.is_empty()).then_some(SemanticsNode {
            tree: self,
            index: 0,
        })
    }

    /// All nodes in pre-order
    pub fn nodes(&self) -> impl Iterator<Item = SemanticsNode<'_>> {
        (0..self.nodes.len()).map(move |index| SemanticsNode { tree: self, index })
    }

    /// Look up a node by id
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<SemanticsNode<'_>> {
        self.nodes().find(|node| node.id() == id)
    }

    /// Printable dump of the whole tree, one indented block per node
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.root() {
            dump_node(root, 0, &mut out);
        }
        out
    }
}

fn collect(
    node: &UiNode,
    origin: Offset,
    parent_placed: bool,
    parent: usize,
    nodes: &mut Vec<NodeData>,
) {
    let bounds = node.local_bounds().translate(origin);
    let placed = parent_placed && node.is_placed();
    let mut attach_to = parent;
    if let Some(config) = node.modifier().semantics_configuration() {
        let index = nodes.len();
        nodes.push(NodeData {
            id: NodeId(index as u32 + 1),
            parent: Some(parent),
            children: Vec::new(),
            bounds,
            placed,
            config,
        });
        nodes[parent].children.push(index);
        attach_to = index;
    }
    for child in node.child_nodes() {
        collect(child, bounds.origin(), placed, attach_to, nodes);
    }
}

fn dump_node(node: SemanticsNode<'_>, indent: usize, out: &mut String) {
    for line in node.describe().lines() {
        out.push_str(&" ".repeat(indent));
        out.push_str(line);
        out.push('\n');
    }
    for child in node.children() {
        dump_node(child, indent + 2, out);
    }
}

/// Borrowed view of one node of a [`SemanticsTree`]
#[derive(Clone, Copy)]
pub struct SemanticsNode<'a> {
    tree: &'a SemanticsTree,
    index: usize,
}

impl<'a> SemanticsNode<'a> {
    fn data(&self) -> &'a NodeData {
        &self.tree.nodes[self.index]
    }

    /// Node id
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.data().id
    }

    /// Properties (merged when the tree is the merged view)
    #[must_use]
    pub fn config(&self) -> &'a SemanticsConfiguration {
        &self.data().config
    }

    /// Absolute bounds
    #[must_use]
    pub fn bounds_in_root(&self) -> Rect {
        self.data().bounds
    }

    /// Whether this node and all its ancestors were placed
    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.data().placed
    }

    /// Whether any part of the node is visible in the viewport and the node
    /// is not marked invisible to the user
    #[must_use]
    pub fn is_displayed(&self) -> bool {
        self.is_placed()
            && !self.config().contains(SemanticsProperties::INVISIBLE_TO_USER)
            && !self
                .bounds_in_root()
                .intersect(&self.tree.viewport)
                .is_empty()
    }

    /// Whether this is the root
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.data().parent.is_none()
    }

    /// Parent node
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.data().parent.map(|index| Self {
            tree: self.tree,
            index,
        })
    }

    /// Direct children
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        self.data()
            .children
            .iter()
            .map(|&index| Self {
                tree: self.tree,
                index,
            })
            .collect()
    }

    /// Ancestors, nearest first
    pub fn ancestors(&self) -> impl Iterator<Item = SemanticsNode<'a>> {
        std::iter::successors(self.parent(), |node| node.parent())
    }

    /// All descendants in pre-order
    #[must_use]
    pub fn descendants(&self) -> Vec<Self> {
        let mut out = Vec::new();
        for child in self.children() {
            out.push(child);
            out.extend(child.descendants());
        }
        out
    }

    /// Tree this node belongs to
    #[must_use]
    pub const fn tree(&self) -> &'a SemanticsTree {
        self.tree
    }

    /// Human readable summary used in assertion diagnostics
    #[must_use]
    pub fn describe(&self) -> String {
        let mut out = format!("Node {} at {}", self.id(), self.bounds_in_root());
        if let Some(tag) = self.config().get(SemanticsProperties::TEST_TAG) {
            out.push_str(&format!(", Tag: '{tag}'"));
        }
        if !self.is_placed() {
            out.push_str(", not placed");
        }
        for line in self.config().describe() {
            if !line.starts_with("TestTag") {
                out.push_str("\n  ");
                out.push_str(&line);
            }
        }
        if self.config().merges_descendants() {
            out.push_str("\n  MergeDescendants = true");
        }
        out
    }
}

impl fmt::Debug for SemanticsNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SemanticsNode")
            .field("id", &self.id())
            .field("config", self.config())
            .finish()
    }
}
