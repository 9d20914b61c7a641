// SPDX-License-Identifier: MPL-2.0
//! The sidebar's hierarchical item tree.
//!
//! A menu is an ordered sequence of [`MenuNode`] values of arbitrary depth.
//! The tree is plain owned data without back-pointers; the panel only ever
//! reads it. Node ids must be unique among siblings and stable across
//! re-renders — the panel does not validate this, and duplicate ids only
//! degrade expand/collapse bookkeeping, never crash.

use std::collections::HashSet;

/// One entry in the sidebar's hierarchical item tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    /// Identifier, unique within its sibling list.
    pub id: String,
    /// Display text.
    pub label: String,
    /// Optional glyph shown before the label.
    pub icon: Option<String>,
    /// Optional navigation destination for leaf nodes.
    pub target: Option<String>,
    /// Ordered children; an empty list means the node is a leaf.
    pub children: Vec<MenuNode>,
    /// Disabled nodes ignore activation entirely.
    pub disabled: bool,
}

impl MenuNode {
    /// Creates a leaf node with the given id and label.
    pub fn leaf(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            target: None,
            children: Vec::new(),
            disabled: false,
        }
    }

    /// Sets the icon glyph.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the navigation target.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Replaces the children, turning the node into a branch.
    #[must_use]
    pub fn with_children(mut self, children: Vec<MenuNode>) -> Self {
        self.children = children;
        self
    }

    /// Marks the node as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Returns true if the node has at least one child.
    ///
    /// A node with an empty `children` list behaves exactly like a leaf.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// One row of the rendered menu: the node plus its nesting depth.
#[derive(Debug, Clone, Copy)]
pub struct RowEntry<'a> {
    pub node: &'a MenuNode,
    pub depth: usize,
}

/// Flattens the tree into the rows that are currently visible.
///
/// Rows come out in pre-order, depth-first: each node is emitted at its
/// depth, immediately followed by its children at depth + 1 when its id is
/// in the expansion set. The output is a pure function of the inputs, so
/// re-rendering with unchanged inputs yields an identical sequence.
#[must_use]
pub fn flatten_visible<'a>(
    items: &'a [MenuNode],
    expanded: &HashSet<String>,
) -> Vec<RowEntry<'a>> {
    fn walk<'a>(
        nodes: &'a [MenuNode],
        expanded: &HashSet<String>,
        depth: usize,
        out: &mut Vec<RowEntry<'a>>,
    ) {
        for node in nodes {
            out.push(RowEntry { node, depth });
            if node.has_children() && expanded.contains(&node.id) {
                walk(&node.children, expanded, depth + 1, out);
            }
        }
    }

    let mut rows = Vec::new();
    walk(items, expanded, 0, &mut rows);
    rows
}
