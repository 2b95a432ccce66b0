//! Module graph data model.
//!
//! Nodes refer to each other only by identifier: each [`ModuleNode`] keeps the
//! sets of parent and child identifiers, and the [`ModuleGraph`] owns every node
//! plus the ordered list of [`ModuleEdge`] records read from the input.

use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// A module in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleNode {
    /// Module identifier as it appeared in the input (e.g., "golang.org/x/text@v0.3.7")
    pub id: String,
    /// Display label, always equal to `id`
    pub label: String,
    /// Identifiers of modules that have an edge pointing into this one
    pub parent_ids: BTreeSet<String>,
    /// Identifiers of modules this one points to
    pub child_ids: BTreeSet<String>,
}

impl ModuleNode {
    /// Creates a node with empty adjacency sets.
    ///
    /// # Example
    ///
    /// ```rust
    /// use modgrapher::graph::ModuleNode;
    ///
    /// let node = ModuleNode::new("example.com/app");
    /// assert_eq!(node.label, "example.com/app");
    /// assert!(node.is_root() && node.is_leaf());
    /// ```
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            parent_ids: BTreeSet::new(),
            child_ids: BTreeSet::new(),
        }
    }

    /// Returns true if no module points to this one.
    pub fn is_root(&self) -> bool {
        self.parent_ids.is_empty()
    }

    /// Returns true if this module points to nothing.
    pub fn is_leaf(&self) -> bool {
        self.child_ids.is_empty()
    }
}

/// One `parent child` relation read from the input.
///
/// Repeated input lines produce repeated edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleEdge {
    /// Parent module identifier
    pub from: String,
    /// Child module identifier
    pub to: String,
}

impl ModuleEdge {
    /// Creates a new edge.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// A directed graph of module dependencies.
///
/// Built once by [`crate::parser::parse_reader`] and read-only afterwards.
/// For any two nodes A and B, `B.id` is in `A.child_ids` exactly when `A.id`
/// is in `B.parent_ids`.
///
/// # Example
///
/// ```rust
/// use modgrapher::parser::parse_str;
///
/// let graph = parse_str("app lib\napp util\nlib util\n").unwrap();
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert!(graph.parents("util").contains("lib"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleGraph {
    /// Nodes keyed by identifier
    nodes: BTreeMap<String, ModuleNode>,
    /// Edges in input order
    edges: Vec<ModuleEdge>,
}

impl ModuleGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a `parent -> child` relation.
    ///
    /// Both nodes are created on first sight; existing nodes have their
    /// adjacency sets extended. The edge is appended unconditionally.
    pub(crate) fn insert_relation(&mut self, parent: &str, child: &str) {
        self.node_entry(parent).child_ids.insert(child.to_string());
        self.node_entry(child).parent_ids.insert(parent.to_string());
        self.edges.push(ModuleEdge::new(parent, child));
    }

    fn node_entry(&mut self, id: &str) -> &mut ModuleNode {
        self.nodes
            .entry(id.to_string())
            .or_insert_with(|| ModuleNode::new(id))
    }

    /// Gets a node by identifier.
    pub fn get_node(&self, id: &str) -> Option<&ModuleNode> {
        self.nodes.get(id)
    }

    /// Returns true if a node with this identifier exists.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Iterates over all nodes, ordered by identifier.
    pub fn nodes(&self) -> impl Iterator<Item = &ModuleNode> {
        self.nodes.values()
    }

    /// Returns all edges in input order.
    pub fn edges(&self) -> &[ModuleEdge] {
        &self.edges
    }

    /// Returns the identifiers `id` points to, or an empty set for unknown ids.
    pub fn children(&self, id: &str) -> BTreeSet<&str> {
        self.get_node(id)
            .map(|n| n.child_ids.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns the identifiers pointing to `id`, or an empty set for unknown ids.
    pub fn parents(&self, id: &str) -> BTreeSet<&str> {
        self.get_node(id)
            .map(|n| n.parent_ids.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns nodes nothing points to, ordered by identifier.
    ///
    /// For `go mod graph` output this is normally the main module.
    pub fn roots(&self) -> Vec<&ModuleNode> {
        self.nodes().filter(|n| n.is_root()).collect()
    }

    /// Returns nodes with no children, ordered by identifier.
    pub fn leaves(&self) -> Vec<&ModuleNode> {
        self.nodes().filter(|n| n.is_leaf()).collect()
    }

    /// Returns the number of distinct modules.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Converts to a petgraph `DiGraph` weighted by module identifier.
    ///
    /// Nodes are added in identifier order and edges in input order, so a
    /// repeated relation becomes a parallel edge.
    ///
    /// # Example
    ///
    /// ```rust
    /// use modgrapher::parser::parse_str;
    ///
    /// let graph = parse_str("a b\na b\n").unwrap();
    /// let digraph = graph.to_digraph();
    ///
    /// assert_eq!(digraph.node_count(), 2);
    /// assert_eq!(digraph.edge_count(), 2);
    /// ```
    pub fn to_digraph(&self) -> DiGraph<&str, ()> {
        let mut digraph = DiGraph::with_capacity(self.node_count(), self.edge_count());
        let mut indices: HashMap<&str, NodeIndex> = HashMap::with_capacity(self.node_count());

        for id in self.nodes.keys() {
            indices.insert(id.as_str(), digraph.add_node(id.as_str()));
        }

        for edge in &self.edges {
            if let (Some(&from), Some(&to)) =
                (indices.get(edge.from.as_str()), indices.get(edge.to.as_str()))
            {
                digraph.add_edge(from, to, ());
            }
        }

        digraph
    }
}
