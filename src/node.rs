//! The node tree.
//!
//! A [`DataFile`] owns every node of one tree in an arena and hands out
//! copyable [`NodeId`] handles. Handles stay valid while the tree grows, so a
//! child id can be kept across later sibling insertions.
//!
//! Each [`Node`] has two independent facets:
//!
//! - an ordered list of scalar **values**, addressed by position
//! - an ordered, name-unique collection of **children**
//!
//! Children are stored in an [`IndexMap`], which keeps insertion order for
//! the writer and gives O(1) lookup by name.
//!
//! ## Examples
//!
//! ```rust
//! use datafile::DataFile;
//!
//! let mut doc = DataFile::new();
//! let window = doc.get_or_create_child(doc.root(), "window");
//! let size = doc.get_or_create_child(window, "size");
//! doc.node_mut(size).set_int(0, 800);
//! doc.node_mut(size).set_int(1, 600);
//!
//! assert!(doc.has_child(doc.root(), "window"));
//! assert_eq!(doc.node(size).int_value(1).unwrap(), 600);
//! ```

use crate::{Error, Result, Scalar};
use indexmap::IndexMap;

/// A handle to a node inside a [`DataFile`].
///
/// Handles are only meaningful for the `DataFile` that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    const ROOT: NodeId = NodeId(0);
}

/// One node of the tree: positional values plus named children.
#[derive(Debug, Clone, Default)]
pub struct Node {
    values: Vec<String>,
    children: IndexMap<String, NodeId>,
}

impl Node {
    /// Sets the value at `index`, backfilling any gap with empty strings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use datafile::DataFile;
    ///
    /// let mut doc = DataFile::new();
    /// let id = doc.get_or_create_child(doc.root(), "k");
    /// doc.node_mut(id).set_value(3, "z");
    ///
    /// assert_eq!(doc.node(id).values(), ["", "", "", "z"]);
    /// ```
    pub fn set_value(&mut self, index: usize, text: impl Into<String>) {
        if index >= self.values.len() {
            self.values.resize(index + 1, String::new());
        }
        self.values[index] = text.into();
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if the node holds `index` values or fewer.
    pub fn value(&self, index: usize) -> Result<&str> {
        self.values
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| Error::index_out_of_range(index, self.values.len()))
    }

    /// Stores any [`Scalar`] at `index`.
    pub fn set<T: Scalar>(&mut self, index: usize, value: T) {
        self.set_value(index, value.to_text());
    }

    /// Reads the value at `index` as any [`Scalar`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] or [`Error::ValueConversion`].
    pub fn get<T: Scalar>(&self, index: usize) -> Result<T> {
        T::from_text(self.value(index)?)
    }

    pub fn set_int(&mut self, index: usize, value: i64) {
        self.set(index, value);
    }

    pub fn int_value(&self, index: usize) -> Result<i64> {
        self.get(index)
    }

    pub fn set_decimal(&mut self, index: usize, value: f64) {
        self.set(index, value);
    }

    pub fn decimal_value(&self, index: usize) -> Result<f64> {
        self.get(index)
    }

    /// Stores a boolean as `"1"` or `"0"` at `index`.
    pub fn set_bool(&mut self, index: usize, value: bool) {
        self.set(index, value);
    }

    /// Reads the first value as a boolean.
    ///
    /// Unlike the other typed getters this always reads index 0; a flag is
    /// expected to be a single-valued field.
    ///
    /// ```rust
    /// use datafile::DataFile;
    ///
    /// let mut doc = DataFile::new();
    /// let id = doc.get_or_create_child(doc.root(), "enabled");
    /// doc.node_mut(id).set_bool(0, true);
    /// assert!(doc.node(id).bool_value().unwrap());
    /// ```
    pub fn bool_value(&self) -> Result<bool> {
        self.get(0)
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn clear_values(&mut self) {
        self.values.clear();
    }

    #[must_use]
    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn has_child(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Returns true if the node has neither values nor children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.children.is_empty()
    }
}

/// A data file: the arena owning one tree of [`Node`]s.
///
/// The root is created with the document and has no name; only its
/// descendants appear in the written text.
#[derive(Debug, Clone)]
pub struct DataFile {
    nodes: Vec<Node>,
}

impl DataFile {
    /// Creates a document holding only an empty root.
    #[must_use]
    pub fn new() -> Self {
        DataFile {
            nodes: vec![Node::default()],
        }
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Returns the node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this document.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Returns the node behind `id` for mutation.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this document.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Returns the child `name` of `parent`, creating an empty one if absent.
    ///
    /// Looking a name up twice yields the same handle:
    ///
    /// ```rust
    /// use datafile::DataFile;
    ///
    /// let mut doc = DataFile::new();
    /// let first = doc.get_or_create_child(doc.root(), "x");
    /// let second = doc.get_or_create_child(doc.root(), "x");
    /// assert_eq!(first, second);
    /// assert_eq!(doc.node(doc.root()).child_count(), 1);
    /// ```
    pub fn get_or_create_child(&mut self, parent: NodeId, name: &str) -> NodeId {
        if let Some(&id) = self.nodes[parent.0].children.get(name) {
            return id;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::default());
        self.nodes[parent.0].children.insert(name.to_string(), id);
        id
    }

    /// Looks up a child without creating it.
    #[must_use]
    pub fn child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.nodes[parent.0].children.get(name).copied()
    }

    #[must_use]
    pub fn has_child(&self, parent: NodeId, name: &str) -> bool {
        self.nodes[parent.0].has_child(name)
    }

    /// Iterates the children of `parent` in insertion order.
    pub fn children(&self, parent: NodeId) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.nodes[parent.0]
            .children
            .iter()
            .map(|(name, &id)| (name.as_str(), id))
    }

    /// Walks `path` from the root, creating every missing segment.
    ///
    /// ```rust
    /// use datafile::DataFile;
    ///
    /// let mut doc = DataFile::new();
    /// let port = doc.get_or_create_path(["server", "http", "port"]);
    /// doc.node_mut(port).set_int(0, 8080);
    ///
    /// assert_eq!(doc.find(["server", "http", "port"]), Some(port));
    /// ```
    pub fn get_or_create_path<I, S>(&mut self, path: I) -> NodeId
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        path.into_iter().fold(self.root(), |parent, name| {
            self.get_or_create_child(parent, name.as_ref())
        })
    }

    /// Walks `path` from the root without creating anything.
    #[must_use]
    pub fn find<I, S>(&self, path: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        path.into_iter()
            .try_fold(self.root(), |parent, name| self.child(parent, name.as_ref()))
    }

    /// Number of nodes in the document, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for DataFile {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural equality: same names in the same order and the same values,
/// independent of arena layout.
impl PartialEq for DataFile {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self.root(), other.root())];
        while let Some((a, b)) = pending.pop() {
            let (a, b) = (self.node(a), other.node(b));
            if a.values != b.values || a.children.len() != b.children.len() {
                return false;
            }
            for ((name_a, &child_a), (name_b, &child_b)) in a.children.iter().zip(&b.children) {
                if name_a != name_b {
                    return false;
                }
                pending.push((child_a, child_b));
            }
        }
        true
    }
}

impl Eq for DataFile {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_has_empty_root() {
        let doc = DataFile::new();
        assert_eq!(doc.node_count(), 1);
        assert!(doc.node(doc.root()).is_empty());
    }

    #[test]
    fn test_auto_vivification_is_idempotent() {
        let mut doc = DataFile::new();
        let root = doc.root();
        assert!(!doc.has_child(root, "x"));

        let x = doc.get_or_create_child(root, "x");
        assert_eq!(doc.node(root).child_count(), 1);

        let again = doc.get_or_create_child(root, "x");
        assert_eq!(x, again);
        assert_eq!(doc.node(root).child_count(), 1);
        assert_eq!(doc.node_count(), 2);
    }

    #[test]
    fn test_handles_survive_sibling_growth() {
        let mut doc = DataFile::new();
        let root = doc.root();
        let first = doc.get_or_create_child(root, "first");
        for i in 0..100 {
            let id = doc.get_or_create_child(root, &format!("sibling{}", i));
            doc.node_mut(id).set_int(0, i);
        }
        doc.node_mut(first).set_value(0, "still here");
        assert_eq!(doc.node(first).value(0).unwrap(), "still here");
    }

    #[test]
    fn test_positional_backfill() {
        let mut node = Node::default();
        node.set_value(3, "z");
        assert_eq!(node.value_count(), 4);
        for i in 0..3 {
            assert_eq!(node.value(i).unwrap(), "");
        }
        assert_eq!(node.value(3).unwrap(), "z");
    }

    #[test]
    fn test_set_value_overwrites_in_place() {
        let mut node = Node::default();
        node.set_value(0, "a");
        node.set_value(1, "b");
        node.set_value(0, "c");
        assert_eq!(node.values(), ["c", "b"]);
    }

    #[test]
    fn test_value_out_of_range() {
        let mut node = Node::default();
        node.set_value(1, "b");
        let err = node.value(2).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn test_typed_accessors() {
        let mut node = Node::default();
        node.set_int(0, -42);
        node.set_decimal(1, 2.75);
        node.set_bool(2, true);

        assert_eq!(node.int_value(0).unwrap(), -42);
        assert!((node.decimal_value(1).unwrap() - 2.75).abs() < 1e-9);
        assert_eq!(node.value(2).unwrap(), "1");
        assert!(node.bool_value().unwrap());
        assert!(node.int_value(5).is_err());
    }

    #[test]
    fn test_bool_value_reads_first_position_only() {
        let mut node = Node::default();
        node.set_bool(0, false);
        node.set_bool(1, true);
        assert!(!node.bool_value().unwrap());
    }

    #[test]
    fn test_conversion_error_propagates() {
        let mut node = Node::default();
        node.set_value(0, "not a number");
        assert!(matches!(
            node.int_value(0),
            Err(Error::ValueConversion { .. })
        ));
        assert!(matches!(
            node.decimal_value(0),
            Err(Error::ValueConversion { .. })
        ));
    }

    #[test]
    fn test_values_and_children_are_independent() {
        let mut doc = DataFile::new();
        let a = doc.get_or_create_child(doc.root(), "a");
        doc.node_mut(a).set_value(0, "v");
        doc.get_or_create_child(a, "b");
        assert_eq!(doc.node(a).value_count(), 1);
        assert_eq!(doc.node(a).child_count(), 1);
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut doc = DataFile::new();
        let root = doc.root();
        for name in ["zeta", "alpha", "mid"] {
            doc.get_or_create_child(root, name);
        }
        let names: Vec<&str> = doc.children(root).map(|(name, _)| name).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_find_does_not_create() {
        let mut doc = DataFile::new();
        doc.get_or_create_path(["a", "b"]);
        assert!(doc.find(["a", "b"]).is_some());
        assert!(doc.find(["a", "c"]).is_none());
        assert_eq!(doc.node_count(), 3);
    }

    #[test]
    fn test_structural_equality_ignores_arena_layout() {
        let mut left = DataFile::new();
        let a = left.get_or_create_child(left.root(), "a");
        let b = left.get_or_create_child(left.root(), "b");
        left.node_mut(b).set_value(0, "1");
        left.get_or_create_child(a, "inner");

        let mut right = DataFile::new();
        let a = right.get_or_create_child(right.root(), "a");
        right.get_or_create_child(a, "inner");
        let b = right.get_or_create_child(right.root(), "b");
        right.node_mut(b).set_value(0, "1");

        assert_eq!(left, right);

        right.node_mut(b).set_value(0, "2");
        assert_ne!(left, right);
    }
}
