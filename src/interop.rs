//! Serde support for [`DataFile`].
//!
//! A document maps naturally onto the serde data model, which lets a tree be
//! exported to or imported from any serde format:
//!
//! - a node with children becomes a map from child name to child
//! - a node without children becomes a sequence of its values
//!
//! As with the text writer, a node with children does not export its own values.
//! On import, scalars (strings, numbers, booleans) are stored as their
//! canonical text, and a lone scalar becomes a single-valued leaf.
//!
//! ```rust
//! use datafile::{from_str, DataFile};
//!
//! let doc = from_str("window\n{\n\tsize = 800, 600;\n}\n").unwrap();
//! let json = serde_json::to_string(&doc).unwrap();
//! assert_eq!(json, r#"{"window":{"size":["800","600"]}}"#);
//!
//! let back: DataFile = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, doc);
//! ```

use crate::{DataFile, NodeId, Scalar};
use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

impl Serialize for DataFile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.node(self.root()).child_count()))?;
        for (name, id) in self.children(self.root()) {
            map.serialize_entry(name, &NodeView { doc: self, id })?;
        }
        map.end()
    }
}

struct NodeView<'a> {
    doc: &'a DataFile,
    id: NodeId,
}

impl Serialize for NodeView<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let node = self.doc.node(self.id);
        if node.child_count() == 0 {
            let mut seq = serializer.serialize_seq(Some(node.value_count()))?;
            for value in node.values() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(node.child_count()))?;
            for (name, id) in self.doc.children(self.id) {
                map.serialize_entry(name, &NodeView { doc: self.doc, id })?;
            }
            map.end()
        }
    }
}

/// Owned intermediate tree built while deserializing.
enum Tree {
    Leaf(Vec<String>),
    Block(IndexMap<String, Tree>),
}

impl Tree {
    fn insert_into(self, doc: &mut DataFile, id: NodeId) {
        match self {
            Tree::Leaf(values) => {
                let node = doc.node_mut(id);
                for (index, value) in values.into_iter().enumerate() {
                    node.set_value(index, value);
                }
            }
            Tree::Block(children) => {
                for (name, child) in children {
                    let child_id = doc.get_or_create_child(id, &name);
                    child.insert_into(doc, child_id);
                }
            }
        }
    }
}

impl<'de> Deserialize<'de> for Tree {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TreeVisitor)
    }
}

struct TreeVisitor;

impl<'de> Visitor<'de> for TreeVisitor {
    type Value = Tree;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of nodes, a sequence of scalars, or a scalar")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Tree, E> {
        Ok(Tree::Leaf(vec![value.to_text()]))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Tree, E> {
        Ok(Tree::Leaf(vec![value.to_text()]))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Tree, E> {
        Ok(Tree::Leaf(vec![value.to_text()]))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Tree, E> {
        Ok(Tree::Leaf(vec![value.to_text()]))
    }

    fn visit_str<E>(self, value: &str) -> Result<Tree, E> {
        Ok(Tree::Leaf(vec![value.to_string()]))
    }

    fn visit_string<E>(self, value: String) -> Result<Tree, E> {
        Ok(Tree::Leaf(vec![value]))
    }

    fn visit_unit<E>(self) -> Result<Tree, E> {
        Ok(Tree::Leaf(Vec::new()))
    }

    fn visit_none<E>(self) -> Result<Tree, E> {
        Ok(Tree::Leaf(Vec::new()))
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Tree, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Tree, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = Vec::new();
        while let Some(element) = seq.next_element::<ScalarText>()? {
            values.push(element.0);
        }
        Ok(Tree::Leaf(values))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Tree, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut children = IndexMap::new();
        while let Some((name, child)) = map.next_entry::<String, Tree>()? {
            children.insert(name, child);
        }
        Ok(Tree::Block(children))
    }
}

/// A sequence element, which must be a scalar.
struct ScalarText(String);

impl<'de> Deserialize<'de> for ScalarText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ScalarVisitor).map(ScalarText)
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string, number or boolean value")
    }

    fn visit_bool<E>(self, value: bool) -> Result<String, E> {
        Ok(value.to_text())
    }

    fn visit_i64<E>(self, value: i64) -> Result<String, E> {
        Ok(value.to_text())
    }

    fn visit_u64<E>(self, value: u64) -> Result<String, E> {
        Ok(value.to_text())
    }

    fn visit_f64<E>(self, value: f64) -> Result<String, E> {
        Ok(value.to_text())
    }

    fn visit_str<E>(self, value: &str) -> Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_string<E>(self, value: String) -> Result<String, E> {
        Ok(value)
    }
}

impl<'de> Deserialize<'de> for DataFile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tree = Tree::deserialize(deserializer)?;
        if let Tree::Leaf(_) = tree {
            return Err(de::Error::custom(
                "a data file document must be a map of nodes",
            ));
        }

        let mut doc = DataFile::new();
        let root = doc.root();
        tree.insert_into(&mut doc, root);
        Ok(doc)
    }
}
