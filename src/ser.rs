//! Data file serialization.
//!
//! The [`Serializer`] walks a [`DataFile`] depth-first, in insertion order,
//! and renders each child of the root:
//!
//! - a node without children becomes a **leaf line**: `name = v0, v1;`
//! - a node with children becomes a **block**: the name, a `{` line, the
//!   children one level deeper, and a `}` line
//!
//! A block never writes its own values.
//!
//! ## Usage
//!
//! Most users should use the functions in the crate root:
//!
//! ```rust
//! use datafile::{to_string, DataFile};
//!
//! let mut doc = DataFile::new();
//! let name = doc.get_or_create_child(doc.root(), "name");
//! doc.node_mut(name).set_value(0, "Alice");
//!
//! assert_eq!(to_string(&doc), "name = Alice;\n");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use datafile::{DataFile, Serializer, WriteOptions};
//!
//! let mut doc = DataFile::new();
//! let point = doc.get_or_create_path(["shape", "point"]);
//! doc.node_mut(point).set_int(0, 1);
//! doc.node_mut(point).set_int(1, 2);
//!
//! let mut serializer = Serializer::new(WriteOptions::new());
//! serializer.serialize(&doc);
//! assert_eq!(serializer.into_inner(), "shape\n{\n\tpoint = 1, 2;\n}\n");
//! ```

use crate::{DataFile, WriteOptions};

/// Renders a [`DataFile`] tree as text.
pub struct Serializer {
    output: String,
    options: WriteOptions,
    indent_unit: String,
}

impl Serializer {
    pub fn new(options: WriteOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            indent_unit: options.indent.unit(),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends the whole document below its root.
    ///
    /// The walk keeps its own stack of open blocks, so nesting depth is
    /// bounded by memory rather than the call stack.
    pub fn serialize(&mut self, doc: &DataFile) {
        let mut open = vec![(0usize, doc.children(doc.root()))];

        while let Some((depth, children)) = open.last_mut() {
            let depth = *depth;
            let Some((name, id)) = children.next() else {
                open.pop();
                if depth > 0 {
                    self.write_indent(depth - 1);
                    self.output.push_str("}\n");
                }
                continue;
            };

            let node = doc.node(id);
            self.write_indent(depth);
            self.output.push_str(name);

            if node.child_count() == 0 {
                self.output.push_str(" = ");
                self.write_values(node.values());
                self.output.push_str(";\n");
            } else {
                self.output.push('\n');
                self.write_indent(depth);
                self.output.push_str("{\n");
                open.push((depth + 1, doc.children(id)));
            }
        }
    }

    fn write_values(&mut self, values: &[String]) {
        // A lone bare empty value would read back as a field with no values.
        if let [only] = values {
            if only.is_empty() {
                self.output.push_str("\"\"");
                return;
            }
        }

        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.write_value(value);
        }
    }

    #[inline]
    fn write_value(&mut self, value: &str) {
        if self.options.quote_delimiters && Self::needs_quotes(value) {
            self.output.push('"');
            self.output.push_str(value);
            self.output.push('"');
        } else {
            self.output.push_str(value);
        }
    }

    #[inline]
    fn needs_quotes(value: &str) -> bool {
        value.contains(',') || value.contains(';')
    }

    fn write_indent(&mut self, depth: usize) {
        if self.indent_unit.is_empty() {
            return;
        }
        for _ in 0..depth {
            self.output.push_str(&self.indent_unit);
        }
    }
}
