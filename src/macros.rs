/// Builds a [`DataFile`](crate::DataFile) from a literal tree description.
///
/// Leaves take a bracketed list of values: numbers and booleans are encoded
/// as [`Scalar`](crate::Scalar) writes them, strings are stored verbatim.
/// Blocks take a braced list of children.
///
/// # Examples
///
/// ```rust
/// use datafile::{datafile, to_string};
///
/// let doc = datafile! {
///     "name" => ["Alice"],
///     "window" => {
///         "size" => [800, 600],
///         "fullscreen" => [false],
///     },
/// };
///
/// assert_eq!(
///     to_string(&doc),
///     "name = Alice;\nwindow\n{\n\tsize = 800, 600;\n\tfullscreen = 0;\n}\n"
/// );
/// let fullscreen = doc.find(["window", "fullscreen"]).unwrap();
/// assert!(!doc.node(fullscreen).bool_value().unwrap());
/// ```
#[macro_export]
macro_rules! datafile {
    () => {
        $crate::DataFile::new()
    };

    ($($body:tt)+) => {{
        let mut doc = $crate::DataFile::new();
        let root = doc.root();
        $crate::__datafile_children!(doc, root, $($body)+);
        doc
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __datafile_children {
    ($doc:ident, $parent:ident $(,)?) => {};

    ($doc:ident, $parent:ident, $name:literal => { $($inner:tt)* } $(, $($rest:tt)*)?) => {{
        let child = $doc.get_or_create_child($parent, $name);
        $crate::__datafile_children!($doc, child, $($inner)*);
        $crate::__datafile_children!($doc, $parent, $($($rest)*)?);
    }};

    ($doc:ident, $parent:ident, $name:literal => [ $($value:expr),* $(,)? ] $(, $($rest:tt)*)?) => {{
        let child = $doc.get_or_create_child($parent, $name);
        let values: ::std::vec::Vec<::std::string::String> =
            ::std::vec![$($crate::value::ValueText::value_text(&$value)),*];
        for (index, value) in values.into_iter().enumerate() {
            $doc.node_mut(child).set_value(index, value);
        }
        $crate::__datafile_children!($doc, $parent, $($($rest)*)?);
    }};
}
