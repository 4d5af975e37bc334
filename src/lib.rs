//! Parse JSON text into an immutable tree of [`Node`]s and read it back
//! through typed accessors.
//!
//! Every accessor comes in two forms: a safe one that returns `None` on a
//! kind or navigation mismatch, and a strict one that returns an [`Error`].
//!
//! ```
//! let doc = json_tree::parse(r#"{"name": "foo", "tags": [1, true]}"#)?;
//! assert_eq!(doc.get("name").and_then(|n| n.as_str()), Some("foo"));
//! assert!(doc.require("tags")?.require(1)?.require_bool()?);
//! assert!(doc.get("missing").is_none());
//! # Ok::<(), json_tree::Error>(())
//! ```
use std::fmt;

mod access;
mod config;
mod cursor;
mod error;
mod parse;

pub use access::Index;
pub use config::{ParserConfig, DEFAULT_EXCERPT_LEN, DEFAULT_MAX_DEPTH};
pub use error::{ChildKey, Error, Result};
pub use parse::{parse, try_parse, Parser};

/// One parsed JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// literal characters `null`
    Null,

    /// literal characters `true` or `false`
    Bool(bool),

    /// a number; integers and fractions share one `f64` representation
    Number(f64),

    /// a string of characters wrapped in double quotes, escapes decoded
    String(String),

    /// an array of values, in document order
    Array(Vec<Node>),

    /// an object's properties, in document order, duplicates kept
    Object(Vec<Property>),
}

impl Node {
    /// The `null` literal.
    pub const NULL: Node = Node::Null;
    /// The `true` literal.
    pub const TRUE: Node = Node::Bool(true);
    /// The `false` literal.
    pub const FALSE: Node = Node::Bool(false);

    /// Which of the six variants this node is.
    pub fn kind(&self) -> Kind {
        match self {
            Node::Null => Kind::Null,
            Node::Bool(_) => Kind::Bool,
            Node::Number(_) => Kind::Number,
            Node::String(_) => Kind::String,
            Node::Array(_) => Kind::Array,
            Node::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Items of an array; empty for every other kind.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Array(children) => children,
            _ => &[],
        }
    }

    /// Properties of an object; empty for every other kind.
    pub fn properties(&self) -> &[Property] {
        match self {
            Node::Object(properties) => properties,
            _ => &[],
        }
    }
}

impl std::str::FromStr for Node {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

/// A name/value pair held by an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    name: String,
    value: Node,
}

impl Property {
    pub fn new(name: impl Into<String>, value: Node) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Node {
        &self.value
    }
}

/// The variant of a [`Node`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_variant() {
        assert_eq!(Node::NULL.kind(), Kind::Null);
        assert_eq!(Node::TRUE.kind(), Kind::Bool);
        assert_eq!(Node::Number(1.0).kind(), Kind::Number);
        assert_eq!(Node::String("a".into()).kind(), Kind::String);
        assert_eq!(Node::Array(vec![]).kind(), Kind::Array);
        assert_eq!(Node::Object(vec![]).kind(), Kind::Object);
    }

    #[test]
    fn kind_display() {
        assert_eq!(Kind::Object.to_string(), "object");
        assert_eq!(Kind::Bool.to_string(), "bool");
    }

    #[test]
    fn children_of_non_array_is_empty() {
        assert!(Node::FALSE.children().is_empty());
        assert!(Node::Object(vec![Property::new("a", Node::NULL)]).children().is_empty());
        assert_eq!(Node::Array(vec![Node::NULL]).children(), &[Node::Null]);
    }

    #[test]
    fn properties_keep_duplicates_in_order() {
        let node = Node::Object(vec![
            Property::new("a", Node::Number(1.0)),
            Property::new("a", Node::Number(2.0)),
        ]);
        let names: Vec<_> = node.properties().iter().map(Property::name).collect();
        assert_eq!(names, ["a", "a"]);
        assert_eq!(node.properties()[1].value(), &Node::Number(2.0));
        assert!(Node::Array(vec![]).properties().is_empty());
    }

    #[test]
    fn from_str_uses_strict_entry_point() {
        let node: Node = "[null]".parse().unwrap();
        assert_eq!(node, Node::Array(vec![Node::Null]));
        assert!("[null".parse::<Node>().is_err());
    }

    #[test]
    fn is_null() {
        assert!(Node::NULL.is_null());
        assert!(!Node::String("null".into()).is_null());
    }
}
