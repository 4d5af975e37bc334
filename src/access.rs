use crate::error::{ChildKey, Error, Result};
use crate::{Kind, Node};

mod private {
    pub trait Sealed {}
}

/// A key that can address a child of a [`Node`]: an integer for an array
/// item, a string for an object property.
///
/// This trait is sealed; it is implemented for `usize`, `i32`, `i64`,
/// `isize`, `str`, `String` and references to them.
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, node: &'v Node) -> Option<&'v Node>;

    #[doc(hidden)]
    fn to_key(&self) -> ChildKey;
}

impl private::Sealed for usize {}

impl Index for usize {
    fn index_into<'v>(&self, node: &'v Node) -> Option<&'v Node> {
        match node {
            Node::Array(children) => children.get(*self),
            _ => None,
        }
    }

    fn to_key(&self) -> ChildKey {
        ChildKey::Index(*self as i128)
    }
}

macro_rules! impl_signed_index {
    ($($ty:ty),*) => {
        $(
            impl private::Sealed for $ty {}

            impl Index for $ty {
                fn index_into<'v>(&self, node: &'v Node) -> Option<&'v Node> {
                    // negative indices never address anything
                    usize::try_from(*self).ok()?.index_into(node)
                }

                fn to_key(&self) -> ChildKey {
                    ChildKey::Index(*self as i128)
                }
            }
        )*
    };
}

impl_signed_index!(i32, i64, isize);

impl private::Sealed for str {}

impl Index for str {
    fn index_into<'v>(&self, node: &'v Node) -> Option<&'v Node> {
        node.properties()
            .iter()
            .find(|property| property.name() == self)
            .map(|property| property.value())
    }

    fn to_key(&self) -> ChildKey {
        ChildKey::Name(self.to_owned())
    }
}

impl private::Sealed for String {}

impl Index for String {
    fn index_into<'v>(&self, node: &'v Node) -> Option<&'v Node> {
        self.as_str().index_into(node)
    }

    fn to_key(&self) -> ChildKey {
        self.as_str().to_key()
    }
}

impl<T: ?Sized + private::Sealed> private::Sealed for &T {}

impl<T: ?Sized + Index> Index for &T {
    fn index_into<'v>(&self, node: &'v Node) -> Option<&'v Node> {
        (**self).index_into(node)
    }

    fn to_key(&self) -> ChildKey {
        (**self).to_key()
    }
}

impl Node {
    /// The boolean payload, or `None` for any other kind.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn require_bool(&self) -> Result<bool> {
        self.as_bool()
            .ok_or_else(|| Error::type_mismatch(Kind::Bool, self.kind()))
    }

    /// The numeric payload, or `None` for any other kind.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Node::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn require_number(&self) -> Result<f64> {
        self.as_number()
            .ok_or_else(|| Error::type_mismatch(Kind::Number, self.kind()))
    }

    /// The string payload, or `None` for any other kind.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn require_str(&self) -> Result<&str> {
        self.as_str()
            .ok_or_else(|| Error::type_mismatch(Kind::String, self.kind()))
    }

    /// Looks up an array item by position or an object property by name.
    ///
    /// Names compare byte-exact and the first matching property wins.
    /// Out-of-range or negative indices, unknown names, and nodes of the
    /// wrong kind all yield `None`.
    pub fn get<I: Index>(&self, index: I) -> Option<&Node> {
        index.index_into(self)
    }

    /// Like [`Node::get`], but reports a [`Error::MissingChild`] instead of
    /// `None`.
    pub fn require<I: Index>(&self, index: I) -> Result<&Node> {
        index
            .index_into(self)
            .ok_or_else(|| Error::missing_child(index.to_key(), self.kind()))
    }
}
