//! Type tags carried in property keys
//!
//! ```text
//! name                      untagged, kind inferred from the JSON value
//! name:Long                 scalar
//! name:Long[]  name:long[]  array
//! name:Collection<Long>     list
//! name:Collection           list, element kind inferred
//! ```

use featurejson_core::{Kind, Shape, TypedValue};
use std::fmt;

const LIST_PREFIX: &str = "Collection";
const ARRAY_SUFFIX: &str = "[]";

/// Explicit kind and shape marker of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeTag {
    /// `None` only for an untyped `Collection`
    pub kind: Option<Kind>,
    pub shape: Shape,
}

impl TypeTag {
    pub fn new(kind: Kind, shape: Shape) -> Self {
        Self {
            kind: Some(kind),
            shape,
        }
    }

    /// Tag describing a value exactly
    pub fn of(value: &TypedValue) -> Self {
        Self::new(value.kind(), value.shape())
    }

    /// Parse a tag; `None` when the text is not a known tag
    pub fn parse(tag: &str) -> Option<Self> {
        if let Some(rest) = tag.strip_prefix(LIST_PREFIX) {
            if rest.is_empty() {
                return Some(Self {
                    kind: None,
                    shape: Shape::List,
                });
            }
            let inner = rest.strip_prefix('<')?.strip_suffix('>')?;
            // element types of a collection are always boxed names
            let kind = Kind::ALL.into_iter().find(|k| k.as_str() == inner)?;
            return Some(Self::new(kind, Shape::List));
        }
        if let Some(element) = tag.strip_suffix(ARRAY_SUFFIX) {
            return Kind::parse(element).map(|kind| Self::new(kind, Shape::Array));
        }
        Kind::parse(tag).map(|kind| Self::new(kind, Shape::Scalar))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.shape, self.kind) {
            (Shape::Scalar, Some(kind)) => write!(f, "{kind}"),
            (Shape::Array, Some(kind)) => write!(f, "{kind}{ARRAY_SUFFIX}"),
            (Shape::List, Some(kind)) => write!(f, "{LIST_PREFIX}<{kind}>"),
            (_, None) => f.write_str(LIST_PREFIX),
        }
    }
}

/// Split a wire key into the property name and its tag text
///
/// The tag follows the last `:`; a key without `:` has no tag.
pub fn split_key(wire_key: &str) -> (&str, Option<&str>) {
    match wire_key.rsplit_once(':') {
        Some((name, tag)) => (name, Some(tag)),
        None => (wire_key, None),
    }
}

/// Join a property name and tag into a wire key
pub fn join_key(name: &str, tag: Option<TypeTag>) -> String {
    match tag {
        Some(tag) => format!("{name}:{tag}"),
        None => name.to_string(),
    }
}

#[cfg(test)]
#[path = "tag/tag_tests.rs"]
mod tag_tests;
