//! Typed configuration property values
//!
//! A property value is one of nine primitive [`Kind`]s in one of three
//! [`Shape`]s. The closed [`TypedValue`] type carries both facts explicitly so
//! that nothing downstream has to guess a kind from a JSON representation.

use crate::error::FeatureError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primitive kind of a configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Kind {
    Integer,
    Long,
    Boolean,
    Float,
    Double,
    Byte,
    Short,
    Character,
    String,
}

impl Kind {
    /// All kinds, in declaration order
    pub const ALL: [Kind; 9] = [
        Kind::Integer,
        Kind::Long,
        Kind::Boolean,
        Kind::Float,
        Kind::Double,
        Kind::Byte,
        Kind::Short,
        Kind::Character,
        Kind::String,
    ];

    /// Wire name of this kind (e.g. `"Integer"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Integer => "Integer",
            Kind::Long => "Long",
            Kind::Boolean => "Boolean",
            Kind::Float => "Float",
            Kind::Double => "Double",
            Kind::Byte => "Byte",
            Kind::Short => "Short",
            Kind::Character => "Character",
            Kind::String => "String",
        }
    }

    /// Lower-case alias accepted on input (e.g. `"int"` for Integer)
    pub fn primitive_alias(&self) -> Option<&'static str> {
        match self {
            Kind::Integer => Some("int"),
            Kind::Long => Some("long"),
            Kind::Boolean => Some("boolean"),
            Kind::Float => Some("float"),
            Kind::Double => Some("double"),
            Kind::Byte => Some("byte"),
            Kind::Short => Some("short"),
            Kind::Character => Some("char"),
            Kind::String => None,
        }
    }

    /// Whether values of this kind are written as JSON integers
    pub fn is_integral(&self) -> bool {
        matches!(self, Kind::Byte | Kind::Short | Kind::Integer | Kind::Long)
    }

    /// Whether values of this kind are written as JSON fractions
    pub fn is_fractional(&self) -> bool {
        matches!(self, Kind::Float | Kind::Double)
    }

    /// Parse a kind from its wire name or primitive alias
    pub fn parse(name: &str) -> Option<Kind> {
        Kind::ALL
            .into_iter()
            .find(|k| k.as_str() == name || k.primitive_alias() == Some(name))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::parse(s).ok_or_else(|| FeatureError::UnknownKind(s.to_string()))
    }
}

/// Shape of a configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A single value
    Scalar,
    /// A fixed-size array
    Array,
    /// A variable-size ordered list
    List,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar => write!(f, "scalar"),
            Shape::Array => write!(f, "array"),
            Shape::List => write!(f, "list"),
        }
    }
}

/// A single value of one kind
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Integer(i32),
    Long(i64),
    Boolean(bool),
    Float(f32),
    Double(f64),
    Byte(i8),
    Short(i16),
    Character(char),
    String(String),
}

impl Scalar {
    pub fn kind(&self) -> Kind {
        match self {
            Scalar::Integer(_) => Kind::Integer,
            Scalar::Long(_) => Kind::Long,
            Scalar::Boolean(_) => Kind::Boolean,
            Scalar::Float(_) => Kind::Float,
            Scalar::Double(_) => Kind::Double,
            Scalar::Byte(_) => Kind::Byte,
            Scalar::Short(_) => Kind::Short,
            Scalar::Character(_) => Kind::Character,
            Scalar::String(_) => Kind::String,
        }
    }

    /// Borrow the value as a string slice if it is a String
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }
}

/// A homogeneous sequence of values of one kind
///
/// Empty sequences keep their kind, which a `Vec<Scalar>` could not.
#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    Integer(Vec<i32>),
    Long(Vec<i64>),
    Boolean(Vec<bool>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    Byte(Vec<i8>),
    Short(Vec<i16>),
    Character(Vec<char>),
    String(Vec<String>),
}

impl Values {
    /// An empty sequence of the given kind
    pub fn empty(kind: Kind) -> Self {
        match kind {
            Kind::Integer => Values::Integer(Vec::new()),
            Kind::Long => Values::Long(Vec::new()),
            Kind::Boolean => Values::Boolean(Vec::new()),
            Kind::Float => Values::Float(Vec::new()),
            Kind::Double => Values::Double(Vec::new()),
            Kind::Byte => Values::Byte(Vec::new()),
            Kind::Short => Values::Short(Vec::new()),
            Kind::Character => Values::Character(Vec::new()),
            Kind::String => Values::String(Vec::new()),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Values::Integer(_) => Kind::Integer,
            Values::Long(_) => Kind::Long,
            Values::Boolean(_) => Kind::Boolean,
            Values::Float(_) => Kind::Float,
            Values::Double(_) => Kind::Double,
            Values::Byte(_) => Kind::Byte,
            Values::Short(_) => Kind::Short,
            Values::Character(_) => Kind::Character,
            Values::String(_) => Kind::String,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Values::Integer(v) => v.len(),
            Values::Long(v) => v.len(),
            Values::Boolean(v) => v.len(),
            Values::Float(v) => v.len(),
            Values::Double(v) => v.len(),
            Values::Byte(v) => v.len(),
            Values::Short(v) => v.len(),
            Values::Character(v) => v.len(),
            Values::String(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a scalar, returning it back if its kind does not match
    pub fn push(&mut self, value: Scalar) -> Result<(), Scalar> {
        match (self, value) {
            (Values::Integer(v), Scalar::Integer(x)) => v.push(x),
            (Values::Long(v), Scalar::Long(x)) => v.push(x),
            (Values::Boolean(v), Scalar::Boolean(x)) => v.push(x),
            (Values::Float(v), Scalar::Float(x)) => v.push(x),
            (Values::Double(v), Scalar::Double(x)) => v.push(x),
            (Values::Byte(v), Scalar::Byte(x)) => v.push(x),
            (Values::Short(v), Scalar::Short(x)) => v.push(x),
            (Values::Character(v), Scalar::Character(x)) => v.push(x),
            (Values::String(v), Scalar::String(x)) => v.push(x),
            (_, other) => return Err(other),
        }
        Ok(())
    }

    /// Iterate over the elements as scalars
    pub fn iter(&self) -> impl Iterator<Item = Scalar> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }

    /// Element at `index` as a scalar
    pub fn get(&self, index: usize) -> Option<Scalar> {
        match self {
            Values::Integer(v) => v.get(index).map(|x| Scalar::Integer(*x)),
            Values::Long(v) => v.get(index).map(|x| Scalar::Long(*x)),
            Values::Boolean(v) => v.get(index).map(|x| Scalar::Boolean(*x)),
            Values::Float(v) => v.get(index).map(|x| Scalar::Float(*x)),
            Values::Double(v) => v.get(index).map(|x| Scalar::Double(*x)),
            Values::Byte(v) => v.get(index).map(|x| Scalar::Byte(*x)),
            Values::Short(v) => v.get(index).map(|x| Scalar::Short(*x)),
            Values::Character(v) => v.get(index).map(|x| Scalar::Character(*x)),
            Values::String(v) => v.get(index).map(|x| Scalar::String(x.clone())),
        }
    }
}

/// A configuration property value with explicit kind and shape
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Scalar(Scalar),
    Array(Values),
    List(Values),
}

impl TypedValue {
    pub fn kind(&self) -> Kind {
        match self {
            TypedValue::Scalar(s) => s.kind(),
            TypedValue::Array(v) | TypedValue::List(v) => v.kind(),
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            TypedValue::Scalar(_) => Shape::Scalar,
            TypedValue::Array(_) => Shape::Array,
            TypedValue::List(_) => Shape::List,
        }
    }

    /// Borrow the value as a string slice if it is a String scalar
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::Scalar(s) => s.as_str(),
            _ => None,
        }
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::$variant(value)
                }
            }

            impl From<$ty> for TypedValue {
                fn from(value: $ty) -> Self {
                    TypedValue::Scalar(Scalar::$variant(value))
                }
            }

            impl From<Vec<$ty>> for Values {
                fn from(value: Vec<$ty>) -> Self {
                    Values::$variant(value)
                }
            }
        )*
    };
}

impl_from_primitive!(
    i32 => Integer,
    i64 => Long,
    bool => Boolean,
    f32 => Float,
    f64 => Double,
    i8 => Byte,
    i16 => Short,
    char => Character,
    String => String,
);

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<&str> for TypedValue {
    fn from(value: &str) -> Self {
        TypedValue::Scalar(Scalar::String(value.to_string()))
    }
}

impl From<Vec<&str>> for Values {
    fn from(value: Vec<&str>) -> Self {
        Values::String(value.into_iter().map(str::to_string).collect())
    }
}

impl From<Scalar> for TypedValue {
    fn from(value: Scalar) -> Self {
        TypedValue::Scalar(value)
    }
}

impl TypedValue {
    /// Build an array value
    pub fn array(values: impl Into<Values>) -> Self {
        TypedValue::Array(values.into())
    }

    /// Build a list value
    pub fn list(values: impl Into<Values>) -> Self {
        TypedValue::List(values.into())
    }
}
