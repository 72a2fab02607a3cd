//! Runtime kinds of dynamic values.
//!
//! Values handed over by a scripting front end arrive as [`serde_json::Value`].
//! [`Kind`] names what such a value is, and [`ValueKind`] lets a Rust type
//! declare which kind it accepts so [`check_type`](crate::parsers::check_type)
//! can narrow a value without any reflection.

use serde_json::Value;
use std::fmt;

/// The kind of a dynamic value.
///
/// Integers and floats are distinct kinds, and neither is a bool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl Kind {
    /// Classifies a dynamic value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(n) if n.is_i64() || n.is_u64() => Kind::Integer,
            Value::Number(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns the lowercase name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Integer => "int",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Rust type that can be narrowed out of a dynamic value of one kind.
pub trait ValueKind: Sized {
    /// The only kind this type accepts.
    const KIND: Kind;

    /// Returns the narrowed value, or `None` when the kind does not conform.
    fn from_value(value: &Value) -> Option<Self>;
}

impl ValueKind for bool {
    const KIND: Kind = Kind::Bool;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl ValueKind for i64 {
    const KIND: Kind = Kind::Integer;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl ValueKind for f64 {
    const KIND: Kind = Kind::Float;

    fn from_value(value: &Value) -> Option<Self> {
        match Kind::of(value) {
            Kind::Float => value.as_f64(),
            _ => None,
        }
    }
}

impl ValueKind for String {
    const KIND: Kind = Kind::String;

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}
