// src/models.rs

use std::fmt;

// --- BINDING STATE ---

/// The raw state of a declaration while binding live arguments.
///
/// Values stay as the strings the user typed; they only become typed
/// [`ArgValue`]s when read back through the declaration's kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BoundValue {
    #[default]
    Unset,
    Scalar(String),
    Sequence(Vec<String>),
}

impl BoundValue {
    /// Returns `true` when nothing has been bound yet.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

// --- TYPED VALUES ---

/// A typed argument value, produced by coercing a [`BoundValue`] (or a
/// declared default) through an `ArgumentKind`.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    List(Vec<ArgValue>),
}

impl ArgValue {
    /// `Some` only for [`ArgValue::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Floats, and integers widened to `f64`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ArgValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(v) => f.write_str(v),
            Self::Bool(v) => write!(f, "{}", v),
            Self::List(items) => {
                let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
