//! Host value model for arguments and results crossing the call bridge.
//!
//! # Responsibility
//! - Represent the dynamically typed values a host runtime passes in.
//! - Name each value by its host type for argument error messages.
//!
//! # Invariants
//! - `Value` owns its payload; nothing borrows from the host past one call.
//! - `type_name()` is stable and matches host-side type names.

use serde::{Deserialize, Serialize};

/// One dynamically typed value on the host side of the bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// Host null value.
    None,
    /// Host boolean. Treated as an integer by integer decoders.
    Bool(bool),
    /// Host integer, carried at 64-bit width.
    Int(i64),
    /// Host floating point number.
    Float(f64),
    /// Host text string.
    Str(String),
    /// Host byte string.
    Bytes(Vec<u8>),
}

impl Value {
    /// Host type name used in argument error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "NoneType",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Bytes(_) => "bytes",
        }
    }

    /// Returns the integer payload, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
