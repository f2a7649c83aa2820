// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dialect-neutral column values.
//!
//! Generated code converts every mapped field through [`ToValue`] when it
//! builds statements, and back through [`FromValue`] when it maps rows.
//!
//! | Rust type | Value |
//! |-----------|-------|
//! | `bool` | [`Value::Bool`] |
//! | `i8`..`i64`, `u8`..`u32` | [`Value::Int`] |
//! | `f32`, `f64` | [`Value::Float`] |
//! | `String`, `&str` | [`Value::Text`] |
//! | `Vec<u8>` | [`Value::Bytes`] |
//! | `Option<T>` | `None` maps to [`Value::Null`] |

use std::fmt;

use crate::PersistenceError;

/// A single column value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// SQL `NULL`.
    Null,
    /// Boolean.
    Bool(bool),
    /// Any integer up to 64 bits.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// UTF-8 text.
    Text(String),
    /// Raw bytes.
    Bytes(Vec<u8>)
}

impl Value {
    /// Check if this value is `NULL`.
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the value kind, used in conversion errors.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes"
        }
    }

    /// Integer payload, if any.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None
        }
    }

    fn mismatch<T>(&self, expected: &'static str) -> Result<T, PersistenceError> {
        Err(PersistenceError::TypeMismatch {
            expected,
            found: self.kind()
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(v) => write!(f, "'{}'", v.replace('\'', "''")),
            Self::Bytes(v) => write!(f, "<{} bytes>", v.len())
        }
    }
}

/// Conversion of a field into a [`Value`].
pub trait ToValue {
    /// Produce the column value for this field.
    fn to_value(&self) -> Value;
}

/// Conversion of a [`Value`] back into a field.
pub trait FromValue: Sized {
    /// Decode a column value.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::TypeMismatch`] when the value kind does not
    /// fit `Self`.
    fn from_value(value: Value) -> Result<Self, PersistenceError>;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, PersistenceError> {
        Ok(value)
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToValue::to_value)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, PersistenceError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some)
        }
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, PersistenceError> {
        match value {
            Value::Bool(v) => Ok(v),
            Value::Int(v) => Ok(v != 0),
            other => other.mismatch("bool")
        }
    }
}

macro_rules! int_value {
    ($($ty:ty),* $(,)?) => {$(
        impl ToValue for $ty {
            fn to_value(&self) -> Value {
                Value::Int(i64::from(*self))
            }
        }

        impl FromValue for $ty {
            fn from_value(value: Value) -> Result<Self, PersistenceError> {
                match value {
                    Value::Int(v) => <$ty>::try_from(v).map_err(|_| PersistenceError::TypeMismatch {
                        expected: stringify!($ty),
                        found:    "out-of-range integer"
                    }),
                    other => other.mismatch(stringify!($ty))
                }
            }
        }
    )*};
}

int_value!(i8, i16, i32, i64, u8, u16, u32);

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, PersistenceError> {
        match value {
            Value::Float(v) => Ok(v),
            Value::Int(v) => Ok(v as f64),
            other => other.mismatch("f64")
        }
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self, PersistenceError> {
        f64::from_value(value).map(|v| v as f32)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_owned())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, PersistenceError> {
        match value {
            Value::Text(v) => Ok(v),
            other => other.mismatch("String")
        }
    }
}

impl ToValue for Vec<u8> {
    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: Value) -> Result<Self, PersistenceError> {
        match value {
            Value::Bytes(v) => Ok(v),
            other => other.mismatch("Vec<u8>")
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
