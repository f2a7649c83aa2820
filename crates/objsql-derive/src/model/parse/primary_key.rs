// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declared primary key types.
//!
//! | Declared | Alias | Rust type |
//! |----------|-------|-----------|
//! | `Long` (default) | `i64` | `i64` |
//! | `Integer` | `i32` | `i32` |
//! | `Short` | `i16` | `i16` |

use proc_macro2::Span;
use syn::{Ident, Type};

/// One of the supported primary key types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimaryKeyType {
    /// 64-bit key.
    #[default]
    Long,
    /// 32-bit key.
    Integer,
    /// 16-bit key.
    Short
}

impl PrimaryKeyType {
    /// Accepted names, for error messages.
    pub const SUPPORTED: &'static str = "Long (i64), Integer (i32), Short (i16)";

    /// Parse a declared type name or path.
    ///
    /// Only the last path segment is considered, so `core::primitive::i32`
    /// is accepted as `Integer`.
    pub fn from_name(name: &str) -> Option<Self> {
        let last = name.rsplit("::").next().unwrap_or(name).trim();
        match last {
            "Long" | "i64" => Some(Self::Long),
            "Integer" | "i32" => Some(Self::Integer),
            "Short" | "i16" => Some(Self::Short),
            _ => None
        }
    }

    /// Declared name.
    pub const fn declared_name(self) -> &'static str {
        match self {
            Self::Long => "Long",
            Self::Integer => "Integer",
            Self::Short => "Short"
        }
    }

    /// Rust type name.
    pub const fn rust_type(self) -> &'static str {
        match self {
            Self::Long => "i64",
            Self::Integer => "i32",
            Self::Short => "i16"
        }
    }

    /// Rust type as an identifier for generated code.
    pub fn rust_ident(self) -> Ident {
        Ident::new(self.rust_type(), Span::call_site())
    }

    /// Check whether `ty` is this key type, written as a bare primitive.
    pub fn matches(self, ty: &Type) -> bool {
        if let Type::Path(type_path) = ty
            && type_path.qself.is_none()
            && let Some(segment) = type_path.path.segments.last()
        {
            return segment.arguments.is_none() && segment.ident == self.rust_type();
        }
        false
    }
}
