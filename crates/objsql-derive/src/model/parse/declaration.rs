// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct-level attribute parsing with darling.
//!
//! Every option is parsed as `Option<_>`: defaults and validation belong to
//! the resolver, so an absent option and an explicit default stay
//! distinguishable here.
//!
//! # Supported Attributes
//!
//! | Attribute | Type | Default |
//! |-----------|------|---------|
//! | `table_name` | string | derived from the type name |
//! | `data_source` | string | `"objsql-default-datasource"` |
//! | `fluent` | bool | `true` |
//! | `primary_key_type` | `Long`, `Integer`, `Short` (or `i64`, `i32`, `i16`) | `Long` |
//! | `primary_column_name` | string | `"id"` |
//! | `primary_field_name` | string | `"id"` |
//! | `skip_null_on_update` | bool | `true` |
//! | `all_fields_persistent` | bool | `true` |
//! | `primary_key_default_value` | string | `""` |

use darling::{FromDeriveInput, FromMeta};
use syn::{Expr, Generics, Ident, Path, Visibility};

/// Declared key type name, accepted as a string or a bare path.
///
/// ```rust,ignore
/// #[domain_model(primary_key_type = "Integer")]
/// #[domain_model(primary_key_type = i32)]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTypeName(pub String);

impl KeyTypeName {
    /// Declared name as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for KeyTypeName {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl FromMeta for KeyTypeName {
    fn from_string(value: &str) -> darling::Result<Self> {
        Ok(Self::from(value))
    }

    fn from_expr(expr: &Expr) -> darling::Result<Self> {
        match expr {
            Expr::Path(path) if path.qself.is_none() => Ok(Self(path_to_string(&path.path))),
            Expr::Lit(lit) => Self::from_value(&lit.lit),
            Expr::Group(group) => Self::from_expr(&group.expr),
            _ => Err(
                darling::Error::custom("expected a key type such as `Long` or `\"Integer\"`")
                    .with_span(expr)
            )
        }
    }
}

fn path_to_string(path: &Path) -> String {
    path.segments
        .iter()
        .map(|s| s.ident.to_string())
        .collect::<Vec<_>>()
        .join("::")
}

/// Raw option set of `#[domain_model(...)]`, before defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDeclaration {
    /// Explicit table name; empty means derive.
    pub table_name: Option<String>,

    /// Logical data source name.
    pub data_source: Option<String>,

    /// Chainable setters.
    pub fluent: Option<bool>,

    /// Declared key type.
    pub primary_key_type: Option<KeyTypeName>,

    /// Primary key column.
    pub primary_column_name: Option<String>,

    /// Primary key field.
    pub primary_field_name: Option<String>,

    /// Leave null fields out of updates.
    pub skip_null_on_update: Option<bool>,

    /// Persist every declared field by default.
    pub all_fields_persistent: Option<bool>,

    /// Store-side key expression.
    pub primary_key_default_value: Option<String>
}

/// Darling target for the derive input.
///
/// This is an internal struct; the rest of the macro works with
/// [`ModelDef`](super::ModelDef).
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(domain_model), supports(struct_named))]
pub struct DeclarationAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct visibility.
    pub vis: Visibility,

    /// Struct generics; must be empty.
    pub generics: Generics,

    /// See [`RawDeclaration::table_name`].
    pub table_name: Option<String>,

    /// See [`RawDeclaration::data_source`].
    pub data_source: Option<String>,

    /// See [`RawDeclaration::fluent`].
    pub fluent: Option<bool>,

    /// See [`RawDeclaration::primary_key_type`].
    pub primary_key_type: Option<KeyTypeName>,

    /// See [`RawDeclaration::primary_column_name`].
    pub primary_column_name: Option<String>,

    /// See [`RawDeclaration::primary_field_name`].
    pub primary_field_name: Option<String>,

    /// See [`RawDeclaration::skip_null_on_update`].
    pub skip_null_on_update: Option<bool>,

    /// See [`RawDeclaration::all_fields_persistent`].
    pub all_fields_persistent: Option<bool>,

    /// See [`RawDeclaration::primary_key_default_value`].
    pub primary_key_default_value: Option<String>
}

impl DeclarationAttrs {
    /// Split off the option set.
    pub fn declaration(&self) -> RawDeclaration {
        RawDeclaration {
            table_name:                self.table_name.clone(),
            data_source:               self.data_source.clone(),
            fluent:                    self.fluent,
            primary_key_type:          self.primary_key_type.clone(),
            primary_column_name:       self.primary_column_name.clone(),
            primary_field_name:        self.primary_field_name.clone(),
            skip_null_on_update:       self.skip_null_on_update,
            all_fields_persistent:     self.all_fields_persistent,
            primary_key_default_value: self.primary_key_default_value.clone()
        }
    }
}
