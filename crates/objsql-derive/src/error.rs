// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Expansion errors of `#[derive(DomainModel)]`.
//!
//! | Error | Raised by | Meaning |
//! |-------|-----------|---------|
//! | [`DeclarationError`] | metadata resolver | `#[domain_model(...)]` is invalid for the struct |
//! | [`GenerationError`] | generation policy | members cannot be generated for the struct |
//!
//! Both reach the compiler as a [`darling::Error`] spanned at the offending
//! field, or at the struct name when no field is involved. Expansion of the
//! failing type emits nothing else.

use thiserror::Error;

use crate::model::parse::ModelDef;

/// Invalid metadata declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    /// `primary_key_type` names a type outside Long, Integer and Short.
    #[error(
        "`{model}`: primary_key_type `{found}` is not supported, expected one of {expected}"
    )]
    UnsupportedKeyType {
        /// Domain model name.
        model:    String,
        /// Declared type.
        found:    String,
        /// Accepted types.
        expected: &'static str
    },

    /// A non-key persisted field maps to the primary key column.
    #[error(
        "`{model}`: field `{field}` maps to column `{column}`, which is already mapped by the primary key (primary_column_name)"
    )]
    ColumnCollision {
        /// Domain model name.
        model:  String,
        /// Colliding field.
        field:  String,
        /// Column mapped twice.
        column: String
    },

    /// A name option was set to an empty string.
    #[error("`{model}`: {option} must not be empty")]
    EmptyOption {
        /// Domain model name.
        model:  String,
        /// Option key.
        option: &'static str
    },

    /// The primary key field type does not match `primary_key_type`.
    #[error(
        "`{model}`: primary key field `{field}` has type `{found}`, expected `{expected}` or `Option<{expected}>` (primary_key_type = {declared})"
    )]
    KeyFieldType {
        /// Domain model name.
        model:    String,
        /// Primary key field.
        field:    String,
        /// Declared field type.
        found:    String,
        /// Rust type of the key.
        expected: &'static str,
        /// Declared key type.
        declared: &'static str
    },

    /// The primary key field is marked `#[column(transient)]`.
    #[error("`{model}`: primary key field `{field}` cannot be transient")]
    TransientKey {
        /// Domain model name.
        model: String,
        /// Primary key field.
        field: String
    }
}

impl DeclarationError {
    /// Field the error points at, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ColumnCollision {
                field, ..
            }
            | Self::KeyFieldType {
                field, ..
            }
            | Self::TransientKey {
                field, ..
            } => Some(field),
            Self::UnsupportedKeyType {
                ..
            }
            | Self::EmptyOption {
                ..
            } => None
        }
    }
}

/// Member plan cannot be derived.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No field is named `primary_field_name`.
    #[error("`{model}` has no field `{field}` to hold the primary key (primary_field_name)")]
    MissingPrimaryField {
        /// Domain model name.
        model: String,
        /// Expected field name.
        field: String
    },

    /// A generated member name is produced twice.
    #[error("`{model}`: member `{member}` generated for field `{field}` collides with {other}")]
    MemberCollision {
        /// Domain model name.
        model:  String,
        /// Field whose accessor collides.
        field:  String,
        /// Member name.
        member: String,
        /// What the member collides with.
        other:  String
    }
}

impl GenerationError {
    /// Field the error points at, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingPrimaryField {
                ..
            } => None,
            Self::MemberCollision {
                field, ..
            } => Some(field)
        }
    }
}

/// Either expansion error.
#[derive(Debug, Error)]
pub enum ModelError {
    /// See [`DeclarationError`].
    #[error(transparent)]
    Declaration(#[from] DeclarationError),

    /// See [`GenerationError`].
    #[error(transparent)]
    Generation(#[from] GenerationError)
}

impl ModelError {
    /// Convert into a compiler error spanned at the offending item.
    pub fn into_darling(self, model: &ModelDef) -> darling::Error {
        let field = match &self {
            Self::Declaration(e) => e.field(),
            Self::Generation(e) => e.field()
        }
        .and_then(|name| model.field(name));

        let error = darling::Error::custom(&self);
        match field {
            Some(field) => error.with_span(&field.ident),
            None => error.with_span(&model.ident)
        }
    }
}
