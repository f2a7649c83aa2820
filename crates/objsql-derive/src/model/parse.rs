// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the DomainModel derive macro.
//!
//! Struct-level options come from `#[domain_model(...)]` through darling;
//! field markers come from `#[column(...)]` through `parse_nested_meta`.
//! Parsing only checks syntax. Defaults and cross-field rules are applied
//! by the resolver.
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── declaration.rs  - #[domain_model(...)] (DeclarationAttrs, RawDeclaration)
//! ├── field.rs        - FieldDef, #[column(...)] markers
//! └── primary_key.rs  - PrimaryKeyType (Long, Integer, Short)
//! ```

mod declaration;
mod field;
mod primary_key;

use darling::FromDeriveInput;
#[cfg(test)]
pub use declaration::KeyTypeName;
pub use declaration::RawDeclaration;
pub use field::FieldDef;
pub use primary_key::PrimaryKeyType;
use syn::{Data, DeriveInput, Fields, Ident, Visibility};

use self::declaration::DeclarationAttrs;

/// Parsed derive input: struct identity, raw options and fields.
#[derive(Debug, Clone)]
pub struct ModelDef {
    /// Struct identifier (e.g., `Order`).
    pub ident: Ident,

    /// Struct visibility, propagated to generated items.
    pub vis: Visibility,

    /// Options exactly as written.
    pub declaration: RawDeclaration,

    /// Declared fields in order.
    pub fields: Vec<FieldDef>
}

impl ModelDef {
    /// Parse a `#[derive(DomainModel)]` input.
    ///
    /// # Errors
    ///
    /// - Applied to an enum, union, tuple struct or unit struct
    /// - Applied to a generic struct
    /// - Unknown `#[domain_model(...)]` keys or mistyped values
    /// - Malformed `#[column(...)]` markers
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = DeclarationAttrs::from_derive_input(input)?;

        if !attrs.generics.params.is_empty() {
            return Err(
                darling::Error::custom("DomainModel cannot be derived for generic structs")
                    .with_span(&attrs.generics)
            );
        }

        let fields = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named
                    .named
                    .iter()
                    .map(FieldDef::from_field)
                    .collect::<darling::Result<Vec<_>>>()?,
                _ => {
                    return Err(darling::Error::custom("DomainModel requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("DomainModel can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        Ok(Self {
            declaration: attrs.declaration(),
            ident: attrs.ident,
            vis: attrs.vis,
            fields
        })
    }

    /// Simple type name, input of table name derivation.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }

    /// Find a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name_str() == name)
    }
}
