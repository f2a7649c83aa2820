// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level parsing.
//!
//! Fields take an optional marker attribute:
//!
//! ```rust,ignore
//! #[column(persistent)]   // persisted even with all_fields_persistent = false
//! #[column(transient)]    // never a column, defaulted when rows are mapped
//! #[column(skip_query)]   // no query_by_<field> method
//! ```
//!
//! Repeated `#[column(...)]` attributes on one field are combined.

use syn::{Attribute, Field, GenericArgument, Ident, Meta, PathArguments, Type, ext::IdentExt};

/// Markers parsed from `#[column(...)]`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMarkers {
    /// Persist the field when fields are not persistent by default.
    pub persistent: bool,

    /// Never persist the field. Overrides `persistent`.
    pub transient: bool,

    /// Do not generate a query method for the field.
    pub skip_query: bool
}

impl ColumnMarkers {
    /// Parse markers from a `#[column(...)]` attribute.
    ///
    /// # Errors
    ///
    /// Unknown markers and `#[column = ...]` are rejected.
    pub fn from_attr(attr: &Attribute) -> darling::Result<Self> {
        let mut markers = Self::default();

        match &attr.meta {
            Meta::Path(_) => {}
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("persistent") {
                        markers.persistent = true;
                    } else if meta.path.is_ident("transient") {
                        markers.transient = true;
                    } else if meta.path.is_ident("skip_query") {
                        markers.skip_query = true;
                    } else {
                        return Err(meta.error(
                            "unknown column marker, expected `persistent`, `transient` or `skip_query`"
                        ));
                    }
                    Ok(())
                })?;
            }
            Meta::NameValue(_) => {
                return Err(darling::Error::custom("expected `#[column(...)]`").with_span(attr));
            }
        }

        Ok(markers)
    }

    /// Union of two marker sets.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            persistent: self.persistent || other.persistent,
            transient:  self.transient || other.transient,
            skip_query: self.skip_query || other.skip_query
        }
    }
}

/// A declared field of the domain model.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Declared type.
    pub ty: Type,

    /// Column markers.
    pub markers: ColumnMarkers
}

impl FieldDef {
    /// Parse a named field.
    ///
    /// # Errors
    ///
    /// Returns error for unnamed fields or malformed `#[column(...)]`.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("DomainModel fields must be named").with_span(field)
        })?;

        let mut markers = ColumnMarkers::default();
        for attr in &field.attrs {
            if attr.path().is_ident("column") {
                markers = markers.merge(ColumnMarkers::from_attr(attr)?);
            }
        }

        Ok(Self {
            ident,
            ty: field.ty.clone(),
            markers
        })
    }

    /// Field identifier.
    #[must_use]
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Field name without a raw-identifier prefix.
    ///
    /// Used for column names and generated member names.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Declared type.
    #[must_use]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Check if the field type is `Option<T>`.
    #[must_use]
    pub fn is_option(&self) -> bool {
        self.option_inner().is_some()
    }

    /// `T` of an `Option<T>` field.
    #[must_use]
    pub fn option_inner(&self) -> Option<&Type> {
        if let Type::Path(type_path) = &self.ty
            && let Some(segment) = type_path.path.segments.last()
            && segment.ident == "Option"
            && let PathArguments::AngleBracketed(args) = &segment.arguments
            && let Some(GenericArgument::Type(inner)) = args.args.first()
        {
            return Some(inner);
        }
        None
    }

    /// Type with one `Option` layer removed.
    #[must_use]
    pub fn value_type(&self) -> &Type {
        self.option_inner().unwrap_or(&self.ty)
    }

    /// Check if the field is marked `#[column(transient)]`.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        self.markers.transient
    }
}
