// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Metadata resolver.
//!
//! Turns the raw `#[domain_model(...)]` option set into a
//! [`ResolvedMetadata`] record with every default applied, or fails with a
//! [`DeclarationError`]. Resolution is pure: the same input always yields
//! an equal record, and the naming service is the only collaborator.
//!
//! # Validation
//!
//! | Rule | Error |
//! |------|-------|
//! | `primary_key_type` is Long, Integer or Short | `UnsupportedKeyType` |
//! | `data_source`, `primary_column_name`, `primary_field_name` are not empty | `EmptyOption` |
//! | key field is `T` or `Option<T>` of the key type | `KeyFieldType` |
//! | key field is not transient | `TransientKey` |
//! | no other persisted field maps to the key column | `ColumnCollision` |

#[cfg(test)]
mod tests;

use super::{
    naming::Tableize,
    parse::{FieldDef, PrimaryKeyType, RawDeclaration}
};
use crate::error::DeclarationError;

/// Default logical data source name.
pub const DEFAULT_DATA_SOURCE_NAME: &str = "objsql-default-datasource";

/// Default primary key column.
pub const DEFAULT_PRIMARY_COLUMN_NAME: &str = "id";

/// Default primary key field.
pub const DEFAULT_PRIMARY_FIELD_NAME: &str = "id";

/// Fully resolved declaration of one domain model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMetadata {
    /// Simple type name.
    pub model: String,

    /// Table name, explicit or derived.
    pub table_name: String,

    /// Logical data source name.
    pub data_source: String,

    /// Setters return the receiver.
    pub fluent: bool,

    /// Key type.
    pub primary_key_type: PrimaryKeyType,

    /// Key column.
    pub primary_column_name: String,

    /// Key field.
    pub primary_field_name: String,

    /// Null fields are left out of updates.
    pub skip_null_on_update: bool,

    /// Every field is persisted unless transient.
    pub all_fields_persistent: bool,

    /// Store-side key expression; empty when keys are supplied.
    pub primary_key_default_value: String
}

impl ResolvedMetadata {
    /// Check whether the store assigns keys on insert.
    #[must_use]
    pub fn store_assigns_key(&self) -> bool {
        !self.primary_key_default_value.trim().is_empty()
    }

    /// Check whether `field` holds the primary key.
    #[must_use]
    pub fn is_primary(&self, field: &FieldDef) -> bool {
        field.name_str() == self.primary_field_name
    }

    /// Check whether `field` maps to a column.
    ///
    /// The key field always does; transient fields never do; other fields
    /// follow `all_fields_persistent` or their `persistent` marker.
    #[must_use]
    pub fn is_persisted(&self, field: &FieldDef) -> bool {
        if self.is_primary(field) {
            return true;
        }
        if field.is_transient() {
            return false;
        }
        self.all_fields_persistent || field.markers.persistent
    }

    /// Column `field` maps to.
    #[must_use]
    pub fn column_name(&self, field: &FieldDef) -> String {
        if self.is_primary(field) {
            self.primary_column_name.clone()
        } else {
            field.name_str()
        }
    }
}

/// Resolve the declaration of `model`.
///
/// # Arguments
///
/// * `model` - Simple type name
/// * `raw` - Options as written
/// * `fields` - Declared fields in order
/// * `naming` - Called only when no explicit table name is given
///
/// # Errors
///
/// See the module documentation.
pub fn resolve(
    model: &str,
    raw: &RawDeclaration,
    fields: &[FieldDef],
    naming: &dyn Tableize
) -> Result<ResolvedMetadata, DeclarationError> {
    let primary_key_type = match &raw.primary_key_type {
        None => PrimaryKeyType::default(),
        Some(name) => PrimaryKeyType::from_name(name.as_str()).ok_or_else(|| {
            DeclarationError::UnsupportedKeyType {
                model:    model.to_owned(),
                found:    name.as_str().to_owned(),
                expected: PrimaryKeyType::SUPPORTED
            }
        })?
    };

    let data_source = non_empty(
        model,
        "data_source",
        raw.data_source.as_deref(),
        DEFAULT_DATA_SOURCE_NAME
    )?;
    let primary_column_name = non_empty(
        model,
        "primary_column_name",
        raw.primary_column_name.as_deref(),
        DEFAULT_PRIMARY_COLUMN_NAME
    )?;
    let primary_field_name = non_empty(
        model,
        "primary_field_name",
        raw.primary_field_name.as_deref(),
        DEFAULT_PRIMARY_FIELD_NAME
    )?;

    let table_name = match raw.table_name.as_deref() {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => naming.tableize(model)
    };

    let metadata = ResolvedMetadata {
        model: model.to_owned(),
        table_name,
        data_source,
        fluent: raw.fluent.unwrap_or(true),
        primary_key_type,
        primary_column_name,
        primary_field_name,
        skip_null_on_update: raw.skip_null_on_update.unwrap_or(true),
        all_fields_persistent: raw.all_fields_persistent.unwrap_or(true),
        primary_key_default_value: raw.primary_key_default_value.clone().unwrap_or_default()
    };

    for field in fields {
        if metadata.is_primary(field) {
            check_key_field(&metadata, field)?;
        } else if metadata.is_persisted(field) && field.name_str() == metadata.primary_column_name
        {
            return Err(DeclarationError::ColumnCollision {
                model:  metadata.model.clone(),
                field:  field.name_str(),
                column: metadata.primary_column_name.clone()
            });
        }
    }

    Ok(metadata)
}

fn non_empty(
    model: &str,
    option: &'static str,
    value: Option<&str>,
    default: &str
) -> Result<String, DeclarationError> {
    match value {
        None => Ok(default.to_owned()),
        Some(value) if value.trim().is_empty() => Err(DeclarationError::EmptyOption {
            model: model.to_owned(),
            option
        }),
        Some(value) => Ok(value.to_owned())
    }
}

fn check_key_field(metadata: &ResolvedMetadata, field: &FieldDef) -> Result<(), DeclarationError> {
    if field.is_transient() {
        return Err(DeclarationError::TransientKey {
            model: metadata.model.clone(),
            field: field.name_str()
        });
    }

    let key_type = metadata.primary_key_type;
    if !key_type.matches(field.value_type()) {
        let ty = field.ty();
        return Err(DeclarationError::KeyFieldType {
            model:    metadata.model.clone(),
            field:    field.name_str(),
            found:    quote::quote!(#ty).to_string().replace(' ', ""),
            expected: key_type.rust_type(),
            declared: key_type.declared_name()
        });
    }

    Ok(())
}
