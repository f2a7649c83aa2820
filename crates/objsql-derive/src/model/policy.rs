// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation policy.
//!
//! Maps resolved metadata plus the declared fields to the set of members the
//! macro emits. The plan is computed once per type; every generator reads
//! from it and never re-derives a rule on its own.
//!
//! # Members
//!
//! | Member | Source | Rule |
//! |--------|--------|------|
//! | getter `f(&self) -> &T` | every field | always |
//! | setter `set_f(&mut self, impl Into<T>)` | every field | returns `&mut Self` when fluent |
//! | `query_by_f` | persisted fields | unless `#[column(skip_query)]` |
//! | INSERT column | persisted fields | key only when not store-assigned |
//! | UPDATE column | persisted non-key fields | null skipped when `skip_null_on_update` and `Option` |
//! | `insert_all`, `update_all`, `delete_all` | type | always, transactional |


use std::collections::HashMap;

use quote::format_ident;
use syn::{Ident, ext::IdentExt};

use super::{
    parse::{FieldDef, PrimaryKeyType},
    resolve::ResolvedMetadata
};
use crate::error::GenerationError;

/// Inherent members generated on every model.
pub const RESERVED_MEMBERS: &[&str] = &[
    "table",
    "insert",
    "update",
    "delete",
    "insert_all",
    "update_all",
    "delete_all"
];

/// Getter and setter of one field.
#[derive(Debug, Clone)]
pub struct Accessor<'a> {
    /// Accessed field.
    pub field: &'a FieldDef,

    /// Getter name, the field identifier itself.
    pub getter: Ident,

    /// Setter name, `set_<field>`.
    pub setter: Ident
}

/// A field mapped to a column.
#[derive(Debug, Clone)]
pub struct ColumnPlan<'a> {
    /// Mapped field.
    pub field: &'a FieldDef,

    /// Column name.
    pub column: String
}

/// A column assigned by UPDATE.
#[derive(Debug, Clone)]
pub struct UpdateColumn<'a> {
    /// Mapped field and column.
    pub column: ColumnPlan<'a>,

    /// Leave the column out while the value is `None`.
    pub skip_when_null: bool
}

/// A generated `query_by_<field>` method.
#[derive(Debug, Clone)]
pub struct QueryPlan<'a> {
    /// Queried field and column.
    pub column: ColumnPlan<'a>,

    /// Method name.
    pub method: Ident
}

/// Primary key handling.
#[derive(Debug, Clone)]
pub struct KeyPlan<'a> {
    /// Key field and column.
    pub column: ColumnPlan<'a>,

    /// Declared key type.
    pub key_type: PrimaryKeyType,

    /// Store-side key expression, `None` when keys are supplied by the
    /// caller and written by INSERT.
    pub generated_by: Option<&'a str>
}

impl KeyPlan<'_> {
    /// Check whether INSERT writes the key column.
    #[must_use]
    pub fn in_insert(&self) -> bool {
        self.generated_by.is_none()
    }
}

/// Transactional batch method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrapper {
    /// `insert_all(&Table, &mut [Self])`.
    InsertAll,
    /// `update_all(&Table, &[Self])`.
    UpdateAll,
    /// `delete_all(&Table, &[Self])`.
    DeleteAll
}

impl Wrapper {
    /// Every wrapper, in emission order.
    pub const ALL: [Self; 3] = [Self::InsertAll, Self::UpdateAll, Self::DeleteAll];

    /// Method name of the wrapper.
    #[must_use]
    pub const fn method(self) -> &'static str {
        match self {
            Self::InsertAll => "insert_all",
            Self::UpdateAll => "update_all",
            Self::DeleteAll => "delete_all"
        }
    }

    /// Per-instance method the wrapper repeats.
    #[must_use]
    pub const fn step(self) -> &'static str {
        match self {
            Self::InsertAll => "insert",
            Self::UpdateAll => "update",
            Self::DeleteAll => "delete"
        }
    }
}

/// Every member generated for one model.
#[derive(Debug, Clone)]
pub struct MemberPlan<'a> {
    /// Resolved declaration the plan was derived from.
    pub metadata: &'a ResolvedMetadata,

    /// Accessors, one per declared field.
    pub accessors: Vec<Accessor<'a>>,

    /// Primary key.
    pub key: KeyPlan<'a>,

    /// Persisted fields in declaration order.
    pub columns: Vec<ColumnPlan<'a>>,

    /// INSERT column list.
    pub insert: Vec<ColumnPlan<'a>>,

    /// UPDATE column list. Never holds the key.
    pub update: Vec<UpdateColumn<'a>>,

    /// Query methods.
    pub queries: Vec<QueryPlan<'a>>,

    /// Fields without a column, defaulted when rows are mapped.
    pub transient: Vec<&'a FieldDef>,

    /// Transactional wrappers.
    pub wrappers: Vec<Wrapper>
}

impl<'a> MemberPlan<'a> {
    /// Derive the member plan.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::MissingPrimaryField`] when no field is named
    ///   `primary_field_name`
    /// - [`GenerationError::MemberCollision`] when an accessor name is
    ///   generated twice or shadows a reserved member
    pub fn derive(
        metadata: &'a ResolvedMetadata,
        fields: &'a [FieldDef]
    ) -> Result<Self, GenerationError> {
        let key_field = fields
            .iter()
            .find(|f| metadata.is_primary(f))
            .ok_or_else(|| GenerationError::MissingPrimaryField {
                model: metadata.model.clone(),
                field: metadata.primary_field_name.clone()
            })?;

        let accessors: Vec<_> = fields
            .iter()
            .map(|field| Accessor {
                field,
                getter: field.ident.clone(),
                setter: format_ident!("set_{}", field.name_str())
            })
            .collect();
        check_members(metadata, &accessors)?;

        let key = KeyPlan {
            column:       ColumnPlan {
                field:  key_field,
                column: metadata.primary_column_name.clone()
            },
            key_type:     metadata.primary_key_type,
            generated_by: metadata
                .store_assigns_key()
                .then(|| metadata.primary_key_default_value.trim())
        };

        let mut columns = Vec::new();
        let mut transient = Vec::new();
        for field in fields {
            if metadata.is_persisted(field) {
                columns.push(ColumnPlan {
                    field,
                    column: metadata.column_name(field)
                });
            } else {
                transient.push(field);
            }
        }

        let insert = columns
            .iter()
            .filter(|c| !metadata.is_primary(c.field) || key.in_insert())
            .cloned()
            .collect();

        let update = columns
            .iter()
            .filter(|c| !metadata.is_primary(c.field))
            .map(|c| UpdateColumn {
                column:         c.clone(),
                skip_when_null: metadata.skip_null_on_update && c.field.is_option()
            })
            .collect();

        let queries = columns
            .iter()
            .filter(|c| !c.field.markers.skip_query)
            .map(|c| QueryPlan {
                column: c.clone(),
                method: format_ident!("query_by_{}", c.field.name_str())
            })
            .collect();

        Ok(Self {
            metadata,
            accessors,
            key,
            columns,
            insert,
            update,
            queries,
            transient,
            wrappers: Wrapper::ALL.to_vec()
        })
    }

    /// Persisted column names in declaration order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.column.as_str()).collect()
    }

    /// Queryable column names in declaration order.
    #[must_use]
    pub fn queryable_column_names(&self) -> Vec<&str> {
        self.queries.iter().map(|q| q.column.column.as_str()).collect()
    }
}

fn check_members(
    metadata: &ResolvedMetadata,
    accessors: &[Accessor<'_>]
) -> Result<(), GenerationError> {
    let mut taken: HashMap<String, String> = RESERVED_MEMBERS
        .iter()
        .map(|m| ((*m).to_owned(), format!("the generated `{}` method", m)))
        .collect();

    for accessor in accessors {
        let field = accessor.field.name_str();
        for member in [&accessor.getter, &accessor.setter] {
            let member = member.unraw().to_string();
            if let Some(other) = taken.get(&member) {
                return Err(GenerationError::MemberCollision {
                    model: metadata.model.clone(),
                    field,
                    member,
                    other: other.clone()
                });
            }
            taken.insert(member, format!("an accessor of field `{}`", field));
        }
    }

    Ok(())
}
