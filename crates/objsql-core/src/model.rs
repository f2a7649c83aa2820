// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The contract implemented by `#[derive(DomainModel)]`.
//!
//! The resolved declaration is compiled into associated constants; the
//! statement builders and row mapping are generated per type.

use crate::{
    DeleteStatement, FromValue, InsertStatement, PersistenceError, Row, ToValue, UpdateStatement,
    Value
};

/// Rust types accepted as primary keys.
///
/// | Declared type | Rust type |
/// |---------------|-----------|
/// | `Long` | `i64` |
/// | `Integer` | `i32` |
/// | `Short` | `i16` |
pub trait PrimaryKey: ToValue + FromValue + Copy + Send + Sync + 'static {
    /// Declared type name.
    const DECLARED_TYPE: &'static str;

    /// Narrow a store-assigned key into this type.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::KeyOutOfRange`] when `key` does not fit.
    fn from_generated(key: i64) -> Result<Self, PersistenceError>;
}

macro_rules! primary_key {
    ($($ty:ty => $declared:literal),* $(,)?) => {$(
        impl PrimaryKey for $ty {
            const DECLARED_TYPE: &'static str = $declared;

            fn from_generated(key: i64) -> Result<Self, PersistenceError> {
                <$ty>::try_from(key).map_err(|_| PersistenceError::KeyOutOfRange {
                    value:  key,
                    target: stringify!($ty)
                })
            }
        }
    )*};
}

primary_key!(i64 => "Long", i32 => "Integer", i16 => "Short");

/// A type mapped to a relational table.
///
/// Implemented by `#[derive(DomainModel)]`; the constants mirror the
/// resolved `#[domain_model(...)]` declaration.
pub trait DomainModel: Sized + Send + Sync {
    /// Rust type of the primary key.
    type Key: PrimaryKey;

    /// Table the type maps to.
    const TABLE_NAME: &'static str;
    /// Logical data source the table lives in.
    const DATA_SOURCE_NAME: &'static str;
    /// Column holding the primary key.
    const PRIMARY_COLUMN_NAME: &'static str;
    /// Field holding the primary key.
    const PRIMARY_FIELD_NAME: &'static str;
    /// Store-side key expression; `Some` means the store assigns keys.
    const PRIMARY_KEY_DEFAULT_VALUE: Option<&'static str>;
    /// Whether null fields are left out of updates.
    const SKIP_NULL_ON_UPDATE: bool;
    /// Whether every declared field is persisted by default.
    const ALL_FIELDS_PERSISTENT: bool;
    /// Whether setters return the receiver.
    const FLUENT: bool;

    /// Every mapped column in declaration order, key included.
    fn columns() -> &'static [&'static str];

    /// Columns with a generated `query_by_*` method.
    fn queryable_columns() -> &'static [&'static str];

    /// Current primary key value.
    fn primary_key_value(&self) -> Value;

    /// `INSERT` for this instance.
    fn insert_statement(&self) -> InsertStatement;

    /// `UPDATE` for this instance, keyed by its primary key.
    fn update_statement(&self) -> UpdateStatement;

    /// `DELETE` of this instance by its primary key.
    fn delete_statement(&self) -> DeleteStatement {
        DeleteStatement::by_key(
            Self::TABLE_NAME,
            Self::PRIMARY_COLUMN_NAME,
            self.primary_key_value()
        )
    }

    /// Store the key assigned by the data source after an insert.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::KeyOutOfRange`] when the key does not fit
    /// [`Self::Key`].
    fn apply_generated_key(&mut self, key: i64) -> Result<(), PersistenceError>;

    /// Build an instance from a row holding every mapped column.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::MissingColumn`] or
    /// [`PersistenceError::ColumnType`] when the row does not fit.
    fn from_row(row: &Row) -> Result<Self, PersistenceError>;
}
