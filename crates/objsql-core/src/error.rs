// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime error type shared by tables, data sources and transactions.

use std::fmt;

use thiserror::Error;

use crate::Value;

/// Boxed error produced by a concrete store.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error returned by every runtime operation of a domain model.
///
/// Errors raised by a [`DataSource`](crate::DataSource) travel through
/// [`Table`](crate::Table) and [`transactional`](crate::transactional)
/// unchanged.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// No data source is registered under the requested name.
    #[error("data source `{0}` is not registered")]
    DataSourceNotFound(String),

    /// A row handed to `from_row` does not carry a mapped column.
    #[error("column `{0}` is missing from the row")]
    MissingColumn(String),

    /// A value could not be converted into the requested Rust type.
    #[error("expected {expected} value, found {found}")]
    TypeMismatch {
        /// Rust type that was requested.
        expected: &'static str,
        /// Kind of value that was stored.
        found:    &'static str
    },

    /// A column value could not be converted into its field type.
    #[error("column `{column}`: expected {expected} value, found {found}")]
    ColumnType {
        /// Column being decoded.
        column:   String,
        /// Rust type that was requested.
        expected: &'static str,
        /// Kind of value that was stored.
        found:    &'static str
    },

    /// A store-assigned key does not fit the declared key type.
    #[error("key {value} is out of range for a {target} primary key")]
    KeyOutOfRange {
        /// Key returned by the store.
        value:  i64,
        /// Rust type of the primary key.
        target: &'static str
    },

    /// An insert supplied a key that already exists.
    #[error("duplicate primary key {key} in table `{table}`")]
    DuplicateKey {
        /// Table the row was inserted into.
        table: String,
        /// Conflicting key.
        key:   Value
    },

    /// Transaction boundary was used out of order.
    #[error("cannot {phase} transaction: {message}")]
    Transaction {
        /// Boundary that failed.
        phase:   TransactionPhase,
        /// Description of the misuse.
        message: String
    },

    /// Failure reported by the underlying store.
    #[error(transparent)]
    Backend(#[from] BoxError)
}

impl PersistenceError {
    /// Wrap an arbitrary store failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use objsql_core::PersistenceError;
    ///
    /// let err = PersistenceError::backend("connection reset");
    /// assert_eq!(err.to_string(), "connection reset");
    /// ```
    pub fn backend(error: impl Into<BoxError>) -> Self {
        Self::Backend(error.into())
    }

    /// Attach a column name to a bare conversion error.
    pub fn in_column(self, column: &str) -> Self {
        match self {
            Self::TypeMismatch {
                expected,
                found
            } => Self::ColumnType {
                column: column.to_owned(),
                expected,
                found
            },
            other => other
        }
    }

    /// Check if this error came from a transaction boundary.
    pub const fn is_transaction(&self) -> bool {
        matches!(self, Self::Transaction { .. })
    }
}

/// Transaction boundary named by [`PersistenceError::Transaction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionPhase {
    /// Starting a transaction.
    Begin,
    /// Committing the active transaction.
    Commit,
    /// Rolling back the active transaction.
    Rollback
}

impl fmt::Display for TransactionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Begin => write!(f, "begin"),
            Self::Commit => write!(f, "commit"),
            Self::Rollback => write!(f, "rollback")
        }
    }
}
