// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dialect-neutral statements built by generated code.
//!
//! Statements carry table, columns and bound values. Rendering them into a
//! concrete dialect is the job of the [`DataSource`](crate::DataSource); the
//! [`Display`](std::fmt::Display) impls produce generic SQL with `?`
//! placeholders for logging.
//!
//! | Statement | Built by | SQL shape |
//! |-----------|----------|-----------|
//! | [`InsertStatement`] | `DomainModel::insert_statement` | `INSERT INTO t (a, b) VALUES (?, ?)` |
//! | [`UpdateStatement`] | `DomainModel::update_statement` | `UPDATE t SET a = ? WHERE id = ?` |
//! | [`DeleteStatement`] | `DomainModel::delete_statement` | `DELETE FROM t WHERE id = ?` |
//! | [`SelectStatement`] | [`Table`](crate::Table) queries | `SELECT a, b FROM t WHERE a = ?` |

use std::fmt;

use crate::{Row, Value};

/// Row filter shared by select and delete statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Matches every row.
    All,
    /// Column equals a non-null value.
    Eq {
        /// Column to compare.
        column: String,
        /// Expected value.
        value:  Value
    },
    /// Column is `NULL`.
    IsNull {
        /// Column to test.
        column: String
    }
}

impl Predicate {
    /// Equality filter; a null value becomes [`Predicate::IsNull`].
    pub fn equals(column: impl Into<String>, value: Value) -> Self {
        let column = column.into();
        if value.is_null() {
            Self::IsNull {
                column
            }
        } else {
            Self::Eq {
                column,
                value
            }
        }
    }

    /// Check whether a row satisfies the filter.
    pub fn matches(&self, row: &Row) -> bool {
        match self {
            Self::All => true,
            Self::Eq {
                column,
                value
            } => row.get(column) == Some(value),
            Self::IsNull {
                column
            } => row.get(column).is_none_or(Value::is_null)
        }
    }

    fn params(&self) -> Vec<&Value> {
        match self {
            Self::Eq {
                value, ..
            } => vec![value],
            _ => Vec::new()
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => Ok(()),
            Self::Eq {
                column, ..
            } => write!(f, " WHERE {} = ?", column),
            Self::IsNull {
                column
            } => write!(f, " WHERE {} IS NULL", column)
        }
    }
}

/// `INSERT` of one model instance.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    table:          String,
    primary_column: String,
    values:         Vec<(String, Value)>,
    generated_key:  Option<String>
}

impl InsertStatement {
    /// Start an insert into `table` whose key column is `primary_column`.
    pub fn new(table: impl Into<String>, primary_column: impl Into<String>) -> Self {
        Self {
            table:          table.into(),
            primary_column: primary_column.into(),
            values:         Vec::new(),
            generated_key:  None
        }
    }

    /// Bind a column value.
    pub fn value(&mut self, column: impl Into<String>, value: Value) -> &mut Self {
        self.values.push((column.into(), value));
        self
    }

    /// Mark the key as store-assigned by `expression`.
    ///
    /// The key column is then left out of the column list; the expression is
    /// a hint for the data source, which reports the assigned key back.
    pub fn generated_by(&mut self, expression: impl Into<String>) -> &mut Self {
        let expression = expression.into();
        self.values.retain(|(c, _)| *c != self.primary_column);
        self.generated_key = Some(expression);
        self
    }

    /// Target table.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Key column of the target table.
    pub fn primary_column(&self) -> &str {
        &self.primary_column
    }

    /// Bound columns in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(c, _)| c.as_str())
    }

    /// Bound `(column, value)` pairs.
    pub fn values(&self) -> &[(String, Value)] {
        &self.values
    }

    /// Key-generation expression, if the store assigns the key.
    pub fn generated_key(&self) -> Option<&str> {
        self.generated_key.as_deref()
    }

    /// Check whether the store decides the key of the inserted row.
    ///
    /// True when a key expression is attached or when the bound key is null.
    pub fn key_is_store_assigned(&self) -> bool {
        self.generated_key.is_some()
            || self
                .values
                .iter()
                .find(|(c, _)| *c == self.primary_column)
                .is_none_or(|(_, v)| v.is_null())
    }
}

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns: Vec<_> = self.columns().collect();
        let placeholders = vec!["?"; columns.len()];
        write!(
            f,
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            columns.join(", "),
            placeholders.join(", ")
        )
    }
}

/// `UPDATE` of one model instance, keyed by its primary key.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    table:          String,
    primary_column: String,
    key:            Value,
    assignments:    Vec<(String, Value)>
}

impl UpdateStatement {
    /// Start an update of the row whose `primary_column` equals `key`.
    pub fn new(table: impl Into<String>, primary_column: impl Into<String>, key: Value) -> Self {
        Self {
            table: table.into(),
            primary_column: primary_column.into(),
            key,
            assignments: Vec::new()
        }
    }

    /// Assign a column.
    ///
    /// The key column is the `WHERE` target and is never assigned; setting it
    /// is ignored.
    pub fn set(&mut self, column: impl Into<String>, value: Value) -> &mut Self {
        let column = column.into();
        if column != self.primary_column {
            self.assignments.push((column, value));
        }
        self
    }

    /// Target table.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Key column used in the `WHERE` clause.
    pub fn primary_column(&self) -> &str {
        &self.primary_column
    }

    /// Key of the row to update.
    pub fn key(&self) -> &Value {
        &self.key
    }

    /// Assigned columns in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.assignments.iter().map(|(c, _)| c.as_str())
    }

    /// Assigned `(column, value)` pairs.
    pub fn assignments(&self) -> &[(String, Value)] {
        &self.assignments
    }

    /// Check if nothing is assigned.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl fmt::Display for UpdateStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sets: Vec<_> = self.columns().map(|c| format!("{} = ?", c)).collect();
        write!(
            f,
            "UPDATE {} SET {} WHERE {} = ?",
            self.table,
            sets.join(", "),
            self.primary_column
        )
    }
}

/// `DELETE` filtered by a predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStatement {
    table:     String,
    predicate: Predicate
}

impl DeleteStatement {
    /// Delete rows of `table` matching `predicate`.
    pub fn new(table: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            table: table.into(),
            predicate
        }
    }

    /// Delete the row whose `primary_column` equals `key`.
    pub fn by_key(table: impl Into<String>, primary_column: impl Into<String>, key: Value) -> Self {
        Self::new(table, Predicate::equals(primary_column, key))
    }

    /// Target table.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Row filter.
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Bound parameters in placeholder order.
    pub fn params(&self) -> Vec<&Value> {
        self.predicate.params()
    }
}

impl fmt::Display for DeleteStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DELETE FROM {}{}", self.table, self.predicate)
    }
}

/// `SELECT` of mapped columns.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    table:     String,
    columns:   Vec<String>,
    predicate: Predicate,
    limit:     Option<usize>
}

impl SelectStatement {
    /// Select `columns` from every row of `table`.
    pub fn new<I, S>(table: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        Self {
            table:     table.into(),
            columns:   columns.into_iter().map(Into::into).collect(),
            predicate: Predicate::All,
            limit:     None
        }
    }

    /// Restrict to rows matching `predicate`.
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicate = predicate;
        self
    }

    /// Return at most `limit` rows.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Source table.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Projected columns.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Row filter.
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Row limit, if any.
    pub fn row_limit(&self) -> Option<usize> {
        self.limit
    }

    /// Bound parameters in placeholder order.
    pub fn params(&self) -> Vec<&Value> {
        self.predicate.params()
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SELECT {} FROM {}{}",
            self.columns.join(", "),
            self.table,
            self.predicate
        )?;
        if let Some(limit) = self.limit {
            write!(f, " LIMIT {}", limit)?;
        }
        Ok(())
    }
}
