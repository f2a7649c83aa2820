// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Ordered column/value map returned by data sources.

use indexmap::IndexMap;

use crate::{FromValue, PersistenceError, Value};

/// A result row keyed by column name, in column order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    values: IndexMap<String, Value>
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    ///
    /// # Example
    ///
    /// ```rust
    /// use objsql_core::{Row, Value};
    ///
    /// let row = Row::new().with("id", 1_i64).with("customer", "acme");
    /// assert_eq!(row.get("id"), Some(&Value::Int(1)));
    /// ```
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    /// Set a column, replacing any previous value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(column.into(), value.into());
    }

    /// Raw value of a column.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    /// Decode a column into a field type.
    ///
    /// # Errors
    ///
    /// - [`PersistenceError::MissingColumn`] if the row has no such column
    /// - [`PersistenceError::ColumnType`] if the value does not fit `T`
    pub fn decode<T: FromValue>(&self, column: &str) -> Result<T, PersistenceError> {
        let value = self
            .values
            .get(column)
            .cloned()
            .ok_or_else(|| PersistenceError::MissingColumn(column.to_owned()))?;
        T::from_value(value).map_err(|e| e.in_column(column))
    }

    /// Column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterate over `(column, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let row = Row::new().with("b", 1_i64).with("a", 2_i64);
        let columns: Vec<_> = row.columns().collect();
        assert_eq!(columns, ["b", "a"]);
    }

    #[test]
    fn decode_reports_missing_column() {
        let row = Row::new();
        let err = row.decode::<i64>("id").unwrap_err();
        assert!(matches!(err, PersistenceError::MissingColumn(ref c) if c == "id"));
    }

    #[test]
    fn decode_reports_column_on_type_error() {
        let row = Row::new().with("amount", "ten");
        let err = row.decode::<i32>("amount").unwrap_err();
        assert_eq!(
            err.to_string(),
            "column `amount`: expected i32 value, found text"
        );
    }

    #[test]
    fn decode_null_into_option() {
        let row: Row = [("note", Value::Null)].into_iter().collect();
        assert_eq!(row.decode::<Option<String>>("note").unwrap(), None);
    }
}
