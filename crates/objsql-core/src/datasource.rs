// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Data sources and the named registry that resolves them.
//!
//! Every domain model names the data source it lives in
//! (`DomainModel::DATA_SOURCE_NAME`). At runtime a [`DataSourceLookup`]
//! turns that name into a shared [`DataSource`] handle.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use objsql_core::{DataSourceLookup, DataSources, MemoryDataSource, DEFAULT_DATA_SOURCE_NAME};
//!
//! let sources = DataSources::builder()
//!     .register(DEFAULT_DATA_SOURCE_NAME, Arc::new(MemoryDataSource::new()))
//!     .register("archive", Arc::new(MemoryDataSource::new()))
//!     .build();
//!
//! assert!(sources.lookup("archive").is_ok());
//! assert!(sources.lookup("missing").is_err());
//! ```

use std::{collections::HashMap, fmt, sync::Arc};

use async_trait::async_trait;

use crate::{
    DeleteStatement, InsertStatement, PersistenceError, Row, SelectStatement, TransactionManager,
    UpdateStatement
};

/// Name of the data source used when a model does not name one.
pub const DEFAULT_DATA_SOURCE_NAME: &str = "objsql-default-datasource";

/// A store that executes dialect-neutral statements.
///
/// Implementations own their connection handling and concurrency. Errors are
/// reported as [`PersistenceError`] and travel to the caller unchanged.
#[async_trait]
pub trait DataSource: TransactionManager {
    /// Insert one row.
    ///
    /// # Returns
    ///
    /// The key assigned by the store when
    /// [`InsertStatement::key_is_store_assigned`] holds, `None` otherwise.
    async fn insert(&self, statement: &InsertStatement) -> Result<Option<i64>, PersistenceError>;

    /// Update the row addressed by the statement key. Returns affected rows.
    async fn update(&self, statement: &UpdateStatement) -> Result<u64, PersistenceError>;

    /// Delete matching rows. Returns affected rows.
    async fn delete(&self, statement: &DeleteStatement) -> Result<u64, PersistenceError>;

    /// Fetch matching rows projected onto the statement columns.
    async fn select(&self, statement: &SelectStatement) -> Result<Vec<Row>, PersistenceError>;

    /// Count matching rows.
    async fn count(&self, statement: &SelectStatement) -> Result<u64, PersistenceError> {
        let rows = self.select(statement).await?;
        Ok(rows.len() as u64)
    }
}

/// Resolves a logical data source name.
pub trait DataSourceLookup {
    /// Find the data source registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::DataSourceNotFound`] for unknown names.
    fn lookup(&self, name: &str) -> Result<Arc<dyn DataSource>, PersistenceError>;
}

/// Immutable registry of named data sources.
#[derive(Clone, Default)]
pub struct DataSources {
    sources: HashMap<String, Arc<dyn DataSource>>
}

impl DataSources {
    /// Start building a registry.
    pub fn builder() -> DataSourcesBuilder {
        DataSourcesBuilder::default()
    }

    /// Registry holding one source under [`DEFAULT_DATA_SOURCE_NAME`].
    pub fn single(source: Arc<dyn DataSource>) -> Self {
        Self::builder().register_default(source).build()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.sources.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl DataSourceLookup for DataSources {
    fn lookup(&self, name: &str) -> Result<Arc<dyn DataSource>, PersistenceError> {
        self.sources
            .get(name)
            .cloned()
            .ok_or_else(|| PersistenceError::DataSourceNotFound(name.to_owned()))
    }
}

impl fmt::Debug for DataSources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSources")
            .field("names", &self.names())
            .finish()
    }
}

/// Builder for [`DataSources`].
#[derive(Default)]
pub struct DataSourcesBuilder {
    sources: HashMap<String, Arc<dyn DataSource>>
}

impl DataSourcesBuilder {
    /// Register `source` under `name`, replacing an earlier registration.
    pub fn register(mut self, name: impl Into<String>, source: Arc<dyn DataSource>) -> Self {
        let name = name.into();
        if self.sources.insert(name.clone(), source).is_some() {
            tracing::debug!(name = %name, "data source registration replaced");
        }
        self
    }

    /// Register `source` under [`DEFAULT_DATA_SOURCE_NAME`].
    pub fn register_default(self, source: Arc<dyn DataSource>) -> Self {
        self.register(DEFAULT_DATA_SOURCE_NAME, source)
    }

    /// Freeze the registry.
    pub fn build(self) -> DataSources {
        DataSources {
            sources: self.sources
        }
    }
}
