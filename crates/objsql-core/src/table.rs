// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Table handle: the query and persistence entry point of a domain model.
//!
//! `Model::table(&sources)` resolves the model's data source and returns a
//! [`Table`]. Generated query methods and persistence methods route every
//! statement through it.
//!
//! | Method | Statement |
//! |--------|-----------|
//! | [`Table::insert`] | `DomainModel::insert_statement`, then key write-back |
//! | [`Table::insert_all`] | one insert per model in a transaction, key write-back after commit |
//! | [`Table::update`] | `DomainModel::update_statement` |
//! | [`Table::delete`] | `DomainModel::delete_statement` |
//! | [`Table::find_by_primary_key`] | select by key, limit 1 |
//! | [`Table::query_by`] | select by column equality |
//! | [`Table::find_all`] | select all |
//! | [`Table::count`] | count all |
//! | [`Table::delete_by_primary_key`] | delete by key |

use std::{fmt, future::Future, marker::PhantomData, sync::Arc};

use tracing::debug;

use crate::{
    DataSource, DataSourceLookup, DeleteStatement, DomainModel, PersistenceError, Predicate,
    PrimaryKey, SelectStatement, ToValue, Value, transactional
};

/// Typed handle to the table of `M` in its data source.
pub struct Table<M> {
    source: Arc<dyn DataSource>,
    _model: PhantomData<fn() -> M>
}

impl<M> Clone for Table<M> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            _model: PhantomData
        }
    }
}

impl<M: DomainModel> fmt::Debug for Table<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("name", &M::TABLE_NAME)
            .field("data_source", &M::DATA_SOURCE_NAME)
            .finish()
    }
}

impl<M: DomainModel> Table<M> {
    /// Resolve the data source named by `M::DATA_SOURCE_NAME`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::DataSourceNotFound`] when the name is not
    /// registered.
    pub fn lookup<L>(sources: &L) -> Result<Self, PersistenceError>
    where
        L: DataSourceLookup + ?Sized
    {
        sources.lookup(M::DATA_SOURCE_NAME).map(Self::new)
    }

    /// Bind directly to a data source.
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            _model: PhantomData
        }
    }

    /// Underlying data source.
    pub fn source(&self) -> &Arc<dyn DataSource> {
        &self.source
    }

    /// Table name.
    pub fn name(&self) -> &'static str {
        M::TABLE_NAME
    }

    /// Insert `model`.
    ///
    /// When the store assigns the key, it is written back into `model`.
    pub async fn insert(&self, model: &mut M) -> Result<(), PersistenceError> {
        if let Some(key) = self.execute_insert(model).await? {
            model.apply_generated_key(key)?;
        }
        Ok(())
    }

    /// Insert every model of `models` in one transaction.
    ///
    /// Store-assigned keys are written back only after the commit. On
    /// failure the work is rolled back and `models` is left as it was.
    ///
    /// # Errors
    ///
    /// Returns the first failure, including a store-assigned key that does
    /// not fit `M::Key`.
    pub async fn insert_all(&self, models: &mut [M]) -> Result<(), PersistenceError> {
        let keys = self
            .transactional(async {
                let mut keys = Vec::with_capacity(models.len());
                for model in models.iter() {
                    let key = self.execute_insert(model).await?;
                    if let Some(key) = key {
                        M::Key::from_generated(key)?;
                    }
                    keys.push(key);
                }
                Ok::<_, PersistenceError>(keys)
            })
            .await?;

        for (model, key) in models.iter_mut().zip(keys) {
            if let Some(key) = key {
                model.apply_generated_key(key)?;
            }
        }
        Ok(())
    }

    /// Update the row of `model`. Returns affected rows.
    ///
    /// An update with nothing to assign is not sent to the store.
    pub async fn update(&self, model: &M) -> Result<u64, PersistenceError> {
        let statement = model.update_statement();
        if statement.is_empty() {
            debug!(table = M::TABLE_NAME, "update skipped, no columns to assign");
            return Ok(0);
        }
        debug!(table = M::TABLE_NAME, sql = %statement, params = statement.assignments().len() + 1, "update");
        self.source.update(&statement).await
    }

    /// Delete the row of `model`. Returns affected rows.
    ///
    /// An instance without a key has no row and is not sent to the store.
    pub async fn delete(&self, model: &M) -> Result<u64, PersistenceError> {
        if model.primary_key_value().is_null() {
            debug!(table = M::TABLE_NAME, "delete skipped, instance has no key");
            return Ok(0);
        }
        self.execute_delete(model.delete_statement()).await
    }

    /// Delete the row with primary key `key`. Returns affected rows.
    pub async fn delete_by_primary_key(&self, key: M::Key) -> Result<u64, PersistenceError> {
        let statement =
            DeleteStatement::by_key(M::TABLE_NAME, M::PRIMARY_COLUMN_NAME, key.to_value());
        self.execute_delete(statement).await
    }

    /// Fetch the row with primary key `key`.
    pub async fn find_by_primary_key(&self, key: M::Key) -> Result<Option<M>, PersistenceError> {
        let statement = self
            .select()
            .filter(Predicate::equals(M::PRIMARY_COLUMN_NAME, key.to_value()))
            .limit(1);
        let mut models = self.fetch(statement).await?;
        Ok(models.pop())
    }

    /// Fetch every row whose `column` equals `value`.
    ///
    /// A null `value` matches rows where the column is null.
    pub async fn query_by(&self, column: &str, value: Value) -> Result<Vec<M>, PersistenceError> {
        let statement = self.select().filter(Predicate::equals(column, value));
        self.fetch(statement).await
    }

    /// Fetch every row.
    pub async fn find_all(&self) -> Result<Vec<M>, PersistenceError> {
        self.fetch(self.select()).await
    }

    /// Count every row.
    pub async fn count(&self) -> Result<u64, PersistenceError> {
        let statement = self.select();
        debug!(table = M::TABLE_NAME, sql = %statement, "count");
        self.source.count(&statement).await
    }

    /// Run `work` in a transaction of this table's data source.
    ///
    /// See [`transactional`](crate::transactional).
    pub async fn transactional<F, T>(&self, work: F) -> Result<T, PersistenceError>
    where
        F: Future<Output = Result<T, PersistenceError>>
    {
        transactional(&*self.source, work).await
    }

    fn select(&self) -> SelectStatement {
        SelectStatement::new(M::TABLE_NAME, M::columns().iter().copied())
    }

    async fn fetch(&self, statement: SelectStatement) -> Result<Vec<M>, PersistenceError> {
        debug!(table = M::TABLE_NAME, sql = %statement, params = statement.params().len(), "select");
        let rows = self.source.select(&statement).await?;
        rows.iter().map(M::from_row).collect()
    }

    async fn execute_insert(&self, model: &M) -> Result<Option<i64>, PersistenceError> {
        let statement = model.insert_statement();
        debug!(table = M::TABLE_NAME, sql = %statement, params = statement.values().len(), "insert");
        let assigned = self.source.insert(&statement).await?;
        Ok(assigned.filter(|_| statement.key_is_store_assigned()))
    }

    async fn execute_delete(&self, statement: DeleteStatement) -> Result<u64, PersistenceError> {
        debug!(table = M::TABLE_NAME, sql = %statement, params = statement.params().len(), "delete");
        self.source.delete(&statement).await
    }
}
