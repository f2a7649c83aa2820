// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-memory [`DataSource`] used by tests and examples.
//!
//! Tables are created on first insert. Keys are assigned from a per-table
//! counter whenever the statement leaves the key to the store; explicit keys
//! advance the counter past themselves.
//!
//! One transaction is open at a time. `begin` snapshots every table,
//! `rollback` restores the snapshot and `commit` drops it. While it is open,
//! statements and `begin` calls from outside it wait for it to end; work
//! inside it is recognised by its [`TransactionId`]. A transaction begun
//! outside [`transactional`](crate::transactional) has no id and admits every
//! caller that has none either.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{Mutex, MutexGuard, Notify};

use crate::{
    DataSource, DeleteStatement, InsertStatement, PersistenceError, Row, SelectStatement,
    TransactionId, TransactionManager, TransactionPhase, UpdateStatement, Value
};

#[derive(Debug, Clone, Default)]
struct MemoryTable {
    rows:     Vec<Row>,
    last_key: i64
}

#[derive(Debug)]
struct OpenTransaction {
    owner:    Option<TransactionId>,
    snapshot: HashMap<String, MemoryTable>
}

#[derive(Debug, Default)]
struct MemoryState {
    tables: HashMap<String, MemoryTable>,
    open:   Option<OpenTransaction>
}

impl MemoryState {
    fn admits(&self, caller: Option<TransactionId>) -> bool {
        self.open.as_ref().is_none_or(|open| open.owner == caller)
    }

    fn close(&mut self, phase: TransactionPhase) -> Result<OpenTransaction, PersistenceError> {
        let caller = TransactionId::current();
        match self.open.take() {
            Some(open) if open.owner == caller => Ok(open),
            other => {
                self.open = other;
                Err(PersistenceError::Transaction {
                    phase,
                    message: "no active transaction".into()
                })
            }
        }
    }
}

/// Thread-safe in-memory store.
#[derive(Debug, Default)]
pub struct MemoryDataSource {
    state:  Mutex<MemoryState>,
    closed: Notify
}

impl MemoryDataSource {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every row currently stored in `table`.
    ///
    /// Does not wait for an open transaction.
    pub async fn rows(&self, table: &str) -> Vec<Row> {
        let state = self.state.lock().await;
        state
            .tables
            .get(table)
            .map(|t| t.rows.clone())
            .unwrap_or_default()
    }

    /// Check whether a transaction is open.
    pub async fn in_transaction(&self) -> bool {
        self.state.lock().await.open.is_some()
    }

    /// Lock the state once no other transaction is open.
    async fn admit(&self) -> MutexGuard<'_, MemoryState> {
        let caller = TransactionId::current();
        loop {
            let closed = self.closed.notified();
            let state = self.state.lock().await;
            if state.admits(caller) {
                return state;
            }
            drop(state);
            closed.await;
        }
    }
}

#[async_trait]
impl TransactionManager for MemoryDataSource {
    async fn begin(&self) -> Result<(), PersistenceError> {
        let mut state = self.admit().await;
        if state.open.is_some() {
            return Err(PersistenceError::Transaction {
                phase:   TransactionPhase::Begin,
                message: "a transaction is already active".into()
            });
        }
        state.open = Some(OpenTransaction {
            owner:    TransactionId::current(),
            snapshot: state.tables.clone()
        });
        Ok(())
    }

    async fn commit(&self) -> Result<(), PersistenceError> {
        let mut state = self.state.lock().await;
        state.close(TransactionPhase::Commit)?;
        drop(state);
        self.closed.notify_waiters();
        Ok(())
    }

    async fn rollback(&self) -> Result<(), PersistenceError> {
        let mut state = self.state.lock().await;
        state.tables = state.close(TransactionPhase::Rollback)?.snapshot;
        drop(state);
        self.closed.notify_waiters();
        Ok(())
    }
}

#[async_trait]
impl DataSource for MemoryDataSource {
    async fn insert(&self, statement: &InsertStatement) -> Result<Option<i64>, PersistenceError> {
        let mut state = self.admit().await;
        let table = state
            .tables
            .entry(statement.table().to_owned())
            .or_default();

        let mut row: Row = statement
            .values()
            .iter()
            .map(|(c, v)| (c.clone(), v.clone()))
            .collect();

        if statement.key_is_store_assigned() {
            table.last_key += 1;
            let key = table.last_key;
            row.insert(statement.primary_column(), key);
            table.rows.push(row);
            return Ok(Some(key));
        }

        let key = row
            .get(statement.primary_column())
            .cloned()
            .unwrap_or(Value::Null);
        let duplicate = table
            .rows
            .iter()
            .any(|r| r.get(statement.primary_column()) == Some(&key));
        if duplicate {
            return Err(PersistenceError::DuplicateKey {
                table: statement.table().to_owned(),
                key
            });
        }
        if let Some(explicit) = key.as_int() {
            table.last_key = table.last_key.max(explicit);
        }
        table.rows.push(row);
        Ok(None)
    }

    async fn update(&self, statement: &UpdateStatement) -> Result<u64, PersistenceError> {
        let mut state = self.admit().await;
        let Some(table) = state.tables.get_mut(statement.table()) else {
            return Ok(0);
        };
        let mut affected = 0;
        for row in &mut table.rows {
            if row.get(statement.primary_column()) != Some(statement.key()) {
                continue;
            }
            for (column, value) in statement.assignments() {
                row.insert(column.as_str(), value.clone());
            }
            affected += 1;
        }
        Ok(affected)
    }

    async fn delete(&self, statement: &DeleteStatement) -> Result<u64, PersistenceError> {
        let mut state = self.admit().await;
        let Some(table) = state.tables.get_mut(statement.table()) else {
            return Ok(0);
        };
        let before = table.rows.len();
        table.rows.retain(|row| !statement.predicate().matches(row));
        Ok((before - table.rows.len()) as u64)
    }

    async fn select(&self, statement: &SelectStatement) -> Result<Vec<Row>, PersistenceError> {
        let state = self.admit().await;
        let Some(table) = state.tables.get(statement.table()) else {
            return Ok(Vec::new());
        };
        let limit = statement.row_limit().unwrap_or(usize::MAX);
        let rows = table
            .rows
            .iter()
            .filter(|row| statement.predicate().matches(row))
            .take(limit)
            .map(|row| {
                statement
                    .columns()
                    .iter()
                    .map(|c| (c.as_str(), row.get(c).cloned().unwrap_or(Value::Null)))
                    .collect::<Row>()
            })
            .collect();
        Ok(rows)
    }
}
