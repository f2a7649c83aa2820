// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Transaction support for domain models.
//!
//! A [`TransactionManager`] owns the transaction boundaries of a store.
//! [`transactional`] wraps a unit of work in them:
//!
//! 1. `begin()`; a failure here is returned and the work never runs
//! 2. the work runs to completion
//! 3. `commit()` on `Ok`, or `rollback()` on `Err`
//!
//! The error of the work is returned unchanged. A rollback that fails itself
//! is logged and does not replace that error.
//!
//! The three steps run with a task-local [`TransactionId`] set, so a store
//! can tell the work of its open transaction apart from concurrent callers.
//! A nested `transactional` call keeps the id of the enclosing one. Tasks
//! spawned from the work do not inherit the id.
//!
//! # Example
//!
//! ```rust,ignore
//! use objsql::prelude::*;
//!
//! let orders = Order::table(&sources)?;
//! transactional(&**orders.source(), async {
//!     first.insert(&orders).await?;
//!     second.insert(&orders).await?;
//!     Ok::<(), PersistenceError>(())
//! })
//! .await?;
//! ```

use std::{
    future::Future,
    sync::atomic::{AtomicU64, Ordering}
};

use async_trait::async_trait;

use crate::PersistenceError;

tokio::task_local! {
    static CURRENT: TransactionId;
}

/// Identity of a unit of work run by [`transactional`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionId(u64);

impl TransactionId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Transaction the calling task is working in.
    ///
    /// `None` outside of [`transactional`].
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }
}

/// Transaction boundaries of a store.
///
/// Implemented by every [`DataSource`](crate::DataSource).
#[async_trait]
pub trait TransactionManager: Send + Sync {
    /// Start a transaction.
    async fn begin(&self) -> Result<(), PersistenceError>;

    /// Make the work of the active transaction permanent.
    async fn commit(&self) -> Result<(), PersistenceError>;

    /// Discard the work of the active transaction.
    async fn rollback(&self) -> Result<(), PersistenceError>;
}

/// Run `work` inside a transaction of `manager`.
///
/// # Arguments
///
/// * `manager` - Store owning the transaction boundaries
/// * `work` - Unit of work to run between `begin` and `commit`
///
/// # Returns
///
/// The output of `work` after a successful commit.
///
/// # Errors
///
/// - the `begin` error, without running `work`
/// - the first error of `work`, after rolling back
/// - the `commit` error
pub async fn transactional<M, F, T>(manager: &M, work: F) -> Result<T, PersistenceError>
where
    M: TransactionManager + ?Sized,
    F: Future<Output = Result<T, PersistenceError>>
{
    let id = TransactionId::current().unwrap_or_else(TransactionId::next);
    CURRENT.scope(id, run(id, manager, work)).await
}

async fn run<M, F, T>(id: TransactionId, manager: &M, work: F) -> Result<T, PersistenceError>
where
    M: TransactionManager + ?Sized,
    F: Future<Output = Result<T, PersistenceError>>
{
    manager.begin().await?;
    tracing::debug!(transaction = id.0, "transaction started");

    match work.await {
        Ok(value) => {
            manager.commit().await?;
            tracing::debug!(transaction = id.0, "transaction committed");
            Ok(value)
        }
        Err(error) => {
            match manager.rollback().await {
                Ok(()) => tracing::debug!(transaction = id.0, %error, "transaction rolled back"),
                Err(rollback) => {
                    tracing::warn!(transaction = id.0, %error, %rollback, "rollback failed");
                }
            }
            Err(error)
        }
    }
}
