// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime contract for objsql domain models.
//!
//! This crate provides the types that `#[derive(DomainModel)]` generated code
//! calls. It can also be used standalone to implement [`DomainModel`] or a
//! [`DataSource`] by hand.
//!
//! # Overview
//!
//! - [`DomainModel`] - Compiled-in declaration plus statement builders
//! - [`Table`] - Query and persistence entry point of a model
//! - [`DataSource`] / [`DataSourceLookup`] - Store abstraction and named
//!   registry ([`DataSources`])
//! - [`TransactionManager`] / [`transactional`] - Transaction boundaries
//! - [`TransactionId`] - Identity of the transaction a task is working in
//! - [`MemoryDataSource`] - In-memory store for tests
//! - [`prelude`] - Convenient re-exports
//!
//! # Usage
//!
//! Most users should depend on `objsql`, which re-exports this crate next to
//! the derive macro:
//!
//! ```rust,ignore
//! use objsql::prelude::*;
//!
//! let sources = DataSources::single(Arc::new(MemoryDataSource::new()));
//! let orders = Order::table(&sources)?;
//! order.insert(&orders).await?;
//! let found = orders.query_by_customer("acme".into()).await?;
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod datasource;
mod error;
mod memory;
mod model;
pub mod prelude;
mod row;
mod statement;
mod table;
mod transaction;
mod value;

/// Re-export async_trait for generated code.
pub use async_trait::async_trait;
pub use datasource::{
    DEFAULT_DATA_SOURCE_NAME, DataSource, DataSourceLookup, DataSources, DataSourcesBuilder
};
pub use error::{BoxError, PersistenceError, TransactionPhase};
pub use memory::MemoryDataSource;
pub use model::{DomainModel, PrimaryKey};
pub use row::Row;
pub use statement::{DeleteStatement, InsertStatement, Predicate, SelectStatement, UpdateStatement};
pub use table::Table;
pub use transaction::{TransactionId, TransactionManager, transactional};
pub use value::{FromValue, ToValue, Value};
