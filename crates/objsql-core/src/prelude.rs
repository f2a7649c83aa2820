// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use objsql::prelude::*;
//! ```

pub use crate::{
    DataSource, DataSourceLookup, DataSources, DomainModel, MemoryDataSource, PersistenceError,
    Row, Table, ToValue, TransactionManager, Value, async_trait, transactional
};
