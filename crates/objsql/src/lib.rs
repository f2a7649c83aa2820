// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # objsql
//!
//! One crate, all features. Re-exports:
//! - [`DomainModel`](macro@DomainModel) derive macro from `objsql-derive`
//! - All runtime types from `objsql-core` ([`Table`], [`DataSources`],
//!   [`MemoryDataSource`], [`transactional`], ...)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use objsql::prelude::*;
//!
//! #[derive(Debug, DomainModel)]
//! pub struct Order {
//!     id: Option<i64>,
//!     customer: String,
//!     amount: Option<i32>,
//! }
//!
//! let sources = DataSources::single(Arc::new(MemoryDataSource::new()));
//! let orders = Order::table(&sources)?;
//!
//! let mut order = Order { id: None, customer: String::new(), amount: None };
//! order.set_customer("acme").set_amount(12);
//! order.insert(&orders).await?;
//!
//! let found = orders.query_by_customer("acme".to_owned()).await?;
//! ```

pub mod prelude;

pub use objsql_core::*;
pub use objsql_derive::DomainModel;
