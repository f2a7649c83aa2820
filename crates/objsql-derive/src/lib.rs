// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! Proc-macro implementation of `#[derive(DomainModel)]`.
//!
//! Use the `objsql` crate, which re-exports the macro next to the runtime
//! types the generated code refers to.
//!
//! # Attribute Quick Reference
//!
//! ## Type-Level `#[domain_model(...)]`
//!
//! ```rust,ignore
//! #[derive(DomainModel)]
//! #[domain_model(
//!     table_name = "orders_2023",          // default: tableized type name
//!     data_source = "archive",             // default: "objsql-default-datasource"
//!     fluent = false,                      // default: true
//!     primary_key_type = "Integer",        // Long | Integer | Short, default: Long
//!     primary_column_name = "order_id",    // default: "id"
//!     primary_field_name = "id",           // default: "id"
//!     skip_null_on_update = false,         // default: true
//!     all_fields_persistent = false,       // default: true
//!     primary_key_default_value = "AUTO_INCREMENT" // default: "" (key supplied)
//! )]
//! pub struct Order { /* ... */ }
//! ```
//!
//! ## Field-Level `#[column(...)]`
//!
//! | Marker | Effect |
//! |--------|--------|
//! | `persistent` | Persisted when `all_fields_persistent = false` |
//! | `transient` | Never persisted, defaulted when rows are mapped |
//! | `skip_query` | No `query_by_<field>` method |

mod error;
mod model;

use proc_macro::TokenStream;

/// Derive accessors, query methods and persistence for a domain model.
///
/// # Generated Members
///
/// For a model named `Order`:
///
/// - **getters and setters** for every field; setters return `&mut Self`
///   when `fluent = true`
/// - **`Order::table(&sources)`** resolving the declared data source into a
///   `Table<Order>`
/// - **`impl DomainModel for Order`** with the resolved declaration as
///   associated constants
/// - **`OrderQueries`**, implemented for `Table<Order>`, with
///   `query_by_<field>` per queryable column
/// - **`insert`**, **`update`**, **`delete`** on the instance
/// - **`insert_all`**, **`update_all`**, **`delete_all`** running in one
///   transaction
///
/// # Options
///
/// | Option | Default | Description |
/// |--------|---------|-------------|
/// | `table_name` | tableized type name | Table the type maps to |
/// | `data_source` | `"objsql-default-datasource"` | Logical data source |
/// | `fluent` | `true` | Setters return the receiver |
/// | `primary_key_type` | `Long` | `Long` (`i64`), `Integer` (`i32`) or `Short` (`i16`) |
/// | `primary_column_name` | `"id"` | Key column |
/// | `primary_field_name` | `"id"` | Key field |
/// | `skip_null_on_update` | `true` | UPDATE leaves out `None` fields |
/// | `all_fields_persistent` | `true` | Every non-transient field is a column |
/// | `primary_key_default_value` | `""` | Store-side key expression; when set, INSERT omits the key |
///
/// # Errors
///
/// Expansion fails with a compile error, and emits nothing else, when:
///
/// - `primary_key_type` is not one of the supported types
/// - the key field type is not the key type or `Option` of it
/// - another persisted field maps to the key column
/// - a name option is empty
/// - no field is named `primary_field_name`
/// - an accessor name collides with another generated member
#[proc_macro_derive(DomainModel, attributes(domain_model, column))]
pub fn derive_domain_model(input: TokenStream) -> TokenStream {
    model::derive(input)
}
