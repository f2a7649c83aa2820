// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! DomainModel derive macro implementation.
//!
//! Expansion is a single pass per type: parse the derive input, resolve the
//! metadata declaration, derive the member plan, then emit code from the
//! plan. Any failure stops the pass and only the compile error is emitted.
//!
//! # Architecture
//!
//! ```text
//! model.rs (orchestrator)
//! │
//! ├── parse/          → ModelDef, RawDeclaration, FieldDef, PrimaryKeyType
//! ├── naming.rs       → Tableize, WordTableizer
//! ├── resolve.rs      → ResolvedMetadata, DeclarationError
//! ├── policy.rs       → MemberPlan, GenerationError
//! │
//! ├── accessors.rs    → getters, setters (fluent or plain)
//! ├── factory.rs      → Model::table(), impl DomainModel
//! ├── persistence.rs  → statement builders, insert/update/delete
//! ├── query.rs        → {Model}Queries for Table<Model>
//! └── transaction.rs  → insert_all/update_all/delete_all
//! ```
//!
//! # Generated Code
//!
//! For a model like:
//!
//! ```rust,ignore
//! #[derive(DomainModel)]
//! pub struct Order {
//!     id: Option<i64>,
//!     customer: String,
//! }
//! ```
//!
//! The macro generates:
//!
//! | Item | Purpose |
//! |------|---------|
//! | `id()`, `set_id(..)`, ... | Field accessors |
//! | `Order::table(&sources)` | Entry point on the declared data source |
//! | `impl DomainModel for Order` | Compiled declaration and row mapping |
//! | `OrderQueries` | `query_by_id`, `query_by_customer` on `Table<Order>` |
//! | `insert`, `update`, `delete` | Persistence of one instance |
//! | `insert_all`, `update_all`, `delete_all` | Transactional batches |

mod accessors;
mod factory;
pub mod naming;
pub mod parse;
mod persistence;
pub mod policy;
mod query;
pub mod resolve;
mod transaction;


use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::{
    naming::{Tableize, WordTableizer},
    parse::ModelDef,
    policy::MemberPlan,
    resolve::resolve
};
use crate::error::ModelError;

/// Main entry point for the DomainModel derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input, &WordTableizer) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into()
    }
}

/// Expand one derive input with the given naming service.
///
/// # Errors
///
/// Parse errors, [`DeclarationError`](crate::error::DeclarationError) and
/// [`GenerationError`](crate::error::GenerationError), spanned at the
/// offending field or the struct name.
pub fn expand(input: &DeriveInput, naming: &dyn Tableize) -> darling::Result<TokenStream2> {
    let model = ModelDef::from_derive_input(input)?;
    generate(&model, naming).map_err(|e| e.into_darling(&model))
}

fn generate(model: &ModelDef, naming: &dyn Tableize) -> Result<TokenStream2, ModelError> {
    let metadata = resolve(
        &model.name_str(),
        &model.declaration,
        &model.fields,
        naming
    )?;
    let plan = MemberPlan::derive(&metadata, &model.fields)?;

    let accessors = accessors::generate(model, &plan);
    let factory = factory::generate(model, &plan);
    let persistence = persistence::generate(model, &plan);
    let queries = query::generate(model, &plan);
    let transactions = transaction::generate(model, &plan);

    Ok(quote! {
        #accessors
        #factory
        #persistence
        #queries
        #transactions
    })
}
