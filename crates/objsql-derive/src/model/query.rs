// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Query method generation.
//!
//! Generates a `{Model}Queries` trait implemented for `Table<Model>`, with
//! one lookup-by-value method per queryable column:
//!
//! ```rust,ignore
//! let orders = Order::table(&sources)?;
//! let acme = orders.query_by_customer("acme".to_owned()).await?;
//! ```
//!
//! `Option<T>` fields are queried by `T`; rows holding null are matched by
//! `Table::query_by` with `Value::Null`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{parse::ModelDef, policy::MemberPlan};

/// Generate the query trait and its `Table` impl.
///
/// Returns an empty `TokenStream` when no column is queryable.
pub fn generate(model: &ModelDef, plan: &MemberPlan<'_>) -> TokenStream {
    if plan.queries.is_empty() {
        return TokenStream::new();
    }

    let vis = &model.vis;
    let ident = &model.ident;
    let trait_name = format_ident!("{}Queries", ident);
    let trait_doc = format!("Lookup-by-value queries of `{}`.", plan.metadata.table_name);

    let signatures: Vec<_> = plan
        .queries
        .iter()
        .map(|q| {
            let method = &q.method;
            let ty = q.column.field.value_type();
            let doc = format!("Rows whose `{}` equals `value`.", q.column.column);
            quote! {
                #[doc = #doc]
                async fn #method(
                    &self,
                    value: #ty
                ) -> ::core::result::Result<::std::vec::Vec<#ident>, ::objsql::PersistenceError>
            }
        })
        .collect();

    let bodies = plan.queries.iter().zip(&signatures).map(|(q, signature)| {
        let column = &q.column.column;
        quote! {
            #signature {
                self.query_by(#column, ::objsql::ToValue::to_value(&value)).await
            }
        }
    });

    quote! {
        #[doc = #trait_doc]
        #[::objsql::async_trait]
        #vis trait #trait_name {
            #(#signatures;)*
        }

        #[::objsql::async_trait]
        impl #trait_name for ::objsql::Table<#ident> {
            #(#bodies)*
        }
    }
}
