// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Transactional wrapper generation.
//!
//! `update_all` and `delete_all` repeat one persistence method over a slice
//! inside `Table::transactional`; `insert_all` delegates to
//! `Table::insert_all`, which also defers key write-back until the commit.
//! The first failure rolls back every earlier step and is returned
//! unchanged.
//!
//! ```rust,ignore
//! let orders = Order::table(&sources)?;
//! Order::insert_all(&orders, &mut batch).await?;
//! let updated = Order::update_all(&orders, &batch).await?;
//! ```

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::{
    parse::ModelDef,
    policy::{MemberPlan, Wrapper}
};

/// Generate `insert_all`, `update_all` and `delete_all`.
pub fn generate(model: &ModelDef, plan: &MemberPlan<'_>) -> TokenStream {
    let ident = &model.ident;
    let wrappers = plan.wrappers.iter().map(|w| wrapper(*w, &plan.metadata.table_name));

    quote! {
        impl #ident {
            #(#wrappers)*
        }
    }
}

fn wrapper(wrapper: Wrapper, table: &str) -> TokenStream {
    let method = format_ident!("{}", wrapper.method());
    let step = format_ident!("{}", wrapper.step());
    let doc = format!(
        "Run `{}` for every model in one transaction on `{}`.",
        wrapper.step(),
        table
    );

    match wrapper {
        Wrapper::InsertAll => quote! {
            #[doc = #doc]
            ///
            /// Store-assigned keys are written back into `models` after the
            /// commit; a failed batch leaves `models` unchanged.
            ///
            /// # Errors
            ///
            /// Returns the first failure after rolling back.
            pub async fn #method(
                table: &::objsql::Table<Self>,
                models: &mut [Self]
            ) -> ::core::result::Result<(), ::objsql::PersistenceError> {
                table.#method(models).await
            }
        },
        Wrapper::UpdateAll | Wrapper::DeleteAll => quote! {
            #[doc = #doc]
            ///
            /// Returns the total of affected rows.
            ///
            /// # Errors
            ///
            /// Returns the first failure after rolling back.
            pub async fn #method(
                table: &::objsql::Table<Self>,
                models: &[Self]
            ) -> ::core::result::Result<u64, ::objsql::PersistenceError> {
                table
                    .transactional(async {
                        let mut affected = 0;
                        for model in models {
                            affected += table.#step(model).await?;
                        }
                        ::core::result::Result::Ok::<_, ::objsql::PersistenceError>(affected)
                    })
                    .await
            }
        }
    }
}
