// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persistence code generation.
//!
//! Emits the statement builders of the `DomainModel` impl and the inherent
//! `insert`, `update` and `delete` methods.
//!
//! # Statements
//!
//! | Builder | Columns |
//! |---------|---------|
//! | `insert_statement` | plan INSERT list; `generated_by(..)` when the store assigns keys |
//! | `update_statement` | plan UPDATE list, `WHERE <key column> = <key>` |
//! | `apply_generated_key` | writes the store-assigned key into the key field |

use proc_macro2::TokenStream;
use quote::quote;

use super::{parse::ModelDef, policy::MemberPlan};

/// Statement builders, emitted inside `impl DomainModel`.
pub fn statement_items(plan: &MemberPlan<'_>) -> TokenStream {
    let insert = insert_statement(plan);
    let update = update_statement(plan);
    let apply_key = apply_generated_key(plan);
    let key_field = plan.key.column.field.name();

    quote! {
        fn primary_key_value(&self) -> ::objsql::Value {
            ::objsql::ToValue::to_value(&self.#key_field)
        }

        #insert
        #update
        #apply_key
    }
}

fn insert_statement(plan: &MemberPlan<'_>) -> TokenStream {
    let generated_by = plan.key.generated_by.map(|expression| {
        quote! { statement.generated_by(#expression); }
    });
    let values = plan.insert.iter().map(|c| {
        let field = c.field.name();
        let column = &c.column;
        quote! { statement.value(#column, ::objsql::ToValue::to_value(&self.#field)); }
    });

    quote! {
        fn insert_statement(&self) -> ::objsql::InsertStatement {
            let mut statement = ::objsql::InsertStatement::new(
                <Self as ::objsql::DomainModel>::TABLE_NAME,
                <Self as ::objsql::DomainModel>::PRIMARY_COLUMN_NAME
            );
            #generated_by
            #(#values)*
            statement
        }
    }
}

fn update_statement(plan: &MemberPlan<'_>) -> TokenStream {
    let key_field = plan.key.column.field.name();
    let assignments = plan.update.iter().map(|u| {
        let field = u.column.field.name();
        let column = &u.column.column;
        if u.skip_when_null {
            quote! {
                {
                    let value = ::objsql::ToValue::to_value(&self.#field);
                    if !value.is_null() {
                        statement.set(#column, value);
                    }
                }
            }
        } else {
            quote! { statement.set(#column, ::objsql::ToValue::to_value(&self.#field)); }
        }
    });

    quote! {
        fn update_statement(&self) -> ::objsql::UpdateStatement {
            #[allow(unused_mut)]
            let mut statement = ::objsql::UpdateStatement::new(
                <Self as ::objsql::DomainModel>::TABLE_NAME,
                <Self as ::objsql::DomainModel>::PRIMARY_COLUMN_NAME,
                ::objsql::ToValue::to_value(&self.#key_field)
            );
            #(#assignments)*
            statement
        }
    }
}

fn apply_generated_key(plan: &MemberPlan<'_>) -> TokenStream {
    let field = plan.key.column.field;
    let name = field.name();
    let key_type = plan.key.key_type.rust_ident();
    let key = quote! { <#key_type as ::objsql::PrimaryKey>::from_generated(key)? };
    let assign = if field.is_option() {
        quote! { self.#name = ::core::option::Option::Some(#key); }
    } else {
        quote! { self.#name = #key; }
    };

    quote! {
        fn apply_generated_key(&mut self, key: i64) -> ::core::result::Result<(), ::objsql::PersistenceError> {
            #assign
            ::core::result::Result::Ok(())
        }
    }
}

/// Inherent `insert`, `update` and `delete`.
pub fn generate(model: &ModelDef, plan: &MemberPlan<'_>) -> TokenStream {
    let ident = &model.ident;
    let table = &plan.metadata.table_name;
    let insert_doc = format!("Insert this instance into `{}`.", table);
    let update_doc = format!("Update the `{}` row of this instance. Returns affected rows.", table);
    let delete_doc = format!("Delete the `{}` row of this instance. Returns affected rows.", table);

    quote! {
        impl #ident {
            #[doc = #insert_doc]
            ///
            /// A store-assigned key is written back into this instance.
            ///
            /// # Errors
            ///
            /// Fails when the data source rejects the statement.
            pub async fn insert(
                &mut self,
                table: &::objsql::Table<Self>
            ) -> ::core::result::Result<(), ::objsql::PersistenceError> {
                table.insert(self).await
            }

            #[doc = #update_doc]
            ///
            /// # Errors
            ///
            /// Fails when the data source rejects the statement.
            pub async fn update(
                &self,
                table: &::objsql::Table<Self>
            ) -> ::core::result::Result<u64, ::objsql::PersistenceError> {
                table.update(self).await
            }

            #[doc = #delete_doc]
            ///
            /// # Errors
            ///
            /// Fails when the data source rejects the statement.
            pub async fn delete(
                &self,
                table: &::objsql::Table<Self>
            ) -> ::core::result::Result<u64, ::objsql::PersistenceError> {
                table.delete(self).await
            }
        }
    }
}
