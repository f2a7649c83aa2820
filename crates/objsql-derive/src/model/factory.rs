// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Factory and `DomainModel` impl generation.
//!
//! `Model::table(&sources)` is the single entry point of a model: it looks up
//! the declared data source and returns the `Table` handle every query and
//! persistence method routes through. The resolved declaration is compiled
//! into the associated constants of `DomainModel`.

use proc_macro2::TokenStream;
use quote::quote;

use super::{parse::ModelDef, persistence, policy::MemberPlan};

/// Generate the factory and the `DomainModel` impl.
pub fn generate(model: &ModelDef, plan: &MemberPlan<'_>) -> TokenStream {
    let ident = &model.ident;
    let metadata = plan.metadata;
    let doc = format!(
        "Handle on table `{}` in data source `{}`.",
        metadata.table_name, metadata.data_source
    );

    let key_type = metadata.primary_key_type.rust_ident();
    let table_name = &metadata.table_name;
    let data_source = &metadata.data_source;
    let primary_column = &metadata.primary_column_name;
    let primary_field = &metadata.primary_field_name;
    let key_default = match plan.key.generated_by {
        Some(expression) => quote! { ::core::option::Option::Some(#expression) },
        None => quote! { ::core::option::Option::None }
    };
    let skip_null = metadata.skip_null_on_update;
    let all_persistent = metadata.all_fields_persistent;
    let fluent = metadata.fluent;

    let columns = plan.column_names();
    let queryable = plan.queryable_column_names();
    let statements = persistence::statement_items(plan);
    let from_row = from_row(plan);

    quote! {
        impl #ident {
            #[doc = #doc]
            ///
            /// # Errors
            ///
            /// Fails when no data source is registered under the declared name.
            pub fn table<L>(
                sources: &L
            ) -> ::core::result::Result<::objsql::Table<Self>, ::objsql::PersistenceError>
            where
                L: ::objsql::DataSourceLookup + ?Sized
            {
                ::objsql::Table::lookup(sources)
            }
        }

        impl ::objsql::DomainModel for #ident {
            type Key = #key_type;

            const TABLE_NAME: &'static str = #table_name;
            const DATA_SOURCE_NAME: &'static str = #data_source;
            const PRIMARY_COLUMN_NAME: &'static str = #primary_column;
            const PRIMARY_FIELD_NAME: &'static str = #primary_field;
            const PRIMARY_KEY_DEFAULT_VALUE: ::core::option::Option<&'static str> = #key_default;
            const SKIP_NULL_ON_UPDATE: bool = #skip_null;
            const ALL_FIELDS_PERSISTENT: bool = #all_persistent;
            const FLUENT: bool = #fluent;

            fn columns() -> &'static [&'static str] {
                &[#(#columns),*]
            }

            fn queryable_columns() -> &'static [&'static str] {
                &[#(#queryable),*]
            }

            #statements
            #from_row
        }
    }
}

fn from_row(plan: &MemberPlan<'_>) -> TokenStream {
    let mapped = plan.columns.iter().map(|c| {
        let field = c.field.name();
        let column = &c.column;
        quote! { #field: row.decode(#column)? }
    });
    let defaulted = plan.transient.iter().map(|f| {
        let field = f.name();
        quote! { #field: ::core::default::Default::default() }
    });

    quote! {
        fn from_row(
            row: &::objsql::Row
        ) -> ::core::result::Result<Self, ::objsql::PersistenceError> {
            ::core::result::Result::Ok(Self {
                #(#mapped,)*
                #(#defaulted,)*
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use syn::DeriveInput;

    use super::*;
    use crate::model::{naming::WordTableizer, resolve::resolve};

    fn expand(input: DeriveInput) -> String {
        let model = ModelDef::from_derive_input(&input).unwrap();
        let metadata = resolve(
            &model.name_str(),
            &model.declaration,
            &model.fields,
            &WordTableizer
        )
        .unwrap();
        let plan = MemberPlan::derive(&metadata, &model.fields).unwrap();
        generate(&model, &plan).to_string()
    }

    #[test]
    fn compiles_in_declaration() {
        let output = expand(syn::parse_quote! {
            pub struct Order {
                id: Option<i64>,
                customer: String,
            }
        });
        assert!(output.contains("type Key = i64"));
        assert!(output.contains("TABLE_NAME : & 'static str = \"orders\""));
        assert!(output.contains("\"objsql-default-datasource\""));
        assert!(output.contains(":: core :: option :: Option :: None"));
        assert!(output.contains("pub fn table < L >"));
    }

    #[test]
    fn transient_fields_are_defaulted() {
        let output = expand(syn::parse_quote! {
            pub struct Order {
                id: i64,
                #[column(transient)]
                cache: Vec<u8>,
            }
        });
        assert!(output.contains("id : row . decode (\"id\") ?"));
        assert!(output.contains("cache : :: core :: default :: Default :: default ()"));
        assert!(!output.contains("\"cache\""));
    }

    #[test]
    fn named_data_source_and_key_column() {
        let output = expand(syn::parse_quote! {
            #[domain_model(data_source = "archive", primary_column_name = "order_id")]
            pub struct Order {
                id: i64,
            }
        });
        assert!(output.contains("DATA_SOURCE_NAME : & 'static str = \"archive\""));
        assert!(output.contains("id : row . decode (\"order_id\") ?"));
    }
}
