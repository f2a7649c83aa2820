// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tests for metadata resolution.
//!
//! | Category | Tests |
//! |----------|-------|
//! | Defaults | `order_with_defaults` |
//! | Naming | `explicit_table_name_skips_naming`, `empty_table_name_is_derived` |
//! | Key type | `string_key_type_is_rejected`, `key_field_type_must_match` |
//! | Collisions | `column_collision_is_rejected`, `transient_field_does_not_collide` |
//! | Purity | `resolution_is_idempotent` |

use std::cell::Cell;

use syn::DeriveInput;

use super::*;
use crate::model::{
    naming::WordTableizer,
    parse::{KeyTypeName, ModelDef}
};

/// Tableizer that counts its calls.
#[derive(Default)]
struct CountingTableizer {
    calls: Cell<usize>
}

impl Tableize for CountingTableizer {
    fn tableize(&self, simple_name: &str) -> String {
        self.calls.set(self.calls.get() + 1);
        format!("t_{}", simple_name.to_lowercase())
    }
}

fn model(input: DeriveInput) -> ModelDef {
    ModelDef::from_derive_input(&input).unwrap()
}

fn resolve_model(model: &ModelDef) -> Result<ResolvedMetadata, DeclarationError> {
    resolve(
        &model.name_str(),
        &model.declaration,
        &model.fields,
        &WordTableizer
    )
}

fn order() -> ModelDef {
    model(syn::parse_quote! {
        pub struct Order {
            id: Option<i64>,
            customer: String,
            amount: Option<i32>,
        }
    })
}

#[test]
fn order_with_defaults() {
    let metadata = resolve_model(&order()).unwrap();
    assert_eq!(
        metadata,
        ResolvedMetadata {
            model:                     "Order".into(),
            table_name:                "orders".into(),
            data_source:               "objsql-default-datasource".into(),
            fluent:                    true,
            primary_key_type:          PrimaryKeyType::Long,
            primary_column_name:       "id".into(),
            primary_field_name:        "id".into(),
            skip_null_on_update:       true,
            all_fields_persistent:     true,
            primary_key_default_value: String::new()
        }
    );
    assert!(!metadata.store_assigns_key());
}

#[test]
fn orders_2023_with_integer_key() {
    let def = model(syn::parse_quote! {
        #[domain_model(
            table_name = "orders_2023",
            primary_key_type = "Integer",
            skip_null_on_update = false
        )]
        pub struct Order {
            id: Option<i32>,
            customer: String,
        }
    });
    let metadata = resolve_model(&def).unwrap();
    assert_eq!(metadata.table_name, "orders_2023");
    assert_eq!(metadata.primary_key_type, PrimaryKeyType::Integer);
    assert!(!metadata.skip_null_on_update);
}

#[test]
fn explicit_table_name_skips_naming() {
    let def = model(syn::parse_quote! {
        #[domain_model(table_name = "orders_2023")]
        pub struct Order {
            id: i64,
        }
    });
    let naming = CountingTableizer::default();
    let metadata = resolve(&def.name_str(), &def.declaration, &def.fields, &naming).unwrap();
    assert_eq!(metadata.table_name, "orders_2023");
    assert_eq!(naming.calls.get(), 0);
}

#[test]
fn empty_table_name_is_derived() {
    let def = model(syn::parse_quote! {
        #[domain_model(table_name = "")]
        pub struct Order {
            id: i64,
        }
    });
    let naming = CountingTableizer::default();
    let metadata = resolve(&def.name_str(), &def.declaration, &def.fields, &naming).unwrap();
    assert_eq!(metadata.table_name, "t_order");
    assert_eq!(naming.calls.get(), 1);
}

#[test]
fn string_key_type_is_rejected() {
    let def = model(syn::parse_quote! {
        #[domain_model(primary_key_type = "String")]
        pub struct Order {
            id: String,
        }
    });
    let err = resolve_model(&def).unwrap_err();
    assert_eq!(
        err,
        DeclarationError::UnsupportedKeyType {
            model:    "Order".into(),
            found:    "String".into(),
            expected: PrimaryKeyType::SUPPORTED
        }
    );
}

#[test]
fn bare_path_key_type_is_rejected_too() {
    let raw = RawDeclaration {
        primary_key_type: Some(KeyTypeName::from("u64")),
        ..RawDeclaration::default()
    };
    let err = resolve("Order", &raw, &[], &WordTableizer).unwrap_err();
    assert!(matches!(err, DeclarationError::UnsupportedKeyType { .. }));
}

#[test]
fn key_field_type_must_match() {
    let def = model(syn::parse_quote! {
        #[domain_model(primary_key_type = "Short")]
        pub struct Order {
            id: Option<i64>,
        }
    });
    let err = resolve_model(&def).unwrap_err();
    assert_eq!(
        err,
        DeclarationError::KeyFieldType {
            model:    "Order".into(),
            field:    "id".into(),
            found:    "Option<i64>".into(),
            expected: "i16",
            declared: "Short"
        }
    );
}

#[test]
fn transient_key_is_rejected() {
    let def = model(syn::parse_quote! {
        pub struct Order {
            #[column(transient)]
            id: i64,
        }
    });
    let err = resolve_model(&def).unwrap_err();
    assert!(matches!(err, DeclarationError::TransientKey { .. }));
}

#[test]
fn column_collision_is_rejected() {
    let def = model(syn::parse_quote! {
        #[domain_model(primary_field_name = "order_id")]
        pub struct Order {
            order_id: i64,
            id: String,
        }
    });
    let err = resolve_model(&def).unwrap_err();
    assert_eq!(
        err,
        DeclarationError::ColumnCollision {
            model:  "Order".into(),
            field:  "id".into(),
            column: "id".into()
        }
    );
}

#[test]
fn transient_field_does_not_collide() {
    let def = model(syn::parse_quote! {
        #[domain_model(primary_field_name = "order_id")]
        pub struct Order {
            order_id: i64,
            #[column(transient)]
            id: String,
        }
    });
    assert!(resolve_model(&def).is_ok());
}

#[test]
fn independent_column_and_field_names() {
    let def = model(syn::parse_quote! {
        #[domain_model(primary_column_name = "order_no", primary_field_name = "number")]
        pub struct Order {
            number: Option<i64>,
            id: String,
        }
    });
    let metadata = resolve_model(&def).unwrap();
    assert_eq!(metadata.column_name(&def.fields[0]), "order_no");
    assert_eq!(metadata.column_name(&def.fields[1]), "id");
}

#[test]
fn empty_names_are_rejected() {
    for option in ["data_source", "primary_column_name", "primary_field_name"] {
        let mut raw = RawDeclaration::default();
        match option {
            "data_source" => raw.data_source = Some(String::new()),
            "primary_column_name" => raw.primary_column_name = Some(" ".into()),
            _ => raw.primary_field_name = Some(String::new())
        }
        let err = resolve("Order", &raw, &[], &WordTableizer).unwrap_err();
        assert_eq!(
            err,
            DeclarationError::EmptyOption {
                model: "Order".into(),
                option
            }
        );
    }
}

#[test]
fn persistence_follows_markers() {
    let def = model(syn::parse_quote! {
        #[domain_model(all_fields_persistent = false)]
        pub struct Order {
            id: i64,
            #[column(persistent)]
            customer: String,
            note: Option<String>,
            #[column(persistent, transient)]
            cache: Option<String>,
        }
    });
    let metadata = resolve_model(&def).unwrap();
    let persisted: Vec<_> = def
        .fields
        .iter()
        .map(|f| metadata.is_persisted(f))
        .collect();
    assert_eq!(persisted, [true, true, false, false]);
}

#[test]
fn key_default_value_marks_store_assigned_keys() {
    let def = model(syn::parse_quote! {
        #[domain_model(primary_key_default_value = "AUTO_INCREMENT")]
        pub struct Order {
            id: Option<i64>,
        }
    });
    assert!(resolve_model(&def).unwrap().store_assigns_key());
}

#[test]
fn resolution_is_idempotent() {
    let def = order();
    assert_eq!(resolve_model(&def).unwrap(), resolve_model(&def).unwrap());
}
