// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use objsql::prelude::*;

#[derive(Debug, DomainModel)]
#[domain_model(all_fields_persistent = false, primary_field_name = "key", primary_column_name = "customer_id")]
struct Customer {
    key: i64,
    #[column(persistent)]
    r#type: String,
    #[column(persistent, skip_query)]
    notes: Option<String>,
    draft: bool,
}

fn main() {
    assert_eq!(Customer::columns(), ["customer_id", "type", "notes"]);
    assert_eq!(Customer::queryable_columns(), ["customer_id", "type"]);

    let row = Row::new()
        .with("customer_id", 4_i64)
        .with("type", "retail")
        .with("notes", Value::Null);
    let customer = Customer::from_row(&row).unwrap();
    assert_eq!(customer.key(), &4);
    assert_eq!(customer.r#type(), "retail");
    assert!(!customer.draft());
}
