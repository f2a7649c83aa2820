// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use objsql::prelude::*;

#[derive(Debug, DomainModel)]
#[domain_model(
    table_name = "orders_2023",
    primary_key_type = Integer,
    skip_null_on_update = false
)]
pub struct Order {
    id: Option<i32>,
    customer: String,
    amount: Option<i32>,
}

fn key(value: <Order as DomainModel>::Key) -> i32 {
    value
}

fn main() {
    let order = Order {
        id: Some(1),
        customer: "acme".to_owned(),
        amount: None,
    };
    assert_eq!(key(7), 7);
    assert_eq!(
        order.update_statement().to_string(),
        "UPDATE orders_2023 SET customer = ?, amount = ? WHERE id = ?"
    );
}
