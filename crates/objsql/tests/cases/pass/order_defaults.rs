// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use objsql::prelude::*;

#[derive(Debug, DomainModel)]
pub struct Order {
    id: Option<i64>,
    customer: String,
    amount: Option<i32>,
}

fn main() {
    let mut order = Order {
        id: None,
        customer: String::new(),
        amount: None,
    };
    let chained: &mut Order = order.set_customer("acme").set_amount(3_i32);
    assert_eq!(chained.customer(), "acme");

    assert_eq!(Order::TABLE_NAME, "orders");
    assert_eq!(Order::DATA_SOURCE_NAME, "objsql-default-datasource");
    assert_eq!(Order::PRIMARY_KEY_DEFAULT_VALUE, None);

    let statement = order.insert_statement();
    assert_eq!(
        statement.to_string(),
        "INSERT INTO orders (id, customer, amount) VALUES (?, ?, ?)"
    );
    let statement = order.update_statement();
    assert_eq!(
        statement.to_string(),
        "UPDATE orders SET customer = ?, amount = ? WHERE id = ?"
    );
}
