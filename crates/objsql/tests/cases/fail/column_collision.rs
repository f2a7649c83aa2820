// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use objsql::DomainModel;

/// `order_id` names both the key column and another field.
#[derive(DomainModel)]
#[domain_model(primary_column_name = "order_id")]
pub struct Order {
    id: i64,
    order_id: String,
}

fn main() {}
