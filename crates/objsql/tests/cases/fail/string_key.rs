// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use objsql::DomainModel;

/// String keys are not a primary key type.
#[derive(DomainModel)]
#[domain_model(primary_key_type = "String")]
pub struct Order {
    id: String,
    customer: String,
}

fn main() {}
