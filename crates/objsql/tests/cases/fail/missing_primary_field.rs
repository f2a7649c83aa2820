// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use objsql::DomainModel;

/// No field named `id` holds the primary key.
#[derive(DomainModel)]
pub struct Order {
    number: i64,
    customer: String,
}

fn main() {}
