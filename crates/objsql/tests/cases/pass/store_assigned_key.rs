// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use objsql::prelude::*;

#[derive(Debug, Default, DomainModel)]
#[domain_model(
    primary_key_type = "Short",
    primary_column_name = "ticket_no",
    primary_key_default_value = "AUTO_INCREMENT",
    fluent = false
)]
pub struct Ticket {
    id: i16,
    subject: String,
    #[column(transient)]
    cached_html: Option<String>,
}

fn main() {
    let mut ticket = Ticket::default();
    let () = ticket.set_subject("printer");
    assert_eq!(
        ticket.insert_statement().to_string(),
        "INSERT INTO tickets (subject) VALUES (?)"
    );
    assert!(ticket.apply_generated_key(i64::from(i16::MAX) + 1).is_err());
    ticket.apply_generated_key(9).unwrap();
    assert_eq!(ticket.id(), &9);
    assert_eq!(ticket.cached_html(), &None);
}
