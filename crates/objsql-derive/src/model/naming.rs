// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Table name derivation.
//!
//! The resolver only calls [`Tableize`] when `table_name` is empty or absent.
//! [`WordTableizer`] snake-cases the type name and pluralises its last word:
//!
//! | Type | Table |
//! |------|-------|
//! | `Order` | `orders` |
//! | `OrderItem` | `order_items` |
//! | `Category` | `categories` |
//! | `Address` | `addresses` |
//! | `Person` | `people` |

use convert_case::{Case, Casing};

/// Naming service that turns a simple type name into a table name.
pub trait Tableize {
    /// Table name for `simple_name`.
    fn tableize(&self, simple_name: &str) -> String;
}

/// Snake case plus English pluralisation of the last word.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTableizer;

impl Tableize for WordTableizer {
    fn tableize(&self, simple_name: &str) -> String {
        let snake = simple_name.to_case(Case::Snake);
        match snake.rsplit_once('_') {
            Some((head, last)) => format!("{}_{}", head, pluralize(last)),
            None => pluralize(&snake)
        }
    }
}

const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("ox", "oxen")
];

const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "species",
    "fish"
];

/// Plural of a lowercase English word.
fn pluralize(word: &str) -> String {
    if word.is_empty() || UNCOUNTABLE.contains(&word) {
        return word.to_owned();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == word) {
        return (*plural).to_owned();
    }
    if word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("sh")
        || word.ends_with("ch")
    {
        return format!("{}es", word);
    }
    if let Some(stem) = word.strip_suffix('y')
        && !stem.ends_with(['a', 'e', 'i', 'o', 'u'])
    {
        return format!("{}ies", stem);
    }
    format!("{}s", word)
}
