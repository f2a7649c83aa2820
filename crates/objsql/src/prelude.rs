// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime prelude plus the derive macro.
//!
//! ```rust,ignore
//! use objsql::prelude::*;
//! ```

pub use objsql_core::prelude::*;
pub use objsql_derive::DomainModel;
