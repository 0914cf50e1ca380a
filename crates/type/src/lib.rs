// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessella

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod error;
pub mod value;

pub use error::Error;
pub use value::{Blob, Value};

pub type Result<T> = std::result::Result<T, Error>;
