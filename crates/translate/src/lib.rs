// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessella

//! Translation of arbitrary record values into dense, monotonically
//! increasing row and column ids, and back.
//!
//! A bitmap index addresses everything by non-negative integer coordinates.
//! Ingestion workers submit whatever their records carry (strings, byte
//! sequences, small integers) and must all agree on exactly one id per
//! distinct value per field. Implementations here guarantee that under
//! arbitrary concurrency while keeping ids dense and contiguous from 0.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod memory;
pub mod sequence;

use std::sync::Arc;

pub use memory::{MemoryFieldTranslator, MemoryTranslator};
pub use sequence::{IdSequence, SequenceFieldTranslator};
use tessella_type::{Result, Value};

/// Maps values of a single field to row ids and back.
///
/// Implementations are threadsafe and assign ids monotonically from 0.
pub trait FieldTranslator: Send + Sync {
	/// Returns the value previously assigned to `id`.
	fn get(&self, id: u64) -> Result<Value>;

	/// Returns the id for `value`, assigning the next free id if the value
	/// has never been seen. Concurrent calls with the same new value
	/// converge on one id.
	fn get_or_create_id(&self, value: Value) -> Result<u64>;
}

/// Maps values to ids and back, namespaced by field.
///
/// Dictionaries of different fields never interact; contention on one field
/// does not block another.
pub trait Translator: Send + Sync {
	fn get(&self, field: &str, id: u64) -> Result<Value>;

	fn get_or_create_id(&self, field: &str, value: Value) -> Result<u64>;
}

impl<T: Translator + ?Sized> Translator for Arc<T> {
	fn get(&self, field: &str, id: u64) -> Result<Value> {
		(**self).get(field, id)
	}

	fn get_or_create_id(&self, field: &str, value: Value) -> Result<u64> {
		(**self).get_or_create_id(field, value)
	}
}
