// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessella

use std::sync::atomic::{AtomicU64, Ordering};

use tessella_type::{Error, Result, Value};

use crate::FieldTranslator;

/// The sole source of new ids: an atomically incrementing counter starting
/// at 0. Every call to [`IdSequence::next`] returns a fresh id; no value is
/// ever lost or issued twice, regardless of contention.
#[derive(Debug, Default)]
pub struct IdSequence {
	current: AtomicU64,
}

impl IdSequence {
	pub fn new() -> Self {
		Self {
			current: AtomicU64::new(0),
		}
	}

	pub fn next(&self) -> u64 {
		self.current.fetch_add(1, Ordering::Relaxed)
	}

	/// Number of ids issued so far; equivalently, the next id to be issued.
	pub fn issued(&self) -> u64 {
		self.current.load(Ordering::Relaxed)
	}
}

/// A write-only translator that hands out the next sequential id on every
/// call and records no mapping.
///
/// The index requires column ids whether or not anything will ever map them
/// back to values. When reverse lookup is provably never needed, this variant
/// avoids the memory cost of keeping one.
#[derive(Debug, Default)]
pub struct SequenceFieldTranslator {
	sequence: IdSequence,
}

impl SequenceFieldTranslator {
	pub fn new() -> Self {
		Self {
			sequence: IdSequence::new(),
		}
	}
}

impl FieldTranslator for SequenceFieldTranslator {
	fn get(&self, _id: u64) -> Result<Value> {
		Err(Error::Unsupported {
			reason: "sequence translator records no values and cannot map ids back",
		})
	}

	fn get_or_create_id(&self, _value: Value) -> Result<u64> {
		Ok(self.sequence.next())
	}
}
