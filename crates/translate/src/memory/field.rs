// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessella

use std::{
	collections::HashMap,
	sync::atomic::{AtomicBool, Ordering},
};

use parking_lot::RwLock;
use tessella_type::{Error, Result, Value};

use crate::{FieldTranslator, sequence::IdSequence};

struct Inner {
	index: HashMap<Box<[u8]>, u64>,
	values: Vec<Value>,
}

/// In-memory dictionary for one field: a bidirectional mapping between values
/// and dense ids assigned in first-seen order.
///
/// Lookups of already-known values take only the shared lock, so the common
/// steady-state case never serializes readers against each other. Only a
/// genuinely new value escalates to the exclusive section.
pub struct MemoryFieldTranslator {
	inner: RwLock<Inner>,
	sequence: IdSequence,
	poisoned: AtomicBool,
}

impl MemoryFieldTranslator {
	pub fn new() -> Self {
		Self {
			inner: RwLock::new(Inner {
				index: HashMap::new(),
				values: Vec::new(),
			}),
			sequence: IdSequence::new(),
			poisoned: AtomicBool::new(false),
		}
	}

	/// Number of distinct values registered so far. Valid ids are exactly
	/// `0..len()`.
	pub fn len(&self) -> usize {
		self.inner.read().values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn ensure_usable(&self) -> Result<()> {
		if self.poisoned.load(Ordering::Relaxed) {
			return Err(Error::InvariantViolation {
				detail: "dictionary previously detected corruption and refuses further use"
					.to_string(),
			});
		}
		Ok(())
	}
}

impl Default for MemoryFieldTranslator {
	fn default() -> Self {
		Self::new()
	}
}

impl FieldTranslator for MemoryFieldTranslator {
	fn get(&self, id: u64) -> Result<Value> {
		self.ensure_usable()?;
		let inner = self.inner.read();
		if id < inner.values.len() as u64 {
			Ok(inner.values[id as usize].clone())
		} else {
			Err(Error::NotFound {
				id,
			})
		}
	}

	fn get_or_create_id(&self, value: Value) -> Result<u64> {
		self.ensure_usable()?;

		{
			let inner = self.inner.read();
			if let Some(&id) = inner.index.get(value.key_bytes().as_ref()) {
				return Ok(id);
			}
		}

		let key = value.key_bytes().into_owned().into_boxed_slice();
		let mut inner = self.inner.write();
		// Another caller may have raced ahead between the shared probe and
		// acquiring the exclusive section.
		if let Some(&id) = inner.index.get(key.as_ref()) {
			return Ok(id);
		}

		let id = self.sequence.next();
		inner.values.push(value);
		if inner.values.len() as u64 != id + 1 {
			self.poisoned.store(true, Ordering::Relaxed);
			return Err(Error::InvariantViolation {
				detail: format!(
					"value sequence holds {} entries but the id sequence has issued {}",
					inner.values.len(),
					self.sequence.issued()
				),
			});
		}
		inner.index.insert(key, id);
		Ok(id)
	}
}
