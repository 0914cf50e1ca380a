// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessella

use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;
use tessella_type::{Result, Value};
use tracing::{debug, instrument};

use crate::{FieldTranslator, Translator, memory::MemoryFieldTranslator};

/// In-memory [`Translator`]: a registry of per-field dictionaries created
/// lazily on first use and kept for the registry's lifetime.
///
/// The registry is an owned instance handed to the ingestion pipeline; share
/// it across workers behind an [`Arc`].
pub struct MemoryTranslator {
	fields: RwLock<HashMap<String, Arc<MemoryFieldTranslator>>>,
}

impl MemoryTranslator {
	pub fn new() -> Self {
		Self {
			fields: RwLock::new(HashMap::new()),
		}
	}

	/// The dictionary for `field`, created exactly once even under
	/// concurrent first access.
	pub fn field(&self, field: &str) -> Arc<MemoryFieldTranslator> {
		{
			let fields = self.fields.read();
			if let Some(translator) = fields.get(field) {
				return translator.clone();
			}
		}
		let mut fields = self.fields.write();
		if let Some(translator) = fields.get(field) {
			return translator.clone();
		}
		debug!(field, "creating field dictionary");
		let translator = Arc::new(MemoryFieldTranslator::new());
		fields.insert(field.to_string(), translator.clone());
		translator
	}
}

impl Default for MemoryTranslator {
	fn default() -> Self {
		Self::new()
	}
}

impl Translator for MemoryTranslator {
	#[instrument(name = "translate::get", level = "trace", skip(self))]
	fn get(&self, field: &str, id: u64) -> Result<Value> {
		self.field(field).get(id).map_err(|err| err.in_field(field))
	}

	#[instrument(name = "translate::get_or_create_id", level = "trace", skip(self, value))]
	fn get_or_create_id(&self, field: &str, value: Value) -> Result<u64> {
		self.field(field).get_or_create_id(value).map_err(|err| err.in_field(field))
	}
}
