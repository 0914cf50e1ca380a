// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessella

use tessella_translate::Translator;
use tessella_type::{Error, Result, Value};
use tracing::instrument;

use crate::month;

/// Fields with open string domains, backed by the wrapped translator.
const STRING_FIELDS: [&str; 9] = [
	"c_city",
	"c_nation",
	"c_region",
	"s_city",
	"s_nation",
	"s_region",
	"p_mfgr",
	"p_category",
	"p_brand1",
];

/// Fields whose values are their own id, one byte wide.
const UINT1_FIELDS: [&str; 3] = ["lo_weeknum", "lo_quantity_b", "lo_discount_b"];

/// Per-field translation rules for the Star Schema Benchmark schema.
///
/// Each field name picks one strategy: open string domains delegate to the
/// wrapped backend (any [`Translator`]; durable in production, in-memory in
/// tests), the month dimension uses a fixed twelve-entry table, and the small
/// numeric dimensions pass a value through as its own id. New fields mean a
/// new match arm here; the dictionary and registry layers stay untouched.
pub struct SsbTranslator<T> {
	strings: T,
}

impl<T> SsbTranslator<T> {
	pub fn new(strings: T) -> Self {
		Self {
			strings,
		}
	}

	pub fn into_inner(self) -> T {
		self.strings
	}
}

impl<T: Translator> Translator for SsbTranslator<T> {
	#[instrument(name = "ssb::get", level = "trace", skip(self))]
	fn get(&self, field: &str, id: u64) -> Result<Value> {
		match field {
			f if STRING_FIELDS.contains(&f) => {
				// The backend stores raw bytes; render them back to text.
				match self.strings.get(field, id)? {
					Value::Blob(blob) => Ok(Value::Utf8(
						String::from_utf8_lossy(blob.as_bytes()).into_owned(),
					)),
					other => Ok(other),
				}
			}
			"lo_month" => match month::label_of(id) {
				Some(label) => Ok(Value::utf8(label)),
				None => Err(Error::NotFound {
					id,
				}
				.in_field(field)),
			},
			f if UINT1_FIELDS.contains(&f) => match u8::try_from(id) {
				Ok(v) => Ok(Value::Uint1(v)),
				Err(_) => Err(Error::TypeMismatch {
					field: field.to_string(),
					value: Value::Uint8(id),
					expected: "a 1-byte unsigned integer",
				}),
			},
			"lo_year" => match u16::try_from(id) {
				Ok(v) => Ok(Value::Uint2(v)),
				Err(_) => Err(Error::TypeMismatch {
					field: field.to_string(),
					value: Value::Uint8(id),
					expected: "a 2-byte unsigned integer",
				}),
			},
			_ => Err(Error::Unimplemented {
				field: field.to_string(),
			}),
		}
	}

	#[instrument(name = "ssb::get_or_create_id", level = "trace", skip(self, value))]
	fn get_or_create_id(&self, field: &str, value: Value) -> Result<u64> {
		match field {
			f if STRING_FIELDS.contains(&f) => {
				// Store string input in its byte form, the way the durable
				// backend keys it.
				let value = match value {
					Value::Utf8(s) => Value::blob(s.into_bytes()),
					Value::Blob(_) => value,
					other => {
						return Err(Error::TypeMismatch {
							field: field.to_string(),
							value: other,
							expected: "a string",
						});
					}
				};
				self.strings.get_or_create_id(field, value)
			}
			"lo_month" => match value.as_utf8().and_then(month::id_of) {
				Some(id) => Ok(id),
				None => Err(Error::TypeMismatch {
					field: field.to_string(),
					value,
					expected: "a calendar month name",
				}),
			},
			f if UINT1_FIELDS.contains(&f) => {
				match value.to_u64().and_then(|v| u8::try_from(v).ok()) {
					Some(v) => Ok(v as u64),
					None => Err(Error::TypeMismatch {
						field: field.to_string(),
						value,
						expected: "a 1-byte unsigned integer",
					}),
				}
			}
			"lo_year" => match value.to_u64().and_then(|v| u16::try_from(v).ok()) {
				Some(v) => Ok(v as u64),
				None => Err(Error::TypeMismatch {
					field: field.to_string(),
					value,
					expected: "a 2-byte unsigned integer",
				}),
			},
			_ => Err(Error::Unimplemented {
				field: field.to_string(),
			}),
		}
	}
}

#[cfg(test)]
mod tests {
	use tessella_translate::MemoryTranslator;

	use super::*;

	fn translator() -> SsbTranslator<MemoryTranslator> {
		SsbTranslator::new(MemoryTranslator::new())
	}

	#[test]
	fn test_month_encoding() {
		let t = translator();
		assert_eq!(t.get_or_create_id("lo_month", Value::utf8("February")).unwrap(), 1);
		assert_eq!(t.get("lo_month", 1).unwrap(), Value::utf8("February"));
	}

	#[test]
	fn test_month_rejects_unknown_label() {
		let t = translator();
		let err = t.get_or_create_id("lo_month", Value::utf8("Frebuary")).unwrap_err();
		assert!(matches!(err, Error::TypeMismatch { .. }));
	}

	#[test]
	fn test_month_id_out_of_range() {
		let t = translator();
		let err = t.get("lo_month", 12).unwrap_err();
		assert!(matches!(
			err.root(),
			Error::NotFound {
				id: 12
			}
		));
	}

	#[test]
	fn test_year_passes_through() {
		let t = translator();
		assert_eq!(t.get_or_create_id("lo_year", Value::Uint2(1994)).unwrap(), 1994);
		assert_eq!(t.get("lo_year", 1994).unwrap(), Value::Uint2(1994));
	}

	#[test]
	fn test_year_rejects_wide_values() {
		let t = translator();
		let err = t.get_or_create_id("lo_year", Value::Uint4(100_000)).unwrap_err();
		assert!(matches!(err, Error::TypeMismatch { .. }));
		let err = t.get("lo_year", 100_000).unwrap_err();
		assert!(matches!(err, Error::TypeMismatch { .. }));
	}

	#[test]
	fn test_weeknum_passes_through() {
		let t = translator();
		assert_eq!(t.get_or_create_id("lo_weeknum", Value::Uint1(52)).unwrap(), 52);
		assert_eq!(t.get("lo_weeknum", 52).unwrap(), Value::Uint1(52));

		let err = t.get_or_create_id("lo_weeknum", Value::utf8("52")).unwrap_err();
		assert!(matches!(err, Error::TypeMismatch { .. }));
	}

	#[test]
	fn test_unknown_field() {
		let t = translator();
		assert!(matches!(
			t.get_or_create_id("unknown_field", Value::utf8("x")),
			Err(Error::Unimplemented { .. })
		));
		assert!(matches!(t.get("unknown_field", 0), Err(Error::Unimplemented { .. })));
	}
}
