// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessella

use crate::value::Value;

/// Errors produced by the translation layer.
///
/// Id 0 and the empty string are valid translation results, so every failure
/// path returns one of these instead of a sentinel value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("id {id} has not been assigned")]
	NotFound {
		id: u64,
	},

	#[error("{reason}")]
	Unsupported {
		reason: &'static str,
	},

	#[error("field '{field}' is not known to this translator")]
	Unimplemented {
		field: String,
	},

	#[error("field '{field}': value '{value}' is not {expected}")]
	TypeMismatch {
		field: String,
		value: Value,
		expected: &'static str,
	},

	/// The dense-id invariant broke. The affected dictionary is no longer
	/// trustworthy and refuses further use.
	#[error("translator state corrupted: {detail}")]
	InvariantViolation {
		detail: String,
	},

	#[error("field '{field}': {source}")]
	Field {
		field: String,
		#[source]
		source: Box<Error>,
	},
}

impl Error {
	/// Wraps this error with the field it occurred in.
	pub fn in_field(self, field: impl Into<String>) -> Self {
		Error::Field {
			field: field.into(),
			source: Box::new(self),
		}
	}

	/// The innermost error, with any field wrapping peeled off.
	pub fn root(&self) -> &Error {
		match self {
			Error::Field {
				source,
				..
			} => source.root(),
			other => other,
		}
	}
}
