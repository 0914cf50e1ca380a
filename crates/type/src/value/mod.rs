// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessella

use std::{
	borrow::Cow,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

mod blob;

pub use blob::Blob;

/// A value submitted for translation, represented as a native Rust type.
///
/// The domain is closed: strings, byte sequences and unsigned integers of
/// known width. Anything else a source record carries has to be rendered into
/// one of these before it reaches a translator.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// A UTF-8 encoded text
	Utf8(String),
	/// An arbitrary byte sequence
	Blob(Blob),
	/// A 1-byte unsigned integer
	Uint1(u8),
	/// A 2-byte unsigned integer
	Uint2(u16),
	/// A 4-byte unsigned integer
	Uint4(u32),
	/// An 8-byte unsigned integer
	Uint8(u64),
}

impl Value {
	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn blob(v: impl Into<Vec<u8>>) -> Self {
		Value::Blob(Blob::new(v))
	}

	/// The bytes a dictionary uses as the lookup key for this value.
	///
	/// `Utf8` and `Blob` map to their raw bytes, so a byte sequence and the
	/// string formed from the same bytes compare equal as keys. Unsigned
	/// integers widen to `u64` and use its big-endian encoding.
	pub fn key_bytes(&self) -> Cow<'_, [u8]> {
		match self {
			Value::Utf8(s) => Cow::Borrowed(s.as_bytes()),
			Value::Blob(b) => Cow::Borrowed(b.as_bytes()),
			Value::Uint1(v) => Cow::Owned((*v as u64).to_be_bytes().to_vec()),
			Value::Uint2(v) => Cow::Owned((*v as u64).to_be_bytes().to_vec()),
			Value::Uint4(v) => Cow::Owned((*v as u64).to_be_bytes().to_vec()),
			Value::Uint8(v) => Cow::Owned(v.to_be_bytes().to_vec()),
		}
	}

	pub fn as_utf8(&self) -> Option<&str> {
		match self {
			Value::Utf8(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_blob(&self) -> Option<&Blob> {
		match self {
			Value::Blob(b) => Some(b),
			_ => None,
		}
	}

	pub fn to_u8(&self) -> Option<u8> {
		match self {
			Value::Uint1(v) => Some(*v),
			_ => None,
		}
	}

	pub fn to_u16(&self) -> Option<u16> {
		match self {
			Value::Uint2(v) => Some(*v),
			_ => None,
		}
	}

	/// Widens any unsigned integer variant to `u64`.
	pub fn to_u64(&self) -> Option<u64> {
		match self {
			Value::Uint1(v) => Some(*v as u64),
			Value::Uint2(v) => Some(*v as u64),
			Value::Uint4(v) => Some(*v as u64),
			Value::Uint8(v) => Some(*v),
			_ => None,
		}
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Utf8(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Utf8(v)
	}
}

impl From<Vec<u8>> for Value {
	fn from(v: Vec<u8>) -> Self {
		Value::Blob(Blob::new(v))
	}
}

impl From<&[u8]> for Value {
	fn from(v: &[u8]) -> Self {
		Value::Blob(Blob::from(v))
	}
}

impl From<u8> for Value {
	fn from(v: u8) -> Self {
		Value::Uint1(v)
	}
}

impl From<u16> for Value {
	fn from(v: u16) -> Self {
		Value::Uint2(v)
	}
}

impl From<u32> for Value {
	fn from(v: u32) -> Self {
		Value::Uint4(v)
	}
}

impl From<u64> for Value {
	fn from(v: u64) -> Self {
		Value::Uint8(v)
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Utf8(s) => f.write_str(s),
			Value::Blob(b) => write!(f, "{}", b),
			Value::Uint1(v) => write!(f, "{}", v),
			Value::Uint2(v) => write!(f, "{}", v),
			Value::Uint4(v) => write!(f, "{}", v),
			Value::Uint8(v) => write!(f, "{}", v),
		}
	}
}
