// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessella

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// An arbitrary byte sequence submitted for translation.
///
/// A blob and the string formed from its bytes are deliberately treated as
/// the same dictionary key; the blob form is what reverse lookup returns when
/// a blob was submitted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Blob(Vec<u8>);

impl Blob {
	pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
		Self(bytes.into())
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	pub fn into_bytes(self) -> Vec<u8> {
		self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn to_hex(&self) -> String {
		let mut out = String::with_capacity(2 + self.0.len() * 2);
		out.push_str("0x");
		for byte in &self.0 {
			out.push_str(&format!("{:02x}", byte));
		}
		out
	}
}

impl From<Vec<u8>> for Blob {
	fn from(bytes: Vec<u8>) -> Self {
		Self(bytes)
	}
}

impl From<&[u8]> for Blob {
	fn from(bytes: &[u8]) -> Self {
		Self(bytes.to_vec())
	}
}

impl AsRef<[u8]> for Blob {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl Display for Blob {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_hex())
	}
}
