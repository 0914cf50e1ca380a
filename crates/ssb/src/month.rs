// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessella

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Month names in id order: January is 0, December is 11.
const MONTHS: [&str; 12] = [
	"January",
	"February",
	"March",
	"April",
	"May",
	"June",
	"July",
	"August",
	"September",
	"October",
	"November",
	"December",
];

static MONTH_IDS: Lazy<HashMap<&'static str, u64>> =
	Lazy::new(|| MONTHS.iter().enumerate().map(|(id, name)| (*name, id as u64)).collect());

pub(crate) fn id_of(label: &str) -> Option<u64> {
	MONTH_IDS.get(label).copied()
}

pub(crate) fn label_of(id: u64) -> Option<&'static str> {
	MONTHS.get(usize::try_from(id).ok()?).copied()
}
