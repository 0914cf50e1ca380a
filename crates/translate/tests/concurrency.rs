// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessella

use std::{
	collections::HashSet,
	sync::{Arc, Barrier},
	thread,
};

use tessella_translate::{
	FieldTranslator, IdSequence, MemoryFieldTranslator, MemoryTranslator, Translator,
};
use tessella_type::Value;

const THREADS: usize = 16;

/// Hammer the id sequence from many threads; every issued id must be unique
/// and the range dense.
#[test]
fn test_sequence_concurrent_uniqueness() {
	const PER_THREAD: usize = 1_000;

	let sequence = Arc::new(IdSequence::new());
	let barrier = Arc::new(Barrier::new(THREADS));

	let mut handles = vec![];
	for _ in 0..THREADS {
		let sequence = sequence.clone();
		let barrier = barrier.clone();
		handles.push(thread::spawn(move || {
			barrier.wait();
			(0..PER_THREAD).map(|_| sequence.next()).collect::<Vec<_>>()
		}));
	}

	let mut seen = HashSet::new();
	for handle in handles {
		for id in handle.join().expect("thread panicked") {
			assert!(seen.insert(id), "id {} issued twice", id);
		}
	}

	let total = (THREADS * PER_THREAD) as u64;
	assert_eq!(seen.len() as u64, total);
	assert_eq!(sequence.issued(), total);
	assert!(seen.contains(&0));
	assert!(seen.contains(&(total - 1)));
}

/// Many threads race to register one never-before-seen value: exactly one
/// entry is allocated and every caller gets the same id.
#[test]
fn test_get_or_create_converges_on_one_id() {
	let translator = Arc::new(MemoryFieldTranslator::new());
	let barrier = Arc::new(Barrier::new(THREADS));

	let mut handles = vec![];
	for _ in 0..THREADS {
		let translator = translator.clone();
		let barrier = barrier.clone();
		handles.push(thread::spawn(move || {
			barrier.wait();
			translator.get_or_create_id(Value::utf8("singular")).unwrap()
		}));
	}

	let ids: Vec<u64> = handles.into_iter().map(|h| h.join().expect("thread panicked")).collect();
	assert!(ids.iter().all(|&id| id == ids[0]));
	assert_eq!(translator.len(), 1);
	assert_eq!(translator.get(ids[0]).unwrap(), Value::utf8("singular"));
}

/// Threads registering distinct values still produce a dense id range with no
/// gaps and no duplicates.
#[test]
fn test_concurrent_distinct_values_stay_dense() {
	const PER_THREAD: usize = 100;

	let translator = Arc::new(MemoryFieldTranslator::new());
	let barrier = Arc::new(Barrier::new(THREADS));

	let mut handles = vec![];
	for worker in 0..THREADS {
		let translator = translator.clone();
		let barrier = barrier.clone();
		handles.push(thread::spawn(move || {
			barrier.wait();
			for i in 0..PER_THREAD {
				let value = Value::utf8(format!("w{}-v{}", worker, i));
				translator.get_or_create_id(value).unwrap();
			}
		}));
	}
	for handle in handles {
		handle.join().expect("thread panicked");
	}

	let total = THREADS * PER_THREAD;
	assert_eq!(translator.len(), total);
	// Density: every id below the count resolves, the count itself does not.
	assert!(translator.get(total as u64 - 1).is_ok());
	assert!(translator.get(total as u64).is_err());
}

/// Concurrent first access to an unseen field must create its dictionary
/// exactly once; ids issued through either path land in the same namespace.
#[test]
fn test_concurrent_field_creation() {
	let translator = Arc::new(MemoryTranslator::new());
	let barrier = Arc::new(Barrier::new(THREADS));

	let mut handles = vec![];
	for worker in 0..THREADS {
		let translator = translator.clone();
		let barrier = barrier.clone();
		handles.push(thread::spawn(move || {
			barrier.wait();
			translator.get_or_create_id("fresh_field", Value::Uint4(worker as u32)).unwrap()
		}));
	}

	let mut ids: Vec<u64> = handles.into_iter().map(|h| h.join().expect("thread panicked")).collect();
	ids.sort_unstable();
	ids.dedup();
	// All threads hit one dictionary, so the distinct values fill 0..THREADS.
	assert_eq!(ids, (0..THREADS as u64).collect::<Vec<_>>());
	assert_eq!(translator.field("fresh_field").len(), THREADS);
}

/// Readers of known values proceed while writers allocate new ones in other
/// fields.
#[test]
fn test_cross_field_reads_during_writes() {
	let translator = Arc::new(MemoryTranslator::new());
	let hot = translator.get_or_create_id("hot", Value::utf8("pinned")).unwrap();

	let barrier = Arc::new(Barrier::new(2));

	let writer = {
		let translator = translator.clone();
		let barrier = barrier.clone();
		thread::spawn(move || {
			barrier.wait();
			for i in 0..10_000u32 {
				translator.get_or_create_id("cold", Value::Uint4(i)).unwrap();
			}
		})
	};
	let reader = {
		let translator = translator.clone();
		let barrier = barrier.clone();
		thread::spawn(move || {
			barrier.wait();
			for _ in 0..10_000 {
				assert_eq!(
					translator.get_or_create_id("hot", Value::utf8("pinned")).unwrap(),
					hot
				);
			}
		})
	};

	writer.join().expect("writer panicked");
	reader.join().expect("reader panicked");
	assert_eq!(translator.field("cold").len(), 10_000);
	assert_eq!(translator.field("hot").len(), 1);
}
