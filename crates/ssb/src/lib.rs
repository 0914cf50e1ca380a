// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 Tessella

//! Per-field typed encoding rules for the Star Schema Benchmark record
//! schema, layered over any [`tessella_translate::Translator`] backend.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod month;
mod translator;

pub use translator::SsbTranslator;
