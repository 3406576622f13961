// ABOUTME: Algorithm selection for strength estimation
// ABOUTME: Enum-dispatched one-rep-max formulas shared by every analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Algorithm Selection Module
//!
//! Algorithms are enums rather than strings or booleans, so a caller picks a
//! formula with a type and every analyzer stays pure.

pub mod one_rep_max;

pub use one_rep_max::{OneRepMaxAlgorithm, RepMaxEntry, BRZYCKI_DEFAULT_MAX_REPS};
