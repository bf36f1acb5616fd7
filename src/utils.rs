// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains common functions that are used by sub functions.
//!
//! This includes modular helpers for [`BigUint`](num_bigint_dig::BigUint),
//! fixed-length byte encodings, the shared random source and the resolution
//! of digest algorithms by name.

pub mod big_integer;
pub mod message_digest;

use rand::{rngs::StdRng, SeedableRng};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A cryptographically strong random source that is seeded once and shared
/// between all components of one session.
pub type SharedRng = Arc<Mutex<StdRng>>;

/// Creates a new [`SharedRng`] seeded from the operating system's entropy source.
///
/// # Examples
/// ```
/// use bf_ibe::utils::new_shared_rng;
///
/// let rng = new_shared_rng();
/// ```
pub fn new_shared_rng() -> SharedRng {
    Arc::new(Mutex::new(StdRng::from_entropy()))
}

/// Wraps an already seeded [`StdRng`], e.g. for reproducible runs.
///
/// # Examples
/// ```
/// use bf_ibe::utils::shared_rng_from;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let rng = shared_rng_from(StdRng::seed_from_u64(42));
/// ```
pub fn shared_rng_from(rng: StdRng) -> SharedRng {
    Arc::new(Mutex::new(rng))
}

/// Locks the shared random source.
///
/// A generator whose lock was poisoned is still in a valid state,
/// hence the poison flag is ignored.
pub(crate) fn lock_rng(rng: &SharedRng) -> MutexGuard<'_, StdRng> {
    rng.lock().unwrap_or_else(PoisonError::into_inner)
}
