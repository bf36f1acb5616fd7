// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains anything that is sampled during the setup of an
//! identity based encryption system. This includes Solinas primes for the
//! subgroup order and random points on Type-1 curves.
//!
//! All samplers draw from a [`SharedRng`](crate::utils::SharedRng) and are
//! bounded by an explicit number of attempts.

pub mod point_generation;
pub mod solinas_prime;

pub use point_generation::{AffinePointGenerationStrategy, Mod3GenerationStrategy};
pub use solinas_prime::SolinasPrimeFactory;
