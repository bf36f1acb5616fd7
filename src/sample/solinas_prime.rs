// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the search for Solinas primes `2^n - 2^i - 1`.
//!
//! References:
//! - \[1\] Solinas, J. A. (1999).
//!   Generalized Mersenne Numbers. Technical Report CORR 99-39,
//!   University of Waterloo.

use crate::{
    error::IbeError,
    utils::{lock_rng, SharedRng},
};
use log::{debug, trace};
use num_bigint_dig::{prime::probably_prime, BigUint};
use num_traits::One;
use rand::Rng;

/// Number of Miller-Rabin rounds of every primality test.
pub(crate) const PRIMALITY_ROUNDS: usize = 20;

/// Searches primes of the form `2^n - 2^i - 1` with `1 <= i <= n - 2`.
///
/// Every attempt draws a random upper end of a window of exponents
/// `i`, which starts at the upper end of the previous window, and tests
/// the candidates of the window from the largest exponent downwards.
///
/// # Examples
/// ```
/// use bf_ibe::sample::SolinasPrimeFactory;
/// use bf_ibe::utils::new_shared_rng;
///
/// let factory = SolinasPrimeFactory::new(new_shared_rng());
///
/// let prime = factory.generate(64, 100).unwrap().unwrap();
///
/// assert_eq!(64, prime.bits());
/// ```
pub struct SolinasPrimeFactory {
    rng: SharedRng,
}

impl SolinasPrimeFactory {
    /// Creates a new factory drawing from `rng`.
    pub fn new(rng: SharedRng) -> Self {
        Self { rng }
    }

    /// Generates a Solinas prime of exactly `bits` bits.
    ///
    /// Parameters:
    /// - `bits`: the bit length `n` of the prime
    /// - `attempt_limit`: the maximum number of scanned windows
    ///
    /// Returns the first probable prime found or [`None`] if all attempts
    /// are exhausted.
    ///
    /// # Errors and Failures
    /// - Returns a [`IbeError`] of type [`InvalidArgument`](IbeError::InvalidArgument)
    ///   if `bits < 3` or `attempt_limit < 1`.
    pub fn generate(&self, bits: usize, attempt_limit: usize) -> Result<Option<BigUint>, IbeError> {
        if bits < 3 {
            return Err(IbeError::InvalidArgument(format!(
                "Solinas primes need at least 3 bits, {bits} were requested"
            )));
        }
        if attempt_limit < 1 {
            return Err(IbeError::InvalidArgument(
                "the attempt limit must be at least 1".to_owned(),
            ));
        }

        let base = (BigUint::one() << bits) - BigUint::one();
        let mut lower = 1;
        for attempt in 0..attempt_limit {
            let upper = lock_rng(&self.rng).gen_range(lower..=bits - 2);
            trace!("scanning Solinas exponents {lower}..={upper} in attempt {attempt}");

            let found = (lower..=upper).rev().find_map(|i| {
                let candidate = &base - (BigUint::one() << i);
                probably_prime(&candidate, PRIMALITY_ROUNDS).then_some(candidate)
            });
            if let Some(prime) = found {
                debug!("found Solinas prime of {bits} bits after {} attempts", attempt + 1);
                return Ok(Some(prime));
            }
            lower = upper;
        }

        debug!("no Solinas prime of {bits} bits found in {attempt_limit} attempts");
        Ok(None)
    }
}

#[cfg(test)]
mod test_generate {
    use super::SolinasPrimeFactory;
    use crate::{error::IbeError, utils::shared_rng_from};
    use num_bigint_dig::{prime::probably_prime, BigUint};
    use num_traits::One;
    use rand::{rngs::StdRng, SeedableRng};

    fn factory() -> SolinasPrimeFactory {
        SolinasPrimeFactory::new(shared_rng_from(StdRng::seed_from_u64(5)))
    }

    /// Ensures that the found prime has the requested form and length
    #[test]
    fn form_and_length() {
        for bits in [16, 64, 160] {
            let prime = factory().generate(bits, 100).unwrap().unwrap();

            assert_eq!(bits, prime.bits() as usize);
            assert!(probably_prime(&prime, 20));
            let difference = (BigUint::one() << bits) - BigUint::one() - &prime;
            let ones: u32 = difference.to_bytes_be().iter().map(|b| b.count_ones()).sum();
            assert_eq!(1, ones);
        }
    }

    /// Ensures that the search gives up if no candidate is prime
    #[test]
    fn exhaustion() {
        // 2^15 - 2^i - 1 is composite for all 1 <= i <= 13
        assert_eq!(None, factory().generate(15, 50).unwrap());
    }

    /// Ensures that the smallest length yields the only candidate 2^3 - 2 - 1
    #[test]
    fn smallest_length() {
        assert_eq!(Some(BigUint::from(5u32)), factory().generate(3, 1).unwrap());
    }

    /// Ensures that invalid arguments are rejected
    #[test]
    fn invalid_arguments() {
        assert!(matches!(
            factory().generate(2, 10),
            Err(IbeError::InvalidArgument(_))
        ));
        assert!(matches!(
            factory().generate(64, 0),
            Err(IbeError::InvalidArgument(_))
        ));
    }
}
