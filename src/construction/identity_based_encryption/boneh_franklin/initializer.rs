// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! Contains the setup of Boneh-Franklin systems (RFC 5091, Section 5.1).

use crate::{
    construction::identity_based_encryption::{
        IbeInitializer, IbeSetup, MasterSecret, PublicParameters, SecurityLevel,
    },
    elliptic_curve::{AffinePoint, TypeOneEllipticCurve},
    error::IbeError,
    sample::{
        solinas_prime::PRIMALITY_ROUNDS, AffinePointGenerationStrategy, Mod3GenerationStrategy,
        SolinasPrimeFactory,
    },
    utils::{big_integer::random_in_range, lock_rng, SharedRng},
};
use log::{debug, info, trace};
use num_bigint_dig::{prime::probably_prime, BigUint};
use num_traits::One;
use std::marker::PhantomData;

/// Creates the public parameters and the master secret of Boneh-Franklin
/// systems.
///
/// The setup proceeds as follows:
/// 1. `q` is a Solinas prime of `q_bits` bits.
/// 2. `p = 12 r q - 1` is a prime of `p_bits` bits for a random `r`.
/// 3. `P = [12 r] P'` for a random point `P'` of `y^2 = x^3 + 1` over `F_p`
///    with `P ≠ O`, hence `P` has order `q`.
/// 4. `s` is drawn from `[2, q)` and `P_pub = [s] P`.
///
/// The point strategy `S` can be exchanged, every step is bounded by its
/// own attempt budget.
///
/// # Examples
/// ```no_run
/// use bf_ibe::construction::identity_based_encryption::{
///     BonehFranklinInitializer, IbeInitializer, SecurityLevel,
/// };
/// use bf_ibe::sample::Mod3GenerationStrategy;
/// use bf_ibe::utils::new_shared_rng;
///
/// let initializer = BonehFranklinInitializer::<Mod3GenerationStrategy>::new(new_shared_rng())
///     .with_field_prime_attempts(10_000);
///
/// let setup = initializer.setup(SecurityLevel::Lowest).unwrap();
///
/// assert_eq!(160, setup.public_parameters.q.bits());
/// ```
pub struct BonehFranklinInitializer<S: AffinePointGenerationStrategy = Mod3GenerationStrategy> {
    rng: SharedRng,
    prime_attempts: usize,
    point_attempts: usize,
    field_prime_attempts: usize,
    strategy: PhantomData<S>,
}

impl<S: AffinePointGenerationStrategy> BonehFranklinInitializer<S> {
    /// Creates an initializer drawing from `rng` with the default budgets of
    /// 100 Solinas windows, 100 point draws and 100 000 field prime candidates.
    pub fn new(rng: SharedRng) -> Self {
        Self {
            rng,
            prime_attempts: 100,
            point_attempts: 100,
            field_prime_attempts: 100_000,
            strategy: PhantomData,
        }
    }

    /// Sets the number of scanned windows of the Solinas prime search.
    pub fn with_prime_attempts(mut self, attempts: usize) -> Self {
        self.prime_attempts = attempts;
        self
    }

    /// Sets the number of point draws.
    pub fn with_point_attempts(mut self, attempts: usize) -> Self {
        self.point_attempts = attempts;
        self
    }

    /// Sets the number of tested candidates `p = 12 r q - 1`.
    pub fn with_field_prime_attempts(mut self, attempts: usize) -> Self {
        self.field_prime_attempts = attempts;
        self
    }

    /// Searches `r` such that `12 r q - 1` is a prime of `p_bits` bits.
    ///
    /// Returns the prime and its cofactor `12 r`.
    fn field_prime(&self, q: &BigUint, p_bits: usize) -> Result<(BigUint, BigUint), IbeError> {
        let q_bits = q.bits();
        if p_bits <= q_bits + 3 {
            return Err(IbeError::InvalidArgument(format!(
                "a field of {p_bits} bits can not contain a subgroup of {q_bits} bits"
            )));
        }
        if self.field_prime_attempts < 1 {
            return Err(IbeError::InvalidArgument(
                "the attempt limit must be at least 1".to_owned(),
            ));
        }

        let r_bound = BigUint::one() << (p_bits - q_bits - 3);
        let twelve = BigUint::from(12u32);
        for attempt in 0..self.field_prime_attempts {
            let r = random_in_range(&mut *lock_rng(&self.rng), &BigUint::one(), &r_bound)?;
            let cofactor = &twelve * r;
            let p = &cofactor * q - BigUint::one();
            if p.bits() == p_bits && probably_prime(&p, PRIMALITY_ROUNDS) {
                debug!("found field prime of {p_bits} bits after {} attempts", attempt + 1);
                return Ok((p, cofactor));
            }
        }

        Err(IbeError::SetupFailure(format!(
            "no field prime of {p_bits} bits found in {} attempts",
            self.field_prime_attempts
        )))
    }

    /// Searches a point of order `q` as a multiple of a random point.
    fn generator(
        &self,
        curve: &TypeOneEllipticCurve,
        cofactor: &BigUint,
    ) -> Result<AffinePoint, IbeError> {
        if self.point_attempts < 1 {
            return Err(IbeError::InvalidArgument(
                "the attempt limit must be at least 1".to_owned(),
            ));
        }

        let strategy = S::for_curve(curve.clone(), self.rng.clone());
        for attempt in 0..self.point_attempts {
            let candidate = strategy.generate(self.point_attempts)?.ok_or_else(|| {
                IbeError::SetupFailure(format!(
                    "no point found in {} attempts",
                    self.point_attempts
                ))
            })?;
            let point = candidate.multiply(cofactor, curve);
            if !point.is_infinity() {
                debug!("found generator after {} attempts", attempt + 1);
                return Ok(point);
            }
            trace!("random point {attempt} has no component of order q");
        }

        Err(IbeError::SetupFailure(format!(
            "no point of order q found in {} attempts",
            self.point_attempts
        )))
    }
}

impl<S: AffinePointGenerationStrategy> IbeInitializer for BonehFranklinInitializer<S> {
    /// Runs the setup for `security_level`.
    ///
    /// # Errors and Failures
    /// - Returns a [`IbeError`] of type [`SetupFailure`](IbeError::SetupFailure)
    ///   if a generation step exhausts its attempts.
    /// - Returns a [`IbeError`] of type [`InvalidArgument`](IbeError::InvalidArgument)
    ///   if an attempt budget is zero.
    fn setup(&self, security_level: SecurityLevel) -> Result<IbeSetup, IbeError> {
        let q_bits = security_level.q_bits();
        let p_bits = security_level.p_bits();

        let q = SolinasPrimeFactory::new(self.rng.clone())
            .generate(q_bits, self.prime_attempts)?
            .ok_or_else(|| {
                IbeError::SetupFailure(format!(
                    "no Solinas prime of {q_bits} bits found in {} attempts",
                    self.prime_attempts
                ))
            })?;
        info!("generated subgroup order of {q_bits} bits");

        let (p, cofactor) = self.field_prime(&q, p_bits)?;
        let curve = TypeOneEllipticCurve::of_order(p)?;
        info!("generated field order of {p_bits} bits");

        let point = self.generator(&curve, &cofactor)?;
        let secret = random_in_range(&mut *lock_rng(&self.rng), &BigUint::from(2u32), &q)?;
        let point_public = point.wnaf_multiply(&secret, &curve);
        info!("setup of level {security_level:?} finished");

        Ok(IbeSetup {
            public_parameters: PublicParameters {
                curve,
                q,
                point,
                point_public,
                hash_function: security_level.hash_function().name().to_owned(),
            },
            master_secret: MasterSecret { secret },
        })
    }
}

#[cfg(test)]
mod test_setup {
    use super::BonehFranklinInitializer;
    use crate::{
        construction::identity_based_encryption::{IbeInitializer, SecurityLevel},
        elliptic_curve::AffinePoint,
        error::IbeError,
        sample::Mod3GenerationStrategy,
        utils::{new_shared_rng, shared_rng_from},
    };
    use num_bigint_dig::{prime::probably_prime, BigUint};
    use num_traits::One;
    use rand::{rngs::StdRng, SeedableRng};

    type Initializer = BonehFranklinInitializer<Mod3GenerationStrategy>;

    /// Ensures that the setup records of the lowest level are consistent
    #[test]
    fn lowest_level() {
        let setup = Initializer::new(shared_rng_from(StdRng::seed_from_u64(7)))
            .setup(SecurityLevel::Lowest)
            .unwrap();
        let parameters = &setup.public_parameters;
        let p = parameters.curve.field_order();

        assert_eq!(160, parameters.q.bits());
        assert_eq!(512, p.bits());
        assert!(probably_prime(&parameters.q, 20));
        assert!(probably_prime(p, 20));
        assert_eq!(
            BigUint::from(11u32),
            p % BigUint::from(12u32)
        );
        assert_eq!(
            BigUint::from(0u32),
            (p + BigUint::one()) % &parameters.q
        );
        assert_eq!("SHA-1", parameters.hash_function);
    }

    /// Ensures that the generator has order q and that the public point
    /// matches the master secret
    #[test]
    fn generator_and_public_point() {
        let setup = Initializer::new(new_shared_rng())
            .setup(SecurityLevel::Lowest)
            .unwrap();
        let parameters = &setup.public_parameters;
        let curve = &parameters.curve;
        let secret = &setup.master_secret.secret;

        assert!(curve.is_on_curve(&parameters.point));
        assert!(!parameters.point.is_infinity());
        assert_eq!(
            AffinePoint::Infinity,
            parameters.point.multiply(&parameters.q, curve)
        );
        assert!(secret >= &BigUint::from(2u32) && secret < &parameters.q);
        assert_eq!(
            parameters.point_public,
            parameters.point.multiply(secret, curve)
        );
    }

    /// Ensures that two setups differ
    #[test]
    fn independent_setups() {
        let initializer = Initializer::new(new_shared_rng());

        let first = initializer.setup(SecurityLevel::Lowest).unwrap();
        let second = initializer.setup(SecurityLevel::Lowest).unwrap();

        assert_ne!(first.master_secret, second.master_secret);
    }

    /// Ensures that exhausted budgets and empty budgets are reported
    #[test]
    fn budgets() {
        let field = Initializer::new(new_shared_rng())
            .with_field_prime_attempts(1)
            .setup(SecurityLevel::Lowest);
        let point = Initializer::new(new_shared_rng())
            .with_point_attempts(0)
            .setup(SecurityLevel::Lowest);
        let prime = Initializer::new(new_shared_rng())
            .with_prime_attempts(0)
            .setup(SecurityLevel::Lowest);

        assert!(matches!(field, Ok(_) | Err(IbeError::SetupFailure(_))));
        assert!(matches!(point, Err(IbeError::InvalidArgument(_))));
        assert!(matches!(prime, Err(IbeError::InvalidArgument(_))));
    }
}
