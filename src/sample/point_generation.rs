// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains strategies to sample random points on Type-1 curves.

use crate::{
    elliptic_curve::{AffinePoint, TypeOneEllipticCurve},
    error::IbeError,
    utils::{big_integer::mod_sub, lock_rng, SharedRng},
};
use log::trace;
use num_bigint_dig::{BigUint, RandBigInt};
use num_traits::One;

/// This trait should be implemented by all strategies that sample points
/// on a [`TypeOneEllipticCurve`].
///
/// A strategy only proposes candidates with [`next_point`](Self::next_point),
/// [`generate`](Self::generate) discards every candidate that does not
/// satisfy the curve equation.
pub trait AffinePointGenerationStrategy {
    /// Creates the strategy for `curve` drawing from `rng`.
    fn for_curve(curve: TypeOneEllipticCurve, rng: SharedRng) -> Self
    where
        Self: Sized;

    /// Returns the curve the strategy samples points on.
    fn curve(&self) -> &TypeOneEllipticCurve;

    /// Proposes a candidate point, which is not necessarily on the curve.
    fn next_point(&self) -> Option<AffinePoint>;

    /// Samples a point on the curve.
    ///
    /// Parameters:
    /// - `attempt_limit`: the maximum number of proposed candidates
    ///
    /// Returns the first candidate on the curve or [`None`] if all attempts
    /// are exhausted.
    ///
    /// # Errors and Failures
    /// - Returns a [`IbeError`] of type [`InvalidArgument`](IbeError::InvalidArgument)
    ///   if `attempt_limit < 1`.
    fn generate(&self, attempt_limit: usize) -> Result<Option<AffinePoint>, IbeError> {
        if attempt_limit < 1 {
            return Err(IbeError::InvalidArgument(
                "the attempt limit must be at least 1".to_owned(),
            ));
        }

        for attempt in 0..attempt_limit {
            if let Some(point) = self.next_point().filter(|p| self.curve().is_on_curve(p)) {
                return Ok(Some(point));
            }
            trace!("candidate point {attempt} is not on the curve");
        }
        Ok(None)
    }
}

/// Samples a random `y` and solves `x^3 = y^2 - b` by
/// `x = (y^2 - b)^((2p - 1) / 3)`, which is the unique cube root
/// for `p ≡ 2 mod 3`.
///
/// # Examples
/// ```
/// use bf_ibe::elliptic_curve::TypeOneEllipticCurve;
/// use bf_ibe::sample::{AffinePointGenerationStrategy, Mod3GenerationStrategy};
/// use bf_ibe::utils::new_shared_rng;
/// use num_bigint_dig::BigUint;
///
/// let curve = TypeOneEllipticCurve::of_order(BigUint::from(59u32)).unwrap();
/// let strategy = Mod3GenerationStrategy::for_curve(curve.clone(), new_shared_rng());
///
/// let point = strategy.generate(10).unwrap().unwrap();
///
/// assert!(curve.is_on_curve(&point));
/// ```
pub struct Mod3GenerationStrategy {
    curve: TypeOneEllipticCurve,
    rng: SharedRng,
    exponent: BigUint,
}

impl AffinePointGenerationStrategy for Mod3GenerationStrategy {
    fn for_curve(curve: TypeOneEllipticCurve, rng: SharedRng) -> Self {
        let exponent =
            ((curve.field_order() << 1usize) - BigUint::one()) / BigUint::from(3u32);
        Self {
            curve,
            rng,
            exponent,
        }
    }

    fn curve(&self) -> &TypeOneEllipticCurve {
        &self.curve
    }

    fn next_point(&self) -> Option<AffinePoint> {
        let p = self.curve.field_order();
        let y = lock_rng(&self.rng).gen_biguint_below(p);
        let x = mod_sub(&(&y * &y), self.curve.b(), p).modpow(&self.exponent, p);
        Some(AffinePoint::new(x, y))
    }
}
