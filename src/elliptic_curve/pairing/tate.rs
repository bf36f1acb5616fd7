// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the modified Tate pairing `e: G_1 × G_1 -> F_p^2`.

use super::{DistortionMap, MillerAlgorithm, TypeOneMillerAlgorithm, XiDistortionMap};
use crate::{
    complex::Complex,
    elliptic_curve::{AffinePoint, TypeOneEllipticCurve},
    error::IbeError,
};
use log::debug;
use num_bigint_dig::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// The modified Tate pairing on a curve over `F_p` with a subgroup of
/// order `q` and embedding degree `k`.
///
/// Attributes:
/// - `curve`: the curve the paired points lie on
/// - `group_order`: the order `q` of the paired subgroup
/// - `embedding_degree`: the smallest `k` with `q | p^k - 1`
/// - `final_exponent`: the exponent `(p^k - 1) / q` of the final exponentiation
/// - `miller`: the variant of Miller's algorithm
/// - `distortion`: the distortion map applied to the second argument
///
/// # Examples
/// ```
/// use bf_ibe::elliptic_curve::{AffinePoint, TypeOneEllipticCurve};
/// use bf_ibe::elliptic_curve::pairing::type_one_tate_pairing;
/// use num_bigint_dig::BigUint;
///
/// let curve = TypeOneEllipticCurve::of_order(BigUint::from(59u32)).unwrap();
/// // a point of order 5
/// let point = AffinePoint::new(BigUint::from(28u32), BigUint::from(8u32));
/// let pairing = type_one_tate_pairing(&curve, &BigUint::from(5u32)).unwrap();
///
/// let base = pairing.perform_pairing(&point, &point).unwrap();
/// let squared = pairing
///     .perform_pairing(&point, &point.multiply(&BigUint::from(2u32), &curve))
///     .unwrap();
///
/// assert_eq!(base.mod_pow(&BigUint::from(2u32), curve.field_order()), squared);
/// ```
#[derive(Serialize, Deserialize)]
#[serde(try_from = "TatePairingRecord")]
pub struct TatePairing {
    curve: TypeOneEllipticCurve,
    group_order: BigUint,
    embedding_degree: u32,
    final_exponent: BigUint,
    miller: Box<dyn MillerAlgorithm>,
    distortion: Box<dyn DistortionMap>,
}

/// The serialized components of a [`TatePairing`], which are validated
/// by [`TatePairing::new`] on deserialization. A serialized final
/// exponent is ignored and recomputed.
#[derive(Deserialize)]
struct TatePairingRecord {
    curve: TypeOneEllipticCurve,
    group_order: BigUint,
    embedding_degree: u32,
    miller: Box<dyn MillerAlgorithm>,
    distortion: Box<dyn DistortionMap>,
}

impl TryFrom<TatePairingRecord> for TatePairing {
    type Error = IbeError;

    fn try_from(record: TatePairingRecord) -> Result<Self, Self::Error> {
        TatePairing::new(
            record.curve,
            record.group_order,
            record.embedding_degree,
            record.miller,
            record.distortion,
        )
    }
}

impl TatePairing {
    /// Creates a new Tate pairing.
    ///
    /// Parameters:
    /// - `curve`: the curve the paired points lie on
    /// - `group_order`: the order `q` of the paired subgroup
    /// - `embedding_degree`: the embedding degree `k` of the subgroup
    /// - `miller`: the variant of Miller's algorithm
    /// - `distortion`: the distortion map applied to the second argument
    ///
    /// Returns the pairing with precomputed final exponent `(p^k - 1) / q`.
    ///
    /// # Errors and Failures
    /// - Returns a [`IbeError`] of type
    ///   [`ComponentConstruction`](IbeError::ComponentConstruction)
    ///   if `k < 2`, if `q = 0`, if `q` does not divide `p^k - 1` or if
    ///   `miller` or `distortion` work over another field than `curve`.
    pub fn new(
        curve: TypeOneEllipticCurve,
        group_order: BigUint,
        embedding_degree: u32,
        miller: Box<dyn MillerAlgorithm>,
        distortion: Box<dyn DistortionMap>,
    ) -> Result<Self, IbeError> {
        if embedding_degree < 2 {
            return Err(IbeError::ComponentConstruction(format!(
                "an embedding degree of {embedding_degree} is not supported, it has to be at least 2"
            )));
        }
        if group_order.is_zero() {
            return Err(IbeError::ComponentConstruction(
                "the group order must be positive".to_owned(),
            ));
        }
        if miller.field_order() != curve.field_order()
            || distortion.field_order() != curve.field_order()
        {
            return Err(IbeError::ComponentConstruction(format!(
                "the components of the pairing do not work over F_{}",
                curve.field_order()
            )));
        }

        let extension_order = (0..embedding_degree)
            .fold(BigUint::one(), |acc, _| acc * curve.field_order());
        let multiplicative_order = extension_order - BigUint::one();
        if !(&multiplicative_order % &group_order).is_zero() {
            return Err(IbeError::ComponentConstruction(format!(
                "the group order {group_order} does not divide p^{embedding_degree} - 1"
            )));
        }
        let final_exponent = multiplicative_order / &group_order;
        debug!(
            "created Tate pairing with embedding degree {embedding_degree} for a subgroup of {} bits",
            group_order.bits()
        );

        Ok(Self {
            curve,
            group_order,
            embedding_degree,
            final_exponent,
            miller,
            distortion,
        })
    }

    /// Returns the curve the paired points lie on.
    pub fn curve(&self) -> &TypeOneEllipticCurve {
        &self.curve
    }

    /// Returns the order `q` of the paired subgroup.
    pub fn group_order(&self) -> &BigUint {
        &self.group_order
    }

    /// Returns the embedding degree `k`.
    pub fn embedding_degree(&self) -> u32 {
        self.embedding_degree
    }

    /// Computes `e(a, b)`.
    ///
    /// The second argument is distorted first. If its image is the point
    /// at infinity the pairing is degenerate and `1` is returned.
    ///
    /// Parameters:
    /// - `a`: a point of order `q`
    /// - `b`: a point of order `q`
    ///
    /// Returns `f_{q,a}(ψ(b))^((p^k - 1) / q)`, a `q`-th root of unity in `F_p^2`.
    ///
    /// # Errors and Failures
    /// - Returns a [`IbeError`] of type [`ArithmeticError`](IbeError::ArithmeticError)
    ///   if Miller's algorithm hits a non-invertible value, which only
    ///   happens for malformed parameters.
    pub fn perform_pairing(&self, a: &AffinePoint, b: &AffinePoint) -> Result<Complex, IbeError> {
        let image = self.distortion.apply(b);
        if image.is_infinity() {
            return Ok(Complex::one());
        }

        let value = self.miller.evaluate(a, &image, &self.group_order)?;
        Ok(value.mod_pow(&self.final_exponent, self.curve.field_order()))
    }
}

/// Creates the Tate pairing on a Type-1 curve with embedding degree 2,
/// using [`TypeOneMillerAlgorithm`] and [`XiDistortionMap`].
///
/// Parameters:
/// - `curve`: the curve the paired points lie on
/// - `q`: the order of the paired subgroup
///
/// # Errors and Failures
/// - Returns a [`IbeError`] of type
///   [`ComponentConstruction`](IbeError::ComponentConstruction)
///   if `q` does not divide `p^2 - 1`.
pub fn type_one_tate_pairing(
    curve: &TypeOneEllipticCurve,
    q: &BigUint,
) -> Result<TatePairing, IbeError> {
    TatePairing::new(
        curve.clone(),
        q.clone(),
        2,
        Box::new(TypeOneMillerAlgorithm::new(curve)),
        Box::new(XiDistortionMap::new(curve)),
    )
}


#[cfg(test)]
mod test_perform_pairing {
    use super::type_one_tate_pairing;
    use crate::{complex::Complex, elliptic_curve::AffinePoint, test_fixture::ToySystem};
    use num_bigint_dig::BigUint;

    /// Checks the pairing of the generator with itself against a known value
    #[test]
    fn known_value() {
        let system = ToySystem::new();
        let pairing = type_one_tate_pairing(&system.curve, &system.q).unwrap();

        let value = pairing
            .perform_pairing(&system.generator, &system.generator)
            .unwrap();

        assert_eq!(
            Complex::new(
                "1340152054302725688111".parse().unwrap(),
                "4372944168826838636209".parse().unwrap()
            ),
            value
        );
        assert_eq!(Complex::one(), value.mod_pow(&system.q, &system.p));
    }

    /// Ensures bilinearity in both arguments
    #[test]
    fn bilinear() {
        let system = ToySystem::new();
        let pairing = type_one_tate_pairing(&system.curve, &system.q).unwrap();
        let base = pairing
            .perform_pairing(&system.generator, &system.generator)
            .unwrap();

        for (a, b) in [(2u32, 3u32), (7, 1), (1, 13), (123, 456)] {
            let left = system.generator.multiply(&BigUint::from(a), &system.curve);
            let right = system.generator.multiply(&BigUint::from(b), &system.curve);

            let value = pairing.perform_pairing(&left, &right).unwrap();

            assert_eq!(base.mod_pow(&BigUint::from(a * b), &system.p), value);
        }
    }

    /// Ensures that the pairing is symmetric on Type-1 curves
    #[test]
    fn symmetric() {
        let system = ToySystem::new();
        let pairing = type_one_tate_pairing(&system.curve, &system.q).unwrap();
        let other = system
            .generator
            .multiply(&BigUint::from(987654321u32), &system.curve);

        assert_eq!(
            pairing.perform_pairing(&system.generator, &other).unwrap(),
            pairing.perform_pairing(&other, &system.generator).unwrap()
        );
    }

    /// Ensures that pairings with the point at infinity are degenerate
    #[test]
    fn degenerate() {
        let system = ToySystem::new();
        let pairing = type_one_tate_pairing(&system.curve, &system.q).unwrap();

        assert_eq!(
            Complex::one(),
            pairing
                .perform_pairing(&system.generator, &AffinePoint::Infinity)
                .unwrap()
        );
        assert_eq!(
            Complex::one(),
            pairing
                .perform_pairing(&AffinePoint::Infinity, &system.generator)
                .unwrap()
        );
    }
}
