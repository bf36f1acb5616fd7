// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains Miller's algorithm, which evaluates the rational
//! function with divisor `q(P) - q(O)` at a point of `E(F_p^2)`.

use crate::{
    complex::Complex,
    elliptic_curve::{AffinePoint, ComplexAffinePoint, EllipticCurve, TypeOneEllipticCurve},
    error::IbeError,
    utils::big_integer::{bits_msb_first, mod_neg, mod_sub},
};
use num_bigint_dig::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// This trait should be implemented by all variants of Miller's algorithm
/// that can be used in a [`TatePairing`](super::TatePairing).
///
/// Parameters:
/// - `p`: the base field point defining the function
/// - `q`: the point of `E(F_p^2)` at which the function is evaluated
/// - `order`: the order of `p`
///
/// Returns the value of the function at `q` or an error if an
/// intermediate value can not be inverted.
#[typetag::serde]
pub trait MillerAlgorithm: Send + Sync {
    fn evaluate(
        &self,
        p: &AffinePoint,
        q: &ComplexAffinePoint,
        order: &BigUint,
    ) -> Result<Complex, IbeError>;

    /// Returns the prime `p` of the base field the algorithm works over.
    fn field_order(&self) -> &BigUint;
}

/// Miller's algorithm for curves of embedding degree 2.
///
/// All lines are defined over `F_p` and evaluated at a point with
/// coordinates in `F_p^2`.
///
/// # Examples
/// ```
/// use bf_ibe::elliptic_curve::pairing::{MillerAlgorithm, TypeOneMillerAlgorithm, DistortionMap, XiDistortionMap};
/// use bf_ibe::elliptic_curve::{AffinePoint, TypeOneEllipticCurve};
/// use num_bigint_dig::BigUint;
///
/// let curve = TypeOneEllipticCurve::of_order(BigUint::from(59u32)).unwrap();
/// let point = AffinePoint::new(BigUint::from(3u32), BigUint::from(21u32));
/// let image = XiDistortionMap::new(&curve).apply(&point);
///
/// let value = TypeOneMillerAlgorithm::new(&curve)
///     .evaluate(&point, &image, &BigUint::from(15u32))
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeOneMillerAlgorithm {
    curve: TypeOneEllipticCurve,
}

/// The accumulated function value `f` and the running multiple `v` of `P`.
struct MillerState {
    f: Complex,
    v: AffinePoint,
}

impl TypeOneMillerAlgorithm {
    /// Creates Miller's algorithm on `curve`.
    pub fn new(curve: &TypeOneEllipticCurve) -> Self {
        Self {
            curve: curve.clone(),
        }
    }

    /// Performs one doubling step `f <- f^2 · g_{V,V}(Q) / v_{2V}(Q)`, `V <- 2V`.
    fn double_step(
        &self,
        state: MillerState,
        q: &ComplexAffinePoint,
    ) -> Result<MillerState, IbeError> {
        let curve: &EllipticCurve = &self.curve;
        let p = curve.field_order();
        let doubled = state.v.double(curve);

        let numerator = line(&state.v, &state.v, q, curve)?;
        let denominator = vertical(&doubled, q, p)?;
        let f = state
            .f
            .mod_mul(&state.f, p)
            .mod_mul(&numerator, p)
            .mod_mul(&denominator.multiplicative_inverse(p)?, p);

        Ok(MillerState { f, v: doubled })
    }

    /// Performs one addition step `f <- f · g_{V,P}(Q) / v_{V+P}(Q)`, `V <- V + P`.
    fn add_step(
        &self,
        state: MillerState,
        base: &AffinePoint,
        q: &ComplexAffinePoint,
    ) -> Result<MillerState, IbeError> {
        let curve: &EllipticCurve = &self.curve;
        let p = curve.field_order();
        let sum = state.v.add(base, curve);

        let numerator = line(&state.v, base, q, curve)?;
        let denominator = vertical(&sum, q, p)?;
        let f = state
            .f
            .mod_mul(&numerator, p)
            .mod_mul(&denominator.multiplicative_inverse(p)?, p);

        Ok(MillerState { f, v: sum })
    }
}

#[typetag::serde]
impl MillerAlgorithm for TypeOneMillerAlgorithm {
    /// Walks the bits of `order` below its most significant one. Every bit
    /// performs a doubling step, every set bit an additional addition step.
    /// The result is the Miller function `f_{order,p}` evaluated at `q` for
    /// any `order`, independent of the number of set bits.
    ///
    /// Parameters:
    /// - `p`: the base field point defining the function
    /// - `q`: the evaluation point, usually a distorted base field point
    /// - `order`: the order of `p`
    ///
    /// Returns the value of the function at `q`.
    ///
    /// # Errors and Failures
    /// - Returns a [`IbeError`] of type [`ArithmeticError`](IbeError::ArithmeticError)
    ///   if a vertical line vanishes at `q`.
    fn evaluate(
        &self,
        p: &AffinePoint,
        q: &ComplexAffinePoint,
        order: &BigUint,
    ) -> Result<Complex, IbeError> {
        let start = MillerState {
            f: Complex::one(),
            v: p.clone(),
        };

        let end = bits_msb_first(order)
            .into_iter()
            .skip(1)
            .try_fold(start, |state, bit| {
                let state = self.double_step(state, q)?;
                if bit {
                    self.add_step(state, p, q)
                } else {
                    Ok(state)
                }
            })?;

        Ok(end.f)
    }

    fn field_order(&self) -> &BigUint {
        self.curve.field_order()
    }
}

/// Evaluates the vertical line through `a` at `q`, i.e. `x_q - x_a`.
/// The vertical line through the point at infinity is the constant 1.
fn vertical(a: &AffinePoint, q: &ComplexAffinePoint, p: &BigUint) -> Result<Complex, IbeError> {
    match (a, q) {
        (AffinePoint::Infinity, _) => Ok(Complex::one()),
        (AffinePoint::Finite { x, .. }, ComplexAffinePoint::Finite { x: x_q, .. }) => {
            Ok(x_q.mod_add_scalar(&mod_neg(x, p), p))
        }
        (AffinePoint::Finite { .. }, ComplexAffinePoint::Infinity) => Err(
            IbeError::ArithmeticError("lines can not be evaluated at infinity".to_owned()),
        ),
    }
}

/// Evaluates the line through `a` and `b` at `q`.
///
/// Falls back to the vertical line if one of the points is the point at
/// infinity or `a + b` is the point at infinity, and to the tangent if
/// `a = b`.
fn line(
    a: &AffinePoint,
    b: &AffinePoint,
    q: &ComplexAffinePoint,
    curve: &EllipticCurve,
) -> Result<Complex, IbeError> {
    let p = curve.field_order();
    let (x_a, y_a, x_b, y_b) = match (a, b) {
        (AffinePoint::Infinity, _) => return vertical(b, q, p),
        (_, AffinePoint::Infinity) => return vertical(a, q, p),
        (AffinePoint::Finite { x: x_a, y: y_a }, AffinePoint::Finite { x: x_b, y: y_b }) => {
            (x_a % p, y_a % p, x_b % p, y_b % p)
        }
    };
    if x_a == x_b && (y_a != y_b || y_a.is_zero()) {
        return vertical(a, q, p);
    }

    let (coefficient_x, coefficient_y) = if x_a == x_b {
        // tangent: -(3x^2 + a) X + 2y Y + c
        let slope = (BigUint::from(3u32) * &x_a * &x_a + curve.a()) % p;
        (mod_neg(&slope, p), (BigUint::from(2u32) * &y_a) % p)
    } else {
        (mod_sub(&y_a, &y_b, p), mod_sub(&x_b, &x_a, p))
    };
    let constant = mod_neg(&(&coefficient_y * &y_a + &coefficient_x * &x_a), p);

    match q {
        ComplexAffinePoint::Infinity => Err(IbeError::ArithmeticError(
            "lines can not be evaluated at infinity".to_owned(),
        )),
        ComplexAffinePoint::Finite { x: x_q, y: y_q } => Ok(x_q
            .mod_mul_scalar(&coefficient_x, p)
            .mod_add(&y_q.mod_mul_scalar(&coefficient_y, p), p)
            .mod_add_scalar(&constant, p)),
    }
}


#[cfg(test)]
mod test_miller_algorithm {
    use super::{MillerAlgorithm, TypeOneMillerAlgorithm};
    use crate::{
        complex::Complex,
        elliptic_curve::{
            pairing::{DistortionMap, XiDistortionMap},
            AffinePoint,
        },
        test_fixture::ToySystem,
    };
    use num_bigint_dig::BigUint;

    /// Ensures that the order one walks no bits
    #[test]
    fn order_one() {
        let system = ToySystem::new();
        let image = XiDistortionMap::new(&system.curve).apply(&system.generator);

        let value = TypeOneMillerAlgorithm::new(&system.curve)
            .evaluate(&system.generator, &image, &BigUint::from(1u32))
            .unwrap();

        assert_eq!(Complex::one(), value);
    }

    /// Ensures that the function of the point at infinity is constant
    #[test]
    fn infinity_is_constant() {
        let system = ToySystem::new();
        let image = XiDistortionMap::new(&system.curve).apply(&system.generator);

        let value = TypeOneMillerAlgorithm::new(&system.curve)
            .evaluate(&AffinePoint::Infinity, &image, &system.q)
            .unwrap();

        assert_eq!(Complex::one(), value);
    }

    /// Ensures that the value becomes a q-th root of unity after the final exponentiation
    #[test]
    fn reduced_value_has_order_q() {
        let system = ToySystem::new();
        let image = XiDistortionMap::new(&system.curve).apply(&system.generator);
        let exponent = (&system.p * &system.p - BigUint::from(1u32)) / &system.q;

        let value = TypeOneMillerAlgorithm::new(&system.curve)
            .evaluate(&system.generator, &image, &system.q)
            .unwrap()
            .mod_pow(&exponent, &system.p);

        assert_ne!(Complex::one(), value);
        assert_eq!(Complex::one(), value.mod_pow(&system.q, &system.p));
    }
}
