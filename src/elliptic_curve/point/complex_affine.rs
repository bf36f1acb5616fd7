// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! Implements the group law for points with coordinates in `F_p^2`.
//!
//! The curve coefficients stay in `F_p`, only the coordinates are lifted.
//! Inverses in `F_p^2` may fail for malformed parameters, hence all
//! operations return a [`Result`].

use crate::{
    complex::Complex, elliptic_curve::EllipticCurve, error::IbeError,
    utils::big_integer::bits_msb_first,
};
use num_bigint_dig::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// A point of an elliptic curve over `F_p^2` in affine coordinates.
///
/// Possible entries:
/// - `Infinity`: the neutral element of the group
/// - `Finite`: a point with coordinates `x` and `y`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplexAffinePoint {
    Infinity,
    Finite { x: Complex, y: Complex },
}

impl ComplexAffinePoint {
    /// Creates the finite point `(x, y)`.
    pub fn new(x: Complex, y: Complex) -> Self {
        ComplexAffinePoint::Finite { x, y }
    }

    /// Checks whether `self` is the point at infinity.
    pub fn is_infinity(&self) -> bool {
        matches!(self, ComplexAffinePoint::Infinity)
    }

    /// Returns the x-coordinate or [`None`] for the point at infinity.
    pub fn x(&self) -> Option<&Complex> {
        match self {
            ComplexAffinePoint::Infinity => None,
            ComplexAffinePoint::Finite { x, .. } => Some(x),
        }
    }

    /// Returns the y-coordinate or [`None`] for the point at infinity.
    pub fn y(&self) -> Option<&Complex> {
        match self {
            ComplexAffinePoint::Infinity => None,
            ComplexAffinePoint::Finite { y, .. } => Some(y),
        }
    }

    /// Checks whether `self` satisfies the equation of `curve` over `F_p^2`.
    pub fn is_on_curve(&self, curve: &EllipticCurve) -> bool {
        match self {
            ComplexAffinePoint::Infinity => true,
            ComplexAffinePoint::Finite { x, y } => {
                let p = curve.field_order();
                let left = y.mod_mul(y, p);
                let right = x
                    .mod_mul(x, p)
                    .mod_mul(x, p)
                    .mod_add(&x.mod_mul_scalar(curve.a(), p), p)
                    .mod_add_scalar(curve.b(), p);
                left == right
            }
        }
    }

    /// Computes `self + other` on `curve`.
    ///
    /// Parameters:
    /// - `other`: the second summand
    /// - `curve`: the curve both points lie on
    ///
    /// Returns the sum of both points.
    ///
    /// # Errors and Failures
    /// - Returns a [`IbeError`] of type [`ArithmeticError`](IbeError::ArithmeticError)
    ///   if the difference of the x-coordinates has no inverse.
    pub fn add(&self, other: &Self, curve: &EllipticCurve) -> Result<Self, IbeError> {
        let p = curve.field_order();
        let (x1, y1, x2, y2) = match (self, other) {
            (ComplexAffinePoint::Infinity, _) => return Ok(other.clone()),
            (_, ComplexAffinePoint::Infinity) => return Ok(self.clone()),
            (
                ComplexAffinePoint::Finite { x: x1, y: y1 },
                ComplexAffinePoint::Finite { x: x2, y: y2 },
            ) => (x1.reduce(p), y1.reduce(p), x2.reduce(p), y2.reduce(p)),
        };

        if x1 == x2 && y1 == y2 {
            return self.double(curve);
        }
        if x1 == x2 {
            return Ok(ComplexAffinePoint::Infinity);
        }

        let lambda = y2
            .mod_sub(&y1, p)
            .mod_mul(&x2.mod_sub(&x1, p).multiplicative_inverse(p)?, p);
        Ok(chord(&lambda, &x1, &y1, &x2, p))
    }

    /// Computes `2 · self` on `curve`.
    ///
    /// Returns the point at infinity if `self` has `y = 0`.
    ///
    /// # Errors and Failures
    /// - Returns a [`IbeError`] of type [`ArithmeticError`](IbeError::ArithmeticError)
    ///   if `2y` has no inverse.
    pub fn double(&self, curve: &EllipticCurve) -> Result<Self, IbeError> {
        let p = curve.field_order();
        let (x, y) = match self {
            ComplexAffinePoint::Infinity => return Ok(ComplexAffinePoint::Infinity),
            ComplexAffinePoint::Finite { x, y } => (x.reduce(p), y.reduce(p)),
        };
        if y.is_zero() {
            return Ok(ComplexAffinePoint::Infinity);
        }

        let numerator = x
            .mod_mul(&x, p)
            .mod_mul_scalar(&BigUint::from(3u32), p)
            .mod_add_scalar(curve.a(), p);
        let denominator = y.mod_mul_scalar(&BigUint::from(2u32), p);
        let lambda = numerator.mod_mul(&denominator.multiplicative_inverse(p)?, p);
        Ok(chord(&lambda, &x, &y, &x, p))
    }

    /// Computes `[k] self` by double and add over the bits of `k`.
    ///
    /// # Errors and Failures
    /// - Returns a [`IbeError`] of type [`ArithmeticError`](IbeError::ArithmeticError)
    ///   if an intermediate addition fails.
    pub fn multiply(&self, k: &BigUint, curve: &EllipticCurve) -> Result<Self, IbeError> {
        if k.is_zero() || self.is_infinity() {
            return Ok(ComplexAffinePoint::Infinity);
        }
        bits_msb_first(k)
            .into_iter()
            .try_fold(ComplexAffinePoint::Infinity, |acc, bit| {
                let doubled = acc.double(curve)?;
                if bit {
                    doubled.add(self, curve)
                } else {
                    Ok(doubled)
                }
            })
    }
}

fn chord(lambda: &Complex, x1: &Complex, y1: &Complex, x2: &Complex, p: &BigUint) -> ComplexAffinePoint {
    let x3 = lambda.mod_mul(lambda, p).mod_sub(x1, p).mod_sub(x2, p);
    let y3 = lambda.mod_mul(&x1.mod_sub(&x3, p), p).mod_sub(y1, p);
    ComplexAffinePoint::new(x3, y3)
}
