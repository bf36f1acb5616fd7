// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains elliptic curves in short Weierstrass form
//! `y^2 = x^3 + ax + b` over a prime field, their points and the
//! Tate pairing on Type-1 curves.
//!
//! References:
//! - \[1\] Boyen, X. and Martin, L. (2007).
//!   Identity-Based Cryptography Standard (IBCS) #1: Supersingular Curve
//!   Implementations of the BF and BB1 Cryptosystems. RFC 5091.
//!   <https://www.rfc-editor.org/rfc/rfc5091>

pub mod pairing;
pub mod point;

pub use point::{AffinePoint, ComplexAffinePoint};

use crate::error::IbeError;
use num_bigint_dig::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// An elliptic curve `y^2 = x^3 + ax + b` over `F_p`.
///
/// Attributes:
/// - `a`: the linear coefficient
/// - `b`: the constant coefficient
/// - `field_order`: the prime `p`
///
/// # Examples
/// ```
/// use bf_ibe::elliptic_curve::{AffinePoint, EllipticCurve};
/// use num_bigint_dig::BigUint;
///
/// let curve = EllipticCurve::new(BigUint::from(0u32), BigUint::from(1u32), BigUint::from(11u32));
/// let point = AffinePoint::new(BigUint::from(2u32), BigUint::from(3u32));
///
/// assert!(curve.is_on_curve(&point));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EllipticCurve {
    a: BigUint,
    b: BigUint,
    field_order: BigUint,
}

impl EllipticCurve {
    /// Creates the curve `y^2 = x^3 + ax + b` over `F_{field_order}`.
    pub fn new(a: BigUint, b: BigUint, field_order: BigUint) -> Self {
        Self { a, b, field_order }
    }

    /// Returns the linear coefficient `a`.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Returns the constant coefficient `b`.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Returns the order `p` of the base field.
    pub fn field_order(&self) -> &BigUint {
        &self.field_order
    }

    /// Checks whether `point` satisfies the curve equation.
    /// The point at infinity lies on every curve.
    ///
    /// Parameters:
    /// - `point`: the point to check
    ///
    /// Returns `true` iff `y^2 ≡ x^3 + ax + b mod p`.
    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        match point {
            AffinePoint::Infinity => true,
            AffinePoint::Finite { x, y } => {
                let p = &self.field_order;
                let left = (y * y) % p;
                let right = (x * x * x + &self.a * x + &self.b) % p;
                left == right
            }
        }
    }
}

/// A supersingular curve `y^2 = x^3 + 1` over `F_p` with `p ≡ 11 mod 12`.
///
/// These are the curves RFC 5091 uses. They have `p + 1` points and
/// embedding degree 2.
///
/// # Examples
/// ```
/// use bf_ibe::elliptic_curve::TypeOneEllipticCurve;
/// use num_bigint_dig::BigUint;
///
/// let curve = TypeOneEllipticCurve::of_order(BigUint::from(23u32)).unwrap();
///
/// assert_eq!(&BigUint::from(1u32), curve.b());
/// assert!(TypeOneEllipticCurve::of_order(BigUint::from(19u32)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EllipticCurve", into = "EllipticCurve")]
pub struct TypeOneEllipticCurve {
    curve: EllipticCurve,
}

impl TypeOneEllipticCurve {
    /// Creates the Type-1 curve over `F_p`.
    ///
    /// Parameters:
    /// - `p`: the field order
    ///
    /// Returns the curve `y^2 = x^3 + 1` over `F_p`.
    ///
    /// # Errors and Failures
    /// - Returns a [`IbeError`] of type [`InvalidCurve`](IbeError::InvalidCurve)
    ///   if `p` is not congruent to 11 modulo 12.
    pub fn of_order(p: BigUint) -> Result<Self, IbeError> {
        if &p % 12u32 != BigUint::from(11u32) {
            return Err(IbeError::InvalidCurve(format!(
                "the field order {p} is not congruent to 11 mod 12"
            )));
        }
        Ok(Self {
            curve: EllipticCurve::new(BigUint::zero(), BigUint::one(), p),
        })
    }

    /// Returns the underlying curve.
    pub fn as_curve(&self) -> &EllipticCurve {
        &self.curve
    }
}

impl Deref for TypeOneEllipticCurve {
    type Target = EllipticCurve;

    fn deref(&self) -> &Self::Target {
        &self.curve
    }
}

impl TryFrom<EllipticCurve> for TypeOneEllipticCurve {
    type Error = IbeError;

    /// Accepts `curve` iff it is `y^2 = x^3 + 1` with a field order
    /// congruent to 11 modulo 12.
    fn try_from(curve: EllipticCurve) -> Result<Self, Self::Error> {
        if !curve.a.is_zero() || !curve.b.is_one() {
            return Err(IbeError::InvalidCurve(format!(
                "y^2 = x^3 + {}x + {} is not of Type-1",
                curve.a, curve.b
            )));
        }
        Self::of_order(curve.field_order)
    }
}

impl From<TypeOneEllipticCurve> for EllipticCurve {
    fn from(value: TypeOneEllipticCurve) -> Self {
        value.curve
    }
}
