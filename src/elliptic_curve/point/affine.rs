// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! Implements the group law for points with coordinates in `F_p`.

use crate::{
    elliptic_curve::EllipticCurve,
    utils::big_integer::{bits_msb_first, is_odd, mod_inverse, mod_neg, mod_sub},
};
use num_bigint_dig::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Width of the windowed non-adjacent form used by [`AffinePoint::wnaf_multiply`].
const WINDOW: u8 = 4;

/// A point of an elliptic curve over `F_p` in affine coordinates.
///
/// Possible entries:
/// - `Infinity`: the neutral element of the group
/// - `Finite`: a point with coordinates `x` and `y`
///
/// # Examples
/// ```
/// use bf_ibe::elliptic_curve::{AffinePoint, TypeOneEllipticCurve};
/// use num_bigint_dig::BigUint;
///
/// let curve = TypeOneEllipticCurve::of_order(BigUint::from(11u32)).unwrap();
/// let point = AffinePoint::new(BigUint::from(2u32), BigUint::from(3u32));
///
/// let sum = point.add(&point, &curve);
///
/// assert_eq!(sum, point.multiply(&BigUint::from(2u32), &curve));
/// assert_eq!(AffinePoint::Infinity, point.multiply(&BigUint::from(0u32), &curve));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AffinePoint {
    Infinity,
    Finite { x: BigUint, y: BigUint },
}

impl AffinePoint {
    /// Creates the finite point `(x, y)`.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        AffinePoint::Finite { x, y }
    }

    /// Checks whether `self` is the point at infinity.
    pub fn is_infinity(&self) -> bool {
        matches!(self, AffinePoint::Infinity)
    }

    /// Returns the x-coordinate or [`None`] for the point at infinity.
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            AffinePoint::Infinity => None,
            AffinePoint::Finite { x, .. } => Some(x),
        }
    }

    /// Returns the y-coordinate or [`None`] for the point at infinity.
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            AffinePoint::Infinity => None,
            AffinePoint::Finite { y, .. } => Some(y),
        }
    }

    /// Computes `self + other` on `curve`.
    ///
    /// The check for `self == other` precedes the check for equal
    /// x-coordinates, as two equal points share their x-coordinate
    /// but are not inverse to each other unless `y = 0`.
    ///
    /// Parameters:
    /// - `other`: the second summand
    /// - `curve`: the curve both points lie on
    ///
    /// Returns the sum of both points.
    pub fn add(&self, other: &Self, curve: &EllipticCurve) -> Self {
        let p = curve.field_order();
        let (x1, y1, x2, y2) = match (self, other) {
            (AffinePoint::Infinity, _) => return other.clone(),
            (_, AffinePoint::Infinity) => return self.clone(),
            (AffinePoint::Finite { x: x1, y: y1 }, AffinePoint::Finite { x: x2, y: y2 }) => {
                (x1 % p, y1 % p, x2 % p, y2 % p)
            }
        };

        if x1 == x2 && y1 == y2 {
            return self.double(curve);
        }
        if x1 == x2 {
            return AffinePoint::Infinity;
        }

        let numerator = mod_sub(&y2, &y1, p);
        let denominator = mod_sub(&x2, &x1, p);
        match mod_inverse(&denominator, p) {
            Some(inverse) => chord(&(numerator * inverse % p), &x1, &y1, &x2, p),
            None => AffinePoint::Infinity,
        }
    }

    /// Computes `2 · self` on `curve` using the tangent at `self`.
    ///
    /// Returns the point at infinity if `self` has `y = 0`.
    pub fn double(&self, curve: &EllipticCurve) -> Self {
        let p = curve.field_order();
        let (x, y) = match self {
            AffinePoint::Infinity => return AffinePoint::Infinity,
            AffinePoint::Finite { x, y } => (x % p, y % p),
        };
        if y.is_zero() {
            return AffinePoint::Infinity;
        }

        let numerator = (BigUint::from(3u32) * &x * &x + curve.a()) % p;
        let denominator = (BigUint::from(2u32) * &y) % p;
        match mod_inverse(&denominator, p) {
            Some(inverse) => chord(&(numerator * inverse % p), &x, &y, &x, p),
            None => AffinePoint::Infinity,
        }
    }

    /// Computes `[k] self` by double and add over the bits of `k`,
    /// starting at the most significant bit.
    ///
    /// Parameters:
    /// - `k`: the scalar
    /// - `curve`: the curve `self` lies on
    ///
    /// Returns the point at infinity if `k = 0` or `self` is the point at infinity.
    pub fn multiply(&self, k: &BigUint, curve: &EllipticCurve) -> Self {
        if k.is_zero() || self.is_infinity() {
            return AffinePoint::Infinity;
        }
        bits_msb_first(k)
            .into_iter()
            .fold(AffinePoint::Infinity, |acc, bit| {
                let doubled = acc.double(curve);
                if bit {
                    doubled.add(self, curve)
                } else {
                    doubled
                }
            })
    }

    /// Computes `[k] self` using the windowed non-adjacent form of `k`
    /// with window width 4.
    ///
    /// The odd multiples `P, 3P, 5P, 7P` are precomputed, every non-zero
    /// digit of the representation selects one of them or its negation.
    /// The result equals [`AffinePoint::multiply`] for every `k`.
    ///
    /// # Examples
    /// ```
    /// use bf_ibe::elliptic_curve::{AffinePoint, TypeOneEllipticCurve};
    /// use num_bigint_dig::BigUint;
    ///
    /// let curve = TypeOneEllipticCurve::of_order(BigUint::from(59u32)).unwrap();
    /// let point = AffinePoint::new(BigUint::from(7u32), BigUint::from(7u32));
    /// let k = BigUint::from(1234u32);
    ///
    /// assert_eq!(point.multiply(&k, &curve), point.wnaf_multiply(&k, &curve));
    /// ```
    pub fn wnaf_multiply(&self, k: &BigUint, curve: &EllipticCurve) -> Self {
        if k.is_zero() || self.is_infinity() {
            return AffinePoint::Infinity;
        }

        let double = self.double(curve);
        let table: Vec<AffinePoint> = std::iter::successors(Some(self.clone()), |previous| {
            Some(previous.add(&double, curve))
        })
        .take(1 << (WINDOW - 2))
        .collect();

        wnaf_digits(k)
            .into_iter()
            .rev()
            .fold(AffinePoint::Infinity, |acc, digit| {
                let doubled = acc.double(curve);
                if digit == 0 {
                    return doubled;
                }
                let entry = &table[(digit.unsigned_abs() as usize - 1) / 2];
                if digit > 0 {
                    doubled.add(entry, curve)
                } else {
                    doubled.add(&entry.negate(curve), curve)
                }
            })
    }

    /// Computes `-self`, i.e. `(x, -y)`.
    pub fn negate(&self, curve: &EllipticCurve) -> Self {
        match self {
            AffinePoint::Infinity => AffinePoint::Infinity,
            AffinePoint::Finite { x, y } => {
                let p = curve.field_order();
                AffinePoint::new(x % p, mod_neg(y, p))
            }
        }
    }
}

/// Computes the third intersection of the line with slope `lambda` through
/// `(x1, y1)` and a point with x-coordinate `x2`, reflected at the x-axis.
fn chord(lambda: &BigUint, x1: &BigUint, y1: &BigUint, x2: &BigUint, p: &BigUint) -> AffinePoint {
    let x3 = mod_sub(&mod_sub(&(lambda * lambda), x1, p), x2, p);
    let y3 = mod_sub(&(lambda * mod_sub(x1, &x3, p)), y1, p);
    AffinePoint::new(x3, y3)
}

/// Returns the digits of the width-4 non-adjacent form of `k`,
/// least significant digit first. Every digit is zero or odd in `[-7, 7]`.
fn wnaf_digits(k: &BigUint) -> Vec<i8> {
    let modulus = 1i16 << WINDOW;
    let mut remainder = k.clone();
    let mut digits = Vec::with_capacity(k.bits() as usize + 1);

    while !remainder.is_zero() {
        if is_odd(&remainder) {
            let low = remainder.to_bytes_le().first().copied().unwrap_or(0) as i16 % modulus;
            let digit = if low >= modulus / 2 { low - modulus } else { low };
            if digit > 0 {
                remainder -= BigUint::from(digit as u16);
            } else {
                remainder += BigUint::from((-digit) as u16);
            }
            digits.push(digit as i8);
        } else {
            digits.push(0);
        }
        remainder >>= 1usize;
    }
    digits
}

#[cfg(test)]
mod test_group_law {
    use super::AffinePoint;
    use crate::elliptic_curve::TypeOneEllipticCurve;
    use num_bigint_dig::BigUint;

    fn point(x: u32, y: u32) -> AffinePoint {
        AffinePoint::new(BigUint::from(x), BigUint::from(y))
    }

    /// Ensures that the point at infinity is the neutral element
    #[test]
    fn neutral_element() {
        let curve = TypeOneEllipticCurve::of_order(BigUint::from(11u32)).unwrap();
        let p = point(2, 3);

        assert_eq!(p, p.add(&AffinePoint::Infinity, &curve));
        assert_eq!(p, AffinePoint::Infinity.add(&p, &curve));
        assert_eq!(
            AffinePoint::Infinity,
            AffinePoint::Infinity.add(&AffinePoint::Infinity, &curve)
        );
    }

    /// Ensures that a point and its negation sum to infinity
    #[test]
    fn inverse_element() {
        let curve = TypeOneEllipticCurve::of_order(BigUint::from(11u32)).unwrap();
        let p = point(2, 3);

        assert_eq!(point(2, 8), p.negate(&curve));
        assert_eq!(AffinePoint::Infinity, p.add(&p.negate(&curve), &curve));
    }

    /// Ensures that points with `y = 0` have order two
    #[test]
    fn doubling_two_torsion() {
        let curve = TypeOneEllipticCurve::of_order(BigUint::from(11u32)).unwrap();
        // 10^3 + 1 = 1001 = 91 * 11
        let p = point(10, 0);

        assert!(curve.is_on_curve(&p));
        assert_eq!(AffinePoint::Infinity, p.double(&curve));
        assert_eq!(AffinePoint::Infinity, p.add(&p, &curve));
    }

    /// Ensures that addition is commutative and stays on the curve
    #[test]
    fn commutative_and_closed() {
        let curve = TypeOneEllipticCurve::of_order(BigUint::from(59u32)).unwrap();
        let g = point(7, 7);
        let h = point(3, 21);
        let points: Vec<AffinePoint> = (1..10u32)
            .map(|k| g.multiply(&BigUint::from(k), &curve))
            .chain((1..10u32).map(|k| h.multiply(&BigUint::from(k), &curve)))
            .collect();

        for a in &points {
            assert!(curve.is_on_curve(a));
            for b in &points {
                assert_eq!(a.add(b, &curve), b.add(a, &curve));
                assert!(curve.is_on_curve(&a.add(b, &curve)));
            }
        }
    }

    /// Ensures that addition is associative
    #[test]
    fn associative() {
        let curve = TypeOneEllipticCurve::of_order(BigUint::from(59u32)).unwrap();
        let a = point(7, 7);
        let b = point(3, 21);
        let c = point(9, 9);

        assert!(curve.is_on_curve(&a));
        assert_eq!(
            a.add(&b, &curve).add(&c, &curve),
            a.add(&b.add(&c, &curve), &curve)
        );
    }

    /// Ensures that the group order `p + 1` annihilates every point
    #[test]
    fn group_order() {
        let curve = TypeOneEllipticCurve::of_order(BigUint::from(59u32)).unwrap();
        let a = point(7, 7);

        assert_eq!(AffinePoint::Infinity, a.multiply(&BigUint::from(20u32), &curve));
        assert_eq!(AffinePoint::Infinity, a.multiply(&BigUint::from(60u32), &curve));
        assert_eq!(a, a.multiply(&BigUint::from(61u32), &curve));
    }
}
