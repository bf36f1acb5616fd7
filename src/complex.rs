// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains [`Complex`], an element of the quadratic extension
//! field `F_p^2 = F_p[i] / (i^2 + 1)`.
//!
//! The extension is a field whenever `p ≡ 3 mod 4`, which holds for every
//! field order of a Type-1 curve (`p ≡ 11 mod 12`).
//!
//! None of the values is bound to a field. Every modular operation takes the
//! modulus `p` explicitly and returns a new, reduced element.

use crate::{
    error::IbeError,
    utils::big_integer::{bits_msb_first, mod_inverse, mod_neg, mod_sub},
};
use num_bigint_dig::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An element `real + imaginary·i` of `F_p^2`.
///
/// Attributes:
/// - `real`: the real part
/// - `imaginary`: the coefficient of `i`
///
/// # Examples
/// ```
/// use bf_ibe::complex::Complex;
/// use num_bigint_dig::BigUint;
///
/// let p = BigUint::from(11u32);
/// let a = Complex::new(BigUint::from(3u32), BigUint::from(4u32));
/// let b = Complex::new(BigUint::from(5u32), BigUint::from(6u32));
///
/// // (3 + 4i)(5 + 6i) = -9 + 38i ≡ 2 + 5i mod 11
/// assert_eq!(
///     Complex::new(BigUint::from(2u32), BigUint::from(5u32)),
///     a.mod_mul(&b, &p)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Complex {
    real: BigUint,
    imaginary: BigUint,
}

impl Default for Complex {
    /// Returns the additive identity `0 + 0i`.
    fn default() -> Self {
        Self::zero()
    }
}

impl Complex {
    /// Creates the element `real + imaginary·i`.
    pub fn new(real: BigUint, imaginary: BigUint) -> Self {
        Self { real, imaginary }
    }

    /// Lifts a base field element into the extension field.
    pub fn from_real(real: BigUint) -> Self {
        Self::new(real, BigUint::zero())
    }

    /// Returns the additive identity `0 + 0i`.
    pub fn zero() -> Self {
        Self::new(BigUint::zero(), BigUint::zero())
    }

    /// Returns the multiplicative identity `1 + 0i`.
    pub fn one() -> Self {
        Self::new(BigUint::one(), BigUint::zero())
    }

    /// Returns the real part.
    pub fn real(&self) -> &BigUint {
        &self.real
    }

    /// Returns the imaginary part.
    pub fn imaginary(&self) -> &BigUint {
        &self.imaginary
    }

    /// Checks whether both parts are zero.
    pub fn is_zero(&self) -> bool {
        self.real.is_zero() && self.imaginary.is_zero()
    }

    /// Reduces both parts modulo `p`.
    pub fn reduce(&self, p: &BigUint) -> Self {
        Self::new(&self.real % p, &self.imaginary % p)
    }

    /// Computes `self + other mod p`.
    pub fn mod_add(&self, other: &Self, p: &BigUint) -> Self {
        Self::new(
            (&self.real + &other.real) % p,
            (&self.imaginary + &other.imaginary) % p,
        )
    }

    /// Computes `-self mod p`.
    pub fn additive_inverse(&self, p: &BigUint) -> Self {
        Self::new(mod_neg(&self.real, p), mod_neg(&self.imaginary, p))
    }

    /// Computes `self - other mod p`.
    pub fn mod_sub(&self, other: &Self, p: &BigUint) -> Self {
        Self::new(
            mod_sub(&self.real, &other.real, p),
            mod_sub(&self.imaginary, &other.imaginary, p),
        )
    }

    /// Adds the base field element `scalar` to the real part.
    pub fn mod_add_scalar(&self, scalar: &BigUint, p: &BigUint) -> Self {
        Self::new((&self.real + scalar) % p, &self.imaginary % p)
    }

    /// Computes `self · other mod p` with the rule
    /// `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`.
    pub fn mod_mul(&self, other: &Self, p: &BigUint) -> Self {
        let ac = &self.real * &other.real;
        let bd = &self.imaginary * &other.imaginary;
        let ad = &self.real * &other.imaginary;
        let bc = &self.imaginary * &other.real;

        Self::new(mod_sub(&ac, &bd, p), (ad + bc) % p)
    }

    /// Multiplies both parts with the base field element `scalar`.
    pub fn mod_mul_scalar(&self, scalar: &BigUint, p: &BigUint) -> Self {
        Self::new(
            (&self.real * scalar) % p,
            (&self.imaginary * scalar) % p,
        )
    }

    /// Computes `self^exponent mod p` by square and multiply.
    ///
    /// Parameters:
    /// - `exponent`: a non-negative exponent
    /// - `p`: the field order
    ///
    /// Returns `1 + 0i` for the exponent zero independent of the modulus.
    ///
    /// # Examples
    /// ```
    /// use bf_ibe::complex::Complex;
    /// use num_bigint_dig::BigUint;
    ///
    /// let p = BigUint::from(11u32);
    /// let i = Complex::new(BigUint::from(0u32), BigUint::from(1u32));
    ///
    /// assert_eq!(Complex::one(), i.mod_pow(&BigUint::from(4u32), &p));
    /// assert_eq!(Complex::one(), i.mod_pow(&BigUint::from(0u32), &BigUint::from(1u32)));
    /// ```
    pub fn mod_pow(&self, exponent: &BigUint, p: &BigUint) -> Self {
        let base = self.reduce(p);
        bits_msb_first(exponent)
            .into_iter()
            .fold(Self::one(), |acc, bit| {
                let squared = acc.mod_mul(&acc, p);
                if bit {
                    squared.mod_mul(&base, p)
                } else {
                    squared
                }
            })
    }

    /// Computes the multiplicative inverse of `self` in `F_p^2`.
    ///
    /// Purely real elements are inverted in the base field, purely imaginary
    /// elements `bi` map to `-b^{-1} i`. Any other element `a + bi` is
    /// inverted via its norm as `(a - bi) / (a^2 + b^2)`.
    ///
    /// Parameters:
    /// - `p`: the field order, a prime with `p ≡ 3 mod 4`
    ///
    /// Returns the inverse or an error if none exists.
    ///
    /// # Examples
    /// ```
    /// use bf_ibe::complex::Complex;
    /// use num_bigint_dig::BigUint;
    ///
    /// let p = BigUint::from(11u32);
    /// let a = Complex::new(BigUint::from(3u32), BigUint::from(4u32));
    ///
    /// let inverse = a.multiplicative_inverse(&p).unwrap();
    ///
    /// assert_eq!(Complex::one(), a.mod_mul(&inverse, &p));
    /// ```
    ///
    /// # Errors and Failures
    /// - Returns a [`IbeError`] of type [`ArithmeticError`](IbeError::ArithmeticError)
    ///   if `self ≡ 0 mod p` or the norm of `self` vanishes modulo `p`.
    pub fn multiplicative_inverse(&self, p: &BigUint) -> Result<Self, IbeError> {
        let reduced = self.reduce(p);
        if reduced.is_zero() {
            return Err(IbeError::ArithmeticError(
                "the additive identity has no multiplicative inverse".to_owned(),
            ));
        }

        if reduced.imaginary.is_zero() {
            let real = mod_inverse(&reduced.real, p).ok_or_else(|| no_inverse(&reduced))?;
            return Ok(Self::from_real(real));
        }

        if reduced.real.is_zero() {
            let imaginary =
                mod_inverse(&reduced.imaginary, p).ok_or_else(|| no_inverse(&reduced))?;
            return Ok(Self::new(BigUint::zero(), mod_neg(&imaginary, p)));
        }

        let norm = (&reduced.real * &reduced.real + &reduced.imaginary * &reduced.imaginary) % p;
        let norm_inverse = mod_inverse(&norm, p).ok_or_else(|| no_inverse(&reduced))?;

        Ok(Self::new(
            (&reduced.real * &norm_inverse) % p,
            mod_neg(&(&reduced.imaginary * &norm_inverse), p),
        ))
    }

    /// Compares two elements by `real^2 + imaginary^2` over the integers.
    ///
    /// The order is total on the squared magnitude only, distinct elements
    /// may compare as [`Ordering::Equal`].
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        let magnitude = |c: &Self| &c.real * &c.real + &c.imaginary * &c.imaginary;
        magnitude(self).cmp(&magnitude(other))
    }
}

fn no_inverse(element: &Complex) -> IbeError {
    IbeError::ArithmeticError(format!(
        "{} + {}i has no multiplicative inverse",
        element.real, element.imaginary
    ))
}


#[cfg(test)]
mod test_multiplicative_inverse {
    use super::Complex;
    use crate::error::IbeError;
    use num_bigint_dig::BigUint;

    fn c(real: u32, imaginary: u32) -> Complex {
        Complex::new(BigUint::from(real), BigUint::from(imaginary))
    }

    /// Ensures that each of the three cases yields an inverse
    #[test]
    fn all_cases() {
        let p = BigUint::from(23u32);

        for element in [c(5, 0), c(0, 7), c(3, 4), c(22, 22)] {
            let inverse = element.multiplicative_inverse(&p).unwrap();
            assert_eq!(Complex::one(), element.mod_mul(&inverse, &p));
        }
    }

    /// Ensures that imaginary elements are inverted to `-b^{-1} i`
    #[test]
    fn purely_imaginary() {
        let p = BigUint::from(11u32);

        // 2^{-1} = 6, -6 ≡ 5
        assert_eq!(c(0, 5), c(0, 2).multiplicative_inverse(&p).unwrap());
    }

    /// Ensures that zero, also in unreduced form, is rejected
    #[test]
    fn zero_is_rejected() {
        let p = BigUint::from(11u32);

        assert!(matches!(
            Complex::zero().multiplicative_inverse(&p),
            Err(IbeError::ArithmeticError(_))
        ));
        assert!(matches!(
            c(11, 22).multiplicative_inverse(&p),
            Err(IbeError::ArithmeticError(_))
        ));
    }

    /// Ensures that a vanishing norm is reported, which happens for `p ≡ 1 mod 4`
    #[test]
    fn vanishing_norm() {
        let p = BigUint::from(13u32);

        // 2^2 + 3^2 = 13
        assert!(matches!(
            c(2, 3).multiplicative_inverse(&p),
            Err(IbeError::ArithmeticError(_))
        ));
    }
}

#[cfg(test)]
mod test_serialize {
    use super::Complex;
    use num_bigint_dig::BigUint;

    /// Ensures that an element survives a json round trip
    #[test]
    fn json_round_trip() {
        let element = Complex::new(BigUint::from(12345u32), BigUint::from(678u32));

        let json = serde_json::to_string(&element).unwrap();
        let restored: Complex = serde_json::from_str(&json).unwrap();

        assert_eq!(element, restored);
    }
}
