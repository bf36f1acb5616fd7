// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! Modular arithmetic and encoding helpers for [`BigUint`].
//!
//! All moduli used in this crate are odd primes, hence inverses are
//! computed with Fermat's little theorem.

use crate::error::IbeError;
use num_bigint_dig::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::Rng;

/// Returns the number of bytes needed to represent `value`, i.e.
/// `ceil(bits(value) / 8)`.
///
/// # Examples
/// ```
/// use bf_ibe::utils::big_integer::byte_length;
/// use num_bigint_dig::BigUint;
///
/// assert_eq!(2, byte_length(&BigUint::from(256u32)));
/// assert_eq!(1, byte_length(&BigUint::from(255u32)));
/// ```
pub fn byte_length(value: &BigUint) -> usize {
    (value.bits() as usize + 7) / 8
}

/// Encodes `value` as big-endian byte string of exactly `length` bytes,
/// padded with leading zeros.
///
/// Parameters:
/// - `value`: the non-negative integer to encode
/// - `length`: the number of bytes of the output
///
/// Returns the padded encoding or an error if `value` needs more than
/// `length` bytes.
///
/// # Examples
/// ```
/// use bf_ibe::utils::big_integer::to_padded_bytes;
/// use num_bigint_dig::BigUint;
///
/// let bytes = to_padded_bytes(&BigUint::from(258u32), 4).unwrap();
///
/// assert_eq!(vec![0, 0, 1, 2], bytes);
/// ```
///
/// # Errors and Failures
/// - Returns a [`IbeError`] of type [`InvalidArgument`](IbeError::InvalidArgument)
///   if `value` does not fit into `length` bytes.
pub fn to_padded_bytes(value: &BigUint, length: usize) -> Result<Vec<u8>, IbeError> {
    if value.is_zero() {
        return Ok(vec![0; length]);
    }
    let bytes = value.to_bytes_be();
    if bytes.len() > length {
        return Err(IbeError::InvalidArgument(format!(
            "a value of {} bytes does not fit into {length} bytes",
            bytes.len()
        )));
    }
    let mut out = vec![0; length - bytes.len()];
    out.extend_from_slice(&bytes);
    Ok(out)
}

/// Samples a value uniformly at random from `[lower, upper)`.
///
/// # Errors and Failures
/// - Returns a [`IbeError`] of type [`InvalidArgument`](IbeError::InvalidArgument)
///   if the interval is empty.
pub fn random_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    lower: &BigUint,
    upper: &BigUint,
) -> Result<BigUint, IbeError> {
    if lower >= upper {
        return Err(IbeError::InvalidArgument(format!(
            "the interval [{lower}, {upper}) is empty"
        )));
    }
    Ok(rng.gen_biguint_range(lower, upper))
}

/// Computes `a^{-1} mod p` for a prime `p`.
///
/// Returns [`None`] if `a ≡ 0 mod p`.
///
/// # Examples
/// ```
/// use bf_ibe::utils::big_integer::mod_inverse;
/// use num_bigint_dig::BigUint;
///
/// let p = BigUint::from(11u32);
///
/// assert_eq!(Some(BigUint::from(4u32)), mod_inverse(&BigUint::from(3u32), &p));
/// assert_eq!(None, mod_inverse(&BigUint::from(22u32), &p));
/// ```
pub fn mod_inverse(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let reduced = a % p;
    if reduced.is_zero() || p <= &BigUint::one() {
        return None;
    }
    let exponent = p - BigUint::from(2u32);
    Some(reduced.modpow(&exponent, p))
}

/// Computes `(a - b) mod m` for non-negative `a` and `b`.
pub fn mod_sub(a: &BigUint, b: &BigUint, modulus: &BigUint) -> BigUint {
    let a = a % modulus;
    let b = b % modulus;
    (a + modulus - b) % modulus
}

/// Computes `-a mod m`.
pub fn mod_neg(a: &BigUint, modulus: &BigUint) -> BigUint {
    mod_sub(&BigUint::zero(), a, modulus)
}

/// Returns whether `value` is odd.
pub fn is_odd(value: &BigUint) -> bool {
    !value.is_zero() && (value % 2u32).is_one()
}

/// Returns the binary representation of `value` starting at its most
/// significant set bit. Zero yields an empty vector.
///
/// # Examples
/// ```
/// use bf_ibe::utils::big_integer::bits_msb_first;
/// use num_bigint_dig::BigUint;
///
/// assert_eq!(vec![true, false, true, true], bits_msb_first(&BigUint::from(11u32)));
/// ```
pub fn bits_msb_first(value: &BigUint) -> Vec<bool> {
    if value.is_zero() {
        return Vec::new();
    }
    let bits: Vec<bool> = value
        .to_bytes_be()
        .iter()
        .flat_map(|byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1))
        .collect();
    let start = bits.iter().position(|bit| *bit).unwrap_or(bits.len());
    bits[start..].to_vec()
}


#[cfg(test)]
mod test_modular {
    use super::{bits_msb_first, is_odd, mod_inverse, mod_neg, mod_sub, random_in_range};
    use num_bigint_dig::BigUint;
    use rand::{rngs::StdRng, SeedableRng};

    /// Ensures that inverses multiply to one
    #[test]
    fn inverse_is_correct() {
        let p: BigUint = "7304910653188982338163".parse().unwrap();
        let a = BigUint::from(123456789u32);

        let inverse = mod_inverse(&a, &p).unwrap();

        assert_eq!(BigUint::from(1u32), (a * inverse) % p);
    }

    /// Ensures that subtraction wraps around the modulus
    #[test]
    fn subtraction_wraps() {
        let m = BigUint::from(11u32);

        assert_eq!(
            BigUint::from(8u32),
            mod_sub(&BigUint::from(3u32), &BigUint::from(6u32), &m)
        );
        assert_eq!(BigUint::from(0u32), mod_neg(&BigUint::from(0u32), &m));
        assert_eq!(BigUint::from(10u32), mod_neg(&BigUint::from(12u32), &m));
    }

    /// Ensures the parity check and the bit walk agree with small values
    #[test]
    fn bits_and_parity() {
        assert!(is_odd(&BigUint::from(5u32)));
        assert!(!is_odd(&BigUint::from(0u32)));
        assert!(bits_msb_first(&BigUint::from(0u32)).is_empty());
        assert_eq!(vec![true], bits_msb_first(&BigUint::from(1u32)));
        assert_eq!(9, bits_msb_first(&BigUint::from(256u32)).len());
    }

    /// Ensures that sampled values lie in the requested interval
    #[test]
    fn sampling_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let lower = BigUint::from(2u32);
        let upper = BigUint::from(5u32);

        for _ in 0..50 {
            let value = random_in_range(&mut rng, &lower, &upper).unwrap();
            assert!(value >= lower && value < upper);
        }
        assert!(random_in_range(&mut rng, &upper, &lower).is_err());
    }
}
