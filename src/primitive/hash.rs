// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains hashes into different domains as defined in
//! RFC 5091, Section 4.1 to 4.4.

use crate::{
    elliptic_curve::{AffinePoint, EllipticCurve},
    utils::{big_integer::mod_sub, message_digest::HashFunction},
};
use num_bigint_dig::BigUint;
use num_traits::One;

/// Hashes `data` into the range `[0, n)` (`HashToRange`).
///
/// Two rounds of `h_i = H(h_{i-1} || data)` starting at the all-zero block
/// are accumulated as `v_i = 256^{hashlen} · v_{i-1} + h_i`, the result is
/// `v_2 mod n`.
///
/// Parameters:
/// - `data`: specifies the value that is hashed
/// - `n`: the upper bound of the range, must be positive
/// - `hash`: the digest algorithm
///
/// Returns a value in `[0, n)`.
///
/// # Examples
/// ```
/// use bf_ibe::primitive::hash::hash_to_range;
/// use bf_ibe::utils::message_digest::HashFunction;
/// use num_bigint_dig::BigUint;
///
/// let value = hash_to_range(b"abc", &BigUint::from(1000003u32), HashFunction::Sha256);
///
/// assert!(value < BigUint::from(1000003u32));
/// ```
///
/// # Panics ...
/// - if `n` is zero.
pub fn hash_to_range(data: &[u8], n: &BigUint, hash: HashFunction) -> BigUint {
    let shift = hash.output_len() * 8;
    let (_, value) = (0..2).fold(
        (vec![0u8; hash.output_len()], BigUint::from(0u32)),
        |(previous, value), _| {
            let mut block = previous;
            block.extend_from_slice(data);
            let digest = hash.digest(&block);
            let value = (value << shift) + BigUint::from_bytes_be(&digest);
            (digest, value)
        },
    );
    value % n
}

/// Generates `length` pseudo-random bytes from `seed` (`HashBytes`).
///
/// With `K = H(seed)` and `h_0` the all-zero block, the output is the
/// truncated concatenation of `H(h_i || K)` for `h_i = H(h_{i-1})`.
///
/// Parameters:
/// - `length`: the number of bytes to generate
/// - `seed`: the seed of the generator
/// - `hash`: the digest algorithm
///
/// Returns exactly `length` bytes.
///
/// # Examples
/// ```
/// use bf_ibe::primitive::hash::hash_bytes;
/// use bf_ibe::utils::message_digest::HashFunction;
///
/// let bytes = hash_bytes(100, b"seed", HashFunction::Sha1);
///
/// assert_eq!(100, bytes.len());
/// ```
pub fn hash_bytes(length: usize, seed: &[u8], hash: HashFunction) -> Vec<u8> {
    let key = hash.digest(seed);
    let blocks = (length + hash.output_len() - 1) / hash.output_len();

    let mut chain = vec![0u8; hash.output_len()];
    let mut out = Vec::with_capacity(blocks * hash.output_len());
    for _ in 0..blocks {
        chain = hash.digest(&chain);
        let mut block = chain.clone();
        block.extend_from_slice(&key);
        out.extend(hash.digest(&block));
    }
    out.truncate(length);
    out
}

/// Hashes `identity` to a point of order `q` (`HashToPoint`).
///
/// The y-coordinate is `HashToRange(identity, p)`, the x-coordinate the
/// unique cube root `(y^2 - b)^((2p - 1) / 3)` of `y^2 - b`, and the point
/// is multiplied with the cofactor `(p + 1) / q`.
///
/// Parameters:
/// - `curve`: a curve `y^2 = x^3 + b` over `F_p` with `p ≡ 2 mod 3`
/// - `q`: the order of the target subgroup
/// - `identity`: the identity that is hashed
/// - `hash`: the digest algorithm
///
/// Returns a point of order `q` or the point at infinity.
pub fn hash_to_point(
    curve: &EllipticCurve,
    q: &BigUint,
    identity: &[u8],
    hash: HashFunction,
) -> AffinePoint {
    let p = curve.field_order();
    let y = hash_to_range(identity, p, hash);
    let exponent = ((p << 1usize) - BigUint::one()) / BigUint::from(3u32);
    let x = mod_sub(&(&y * &y), curve.b(), p).modpow(&exponent, p);
    let cofactor = (p + BigUint::one()) / q;

    AffinePoint::new(x, y).multiply(&cofactor, curve)
}


#[cfg(test)]
mod test_hash_bytes {
    use super::hash_bytes;
    use crate::utils::message_digest::HashFunction;

    /// Checks a known output spanning two digest blocks
    #[test]
    fn known_value() {
        let bytes = hash_bytes(40, b"seed", HashFunction::Sha256);

        assert_eq!(
            "108cbb11a097a8bdf187d576ad7a5388e2ac3eabeb5d1082f71cef3222e92bc3bffd4438a1794049",
            bytes.iter().map(|b| format!("{b:02x}")).collect::<String>()
        );
    }

    /// Ensures that shorter outputs are prefixes of longer ones
    #[test]
    fn prefix_property() {
        let long = hash_bytes(200, b"seed", HashFunction::Sha384);

        for length in [0, 1, 47, 48, 49, 96, 150] {
            assert_eq!(&long[..length], &hash_bytes(length, b"seed", HashFunction::Sha384)[..]);
        }
    }

    /// Ensures that different seeds lead to different outputs
    #[test]
    fn seed_dependent() {
        assert_ne!(
            hash_bytes(32, b"seed", HashFunction::Sha256),
            hash_bytes(32, b"Seed", HashFunction::Sha256)
        );
    }
}

#[cfg(test)]
mod test_hash_to_point {
    use super::hash_to_point;
    use crate::{elliptic_curve::AffinePoint, test_fixture::ToySystem};

    /// Checks the point of a known identity
    #[test]
    fn known_value() {
        let system = ToySystem::new();

        let point = hash_to_point(&system.curve, &system.q, b"alice@example.com", system.hash);

        assert_eq!(
            AffinePoint::new(
                "6492114019979381917011".parse().unwrap(),
                "4939790490907041940257".parse().unwrap()
            ),
            point
        );
    }

    /// Ensures that hashed points lie on the curve and have order q
    #[test]
    fn order_q() {
        let system = ToySystem::new();

        for identity in ["alice@example.com", "bob@example.com", "", "x"] {
            let point = hash_to_point(&system.curve, &system.q, identity.as_bytes(), system.hash);

            assert!(system.curve.is_on_curve(&point));
            assert!(!point.is_infinity());
            assert_eq!(AffinePoint::Infinity, point.multiply(&system.q, &system.curve));
        }
        assert_ne!(
            hash_to_point(&system.curve, &system.q, b"alice", system.hash),
            hash_to_point(&system.curve, &system.q, b"bob", system.hash)
        );
    }
}
