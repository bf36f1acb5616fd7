// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the canonical byte representation of elements
//! of `F_p^2` (RFC 5091, Section 4.3).

use crate::{
    complex::Complex,
    error::IbeError,
    utils::big_integer::{byte_length, to_padded_bytes},
};
use num_bigint_dig::BigUint;
use serde::{Deserialize, Serialize};

/// The order in which both components of an element are concatenated.
///
/// Possible entries:
/// - `RealFirst`: `real || imaginary`
/// - `ImaginaryFirst`: `imaginary || real`, which Boneh-Franklin uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanonicalOrdering {
    RealFirst,
    ImaginaryFirst,
}

/// Encodes `element` as two big-endian integers of `byte_length(p)` bytes each.
///
/// Parameters:
/// - `p`: the field order
/// - `ordering`: the order of both components
/// - `element`: the element to encode
///
/// Returns a byte string of exactly `2 · byte_length(p)` bytes.
///
/// # Examples
/// ```
/// use bf_ibe::complex::Complex;
/// use bf_ibe::primitive::canonical::{canonical, CanonicalOrdering};
/// use num_bigint_dig::BigUint;
///
/// let p = BigUint::from(1019u32);
/// let element = Complex::new(BigUint::from(1u32), BigUint::from(515u32));
///
/// let bytes = canonical(&p, CanonicalOrdering::ImaginaryFirst, &element).unwrap();
///
/// assert_eq!(vec![2, 3, 0, 1], bytes);
/// ```
///
/// # Errors and Failures
/// - Returns a [`IbeError`] of type [`InvalidArgument`](IbeError::InvalidArgument)
///   if a component of `element` needs more bytes than `p`.
pub fn canonical(
    p: &BigUint,
    ordering: CanonicalOrdering,
    element: &Complex,
) -> Result<Vec<u8>, IbeError> {
    let length = byte_length(p);
    let real = to_padded_bytes(element.real(), length)?;
    let imaginary = to_padded_bytes(element.imaginary(), length)?;

    Ok(match ordering {
        CanonicalOrdering::RealFirst => [real, imaginary].concat(),
        CanonicalOrdering::ImaginaryFirst => [imaginary, real].concat(),
    })
}

/// Decodes a canonical byte string created by [`canonical`].
///
/// # Errors and Failures
/// - Returns a [`IbeError`] of type [`InvalidArgument`](IbeError::InvalidArgument)
///   if `bytes` does not have length `2 · byte_length(p)` or a component
///   is not smaller than `p`.
pub fn from_canonical(
    p: &BigUint,
    ordering: CanonicalOrdering,
    bytes: &[u8],
) -> Result<Complex, IbeError> {
    let length = byte_length(p);
    if bytes.len() != 2 * length {
        return Err(IbeError::InvalidArgument(format!(
            "a canonical element has {} bytes, {} were provided",
            2 * length,
            bytes.len()
        )));
    }

    let (first, second) = bytes.split_at(length);
    let first = BigUint::from_bytes_be(first);
    let second = BigUint::from_bytes_be(second);
    if &first >= p || &second >= p {
        return Err(IbeError::InvalidArgument(
            "a component of the canonical element is not reduced".to_owned(),
        ));
    }

    Ok(match ordering {
        CanonicalOrdering::RealFirst => Complex::new(first, second),
        CanonicalOrdering::ImaginaryFirst => Complex::new(second, first),
    })
}

#[cfg(test)]
mod test_canonical {
    use super::{canonical, from_canonical, CanonicalOrdering};
    use crate::{complex::Complex, utils::big_integer::byte_length};
    use num_bigint_dig::BigUint;

    /// Ensures that the length is always twice the byte length of `p`
    #[test]
    fn fixed_length() {
        let p: BigUint = "7304910653188982338163".parse().unwrap();

        for element in [
            Complex::zero(),
            Complex::one(),
            Complex::new(BigUint::from(0u32), BigUint::from(1u32)),
            Complex::new(&p - BigUint::from(1u32), &p - BigUint::from(1u32)),
        ] {
            for ordering in [CanonicalOrdering::RealFirst, CanonicalOrdering::ImaginaryFirst] {
                assert_eq!(
                    2 * byte_length(&p),
                    canonical(&p, ordering, &element).unwrap().len()
                );
            }
        }
    }

    /// Ensures that both orderings swap the halves
    #[test]
    fn orderings() {
        let p = BigUint::from(65521u32);
        let element = Complex::new(BigUint::from(0x0102u32), BigUint::from(0x0304u32));

        assert_eq!(
            vec![1, 2, 3, 4],
            canonical(&p, CanonicalOrdering::RealFirst, &element).unwrap()
        );
        assert_eq!(
            vec![3, 4, 1, 2],
            canonical(&p, CanonicalOrdering::ImaginaryFirst, &element).unwrap()
        );
    }

    /// Ensures that decoding restores the encoded element
    #[test]
    fn decoding_restores() {
        let p: BigUint = "7304910653188982338163".parse().unwrap();
        let element = Complex::new(
            "1340152054302725688111".parse().unwrap(),
            "4372944168826838636209".parse().unwrap(),
        );

        for ordering in [CanonicalOrdering::RealFirst, CanonicalOrdering::ImaginaryFirst] {
            let bytes = canonical(&p, ordering, &element).unwrap();
            assert_eq!(element, from_canonical(&p, ordering, &bytes).unwrap());
        }
    }

    /// Ensures that malformed encodings are rejected
    #[test]
    fn malformed() {
        let p = BigUint::from(65521u32);

        assert!(from_canonical(&p, CanonicalOrdering::RealFirst, &[1, 2, 3]).is_err());
        assert!(from_canonical(&p, CanonicalOrdering::RealFirst, &[0xff, 0xff, 0, 1]).is_err());
        assert!(canonical(
            &p,
            CanonicalOrdering::RealFirst,
            &Complex::from_real(BigUint::from(0x1_0000u32))
        )
        .is_err());
    }
}
