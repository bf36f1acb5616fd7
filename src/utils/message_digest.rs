// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! Contains the cryptographic digest algorithms that can be selected by name
//! in the public parameters.

use crate::error::IbeError;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use std::{fmt, str::FromStr};

/// The supported digest algorithms.
///
/// A [`HashFunction`] is stored by name in the public parameters, hence
/// every party resolves the same algorithm.
///
/// # Examples
/// ```
/// use bf_ibe::utils::message_digest::HashFunction;
///
/// let hash: HashFunction = "sha-256".parse().unwrap();
///
/// assert_eq!(HashFunction::Sha256, hash);
/// assert_eq!(32, hash.output_len());
/// assert_eq!("SHA-256", hash.name());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashFunction {
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashFunction {
    /// Returns the canonical name of the algorithm, e.g. `SHA-256`.
    pub fn name(&self) -> &'static str {
        match self {
            HashFunction::Sha1 => "SHA-1",
            HashFunction::Sha224 => "SHA-224",
            HashFunction::Sha256 => "SHA-256",
            HashFunction::Sha384 => "SHA-384",
            HashFunction::Sha512 => "SHA-512",
        }
    }

    /// Returns the output length of the algorithm in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            HashFunction::Sha1 => 20,
            HashFunction::Sha224 => 28,
            HashFunction::Sha256 => 32,
            HashFunction::Sha384 => 48,
            HashFunction::Sha512 => 64,
        }
    }

    /// Computes the digest of `data`.
    ///
    /// Parameters:
    /// - `data`: the bytes to hash
    ///
    /// Returns a vector of exactly [`HashFunction::output_len`] bytes.
    ///
    /// # Examples
    /// ```
    /// use bf_ibe::utils::message_digest::HashFunction;
    ///
    /// let digest = HashFunction::Sha1.digest(b"abc");
    ///
    /// assert_eq!(20, digest.len());
    /// ```
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashFunction::Sha1 => Sha1::digest(data).to_vec(),
            HashFunction::Sha224 => Sha224::digest(data).to_vec(),
            HashFunction::Sha256 => Sha256::digest(data).to_vec(),
            HashFunction::Sha384 => Sha384::digest(data).to_vec(),
            HashFunction::Sha512 => Sha512::digest(data).to_vec(),
        }
    }

    /// Resolves an algorithm by its name. Case and the dash after `SHA`
    /// are ignored, i.e. `sha256`, `SHA-256` and `Sha-256` are all accepted.
    ///
    /// # Errors and Failures
    /// - Returns a [`IbeError`] of type
    ///   [`ComponentConstruction`](IbeError::ComponentConstruction)
    ///   if the name does not denote a supported algorithm.
    pub fn from_name(name: &str) -> Result<Self, IbeError> {
        let normalized = name.trim().to_ascii_uppercase().replace('-', "");
        match normalized.as_str() {
            "SHA1" => Ok(HashFunction::Sha1),
            "SHA224" => Ok(HashFunction::Sha224),
            "SHA256" => Ok(HashFunction::Sha256),
            "SHA384" => Ok(HashFunction::Sha384),
            "SHA512" => Ok(HashFunction::Sha512),
            _ => Err(IbeError::ComponentConstruction(format!(
                "unknown digest algorithm {name}"
            ))),
        }
    }
}

impl FromStr for HashFunction {
    type Err = IbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HashFunction::from_name(s)
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod test_hash_function {
    use super::HashFunction;

    /// Ensures that names are resolved regardless of their spelling
    #[test]
    fn resolution_by_name() {
        assert_eq!(HashFunction::Sha1, HashFunction::from_name("SHA-1").unwrap());
        assert_eq!(HashFunction::Sha224, HashFunction::from_name("sha224").unwrap());
        assert_eq!(HashFunction::Sha384, "Sha-384".parse().unwrap());
        assert_eq!(HashFunction::Sha512, "SHA512".parse().unwrap());
        assert!(HashFunction::from_name("MD5").is_err());
    }

    /// Ensures that every digest has its declared length
    #[test]
    fn output_lengths() {
        for hash in [
            HashFunction::Sha1,
            HashFunction::Sha224,
            HashFunction::Sha256,
            HashFunction::Sha384,
            HashFunction::Sha512,
        ] {
            assert_eq!(hash.output_len(), hash.digest(b"bf-ibe").len());
            assert_eq!(hash, hash.name().parse().unwrap());
        }
    }

    /// Checks the SHA-256 digest against the FIPS 180-2 test vector
    #[test]
    fn sha256_vector() {
        let digest = HashFunction::Sha256.digest(b"abc");

        assert_eq!(
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            digest
                .iter()
                .map(|b| format!("{b:02x}"))
                .collect::<String>()
        );
    }
}
