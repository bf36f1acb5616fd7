// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! Contains the records exchanged between the parties of an identity
//! based encryption system.

use crate::{
    elliptic_curve::{AffinePoint, TypeOneEllipticCurve},
    error::IbeError,
    utils::message_digest::HashFunction,
};
use num_bigint_dig::BigUint;
use serde::{Deserialize, Serialize};

/// The security levels of RFC 5091, each fixing the bit length of the
/// subgroup order `q`, the bit length of the field order `p` and the
/// digest algorithm.
///
/// Possible entries:
/// - `Lowest`: 160 bit `q`, 512 bit `p`, SHA-1
/// - `Low`: 224 bit `q`, 1024 bit `p`, SHA-224
/// - `Medium`: 256 bit `q`, 1536 bit `p`, SHA-256
/// - `High`: 384 bit `q`, 3840 bit `p`, SHA-384
/// - `Highest`: 512 bit `q`, 7680 bit `p`, SHA-512
///
/// # Examples
/// ```
/// use bf_ibe::construction::identity_based_encryption::SecurityLevel;
/// use bf_ibe::utils::message_digest::HashFunction;
///
/// let level = SecurityLevel::Medium;
///
/// assert_eq!(256, level.q_bits());
/// assert_eq!(1536, level.p_bits());
/// assert_eq!(HashFunction::Sha256, level.hash_function());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecurityLevel {
    Lowest,
    Low,
    Medium,
    High,
    Highest,
}

impl SecurityLevel {
    /// Returns the bit length of the subgroup order `q`.
    pub fn q_bits(&self) -> usize {
        match self {
            SecurityLevel::Lowest => 160,
            SecurityLevel::Low => 224,
            SecurityLevel::Medium => 256,
            SecurityLevel::High => 384,
            SecurityLevel::Highest => 512,
        }
    }

    /// Returns the bit length of the field order `p`.
    pub fn p_bits(&self) -> usize {
        match self {
            SecurityLevel::Lowest => 512,
            SecurityLevel::Low => 1024,
            SecurityLevel::Medium => 1536,
            SecurityLevel::High => 3840,
            SecurityLevel::Highest => 7680,
        }
    }

    /// Returns the digest algorithm of the level.
    pub fn hash_function(&self) -> HashFunction {
        match self {
            SecurityLevel::Lowest => HashFunction::Sha1,
            SecurityLevel::Low => HashFunction::Sha224,
            SecurityLevel::Medium => HashFunction::Sha256,
            SecurityLevel::High => HashFunction::Sha384,
            SecurityLevel::Highest => HashFunction::Sha512,
        }
    }
}

/// The public parameters of a system.
///
/// Attributes:
/// - `curve`: the Type-1 curve over `F_p`
/// - `q`: the prime order of the used subgroup
/// - `point`: the generator `P` of the subgroup
/// - `point_public`: the public point `P_pub = [s] P`
/// - `hash_function`: the name of the digest algorithm, e.g. `SHA-256`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicParameters {
    pub curve: TypeOneEllipticCurve,
    pub q: BigUint,
    pub point: AffinePoint,
    pub point_public: AffinePoint,
    pub hash_function: String,
}

impl PublicParameters {
    /// Resolves the digest algorithm named in the parameters.
    ///
    /// # Errors and Failures
    /// - Returns a [`IbeError`] of type
    ///   [`ComponentConstruction`](IbeError::ComponentConstruction)
    ///   if the name does not denote a supported algorithm.
    pub fn hash(&self) -> Result<HashFunction, IbeError> {
        HashFunction::from_name(&self.hash_function)
    }
}

/// The master secret `s` with `2 <= s < q`, known only to the private key generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterSecret {
    pub secret: BigUint,
}

/// The private key `S_id = [s] Q_id` of one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKey {
    pub point: AffinePoint,
}

/// A Boneh-Franklin ciphertext `(U, V, W)`.
///
/// Attributes:
/// - `cipher_u`: the point `U = [l] P`
/// - `cipher_v`: the masked randomness, as long as a digest
/// - `cipher_w`: the masked message, as long as the message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherTextTuple {
    pub cipher_u: AffinePoint,
    pub cipher_v: Vec<u8>,
    pub cipher_w: Vec<u8>,
}

/// The output of a system setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IbeSetup {
    pub public_parameters: PublicParameters,
    pub master_secret: MasterSecret,
}
