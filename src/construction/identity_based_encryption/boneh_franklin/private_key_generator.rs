// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! Contains the private key extraction of Boneh-Franklin (RFC 5091, Section 5.3).

use crate::{
    construction::identity_based_encryption::{
        MasterSecret, PrivateKey, PrivateKeyGenerator, PublicParameters,
    },
    error::IbeError,
    primitive::hash::hash_to_point,
    utils::message_digest::HashFunction,
};
use num_bigint_dig::BigUint;
use num_traits::{One, Zero};

/// The private key generator of a Boneh-Franklin system, which holds
/// the master secret.
pub struct BonehFranklinPrivateKeyGenerator {
    public_parameters: PublicParameters,
    master_secret: MasterSecret,
    hash: HashFunction,
}

impl BonehFranklinPrivateKeyGenerator {
    /// Creates a private key generator for `public_parameters` and `master_secret`.
    ///
    /// # Errors and Failures
    /// - Returns a [`IbeError`] of type
    ///   [`ComponentConstruction`](IbeError::ComponentConstruction)
    ///   if the digest algorithm is unknown or `q` is not a positive
    ///   divisor of `p + 1`.
    pub fn new(
        public_parameters: PublicParameters,
        master_secret: MasterSecret,
    ) -> Result<Self, IbeError> {
        let hash = public_parameters.hash()?;
        let q = &public_parameters.q;
        let cofactor = public_parameters.curve.field_order() + BigUint::one();
        if q.is_zero() || !(cofactor % q).is_zero() {
            return Err(IbeError::ComponentConstruction(format!(
                "the subgroup order {q} does not divide p + 1"
            )));
        }
        Ok(Self {
            public_parameters,
            master_secret,
            hash,
        })
    }
}

impl PrivateKeyGenerator for BonehFranklinPrivateKeyGenerator {
    /// Computes `S_id = [s] HashToPoint(identity)`.
    ///
    /// The key only depends on the master secret, the public parameters
    /// and `identity`.
    fn extract(&self, identity: &str) -> PrivateKey {
        let parameters = &self.public_parameters;
        let q_id = hash_to_point(
            &parameters.curve,
            &parameters.q,
            identity.as_bytes(),
            self.hash,
        );

        PrivateKey {
            point: q_id.wnaf_multiply(&self.master_secret.secret, &parameters.curve),
        }
    }
}
