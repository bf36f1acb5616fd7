// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! Contains the encryption and decryption of Boneh-Franklin
//! (RFC 5091, Sections 5.4 and 5.5).

use crate::{
    complex::Complex,
    construction::identity_based_encryption::{
        CipherTextTuple, IbeClient, PrivateKey, PublicParameters,
    },
    elliptic_curve::pairing::{type_one_tate_pairing, TatePairing},
    error::IbeError,
    primitive::{
        canonical::{canonical, CanonicalOrdering},
        hash::{hash_bytes, hash_to_point, hash_to_range},
    },
    utils::{lock_rng, message_digest::HashFunction, SharedRng},
};
use log::debug;
use num_bigint_dig::BigUint;
use rand::RngCore;

/// The client of a Boneh-Franklin system, which encrypts to identities
/// and decrypts with extracted private keys.
///
/// Attributes:
/// - `public_parameters`: the public parameters of the system
/// - `hash`: the resolved digest algorithm of the system
/// - `pairing`: the Tate pairing on the curve of the system
/// - `rng`: the random source for the randomness `ρ` of encryptions
///
/// # Examples
/// ```no_run
/// use bf_ibe::construction::identity_based_encryption::{
///     BonehFranklinComponentFactory, BonehFranklinInitializer, IbeClient,
///     IbeComponentFactory, IbeInitializer, PrivateKeyGenerator, SecurityLevel,
/// };
/// use bf_ibe::sample::Mod3GenerationStrategy;
/// use bf_ibe::utils::new_shared_rng;
///
/// let rng = new_shared_rng();
/// let setup = BonehFranklinInitializer::<Mod3GenerationStrategy>::new(rng.clone())
///     .setup(SecurityLevel::Lowest)
///     .unwrap();
/// let factory = BonehFranklinComponentFactory::new(rng);
/// let client = factory.obtain_client(&setup.public_parameters).unwrap();
/// let generator = factory
///     .obtain_private_key_generator(&setup.public_parameters, &setup.master_secret)
///     .unwrap();
///
/// let cipher = client.encrypt("hello", "alice@example.com").unwrap();
/// let message = client.decrypt(&generator.extract("alice@example.com"), &cipher).unwrap();
///
/// assert_eq!(Some("hello".to_owned()), message);
/// ```
pub struct BonehFranklinClient {
    public_parameters: PublicParameters,
    hash: HashFunction,
    pairing: TatePairing,
    rng: SharedRng,
}

impl BonehFranklinClient {
    /// Creates a client for `public_parameters`.
    ///
    /// # Errors and Failures
    /// - Returns a [`IbeError`] of type
    ///   [`ComponentConstruction`](IbeError::ComponentConstruction)
    ///   if the digest algorithm is unknown or `q` does not divide `p^2 - 1`.
    pub fn new(public_parameters: PublicParameters, rng: SharedRng) -> Result<Self, IbeError> {
        let hash = public_parameters.hash()?;
        let pairing = type_one_tate_pairing(&public_parameters.curve, &public_parameters.q)?;
        Ok(Self {
            public_parameters,
            hash,
            pairing,
            rng,
        })
    }

    /// Returns the public parameters the client works with.
    pub fn public_parameters(&self) -> &PublicParameters {
        &self.public_parameters
    }

    /// Computes `H(canonical(θ))` for a pairing value `θ`.
    fn mask(&self, theta: &Complex) -> Result<Vec<u8>, IbeError> {
        let z = canonical(
            self.public_parameters.curve.field_order(),
            CanonicalOrdering::ImaginaryFirst,
            theta,
        )?;
        Ok(self.hash.digest(&z))
    }

    /// Computes `l = HashToRange(ρ || H(m), q)`.
    fn blinding_factor(&self, rho: &[u8], message: &[u8]) -> BigUint {
        let mut block = rho.to_vec();
        block.extend(self.hash.digest(message));
        hash_to_range(&block, &self.public_parameters.q, self.hash)
    }
}

fn xor(left: &[u8], right: &[u8]) -> Vec<u8> {
    left.iter().zip(right).map(|(a, b)| a ^ b).collect()
}

impl IbeClient for BonehFranklinClient {
    /// Encrypts `message` to `identity`.
    ///
    /// With `Q_id = HashToPoint(identity)`, a random `ρ` and
    /// `l = HashToRange(ρ || H(m), q)` the ciphertext is
    /// `U = [l] P`, `V = H(canonical(e(P_pub, Q_id)^l)) ⊕ ρ` and
    /// `W = HashBytes(|m|, ρ) ⊕ m`.
    ///
    /// Parameters:
    /// - `message`: the non-empty message
    /// - `identity`: the non-empty identity of the recipient
    ///
    /// Returns the ciphertext `(U, V, W)`.
    ///
    /// # Errors and Failures
    /// - Returns a [`IbeError`] of type [`InvalidArgument`](IbeError::InvalidArgument)
    ///   if `message` or `identity` is empty.
    /// - Returns a [`IbeError`] of type [`ArithmeticError`](IbeError::ArithmeticError)
    ///   if the pairing fails for malformed parameters.
    fn encrypt(&self, message: &str, identity: &str) -> Result<CipherTextTuple, IbeError> {
        if message.is_empty() {
            return Err(IbeError::InvalidArgument(
                "the message must not be empty".to_owned(),
            ));
        }
        if identity.is_empty() {
            return Err(IbeError::InvalidArgument(
                "the identity must not be empty".to_owned(),
            ));
        }
        let parameters = &self.public_parameters;
        let curve = &parameters.curve;
        let p = curve.field_order();

        let q_id = hash_to_point(curve, &parameters.q, identity.as_bytes(), self.hash);

        let mut rho = vec![0u8; self.hash.output_len()];
        lock_rng(&self.rng).fill_bytes(&mut rho);

        let l = self.blinding_factor(&rho, message.as_bytes());
        let cipher_u = parameters.point.wnaf_multiply(&l, curve);

        let theta = self
            .pairing
            .perform_pairing(&parameters.point_public, &q_id)?
            .mod_pow(&l, p);
        let cipher_v = xor(&self.mask(&theta)?, &rho);
        let cipher_w = xor(
            &hash_bytes(message.len(), &rho, self.hash),
            message.as_bytes(),
        );

        Ok(CipherTextTuple {
            cipher_u,
            cipher_v,
            cipher_w,
        })
    }

    /// Decrypts `cipher_text` with `private_key`.
    ///
    /// Recovers `ρ = H(canonical(e(U, S_id))) ⊕ V` and
    /// `m = HashBytes(|W|, ρ) ⊕ W`, and accepts `m` iff
    /// `U = [HashToRange(ρ || H(m), q)] P`.
    ///
    /// Returns [`None`] if `V` is not as long as a digest, the recovered
    /// message is not valid UTF-8 or the check of `U` fails.
    ///
    /// # Errors and Failures
    /// - Returns a [`IbeError`] of type [`ArithmeticError`](IbeError::ArithmeticError)
    ///   if the pairing fails for malformed parameters.
    fn decrypt(
        &self,
        private_key: &PrivateKey,
        cipher_text: &CipherTextTuple,
    ) -> Result<Option<String>, IbeError> {
        if cipher_text.cipher_v.len() != self.hash.output_len() {
            debug!(
                "rejected ciphertext with V of {} bytes",
                cipher_text.cipher_v.len()
            );
            return Ok(None);
        }
        let parameters = &self.public_parameters;

        let theta = self
            .pairing
            .perform_pairing(&cipher_text.cipher_u, &private_key.point)?;
        let rho = xor(&self.mask(&theta)?, &cipher_text.cipher_v);
        let message = xor(
            &hash_bytes(cipher_text.cipher_w.len(), &rho, self.hash),
            &cipher_text.cipher_w,
        );

        let l = self.blinding_factor(&rho, &message);
        if parameters.point.wnaf_multiply(&l, &parameters.curve) != cipher_text.cipher_u {
            debug!("rejected ciphertext that fails the consistency check of U");
            return Ok(None);
        }

        match String::from_utf8(message) {
            Ok(message) => Ok(Some(message)),
            Err(_) => {
                debug!("rejected ciphertext with a plaintext that is not UTF-8");
                Ok(None)
            }
        }
    }
}
