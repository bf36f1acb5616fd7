// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module provides the traits the parties of an identity based
//! encryption scheme implement. Furthermore, it contains the Boneh-Franklin
//! scheme implementing these traits and the facade
//! [`IdentityBasedEncryption`] that bundles them.
//!
//! The parties are set up as follows:
//! 1. An [`IbeInitializer`] creates the [`PublicParameters`] and the
//!    [`MasterSecret`] for a [`SecurityLevel`].
//! 2. An [`IbeComponentFactory`] builds an [`IbeClient`] from the public
//!    parameters and a [`PrivateKeyGenerator`] from both records.

mod boneh_franklin;
mod domain;

pub use boneh_franklin::{
    setup_boneh_franklin, BonehFranklinClient, BonehFranklinComponentFactory,
    BonehFranklinInitializer, BonehFranklinPrivateKeyGenerator,
};
pub use domain::{
    CipherTextTuple, IbeSetup, MasterSecret, PrivateKey, PublicParameters, SecurityLevel,
};

use crate::error::IbeError;

/// Encrypts messages to identities and decrypts them with private keys.
pub trait IbeClient: Send + Sync {
    /// Encrypts `message` such that only the holder of the private key of
    /// `identity` can decrypt it.
    ///
    /// # Errors and Failures
    /// - Returns a [`IbeError`] of type [`InvalidArgument`](IbeError::InvalidArgument)
    ///   if `message` or `identity` is empty.
    fn encrypt(&self, message: &str, identity: &str) -> Result<CipherTextTuple, IbeError>;

    /// Decrypts `cipher_text` with `private_key`.
    ///
    /// Returns [`None`] if the ciphertext was not created for the identity
    /// of `private_key` or was modified.
    fn decrypt(
        &self,
        private_key: &PrivateKey,
        cipher_text: &CipherTextTuple,
    ) -> Result<Option<String>, IbeError>;
}

/// Extracts private keys of identities using the master secret.
pub trait PrivateKeyGenerator: Send + Sync {
    /// Returns the private key of `identity`.
    fn extract(&self, identity: &str) -> PrivateKey;
}

/// Creates the public parameters and the master secret of a system.
pub trait IbeInitializer {
    /// Runs the setup for `security_level`.
    ///
    /// # Errors and Failures
    /// - Returns a [`IbeError`] of type [`SetupFailure`](IbeError::SetupFailure)
    ///   if a generation step exhausts its attempts.
    fn setup(&self, security_level: SecurityLevel) -> Result<IbeSetup, IbeError>;
}

/// Builds the parties of a system from its records.
pub trait IbeComponentFactory {
    type Client: IbeClient;
    type Generator: PrivateKeyGenerator;

    /// Builds a client for `public_parameters`.
    ///
    /// # Errors and Failures
    /// - Returns a [`IbeError`] of type
    ///   [`ComponentConstruction`](IbeError::ComponentConstruction)
    ///   if the parameters can not be used, e.g. for an unknown digest.
    fn obtain_client(&self, public_parameters: &PublicParameters)
        -> Result<Self::Client, IbeError>;

    /// Builds a private key generator for `public_parameters` and `master_secret`.
    ///
    /// # Errors and Failures
    /// - Returns a [`IbeError`] of type
    ///   [`ComponentConstruction`](IbeError::ComponentConstruction)
    ///   if the parameters can not be used, e.g. for an unknown digest.
    fn obtain_private_key_generator(
        &self,
        public_parameters: &PublicParameters,
        master_secret: &MasterSecret,
    ) -> Result<Self::Generator, IbeError>;
}

/// Bundles a client and a private key generator of one system.
///
/// # Examples
/// ```no_run
/// use bf_ibe::construction::identity_based_encryption::{setup_boneh_franklin, SecurityLevel};
///
/// let (ibe, _setup) = setup_boneh_franklin(SecurityLevel::Lowest).unwrap();
///
/// let cipher = ibe.encrypt("hello", "alice@example.com").unwrap();
/// let key = ibe.extract("alice@example.com");
///
/// assert_eq!(Some("hello".to_owned()), ibe.decrypt(&key, &cipher).unwrap());
/// ```
pub struct IdentityBasedEncryption {
    client: Box<dyn IbeClient>,
    private_key_generator: Box<dyn PrivateKeyGenerator>,
}

impl IdentityBasedEncryption {
    /// Bundles `client` and `private_key_generator`.
    pub fn new(
        client: Box<dyn IbeClient>,
        private_key_generator: Box<dyn PrivateKeyGenerator>,
    ) -> Self {
        Self {
            client,
            private_key_generator,
        }
    }

    /// Encrypts `message` to `identity`, see [`IbeClient::encrypt`].
    pub fn encrypt(&self, message: &str, identity: &str) -> Result<CipherTextTuple, IbeError> {
        self.client.encrypt(message, identity)
    }

    /// Decrypts `cipher_text`, see [`IbeClient::decrypt`].
    pub fn decrypt(
        &self,
        private_key: &PrivateKey,
        cipher_text: &CipherTextTuple,
    ) -> Result<Option<String>, IbeError> {
        self.client.decrypt(private_key, cipher_text)
    }

    /// Extracts the private key of `identity`, see [`PrivateKeyGenerator::extract`].
    pub fn extract(&self, identity: &str) -> PrivateKey {
        self.private_key_generator.extract(identity)
    }
}
