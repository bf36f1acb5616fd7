// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the Boneh-Franklin identity based encryption
//! scheme with the parameters of RFC 5091.
//!
//! References:
//! - \[1\] Boneh, D. and Franklin, M. (2001).
//!   Identity-Based Encryption from the Weil Pairing.
//!   In: Advances in Cryptology, CRYPTO 2001.
//!   <https://doi.org/10.1007/3-540-44647-8_13>
//! - \[2\] Boyen, X. and Martin, L. (2007). RFC 5091, Section 5.

mod client;
mod component_factory;
mod initializer;
mod private_key_generator;

pub use client::BonehFranklinClient;
pub use component_factory::BonehFranklinComponentFactory;
pub use initializer::BonehFranklinInitializer;
pub use private_key_generator::BonehFranklinPrivateKeyGenerator;

use super::{IbeComponentFactory, IbeInitializer, IbeSetup, IdentityBasedEncryption, SecurityLevel};
use crate::{error::IbeError, sample::Mod3GenerationStrategy, utils::new_shared_rng};
use log::info;

/// Sets up a Boneh-Franklin system for `security_level` and builds its parties.
///
/// One random source seeded from the operating system is shared by the
/// setup and the client.
///
/// Parameters:
/// - `security_level`: the bit lengths and digest algorithm of the system
///
/// Returns the bundled client and private key generator together with the
/// records of the setup.
///
/// # Examples
/// ```no_run
/// use bf_ibe::construction::identity_based_encryption::{setup_boneh_franklin, SecurityLevel};
///
/// let (ibe, setup) = setup_boneh_franklin(SecurityLevel::Lowest).unwrap();
///
/// assert_eq!("SHA-1", setup.public_parameters.hash_function);
/// ```
///
/// # Errors and Failures
/// - Returns a [`IbeError`] of type [`SetupFailure`](IbeError::SetupFailure)
///   if a generation step exhausts its attempts.
pub fn setup_boneh_franklin(
    security_level: SecurityLevel,
) -> Result<(IdentityBasedEncryption, IbeSetup), IbeError> {
    let rng = new_shared_rng();
    let initializer = BonehFranklinInitializer::<Mod3GenerationStrategy>::new(rng.clone());
    let setup = initializer.setup(security_level)?;

    let factory = BonehFranklinComponentFactory::new(rng);
    let client = factory.obtain_client(&setup.public_parameters)?;
    let generator =
        factory.obtain_private_key_generator(&setup.public_parameters, &setup.master_secret)?;
    info!("Boneh-Franklin system of level {security_level:?} is ready");

    Ok((
        IdentityBasedEncryption::new(Box::new(client), Box::new(generator)),
        setup,
    ))
}
