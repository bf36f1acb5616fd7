// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

use super::{BonehFranklinClient, BonehFranklinPrivateKeyGenerator};
use crate::{
    construction::identity_based_encryption::{
        IbeComponentFactory, MasterSecret, PublicParameters,
    },
    error::IbeError,
    utils::SharedRng,
};
use log::debug;

/// Builds the parties of Boneh-Franklin systems.
///
/// All clients of a factory share its random source.
pub struct BonehFranklinComponentFactory {
    rng: SharedRng,
}

impl BonehFranklinComponentFactory {
    /// Creates a factory whose clients draw from `rng`.
    pub fn new(rng: SharedRng) -> Self {
        Self { rng }
    }
}

impl IbeComponentFactory for BonehFranklinComponentFactory {
    type Client = BonehFranklinClient;
    type Generator = BonehFranklinPrivateKeyGenerator;

    fn obtain_client(
        &self,
        public_parameters: &PublicParameters,
    ) -> Result<BonehFranklinClient, IbeError> {
        debug!(
            "building client with digest {}",
            public_parameters.hash_function
        );
        BonehFranklinClient::new(public_parameters.clone(), self.rng.clone())
    }

    fn obtain_private_key_generator(
        &self,
        public_parameters: &PublicParameters,
        master_secret: &MasterSecret,
    ) -> Result<BonehFranklinPrivateKeyGenerator, IbeError> {
        debug!(
            "building private key generator with digest {}",
            public_parameters.hash_function
        );
        BonehFranklinPrivateKeyGenerator::new(public_parameters.clone(), master_secret.clone())
    }
}
