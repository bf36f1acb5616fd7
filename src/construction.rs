// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the cryptographic constructions of this crate.
//! A construction is build the same way:
//!
//! 1. Traits that combine the common features of the parties, e.g.
//!    [`IbeClient`](identity_based_encryption::IbeClient).
//! 2. Explicit implementations of these traits, e.g.
//!    [`BonehFranklinClient`](identity_based_encryption::BonehFranklinClient).

pub mod identity_based_encryption;
