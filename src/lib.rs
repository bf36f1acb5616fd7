// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This crate provides the Boneh-Franklin identity based encryption scheme
//! as standardized in RFC 5091, together with the mathematical primitives
//! it is built on: arithmetic in `F_p^2`, Type-1 elliptic curves, the
//! Tate pairing via Miller's algorithm and the hash and encoding
//! primitives of the RFC.
//!
//! A complete system is obtained with
//! [`setup_boneh_franklin`](construction::identity_based_encryption::setup_boneh_franklin).

pub mod complex;
pub mod construction;
pub mod elliptic_curve;
pub mod error;
pub mod primitive;
pub mod sample;
pub mod utils;

#[cfg(test)]
mod test_fixture;
