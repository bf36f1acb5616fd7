// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the error type returned by all fallible operations
//! of this crate.
//!
//! A rejected ciphertext is not an error. Decryption reports it as an
//! empty result instead.

use thiserror::Error;

/// [`IbeError`] defines the errors that can occur while setting up,
/// constructing or using an identity based encryption system.
///
/// Each variant carries a description of the concrete cause.
///
/// Possible entries:
/// - `ArithmeticError`: an element of `F_p^2` without multiplicative inverse
///   was inverted, which indicates malformed curve parameters
/// - `ComponentConstruction`: a component could not be built from the given
///   public parameters, e.g. an unknown digest name or a pairing whose
///   embedding degree does not hold
/// - `SetupFailure`: a generation step exhausted its attempt budget
/// - `InvalidArgument`: an argument was rejected before any computation
/// - `InvalidCurve`: the curve parameters violate the Type-1 constraints
///
/// # Examples
/// ```
/// use bf_ibe::error::IbeError;
/// use bf_ibe::elliptic_curve::TypeOneEllipticCurve;
/// use num_bigint_dig::BigUint;
///
/// let curve = TypeOneEllipticCurve::of_order(BigUint::from(13u32));
///
/// assert!(matches!(curve, Err(IbeError::InvalidCurve(_))));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IbeError {
    /// An inverse in the extension field does not exist.
    #[error("arithmetic error: {0}")]
    ArithmeticError(String),
    /// A client, key generator or pairing could not be constructed.
    #[error("component construction failed: {0}")]
    ComponentConstruction(String),
    /// Prime or point generation ran out of attempts.
    #[error("setup failed: {0}")]
    SetupFailure(String),
    /// An argument does not satisfy the preconditions of the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The curve is not a valid Type-1 curve.
    #[error("invalid curve: {0}")]
    InvalidCurve(String),
}
