// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the modified Tate pairing on Type-1 curves
//! and its building blocks.
//!
//! The pairing `e(A, B)` evaluates Miller's function of `A` at the image of
//! `B` under a distortion map and raises the result to `(p^2 - 1) / q`.
//!
//! References:
//! - \[1\] Miller, V. S. (2004).
//!   The Weil Pairing, and Its Efficient Calculation.
//!   In: Journal of Cryptology 17.
//!   <https://doi.org/10.1007/s00145-004-0315-8>
//! - \[2\] Boyen, X. and Martin, L. (2007). RFC 5091, Section 4.

pub mod distortion;
pub mod miller;
pub mod tate;

pub use distortion::{DistortionMap, XiDistortionMap};
pub use miller::{MillerAlgorithm, TypeOneMillerAlgorithm};
pub use tate::{type_one_tate_pairing, TatePairing};
