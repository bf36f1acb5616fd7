// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! Contains points in affine coordinates over the base field `F_p`
//! and over the extension field `F_p^2`.
//!
//! The point at infinity is a variant of its own, hence equality of points
//! is total and `Infinity == Infinity` holds.

mod affine;
mod complex_affine;

pub use affine::AffinePoint;
pub use complex_affine::ComplexAffinePoint;
