// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the primitives of RFC 5091 that are useful for
//! identity based constructions, but themselves do not provide security
//! guarantees like confidentiality or integrity.

pub mod canonical;
pub mod hash;
