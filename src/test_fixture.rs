// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! A fixed toy system that keeps the unit tests fast and deterministic.
//!
//! `q = 2^64 - 2^8 - 1`, `p = 12 · 33 · q - 1` with 73 bits,
//! `P` a point of order `q`, `s` the master secret and `P_pub = [s] P`.

use crate::{
    construction::identity_based_encryption::{MasterSecret, PublicParameters},
    elliptic_curve::{AffinePoint, TypeOneEllipticCurve},
    utils::message_digest::HashFunction,
};
use num_bigint_dig::BigUint;

pub(crate) struct ToySystem {
    pub q: BigUint,
    pub p: BigUint,
    pub curve: TypeOneEllipticCurve,
    pub generator: AffinePoint,
    pub master_secret: BigUint,
    pub public_point: AffinePoint,
    pub hash: HashFunction,
}

fn int(decimal: &str) -> BigUint {
    decimal.parse().unwrap()
}

impl ToySystem {
    pub fn new() -> Self {
        let p = int("7304910653188982338163");
        Self {
            q: int("18446744073709551359"),
            curve: TypeOneEllipticCurve::of_order(p.clone()).unwrap(),
            p,
            generator: AffinePoint::new(
                int("4037592345529524510991"),
                int("1677107730212742917022"),
            ),
            master_secret: int("12007621696699967248"),
            public_point: AffinePoint::new(
                int("6520379291066012959789"),
                int("7120254491403545846963"),
            ),
            hash: HashFunction::Sha256,
        }
    }

    pub fn public_parameters(&self) -> PublicParameters {
        PublicParameters {
            curve: self.curve.clone(),
            q: self.q.clone(),
            point: self.generator.clone(),
            point_public: self.public_point.clone(),
            hash_function: self.hash.name().to_owned(),
        }
    }

    pub fn master_secret(&self) -> MasterSecret {
        MasterSecret {
            secret: self.master_secret.clone(),
        }
    }
}

#[cfg(test)]
mod test_toy_system {
    use super::ToySystem;
    use crate::elliptic_curve::AffinePoint;
    use num_bigint_dig::BigUint;

    /// Ensures that the fixture is consistent
    #[test]
    fn consistent() {
        let system = ToySystem::new();

        assert_eq!(
            &system.p,
            &(BigUint::from(12u32 * 33) * &system.q - BigUint::from(1u32))
        );
        assert_eq!(73, system.p.bits() as usize);
        assert!(system.curve.is_on_curve(&system.generator));
        assert_eq!(
            AffinePoint::Infinity,
            system.generator.multiply(&system.q, &system.curve)
        );
        assert_eq!(
            system.public_point,
            system
                .generator
                .multiply(&system.master_secret, &system.curve)
        );
    }
}
