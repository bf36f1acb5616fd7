// Copyright © 2024 The bf-ibe Authors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains distortion maps, which move a point of `E(F_p)`
//! to a linearly independent point of `E(F_p^2)`.

use crate::{
    complex::Complex,
    elliptic_curve::{AffinePoint, ComplexAffinePoint, TypeOneEllipticCurve},
};
use num_bigint_dig::BigUint;
use num_traits::One;
use serde::{Deserialize, Serialize};

/// This trait should be implemented by all distortion maps that can be
/// used in a [`TatePairing`](super::TatePairing).
///
/// Parameters:
/// - `point`: a point of the base field curve
///
/// Returns the image of `point` in `E(F_p^2)`.
#[typetag::serde]
pub trait DistortionMap: Send + Sync {
    fn apply(&self, point: &AffinePoint) -> ComplexAffinePoint;

    /// Returns the prime `p` of the base field the map works over.
    fn field_order(&self) -> &BigUint;
}

/// The distortion map `(x, y) -> (ξx, y)` for curves `y^2 = x^3 + 1`,
/// where `ξ` is a primitive cube root of unity in `F_p^2`.
///
/// Attributes:
/// - `field_order`: the prime `p`
/// - `xi`: the cube root of unity `ξ = ((p - 1) / 2) · (1 + 3^((p + 1) / 4) i)`
///
/// # Examples
/// ```
/// use bf_ibe::complex::Complex;
/// use bf_ibe::elliptic_curve::TypeOneEllipticCurve;
/// use bf_ibe::elliptic_curve::pairing::XiDistortionMap;
/// use num_bigint_dig::BigUint;
///
/// let p = BigUint::from(59u32);
/// let curve = TypeOneEllipticCurve::of_order(p.clone()).unwrap();
/// let map = XiDistortionMap::new(&curve);
///
/// assert_eq!(Complex::one(), map.xi().mod_pow(&BigUint::from(3u32), &p));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XiDistortionMap {
    field_order: BigUint,
    xi: Complex,
}

impl XiDistortionMap {
    /// Precomputes `ξ` for the field of `curve`.
    pub fn new(curve: &TypeOneEllipticCurve) -> Self {
        let p = curve.field_order().clone();
        let half = (&p - BigUint::one()) >> 1usize;
        let root = BigUint::from(3u32).modpow(&((&p + BigUint::one()) >> 2usize), &p);
        let xi = Complex::new(BigUint::one(), root).mod_mul_scalar(&half, &p);

        Self { field_order: p, xi }
    }

    /// Returns the cube root of unity `ξ`.
    pub fn xi(&self) -> &Complex {
        &self.xi
    }
}

#[typetag::serde]
impl DistortionMap for XiDistortionMap {
    /// Maps `(x, y)` to `(ξx, y)` and the point at infinity to itself.
    fn apply(&self, point: &AffinePoint) -> ComplexAffinePoint {
        match point {
            AffinePoint::Infinity => ComplexAffinePoint::Infinity,
            AffinePoint::Finite { x, y } => ComplexAffinePoint::new(
                self.xi.mod_mul_scalar(x, &self.field_order),
                Complex::from_real(y % &self.field_order),
            ),
        }
    }

    fn field_order(&self) -> &BigUint {
        &self.field_order
    }
}

#[cfg(test)]
mod test_xi_distortion_map {
    use super::{DistortionMap, XiDistortionMap};
    use crate::{
        complex::Complex,
        elliptic_curve::{AffinePoint, ComplexAffinePoint},
        test_fixture::ToySystem,
    };
    use num_bigint_dig::BigUint;

    /// Ensures that `ξ` is a non-trivial cube root of unity
    #[test]
    fn xi_is_cube_root_of_unity() {
        let system = ToySystem::new();
        let map = XiDistortionMap::new(&system.curve);

        assert_eq!(
            &Complex::new(
                "3652455326594491169081".parse().unwrap(),
                "571793463662696109677".parse().unwrap()
            ),
            map.xi()
        );
        assert_ne!(&Complex::one(), map.xi());
        assert_eq!(Complex::one(), map.xi().mod_pow(&BigUint::from(3u32), &system.p));
    }

    /// Ensures that images lie on the curve over the extension field
    #[test]
    fn image_on_curve() {
        let system = ToySystem::new();
        let map = XiDistortionMap::new(&system.curve);

        let image = map.apply(&system.generator);

        assert!(image.is_on_curve(&system.curve));
        assert_eq!(
            Some(&Complex::from_real(system.generator.y().unwrap().clone())),
            image.y()
        );
        assert_ne!(&BigUint::from(0u32), image.x().unwrap().imaginary());
    }

    /// Ensures that the map is a homomorphism
    #[test]
    fn homomorphism() {
        let system = ToySystem::new();
        let map = XiDistortionMap::new(&system.curve);
        let a = system.generator.multiply(&BigUint::from(5u32), &system.curve);
        let b = system.generator.multiply(&BigUint::from(9u32), &system.curve);

        assert_eq!(
            map.apply(&a.add(&b, &system.curve)),
            map.apply(&a).add(&map.apply(&b), &system.curve).unwrap()
        );
    }

    /// Ensures that the point at infinity is mapped to itself
    #[test]
    fn infinity() {
        let system = ToySystem::new();
        let map = XiDistortionMap::new(&system.curve);

        assert_eq!(ComplexAffinePoint::Infinity, map.apply(&AffinePoint::Infinity));
    }
}
