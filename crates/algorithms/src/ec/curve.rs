//! Short Weierstrass curves and the named-curve descriptor

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::field::PrimeField;
use super::point::Point;
use crate::error::{validate, Error, Result};
use ecsig_params::traditional::ecdsa::NamedCurveParams;

/// The curve `y^2 = x^3 + ax + b` over `GF(p)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveFp {
    field: PrimeField,
    a: BigUint,
    b: BigUint,
}

impl CurveFp {
    /// Build a curve from untrusted parameters.
    ///
    /// Rejects singular curves (`4a^3 + 27b^2 ≡ 0`). Primality of `p` is not
    /// checked.
    pub fn new(p: BigUint, a: BigUint, b: BigUint) -> Result<Self> {
        let field = PrimeField::new(p)?;
        let a = field.reduce(&a);
        let b = field.reduce(&b);

        let a3 = field.mul(&field.square(&a), &a);
        let disc = field.add(&field.mul_u32(&a3, 4), &field.mul_u32(&field.square(&b), 27));
        validate::parameter(!disc.is_zero(), "curve", "singular curve")?;

        Ok(Self { field, a, b })
    }

    pub(crate) fn from_trusted(p: BigUint, a: BigUint, b: BigUint) -> Self {
        Self {
            field: PrimeField::from_trusted(p),
            a,
            b,
        }
    }

    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    pub fn p(&self) -> &BigUint {
        self.field.modulus()
    }

    pub fn a(&self) -> &BigUint {
        &self.a
    }

    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Byte length of one encoded coordinate
    pub fn coordinate_len(&self) -> usize {
        self.field.byte_len()
    }

    /// `x^3 + ax + b mod p`
    pub fn rhs(&self, x: &BigUint) -> BigUint {
        let f = &self.field;
        let x3 = f.mul(&f.square(x), x);
        f.add(&f.add(&x3, &f.mul(&self.a, x)), &self.b)
    }

    /// Whether `(x, y)` satisfies the curve equation with both coordinates
    /// in `[0, p)`
    pub fn contains_point(&self, x: &BigUint, y: &BigUint) -> bool {
        let p = self.p();
        x < p && y < p && self.field.square(y) == self.rhs(x)
    }
}

/// A named curve from the registry: equation, base point, order and the
/// identifiers used in key encodings
#[derive(Debug)]
pub struct Curve {
    name: &'static str,
    openssl_name: &'static str,
    oid: &'static [u64],
    curve: CurveFp,
    gx: BigUint,
    gy: BigUint,
    order: BigUint,
    cofactor: BigUint,
    baselen: usize,
}

fn parse_hex(value: &'static str) -> BigUint {
    BigUint::parse_bytes(value.as_bytes(), 16).expect("curve constants are valid hex")
}

impl Curve {
    pub(crate) fn from_params(params: &NamedCurveParams) -> Self {
        let order = parse_hex(params.n);
        let baselen = ecsig_utils::orderlen(&order);
        Self {
            name: params.name,
            openssl_name: params.openssl_name,
            oid: params.oid,
            curve: CurveFp::from_trusted(parse_hex(params.p), parse_hex(params.a), parse_hex(params.b)),
            gx: parse_hex(params.gx),
            gy: parse_hex(params.gy),
            order,
            cofactor: BigUint::from(params.h),
            baselen,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn openssl_name(&self) -> &'static str {
        self.openssl_name
    }

    pub fn oid(&self) -> &'static [u64] {
        self.oid
    }

    /// The curve equation
    pub fn curve(&self) -> &CurveFp {
        &self.curve
    }

    /// Order `n` of the generator
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    pub fn cofactor(&self) -> &BigUint {
        &self.cofactor
    }

    /// Byte length of `n`; the width of secret exponents and of `r`, `s`
    pub fn baselen(&self) -> usize {
        self.baselen
    }

    /// The base point `G`, carrying the group order
    pub fn generator(&self) -> Point<'_> {
        Point::from_affine_unchecked(
            &self.curve,
            self.gx.clone(),
            self.gy.clone(),
            Some(self.order.clone()),
        )
    }

    /// Validate untrusted affine coordinates as a point of this curve's
    /// prime-order subgroup.
    ///
    /// The order check is skipped for cofactor-one curves, where every curve
    /// point already lies in the subgroup.
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<Point<'_>> {
        let point = Point::new(&self.curve, x, y, Some(self.order.clone()))?;
        if !self.cofactor.is_one() && !point.mul_unreduced(&self.order).is_identity() {
            return Err(Error::point("curve point", "not in the prime-order subgroup"));
        }
        Ok(point)
    }

    /// Decode a SEC1 / raw point encoding and validate it as with
    /// [`Curve::point`]
    pub fn decode_point(&self, bytes: &[u8]) -> Result<Point<'_>> {
        let point = Point::from_bytes(&self.curve, bytes, Some(self.order.clone()))?;
        if !self.cofactor.is_one() && !point.mul_unreduced(&self.order).is_identity() {
            return Err(Error::point("curve point", "not in the prime-order subgroup"));
        }
        Ok(point)
    }

    /// Whether `k` is a valid secret scalar, i.e. in `[1, n-1]`
    pub fn is_valid_scalar(&self, k: &BigUint) -> bool {
        !k.is_zero() && *k < self.order
    }
}

impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.oid == other.oid
    }
}

impl Eq for Curve {}

impl core::fmt::Display for Curve {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name)
    }
}
