//! Points on a short Weierstrass curve
//!
//! Public operations work on affine [`Point`]s; sums and multiples are
//! computed in Jacobian coordinates `(X : Y : Z)` with `x = X/Z^2`,
//! `y = Y/Z^3`, converting back with a single inversion.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use super::curve::CurveFp;
use crate::error::{Error, Result};
use ecsig_utils::int_to_fixed_bytes;

/// Format of a serialized point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointEncoding {
    /// `x || y` with no prefix
    Raw,
    /// `0x04 || x || y`
    Uncompressed,
    /// `0x02 | (y & 1) || x`
    Compressed,
    /// `0x06 | (y & 1) || x || y`
    Hybrid,
}

/// A point on a curve: the identity, or affine coordinates satisfying the
/// curve equation
#[derive(Clone, Debug)]
pub struct Point<'c> {
    curve: &'c CurveFp,
    coords: Option<(BigUint, BigUint)>,
    order: Option<BigUint>,
}

impl<'c> Point<'c> {
    /// The point at infinity on `curve`
    pub fn identity(curve: &'c CurveFp) -> Self {
        Self {
            curve,
            coords: None,
            order: None,
        }
    }

    /// Validate `(x, y)` against the curve equation.
    ///
    /// `order`, when given, is used to reduce scalars in [`Point::mul`].
    pub fn new(curve: &'c CurveFp, x: BigUint, y: BigUint, order: Option<BigUint>) -> Result<Self> {
        if !curve.contains_point(&x, &y) {
            return Err(Error::point("point construction", "coordinates do not satisfy the curve equation"));
        }
        Ok(Self::from_affine_unchecked(curve, x, y, order))
    }

    pub(crate) fn from_affine_unchecked(
        curve: &'c CurveFp,
        x: BigUint,
        y: BigUint,
        order: Option<BigUint>,
    ) -> Self {
        Self {
            curve,
            coords: Some((x, y)),
            order,
        }
    }

    pub fn curve(&self) -> &'c CurveFp {
        self.curve
    }

    pub fn order(&self) -> Option<&BigUint> {
        self.order.as_ref()
    }

    pub fn is_identity(&self) -> bool {
        self.coords.is_none()
    }

    /// Affine x-coordinate; `None` for the identity
    pub fn x(&self) -> Option<&BigUint> {
        self.coords.as_ref().map(|(x, _)| x)
    }

    /// Affine y-coordinate; `None` for the identity
    pub fn y(&self) -> Option<&BigUint> {
        self.coords.as_ref().map(|(_, y)| y)
    }

    /// Whether the point is the identity or satisfies the curve equation
    pub fn is_on_curve(&self) -> bool {
        match &self.coords {
            None => true,
            Some((x, y)) => self.curve.contains_point(x, y),
        }
    }

    pub fn negate(&self) -> Self {
        match &self.coords {
            None => self.clone(),
            Some((x, y)) => Self {
                curve: self.curve,
                coords: Some((x.clone(), self.curve.field().neg(y))),
                order: self.order.clone(),
            },
        }
    }

    /// `self + other`.
    ///
    /// Handles the identity on either side, `P + (-P)` and `P + P`.
    pub fn add(&self, other: &Point<'c>) -> Self {
        let sum = Jacobian::from_point(self).add(&Jacobian::from_point(other), self.curve);
        sum.into_point(self.curve, self.order.clone().or_else(|| other.order.clone()))
    }

    /// `2 * self`
    pub fn double(&self) -> Self {
        Jacobian::from_point(self)
            .double(self.curve)
            .into_point(self.curve, self.order.clone())
    }

    /// `k * self`, with `k` first reduced modulo the point's order when it
    /// is known. `k = 0` gives the identity.
    ///
    /// Montgomery ladder: one addition and one doubling per bit of `k`.
    pub fn mul(&self, k: &BigUint) -> Self {
        match &self.order {
            Some(n) => self.ladder(&(k % n)),
            None => self.ladder(k),
        }
    }

    /// `k * self` without reducing `k`; used to check subgroup membership
    pub fn mul_unreduced(&self, k: &BigUint) -> Self {
        self.ladder(k)
    }

    fn ladder(&self, k: &BigUint) -> Self {
        if self.is_identity() || k.is_zero() {
            return Self {
                curve: self.curve,
                coords: None,
                order: self.order.clone(),
            };
        }

        let mut r0 = Jacobian::identity();
        let mut r1 = Jacobian::from_point(self);
        for i in (0..k.bits()).rev() {
            if k.bit(i) {
                r0 = r0.add(&r1, self.curve);
                r1 = r1.double(self.curve);
            } else {
                r1 = r0.add(&r1, self.curve);
                r0 = r0.double(self.curve);
            }
        }
        r0.into_point(self.curve, self.order.clone())
    }

    /// `k1 * self + k2 * other` by interleaved double-and-add.
    ///
    /// Not constant-time; only for public scalars such as those in
    /// signature verification.
    pub fn mul_add(&self, k1: &BigUint, other: &Point<'c>, k2: &BigUint) -> Self {
        let order = self.order.clone().or_else(|| other.order.clone());
        let (k1, k2) = match &order {
            Some(n) => (k1 % n, k2 % n),
            None => (k1.clone(), k2.clone()),
        };

        let p = Jacobian::from_point(self);
        let q = Jacobian::from_point(other);
        let pq = p.add(&q, self.curve);

        let mut acc = Jacobian::identity();
        for i in (0..k1.bits().max(k2.bits())).rev() {
            acc = acc.double(self.curve);
            match (k1.bit(i), k2.bit(i)) {
                (true, true) => acc = acc.add(&pq, self.curve),
                (true, false) => acc = acc.add(&p, self.curve),
                (false, true) => acc = acc.add(&q, self.curve),
                (false, false) => {}
            }
        }
        acc.into_point(self.curve, order)
    }

    /// Serialize in the requested format; the identity has no encoding
    pub fn to_bytes(&self, encoding: PointEncoding) -> Result<Vec<u8>> {
        let (x, y) = self
            .coords
            .as_ref()
            .ok_or_else(|| Error::point("point encoding", "the identity cannot be encoded"))?;

        let len = self.curve.coordinate_len();
        let xb = int_to_fixed_bytes(x, len).map_err(|_| Error::point("point encoding", "x out of range"))?;
        let yb = int_to_fixed_bytes(y, len).map_err(|_| Error::point("point encoding", "y out of range"))?;
        let odd = y.is_odd() as u8;

        let mut out = Vec::with_capacity(2 * len + 1);
        match encoding {
            PointEncoding::Raw => {}
            PointEncoding::Uncompressed => out.push(0x04),
            PointEncoding::Compressed => out.push(0x02 | odd),
            PointEncoding::Hybrid => out.push(0x06 | odd),
        }
        out.extend_from_slice(&xb);
        if encoding != PointEncoding::Compressed {
            out.extend_from_slice(&yb);
        }
        Ok(out)
    }

    /// Parse any of the [`PointEncoding`] formats, detected from the length
    /// and prefix byte, and validate the result.
    pub fn from_bytes(curve: &'c CurveFp, bytes: &[u8], order: Option<BigUint>) -> Result<Self> {
        let (format, body) = detect_encoding(curve, bytes)?;
        let len = curve.coordinate_len();
        let x = BigUint::from_bytes_be(&body[..len]);
        if x >= *curve.p() {
            return Err(Error::point("point decoding", "x-coordinate not below p"));
        }

        let y = match format {
            PointEncoding::Compressed => {
                let root = curve
                    .field()
                    .sqrt(&curve.rhs(&x))
                    .map_err(|_| Error::point("point decoding", "x is not the abscissa of a curve point"))?;
                let want_odd = bytes[0] == 0x03;
                if root.is_odd() == want_odd {
                    root
                } else {
                    curve.field().neg(&root)
                }
            }
            _ => BigUint::from_bytes_be(&body[len..]),
        };

        if format == PointEncoding::Hybrid && y.is_odd() != (bytes[0] == 0x07) {
            return Err(Error::point("point decoding", "hybrid prefix disagrees with y parity"));
        }

        Self::new(curve, x, y, order)
    }
}

/// Work out the format of `bytes` and return it with the coordinate payload
fn detect_encoding<'b>(curve: &CurveFp, bytes: &'b [u8]) -> Result<(PointEncoding, &'b [u8])> {
    let len = curve.coordinate_len();
    match (bytes.len(), bytes.first().copied()) {
        (n, _) if n == 2 * len => Ok((PointEncoding::Raw, bytes)),
        (n, Some(0x04)) if n == 2 * len + 1 => Ok((PointEncoding::Uncompressed, &bytes[1..])),
        (n, Some(0x06 | 0x07)) if n == 2 * len + 1 => Ok((PointEncoding::Hybrid, &bytes[1..])),
        (n, Some(0x02 | 0x03)) if n == len + 1 => Ok((PointEncoding::Compressed, &bytes[1..])),
        (n, Some(prefix)) if n == 2 * len + 1 || n == len + 1 => Err(Error::encoding(
            "point encoding",
            format!("unknown prefix byte 0x{:02x}", prefix),
        )),
        (n, _) => Err(Error::encoding(
            "point encoding",
            format!("length {} matches no format for a {}-byte field", n, len),
        )),
    }
}

impl PartialEq for Point<'_> {
    fn eq(&self, other: &Self) -> bool {
        (core::ptr::eq(self.curve, other.curve) || self.curve == other.curve)
            && self.coords == other.coords
    }
}

impl Eq for Point<'_> {}

/// Jacobian projective point; `z == 0` marks the identity
#[derive(Clone, Debug)]
struct Jacobian {
    x: BigUint,
    y: BigUint,
    z: BigUint,
}

impl Jacobian {
    fn identity() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::from(1u32),
            z: BigUint::zero(),
        }
    }

    fn from_point(p: &Point<'_>) -> Self {
        match &p.coords {
            None => Self::identity(),
            Some((x, y)) => Self {
                x: x.clone(),
                y: y.clone(),
                z: BigUint::from(1u32),
            },
        }
    }

    fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Doubling for a general `a`:
    /// `S = 4XY^2`, `M = 3X^2 + aZ^4`, `X' = M^2 - 2S`,
    /// `Y' = M(S - X') - 8Y^4`, `Z' = 2YZ`
    fn double(&self, curve: &CurveFp) -> Self {
        if self.is_identity() || self.y.is_zero() {
            return Self::identity();
        }
        let f = curve.field();

        let yy = f.square(&self.y);
        let s = f.mul_u32(&f.mul(&self.x, &yy), 4);
        let zz = f.square(&self.z);
        let m = f.add(
            &f.mul_u32(&f.square(&self.x), 3),
            &f.mul(curve.a(), &f.square(&zz)),
        );

        let x3 = f.sub(&f.square(&m), &f.mul_u32(&s, 2));
        let y3 = f.sub(&f.mul(&m, &f.sub(&s, &x3)), &f.mul_u32(&f.square(&yy), 8));
        let z3 = f.mul_u32(&f.mul(&self.y, &self.z), 2);

        Self { x: x3, y: y3, z: z3 }
    }

    fn add(&self, other: &Self, curve: &CurveFp) -> Self {
        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }
        let f = curve.field();

        let z1z1 = f.square(&self.z);
        let z2z2 = f.square(&other.z);
        let u1 = f.mul(&self.x, &z2z2);
        let u2 = f.mul(&other.x, &z1z1);
        let s1 = f.mul(&f.mul(&self.y, &other.z), &z2z2);
        let s2 = f.mul(&f.mul(&other.y, &self.z), &z1z1);

        if u1 == u2 {
            return if s1 == s2 {
                self.double(curve)
            } else {
                Self::identity()
            };
        }

        let h = f.sub(&u2, &u1);
        let r = f.sub(&s2, &s1);
        let h2 = f.square(&h);
        let h3 = f.mul(&h2, &h);
        let v = f.mul(&u1, &h2);

        let x3 = f.sub(&f.sub(&f.square(&r), &h3), &f.mul_u32(&v, 2));
        let y3 = f.sub(&f.mul(&r, &f.sub(&v, &x3)), &f.mul(&s1, &h3));
        let z3 = f.mul(&f.mul(&self.z, &other.z), &h);

        Self { x: x3, y: y3, z: z3 }
    }

    fn into_point<'c>(self, curve: &'c CurveFp, order: Option<BigUint>) -> Point<'c> {
        if self.is_identity() {
            return Point {
                curve,
                coords: None,
                order,
            };
        }
        let f = curve.field();
        let z_inv = f.invert_nonzero(&self.z);
        let z_inv2 = f.square(&z_inv);
        let x = f.mul(&self.x, &z_inv2);
        let y = f.mul(&self.y, &f.mul(&z_inv2, &z_inv));
        Point::from_affine_unchecked(curve, x, y, order)
    }
}
