//! Arithmetic modulo a prime
//!
//! Elements are plain `BigUint` values. Every operation reduces its inputs
//! and returns a value in `[0, p)`, so callers may pass unreduced integers.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{validate, Error, Result};

/// The field `GF(p)` for an odd prime `p`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    p: BigUint,
}

impl PrimeField {
    /// Create the field for modulus `p`.
    ///
    /// Only checks that `p` is odd and greater than 3; primality is trusted.
    pub fn new(p: BigUint) -> Result<Self> {
        validate::parameter(p > BigUint::from(3u32), "p", "modulus must exceed 3")?;
        validate::parameter(p.is_odd(), "p", "modulus must be odd")?;
        Ok(Self { p })
    }

    pub(crate) fn from_trusted(p: BigUint) -> Self {
        Self { p }
    }

    /// The modulus
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// Byte length of a fixed-width field element
    pub fn byte_len(&self) -> usize {
        ecsig_utils::orderlen(&self.p)
    }

    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.p
    }

    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.p
    }

    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let b = b % &self.p;
        (a % &self.p + &self.p - b) % &self.p
    }

    pub fn neg(&self, a: &BigUint) -> BigUint {
        self.sub(&BigUint::zero(), a)
    }

    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.p
    }

    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// Small-constant multiple, used by the point formulas
    pub fn mul_u32(&self, a: &BigUint, k: u32) -> BigUint {
        (a * k) % &self.p
    }

    pub fn pow(&self, a: &BigUint, e: &BigUint) -> BigUint {
        a.modpow(e, &self.p)
    }

    /// `a^-1 mod p`, or [`Error::Arithmetic`] when `a ≡ 0`
    pub fn invert(&self, a: &BigUint) -> Result<BigUint> {
        let a = self.reduce(a);
        if a.is_zero() {
            return Err(Error::Arithmetic {
                operation: "field inversion",
                details: "zero has no inverse".into(),
            });
        }
        Ok(self.invert_nonzero(&a))
    }

    /// Fermat inversion for a value already known to be non-zero
    pub(crate) fn invert_nonzero(&self, a: &BigUint) -> BigUint {
        let e = &self.p - 2u32;
        a.modpow(&e, &self.p)
    }

    /// Whether `a` is a square (zero counts as a square)
    pub fn is_square(&self, a: &BigUint) -> bool {
        jacobi_unchecked(&self.reduce(a), &self.p) >= 0
    }

    /// A square root of `a`; see [`sqrt_mod_p`]
    pub fn sqrt(&self, a: &BigUint) -> Result<BigUint> {
        sqrt_mod_p(a, &self.p)
    }
}

/// Low 32 bits of `n`
fn low_u32(n: &BigUint) -> u32 {
    n.iter_u32_digits().next().unwrap_or(0)
}

/// `n` must be odd and greater than 2
fn check_odd_modulus(n: &BigUint, context: &'static str) -> Result<()> {
    validate::parameter(*n > BigUint::from(2u32), context, "modulus must exceed 2")?;
    validate::parameter(n.is_odd(), context, "modulus must be odd")
}

/// Jacobi symbol `(a/n)` for odd `n > 2`
pub fn jacobi(a: &BigUint, n: &BigUint) -> Result<i8> {
    check_odd_modulus(n, "jacobi")?;
    Ok(jacobi_unchecked(a, n))
}

fn jacobi_unchecked(a: &BigUint, n: &BigUint) -> i8 {
    let mut a = a % n;
    let mut n = n.clone();
    let mut result = 1i8;

    while !a.is_zero() {
        while a.is_even() {
            a >>= 1u32;
            let r = low_u32(&n) & 7;
            if r == 3 || r == 5 {
                result = -result;
            }
        }
        core::mem::swap(&mut a, &mut n);
        if low_u32(&a) & 3 == 3 && low_u32(&n) & 3 == 3 {
            result = -result;
        }
        a %= &n;
    }

    if n.is_one() {
        result
    } else {
        0
    }
}

/// Inverse of `a` modulo any `m > 1` by the extended Euclidean algorithm.
///
/// Used for scalar arithmetic modulo the group order.
pub fn inverse_mod(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    validate::parameter(*m > BigUint::one(), "m", "modulus must exceed 1")?;

    let a = a % m;
    if a.is_zero() {
        return Err(Error::Arithmetic {
            operation: "inverse_mod",
            details: "zero has no inverse".into(),
        });
    }

    let modulus = BigInt::from(m.clone());
    let (mut old_r, mut r) = (BigInt::from(a), modulus.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = core::mem::replace(&mut r, next_r);
        let next_s = &old_s - &q * &s;
        old_s = core::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return Err(Error::Arithmetic {
            operation: "inverse_mod",
            details: "value shares a factor with the modulus".into(),
        });
    }

    old_s
        .mod_floor(&modulus)
        .to_biguint()
        .ok_or(Error::Other("inverse_mod produced a negative residue"))
}

/// Square root of `a` modulo the prime `p`.
///
/// Uses `a^((p+1)/4)` when `p ≡ 3 (mod 4)`, Atkin's method when
/// `p ≡ 5 (mod 8)` and Tonelli-Shanks otherwise. Non-residues give
/// [`Error::NoSquareRoot`].
pub fn sqrt_mod_p(a: &BigUint, p: &BigUint) -> Result<BigUint> {
    check_odd_modulus(p, "sqrt_mod_p")?;
    let a = a % p;
    if a.is_zero() {
        return Ok(a);
    }
    if jacobi_unchecked(&a, p) != 1 {
        return Err(Error::NoSquareRoot {
            context: "sqrt_mod_p",
        });
    }

    let root = match low_u32(p) & 7 {
        3 | 7 => {
            let e = (p + 1u32) >> 2u32;
            a.modpow(&e, p)
        }
        5 => {
            let d = a.modpow(&((p - 1u32) >> 2u32), p);
            if d.is_one() {
                a.modpow(&((p + 3u32) >> 3u32), p)
            } else {
                // d == p - 1
                let four_a = (&a * 4u32) % p;
                let t = four_a.modpow(&((p - 5u32) >> 3u32), p);
                (&a * 2u32 * t) % p
            }
        }
        _ => tonelli_shanks(&a, p)?,
    };

    if (&root * &root) % p != a {
        return Err(Error::NoSquareRoot {
            context: "sqrt_mod_p",
        });
    }
    Ok(root)
}

fn tonelli_shanks(a: &BigUint, p: &BigUint) -> Result<BigUint> {
    let one = BigUint::one();
    let p_minus_one = p - 1u32;

    // p - 1 = q * 2^s with q odd
    let s = p_minus_one.trailing_zeros().unwrap_or(0);
    let q = &p_minus_one >> s;

    let mut z = BigUint::from(2u32);
    while jacobi_unchecked(&z, p) != -1 {
        z += 1u32;
        if z >= *p {
            return Err(Error::NoSquareRoot {
                context: "tonelli_shanks",
            });
        }
    }

    let mut m = s;
    let mut c = z.modpow(&q, p);
    let mut t = a.modpow(&q, p);
    let mut r = a.modpow(&((&q + 1u32) >> 1u32), p);

    while t != one {
        let mut i = 0u64;
        let mut t2 = t.clone();
        while t2 != one {
            t2 = (&t2 * &t2) % p;
            i += 1;
            if i == m {
                return Err(Error::NoSquareRoot {
                    context: "tonelli_shanks",
                });
            }
        }

        let mut b = c.clone();
        for _ in 0..(m - i - 1) {
            b = (&b * &b) % p;
        }
        m = i;
        c = (&b * &b) % p;
        t = (&t * &c) % p;
        r = (&r * &b) % p;
    }

    Ok(r)
}
