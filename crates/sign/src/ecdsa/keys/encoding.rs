//! DER containers for EC keys: SubjectPublicKeyInfo (RFC 5480),
//! ECPrivateKey (RFC 5915) and PKCS#8 PrivateKeyInfo (RFC 5208)

use ecsig_algorithms::ec::{curve_by_oid, Curve};
use ecsig_algorithms::encoding::der;
use ecsig_api::Result;
use ecsig_params::traditional::ecdsa::{
    EC_PRIVATE_KEY_VERSION, ID_EC_PUBLIC_KEY_OID, PKCS8_VERSION,
};
use num_bigint::BigUint;

use crate::error::Error;

/// Which container a private key is serialized in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PrivateKeyFormat {
    /// RFC 5915 `ECPrivateKey`, PEM label `EC PRIVATE KEY`
    #[default]
    Sec1,
    /// PKCS#8 `PrivateKeyInfo`, PEM label `PRIVATE KEY`
    Pkcs8,
}

/// Fields recovered from an `ECPrivateKey`
pub(crate) struct ParsedPrivateKey<'a> {
    pub(crate) curve: &'static Curve,
    pub(crate) secret: &'a [u8],
    pub(crate) public_point: Option<&'a [u8]>,
}

fn ensure_consumed(rest: &[u8], context: &'static str) -> Result<()> {
    if !rest.is_empty() {
        return Err(Error::encoding(context, "trailing bytes").into());
    }
    Ok(())
}

fn expect_version<'a>(body: &'a [u8], version: u8, context: &'static str) -> Result<&'a [u8]> {
    let (found, rest) = der::remove_integer(body)?;
    if found != BigUint::from(version) {
        return Err(Error::encoding(context, format!("unsupported version {}", found)).into());
    }
    Ok(rest)
}

/// `SEQUENCE { id-ecPublicKey, namedCurve }`
fn encode_algorithm(curve: &Curve) -> Result<Vec<u8>> {
    Ok(der::encode_sequence([
        der::encode_oid(ID_EC_PUBLIC_KEY_OID)?,
        der::encode_oid(curve.oid())?,
    ]))
}

fn decode_algorithm(data: &[u8]) -> Result<(&'static Curve, &[u8])> {
    let (algorithm, rest) = der::decode_sequence(data)?;
    let (key_type, params) = der::decode_oid(algorithm)?;
    if key_type != ID_EC_PUBLIC_KEY_OID {
        return Err(Error::encoding("algorithm identifier", "not an id-ecPublicKey key").into());
    }
    let (curve_oid, trailing) = der::decode_oid(params)?;
    ensure_consumed(trailing, "algorithm identifier")?;
    Ok((curve_by_oid(&curve_oid)?, rest))
}

pub(crate) fn encode_spki(curve: &Curve, point: &[u8]) -> Result<Vec<u8>> {
    Ok(der::encode_sequence([
        encode_algorithm(curve)?,
        der::encode_bitstring(point, 0)?,
    ]))
}

/// Returns the curve and the encoded point
pub(crate) fn decode_spki(data: &[u8]) -> Result<(&'static Curve, &[u8])> {
    let (body, rest) = der::decode_sequence(data)?;
    ensure_consumed(rest, "subject public key info")?;
    let (curve, body) = decode_algorithm(body)?;
    let (point, body) = der::decode_bitstring(body, 0)?;
    ensure_consumed(body, "subject public key info")?;
    Ok((curve, point))
}

/// `ECPrivateKey` with both optional fields present
pub(crate) fn encode_ec_private_key(curve: &Curve, secret: &[u8], point: &[u8]) -> Result<Vec<u8>> {
    Ok(der::encode_sequence([
        der::encode_unsigned(&BigUint::from(EC_PRIVATE_KEY_VERSION)),
        der::encode_octet_string(secret),
        der::encode_constructed(0, &der::encode_oid(curve.oid())?)?,
        der::encode_constructed(1, &der::encode_bitstring(point, 0)?)?,
    ]))
}

/// Parse an `ECPrivateKey`.
///
/// `outer_curve` comes from an enclosing PKCS#8 algorithm identifier; when
/// the structure also names a curve the two must agree.
pub(crate) fn decode_ec_private_key<'a>(
    data: &'a [u8],
    outer_curve: Option<&'static Curve>,
) -> Result<ParsedPrivateKey<'a>> {
    let (body, rest) = der::decode_sequence(data)?;
    ensure_consumed(rest, "ec private key")?;
    let body = expect_version(body, EC_PRIVATE_KEY_VERSION, "ec private key")?;
    let (secret, mut body) = der::decode_octet_string(body)?;

    let mut curve = outer_curve;
    let mut public_point = None;
    let mut last_tag = None;
    while !body.is_empty() {
        let (tag, value, rest) = der::decode_constructed(body)?;
        if last_tag.map_or(false, |prev| tag <= prev) {
            return Err(Error::encoding("ec private key", "optional fields out of order").into());
        }
        last_tag = Some(tag);
        match tag {
            0 => {
                let (oid, trailing) = der::decode_oid(value)?;
                ensure_consumed(trailing, "ec private key parameters")?;
                let named = curve_by_oid(&oid)?;
                if let Some(expected) = curve {
                    if expected != named {
                        return Err(Error::CurveMismatch {
                            expected: expected.name(),
                            actual: named.name(),
                        }
                        .into());
                    }
                }
                curve = Some(named);
            }
            1 => {
                let (point, trailing) = der::decode_bitstring(value, 0)?;
                ensure_consumed(trailing, "ec private key public key")?;
                public_point = Some(point);
            }
            _ => {
                return Err(Error::encoding(
                    "ec private key",
                    format!("unexpected field [{}]", tag),
                )
                .into())
            }
        }
        body = rest;
    }

    let curve = curve.ok_or_else(|| Error::encoding("ec private key", "no curve parameters"))?;
    Ok(ParsedPrivateKey {
        curve,
        secret,
        public_point,
    })
}

pub(crate) fn encode_pkcs8(curve: &Curve, ec_private_key: &[u8]) -> Result<Vec<u8>> {
    Ok(der::encode_sequence([
        der::encode_unsigned(&BigUint::from(PKCS8_VERSION)),
        encode_algorithm(curve)?,
        der::encode_octet_string(ec_private_key),
    ]))
}

/// Unwrap a PKCS#8 `PrivateKeyInfo`; returns the curve and the inner
/// `ECPrivateKey` bytes. Trailing attributes are not supported.
pub(crate) fn decode_pkcs8(data: &[u8]) -> Result<(&'static Curve, &[u8])> {
    let (body, rest) = der::decode_sequence(data)?;
    ensure_consumed(rest, "pkcs8")?;
    let body = expect_version(body, PKCS8_VERSION, "pkcs8")?;
    let (curve, body) = decode_algorithm(body)?;
    let (inner, body) = der::decode_octet_string(body)?;
    ensure_consumed(body, "pkcs8")?;
    Ok((curve, inner))
}

/// Tell the two private-key containers apart: PKCS#8 carries an
/// AlgorithmIdentifier SEQUENCE right after the version, RFC 5915 an
/// OCTET STRING
pub(crate) fn detect_private_format(data: &[u8]) -> Result<PrivateKeyFormat> {
    let (body, _) = der::decode_sequence(data)?;
    let (_, after_version) = der::remove_integer(body)?;
    match after_version.first() {
        Some(&der::TAG_SEQUENCE) => Ok(PrivateKeyFormat::Pkcs8),
        Some(&der::TAG_OCTET_STRING) => Ok(PrivateKeyFormat::Sec1),
        _ => Err(Error::encoding("private key", "neither ECPrivateKey nor PKCS#8").into()),
    }
}
