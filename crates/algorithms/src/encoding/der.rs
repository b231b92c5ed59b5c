//! Strict DER for the handful of ASN.1 types used by ECDSA keys and
//! signatures
//!
//! Encoders always emit the canonical form. Decoders take a buffer that may
//! hold more than one element, return `(value, rest)`, and reject anything
//! that is not minimal DER: indefinite or padded lengths, redundant leading
//! bytes in INTEGERs, non-minimal OID arcs, truncated input.

use num_bigint::{BigInt, BigUint, Sign};

use crate::error::{validate, Error, Result};

pub const TAG_INTEGER: u8 = 0x02;
pub const TAG_BIT_STRING: u8 = 0x03;
pub const TAG_OCTET_STRING: u8 = 0x04;
pub const TAG_OID: u8 = 0x06;
pub const TAG_SEQUENCE: u8 = 0x30;
/// Context-specific, constructed: `[n]` is `TAG_CONTEXT_CONSTRUCTED | n`
pub const TAG_CONTEXT_CONSTRUCTED: u8 = 0xa0;

/* ------------------------------------------------------------------ */
/*                               Lengths                              */
/* ------------------------------------------------------------------ */

/// Short form below 128, otherwise `0x80 | n` followed by `n` big-endian
/// length bytes
pub fn encode_length(len: usize) -> Vec<u8> {
    if len < 0x80 {
        return vec![len as u8];
    }
    let bytes = len.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    let mut out = Vec::with_capacity(1 + bytes.len() - skip);
    out.push(0x80 | (bytes.len() - skip) as u8);
    out.extend_from_slice(&bytes[skip..]);
    out
}

/// Parse a length; returns `(length, bytes consumed)`
pub fn read_length(data: &[u8]) -> Result<(usize, usize)> {
    let first = *data
        .first()
        .ok_or_else(|| Error::encoding("der length", "missing length octet"))?;

    if first < 0x80 {
        return Ok((first as usize, 1));
    }
    if first == 0x80 {
        return Err(Error::encoding("der length", "indefinite length form"));
    }

    let count = (first & 0x7f) as usize;
    if count > core::mem::size_of::<usize>() {
        return Err(Error::encoding("der length", "length does not fit in usize"));
    }
    validate::available("der length", data.len() - 1, count)?;

    let bytes = &data[1..1 + count];
    if bytes[0] == 0 {
        return Err(Error::encoding("der length", "leading zero in long form"));
    }
    let len = bytes.iter().fold(0usize, |acc, &b| (acc << 8) | b as usize);
    if len < 0x80 {
        return Err(Error::encoding("der length", "long form used for a short length"));
    }
    Ok((len, 1 + count))
}

/// Split one TLV with the expected tag off the front of `data`;
/// returns `(contents, rest)`
fn read_tlv<'a>(data: &'a [u8], tag: u8, context: &'static str) -> Result<(&'a [u8], &'a [u8])> {
    let first = *data
        .first()
        .ok_or_else(|| Error::encoding(context, "empty input"))?;
    if first != tag {
        return Err(Error::encoding(
            context,
            format!("wanted tag 0x{:02x}, got 0x{:02x}", tag, first),
        ));
    }

    let (len, consumed) = read_length(&data[1..])?;
    let start = 1 + consumed;
    validate::available(context, data.len() - start, len)?;
    Ok((&data[start..start + len], &data[start + len..]))
}

fn tlv(tag: u8, contents: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(contents.len() + 6);
    out.push(tag);
    out.extend(encode_length(contents.len()));
    out.extend_from_slice(contents);
    out
}

/* ------------------------------------------------------------------ */
/*                               INTEGER                              */
/* ------------------------------------------------------------------ */

/// Minimal two's-complement INTEGER; non-negative values whose top bit
/// would be set get a leading `0x00`
pub fn encode_integer(value: &BigInt) -> Vec<u8> {
    tlv(TAG_INTEGER, &value.to_signed_bytes_be())
}

/// [`encode_integer`] for an unsigned value
pub fn encode_unsigned(value: &BigUint) -> Vec<u8> {
    encode_integer(&BigInt::from_biguint(Sign::Plus, value.clone()))
}

/// Decode a signed INTEGER
pub fn decode_integer(data: &[u8]) -> Result<(BigInt, &[u8])> {
    let (body, rest) = read_tlv(data, TAG_INTEGER, "der integer")?;
    match body {
        [] => return Err(Error::encoding("der integer", "empty contents")),
        [0x00, next, ..] if next & 0x80 == 0 => {
            return Err(Error::encoding("der integer", "redundant leading 0x00"))
        }
        [0xff, next, ..] if next & 0x80 != 0 => {
            return Err(Error::encoding("der integer", "redundant leading 0xff"))
        }
        _ => {}
    }
    Ok((BigInt::from_signed_bytes_be(body), rest))
}

/// Decode an INTEGER that must be non-negative
pub fn remove_integer(data: &[u8]) -> Result<(BigUint, &[u8])> {
    let (value, rest) = decode_integer(data)?;
    let value = value
        .to_biguint()
        .ok_or_else(|| Error::encoding("der integer", "negative value"))?;
    Ok((value, rest))
}

/* ------------------------------------------------------------------ */
/*                              SEQUENCE                              */
/* ------------------------------------------------------------------ */

/// Wrap the already-encoded `parts` in a SEQUENCE
pub fn encode_sequence<I, P>(parts: I) -> Vec<u8>
where
    I: IntoIterator<Item = P>,
    P: AsRef<[u8]>,
{
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(part.as_ref());
    }
    tlv(TAG_SEQUENCE, &body)
}

/// Returns `(contents, rest)`
pub fn decode_sequence(data: &[u8]) -> Result<(&[u8], &[u8])> {
    read_tlv(data, TAG_SEQUENCE, "der sequence")
}

/* ------------------------------------------------------------------ */
/*                          OBJECT IDENTIFIER                         */
/* ------------------------------------------------------------------ */

fn encode_arc(mut arc: u64, out: &mut Vec<u8>) {
    let mut groups = vec![(arc & 0x7f) as u8];
    arc >>= 7;
    while arc > 0 {
        groups.push(0x80 | (arc & 0x7f) as u8);
        arc >>= 7;
    }
    out.extend(groups.iter().rev());
}

/// Encode an OID from its arcs; the first two are folded into `40*a + b`
pub fn encode_oid(arcs: &[u64]) -> Result<Vec<u8>> {
    validate::parameter(arcs.len() >= 2, "oid", "at least two arcs required")?;
    validate::parameter(arcs[0] <= 2, "oid", "first arc must be 0, 1 or 2")?;
    validate::parameter(
        arcs[0] == 2 || arcs[1] < 40,
        "oid",
        "second arc must be below 40",
    )?;

    let mut body = Vec::new();
    let first = arcs[0]
        .checked_mul(40)
        .and_then(|v| v.checked_add(arcs[1]))
        .ok_or_else(|| Error::param("oid", "second arc too large"))?;
    encode_arc(first, &mut body);
    for &arc in &arcs[2..] {
        encode_arc(arc, &mut body);
    }
    Ok(tlv(TAG_OID, &body))
}

/// Decode an OID into its arcs
pub fn decode_oid(data: &[u8]) -> Result<(Vec<u64>, &[u8])> {
    let (body, rest) = read_tlv(data, TAG_OID, "der oid")?;
    if body.is_empty() {
        return Err(Error::encoding("der oid", "empty contents"));
    }

    let mut values = Vec::new();
    let mut pos = 0;
    while pos < body.len() {
        if body[pos] == 0x80 {
            return Err(Error::encoding("der oid", "non-minimal arc encoding"));
        }
        let mut value: u64 = 0;
        loop {
            let byte = *body
                .get(pos)
                .ok_or_else(|| Error::encoding("der oid", "truncated arc"))?;
            pos += 1;
            if value > (u64::MAX >> 7) {
                return Err(Error::encoding("der oid", "arc overflows u64"));
            }
            value = (value << 7) | u64::from(byte & 0x7f);
            if byte & 0x80 == 0 {
                break;
            }
        }
        values.push(value);
    }

    let first = values[0];
    let mut arcs = Vec::with_capacity(values.len() + 1);
    match first {
        0..=39 => arcs.extend([0, first]),
        40..=79 => arcs.extend([1, first - 40]),
        _ => arcs.extend([2, first - 80]),
    }
    arcs.extend_from_slice(&values[1..]);
    Ok((arcs, rest))
}

/* ------------------------------------------------------------------ */
/*                      BIT STRING / OCTET STRING                     */
/* ------------------------------------------------------------------ */

pub fn encode_bitstring(bytes: &[u8], unused_bits: u8) -> Result<Vec<u8>> {
    validate::parameter(unused_bits <= 7, "unused_bits", "must be at most 7")?;
    validate::parameter(
        unused_bits == 0 || !bytes.is_empty(),
        "unused_bits",
        "empty bit string cannot have unused bits",
    )?;
    let mut body = Vec::with_capacity(bytes.len() + 1);
    body.push(unused_bits);
    body.extend_from_slice(bytes);
    Ok(tlv(TAG_BIT_STRING, &body))
}

/// Decode a BIT STRING whose unused-bit count must equal `expect_unused`;
/// returns `(bytes, rest)`
pub fn decode_bitstring(data: &[u8], expect_unused: u8) -> Result<(&[u8], &[u8])> {
    let (body, rest) = read_tlv(data, TAG_BIT_STRING, "der bit string")?;
    let (&unused, bytes) = body
        .split_first()
        .ok_or_else(|| Error::encoding("der bit string", "missing unused-bits octet"))?;
    if unused > 7 || (bytes.is_empty() && unused != 0) {
        return Err(Error::encoding("der bit string", "invalid unused-bits octet"));
    }
    if unused != expect_unused {
        return Err(Error::encoding(
            "der bit string",
            format!("expected {} unused bits, got {}", expect_unused, unused),
        ));
    }
    if let Some(last) = bytes.last() {
        if unused > 0 && last & ((1u8 << unused) - 1) != 0 {
            return Err(Error::encoding("der bit string", "unused bits are not zero"));
        }
    }
    Ok((bytes, rest))
}

pub fn encode_octet_string(bytes: &[u8]) -> Vec<u8> {
    tlv(TAG_OCTET_STRING, bytes)
}

/// Returns `(bytes, rest)`
pub fn decode_octet_string(data: &[u8]) -> Result<(&[u8], &[u8])> {
    read_tlv(data, TAG_OCTET_STRING, "der octet string")
}

/* ------------------------------------------------------------------ */
/*                     Context-specific constructed                   */
/* ------------------------------------------------------------------ */

/// Encode `[tag] { value }` (explicit tagging)
pub fn encode_constructed(tag: u8, value: &[u8]) -> Result<Vec<u8>> {
    validate::parameter(tag < 0x1f, "tag", "high tag numbers are not supported")?;
    Ok(tlv(TAG_CONTEXT_CONSTRUCTED | tag, value))
}

/// Whether `data` starts with a context-specific constructed element
pub fn is_constructed(data: &[u8]) -> bool {
    matches!(data.first(), Some(&b) if b & 0xe0 == TAG_CONTEXT_CONSTRUCTED)
}

/// Decode `[tag] { value }`; returns `(tag, value, rest)`
pub fn decode_constructed(data: &[u8]) -> Result<(u8, &[u8], &[u8])> {
    let first = *data
        .first()
        .ok_or_else(|| Error::encoding("der constructed", "empty input"))?;
    if first & 0xe0 != TAG_CONTEXT_CONSTRUCTED {
        return Err(Error::encoding(
            "der constructed",
            format!("0x{:02x} is not a context-specific constructed tag", first),
        ));
    }
    if first & 0x1f == 0x1f {
        return Err(Error::encoding("der constructed", "high tag numbers are not supported"));
    }
    let (body, rest) = read_tlv(data, first, "der constructed")?;
    Ok((first & 0x1f, body, rest))
}
