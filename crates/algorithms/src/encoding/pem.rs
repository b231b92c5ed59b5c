//! PEM armour (RFC 7468) around DER bodies

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::error::{Error, Result};

const LINE_WIDTH: usize = 64;

/// Wrap `der` as `-----BEGIN {label}-----`, base64 in 64-column lines,
/// `-----END {label}-----`, with a trailing newline
pub fn to_pem(der: &[u8], label: &str) -> String {
    let body = BASE64.encode(der);
    let mut out = String::with_capacity(body.len() + body.len() / LINE_WIDTH + 2 * label.len() + 40);

    out.push_str("-----BEGIN ");
    out.push_str(label);
    out.push_str("-----\n");
    for (i, c) in body.chars().enumerate() {
        if i > 0 && i % LINE_WIDTH == 0 {
            out.push('\n');
        }
        out.push(c);
    }
    if !body.is_empty() {
        out.push('\n');
    }
    out.push_str("-----END ");
    out.push_str(label);
    out.push_str("-----\n");
    out
}

/// Extract and decode the first `label` block in `text`.
///
/// Anything outside the block (other PEM blocks such as `EC PARAMETERS`,
/// comments) is ignored; whitespace inside it is skipped.
pub fn from_pem(text: &str, label: &str) -> Result<Vec<u8>> {
    let begin = format!("-----BEGIN {}-----", label);
    let end = format!("-----END {}-----", label);

    let start = text
        .find(&begin)
        .ok_or_else(|| Error::encoding("pem", format!("no BEGIN {} line", label)))?
        + begin.len();
    let stop = text[start..]
        .find(&end)
        .ok_or_else(|| Error::encoding("pem", format!("no END {} line", label)))?
        + start;

    let body: String = text[start..stop]
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    if body.is_empty() {
        return Err(Error::encoding("pem", "empty body"));
    }

    BASE64
        .decode(body.as_bytes())
        .map_err(|e| Error::encoding("pem", format!("invalid base64: {}", e)))
}
