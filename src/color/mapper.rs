//! Maps raw bytes to RGB color units.
//!
//! The canonical definition works on the lowercase hex rendering of the input: two hex digits per
//! byte, right-padded with `'0'` to a multiple of six, then read six digits at a time as `rrggbb`.
//! [`colors_from_bytes`] is the direct byte-level equivalent used by the pipeline; padding the hex
//! string with zero digits is the same as padding the byte tail with zero bytes.

use crate::foundation::core::Rgb8;
use crate::foundation::error::{BytereelError, BytereelResult};

/// Hex digits per color unit.
pub const HEX_GROUP: usize = 6;

/// Input bytes per color unit.
pub const BYTES_PER_COLOR: usize = 3;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Encode `bytes` as lowercase hex, two characters per byte.
pub fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX_DIGITS[usize::from(b >> 4)] as char);
        out.push(HEX_DIGITS[usize::from(b & 0x0f)] as char);
    }
    out
}

/// Number of `'0'` characters [`pad_hex`] appends to a hex string of `len` characters.
pub fn hex_padding_len(len: usize) -> usize {
    match len % HEX_GROUP {
        0 => 0,
        rem => HEX_GROUP - rem,
    }
}

/// Right-pad `hex` with `'0'` until its length is a multiple of [`HEX_GROUP`].
pub fn pad_hex(hex: &mut String) {
    let pad = hex_padding_len(hex.len());
    hex.extend(std::iter::repeat_n('0', pad));
}

/// Convert a hex string into color units, padding the tail as needed.
///
/// Accepts upper or lower case digits; anything else is a validation error.
pub fn colors_from_hex(hex: &str) -> BytereelResult<Vec<Rgb8>> {
    let mut padded = hex.to_owned();
    pad_hex(&mut padded);

    let digits = padded.as_bytes();
    let mut out = Vec::with_capacity(digits.len() / HEX_GROUP);
    for group in digits.chunks_exact(HEX_GROUP) {
        let channel = |i: usize| -> BytereelResult<u8> {
            Ok((hex_value(group[i])? << 4) | hex_value(group[i + 1])?)
        };
        out.push(Rgb8::new(channel(0)?, channel(2)?, channel(4)?));
    }
    Ok(out)
}

/// Convert raw bytes into color units, three bytes per unit, zero-filling the last unit.
pub fn colors_from_bytes(bytes: &[u8]) -> Vec<Rgb8> {
    let mut out = Vec::with_capacity(color_count(bytes.len()));
    for chunk in bytes.chunks(BYTES_PER_COLOR) {
        let mut rgb = [0u8; BYTES_PER_COLOR];
        rgb[..chunk.len()].copy_from_slice(chunk);
        out.push(Rgb8::new(rgb[0], rgb[1], rgb[2]));
    }
    out
}

/// Number of color units produced from `byte_len` input bytes: `ceil(byte_len / 3)`.
pub fn color_count(byte_len: usize) -> usize {
    byte_len.div_ceil(BYTES_PER_COLOR)
}

fn hex_value(c: u8) -> BytereelResult<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(BytereelError::validation(format!(
            "invalid hex digit '{}'",
            char::from(c).escape_default()
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/mapper.rs"]
mod tests;
