//! GSM 7-bit default alphabet (3GPP TS 23.038)
//!
//! Septets are packed continuously, least significant bit first, with no
//! padding between characters.

use crate::errors::{DecodingError, EncodingError};
use bytes::{BufMut, BytesMut};

const ESC: u8 = 0x1B;
const CR: u8 = 0x0D;

/// GSM 7-bit default alphabet
const GSM7_BASIC: &[char] = &[
    '@', '£', '$', '¥', 'è', 'é', 'ù', 'ì', 'ò', 'Ç', '\n', 'Ø', 'ø', '\r', 'Å', 'å',
    'Δ', '_', 'Φ', 'Γ', 'Λ', 'Ω', 'Π', 'Ψ', 'Σ', 'Θ', 'Ξ', '\x1b', 'Æ', 'æ', 'ß', 'É',
    ' ', '!', '"', '#', '¤', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?',
    '¡', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Ä', 'Ö', 'Ñ', 'Ü', '§',
    '¿', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'ä', 'ö', 'ñ', 'ü', 'à',
];

/// GSM 7-bit extension table (after ESC)
const GSM7_EXTENSION: &[(u8, char)] = &[
    (0x0A, '\x0C'), // Form feed
    (0x14, '^'),
    (0x28, '{'),
    (0x29, '}'),
    (0x2F, '\\'),
    (0x3C, '['),
    (0x3D, '~'),
    (0x3E, ']'),
    (0x40, '|'),
    (0x65, '€'),
];

/// Map text to septets, extension characters as ESC + code
pub fn to_septets(text: &str) -> Result<Vec<u8>, EncodingError> {
    let mut septets = Vec::with_capacity(text.len());

    for ch in text.chars() {
        // ESC itself is not a character
        if ch == '\x1b' {
            return Err(EncodingError::InvalidGsm7Char(ch));
        }

        if let Some(pos) = GSM7_BASIC.iter().position(|&c| c == ch) {
            septets.push(pos as u8);
        } else if let Some(&(code, _)) = GSM7_EXTENSION.iter().find(|&&(_, c)| c == ch) {
            septets.push(ESC);
            septets.push(code);
        } else {
            return Err(EncodingError::InvalidGsm7Char(ch));
        }
    }

    Ok(septets)
}

/// Map septets back to text
pub fn from_septets(septets: &[u8]) -> Result<String, DecodingError> {
    let mut result = String::with_capacity(septets.len());
    let mut iter = septets.iter();

    while let Some(&septet) = iter.next() {
        if septet == ESC {
            let &code = iter.next().ok_or(DecodingError::DanglingEscape)?;
            let &(_, ch) = GSM7_EXTENSION
                .iter()
                .find(|&&(c, _)| c == code)
                .ok_or(DecodingError::UnknownGsm7Extension(code))?;
            result.push(ch);
        } else {
            result.push(GSM7_BASIC[(septet & 0x7F) as usize]);
        }
    }

    Ok(result)
}

/// Encode to packed GSM 7-bit
///
/// When the last octet would carry seven unused bits they hold `<CR>`,
/// which [`decode_gsm7`] drops again.
pub fn encode_gsm7(text: &str) -> Result<BytesMut, EncodingError> {
    let mut septets = to_septets(text)?;
    if septets.len() % 8 == 7 {
        septets.push(CR);
    }
    Ok(pack_septets(&septets))
}

/// Decode packed GSM 7-bit
///
/// Reads `floor(len * 8 / 7)` septets; leftover bits are ignored.
pub fn decode_gsm7(data: &[u8]) -> Result<String, DecodingError> {
    let mut septets = unpack_septets(data);
    if !septets.is_empty() && septets.len() % 8 == 0 && septets.last() == Some(&CR) {
        septets.pop();
    }
    from_septets(&septets)
}

/// Pack 7-bit values into octets
pub fn pack_septets(septets: &[u8]) -> BytesMut {
    let mut result = BytesMut::with_capacity((septets.len() * 7 + 7) / 8);
    let mut bits_pending = 0u16;
    let mut pending_bits = 0u8;

    for &septet in septets {
        bits_pending |= ((septet & 0x7F) as u16) << pending_bits;
        pending_bits += 7;

        while pending_bits >= 8 {
            result.put_u8((bits_pending & 0xFF) as u8);
            bits_pending >>= 8;
            pending_bits -= 8;
        }
    }

    if pending_bits > 0 {
        result.put_u8((bits_pending & 0xFF) as u8);
    }

    result
}

/// Unpack octets into 7-bit values
pub fn unpack_septets(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len() * 8 / 7);
    let mut bits_pending = 0u16;
    let mut pending_bits = 0u8;

    for &byte in data {
        bits_pending |= (byte as u16) << pending_bits;
        pending_bits += 8;

        while pending_bits >= 7 {
            result.push((bits_pending & 0x7F) as u8);
            bits_pending >>= 7;
            pending_bits -= 7;
        }
    }

    result
}
