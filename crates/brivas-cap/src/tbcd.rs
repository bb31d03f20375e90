//! TBCD (Telephony BCD) digit packing
//!
//! Two digits per octet, first digit in the low nibble. An odd digit count
//! leaves the last high nibble set to the filler `0xF`.

use crate::errors::{DecodingError, EncodingError};
use bytes::{BufMut, BytesMut};

/// Filler nibble for odd-length digit strings
pub const FILLER: u8 = 0x0F;

/// Octets needed to carry `digit_count` digits
pub fn packed_len(digit_count: usize) -> usize {
    (digit_count + 1) / 2
}

/// Encode a decimal digit string
pub fn encode_digits(digits: &str) -> Result<BytesMut, EncodingError> {
    let mut buf = BytesMut::with_capacity(packed_len(digits.len()));
    encode_digits_into(&mut buf, digits)?;
    Ok(buf)
}

/// Encode a decimal digit string, appending to `buf`
///
/// Nothing is written when a character is rejected.
pub fn encode_digits_into(buf: &mut BytesMut, digits: &str) -> Result<(), EncodingError> {
    let nibbles = digits
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => Ok(d as u8),
            None => Err(EncodingError::InvalidDigit(c)),
        })
        .collect::<Result<Vec<u8>, _>>()?;

    buf.reserve(packed_len(nibbles.len()));
    for chunk in nibbles.chunks(2) {
        let byte = if chunk.len() == 2 {
            chunk[0] | (chunk[1] << 4)
        } else {
            chunk[0] | (FILLER << 4)
        };
        buf.put_u8(byte);
    }

    Ok(())
}

/// Decode exactly `digit_count` digits
///
/// The high nibble of the final octet is not inspected when `digit_count` is odd.
pub fn decode_digits(data: &[u8], digit_count: usize) -> Result<String, DecodingError> {
    let needed = packed_len(digit_count);
    if data.len() < needed {
        return Err(DecodingError::BufferTooShort {
            needed,
            actual: data.len(),
        });
    }

    let mut result = String::with_capacity(digit_count);
    for position in 0..digit_count {
        let byte = data[position / 2];
        let nibble = if position % 2 == 0 { byte & 0x0F } else { byte >> 4 };
        if nibble > 9 {
            return Err(DecodingError::InvalidBcd { nibble, position });
        }
        result.push(char::from(b'0' + nibble));
    }

    Ok(result)
}

/// Decode every digit carried by `data`
///
/// The digit count is inferred from the octet count. A filler in the high nibble
/// of the final octet marks an odd count and is dropped; a decimal digit can never
/// be `0xF`, so the two cases cannot be confused.
pub fn decode_packed(data: &[u8]) -> Result<String, DecodingError> {
    let mut digit_count = data.len() * 2;
    if let Some(&last) = data.last() {
        if last >> 4 == FILLER {
            digit_count -= 1;
        }
    }
    decode_digits(data, digit_count)
}
