//! USB string descriptor encoding.
//!
//! Layout:
//! ```text
//! Byte 0:      bLength = 2 + 2 × (UTF-16 code units)
//! Byte 1:      bDescriptorType (0x03 = STRING)
//! Byte 2..:    UTF-16LE code units, no terminator
//! ```

use super::descriptor::Aligned;
use super::DESC_TYPE_STRING;
use crate::config::MAX_STR_DESC_SIZE;
use crate::error::Error;

/// Largest string descriptor `bLength` can describe (even, ≤ 255).
pub const MAX_STRING_DESC_LEN: usize = 254;

/// Number of UTF-16 code units `s` encodes to.
///
/// `const` so literal sets can be checked at compile time.
pub const fn utf16_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut units = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b & 0xC0 != 0x80 {
            // Scalars outside the BMP (4-byte lead) need a surrogate pair.
            units += if b >= 0xF0 { 2 } else { 1 };
        }
        i += 1;
    }
    units
}

/// Full descriptor length for `s`, header included.
pub const fn encoded_len(s: &str) -> usize {
    2 + 2 * utf16_len(s)
}

/// Check that `s` encodes into `capacity` bytes; returns the encoded length.
pub const fn check_fits(s: &str, capacity: usize) -> Result<usize, Error> {
    let units = utf16_len(s);
    let len = 2 + 2 * units;
    if len > MAX_STRING_DESC_LEN {
        return Err(Error::StringTooLong { units });
    }
    if len > capacity {
        return Err(Error::BufferOverflow {
            needed: len,
            capacity,
        });
    }
    Ok(len)
}

/// Encode `s` as a string descriptor into `buf`.
///
/// Returns the number of bytes written, equal to the descriptor's
/// `bLength`. Nothing is written when the string does not fit.
pub fn encode_string(s: &str, buf: &mut [u8]) -> Result<usize, Error> {
    check_fits(s, buf.len())?;
    Ok(encode_bounded(s, buf))
}

/// Encode `s`, truncating at whole characters if `buf` is too small.
///
/// Never writes past `buf` and never splits a surrogate pair; the header
/// always matches what was written.
pub(crate) fn encode_bounded(s: &str, buf: &mut [u8]) -> usize {
    let limit = buf.len().min(MAX_STRING_DESC_LEN) & !1;
    if limit < 2 {
        return 0;
    }

    let mut len = 2;
    let mut units = [0u16; 2];
    for c in s.chars() {
        let encoded = c.encode_utf16(&mut units);
        let end = len + 2 * encoded.len();
        if end > limit {
            break;
        }
        for (chunk, unit) in buf[len..end].chunks_exact_mut(2).zip(encoded.iter()) {
            chunk.copy_from_slice(&unit.to_le_bytes());
        }
        len = end;
    }

    buf[0] = len as u8;
    buf[1] = DESC_TYPE_STRING;
    len
}

/// The single reusable slot string descriptors are encoded into.
///
/// Each [`StringBuffer::encode`] overwrites the previous contents; the
/// returned slice borrows the buffer, so it must be consumed (or copied
/// with [`super::copy_out`]) before the next string is requested.
/// Callers check literals with [`check_fits`] before encoding.
pub(crate) struct StringBuffer {
    buf: Aligned<[u8; MAX_STR_DESC_SIZE]>,
}

impl StringBuffer {
    pub(crate) const fn new() -> Self {
        Self {
            buf: Aligned([0u8; MAX_STR_DESC_SIZE]),
        }
    }

    /// Encode `s` into the slot and return the descriptor bytes.
    pub(crate) fn encode(&mut self, s: &str) -> &[u8] {
        let len = encode_bounded(s, &mut self.buf.0);
        &self.buf.0[..len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_ascii_string() {
        let mut buf = [0u8; 16];
        let n = encode_string("HID", &mut buf).unwrap();
        assert_eq!(n, 8);
        assert_eq!(&buf[..n], &[0x08, 0x03, b'H', 0x00, b'I', 0x00, b'D', 0x00]);
    }

    #[test]
    fn empty_string_is_header_only() {
        let mut buf = [0xAAu8; 4];
        assert_eq!(encode_string("", &mut buf), Ok(2));
        assert_eq!(buf, [0x02, 0x03, 0xAA, 0xAA]);
    }

    #[test]
    fn non_ascii_uses_utf16_units() {
        // 'é' is one BMP unit, '🎮' needs a surrogate pair.
        assert_eq!(utf16_len("é"), 1);
        assert_eq!(utf16_len("🎮"), 2);

        let mut buf = [0u8; 16];
        let n = encode_string("é🎮", &mut buf).unwrap();
        assert_eq!(n, 2 + 2 * 3);
        assert_eq!(&buf[2..4], &[0xE9, 0x00]);
        assert_eq!(&buf[4..8], &[0x3C, 0xD8, 0xAE, 0xDF]);
    }

    #[test]
    fn too_small_buffer_is_rejected_untouched() {
        let mut buf = [0u8; 6];
        assert_eq!(
            encode_string("HID Joystick", &mut buf),
            Err(Error::BufferOverflow {
                needed: 26,
                capacity: 6
            })
        );
        assert_eq!(buf, [0u8; 6]);
    }

    #[test]
    fn over_length_string_is_rejected() {
        let long = [b'x'; 127];
        let s = core::str::from_utf8(&long).unwrap();
        let mut buf = [0u8; 512];
        assert_eq!(
            encode_string(s, &mut buf),
            Err(Error::StringTooLong { units: 127 })
        );

        // 126 units is the largest that fits bLength.
        assert_eq!(encode_string(&s[..126], &mut buf), Ok(254));
        assert_eq!(buf[0], 254);
    }

    #[test]
    fn bounded_encode_never_overruns() {
        let mut buf = [0u8; 7];
        let n = encode_bounded("ABCDEF", &mut buf[..5]);
        assert_eq!(n, 4);
        assert_eq!(&buf[..4], &[0x04, 0x03, b'A', 0x00]);
        assert_eq!(&buf[4..], &[0, 0, 0]);

        assert_eq!(encode_bounded("A", &mut buf[..1]), 0);
    }

    #[test]
    fn string_buffer_overwrites_previous_contents() {
        let mut slot = StringBuffer::new();
        assert_eq!(slot.encode("ABCD").len(), 10);
        let second = slot.encode("Z");
        assert_eq!(second, &[0x04, 0x03, b'Z', 0x00]);
    }

    #[test]
    fn truncation_keeps_surrogate_pairs_whole() {
        // 125 units + a pair would need 256 bytes; only 254 are allowed.
        let mut text: heapless::String<256> = heapless::String::new();
        for _ in 0..125 {
            text.push('x').unwrap();
        }
        text.push('🎮').unwrap();
        assert!(check_fits(&text, MAX_STR_DESC_SIZE).is_err());

        let mut slot = StringBuffer::new();
        let desc = slot.encode(&text);
        assert_eq!(desc.len(), 2 + 2 * 125);
        assert_eq!(desc[0] as usize, desc.len());
        let units = desc[2..]
            .chunks_exact(2)
            .map(|c| u16::from_le_bytes([c[0], c[1]]));
        assert!(char::decode_utf16(units).all(|c| c == Ok('x')));
    }

    #[test]
    fn truncation_drops_pair_that_straddles_buffer_end() {
        let mut buf = [0u8; 6];
        let n = encode_bounded("A🎮", &mut buf);
        assert_eq!(n, 4);
        assert_eq!(&buf[..4], &[0x04, 0x03, b'A', 0x00]);
        assert_eq!(&buf[4..], &[0, 0]);
    }
}
