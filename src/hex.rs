//! Hexadecimal decoding for color lines.
//!
//! The `decode_*` functions are the hot path: they trust their input, expect
//! lowercase ASCII hex (`0-9`, `a-f`), and return the cursor just past what
//! they consumed. Uppercase or non-hex bytes decode to meaningless numbers.
//! Reading past the end of the buffer panics. Use [`parse_hex_color`] where
//! input has not been checked yet.

use crate::color::PackedColor;
use crate::error::HexError;

const COLOR_DIGITS: usize = 6;
const BYTE_DIGITS: usize = 2;

/// Shifts one hex digit into `result`.
#[inline]
pub fn decode_hex_digit(result: u32, digit: u8) -> u32 {
    let mut value = i32::from(digit) - i32::from(b'0');
    if value > 9 {
        // 'a' sits 39 past the byte after '9'
        value -= 39;
    }
    (result << 4).wrapping_add(value as u32)
}

/// Decodes six digits at `pos` into a color.
#[inline]
pub fn decode_hex_color(line: &[u8], pos: usize) -> (PackedColor, usize) {
    let end = pos + COLOR_DIGITS;
    let value = line[pos..end]
        .iter()
        .fold(0, |acc, &digit| decode_hex_digit(acc, digit));
    (PackedColor::new(value), end)
}

/// Decodes two digits at `pos` into a byte.
#[inline]
pub fn decode_hex_byte(line: &[u8], pos: usize) -> (u8, usize) {
    let high = decode_hex_digit(0, line[pos]);
    let value = decode_hex_digit(high, line[pos + 1]);
    (value as u8, pos + BYTE_DIGITS)
}

/// Validates and decodes `rrggbb` or `#rrggbb`, in either case.
pub fn parse_hex_color(text: &str) -> Result<PackedColor, HexError> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if digits.len() != COLOR_DIGITS {
        return Err(HexError::InvalidLength(digits.len()));
    }
    if let Some((position, found)) = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(HexError::InvalidDigit { position, found });
    }
    let lower = digits.to_ascii_lowercase();
    let (color, _) = decode_hex_color(lower.as_bytes(), 0);
    Ok(color)
}

impl std::str::FromStr for PackedColor {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_color(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_lowercase_letters() {
        for (i, digit) in b"0123456789abcdef".iter().enumerate() {
            assert_eq!(decode_hex_digit(0, *digit), i as u32);
        }
        assert_eq!(decode_hex_digit(0xA, b'5'), 0xA5);
    }

    #[test]
    fn uppercase_is_not_decoded() {
        assert_ne!(decode_hex_digit(0, b'A'), 0xA);
        assert_ne!(decode_hex_digit(0, b'F'), 0xF);
    }

    #[test]
    fn decodes_color() {
        let (color, pos) = decode_hex_color(b"ff00ab", 0);
        assert_eq!(color.value(), 0xFF00AB);
        assert_eq!(pos, 6);
    }

    #[test]
    fn decodes_byte() {
        assert_eq!(decode_hex_byte(b"3f", 0), (0x3F, 2));
        assert_eq!(decode_hex_byte(b"00ff", 2), (0xFF, 4));
    }

    #[test]
    fn cursor_advances_from_offset() {
        let line = b"xx1234567f80zz";
        let (color, pos) = decode_hex_color(line, 2);
        assert_eq!(color.value(), 0x123456);
        assert_eq!(pos, 8);
        let (byte, pos) = decode_hex_byte(line, pos);
        assert_eq!(byte, 0x7F);
        assert_eq!(pos, 10);
        let (byte, pos) = decode_hex_byte(line, pos);
        assert_eq!(byte, 0x80);
        assert_eq!(pos, 12);
    }

    #[test]
    fn consecutive_colors() {
        let line = b"ff00000000ff";
        let (first, pos) = decode_hex_color(line, 0);
        let (second, pos) = decode_hex_color(line, pos);
        assert_eq!(first.value(), 0xFF0000);
        assert_eq!(second.value(), 0x0000FF);
        assert_eq!(pos, line.len());
    }

    #[test]
    #[should_panic]
    fn underrun_panics() {
        decode_hex_color(b"ff00", 0);
    }

    #[test]
    fn parse_accepts_hash_and_uppercase() {
        assert_eq!(parse_hex_color("#FF00AB").unwrap().value(), 0xFF00AB);
        assert_eq!(parse_hex_color("c83c46").unwrap().value(), 0xC83C46);
        assert_eq!("#fa6e97".parse::<PackedColor>().unwrap().value(), 0xFA6E97);
    }

    #[test]
    fn parse_rejects_bad_length() {
        assert_eq!(parse_hex_color("#fff"), Err(HexError::InvalidLength(3)));
        assert_eq!(parse_hex_color(""), Err(HexError::InvalidLength(0)));
    }

    #[test]
    fn parse_rejects_bad_digit() {
        assert_eq!(
            parse_hex_color("12g456"),
            Err(HexError::InvalidDigit {
                position: 2,
                found: 'g'
            })
        );
    }
}
