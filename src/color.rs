use std::fmt;

/// A 24-bit RGB color packed as `0xRRGGBB`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PackedColor(u32);

impl PackedColor {
    pub const BLACK: Self = Self(0x000000);
    pub const WHITE: Self = Self(0xFFFFFF);

    /// Wraps a raw value, dropping anything above bit 23.
    pub const fn new(value: u32) -> Self {
        Self(value & 0xFF_FFFF)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self((r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Channels in wire order, as an LED frame expects them.
    pub const fn to_rgb_bytes(self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }
}

impl From<u32> for PackedColor {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<PackedColor> for u32 {
    fn from(color: PackedColor) -> Self {
        color.0
    }
}

impl fmt::Display for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_follow_rrggbb_layout() {
        let color = PackedColor::new(0xFF00AB);
        assert_eq!(color.red(), 0xFF);
        assert_eq!(color.green(), 0x00);
        assert_eq!(color.blue(), 0xAB);
        assert_eq!(PackedColor::from_rgb(0xFF, 0x00, 0xAB), color);
    }

    #[test]
    fn new_masks_to_24_bits() {
        assert_eq!(PackedColor::new(0x1_23_45_67).value(), 0x23_45_67);
    }

    #[test]
    fn display_is_six_lowercase_digits() {
        assert_eq!(PackedColor::new(0x0A0B0C).to_string(), "0a0b0c");
        assert_eq!(PackedColor::WHITE.to_string(), "ffffff");
    }

    #[test]
    fn rgb_bytes_are_in_wire_order() {
        assert_eq!(PackedColor::new(0x102030).to_rgb_bytes(), [0x10, 0x20, 0x30]);
    }
}
