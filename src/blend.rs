//! Weighted averaging of packed colors.
//!
//! A blend fraction is written as `weight / 2^shift`, so `weight1 + weight2 ==
//! 1 << shift` gives a true weighted average. Gamma-corrected blending moves
//! each channel into linear light first, which keeps midpoints from looking
//! muddy and dark.

use serde::{Deserialize, Serialize};

use crate::color::PackedColor;
use crate::gamma::GammaTables;

const CHANNEL_SHIFTS: [u32; 3] = [16, 8, 0];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    #[default]
    Gamma,
    Raw,
}

impl From<bool> for BlendMode {
    fn from(gamma_corrected: bool) -> Self {
        if gamma_corrected {
            BlendMode::Gamma
        } else {
            BlendMode::Raw
        }
    }
}

#[inline]
fn weighted(a: u16, b: u16, weight1: u32, weight2: u32, shift: u32) -> u8 {
    let sum = u64::from(a) * u64::from(weight1) + u64::from(b) * u64::from(weight2);
    sum.checked_shr(shift).unwrap_or(0).min(255) as u8
}

#[inline]
fn channel(color: PackedColor, shift: u32) -> u8 {
    (color.value() >> shift) as u8
}

/// Blends in linear light, then maps the result back to display values.
pub fn mix_colors_gamma_corrected(
    tables: &GammaTables,
    color1: PackedColor,
    color2: PackedColor,
    weight1: u32,
    weight2: u32,
    shift: u32,
) -> PackedColor {
    CHANNEL_SHIFTS
        .iter()
        .fold(PackedColor::BLACK, |acc, &offset| {
            let linear = weighted(
                tables.gamma(channel(color1, offset)),
                tables.gamma(channel(color2, offset)),
                weight1,
                weight2,
                shift,
            );
            let value = u32::from(tables.inverse(linear).min(255));
            PackedColor::new(acc.value() | value << offset)
        })
}

/// Blends the stored channel bytes directly.
pub fn mix_colors_raw(
    color1: PackedColor,
    color2: PackedColor,
    weight1: u32,
    weight2: u32,
    shift: u32,
) -> PackedColor {
    CHANNEL_SHIFTS
        .iter()
        .fold(PackedColor::BLACK, |acc, &offset| {
            let value = weighted(
                u16::from(channel(color1, offset)),
                u16::from(channel(color2, offset)),
                weight1,
                weight2,
                shift,
            );
            PackedColor::new(acc.value() | u32::from(value) << offset)
        })
}

pub fn mix_colors(
    tables: &GammaTables,
    color1: PackedColor,
    color2: PackedColor,
    weight1: u32,
    weight2: u32,
    shift: u32,
    mode: BlendMode,
) -> PackedColor {
    match mode {
        BlendMode::Gamma => {
            mix_colors_gamma_corrected(tables, color1, color2, weight1, weight2, shift)
        }
        BlendMode::Raw => mix_colors_raw(color1, color2, weight1, weight2, shift),
    }
}
