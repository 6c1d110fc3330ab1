//! Packed-color utilities for addressable lighting: hex decoding of color
//! lines and gamma-aware blending through precomputed lookup tables.

pub mod blend;
pub mod color;
pub mod config;
pub mod error;
pub mod gamma;
pub mod hex;
pub mod modes;

pub use blend::{mix_colors, mix_colors_gamma_corrected, mix_colors_raw, BlendMode};
pub use color::PackedColor;
pub use config::GlowConfig;
pub use error::{ConfigError, HexError};
pub use gamma::{initialize_gamma_tables, GammaTables};
pub use hex::{decode_hex_byte, decode_hex_color, decode_hex_digit, parse_hex_color};
pub use modes::{Crossfade, GlowMode, StaticGradient};
