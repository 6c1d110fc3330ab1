use crate::blend::{mix_colors, BlendMode};
use crate::color::PackedColor;
use crate::gamma::GammaTables;

/// Blend fractions are expressed in 256ths.
const FRACTION_SHIFT: u32 = 8;
const FRACTION_ONE: u32 = 1 << FRACTION_SHIFT;

/// A source of LED frames, three bytes (R, G, B) per LED.
pub trait GlowMode {
    fn get_colors(&mut self) -> Vec<u8>;
}

fn solid_frame(color: PackedColor, leds: u16) -> Vec<u8> {
    std::iter::repeat(color.to_rgb_bytes())
        .take(usize::from(leds))
        .flatten()
        .collect()
}

fn blend_fraction(
    tables: &GammaTables,
    from: PackedColor,
    to: PackedColor,
    fraction: u32,
    mode: BlendMode,
) -> PackedColor {
    match fraction {
        0 => from,
        f if f >= FRACTION_ONE => to,
        f => mix_colors(tables, from, to, FRACTION_ONE - f, f, FRACTION_SHIFT, mode),
    }
}

/// Colors spread evenly across the strip, first stop on the first LED and
/// last stop on the last.
pub struct StaticGradient {
    colors: Vec<u8>,
}

impl StaticGradient {
    pub fn from_colors(
        stops: &[PackedColor],
        leds: u16,
        tables: &GammaTables,
        mode: BlendMode,
    ) -> Self {
        let colors = match stops {
            [] => solid_frame(PackedColor::BLACK, leds),
            [only] => solid_frame(*only, leds),
            _ => {
                let segments = (stops.len() - 1) as u64;
                let span = u64::from(leds.saturating_sub(1)).max(1);
                let one = u64::from(FRACTION_ONE);
                (0..u64::from(leds))
                    .flat_map(|led| {
                        let position = led * segments * one / span;
                        let segment = (position / one).min(segments - 1);
                        let fraction = (position - segment * one) as u32;
                        let segment = segment as usize;
                        blend_fraction(tables, stops[segment], stops[segment + 1], fraction, mode)
                            .to_rgb_bytes()
                    })
                    .collect()
            }
        };
        tracing::trace!(leds, stops = stops.len(), "built static gradient");
        Self { colors }
    }
}

impl GlowMode for StaticGradient {
    fn get_colors(&mut self) -> Vec<u8> {
        self.colors.clone()
    }
}

/// Fades a solid strip from one color to another over a fixed number of
/// frames, then holds the target color.
pub struct Crossfade<'a> {
    from: PackedColor,
    to: PackedColor,
    steps: u32,
    frame: u32,
    leds: u16,
    tables: &'a GammaTables,
    mode: BlendMode,
}

impl<'a> Crossfade<'a> {
    pub fn new(
        from: PackedColor,
        to: PackedColor,
        steps: u32,
        leds: u16,
        tables: &'a GammaTables,
        mode: BlendMode,
    ) -> Self {
        Self {
            from,
            to,
            steps,
            frame: 0,
            leds,
            tables,
            mode,
        }
    }

    pub fn is_done(&self) -> bool {
        self.frame >= self.steps
    }

    fn current(&self) -> PackedColor {
        if self.is_done() {
            return self.to;
        }
        let fraction = (u64::from(self.frame) * u64::from(FRACTION_ONE) / u64::from(self.steps)) as u32;
        blend_fraction(self.tables, self.from, self.to, fraction, self.mode)
    }
}

impl GlowMode for Crossfade<'_> {
    fn get_colors(&mut self) -> Vec<u8> {
        let frame = solid_frame(self.current(), self.leds);
        self.frame = self.frame.saturating_add(1);
        frame
    }
}
