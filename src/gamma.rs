use std::sync::OnceLock;

/// Number of entries per table, one per 8-bit channel value.
pub const GAMMA_VALUES: usize = 256;

/// Exponent used to move display values into linear light.
pub const DEFAULT_GAMMA: f64 = 2.2;

static GAMMA_TABLES: OnceLock<GammaTables> = OnceLock::new();

/// Paired lookup tables between gamma-encoded channel values and linear light.
///
/// `gamma` maps a display value to its linear equivalent, `inverse` maps back.
/// Both are scaled to `0..=256`; the inverse table holds 256 at its last index,
/// so entries are kept wider than a byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GammaTables {
    gamma: [u16; GAMMA_VALUES],
    inverse: [u16; GAMMA_VALUES],
}

fn round_to_int(val: f64) -> u16 {
    (val + 0.5).floor() as u16
}

impl GammaTables {
    pub fn new() -> Self {
        Self::with_exponent(DEFAULT_GAMMA)
    }

    pub fn with_exponent(exponent: f64) -> Self {
        let mut gamma = [0u16; GAMMA_VALUES];
        let mut inverse = [0u16; GAMMA_VALUES];
        let scale = GAMMA_VALUES as f64;
        for (index, (g, inv)) in gamma.iter_mut().zip(inverse.iter_mut()).enumerate() {
            let x = index as f64 / scale;
            *g = round_to_int(x.powf(exponent) * scale);
            *inv = round_to_int(x.powf(1.0 / exponent) * scale);
        }
        Self { gamma, inverse }
    }

    #[inline]
    pub fn gamma(&self, value: u8) -> u16 {
        self.gamma[usize::from(value)]
    }

    #[inline]
    pub fn inverse(&self, value: u8) -> u16 {
        self.inverse[usize::from(value)]
    }

    pub fn gamma_table(&self) -> &[u16; GAMMA_VALUES] {
        &self.gamma
    }

    pub fn inverse_table(&self) -> &[u16; GAMMA_VALUES] {
        &self.inverse
    }
}

impl Default for GammaTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the process-wide tables, building them on first use.
///
/// Every call after the first returns the same tables, and concurrent callers
/// block until the first build is visible.
pub fn initialize_gamma_tables() -> &'static GammaTables {
    GAMMA_TABLES.get_or_init(|| {
        tracing::debug!(exponent = DEFAULT_GAMMA, "building gamma tables");
        GammaTables::new()
    })
}
