//! Value normalisation and the sequential "Blues" colour map.

/// ColorBrewer Blues, light to dark.
const BLUES_STOPS: [(u8, u8, u8); 9] = [
    (0xf7, 0xfb, 0xff),
    (0xde, 0xeb, 0xf7),
    (0xc6, 0xdb, 0xef),
    (0x9e, 0xca, 0xe1),
    (0x6b, 0xae, 0xd6),
    (0x42, 0x92, 0xc6),
    (0x21, 0x71, 0xb5),
    (0x08, 0x51, 0x9c),
    (0x08, 0x30, 0x6b),
];

/// Linear map from `[min, max]` onto `[0, 1]`.
///
/// A zero-width range maps everything to 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalize {
    pub min: f64,
    pub max: f64,
}

impl Normalize {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range spanning all `values`. `None` when there are none.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Self::new(v, v)),
            Some(n) => Some(Self::new(n.min.min(v), n.max.max(v))),
        })
    }

    pub fn apply(&self, value: f64) -> f64 {
        if self.max > self.min {
            ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// The "Blues" colour map.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blues;

impl Blues {
    /// RGB colour at position `t` in `[0, 1]`, interpolated between stops.
    pub fn rgb(t: f64) -> (u8, u8, u8) {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * (BLUES_STOPS.len() - 1) as f64;
        let lower = scaled.floor() as usize;
        let upper = (lower + 1).min(BLUES_STOPS.len() - 1);
        let frac = scaled - lower as f64;

        let (r0, g0, b0) = BLUES_STOPS[lower];
        let (r1, g1, b1) = BLUES_STOPS[upper];
        let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8;

        (lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
    }

    /// Hex colour string at position `t`.
    pub fn hex(t: f64) -> String {
        let (r, g, b) = Self::rgb(t);
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}
