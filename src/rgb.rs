//! RGB color type, RGB→HSL conversion, and hex formatting.

use serde::{Deserialize, Serialize};

use crate::hsl::Hsl;

/// Red/green/blue color with channels nominally in [0, 255].
///
/// Channels are `f64` so conversion results can carry fractional values.
/// They are not validated or clamped on construction; out-of-range values
/// flow through the conversion math as-is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Nudge added before hex truncation so channels like 254.9999, produced by
/// upstream float rounding, format as `ff` rather than `fe`.
const HEX_NUDGE: f64 = 1.0 / 512.0;

impl Rgb {
    /// Create an RGB value from three channels.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Convert to HSL with each component in [0, 1].
    pub fn to_hsl(self) -> Hsl {
        let r = self.r / 255.0;
        let g = self.g / 255.0;
        let b = self.b / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        // Lightness is the average of the extreme channel intensities.
        let l = (max + min) / 2.0;

        let delta = max - min;
        if delta == 0.0 {
            // achromatic, hue and saturation are undefined
            return Hsl::new(0.0, 0.0, l);
        }

        let s = if l < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let r2 = ((max - r) / 6.0 + delta / 2.0) / delta;
        let g2 = ((max - g) / 6.0 + delta / 2.0) / delta;
        let b2 = ((max - b) / 6.0 + delta / 2.0) / delta;

        // Max-channel tests run in fixed r, g, b order; on ties the earlier
        // channel wins.
        let mut h = if r == max {
            b2 - g2
        } else if g == max {
            1.0 / 3.0 + r2 - b2
        } else {
            2.0 / 3.0 + g2 - r2
        };

        // fix wraparound; h lands within one turn of [0, 1]
        if h < 0.0 {
            h += 1.0;
        } else if h > 1.0 {
            h -= 1.0;
        }

        Hsl::new(h, s, l)
    }

    /// Format as six lowercase hex digits, two per channel, no prefix.
    ///
    /// Channels saturate to [0, 255] before truncation, so out-of-range
    /// values format as `00`/`ff` instead of wrapping modulo 256.
    pub fn to_hex(self) -> String {
        format!(
            "{:02x}{:02x}{:02x}",
            hex_byte(self.r),
            hex_byte(self.g),
            hex_byte(self.b)
        )
    }
}

fn hex_byte(channel: f64) -> u8 {
    (channel + HEX_NUDGE).clamp(0.0, 255.0) as u8
}
