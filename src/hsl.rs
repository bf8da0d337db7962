//! HSL color type and HSL→RGB conversion.

use serde::{Deserialize, Serialize};

use crate::rgb::Rgb;

/// Hue/saturation/lightness color with each component a fraction in [0, 1].
///
/// Hue is a fraction of a full turn, not degrees; divide degree values by
/// 360 (and percentages by 100) before constructing. Components are not
/// validated; out-of-range values flow through the conversion math as-is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create an HSL value from three fractional components.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert to RGB with each channel rounded to the nearest integer.
    pub fn to_rgb(self) -> Rgb {
        if self.s == 0.0 {
            // achromatic
            let v = (self.l * 255.0).round();
            return Rgb::new(v, v, v);
        }

        let v2 = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            (self.l + self.s) - (self.s * self.l)
        };
        let v1 = 2.0 * self.l - v2;

        let r = hue_to_intensity(v1, v2, self.h + 1.0 / 3.0);
        let g = hue_to_intensity(v1, v2, self.h);
        let b = hue_to_intensity(v1, v2, self.h - 1.0 / 3.0);

        Rgb::new(
            (r * 255.0).round(),
            (g * 255.0).round(),
            (b * 255.0).round(),
        )
    }

    /// Format as six lowercase hex digits via RGB.
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

/// Map one channel's hue offset to a fractional intensity between the
/// bounds `v1` and `v2`.
///
/// The wrap below is a single correction step, so `h` must start within
/// [-1, 2]; callers pass `h ± 1/3` with `h` already in [0, 1].
fn hue_to_intensity(v1: f64, v2: f64, mut h: f64) -> f64 {
    if h < 0.0 {
        h += 1.0;
    }
    if h > 1.0 {
        h -= 1.0;
    }

    if 6.0 * h < 1.0 {
        v1 + (v2 - v1) * 6.0 * h
    } else if 2.0 * h < 1.0 {
        v2
    } else if 3.0 * h < 2.0 {
        v1 + (v2 - v1) * (2.0 / 3.0 - h) * 6.0
    } else {
        v1
    }
}
