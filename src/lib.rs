//! Bidirectional RGB ↔ HSL conversion and hex serialization.
//!
//! RGB channels are `f64` values in [0, 255]; HSL components are fractions
//! in [0, 1], with hue expressed as a fraction of a full turn. All
//! operations are pure value-to-value functions, and the two conversions
//! are approximate inverses up to the 0–255 quantization.

pub mod hsl;
pub mod rgb;

pub use hsl::Hsl;
pub use rgb::Rgb;
