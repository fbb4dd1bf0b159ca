//! HSL color state and conversion to displayable RGB.

use core::fmt;

use hn_core::{FULL_TURN_DEG, Real, wrap_degrees};

const ONE_THIRD: Real = 1.0 / 3.0;
const ONE_SIXTH: Real = 1.0 / 6.0;
const TWO_THIRDS: Real = 2.0 / 3.0;

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: Real,
    pub saturation: Real,
    pub lightness: Real,
}

impl Hsl {
    pub fn new(hue: Real, saturation: Real, lightness: Real) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.hue, self.saturation, self.lightness)
    }

    /// `[hue, saturation, lightness]`, the order used in snapshots.
    pub fn as_array(self) -> [Real; 3] {
        [self.hue, self.saturation, self.lightness]
    }
}

/// A 24-bit display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn is_gray(&self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Convert HSL (degrees, percent, percent) to RGB.
///
/// Hue is wrapped into [0, 360) first. Channels are scaled to 0..=255 by
/// truncation, not rounding.
pub fn hsl_to_rgb(hue: Real, saturation: Real, lightness: Real) -> Rgb {
    let h = wrap_degrees(hue) / FULL_TURN_DEG;
    let s = unit(saturation / 100.0);
    let l = unit(lightness / 100.0);

    if s == 0.0 {
        let v = channel(l);
        return Rgb { r: v, g: v, b: v };
    }

    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;

    Rgb {
        r: channel(hue_component(m1, m2, h + ONE_THIRD)),
        g: channel(hue_component(m1, m2, h)),
        b: channel(hue_component(m1, m2, h - ONE_THIRD)),
    }
}

/// `hsl_to_rgb` rendered as `#rrggbb`.
pub fn to_display_color(hue: Real, saturation: Real, lightness: Real) -> String {
    hsl_to_rgb(hue, saturation, lightness).to_hex()
}

fn hue_component(m1: Real, m2: Real, h: Real) -> Real {
    let h = h.rem_euclid(1.0);
    if h < ONE_SIXTH {
        m1 + (m2 - m1) * h * 6.0
    } else if h < 0.5 {
        m2
    } else if h < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - h) * 6.0
    } else {
        m1
    }
}

/// Clamp to [0, 1]; NaN maps to 0.
fn unit(v: Real) -> Real {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

fn channel(v: Real) -> u8 {
    // truncation
    (unit(v) * 255.0) as u8
}
