//! Initial color draws for freshly generated networks.

use hn_core::{HnError, HnResult, Real};
use rand::Rng;

use crate::hsl::Hsl;

/// Inclusive integer range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRange {
    pub min: u32,
    pub max: u32,
}

impl DrawRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Real {
        Real::from(rng.gen_range(self.min..=self.max))
    }

    fn check(&self, what: &str, upper: u32) -> HnResult<()> {
        if self.min > self.max || self.max > upper {
            return Err(HnError::invalid_arg(format!(
                "{what} range [{}, {}] must be ordered and within [0, {upper}]",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Ranges the initial hue, saturation and lightness are drawn from.
///
/// The defaults keep colors vibrant (saturation 50..=100) and away from
/// near-black or near-white (lightness 40..=70). Hue covers 0..=360; a drawn
/// 360 is kept as-is and wraps to 0 on conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialPalette {
    pub hue: DrawRange,
    pub saturation: DrawRange,
    pub lightness: DrawRange,
}

impl Default for InitialPalette {
    fn default() -> Self {
        Self {
            hue: DrawRange::new(0, 360),
            saturation: DrawRange::new(50, 100),
            lightness: DrawRange::new(40, 70),
        }
    }
}

impl InitialPalette {
    pub fn validate(&self) -> HnResult<()> {
        self.hue.check("hue", 360)?;
        self.saturation.check("saturation", 100)?;
        self.lightness.check("lightness", 100)
    }

    /// Draw one node's color: hue, then saturation, then lightness.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Hsl {
        let hue = self.hue.draw(rng);
        let saturation = self.saturation.draw(rng);
        let lightness = self.lightness.draw(rng);
        Hsl::new(hue, saturation, lightness)
    }
}
