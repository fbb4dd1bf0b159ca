//! hn-color: color state and neighbor-driven hue diffusion.
//!
//! Contains:
//! - hsl (HSL state and the HSL -> `#rrggbb` conversion)
//! - palette (initial color draws)
//! - diffusion (double-buffered, simultaneous hue update)
//! - network (graph + per-node color state)

pub mod diffusion;
pub mod hsl;
pub mod network;
pub mod palette;

pub use diffusion::{HueBuffers, StepReport};
pub use hsl::{Hsl, Rgb, hsl_to_rgb, to_display_color};
pub use network::Network;
pub use palette::{InitialPalette, DrawRange};
