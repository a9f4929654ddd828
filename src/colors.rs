//! Color space conversion helpers.
//!
//! Converts the inputs accepted by the set-color operations into the 8-bit
//! [`Rgb8`] frame color, validating ranges on the way. Nothing here touches
//! the peripheral.

use crate::types::{InvalidArgument, Rgb8};
use libm::{fabs, fmod};

/// Largest accepted hue, in degrees.
pub const HUE_MAX: u32 = 360;

/// Validates 0-255 channel values and builds an [`Rgb8`].
///
/// # Errors
/// `InvalidArgument` if any channel exceeds 255.
pub fn rgb(r: u32, g: u32, b: u32) -> Result<Rgb8, InvalidArgument> {
    match (u8::try_from(r), u8::try_from(g), u8::try_from(b)) {
        (Ok(r), Ok(g), Ok(b)) => Ok(Rgb8::new(r, g, b)),
        _ => Err(InvalidArgument),
    }
}

/// Converts HSV to RGB using hue-sector decomposition.
///
/// `h` is in degrees (0-360), `s` and `v` are in 0.0-1.0. Channels are
/// truncated, not rounded, so `v = 0.5` with `s = 0` gives 127.
///
/// # Errors
/// `InvalidArgument` if `h > 360`, or `s`/`v` is above 1.0, below 0.0 or NaN.
pub fn hsv_to_rgb(h: u32, s: f64, v: f64) -> Result<Rgb8, InvalidArgument> {
    if h > HUE_MAX || !unit_range(s) || !unit_range(v) {
        return Err(InvalidArgument);
    }

    let chroma = s * v;
    let x = chroma * (1.0 - fabs(fmod(f64::from(h) / 60.0, 2.0) - 1.0));
    let m = v - chroma;

    let (r, g, b) = match h {
        0..60 => (chroma, x, 0.0),
        60..120 => (x, chroma, 0.0),
        120..180 => (0.0, chroma, x),
        180..240 => (0.0, x, chroma),
        240..300 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Ok(Rgb8::new(to_channel(r + m), to_channel(g + m), to_channel(b + m)))
}

/// Fully saturated, full brightness color at the given hue.
///
/// # Errors
/// `InvalidArgument` if `h > 360`.
#[inline]
pub fn hue(h: u32) -> Result<Rgb8, InvalidArgument> {
    hsv_to_rgb(h, 1.0, 1.0)
}

#[inline]
fn unit_range(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

#[inline]
fn to_channel(value: f64) -> u8 {
    (value * 255.0) as u8
}
