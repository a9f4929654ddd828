#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Ws2812Led`**: Drives one WS2812 LED, one color frame per call
//! - **`PulsePeripheral`**: Trait to implement for your pulse-train output hardware
//! - **`TxConfig`**: Output pin, channel and clock divider for the peripheral
//! - **`PulseCode`**: One bit-timing pattern (high ticks, low ticks)
//! - **`BitPatterns`**: The logic-0 and logic-1 patterns for a given counter clock
//! - **`LedError`**: What went wrong, including which peripheral step failed
//!
//! Colors travel as `Srgb<u8>` ([`Rgb8`]). HSV input is converted with
//! [`hsv_to_rgb`] before encoding, and `Srgb<f32>` (0.0-1.0) is accepted via
//! [`Ws2812Led::set_color`].

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

#[macro_use]
mod fmt;

pub mod colors;
pub mod encoder;
pub mod led;
pub mod peripheral;
pub mod types;

pub use colors::hsv_to_rgb;
pub use encoder::{BitPatterns, rgb_to_pulse_sequence};
pub use led::Ws2812Led;
pub use peripheral::{PulsePeripheral, TxConfig};
pub use types::{
    Channel, FRAME_BITS, InvalidArgument, LedError, PeripheralOp, PulseCode, PulseFrame, Rgb8,
};

pub const COLOR_OFF: Rgb8 = Rgb8::new(0, 0, 0);
