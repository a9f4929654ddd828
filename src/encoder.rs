//! WS2812 bit encoding.
//!
//! Turns a color into the 24 pulse codes the LED expects: green, red, then
//! blue, each most significant bit first. Tick counts are derived from the
//! counter clock the peripheral actually reports, so nothing here is
//! precomputed for a particular divider.

use crate::types::{FRAME_BITS, PulseCode, PulseFrame, Rgb8};

/// Logic-0 high time, in nanoseconds.
pub const T0H_NS: u32 = 400;
/// Logic-1 high time, in nanoseconds.
pub const T1H_NS: u32 = 800;
/// Logic-0 low time, in nanoseconds.
pub const T0L_NS: u32 = 850;
/// Logic-1 low time, in nanoseconds.
pub const T1L_NS: u32 = 450;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Length of one counter tick in whole nanoseconds.
///
/// Returns `None` for a 0 Hz clock or one faster than 1 GHz.
#[inline]
pub fn tick_period_ns(clock_hz: u32) -> Option<u32> {
    match NANOS_PER_SECOND.checked_div(clock_hz) {
        Some(0) | None => None,
        tick => tick,
    }
}

/// The two canonical bit patterns for one counter clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitPatterns {
    /// Pattern sent for a 0 bit.
    pub zero: PulseCode,

    /// Pattern sent for a 1 bit.
    pub one: PulseCode,
}

impl BitPatterns {
    /// Derives the patterns for a counter clock in Hz.
    ///
    /// Returns `None` when a duration would round down to zero ticks or
    /// would not fit in an item half.
    pub fn from_counter_clock(clock_hz: u32) -> Option<Self> {
        let tick_ns = tick_period_ns(clock_hz)?;
        debug!(
            "counter clock {=u32} Hz, tick period {=u32} ns",
            clock_hz,
            tick_ns
        );

        Some(Self {
            zero: PulseCode::new(ticks(T0H_NS, tick_ns)?, ticks(T0L_NS, tick_ns)?),
            one: PulseCode::new(ticks(T1H_NS, tick_ns)?, ticks(T1L_NS, tick_ns)?),
        })
    }

    /// Returns the pattern for a single bit.
    #[inline]
    pub fn for_bit(&self, bit: bool) -> PulseCode {
        if bit { self.one } else { self.zero }
    }
}

fn ticks(duration_ns: u32, tick_ns: u32) -> Option<u16> {
    let ticks = u16::try_from(duration_ns / tick_ns).ok()?;
    (1..=PulseCode::MAX_DURATION).contains(&ticks).then_some(ticks)
}

/// Packs a color in wire order: `G << 16 | R << 8 | B`.
///
/// Bit `23 - i` of the result is frame bit `i`.
#[inline]
pub fn frame_word(color: Rgb8) -> u32 {
    (u32::from(color.green) << 16) | (u32::from(color.red) << 8) | u32::from(color.blue)
}

/// Encodes a color into one full pulse frame.
pub fn rgb_to_pulse_sequence(color: Rgb8, patterns: &BitPatterns) -> PulseFrame {
    let word = frame_word(color);
    let mut frame = [patterns.zero; FRAME_BITS];

    for (i, code) in frame.iter_mut().enumerate() {
        let bit = (word >> (FRAME_BITS - 1 - i)) & 1 == 1;
        trace!("bit[{=usize}] = {=bool}", i, bit);
        *code = patterns.for_bit(bit);
    }

    frame
}
