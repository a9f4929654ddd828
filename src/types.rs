//! Core types shared by the encoder and the transmitter.

use palette::Srgb;

/// An 8-bit-per-channel RGB color, the LED's native frame format.
pub type Rgb8 = Srgb<u8>;

/// Number of bits in one WS2812 color frame (G, R, B, 8 bits each).
pub const FRAME_BITS: usize = 24;

/// One full color frame in transmission order.
pub type PulseFrame = [PulseCode; FRAME_BITS];

/// A pulse-generator channel identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channel(pub u8);

/// A single bit-timing pattern: a high pulse followed by a low pulse.
///
/// Durations are in peripheral clock ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseCode {
    /// Ticks the line is held high.
    pub high: u16,

    /// Ticks the line is held low.
    pub low: u16,
}

impl PulseCode {
    /// Largest duration a single item half can hold.
    pub const MAX_DURATION: u16 = 0x7FFF;

    /// Creates a pulse code from high and low tick counts.
    #[inline]
    pub const fn new(high: u16, low: u16) -> Self {
        Self { high, low }
    }

    /// Packs the code into the 32-bit hardware item layout.
    ///
    /// Bits `0..15` hold the high duration, bit 15 its level (1), bits
    /// `16..31` the low duration and bit 31 its level (0).
    #[inline]
    pub const fn to_raw(self) -> u32 {
        let high = (self.high & Self::MAX_DURATION) as u32;
        let low = (self.low & Self::MAX_DURATION) as u32;
        high | (1 << 15) | (low << 16)
    }
}

impl From<PulseCode> for u32 {
    fn from(code: PulseCode) -> Self {
        code.to_raw()
    }
}

/// A color argument was outside its documented range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidArgument;

impl core::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "color argument out of range")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidArgument {}

/// The peripheral step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeripheralOp {
    /// Applying the channel configuration.
    Configure,

    /// Installing the channel driver.
    Install,

    /// Reading back the channel's counter clock.
    CounterClock,

    /// Queueing the pulse frame.
    Write,

    /// Uninstalling the channel driver.
    Uninstall,
}

/// Errors returned by the set-color operations.
///
/// `E` is the error type of the underlying [`PulsePeripheral`](crate::PulsePeripheral).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError<E> {
    /// A color argument was out of range. Nothing was sent to the peripheral.
    InvalidArgument,

    /// The counter clock cannot express the WS2812 bit timings.
    ClockOutOfRange {
        /// The clock the peripheral reported, in Hz.
        clock_hz: u32,
    },

    /// The peripheral rejected one of the steps.
    Peripheral {
        /// Which step failed.
        op: PeripheralOp,
        /// The peripheral's own error.
        source: E,
    },
}

impl<E> LedError<E> {
    pub(crate) fn peripheral(op: PeripheralOp) -> impl FnOnce(E) -> Self {
        move |source| LedError::Peripheral { op, source }
    }
}

impl<E> From<InvalidArgument> for LedError<E> {
    fn from(_: InvalidArgument) -> Self {
        LedError::InvalidArgument
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for LedError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LedError::InvalidArgument => {
                write!(f, "color argument out of range")
            }
            LedError::ClockOutOfRange { clock_hz } => {
                write!(
                    f,
                    "counter clock of {} Hz cannot express WS2812 bit timings",
                    clock_hz
                )
            }
            LedError::Peripheral { op, source } => {
                write!(f, "peripheral {:?} failed: {:?}", op, source)
            }
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for LedError<E> {}
