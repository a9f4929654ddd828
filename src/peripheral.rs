//! Pulse-generator peripheral abstraction.
//!
//! Implement [`PulsePeripheral`] for your hardware's pulse-train output (for
//! example an ESP32 RMT channel) so the LED driver can configure it, send a
//! frame and release it again.

use crate::types::{Channel, PulseCode};

/// Trait for abstracting the pulse-train output hardware.
///
/// The driver calls these in a fixed order for every color change:
/// `configure`, `install`, `counter_clock`, `write`, `uninstall`. Once
/// `install` has succeeded, `uninstall` is always called, even if a later
/// step fails.
pub trait PulsePeripheral {
    /// Error reported by the hardware layer.
    type Error;

    /// Applies a channel configuration.
    fn configure(&mut self, config: &TxConfig) -> Result<(), Self::Error>;

    /// Installs the channel driver.
    fn install(&mut self, channel: Channel) -> Result<(), Self::Error>;

    /// Returns the counter clock of an installed channel, in Hz.
    ///
    /// This is the rate after the clock divider, as the hardware actually
    /// runs it.
    fn counter_clock(&mut self, channel: Channel) -> Result<u32, Self::Error>;

    /// Queues a pulse sequence for transmission as one continuous frame.
    ///
    /// With `wait` false, implementations may return as soon as the items
    /// are accepted.
    fn write(&mut self, channel: Channel, items: &[PulseCode], wait: bool)
    -> Result<(), Self::Error>;

    /// Uninstalls the channel driver.
    fn uninstall(&mut self, channel: Channel) -> Result<(), Self::Error>;
}

/// Transmit channel configuration.
///
/// `Default` matches the ESP32-S2-Saola-1 onboard LED: GPIO 18 on channel 0,
/// with the 80 MHz APB clock divided by 4 down to 20 MHz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TxConfig {
    /// Output GPIO number.
    pub gpio: u8,

    /// Pulse-generator channel.
    pub channel: Channel,

    /// Source clock divider.
    pub clock_divider: u8,

    /// Repeat the frame continuously. The LED driver always clears this.
    pub loop_enabled: bool,

    /// Number of item memory blocks given to the channel.
    pub mem_blocks: u8,

    /// Drive the idle level while not transmitting.
    pub idle_output_enabled: bool,

    /// Idle level is high rather than low.
    pub idle_level_high: bool,

    /// Modulate the output with a carrier.
    pub carrier_enabled: bool,
}

impl TxConfig {
    /// Sets the output GPIO.
    pub fn gpio(mut self, gpio: u8) -> Self {
        self.gpio = gpio;
        self
    }

    /// Sets the channel.
    pub fn channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    /// Sets the source clock divider.
    pub fn clock_divider(mut self, divider: u8) -> Self {
        self.clock_divider = divider;
        self
    }

    /// Sets the number of item memory blocks.
    pub fn mem_blocks(mut self, blocks: u8) -> Self {
        self.mem_blocks = blocks;
        self
    }
}

impl Default for TxConfig {
    fn default() -> Self {
        Self {
            gpio: 18,
            channel: Channel(0),
            clock_divider: 4,
            loop_enabled: false,
            mem_blocks: 1,
            idle_output_enabled: true,
            idle_level_high: false,
            carrier_enabled: false,
        }
    }
}

/// An installed channel that is uninstalled when dropped.
///
/// Call [`release`](InstalledChannel::release) on the success path to get the
/// uninstall result. On early returns the drop handler uninstalls and only
/// logs a failure, since the caller is already reporting another error.
pub(crate) struct InstalledChannel<'p, P: PulsePeripheral> {
    peripheral: &'p mut P,
    channel: Channel,
    released: bool,
}

impl<'p, P: PulsePeripheral> InstalledChannel<'p, P> {
    /// Installs `channel` and takes responsibility for uninstalling it.
    pub(crate) fn install(peripheral: &'p mut P, channel: Channel) -> Result<Self, P::Error> {
        peripheral.install(channel)?;
        Ok(Self {
            peripheral,
            channel,
            released: false,
        })
    }

    pub(crate) fn counter_clock(&mut self) -> Result<u32, P::Error> {
        self.peripheral.counter_clock(self.channel)
    }

    pub(crate) fn write(&mut self, items: &[PulseCode], wait: bool) -> Result<(), P::Error> {
        self.peripheral.write(self.channel, items, wait)
    }

    /// Uninstalls the channel and reports the result.
    pub(crate) fn release(mut self) -> Result<(), P::Error> {
        self.released = true;
        self.peripheral.uninstall(self.channel)
    }
}

impl<P: PulsePeripheral> Drop for InstalledChannel<'_, P> {
    fn drop(&mut self) {
        if self.released {
            return;
        }

        if self.peripheral.uninstall(self.channel).is_err() {
            warn!("uninstall of channel {=u8} failed during cleanup", self.channel.0);
        }
    }
}
