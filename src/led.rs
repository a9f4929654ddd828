//! Single WS2812 LED driver.
//!
//! Provides [`Ws2812Led`], which owns a [`PulsePeripheral`] and sends one
//! color frame per call. The channel is configured, installed, written and
//! uninstalled inside each call; no handle survives between calls.

use crate::colors;
use crate::encoder::{self, BitPatterns};
use crate::peripheral::{InstalledChannel, PulsePeripheral, TxConfig};
use crate::types::{LedError, PeripheralOp, Rgb8};
use palette::Srgb;

/// Drives a single WS2812-family RGB LED.
///
/// Owning the peripheral means overlapping calls cannot race on its
/// configuration; share the driver behind a mutex or a single task if several
/// contexts need to set the color.
///
/// # Type Parameters
/// * `P` - Pulse-generator implementation
pub struct Ws2812Led<P: PulsePeripheral> {
    peripheral: P,
    config: TxConfig,
}

impl<P: PulsePeripheral> Ws2812Led<P> {
    /// Creates a driver. The peripheral is not touched until the first color
    /// is set.
    pub fn new(peripheral: P, config: TxConfig) -> Self {
        Self { peripheral, config }
    }

    /// Returns the channel configuration used for every frame.
    pub fn config(&self) -> &TxConfig {
        &self.config
    }

    /// Gives the peripheral back.
    pub fn into_inner(self) -> P {
        self.peripheral
    }

    /// Sets the LED from 0-255 channel values.
    ///
    /// # Errors
    /// * `InvalidArgument` - A channel is above 255. The peripheral is untouched.
    /// * `ClockOutOfRange` - The reported counter clock cannot express the bit timings
    /// * `Peripheral` - A peripheral step failed
    pub fn set_color_rgb(&mut self, r: u32, g: u32, b: u32) -> Result<(), LedError<P::Error>> {
        info!("set color to R={=u32}, G={=u32}, B={=u32}", r, g, b);
        let color = colors::rgb(r, g, b)?;
        self.transmit(color)
    }

    /// Sets the LED from hue (degrees, 0-360), saturation and value (0.0-1.0).
    ///
    /// Converts with [`colors::hsv_to_rgb`] and then behaves exactly like
    /// [`set_color_rgb`](Self::set_color_rgb).
    ///
    /// # Errors
    /// Same as [`set_color_rgb`](Self::set_color_rgb). Out of range HSV input is
    /// `InvalidArgument`.
    pub fn set_color_hsv(&mut self, h: u32, s: f64, v: f64) -> Result<(), LedError<P::Error>> {
        info!("set color to H={=u32}, S={=f64}, V={=f64}", h, s, v);
        let color = colors::hsv_to_rgb(h, s, v)?;
        debug!(
            "converted to R={=u8}, G={=u8}, B={=u8}",
            color.red,
            color.green,
            color.blue
        );
        self.transmit(color)
    }

    /// Sets the LED from a 0.0-1.0 float color.
    ///
    /// Components outside 0.0-1.0 are clamped by the conversion.
    ///
    /// # Errors
    /// * `ClockOutOfRange` - The reported counter clock cannot express the bit timings
    /// * `Peripheral` - A peripheral step failed
    pub fn set_color(&mut self, color: Srgb) -> Result<(), LedError<P::Error>> {
        let color: Rgb8 = color.into_format();
        info!(
            "set color to R={=u8}, G={=u8}, B={=u8}",
            color.red,
            color.green,
            color.blue
        );
        self.transmit(color)
    }

    fn transmit(&mut self, color: Rgb8) -> Result<(), LedError<P::Error>> {
        let config = TxConfig {
            loop_enabled: false,
            ..self.config
        };
        let channel = config.channel;

        debug!("configuring channel {=u8} on GPIO {=u8}", channel.0, config.gpio);
        self.peripheral
            .configure(&config)
            .map_err(LedError::peripheral(PeripheralOp::Configure))?;

        let mut installed = InstalledChannel::install(&mut self.peripheral, channel)
            .map_err(LedError::peripheral(PeripheralOp::Install))?;

        let clock_hz = installed
            .counter_clock()
            .map_err(LedError::peripheral(PeripheralOp::CounterClock))?;
        let patterns = BitPatterns::from_counter_clock(clock_hz)
            .ok_or(LedError::ClockOutOfRange { clock_hz })?;

        let frame = encoder::rgb_to_pulse_sequence(color, &patterns);

        debug!("sending frame to LED");
        installed
            .write(&frame, false)
            .map_err(LedError::peripheral(PeripheralOp::Write))?;

        installed
            .release()
            .map_err(LedError::peripheral(PeripheralOp::Uninstall))
    }
}
