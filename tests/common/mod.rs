//! Shared test infrastructure for saola-rgb-led integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use saola_rgb_led::{Channel, PeripheralOp, PulseCode, PulseFrame, PulsePeripheral, TxConfig};

// ============================================================================
// Mock Peripheral
// ============================================================================

/// Error returned by the mock when a step is set up to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError(pub PeripheralOp);

/// One recorded call on the mock peripheral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Configure(TxConfig),
    Install(Channel),
    CounterClock(Channel),
    Write { channel: Channel, len: usize, wait: bool },
    Uninstall(Channel),
}

/// Mock pulse generator that records every call for testing
pub struct MockPeripheral {
    clocks: heapless::Vec<u32, 8>,
    clock_reads: usize,
    fail_on: Option<PeripheralOp>,
    events: heapless::Vec<Event, 32>,
    frames: heapless::Vec<PulseFrame, 8>,
}

impl MockPeripheral {
    /// Mock running at the 20 MHz the default divider produces
    pub fn new() -> Self {
        Self::with_clock(20_000_000)
    }

    pub fn with_clock(clock_hz: u32) -> Self {
        Self::with_clocks(&[clock_hz])
    }

    /// Reports each clock in turn, one per `counter_clock` call; the last
    /// one repeats once the list runs out
    pub fn with_clocks(clocks: &[u32]) -> Self {
        Self {
            clocks: heapless::Vec::from_slice(clocks).unwrap(),
            clock_reads: 0,
            fail_on: None,
            events: heapless::Vec::new(),
            frames: heapless::Vec::new(),
        }
    }

    pub fn failing_on(op: PeripheralOp) -> Self {
        let mut mock = Self::new();
        mock.fail_on = Some(op);
        mock
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Every frame written so far, oldest first
    pub fn frames(&self) -> &[PulseFrame] {
        &self.frames
    }

    pub fn last_items(&self) -> &[PulseCode] {
        self.frames.last().map(|frame| frame.as_slice()).unwrap_or(&[])
    }

    fn record(&mut self, event: Event, op: PeripheralOp) -> Result<(), MockError> {
        self.events.push(event).unwrap();
        if self.fail_on == Some(op) {
            return Err(MockError(op));
        }
        Ok(())
    }
}

impl PulsePeripheral for MockPeripheral {
    type Error = MockError;

    fn configure(&mut self, config: &TxConfig) -> Result<(), Self::Error> {
        self.record(Event::Configure(*config), PeripheralOp::Configure)
    }

    fn install(&mut self, channel: Channel) -> Result<(), Self::Error> {
        self.record(Event::Install(channel), PeripheralOp::Install)
    }

    fn counter_clock(&mut self, channel: Channel) -> Result<u32, Self::Error> {
        self.record(Event::CounterClock(channel), PeripheralOp::CounterClock)?;
        let index = self.clock_reads.min(self.clocks.len() - 1);
        self.clock_reads += 1;
        Ok(self.clocks[index])
    }

    fn write(
        &mut self,
        channel: Channel,
        items: &[PulseCode],
        wait: bool,
    ) -> Result<(), Self::Error> {
        let event = Event::Write {
            channel,
            len: items.len(),
            wait,
        };
        self.record(event, PeripheralOp::Write)?;
        let frame = PulseFrame::try_from(items).unwrap();
        self.frames.push(frame).unwrap();
        Ok(())
    }

    fn uninstall(&mut self, channel: Channel) -> Result<(), Self::Error> {
        self.record(Event::Uninstall(channel), PeripheralOp::Uninstall)
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Patterns the default 20 MHz clock produces (50 ns ticks)
pub const ZERO_20MHZ: PulseCode = PulseCode::new(8, 17);
pub const ONE_20MHZ: PulseCode = PulseCode::new(16, 9);

/// Decodes a frame back into bits using the given "1" pattern
pub fn frame_bits(items: &[PulseCode], one: PulseCode) -> heapless::Vec<bool, 32> {
    items.iter().map(|code| *code == one).collect()
}
