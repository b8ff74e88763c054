//! Diagnostic serial console.
//!
//! Output goes through `ufmt` rather than `core::fmt` to keep the image small
//! on the AVR. Any blocking-capable `embedded_hal` serial port can back it.

use embedded_hal::serial;
use ufmt::derive::uDebug;
use ufmt::{uDisplay, uWrite, uwrite};

use crate::remote::Protocol;
use crate::timing::{self, ClockConfig};

#[derive(Debug, uDebug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    /// The underlying serial port reported a write or flush failure
    Serial,
}

pub type Result<T> = core::result::Result<T, ConsoleError>;

pub struct SerialConsole<S> {
    serial: S,
}

impl<S> SerialConsole<S>
where
    S: serial::Write<u8>,
{
    pub fn new(serial: S) -> Self {
        Self { serial }
    }

    pub fn release(self) -> S {
        self.serial
    }

    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        nb::block!(self.serial.write(byte)).map_err(|_| ConsoleError::Serial)
    }

    pub fn write_line(&mut self, s: &str) -> Result<()> {
        self.write_str(s)?;
        self.write_str("\r\n")
    }

    pub fn write_hex(&mut self, val: u8) -> Result<()> {
        const HEX_CHARS: [u8; 16] = *b"0123456789ABCDEF";
        self.write_byte(HEX_CHARS[(val >> 4) as usize])?;
        self.write_byte(HEX_CHARS[(val & 0xF) as usize])
    }

    pub fn info<T: uDisplay + ?Sized>(&mut self, msg: &str, val: &T) -> Result<()> {
        uwrite!(self, "[INF] {}: {}\r\n", msg, val)
    }

    pub fn debug<T: uDisplay + ?Sized>(&mut self, msg: &str, val: &T) -> Result<()> {
        uwrite!(self, "[DBG] {}: {}\r\n", msg, val)
    }

    pub fn flush(&mut self) -> Result<()> {
        nb::block!(self.serial.flush()).map_err(|_| ConsoleError::Serial)
    }
}

impl<S> uWrite for SerialConsole<S>
where
    S: serial::Write<u8>,
{
    type Error = ConsoleError;

    fn write_str(&mut self, s: &str) -> Result<()> {
        for byte in s.bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }
}

/// Prints the compiled-in protocol profile and the Timer1 counts derived
/// from it.
pub fn report<S>(console: &mut SerialConsole<S>, protocol: Protocol, clock: &ClockConfig) -> Result<()>
where
    S: serial::Write<u8>,
{
    let params = protocol.params();

    console.info("protocol", protocol.name())?;
    uwrite!(console, "[INF] sysclock: {} Hz\r\n", clock.sysclock_hz)?;
    console.info("prescale", &clock.prescaler.divisor())?;
    uwrite!(console, "[INF] tick: {} ps\r\n", clock.tick_period_ps())?;
    uwrite!(console, "[INF] carrier: {} Hz\r\n", params.pulse_clock_hz)?;
    uwrite!(console, "[INF] T: {} us\r\n", params.t_us)?;
    uwrite!(console, "[INF] retrans gap: {} T\r\n", params.retrans_gap_t)?;
    console.info("unit bits", &params.unit_length)?;
    console.info("button bits", &params.button_length)?;
    console.write_str("[INF] unit code: 0x")?;
    console.write_hex(params.unit)?;
    console.write_str("\r\n")?;

    tick_count(console, "T ticks", clock.timer16_ticks(params.half_bit_us()))?;
    tick_count(console, "gap ticks", clock.us_to_ticks(params.retrans_gap_us()))?;
    tick_count(
        console,
        "carrier ticks",
        clock.carrier_half_period_ticks(params.pulse_clock_hz),
    )?;
    console.flush()
}

fn tick_count<S, T>(console: &mut SerialConsole<S>, msg: &str, ticks: timing::Result<T>) -> Result<()>
where
    S: serial::Write<u8>,
    T: uDisplay,
{
    match ticks {
        Ok(ticks) => console.debug(msg, &ticks),
        Err(err) => uwrite!(console, "[ERR] {}: {:?}\r\n", msg, err),
    }
}
