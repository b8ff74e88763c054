//! Supported remote protocols and their constant tables

pub mod philips_tv;

use core::fmt;
use ufmt::derive::uDebug;

#[derive(Debug, uDebug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteError {
    /// Sub-code wider than its field
    FieldOverflow { code: u8, bits: u8 },
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::FieldOverflow { code, bits } => {
                write!(f, "code {} does not fit in {} bits", code, bits)
            }
        }
    }
}

pub type Result<T> = core::result::Result<T, RemoteError>;

#[derive(Debug, uDebug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    PhilipsTv,
}

impl Protocol {
    pub const fn params(self) -> &'static ProtocolParams {
        match self {
            Protocol::PhilipsTv => &philips_tv::PARAMS,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Protocol::PhilipsTv => "Philips TV",
        }
    }
}

/// Timing and field layout of one remote protocol.
///
/// Durations are in microseconds unless the field says otherwise; the
/// retransmission gap is counted in T units.
#[derive(Debug, uDebug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolParams {
    pub pulse_clock_hz: u32,
    pub t_us: u16,
    pub retrans_gap_t: u16,
    pub unit_length: u8,
    pub button_length: u8,
    pub unit: u8,
}

impl ProtocolParams {
    pub const fn unit_mask(&self) -> u8 {
        field_mask(self.unit_length)
    }

    pub const fn button_mask(&self) -> u8 {
        field_mask(self.button_length)
    }

    /// One bi-phase half cell
    pub const fn half_bit_us(&self) -> u32 {
        self.t_us as u32
    }

    pub const fn bit_us(&self) -> u32 {
        2 * self.t_us as u32
    }

    pub const fn retrans_gap_us(&self) -> u32 {
        self.retrans_gap_t as u32 * self.t_us as u32
    }

    /// Carrier period in nanoseconds (truncated), 0 without a carrier
    pub const fn carrier_period_ns(&self) -> u32 {
        if self.pulse_clock_hz == 0 {
            return 0;
        }
        1_000_000_000 / self.pulse_clock_hz
    }

    pub fn check_unit(&self, code: u8) -> Result<u8> {
        check_field(code, self.unit_length)
    }

    pub fn check_button(&self, code: u8) -> Result<u8> {
        check_field(code, self.button_length)
    }
}

const fn field_mask(bits: u8) -> u8 {
    if bits >= 8 {
        0xFF
    } else {
        (1 << bits) - 1
    }
}

fn check_field(code: u8, bits: u8) -> Result<u8> {
    if code & !field_mask(bits) != 0 {
        return Err(RemoteError::FieldOverflow { code, bits });
    }
    Ok(code)
}
