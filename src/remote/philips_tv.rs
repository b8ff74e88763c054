//! Philips TV (RC-5) timing and field layout

use super::ProtocolParams;

/// Carrier pulse frequency (Hz)
pub const PULSECLOCK: u32 = 36_000;

/// T, microseconds
pub const T: u16 = 889;

/// Gap between code retransmissions (T units)
pub const RETRANSGAP: u16 = 128;

/// Bits in unit code
pub const UNITLENGTH: u8 = 5;

/// Bits in button code
pub const BUTTONLENGTH: u8 = 6;

/// Unit code for Philips TV
pub const UNIT: u8 = 0x0;

pub const PARAMS: ProtocolParams = ProtocolParams {
    pulse_clock_hz: PULSECLOCK,
    t_us: T,
    retrans_gap_t: RETRANSGAP,
    unit_length: UNITLENGTH,
    button_length: BUTTONLENGTH,
    unit: UNIT,
};

const _: () = assert!(UNIT <= PARAMS.unit_mask(), "UNIT does not fit in UNITLENGTH bits");
