//! Build-time configuration for the IR transmitter

use crate::remote::Protocol;
use crate::timing::{ClockConfig, Prescaler};

/// Main system clock (Hz)
pub const SYSCLOCK: u32 = 16_000_000;

/// TIMER1 prescale value (state machine clock)
pub const PRESCALE: u16 = 8;

/// Philips TV profile selected
pub const PHILIPSTV: bool = cfg!(feature = "philips-tv");

/// Diagnostic console baud rate
pub const UART_BAUD: u32 = 9600;

const SELECTED_PROTOCOLS: usize = PHILIPSTV as usize;

const _: () = assert!(
    SELECTED_PROTOCOLS == 1,
    "enable exactly one remote protocol feature (e.g. `philips-tv`)"
);

/// Protocol profile compiled into this build
#[cfg(feature = "philips-tv")]
pub const ACTIVE_PROTOCOL: Protocol = Protocol::PhilipsTv;

pub const CLOCK: ClockConfig = ClockConfig::new(SYSCLOCK, prescaler());

const fn prescaler() -> Prescaler {
    match Prescaler::from_divisor(PRESCALE) {
        Ok(p) => p,
        Err(_) => panic!("PRESCALE is not a Timer1 clock select divisor"),
    }
}
