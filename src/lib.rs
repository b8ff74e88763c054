//! Configuration for a Philips TV (RC-5) infrared remote transmitter running
//! on a 16MHz AVR.
//!
//! The constants mirror the transmitter's build-time parameters; [`timing`]
//! turns them into Timer1 counts and [`console`] prints the active profile.
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod console;
pub mod remote;
pub mod timing;

pub use config::{ACTIVE_PROTOCOL, CLOCK, PRESCALE, SYSCLOCK};
pub use console::{report, ConsoleError, SerialConsole};
pub use remote::{philips_tv, Protocol, ProtocolParams, RemoteError};
pub use timing::{ClockConfig, Prescaler, TimingError};
