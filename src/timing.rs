//! Timer1 tick arithmetic derived from the clock configuration.
//!
//! Every figure here is recomputed from `SYSCLOCK` and `PRESCALE` so the
//! transmitter's state machine clock can be checked on the host.

use core::fmt;
use ufmt::derive::uDebug;

const PS_PER_S: u64 = 1_000_000_000_000;
const NS_PER_S: u64 = 1_000_000_000;
const US_PER_S: u64 = 1_000_000;

#[derive(Debug, uDebug, Clone, Copy, PartialEq, Eq)]
pub enum TimingError {
    /// Divider not offered by the Timer1 clock select bits
    InvalidPrescale(u16),
    ZeroFrequency,
    Overflow,
    /// Count does not fit the 16-bit compare register
    TimerOverflow { ticks: u32 },
    /// Duration is not a whole number of ticks
    Inexact,
    /// Frequency above what the timer clock can resolve
    BelowResolution,
}

impl fmt::Display for TimingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingError::InvalidPrescale(div) => write!(f, "invalid prescale value {}", div),
            TimingError::ZeroFrequency => f.write_str("frequency must be non-zero"),
            TimingError::Overflow => f.write_str("arithmetic overflow"),
            TimingError::TimerOverflow { ticks } => {
                write!(f, "{} ticks do not fit a 16-bit timer", ticks)
            }
            TimingError::Inexact => f.write_str("duration is not a whole number of ticks"),
            TimingError::BelowResolution => f.write_str("frequency too high for the timer clock"),
        }
    }
}

pub type Result<T> = core::result::Result<T, TimingError>;

/// Timer1 clock select (CS12:0)
#[derive(Debug, uDebug, Clone, Copy, PartialEq, Eq)]
pub enum Prescaler {
    Direct = 1,
    Div8 = 2,
    Div64 = 3,
    Div256 = 4,
    Div1024 = 5,
}

impl Prescaler {
    pub const fn divisor(self) -> u16 {
        match self {
            Prescaler::Direct => 1,
            Prescaler::Div8 => 8,
            Prescaler::Div64 => 64,
            Prescaler::Div256 => 256,
            Prescaler::Div1024 => 1024,
        }
    }

    /// Value for the CS12:0 bits of TCCR1B
    pub const fn clock_select_bits(self) -> u8 {
        self as u8
    }

    pub const fn from_divisor(divisor: u16) -> Result<Self> {
        match divisor {
            1 => Ok(Prescaler::Direct),
            8 => Ok(Prescaler::Div8),
            64 => Ok(Prescaler::Div64),
            256 => Ok(Prescaler::Div256),
            1024 => Ok(Prescaler::Div1024),
            other => Err(TimingError::InvalidPrescale(other)),
        }
    }
}

/// System clock and the divider feeding the timer
#[derive(Debug, uDebug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    pub sysclock_hz: u32,
    pub prescaler: Prescaler,
}

impl ClockConfig {
    pub const fn new(sysclock_hz: u32, prescaler: Prescaler) -> Self {
        Self {
            sysclock_hz,
            prescaler,
        }
    }

    /// Timer clock in Hz
    pub const fn tick_hz(&self) -> u32 {
        self.sysclock_hz / self.prescaler.divisor() as u32
    }

    /// Length of one timer tick in picoseconds. Exact for any divisor of
    /// a whole-MHz clock (62.5ns at 16MHz undivided).
    pub const fn tick_period_ps(&self) -> u64 {
        if self.sysclock_hz == 0 {
            return 0;
        }
        self.prescaler.divisor() as u64 * PS_PER_S / self.sysclock_hz as u64
    }

    /// Length of one timer tick in nanoseconds, truncated. See
    /// [`tick_period_ps`](Self::tick_period_ps) for sub-nanosecond periods.
    pub const fn tick_period_ns(&self) -> u32 {
        if self.sysclock_hz == 0 {
            return 0;
        }
        (self.prescaler.divisor() as u64 * NS_PER_S / self.sysclock_hz as u64) as u32
    }

    /// Converts a duration to timer ticks. Fails unless the duration is a
    /// whole number of ticks.
    pub fn us_to_ticks(&self, us: u32) -> Result<u32> {
        let scaled = (us as u64)
            .checked_mul(self.sysclock_hz as u64)
            .ok_or(TimingError::Overflow)?;
        let divisor = self.prescaler.divisor() as u64 * US_PER_S;
        if scaled % divisor != 0 {
            return Err(TimingError::Inexact);
        }
        u32::try_from(scaled / divisor).map_err(|_| TimingError::Overflow)
    }

    pub fn ticks_to_us(&self, ticks: u32) -> u32 {
        if self.sysclock_hz == 0 {
            return 0;
        }
        let us = ticks as u64 * self.prescaler.divisor() as u64 * US_PER_S
            / self.sysclock_hz as u64;
        us.min(u32::MAX as u64) as u32
    }

    /// Same as [`us_to_ticks`](Self::us_to_ticks), bounded by the OCR1A range.
    pub fn timer16_ticks(&self, us: u32) -> Result<u16> {
        let ticks = self.us_to_ticks(us)?;
        u16::try_from(ticks).map_err(|_| TimingError::TimerOverflow { ticks })
    }

    /// Ticks between output toggles for a square wave at `freq_hz`, rounded
    /// to the nearest tick.
    pub fn carrier_half_period_ticks(&self, freq_hz: u32) -> Result<u16> {
        if freq_hz == 0 {
            return Err(TimingError::ZeroFrequency);
        }
        let toggle_hz = freq_hz as u64 * 2;
        let ticks = (self.tick_hz() as u64 + toggle_hz / 2) / toggle_hz;
        if ticks == 0 {
            return Err(TimingError::BelowResolution);
        }
        u16::try_from(ticks).map_err(|_| TimingError::TimerOverflow {
            ticks: ticks as u32,
        })
    }
}
