#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
mod firmware {
    use panic_halt as _;

    use avr_device::atmega328p::{Peripherals, TC1, USART0};
    use embedded_hal::serial;
    use rc5xmit::config::{ACTIVE_PROTOCOL, CLOCK, SYSCLOCK, UART_BAUD};
    use rc5xmit::SerialConsole;

    // (16_000_000 / (16 * 9600)) - 1
    const UBRR: u16 = (SYSCLOCK / (16 * UART_BAUD) - 1) as u16;

    struct Usart0 {
        usart: USART0,
        // set by write, cleared once TXC0 reports the shift register empty
        pending: bool,
    }

    impl Usart0 {
        fn new(usart: USART0) -> Self {
            unsafe {
                usart.ubrr0.write(|w| w.bits(UBRR));
                // 8N1, transmitter only
                usart.ucsr0c.write(|w| w.bits(0x06));
                usart.ucsr0b.write(|w| w.bits(0x08));
            }
            Self {
                usart,
                pending: false,
            }
        }
    }

    impl serial::Write<u8> for Usart0 {
        type Error = core::convert::Infallible;

        fn write(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
            if self.usart.ucsr0a.read().udre0().bit_is_clear() {
                return Err(nb::Error::WouldBlock);
            }
            // TXC0 clears by writing a one
            self.usart.ucsr0a.modify(|_, w| w.txc0().set_bit());
            unsafe { self.usart.udr0.write(|w| w.bits(byte)) };
            self.pending = true;
            Ok(())
        }

        fn flush(&mut self) -> nb::Result<(), Self::Error> {
            if self.pending && self.usart.ucsr0a.read().txc0().bit_is_clear() {
                return Err(nb::Error::WouldBlock);
            }
            self.pending = false;
            Ok(())
        }
    }

    /// Normal mode, clocked at the state machine rate
    fn start_timer1(tc1: &TC1) {
        unsafe {
            tc1.tccr1a.write(|w| w.bits(0));
            tc1.tcnt1.write(|w| w.bits(0));
            tc1.tccr1b.write(|w| w.bits(CLOCK.prescaler.clock_select_bits()));
        }
    }

    #[avr_device::entry]
    fn main() -> ! {
        let Some(dp) = Peripherals::take() else {
            #[allow(clippy::empty_loop)]
            loop {}
        };

        start_timer1(&dp.TC1);

        let mut console = SerialConsole::new(Usart0::new(dp.USART0));
        console.write_line("rc5xmit v0.1.0").ok();
        rc5xmit::report(&mut console, ACTIVE_PROTOCOL, &CLOCK).ok();

        #[allow(clippy::empty_loop)]
        loop {}
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {
    use embedded_hal::serial;
    use rc5xmit::config::{ACTIVE_PROTOCOL, CLOCK};
    use rc5xmit::SerialConsole;
    use std::io::Write;

    struct Stdout(std::io::Stdout);

    impl serial::Write<u8> for Stdout {
        type Error = std::io::Error;

        fn write(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
            self.0.write_all(&[byte]).map_err(nb::Error::Other)
        }

        fn flush(&mut self) -> nb::Result<(), Self::Error> {
            self.0.flush().map_err(nb::Error::Other)
        }
    }

    let mut console = SerialConsole::new(Stdout(std::io::stdout()));
    if let Err(err) = rc5xmit::report(&mut console, ACTIVE_PROTOCOL, &CLOCK) {
        eprintln!("failed to write report: {:?}", err);
        std::process::exit(1);
    }
}
