use embedded_hal_mock::serial::{Mock, Transaction};
use embedded_hal_mock::MockError;
use rc5xmit::config::{ACTIVE_PROTOCOL, CLOCK};
use rc5xmit::{report, ClockConfig, ConsoleError, Prescaler, SerialConsole};

const DEFAULT_REPORT: &[u8] = b"[INF] protocol: Philips TV\r\n\
[INF] sysclock: 16000000 Hz\r\n\
[INF] prescale: 8\r\n\
[INF] tick: 500000 ps\r\n\
[INF] carrier: 36000 Hz\r\n\
[INF] T: 889 us\r\n\
[INF] retrans gap: 128 T\r\n\
[INF] unit bits: 5\r\n\
[INF] button bits: 6\r\n\
[INF] unit code: 0x00\r\n\
[DBG] T ticks: 1778\r\n\
[DBG] gap ticks: 227584\r\n\
[DBG] carrier ticks: 28\r\n";

#[test]
fn default_profile_report() {
    let mut serial = Mock::new(&[
        Transaction::write_many(DEFAULT_REPORT),
        Transaction::flush(),
    ]);
    let mut console = SerialConsole::new(serial.clone());

    report(&mut console, ACTIVE_PROTOCOL, &CLOCK).unwrap();
    serial.done();
}

#[test]
fn unrepresentable_counts_are_reported_as_errors() {
    // T = 889us is not a whole number of 64us ticks, but 128T is (1778)
    let clock = ClockConfig::new(16_000_000, Prescaler::Div1024);
    let expected: &[u8] = b"[INF] protocol: Philips TV\r\n\
[INF] sysclock: 16000000 Hz\r\n\
[INF] prescale: 1024\r\n\
[INF] tick: 64000000 ps\r\n\
[INF] carrier: 36000 Hz\r\n\
[INF] T: 889 us\r\n\
[INF] retrans gap: 128 T\r\n\
[INF] unit bits: 5\r\n\
[INF] button bits: 6\r\n\
[INF] unit code: 0x00\r\n\
[ERR] T ticks: Inexact\r\n\
[DBG] gap ticks: 1778\r\n\
[ERR] carrier ticks: BelowResolution\r\n";
    let mut serial = Mock::new(&[Transaction::write_many(expected), Transaction::flush()]);
    let mut console = SerialConsole::new(serial.clone());

    report(&mut console, ACTIVE_PROTOCOL, &clock).unwrap();
    serial.done();
}

#[test]
fn serial_failure_stops_the_report() {
    let mut serial = Mock::new(&[
        Transaction::write_many(b"[INF] "),
        Transaction::write_error(b'p', nb::Error::Other(MockError::Io(std::io::ErrorKind::BrokenPipe))),
    ]);
    let mut console = SerialConsole::new(serial.clone());

    assert_eq!(
        report(&mut console, ACTIVE_PROTOCOL, &CLOCK),
        Err(ConsoleError::Serial)
    );
    serial.done();
}

#[test]
fn undivided_clock_reports_sub_nanosecond_tick() {
    // 1 / 16MHz = 62.5ns
    let clock = ClockConfig::new(16_000_000, Prescaler::Direct);
    let expected: &[u8] = b"[INF] protocol: Philips TV\r\n\
[INF] sysclock: 16000000 Hz\r\n\
[INF] prescale: 1\r\n\
[INF] tick: 62500 ps\r\n\
[INF] carrier: 36000 Hz\r\n\
[INF] T: 889 us\r\n\
[INF] retrans gap: 128 T\r\n\
[INF] unit bits: 5\r\n\
[INF] button bits: 6\r\n\
[INF] unit code: 0x00\r\n\
[DBG] T ticks: 14224\r\n\
[DBG] gap ticks: 1820672\r\n\
[DBG] carrier ticks: 222\r\n";
    let mut serial = Mock::new(&[Transaction::write_many(expected), Transaction::flush()]);
    let mut console = SerialConsole::new(serial.clone());

    report(&mut console, ACTIVE_PROTOCOL, &clock).unwrap();
    serial.done();
}
