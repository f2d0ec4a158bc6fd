//! Bit-level tests for the TM1637 transaction protocol.
//!
//! These replay the raw pin event log the way the controller chip would,
//! so a misordered edge or a missing clock pulse fails loudly instead of
//! corrupting a real display.

use segtherm::codes::StatusCode;
use segtherm::hal::{MockDelay, MockPin, PinId, SharedPinLog};
use segtherm::segments::{status_frame, temperature_frame, DisplayFrame};
use segtherm::Tm1637;

fn panel(log: &SharedPinLog) -> Tm1637<MockPin, MockPin, MockDelay> {
    Tm1637::new(
        MockPin::new(PinId::Clk, log),
        MockPin::new(PinId::Dio, log),
        MockDelay::new(),
    )
}

#[test]
fn frame_write_issues_three_command_transactions() {
    let log = SharedPinLog::default();
    let mut panel = panel(&log);

    let frame: DisplayFrame = [0x3F, 0x06, 0x5B, 0x4F];
    panel.write(frame).unwrap();

    assert_eq!(
        log.transaction_bytes(),
        vec![
            vec![0x40],                               // data write, auto-increment
            vec![0xC0, 0x3F, 0x06, 0x5B, 0x4F],       // address 0 + patterns
            vec![0x88 | 7],                           // display on, max brightness
        ]
    );
}

#[test]
fn display_control_carries_brightness() {
    let log = SharedPinLog::default();
    let mut panel = panel(&log);
    panel.set_brightness(3);

    panel.write(temperature_frame(45.0)).unwrap();

    let transactions = log.transaction_bytes();
    assert_eq!(transactions.last().unwrap(), &vec![0x88 | 3]);
}

#[test]
fn status_frame_reaches_the_wire_unchanged() {
    let log = SharedPinLog::default();
    let mut panel = panel(&log);

    let frame = status_frame(StatusCode::WaitingConnection);
    panel.write(frame).unwrap();

    let transactions = log.transaction_bytes();
    assert_eq!(&transactions[1][1..], &frame);
}

#[test]
fn clock_pulse_budget_per_frame() {
    let log = SharedPinLog::default();
    let mut panel = panel(&log);

    panel.write([0, 0, 0, 0]).unwrap();

    // 7 bytes on the wire at 9 pulses each (8 data bits + 1 ack-ignore),
    // plus the rising clock edge inside each of the three stop conditions.
    assert_eq!(log.rising_edges(PinId::Clk), 7 * 9 + 3);
}

#[test]
fn consecutive_writes_do_not_interleave() {
    let log = SharedPinLog::default();
    let mut panel = panel(&log);

    panel.write([0x3F; 4]).unwrap();
    panel.write([0x06; 4]).unwrap();

    let transactions = log.transaction_bytes();
    assert_eq!(transactions.len(), 6);
    assert_eq!(transactions[1], vec![0xC0, 0x3F, 0x3F, 0x3F, 0x3F]);
    assert_eq!(transactions[4], vec![0xC0, 0x06, 0x06, 0x06, 0x06]);
}

#[test]
fn transactions_frame_with_start_and_stop() {
    let log = SharedPinLog::default();
    let mut panel = panel(&log);

    panel.write([0, 0, 0, 0]).unwrap();

    let events = log.events();

    // The log begins with a start condition: DIO falls while CLK idles high.
    assert_eq!(events[0], (PinId::Dio, false));

    // The log ends with a stop condition: DIO low, CLK high, DIO high.
    assert_eq!(
        &events[events.len() - 3..],
        &[(PinId::Dio, false), (PinId::Clk, true), (PinId::Dio, true)]
    );
}
