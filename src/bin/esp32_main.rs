//! ESP32-C3 SuperMini dual temperature display.
//!
//! This is the main entry point for the physical hardware. It wires up the
//! two TM1637 panels, runs the visible startup sequence (status 1, 2, 3),
//! then enters a 10Hz polling loop that:
//! - Polls the USB serial console for `"cpu,gpu"` telemetry lines
//! - Renders readings onto the CPU and GPU panels
//! - Shows `E-XX` codes for parse, format and timeout errors
//!
//! # Wiring
//!
//! - CPU display: CLK → GPIO0, DIO → GPIO1
//! - GPU display: CLK → GPIO2, DIO → GPIO3
//! - Both displays: VCC → 5V, GND → GND
//!
//! # Build
//!
//! ```bash
//! cargo build --features esp32 --bin esp32_main
//! ```

use esp_idf_hal::delay::Delay;
use esp_idf_hal::gpio::PinDriver;
use esp_idf_hal::peripherals::Peripherals;

use segtherm::hal::esp32::Esp32Clock;
use segtherm::hal::StdinLineSource;
use segtherm::{DualRenderer, ErrorCode, MonitorConfig, TempMonitor, TickOutcome, Tm1637};

fn main() -> anyhow::Result<()> {
    // Initialize ESP-IDF
    esp_idf_hal::sys::link_patches();

    println!();
    println!("================================");
    println!("  segtherm temperature display");
    println!("================================");
    println!();

    let config = MonitorConfig::default();

    let peripherals = Peripherals::take()?;

    // =========================================================================
    // Initialize CPU display (TM1637 on GPIO0/1)
    // =========================================================================
    let mut cpu_clk = PinDriver::output(peripherals.pins.gpio0)?;
    let mut cpu_dio = PinDriver::output(peripherals.pins.gpio1)?;
    // Bus idles with both lines high.
    cpu_clk.set_high()?;
    cpu_dio.set_high()?;
    let cpu_panel = Tm1637::new(cpu_clk, cpu_dio, Delay::new_default());
    println!("[OK] CPU display initialized (GPIO0/1)");

    // =========================================================================
    // Initialize GPU display (TM1637 on GPIO2/3)
    // =========================================================================
    let mut gpu_clk = PinDriver::output(peripherals.pins.gpio2)?;
    let mut gpu_dio = PinDriver::output(peripherals.pins.gpio3)?;
    gpu_clk.set_high()?;
    gpu_dio.set_high()?;
    let gpu_panel = Tm1637::new(gpu_clk, gpu_dio, Delay::new_default());
    println!("[OK] GPU display initialized (GPIO2/3)");

    // =========================================================================
    // Initialize Clock, Line Source and Monitor
    // =========================================================================
    let clock = Esp32Clock::new();
    let mut source = StdinLineSource::spawn();
    let mut monitor = TempMonitor::new(DualRenderer::new(cpu_panel, gpu_panel), config);

    // =========================================================================
    // Startup sequence (status 1 -> 2 -> 3)
    // =========================================================================
    println!("Status 1: Boot successful");
    println!("Status 2: Waiting for serial connection");
    println!("Status 3: Connected, waiting for temperature data");
    let mut delay = Delay::new_default();
    monitor.startup(&mut delay)?;

    println!();
    println!("Starting monitor loop (10Hz)...");
    println!();

    // =========================================================================
    // Main Monitor Loop (10Hz)
    // =========================================================================
    monitor.run(&mut source, &clock, &mut delay, |line, outcome| {
        if let Some(line) = line.filter(|l| !l.is_empty()) {
            println!("Received: {}", line);
        }

        match outcome {
            TickOutcome::Idle => {}
            TickOutcome::Updated(reading) => {
                println!("Displayed - CPU: {}C, GPU: {}C", reading.cpu, reading.gpu);
            }
            TickOutcome::ErrorShown(code) => match code {
                ErrorCode::Parse => println!("Error: field failed numeric parse (E-10)"),
                ErrorCode::Format => println!("Error: line has no separator (E-11)"),
                ErrorCode::DataTimeout => {
                    println!("Error: no data received for 10 seconds (E-20)")
                }
                ErrorCode::Unknown => println!("Error: unexpected failure (E-99)"),
            },
            TickOutcome::Fault => println!("!! Panel write failed, backing off !!"),
        }
    })
}
