//! Fireball - Flamethrower Solenoid Controller Firmware
//!
//! Main firmware binary for RP2040 boards. Drives the gas solenoid through
//! the burst profile, pulses the mode color on the status LED, sparks the
//! ignitor and serves a line console on UART0.
//!
//! Board wiring:
//!
//! | Function        | Pin       | Peripheral      |
//! |-----------------|-----------|-----------------|
//! | Solenoid        | GPIO16    | PWM slice 0 A   |
//! | LED red/green   | GPIO18/19 | PWM slice 1 A/B |
//! | LED blue        | GPIO20    | PWM slice 2 A   |
//! | Ignitor         | GPIO15    | output          |
//! | Fire button     | GPIO14    | input, pull-up  |
//! | Mode button     | GPIO13    | input, pull-up  |
//! | Flow pot        | GPIO26    | ADC0            |
//! | Console TX/RX   | GPIO0/1   | UART0           |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use fireball_core::Burst;
use fireball_hal_rp2040::{EmbassyClock, PwmRgbLed, PwmSolenoid, Rp2040FlashStorage};

use crate::channels::{publish_settings, report};
use crate::config::load_settings;
use crate::report::Report;
use crate::tasks::SignalIgnitor;

mod channels;
mod config;
mod report;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

/// Console baud rate
const CONSOLE_BAUD: u32 = 115_200;

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Fireball firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Settings first: every other task samples them
    let mut storage = Rp2040FlashStorage::new(p.FLASH, p.DMA_CH0);
    let (settings, from_flash) = load_settings(&mut storage).await;
    publish_settings(&settings);

    // Outputs come up closed and dark
    let solenoid = PwmSolenoid::new(Pwm::new_output_a(
        p.PWM_SLICE0,
        p.PIN_16,
        PwmConfig::default(),
    ));
    let led = PwmRgbLed::new(
        Pwm::new_output_ab(p.PWM_SLICE1, p.PIN_18, p.PIN_19, PwmConfig::default()),
        Pwm::new_output_a(p.PWM_SLICE2, p.PIN_20, PwmConfig::default()),
    );
    let spark_pin = Output::new(p.PIN_15, Level::Low);
    info!("Outputs initialized");

    let burst = Burst::new(EmbassyClock, solenoid, led, SignalIgnitor, settings);

    // Panel inputs
    let fire_button = Input::new(p.PIN_14, Pull::Up);
    let mode_button = Input::new(p.PIN_13, Pull::Up);
    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let pot_channel = Channel::new_pin(p.PIN_26, Pull::None);

    // Console
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = CONSOLE_BAUD;

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART initialized for console");

    // Spawn tasks
    spawner.spawn(tasks::settings_task(storage).unwrap());
    spawner.spawn(tasks::ignitor_task(spark_pin).unwrap());
    spawner.spawn(tasks::pot_task(adc, pot_channel).unwrap());
    spawner.spawn(tasks::console_tx_task(tx).unwrap());
    spawner.spawn(tasks::console_rx_task(rx).unwrap());
    spawner.spawn(tasks::button_task(fire_button, mode_button).unwrap());
    spawner.spawn(tasks::control_task(burst).unwrap());

    report(Report::Booted { from_flash });
    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
