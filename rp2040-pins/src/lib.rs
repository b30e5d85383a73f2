//! Pin and pad capability tables for the RP2040 microcontroller
//!
//! The RP2040 has 36 multi-functional General Purpose Input / Output (GPIO) pins, divided into two
//! banks. The QSPI bank (`QSPI_SS`, `QSPI_SCLK` and `QSPI_SD0` to `QSPI_SD3`) is used to execute
//! code from an external flash device, which leaves the user bank (GPIO0 to GPIO29) for general
//! use.
//!
//! This crate does not touch any register. It only describes the silicon: which package pin each
//! user-bank GPIO is bonded to, which electrical class it belongs to, which peripheral functions
//! its multiplexer can select and which pad options a driver may program.
//!
//! ## Basic usage
//! ```
//! use rp2040_pins::{DriveStrength, Gpio, PadConfig};
//!
//! assert_eq!(Gpio::Gpio0.physical_pin(), 2);
//! assert_eq!(Gpio::ADC3_Gpio29.physical_pin(), 41);
//! assert_eq!(PadConfig::default().drive_strength, DriveStrength::FourMilliAmps);
//! ```
//!
//! GPIO capabilities are transcribed from the RP2040 datasheet, build-date 2022-06-17.

#![deny(missing_docs)]
#![cfg_attr(not(test), no_std)]

pub mod func;
pub mod gpio;
#[cfg(feature = "rp2040-hal")]
pub mod hal;
pub mod i2c;
pub mod pad;
pub mod pin_type;

pub use func::{AlternateFunctions, Function, I2cSignal, SpiSignal, UartSignal};
pub use gpio::{AdcChannel, Gpio, InvalidPin};
pub use i2c::{I2cRole, I2cSpeedMode};
pub use pad::{
    DriveStrength, InputBuffer, OutputDriver, PadConfig, PullDown, PullUp, Schmitt, SlewRate,
    VoltageSelect,
};
pub use pin_type::PinType;

/// Number of GPIOs in the user bank (GPIO0 to GPIO29).
pub const USER_BANK_PIN_COUNT: usize = 30;

/// Number of GPIOs in the QSPI bank.
pub const QSPI_BANK_PIN_COUNT: usize = 6;

/// Number of GPIOs across both banks.
pub const TOTAL_GPIO_COUNT: usize = USER_BANK_PIN_COUNT + QSPI_BANK_PIN_COUNT;
