//! # Idle Example
//!
//! Looks up the package pin of GPIO0, reports it over RTT and then parks the core for good.
//!
//! The core sleeps in `wfi` with no interrupt enabled, so the program never returns and never
//! spins. It only stops when the probe or a reset takes the chip away from it.
//!
//! See the `Cargo.toml` file for Copyright and license details.

#![no_std]
#![no_main]

// Print panic messages over defmt before halting
use panic_probe as _;

// defmt transport
use defmt_rtt as _;

// Alias for our HAL crate
use rp2040_hal as hal;

use rp2040_pins::Gpio;

/// The linker will place this boot block at the start of our program image. We
/// need this to help the ROM bootloader get our code up and running.
#[link_section = ".boot2"]
#[used]
pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_GENERIC_03H;

/// Entry point to our bare-metal application.
///
/// The `#[rp2040_hal::entry]` macro ensures the Cortex-M start-up code calls this function
/// as soon as all global variables and the spinlock are initialised.
#[hal::entry]
fn main() -> ! {
    defmt::info!("Hello from rp2040-pins!");

    let pin = Gpio::Gpio0;
    defmt::info!("{} is bonded to package pin {}", pin, pin.physical_pin());

    loop {
        cortex_m::asm::wfi();
    }
}
