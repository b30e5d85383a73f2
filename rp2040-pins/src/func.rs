//! Peripheral function multiplexing
//!
//! Each GPIO can have one function selected at a time. Each peripheral input (e.g. UART0 RX)
//! should only be selected on one GPIO at a time: if the same peripheral input is connected to
//! multiple GPIOs, the peripheral sees the logical OR of these GPIO inputs.
//!
//! The tables here describe what each multiplexer *can* select. Nothing in this crate tracks what
//! is selected, nor whether two pins claim the same peripheral signal.

use crate::gpio::Gpio;

/// Alternate function a pin's multiplexer may select.
#[allow(missing_docs)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    I2c0,
    I2c1,
    Spi0,
    Spi1,
    Uart0,
    Uart1,
    Pwm0A,
    Pwm0B,
    Pwm1A,
    Pwm1B,
    Pwm2A,
    Pwm2B,
    Pwm3A,
    Pwm3B,
    Pwm4A,
    Pwm4B,
    Pwm5A,
    Pwm5B,
    Pwm6A,
    Pwm6B,
    Pwm7A,
    Pwm7B,
    ClockGpin0,
    ClockGpout0,
    ClockGpin1,
    ClockGpout1,
    ClockGpout2,
    ClockGpout3,
}

/// PWM channels indexed by `slice * 2 + channel`.
const PWM_CHANNELS: [Function; 16] = [
    Function::Pwm0A,
    Function::Pwm0B,
    Function::Pwm1A,
    Function::Pwm1B,
    Function::Pwm2A,
    Function::Pwm2B,
    Function::Pwm3A,
    Function::Pwm3B,
    Function::Pwm4A,
    Function::Pwm4B,
    Function::Pwm5A,
    Function::Pwm5B,
    Function::Pwm6A,
    Function::Pwm6B,
    Function::Pwm7A,
    Function::Pwm7B,
];

impl Function {
    /// Every function, in declaration order.
    pub const ALL: [Function; 28] = [
        Function::I2c0,
        Function::I2c1,
        Function::Spi0,
        Function::Spi1,
        Function::Uart0,
        Function::Uart1,
        Function::Pwm0A,
        Function::Pwm0B,
        Function::Pwm1A,
        Function::Pwm1B,
        Function::Pwm2A,
        Function::Pwm2B,
        Function::Pwm3A,
        Function::Pwm3B,
        Function::Pwm4A,
        Function::Pwm4B,
        Function::Pwm5A,
        Function::Pwm5B,
        Function::Pwm6A,
        Function::Pwm6B,
        Function::Pwm7A,
        Function::Pwm7B,
        Function::ClockGpin0,
        Function::ClockGpout0,
        Function::ClockGpin1,
        Function::ClockGpout1,
        Function::ClockGpout2,
        Function::ClockGpout3,
    ];

    /// Value of the `FUNCSEL` field that routes this function to a pin.
    pub const fn funcsel(self) -> u8 {
        match self {
            Function::Spi0 | Function::Spi1 => 1,
            Function::Uart0 | Function::Uart1 => 2,
            Function::I2c0 | Function::I2c1 => 3,
            Function::ClockGpin0
            | Function::ClockGpout0
            | Function::ClockGpin1
            | Function::ClockGpout1
            | Function::ClockGpout2
            | Function::ClockGpout3 => 8,
            _ => 4,
        }
    }

    /// Iterate over the GPIOs this function can be routed to.
    pub fn pins(self) -> impl Iterator<Item = Gpio> {
        Gpio::ALL
            .into_iter()
            .filter(move |gpio| gpio.supports(self))
    }
}

/// Role of a pin on an SPI block.
#[allow(missing_docs)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpiSignal {
    Rx,
    Csn,
    Sck,
    Tx,
}

/// Role of a pin on a UART block.
#[allow(missing_docs)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UartSignal {
    Tx,
    Rx,
    Cts,
    Rts,
}

/// Role of a pin on an I2C block.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum I2cSignal {
    /// Serial data
    Sda,
    /// Serial clock
    Scl,
}

/// The alternate functions a single GPIO can select.
///
/// SIO, PIO0, PIO1 and USB are available on every user bank pin and are therefore not listed.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlternateFunctions {
    /// F1: SPI block and signal.
    pub spi: (Function, SpiSignal),
    /// F2: UART block and signal.
    pub uart: (Function, UartSignal),
    /// F3: I2C block and signal.
    pub i2c: (Function, I2cSignal),
    /// F4: PWM slice channel.
    pub pwm: Function,
    /// F8: clock generator input or output. Only GPIO20 to GPIO25.
    pub clock: Option<Function>,
}

impl AlternateFunctions {
    pub(crate) const fn for_gpio(num: u8) -> Self {
        let spi = if (num / 8) % 2 == 0 {
            Function::Spi0
        } else {
            Function::Spi1
        };
        let spi_signal = match num % 4 {
            0 => SpiSignal::Rx,
            1 => SpiSignal::Csn,
            2 => SpiSignal::Sck,
            _ => SpiSignal::Tx,
        };

        // UART blocks alternate every four pins, starting half way into the SPI pattern.
        let uart = if ((num + 4) / 8) % 2 == 0 {
            Function::Uart0
        } else {
            Function::Uart1
        };
        let uart_signal = match num % 4 {
            0 => UartSignal::Tx,
            1 => UartSignal::Rx,
            2 => UartSignal::Cts,
            _ => UartSignal::Rts,
        };

        let i2c = if (num / 2) % 2 == 0 {
            Function::I2c0
        } else {
            Function::I2c1
        };
        let i2c_signal = if num % 2 == 0 {
            I2cSignal::Sda
        } else {
            I2cSignal::Scl
        };

        let clock = match num {
            20 => Some(Function::ClockGpin0),
            21 => Some(Function::ClockGpout0),
            22 => Some(Function::ClockGpin1),
            23 => Some(Function::ClockGpout1),
            24 => Some(Function::ClockGpout2),
            25 => Some(Function::ClockGpout3),
            _ => None,
        };

        AlternateFunctions {
            spi: (spi, spi_signal),
            uart: (uart, uart_signal),
            i2c: (i2c, i2c_signal),
            pwm: PWM_CHANNELS[(num % 16) as usize],
            clock,
        }
    }

    /// Whether `function` is one of these alternates.
    pub fn contains(&self, function: Function) -> bool {
        self.spi.0 == function
            || self.uart.0 == function
            || self.i2c.0 == function
            || self.pwm == function
            || self.clock == Some(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpio0_functions() {
        assert_eq!(
            Gpio::Gpio0.functions(),
            AlternateFunctions {
                spi: (Function::Spi0, SpiSignal::Rx),
                uart: (Function::Uart0, UartSignal::Tx),
                i2c: (Function::I2c0, I2cSignal::Sda),
                pwm: Function::Pwm0A,
                clock: None,
            }
        );
    }

    #[test]
    fn adc_pin_functions() {
        assert_eq!(
            Gpio::ADC0_Gpio26.functions(),
            AlternateFunctions {
                spi: (Function::Spi1, SpiSignal::Sck),
                uart: (Function::Uart1, UartSignal::Cts),
                i2c: (Function::I2c1, I2cSignal::Sda),
                pwm: Function::Pwm5A,
                clock: None,
            }
        );
        assert_eq!(
            Gpio::ADC3_Gpio29.functions(),
            AlternateFunctions {
                spi: (Function::Spi1, SpiSignal::Csn),
                uart: (Function::Uart0, UartSignal::Rx),
                i2c: (Function::I2c0, I2cSignal::Scl),
                pwm: Function::Pwm6B,
                clock: None,
            }
        );
    }

    #[test]
    fn uart_blocks() {
        let uart1: Vec<u8> = Function::Uart1.pins().map(Gpio::number).collect();
        assert_eq!(
            uart1,
            [4, 5, 6, 7, 8, 9, 10, 11, 20, 21, 22, 23, 24, 25, 26, 27]
        );
    }

    #[test]
    fn clock_pins() {
        let clocks: Vec<_> = Gpio::ALL
            .iter()
            .filter_map(|gpio| gpio.functions().clock.map(|f| (gpio.number(), f)))
            .collect();
        assert_eq!(
            clocks,
            [
                (20, Function::ClockGpin0),
                (21, Function::ClockGpout0),
                (22, Function::ClockGpin1),
                (23, Function::ClockGpout1),
                (24, Function::ClockGpout2),
                (25, Function::ClockGpout3),
            ]
        );
    }

    #[test]
    fn pwm_channels_repeat_every_sixteen_pins() {
        assert_eq!(Gpio::Gpio15.functions().pwm, Function::Pwm7B);
        assert_eq!(Gpio::Gpio16.functions().pwm, Function::Pwm0A);
        let pwm0a: Vec<_> = Function::Pwm0A.pins().collect();
        assert_eq!(pwm0a, [Gpio::Gpio0, Gpio::Gpio16]);
        assert_eq!(Function::Pwm7B.pins().count(), 1);
    }

    #[test]
    fn every_function_reaches_a_pin() {
        for function in Function::ALL {
            assert!(function.pins().next().is_some(), "{:?}", function);
        }
    }

    #[test]
    fn supports() {
        assert!(Gpio::Gpio21.supports(Function::ClockGpout0));
        assert!(!Gpio::Gpio19.supports(Function::ClockGpout0));
        assert!(Gpio::Gpio2.supports(Function::I2c1));
        assert!(!Gpio::Gpio2.supports(Function::I2c0));
    }

    #[test]
    fn funcsel_values() {
        assert_eq!(Function::Spi1.funcsel(), 1);
        assert_eq!(Function::Uart0.funcsel(), 2);
        assert_eq!(Function::I2c1.funcsel(), 3);
        assert_eq!(Function::Pwm3B.funcsel(), 4);
        assert_eq!(Function::ClockGpout2.funcsel(), 8);
    }
}
