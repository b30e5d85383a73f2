//! User bank GPIO table
//!
//! Every GPIO supports digital input and output. GPIO26 to GPIO29 can also be used as
//! Analogue to Digital Converter (ADC) inputs, which is why they carry an `ADCn_` prefix.
//!
//! ```
//! use rp2040_pins::{AdcChannel, Gpio};
//!
//! let pin = Gpio::from_physical_pin(38).unwrap();
//! assert_eq!(pin, Gpio::ADC0_Gpio26);
//! assert_eq!(pin.number(), 26);
//! assert_eq!(pin.adc_channel(), Some(AdcChannel::Adc0));
//! ```

use core::fmt;

use crate::func::{AlternateFunctions, Function};
use crate::pin_type::PinType;
use crate::USER_BANK_PIN_COUNT;

/// Error type for lookups that fall outside of the user bank table.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidPin {
    /// No user bank GPIO has this number (valid range is 0 to 29).
    GpioNumber(u8),
    /// No user bank GPIO is bonded to this package pin.
    PhysicalPin(u8),
}

impl fmt::Display for InvalidPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidPin::GpioNumber(n) => write!(f, "GPIO{} is not part of the user bank", n),
            InvalidPin::PhysicalPin(n) => {
                write!(f, "package pin {} is not a user bank GPIO", n)
            }
        }
    }
}

/// ADC input a GPIO is routed to.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdcChannel {
    /// ADC input 0 (GPIO26)
    Adc0,
    /// ADC input 1 (GPIO27)
    Adc1,
    /// ADC input 2 (GPIO28)
    Adc2,
    /// ADC input 3 (GPIO29)
    Adc3,
}

impl AdcChannel {
    /// Index of the input in the ADC's `AINSEL` numbering.
    pub const fn index(self) -> u8 {
        match self {
            AdcChannel::Adc0 => 0,
            AdcChannel::Adc1 => 1,
            AdcChannel::Adc2 => 2,
            AdcChannel::Adc3 => 3,
        }
    }
}

macro_rules! gpio_table {
    ($($(#[$doc:meta])* $name:ident: $num:literal => $phys:literal),+ $(,)?) => {
        paste::paste! {
            /// GPIO numbers and their associated physical pin numbers on the RP2040 package.
            ///
            /// The discriminant of each variant is the package pin the GPIO is bonded to, so
            /// `Gpio::Gpio16 as u8` is `27`. Prefer [`Gpio::physical_pin`] over the cast.
            #[cfg_attr(feature = "defmt", derive(defmt::Format))]
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
            #[allow(non_camel_case_types)]
            #[repr(u8)]
            pub enum Gpio {
                $(
                    $(#[$doc])*
                    ///
                    #[doc = "GPIO" $num ", package pin " $phys "."]
                    $name = $phys,
                )+
            }

            impl Gpio {
                /// Every user bank GPIO, ordered by GPIO number.
                pub const ALL: [Gpio; USER_BANK_PIN_COUNT] = [$(Gpio::$name),+];

                /// GPIO number (0 to 29).
                pub const fn number(self) -> u8 {
                    match self {
                        $(Gpio::$name => $num,)+
                    }
                }

                /// Identifier of the GPIO as it appears in the table.
                pub const fn name(self) -> &'static str {
                    match self {
                        $(Gpio::$name => stringify!($name),)+
                    }
                }
            }
        }
    };
}

gpio_table!(
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI0 RX  | UART0 TX  | I2C0 SDA | PWM0 A
    Gpio0: 0 => 2,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI0 CSn | UART0 RX  | I2C0 SCL | PWM0 B
    Gpio1: 1 => 3,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI0 SCK | UART0 CTS | I2C1 SDA | PWM1 A
    Gpio2: 2 => 4,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI0 TX  | UART0 RTS | I2C1 SCL | PWM1 B
    Gpio3: 3 => 5,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI0 RX  | UART1 TX  | I2C0 SDA | PWM2 A
    Gpio4: 4 => 6,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI0 CSn | UART1 RX  | I2C0 SCL | PWM2 B
    Gpio5: 5 => 7,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI0 SCK | UART1 CTS | I2C1 SDA | PWM3 A
    Gpio6: 6 => 8,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI0 TX  | UART1 RTS | I2C1 SCL | PWM3 B
    Gpio7: 7 => 9,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI1 RX  | UART1 TX  | I2C0 SDA | PWM4 A
    Gpio8: 8 => 11,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI1 CSn | UART1 RX  | I2C0 SCL | PWM4 B
    Gpio9: 9 => 12,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI1 SCK | UART1 CTS | I2C1 SDA | PWM5 A
    Gpio10: 10 => 13,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI1 TX  | UART1 RTS | I2C1 SCL | PWM5 B
    Gpio11: 11 => 14,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI1 RX  | UART0 TX  | I2C0 SDA | PWM6 A
    Gpio12: 12 => 15,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI1 CSn | UART0 RX  | I2C0 SCL | PWM6 B
    Gpio13: 13 => 16,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI1 SCK | UART0 CTS | I2C1 SDA | PWM7 A
    Gpio14: 14 => 17,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI1 TX  | UART0 RTS | I2C1 SCL | PWM7 B
    Gpio15: 15 => 18,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI0 RX  | UART0 TX  | I2C0 SDA | PWM0 A
    Gpio16: 16 => 27,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI0 CSn | UART0 RX  | I2C0 SCL | PWM0 B
    Gpio17: 17 => 28,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI0 SCK | UART0 CTS | I2C1 SDA | PWM1 A
    Gpio18: 18 => 29,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI0 TX  | UART0 RTS | I2C1 SCL | PWM1 B
    Gpio19: 19 => 30,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI0 RX  | UART1 TX  | I2C0 SDA | PWM2 A | CLOCK GPIN0
    Gpio20: 20 => 31,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI0 CSn | UART1 RX  | I2C0 SCL | PWM2 B | CLOCK GPOUT0
    Gpio21: 21 => 32,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI0 SCK | UART1 CTS | I2C1 SDA | PWM3 A | CLOCK GPIN1
    Gpio22: 22 => 34,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI0 TX  | UART1 RTS | I2C1 SCL | PWM3 B | CLOCK GPOUT1
    Gpio23: 23 => 35,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI1 RX  | UART1 TX  | I2C0 SDA | PWM4 A | CLOCK GPOUT2
    Gpio24: 24 => 36,
    /// Digital IO (Fault Tolerant - Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI1 CSn | UART1 RX  | I2C0 SCL | PWM4 B | CLOCK GPOUT3
    Gpio25: 25 => 37,
    /// Digital IO / ADC input 0 (Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI1 SCK | UART1 CTS | I2C1 SDA | PWM5 A
    ADC0_Gpio26: 26 => 38,
    /// Digital IO / ADC input 1 (Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI1 TX  | UART1 RTS | I2C1 SCL | PWM5 B
    ADC1_Gpio27: 27 => 39,
    /// Digital IO / ADC input 2 (Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI1 RX  | UART0 TX  | I2C0 SDA | PWM6 A
    ADC2_Gpio28: 28 => 40,
    /// Digital IO / ADC input 3 (Reset state -> Pull Down, 4mA Drive)
    /// Alternate SPI1 CSn | UART0 RX  | I2C0 SCL | PWM6 B
    ADC3_Gpio29: 29 => 41,
);

impl Gpio {
    /// Package pin this GPIO is bonded to.
    #[inline]
    pub const fn physical_pin(self) -> u8 {
        self as u8
    }

    /// Look a GPIO up by its number (0 to 29).
    pub fn from_number(number: u8) -> Result<Gpio, InvalidPin> {
        Self::ALL
            .get(usize::from(number))
            .copied()
            .ok_or(InvalidPin::GpioNumber(number))
    }

    /// Look a GPIO up by the package pin it is bonded to.
    pub fn from_physical_pin(pin: u8) -> Result<Gpio, InvalidPin> {
        Self::ALL
            .iter()
            .copied()
            .find(|gpio| gpio.physical_pin() == pin)
            .ok_or(InvalidPin::PhysicalPin(pin))
    }

    /// ADC input this GPIO doubles as, if any.
    pub const fn adc_channel(self) -> Option<AdcChannel> {
        match self {
            Gpio::ADC0_Gpio26 => Some(AdcChannel::Adc0),
            Gpio::ADC1_Gpio27 => Some(AdcChannel::Adc1),
            Gpio::ADC2_Gpio28 => Some(AdcChannel::Adc2),
            Gpio::ADC3_Gpio29 => Some(AdcChannel::Adc3),
            _ => None,
        }
    }

    /// Electrical class of the pad.
    pub const fn pin_type(self) -> PinType {
        match self.adc_channel() {
            Some(_) => PinType::DigitalBidirectionalAnalogue,
            None => PinType::DigitalBidirectionalFaultTolerant,
        }
    }

    /// Peripheral functions the pin's multiplexer can select.
    #[inline]
    pub const fn functions(self) -> AlternateFunctions {
        AlternateFunctions::for_gpio(self.number())
    }

    /// Whether `function` can be routed to this pin.
    pub fn supports(self, function: Function) -> bool {
        self.functions().contains(function)
    }
}

impl fmt::Display for Gpio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_physical_pins() {
        assert_eq!(Gpio::Gpio0.physical_pin(), 2);
        assert_eq!(Gpio::ADC3_Gpio29.physical_pin(), 41);
        assert_eq!(Gpio::Gpio16.physical_pin(), 27);
    }

    #[test]
    fn all_is_ordered_by_gpio_number() {
        for (index, gpio) in Gpio::ALL.iter().enumerate() {
            assert_eq!(usize::from(gpio.number()), index);
        }
    }

    #[test]
    fn physical_pins_are_unique() {
        for (i, a) in Gpio::ALL.iter().enumerate() {
            for b in &Gpio::ALL[i + 1..] {
                assert_ne!(a.physical_pin(), b.physical_pin(), "{} and {}", a, b);
            }
        }
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in Gpio::ALL.iter().enumerate() {
            for b in &Gpio::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn reverse_lookups() {
        for gpio in Gpio::ALL {
            assert_eq!(Gpio::from_number(gpio.number()), Ok(gpio));
            assert_eq!(Gpio::from_physical_pin(gpio.physical_pin()), Ok(gpio));
        }
        assert_eq!(Gpio::from_number(30), Err(InvalidPin::GpioNumber(30)));
        // IOVDD, TESTEN, RUN and IOVDD again, then past the end of the package.
        for pin in [0, 1, 10, 19, 26, 33, 42, 56] {
            assert_eq!(
                Gpio::from_physical_pin(pin),
                Err(InvalidPin::PhysicalPin(pin))
            );
        }
    }

    #[test]
    fn adc_pins() {
        let adc: Vec<_> = Gpio::ALL.iter().filter_map(|g| g.adc_channel()).collect();
        assert_eq!(
            adc,
            [
                AdcChannel::Adc0,
                AdcChannel::Adc1,
                AdcChannel::Adc2,
                AdcChannel::Adc3
            ]
        );
        assert_eq!(Gpio::ADC2_Gpio28.adc_channel().map(AdcChannel::index), Some(2));
        assert_eq!(Gpio::Gpio25.adc_channel(), None);
    }

    #[test]
    fn pin_types() {
        assert_eq!(
            Gpio::Gpio25.pin_type(),
            PinType::DigitalBidirectionalFaultTolerant
        );
        assert_eq!(
            Gpio::ADC0_Gpio26.pin_type(),
            PinType::DigitalBidirectionalAnalogue
        );
    }

    #[test]
    fn display() {
        assert_eq!(Gpio::ADC1_Gpio27.to_string(), "ADC1_Gpio27");
        assert_eq!(
            InvalidPin::PhysicalPin(10).to_string(),
            "package pin 10 is not a user bank GPIO"
        );
    }
}
