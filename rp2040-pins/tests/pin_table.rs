//! Board designs key off these package pin numbers. They describe silicon and must never change.

use rp2040_pins::{Gpio, InvalidPin, USER_BANK_PIN_COUNT};

const TABLE: [(&str, u8, u8); USER_BANK_PIN_COUNT] = [
    ("Gpio0", 0, 2),
    ("Gpio1", 1, 3),
    ("Gpio2", 2, 4),
    ("Gpio3", 3, 5),
    ("Gpio4", 4, 6),
    ("Gpio5", 5, 7),
    ("Gpio6", 6, 8),
    ("Gpio7", 7, 9),
    ("Gpio8", 8, 11),
    ("Gpio9", 9, 12),
    ("Gpio10", 10, 13),
    ("Gpio11", 11, 14),
    ("Gpio12", 12, 15),
    ("Gpio13", 13, 16),
    ("Gpio14", 14, 17),
    ("Gpio15", 15, 18),
    ("Gpio16", 16, 27),
    ("Gpio17", 17, 28),
    ("Gpio18", 18, 29),
    ("Gpio19", 19, 30),
    ("Gpio20", 20, 31),
    ("Gpio21", 21, 32),
    ("Gpio22", 22, 34),
    ("Gpio23", 23, 35),
    ("Gpio24", 24, 36),
    ("Gpio25", 25, 37),
    ("ADC0_Gpio26", 26, 38),
    ("ADC1_Gpio27", 27, 39),
    ("ADC2_Gpio28", 28, 40),
    ("ADC3_Gpio29", 29, 41),
];

#[test]
fn table_snapshot() {
    assert_eq!(Gpio::ALL.len(), TABLE.len());
    for (gpio, (name, number, physical)) in Gpio::ALL.iter().zip(TABLE) {
        assert_eq!(gpio.name(), name);
        assert_eq!(gpio.number(), number, "{}", name);
        assert_eq!(gpio.physical_pin(), physical, "{}", name);
        assert_eq!(*gpio as u8, physical, "{}", name);
    }
}

#[test]
fn discriminant_is_physical_pin() {
    assert_eq!(Gpio::Gpio0 as u8, 2);
    assert_eq!(Gpio::Gpio16 as u8, 27);
    assert_eq!(Gpio::ADC3_Gpio29 as u8, 41);
}

#[test]
fn lookup_by_physical_pin() {
    for (name, _, physical) in TABLE {
        let gpio = Gpio::from_physical_pin(physical).map(Gpio::name);
        assert_eq!(gpio, Ok(name));
    }
    assert_eq!(
        Gpio::from_physical_pin(33),
        Err(InvalidPin::PhysicalPin(33))
    );
}

#[test]
fn const_lookups() {
    const PIN: u8 = Gpio::ADC1_Gpio27.physical_pin();
    const NUMBER: u8 = Gpio::ADC1_Gpio27.number();
    assert_eq!((PIN, NUMBER), (39, 27));
}
