//! I2C bus speed classes
//!
//! The I2C block must only be programmed to operate in either controller OR peripheral mode.
//! Operating as a controller and peripheral simultaneously is not supported. See [`I2cRole`].

use fugit::HertzU32;

/// Speed classes the I2C block can operate in.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum I2cSpeedMode {
    /// Standard mode, data rates from 0 to 100kbps.
    Standard = 100,
    /// Fast mode, data rates less than or equal to 400kbps.
    Fast = 400,
    /// Fast mode plus, data rates less than or equal to 1000kbps.
    FastPlus = 1000,
}

impl I2cSpeedMode {
    /// Every speed class, slowest first.
    pub const ALL: [I2cSpeedMode; 3] = [
        I2cSpeedMode::Standard,
        I2cSpeedMode::Fast,
        I2cSpeedMode::FastPlus,
    ];

    /// Highest data rate of the class, in kbps.
    #[inline]
    pub const fn max_kbps(self) -> u16 {
        self as u16
    }

    /// Highest SCL frequency of the class.
    pub const fn max_rate(self) -> HertzU32 {
        HertzU32::kHz(self.max_kbps() as u32)
    }

    /// Slowest class able to run the bus at `rate`, if any.
    pub fn for_rate(rate: HertzU32) -> Option<I2cSpeedMode> {
        Self::ALL.into_iter().find(|mode| rate <= mode.max_rate())
    }
}

/// Role of an I2C block. A block operates as exactly one of these at a time.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum I2cRole {
    /// Drives SCL and starts transfers (master).
    Controller,
    /// Answers a controller at its own address (slave).
    Peripheral,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates() {
        assert_eq!(I2cSpeedMode::Standard.max_kbps(), 100);
        assert_eq!(I2cSpeedMode::Fast.max_rate(), HertzU32::kHz(400));
        assert_eq!(I2cSpeedMode::FastPlus.max_rate().to_Hz(), 1_000_000);
    }

    #[test]
    fn class_for_rate() {
        assert_eq!(
            I2cSpeedMode::for_rate(HertzU32::kHz(100)),
            Some(I2cSpeedMode::Standard)
        );
        assert_eq!(
            I2cSpeedMode::for_rate(HertzU32::kHz(100) + HertzU32::Hz(1)),
            Some(I2cSpeedMode::Fast)
        );
        assert_eq!(
            I2cSpeedMode::for_rate(HertzU32::MHz(1)),
            Some(I2cSpeedMode::FastPlus)
        );
        assert_eq!(I2cSpeedMode::for_rate(HertzU32::kHz(1001)), None);
    }
}
