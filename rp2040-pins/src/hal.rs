//! Conversions into the value-level gpio types of [`rp2040_hal`]
//!
//! These only translate values. Programming a pad with the result is left to the HAL:
//! ```no_run
//! use rp2040_hal::gpio::{OutputDriveStrength, OutputSlewRate};
//! use rp2040_pins::{DriveStrength, SlewRate};
//!
//! let strength: OutputDriveStrength = DriveStrength::DEFAULT.into();
//! let slew: OutputSlewRate = SlewRate::Fast.into();
//! # let _ = (strength, slew);
//! ```

use rp2040_hal::gpio::{
    DynBankId, DynFunction, DynPinId, DynPullType, OutputDriveStrength, OutputSlewRate,
};

use crate::func::Function;
use crate::gpio::Gpio;
use crate::pad::{DriveStrength, PadConfig, PullDown, PullUp, SlewRate};

impl From<DriveStrength> for OutputDriveStrength {
    fn from(strength: DriveStrength) -> Self {
        match strength {
            DriveStrength::TwoMilliAmps => OutputDriveStrength::TwoMilliAmps,
            DriveStrength::FourMilliAmps => OutputDriveStrength::FourMilliAmps,
            DriveStrength::EightMilliAmps => OutputDriveStrength::EightMilliAmps,
            DriveStrength::TwelveMilliAmps => OutputDriveStrength::TwelveMilliAmps,
        }
    }
}

impl From<OutputDriveStrength> for DriveStrength {
    fn from(strength: OutputDriveStrength) -> Self {
        match strength {
            OutputDriveStrength::TwoMilliAmps => DriveStrength::TwoMilliAmps,
            OutputDriveStrength::FourMilliAmps => DriveStrength::FourMilliAmps,
            OutputDriveStrength::EightMilliAmps => DriveStrength::EightMilliAmps,
            OutputDriveStrength::TwelveMilliAmps => DriveStrength::TwelveMilliAmps,
        }
    }
}

impl From<SlewRate> for OutputSlewRate {
    fn from(rate: SlewRate) -> Self {
        match rate {
            SlewRate::Slow => OutputSlewRate::Slow,
            SlewRate::Fast => OutputSlewRate::Fast,
        }
    }
}

impl From<OutputSlewRate> for SlewRate {
    fn from(rate: OutputSlewRate) -> Self {
        match rate {
            OutputSlewRate::Slow => SlewRate::Slow,
            OutputSlewRate::Fast => SlewRate::Fast,
        }
    }
}

impl From<PadConfig> for DynPullType {
    fn from(config: PadConfig) -> Self {
        match (config.pull_up, config.pull_down) {
            (PullUp::Disabled, PullDown::Disabled) => DynPullType::None,
            (PullUp::Enabled, PullDown::Disabled) => DynPullType::Up,
            (PullUp::Disabled, PullDown::Enabled) => DynPullType::Down,
            (PullUp::Enabled, PullDown::Enabled) => DynPullType::BusKeep,
        }
    }
}

impl PadConfig {
    /// Copy of this configuration with the pulls set from a HAL pull type.
    pub const fn with_pull(mut self, pull: DynPullType) -> Self {
        let (up, down) = match pull {
            DynPullType::None => (PullUp::Disabled, PullDown::Disabled),
            DynPullType::Up => (PullUp::Enabled, PullDown::Disabled),
            DynPullType::Down => (PullUp::Disabled, PullDown::Enabled),
            DynPullType::BusKeep => (PullUp::Enabled, PullDown::Enabled),
        };
        self.pull_up = up;
        self.pull_down = down;
        self
    }
}

impl From<Gpio> for DynPinId {
    fn from(gpio: Gpio) -> Self {
        DynPinId {
            bank: DynBankId::Bank0,
            num: gpio.number(),
        }
    }
}

impl From<Function> for DynFunction {
    fn from(function: Function) -> Self {
        match function {
            Function::Spi0 | Function::Spi1 => DynFunction::Spi,
            Function::Uart0 | Function::Uart1 => DynFunction::Uart,
            Function::I2c0 | Function::I2c1 => DynFunction::I2c,
            Function::ClockGpin0
            | Function::ClockGpout0
            | Function::ClockGpin1
            | Function::ClockGpout1
            | Function::ClockGpout2
            | Function::ClockGpout3 => DynFunction::Clock,
            _ => DynFunction::Pwm,
        }
    }
}
