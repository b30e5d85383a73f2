//! Pad electrical options
//!
//! Every user bank GPIO has a pad with the same set of programmable options. Each enum carries its
//! own default. The discriminants are the catalogue's option values (0 for disabled, 1 for
//! enabled), not register bits: the pad's `OD` bit is an output *disable*, so it holds the inverse
//! of [`OutputDriver`].
//!
//! Using IOVDD voltages greater than 1.8V with the input thresholds set for 1.8V may result in
//! damage to the chip. See [`VoltageSelect`].

macro_rules! pad_switch {
    ($(#[$doc:meta])* $name:ident, default: $default:ident) => {
        $(#[$doc])*
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            #[allow(missing_docs)]
            Disabled = 0,
            #[allow(missing_docs)]
            Enabled = 1,
        }

        impl $name {
            /// Every value of this option.
            pub const ALL: [$name; 2] = [$name::Disabled, $name::Enabled];
            /// Value selected when nothing else is requested.
            pub const DEFAULT: $name = $name::$default;

            /// `true` for [`Self::Enabled`].
            #[inline]
            pub const fn is_enabled(self) -> bool {
                matches!(self, $name::Enabled)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::DEFAULT
            }
        }

        impl From<bool> for $name {
            fn from(enabled: bool) -> Self {
                if enabled {
                    $name::Enabled
                } else {
                    $name::Disabled
                }
            }
        }
    };
}

pad_switch!(
    /// Output driver. Disabling it has priority over output enable from peripherals.
    OutputDriver,
    default: Disabled
);

pad_switch!(
    /// The input buffer can be disabled, to reduce current consumption when the pad is unused,
    /// unconnected or connected to an analogue signal.
    InputBuffer,
    default: Disabled
);

pad_switch!(
    /// Pull-up resistor. Sets the signal level when the output driver is disabled.
    ///
    /// Enabling both the pull-up and the pull-down is described as bus-keep in the datasheet.
    PullUp,
    default: Disabled
);

pad_switch!(
    /// Pull-down resistor. Sets the signal level when the output driver is disabled.
    PullDown,
    default: Disabled
);

pad_switch!(
    /// Input hysteresis (schmitt trigger mode).
    Schmitt,
    default: Enabled
);

/// The GPIOs on RP2040 have four different output drive strengths, nominally called 2, 4, 8 and
/// 12mA modes.
///
/// These are not hard limits, nor do they mean that the pin will always be sourcing (or sinking)
/// the selected amount of milliamps. The current a GPIO sources or sinks depends on the load
/// attached to it.
#[allow(clippy::enum_variant_names)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum DriveStrength {
    /// 2 mA
    TwoMilliAmps = 0,
    /// 4 mA
    #[default]
    FourMilliAmps = 1,
    /// 8 mA
    EightMilliAmps = 2,
    /// 12 mA
    TwelveMilliAmps = 3,
}

impl DriveStrength {
    /// Every drive strength, weakest first.
    pub const ALL: [DriveStrength; 4] = [
        DriveStrength::TwoMilliAmps,
        DriveStrength::FourMilliAmps,
        DriveStrength::EightMilliAmps,
        DriveStrength::TwelveMilliAmps,
    ];
    /// Drive strength out of reset.
    pub const DEFAULT: DriveStrength = DriveStrength::FourMilliAmps;

    /// Nominal current of the mode.
    pub const fn milliamps(self) -> u8 {
        match self {
            DriveStrength::TwoMilliAmps => 2,
            DriveStrength::FourMilliAmps => 4,
            DriveStrength::EightMilliAmps => 8,
            DriveStrength::TwelveMilliAmps => 12,
        }
    }
}

/// How fast the pad drives an output edge.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SlewRate {
    /// Slew slow
    #[default]
    Slow = 0,
    /// Slew fast
    Fast = 1,
}

impl SlewRate {
    /// Every slew rate.
    pub const ALL: [SlewRate; 2] = [SlewRate::Slow, SlewRate::Fast];
    /// Slew rate out of reset.
    pub const DEFAULT: SlewRate = SlewRate::Slow;
}

/// Input threshold voltage of the user bank.
///
/// This is a bank wide setting rather than a per pad one. Using IOVDD voltages greater than 1.8V
/// with the input thresholds set for 1.8V may result in damage to the chip.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum VoltageSelect {
    /// IOVDD of 3.3V
    #[default]
    ThreeVoltsThree = 0,
    /// IOVDD of 1.8V
    OneVoltEight = 1,
}

impl VoltageSelect {
    /// Every voltage option.
    pub const ALL: [VoltageSelect; 2] = [
        VoltageSelect::ThreeVoltsThree,
        VoltageSelect::OneVoltEight,
    ];
    /// Voltage option out of reset.
    pub const DEFAULT: VoltageSelect = VoltageSelect::ThreeVoltsThree;

    /// Nominal IOVDD in millivolts.
    pub const fn millivolts(self) -> u16 {
        match self {
            VoltageSelect::ThreeVoltsThree => 3300,
            VoltageSelect::OneVoltEight => 1800,
        }
    }
}

/// One value for every per pad option.
///
/// The [`Default`] value holds each option's own default, which is what a driver would program
/// when handed no other instruction.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PadConfig {
    #[allow(missing_docs)]
    pub output_driver: OutputDriver,
    #[allow(missing_docs)]
    pub input_buffer: InputBuffer,
    #[allow(missing_docs)]
    pub pull_up: PullUp,
    #[allow(missing_docs)]
    pub pull_down: PullDown,
    #[allow(missing_docs)]
    pub drive_strength: DriveStrength,
    #[allow(missing_docs)]
    pub schmitt: Schmitt,
    #[allow(missing_docs)]
    pub slew_rate: SlewRate,
}

impl PadConfig {
    /// Same as [`PadConfig::default`], usable in const context.
    pub const DEFAULT: PadConfig = PadConfig {
        output_driver: OutputDriver::DEFAULT,
        input_buffer: InputBuffer::DEFAULT,
        pull_up: PullUp::DEFAULT,
        pull_down: PullDown::DEFAULT,
        drive_strength: DriveStrength::DEFAULT,
        schmitt: Schmitt::DEFAULT,
        slew_rate: SlewRate::DEFAULT,
    };

    /// Both pulls enabled, the pad holds its last driven level.
    pub const fn is_bus_keep(&self) -> bool {
        self.pull_up.is_enabled() && self.pull_down.is_enabled()
    }
}
