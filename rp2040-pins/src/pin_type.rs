//! Pad electrical classes
//!
//! Taken from the pin description table of the RP2040 datasheet. Every class has programmable
//! pull-up, pull-down, slew rate, schmitt trigger and drive strength, with a default drive
//! strength of 4mA, except for the USB pins.

/// Electrical class of a pin.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PinType {
    /// Input only, standard digital.
    DigitalIn,

    /// Bi-directional, standard digital.
    DigitalBidirectional,

    /// Input only, fault tolerant digital.
    ///
    /// Fault tolerant means that very little current flows into the pin whilst it is below 3.63V
    /// and IOVDD is 0V. There is also enhanced ESD protection on these pins.
    DigitalInFaultTolerant,

    /// Bi-directional, fault tolerant digital. See [`PinType::DigitalInFaultTolerant`].
    DigitalBidirectionalFaultTolerant,

    /// Bi-directional, standard digital and ADC input.
    DigitalBidirectionalAnalogue,

    /// USB pins. These contain internal pull-up and pull-down resistors, as per the USB
    /// specification. External 27Ω series resistors are required for USB operation.
    UsbBidirectional,
}

impl PinType {
    /// Every pin type.
    pub const ALL: [PinType; 6] = [
        PinType::DigitalIn,
        PinType::DigitalBidirectional,
        PinType::DigitalInFaultTolerant,
        PinType::DigitalBidirectionalFaultTolerant,
        PinType::DigitalBidirectionalAnalogue,
        PinType::UsbBidirectional,
    ];

    /// Whether the pin tolerates input voltage while IOVDD is unpowered.
    pub const fn is_fault_tolerant(self) -> bool {
        matches!(
            self,
            PinType::DigitalInFaultTolerant | PinType::DigitalBidirectionalFaultTolerant
        )
    }

    /// Whether the pin can drive an output.
    pub const fn is_bidirectional(self) -> bool {
        !matches!(self, PinType::DigitalIn | PinType::DigitalInFaultTolerant)
    }

    /// Whether the pin doubles as an ADC input.
    pub const fn has_analogue_input(self) -> bool {
        matches!(self, PinType::DigitalBidirectionalAnalogue)
    }

    /// Highest input voltage, in millivolts, the pin tolerates while IOVDD is 0V.
    pub const fn fault_tolerant_ceiling_mv(self) -> Option<u16> {
        if self.is_fault_tolerant() {
            Some(3630)
        } else {
            None
        }
    }
}
