use bitflags::bitflags;

bitflags! {
    /// Byte 8 of the report: face buttons in the high nibble, d-pad flags in the low nibble.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ButtonsAndDpad: u8 {
        const DPAD_LEFT  = 0b0000_0001;
        const DPAD_DOWN  = 0b0000_0010;
        const DPAD_RIGHT = 0b0000_0100;
        const DPAD_UP    = 0b0000_1000;
        const SQUARE     = 0b0001_0000;
        const CROSS      = 0b0010_0000;
        const CIRCLE     = 0b0100_0000;
        const TRIANGLE   = 0b1000_0000;

        const DPAD = Self::DPAD_LEFT.bits()
            | Self::DPAD_DOWN.bits()
            | Self::DPAD_RIGHT.bits()
            | Self::DPAD_UP.bits();
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ButtonsA: u8 {
        const L1      = 0b0000_0001;
        const R1      = 0b0000_0010;
        const L2      = 0b0000_0100;
        const R2      = 0b0000_1000;
        const CREATE  = 0b0001_0000;
        const OPTIONS = 0b0010_0000;
        const L3      = 0b0100_0000;
        const R3      = 0b1000_0000;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ButtonsB: u8 {
        const PS       = 0b0000_0001;
        const TOUCHPAD = 0b0000_0010;
        const MUTE     = 0b0000_0100;
        // Upper bits are vendor-defined and kept as-is
    }
}

/// D-pad direction as encoded in the low nibble of byte 8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum HatDirection {
    North = 0x00,
    NorthEast = 0x01,
    East = 0x02,
    SouthEast = 0x03,
    South = 0x04,
    SouthWest = 0x05,
    West = 0x06,
    NorthWest = 0x07,
    #[default]
    Neutral = 0x08,
}

impl HatDirection {
    /// Only the low four bits of `nibble` are looked at; codes 0x8..=0xF carry no direction.
    pub const fn from_nibble(nibble: u8) -> Self {
        match nibble & 0x0F {
            0x0 => HatDirection::North,
            0x1 => HatDirection::NorthEast,
            0x2 => HatDirection::East,
            0x3 => HatDirection::SouthEast,
            0x4 => HatDirection::South,
            0x5 => HatDirection::SouthWest,
            0x6 => HatDirection::West,
            0x7 => HatDirection::NorthWest,
            _ => HatDirection::Neutral,
        }
    }

    pub const fn flags(self) -> ButtonsAndDpad {
        match self {
            HatDirection::Neutral => ButtonsAndDpad::empty(),
            HatDirection::North => ButtonsAndDpad::DPAD_UP,
            HatDirection::NorthEast => ButtonsAndDpad::DPAD_RIGHT.union(ButtonsAndDpad::DPAD_UP),
            HatDirection::East => ButtonsAndDpad::DPAD_RIGHT,
            HatDirection::SouthEast => ButtonsAndDpad::DPAD_RIGHT.union(ButtonsAndDpad::DPAD_DOWN),
            HatDirection::South => ButtonsAndDpad::DPAD_DOWN,
            HatDirection::SouthWest => ButtonsAndDpad::DPAD_LEFT.union(ButtonsAndDpad::DPAD_DOWN),
            HatDirection::West => ButtonsAndDpad::DPAD_LEFT,
            HatDirection::NorthWest => ButtonsAndDpad::DPAD_LEFT.union(ButtonsAndDpad::DPAD_UP),
        }
    }
}

/// Analog stick position, centered on zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axis2D {
    pub x: i8,
    pub y: i8,
}

/// Raw motion sensor counts. No scaling is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axis3D {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

/// Touchpad contact, both coordinates 12 bits wide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub const MAX: u16 = 0x0FFF;
}

/// Snapshot of the controller taken from a single input report.
///
/// Every field is overwritten by each decode; nothing carries over between reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputState {
    pub left_stick: Axis2D,
    pub right_stick: Axis2D,
    pub left_trigger: u8,
    pub right_trigger: u8,
    pub buttons_and_dpad: ButtonsAndDpad,
    pub buttons_a: ButtonsA,
    pub buttons_b: ButtonsB,
    pub accelerometer: Axis3D,
    /// Unprocessed gyroscope counts.
    pub gyroscope: Axis3D,
    pub touch_point1: TouchPoint,
    pub touch_point2: TouchPoint,
    pub head_phone_connected: bool,
}

impl InputState {
    /// Decodes a USB input report into a fresh snapshot.
    pub fn from_report(raw: &[u8]) -> Result<Self, crate::DecodeError> {
        let mut state = InputState::default();
        super::usb::decode(raw, &mut state)?;
        Ok(state)
    }

    pub fn face_buttons(&self) -> ButtonsAndDpad {
        self.buttons_and_dpad.difference(ButtonsAndDpad::DPAD)
    }

    pub fn dpad(&self) -> HatDirection {
        let up = self.buttons_and_dpad.contains(ButtonsAndDpad::DPAD_UP);
        let down = self.buttons_and_dpad.contains(ButtonsAndDpad::DPAD_DOWN);
        let left = self.buttons_and_dpad.contains(ButtonsAndDpad::DPAD_LEFT);
        let right = self.buttons_and_dpad.contains(ButtonsAndDpad::DPAD_RIGHT);

        match (up, down, left, right) {
            (true, false, false, false) => HatDirection::North,
            (true, false, false, true) => HatDirection::NorthEast,
            (false, false, false, true) => HatDirection::East,
            (false, true, false, true) => HatDirection::SouthEast,
            (false, true, false, false) => HatDirection::South,
            (false, true, true, false) => HatDirection::SouthWest,
            (false, false, true, false) => HatDirection::West,
            (true, false, true, false) => HatDirection::NorthWest,
            _ => HatDirection::Neutral, // neutral or impossible combo
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_nibble_maps_to_the_documented_flags() {
        use ButtonsAndDpad as B;

        let expected = [
            (0x0, B::DPAD_UP),
            (0x1, B::DPAD_RIGHT | B::DPAD_UP),
            (0x2, B::DPAD_RIGHT),
            (0x3, B::DPAD_RIGHT | B::DPAD_DOWN),
            (0x4, B::DPAD_DOWN),
            (0x5, B::DPAD_LEFT | B::DPAD_DOWN),
            (0x6, B::DPAD_LEFT),
            (0x7, B::DPAD_LEFT | B::DPAD_UP),
        ];
        for (nibble, flags) in expected {
            assert_eq!(
                HatDirection::from_nibble(nibble).flags(),
                flags,
                "nibble {nibble:#x}"
            );
        }
        for nibble in 0x8..=0xF {
            assert_eq!(HatDirection::from_nibble(nibble), HatDirection::Neutral);
            assert!(HatDirection::from_nibble(nibble).flags().is_empty());
        }
    }

    #[test]
    fn from_nibble_ignores_high_bits() {
        assert_eq!(HatDirection::from_nibble(0xF3), HatDirection::SouthEast);
    }

    #[test]
    fn dpad_recovers_direction_from_flags() {
        for nibble in 0x0..=0xF {
            let hat = HatDirection::from_nibble(nibble);
            let state = InputState {
                buttons_and_dpad: hat.flags() | ButtonsAndDpad::CROSS,
                ..Default::default()
            };
            assert_eq!(state.dpad(), hat);
        }
    }

    #[test]
    fn face_buttons_drop_dpad_bits() {
        let state = InputState {
            buttons_and_dpad: ButtonsAndDpad::TRIANGLE | ButtonsAndDpad::DPAD_LEFT,
            ..Default::default()
        };
        assert_eq!(state.face_buttons(), ButtonsAndDpad::TRIANGLE);
    }
}
