use super::internal::{
    Axis2D, Axis3D, ButtonsA, ButtonsAndDpad, ButtonsB, HatDirection, InputState, TouchPoint,
};
use crate::DecodeError;

pub const REPORT_ID: u8 = 0x01;
pub const REPORT_LEN: usize = 64;

// Byte offsets into the USB input report (byte 0 is the report id)
pub const LEFT_STICK: usize = 0x01;
pub const RIGHT_STICK: usize = 0x03;
pub const LEFT_TRIGGER: usize = 0x05;
pub const RIGHT_TRIGGER: usize = 0x06;
pub const BUTTONS_AND_DPAD: usize = 0x08;
pub const BUTTONS_A: usize = 0x09;
pub const BUTTONS_B: usize = 0x0A;
pub const ACCELEROMETER: usize = 0x10;
pub const GYROSCOPE: usize = 0x16;
pub const TOUCH_POINT1: usize = 0x21;
pub const TOUCH_POINT2: usize = 0x25;
pub const HEADPHONE: usize = 0x36;

/// Shortest buffer that still covers the headphone flag.
pub const MIN_LEN: usize = HEADPHONE + 1;

/// Decodes a USB input report into `out`.
///
/// Any byte pattern is accepted as long as the buffer reaches [`MIN_LEN`]. On error `out`
/// is left untouched, but callers should not rely on its contents.
pub fn decode(raw: &[u8], out: &mut InputState) -> Result<(), DecodeError> {
    let Some(buf) = raw.first_chunk::<MIN_LEN>() else {
        return Err(DecodeError::InsufficientBuffer {
            required: MIN_LEN,
            actual: raw.len(),
        });
    };

    decode_layout(buf, out);
    Ok(())
}

/// Shared by every transport that carries the USB field layout.
pub(crate) fn decode_layout(buf: &[u8; MIN_LEN], out: &mut InputState) {
    out.left_stick = stick(buf[LEFT_STICK], buf[LEFT_STICK + 1]);
    out.right_stick = stick(buf[RIGHT_STICK], buf[RIGHT_STICK + 1]);

    out.left_trigger = buf[LEFT_TRIGGER];
    out.right_trigger = buf[RIGHT_TRIGGER];

    out.buttons_and_dpad = buttons_and_dpad(buf[BUTTONS_AND_DPAD]);
    out.buttons_a = ButtonsA::from_bits_retain(buf[BUTTONS_A]);
    out.buttons_b = ButtonsB::from_bits_retain(buf[BUTTONS_B]);

    out.accelerometer = axis3d(buf, ACCELEROMETER);
    out.gyroscope = axis3d(buf, GYROSCOPE);

    out.touch_point1 = touch_point(buf, TOUCH_POINT1);
    out.touch_point2 = touch_point(buf, TOUCH_POINT2);

    out.head_phone_connected = buf[HEADPHONE] & 0x01 != 0;
}

/// X is re-centered on 128, Y on 127 and inverted so that up is positive.
fn stick(x: u8, y: u8) -> Axis2D {
    Axis2D {
        x: (i16::from(x) - 128) as i8,
        y: (127 - i16::from(y)) as i8,
    }
}

fn buttons_and_dpad(byte: u8) -> ButtonsAndDpad {
    let face = ButtonsAndDpad::from_bits_retain(byte & 0xF0);
    face | HatDirection::from_nibble(byte).flags()
}

fn axis3d(buf: &[u8; MIN_LEN], offset: usize) -> Axis3D {
    Axis3D {
        x: i16::from_le_bytes([buf[offset], buf[offset + 1]]),
        y: i16::from_le_bytes([buf[offset + 2], buf[offset + 3]]),
        z: i16::from_le_bytes([buf[offset + 4], buf[offset + 5]]),
    }
}

// Packed as a little-endian word: x in bits 20..32, y in bits 8..20
fn touch_point(buf: &[u8; MIN_LEN], offset: usize) -> TouchPoint {
    let word = u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ]);

    TouchPoint {
        x: ((word >> 20) & 0x0FFF) as u16,
        y: ((word >> 8) & 0x0FFF) as u16,
    }
}
