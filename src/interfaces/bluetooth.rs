use super::internal::InputState;
use super::usb;
use crate::DecodeError;

pub const REPORT_ID: u8 = 0x31;
/// Includes the trailing CRC-32, which is not checked here.
pub const REPORT_LEN: usize = 78;

// The USB field layout follows one extra header byte
const PAYLOAD_OFFSET: usize = 1;

pub const MIN_LEN: usize = usb::MIN_LEN + PAYLOAD_OFFSET;

/// Decodes a Bluetooth input report (id 0x31) into `out`.
pub fn decode(raw: &[u8], out: &mut InputState) -> Result<(), DecodeError> {
    let Some(buf) = raw
        .get(PAYLOAD_OFFSET..)
        .and_then(|payload| payload.first_chunk::<{ usb::MIN_LEN }>())
    else {
        return Err(DecodeError::InsufficientBuffer {
            required: MIN_LEN,
            actual: raw.len(),
        });
    };

    usb::decode_layout(buf, out);
    Ok(())
}
