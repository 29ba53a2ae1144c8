use tracing::{debug, trace};

use crate::interfaces::{bluetooth, internal::InputState, usb};
use crate::{DecodeError, ReportError};

/// Link the report arrived over. Both carry the same field layout, framed differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transport {
    Usb,
    Bluetooth,
}

impl Transport {
    pub fn from_report_id(id: u8) -> Option<Self> {
        match id {
            usb::REPORT_ID => Some(Transport::Usb),
            bluetooth::REPORT_ID => Some(Transport::Bluetooth),
            _ => None,
        }
    }

    pub const fn report_id(self) -> u8 {
        match self {
            Transport::Usb => usb::REPORT_ID,
            Transport::Bluetooth => bluetooth::REPORT_ID,
        }
    }

    /// Full report size as sent by the device.
    pub const fn report_len(self) -> usize {
        match self {
            Transport::Usb => usb::REPORT_LEN,
            Transport::Bluetooth => bluetooth::REPORT_LEN,
        }
    }

    /// Shortest buffer [`Transport::decode`] accepts.
    pub const fn min_len(self) -> usize {
        match self {
            Transport::Usb => usb::MIN_LEN,
            Transport::Bluetooth => bluetooth::MIN_LEN,
        }
    }

    pub fn decode(self, raw: &[u8], out: &mut InputState) -> Result<(), DecodeError> {
        match self {
            Transport::Usb => usb::decode(raw, out),
            Transport::Bluetooth => bluetooth::decode(raw, out),
        }
    }
}

/// Picks the transport from the report id in byte 0 and decodes the report into `out`.
pub fn decode_report(raw: &[u8], out: &mut InputState) -> Result<Transport, ReportError> {
    let Some(&id) = raw.first() else {
        return Err(DecodeError::InsufficientBuffer {
            required: 1,
            actual: 0,
        }
        .into());
    };

    let Some(transport) = Transport::from_report_id(id) else {
        debug!(
            report_id = id,
            len = raw.len(),
            "ignoring unknown input report"
        );
        return Err(ReportError::UnknownReportId(id));
    };

    trace!(?transport, len = raw.len(), "decoding input report");
    transport.decode(raw, out)?;
    Ok(transport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_ids_round_trip() {
        for transport in [Transport::Usb, Transport::Bluetooth] {
            assert_eq!(
                Transport::from_report_id(transport.report_id()),
                Some(transport)
            );
            assert!(transport.min_len() <= transport.report_len());
        }
        assert_eq!(Transport::from_report_id(0x11), None);
    }

    #[test]
    fn dispatches_on_report_id() {
        let mut state = InputState::default();

        let mut buf = [0u8; bluetooth::REPORT_LEN];
        buf[0] = bluetooth::REPORT_ID;
        buf[2] = 0; // left stick x over bluetooth
        assert_eq!(decode_report(&buf, &mut state), Ok(Transport::Bluetooth));
        assert_eq!(state.left_stick.x, -128);

        buf[0] = usb::REPORT_ID;
        buf[1] = 255;
        assert_eq!(decode_report(&buf, &mut state), Ok(Transport::Usb));
        assert_eq!(state.left_stick.x, 127);
    }

    #[test]
    fn rejects_unknown_and_empty_reports() {
        let mut state = InputState::default();
        assert_eq!(
            decode_report(&[0x05; 64], &mut state),
            Err(ReportError::UnknownReportId(0x05))
        );
        assert_eq!(
            decode_report(&[], &mut state),
            Err(ReportError::Decode(DecodeError::InsufficientBuffer {
                required: 1,
                actual: 0
            }))
        );
    }

    #[test]
    fn short_report_surfaces_decode_error() {
        let mut state = InputState::default();
        let err = decode_report(&[usb::REPORT_ID; 10], &mut state).unwrap_err();
        assert_eq!(
            err,
            ReportError::Decode(DecodeError::InsufficientBuffer {
                required: usb::MIN_LEN,
                actual: 10
            })
        );
    }
}
