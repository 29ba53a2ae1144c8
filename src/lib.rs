//! Decoder for DualSense input reports.
//!
//! Turns the raw bytes of a single HID input report into an [`InputState`]. Device discovery,
//! reading reports and output reports are left to the caller.
//!
//! ```
//! use dualsense_input::{InputState, decode};
//!
//! let mut report = [0u8; 64];
//! report[0] = 0x01;
//! report[1] = 128;
//!
//! let mut state = InputState::default();
//! decode(&report, &mut state)?;
//! assert_eq!(state.left_stick.x, 0);
//! # Ok::<(), dualsense_input::DecodeError>(())
//! ```

mod error;
mod interface;

pub mod interfaces {
    pub mod bluetooth;
    pub mod internal;
    pub mod usb;
}

pub use error::{DecodeError, ReportError};
pub use interface::{Transport, decode_report};
pub use interfaces::internal::{
    Axis2D, Axis3D, ButtonsA, ButtonsAndDpad, ButtonsB, HatDirection, InputState, TouchPoint,
};
pub use interfaces::usb::decode;
