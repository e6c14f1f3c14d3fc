//! LED Core - Register-Modell und Message-Dispatcher
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Das Register wird über den Trait [`RegisterCell`] angesprochen,
//! auf dem Host reicht ein einfaches `u8`.
//!
//! ```
//! # use led_core::{LedRegister, MessageError, process_message};
//! let mut register = LedRegister::new(0u8);
//! register.init();
//!
//! assert_eq!(process_message(&mut register, 3, &[0x02, 0x02, 0x05]), Ok(()));
//! assert_eq!(register.bits(), 0b0101_0100);
//!
//! assert_eq!(process_message(&mut register, 1, &[0xFF]), Err(MessageError::InvalidOpCode));
//! ```

#![no_std]

#[macro_use]
mod macros;

pub mod config;
pub mod logic;
pub mod message;
pub mod register;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use logic::merge_bits;
pub use message::{
    Message, MessageBytes, MessageError, OpCode, STATUS_OK, process_bytes, process_message,
    status_code,
};
pub use register::LedRegister;
pub use traits::RegisterCell;
pub use types::{Bits, LedColor, LedSettings, LedState};
