//! Message-Dispatcher
//!
//! Wire-Format (Länge kommt vom Transport):
//!
//! ```text
//! ┌─────────┬───────────────┬────────────────────┐
//! │ Offset  │ ON / OFF      │ LED_SETTINGS       │
//! ├─────────┼───────────────┼────────────────────┤
//! │ 0       │ 0x00 / 0x01   │ 0x02               │
//! │ 1       │ -             │ Color (3 Bit)      │
//! │ 2       │ -             │ Brightness (4 Bit) │
//! └─────────┴───────────────┴────────────────────┘
//! ```
//!
//! Eine Message wird vollständig validiert bevor das Register angefasst
//! wird. Eine abgelehnte Message verändert das Register nie.

use core::fmt;
use core::ops::Deref;

use crate::config::{
    BRIGHTNESS_VALUE_MASK, MAX_MESSAGE_LEN, SETTINGS_MESSAGE_LEN, SWITCH_MESSAGE_LEN,
};
use crate::register::LedRegister;
use crate::traits::RegisterCell;
use crate::types::LedColor;

/// Status-Code für eine erfolgreich verarbeitete Message
pub const STATUS_OK: u8 = 0;

/// Fehler-Typ für die Message-Verarbeitung
///
/// Die numerischen Werte sind stabil, Aufrufer dürfen darauf verzweigen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MessageError {
    /// Message ohne ein einziges Byte
    Empty = 1,
    /// Erstes Byte ist kein bekannter Op-Code
    InvalidOpCode = 10,
    /// Message ist länger als der Op-Code erlaubt
    TrailingBytes = 20,
    /// Message ist kürzer als der Op-Code verlangt (nur LED_SETTINGS)
    MissingParameters = 30,
}

impl MessageError {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(MessageError::Empty),
            10 => Some(MessageError::InvalidOpCode),
            20 => Some(MessageError::TrailingBytes),
            30 => Some(MessageError::MissingParameters),
            _ => None,
        }
    }
}

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MessageError::Empty => "empty message",
            MessageError::InvalidOpCode => "invalid op code",
            MessageError::TrailingBytes => "trailing bytes",
            MessageError::MissingParameters => "missing parameters",
        };
        f.write_str(text)
    }
}

/// Reduziert ein Ergebnis auf den numerischen Status-Code (0 = Ok)
pub fn status_code(result: &Result<(), MessageError>) -> u8 {
    match result {
        Ok(()) => STATUS_OK,
        Err(error) => error.code(),
    }
}

/// Op-Codes des Protokolls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum OpCode {
    On = 0x00,
    Off = 0x01,
    LedSettings = 0x02,
}

impl OpCode {
    /// Gesamtlänge einer gültigen Message inklusive Op-Code
    pub const fn expected_len(self) -> usize {
        match self {
            OpCode::On | OpCode::Off => SWITCH_MESSAGE_LEN,
            OpCode::LedSettings => SETTINGS_MESSAGE_LEN,
        }
    }
}

impl TryFrom<u8> for OpCode {
    type Error = MessageError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0x00 => Ok(OpCode::On),
            0x01 => Ok(OpCode::Off),
            0x02 => Ok(OpCode::LedSettings),
            _ => Err(MessageError::InvalidOpCode),
        }
    }
}

/// Validierte Message
///
/// Die Parameter von `LedSettings` sind bereits auf ihre Feldbreite maskiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Message {
    On,
    Off,
    LedSettings { color: LedColor, brightness: u8 },
}

impl Message {
    /// Parst und validiert eine komplette Message
    ///
    /// Die Länge ergibt sich aus dem Slice.
    pub fn parse(bytes: &[u8]) -> Result<Self, MessageError> {
        Self::decode(bytes.len(), bytes)
    }

    /// Validiert eine Message mit der vom Transport gemeldeten Länge
    ///
    /// Reihenfolge: leer → Op-Code → Länge. Die Längenprüfung nutzt nur
    /// `length`, gelesen werden nur Bytes, die `buffer` wirklich enthält.
    /// Fehlen dort Bytes, die `length` verspricht, ist das `MissingParameters`.
    pub fn decode(length: usize, buffer: &[u8]) -> Result<Self, MessageError> {
        if length == 0 {
            return Err(MessageError::Empty);
        }

        let &op_code = buffer.first().ok_or(MessageError::MissingParameters)?;
        let op_code = OpCode::try_from(op_code)?;

        let expected = op_code.expected_len();
        if length > expected {
            return Err(MessageError::TrailingBytes);
        }
        if length < expected {
            return Err(MessageError::MissingParameters);
        }

        match op_code {
            OpCode::On => Ok(Message::On),
            OpCode::Off => Ok(Message::Off),
            OpCode::LedSettings => match buffer.get(1..expected) {
                Some(&[color, brightness]) => Ok(Message::LedSettings {
                    color: LedColor::from_bits(color),
                    brightness: brightness & BRIGHTNESS_VALUE_MASK,
                }),
                _ => Err(MessageError::MissingParameters),
            },
        }
    }

    pub fn op_code(&self) -> OpCode {
        match self {
            Message::On => OpCode::On,
            Message::Off => OpCode::Off,
            Message::LedSettings { .. } => OpCode::LedSettings,
        }
    }

    /// Führt die Message auf dem Register aus
    pub fn apply<C: RegisterCell>(&self, register: &mut LedRegister<C>) {
        match *self {
            Message::On => register.state_on(),
            Message::Off => register.state_off(),
            Message::LedSettings { color, brightness } => {
                register.set_color(color.bits());
                register.set_brightness(brightness);
            }
        }
    }

    /// Kodiert die Message für den Transport
    ///
    /// Parameter werden wie beim Parsen auf ihre Feldbreite maskiert.
    pub fn to_bytes(&self) -> MessageBytes {
        let mut buf = [0u8; MAX_MESSAGE_LEN];
        buf[0] = self.op_code() as u8;

        if let Message::LedSettings { color, brightness } = *self {
            buf[1] = color.bits();
            buf[2] = brightness & BRIGHTNESS_VALUE_MASK;
        }

        MessageBytes {
            buf,
            len: self.op_code().expected_len(),
        }
    }
}

/// Kodierte Message auf dem Stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageBytes {
    buf: [u8; MAX_MESSAGE_LEN],
    len: usize,
}

impl MessageBytes {
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Länge im Format von [`process_message`]
    pub fn length(&self) -> u8 {
        self.len as u8
    }
}

impl Deref for MessageBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

/// Verarbeitet eine Message aus `buffer` mit der vom Transport gemeldeten Länge
///
/// `length` allein entscheidet über `TrailingBytes` und `MissingParameters`.
/// Enthält `buffer` weniger Bytes als `length` verlangt, wird nicht über das
/// Buffer-Ende gelesen, sondern `MissingParameters` gemeldet.
///
/// # Fehlerbehandlung
/// Gibt eine [`MessageError`] Variante zurück, das Register bleibt dann unverändert.
pub fn process_message<C: RegisterCell>(
    register: &mut LedRegister<C>,
    length: u8,
    buffer: &[u8],
) -> Result<(), MessageError> {
    let length = usize::from(length);
    dispatch(register, Message::decode(length, buffer), length)
}

/// Wie [`process_message`], die Länge ergibt sich aus dem Slice
pub fn process_bytes<C: RegisterCell>(
    register: &mut LedRegister<C>,
    bytes: &[u8],
) -> Result<(), MessageError> {
    dispatch(register, Message::parse(bytes), bytes.len())
}

fn dispatch<C: RegisterCell>(
    register: &mut LedRegister<C>,
    decoded: Result<Message, MessageError>,
    length: usize,
) -> Result<(), MessageError> {
    match decoded {
        Ok(message) => {
            message.apply(register);
            debug!("Message applied: {}, register = {=u8:#b}", message, register.bits());
            Ok(())
        }
        Err(error) => {
            warn!("Message rejected: {} ({=usize} bytes)", error, length);
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert_eq!(Message::parse(&[]), Err(MessageError::Empty));
    }

    #[test]
    fn test_parse_invalid_op_code_before_length() {
        assert_eq!(
            Message::parse(&[0x05, 0x00, 0x00, 0x00]),
            Err(MessageError::InvalidOpCode)
        );
    }

    #[test]
    fn test_parse_led_settings_masks_parameters() {
        let message = Message::parse(&[0x02, 0xFA, 0x35]).unwrap();
        assert_eq!(
            message,
            Message::LedSettings {
                color: LedColor::GREEN,
                brightness: 0x5,
            }
        );
    }

    #[test]
    fn test_parse_led_settings_length_checks() {
        assert_eq!(Message::parse(&[0x02]), Err(MessageError::MissingParameters));
        assert_eq!(Message::parse(&[0x02, 0x01]), Err(MessageError::MissingParameters));
        assert_eq!(
            Message::parse(&[0x02, 0x01, 0x01, 0x00]),
            Err(MessageError::TrailingBytes)
        );
    }

    #[test]
    fn test_to_bytes() {
        assert_eq!(Message::Off.to_bytes().as_slice(), &[0x01]);
        let settings = Message::LedSettings {
            color: LedColor::BLUE,
            brightness: 9,
        };
        assert_eq!(settings.to_bytes().as_slice(), &[0x02, 0x04, 0x09]);
        assert_eq!(settings.to_bytes().length(), 3);
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(MessageError::Empty.code(), 1);
        assert_eq!(MessageError::InvalidOpCode.code(), 10);
        assert_eq!(MessageError::TrailingBytes.code(), 20);
        assert_eq!(MessageError::MissingParameters.code(), 30);
        assert_eq!(MessageError::from_code(20), Some(MessageError::TrailingBytes));
        assert_eq!(MessageError::from_code(0), None);
    }

    #[test]
    fn test_decode_uses_declared_length() {
        assert_eq!(Message::decode(2, &[0x00]), Err(MessageError::TrailingBytes));
        assert_eq!(Message::decode(200, &[0x01]), Err(MessageError::TrailingBytes));
        assert_eq!(
            Message::decode(4, &[0x02, 0x02, 0x01]),
            Err(MessageError::TrailingBytes)
        );
        assert_eq!(Message::decode(1, &[0x00, 0xFF, 0xFF]), Ok(Message::On));
        assert_eq!(Message::decode(1, &[]), Err(MessageError::MissingParameters));
    }

    #[test]
    fn test_to_bytes_masks_brightness() {
        let message = Message::LedSettings {
            color: LedColor::BLUE,
            brightness: 0x1F,
        };
        assert_eq!(message.to_bytes().as_slice(), &[0x02, 0x04, 0x0F]);
        assert_eq!(
            Message::parse(&message.to_bytes()),
            Ok(Message::LedSettings {
                color: LedColor::BLUE,
                brightness: 0x0F,
            })
        );
    }

    #[test]
    fn test_process_message_short_buffer() {
        let mut register = LedRegister::new(0u8);
        let result = process_message(&mut register, 3, &[0x02]);
        assert_eq!(result, Err(MessageError::MissingParameters));
        assert_eq!(register.bits(), 0);
    }
}
