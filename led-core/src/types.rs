//! Core Types für das LED-Register
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::fmt;
use core::ops::BitOr;

use rgb::RGB8;

use crate::config::{
    BRIGHTNESS_OFFSET, BRIGHTNESS_VALUE_MASK, COLOR_OFFSET, COLOR_VALUE_MASK, STATE_MASK,
};
use crate::logic::{channel_level, decode_field, encode_field};

/// Ein/Aus-Zustand der LED (1 Bit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum LedState {
    #[default]
    Off = 0x0,
    On = 0x1,
}

impl LedState {
    pub fn is_on(self) -> bool {
        self == LedState::On
    }
}

impl From<bool> for LedState {
    fn from(on: bool) -> Self {
        if on { LedState::On } else { LedState::Off }
    }
}

/// Farb-Bitmaske der LED (3 Bit)
///
/// Die Kanäle lassen sich kombinieren, z.B. `LedColor::RED | LedColor::GREEN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub struct LedColor(u8);

impl LedColor {
    pub const OFF: LedColor = LedColor(0x0);
    pub const RED: LedColor = LedColor(0x1);
    pub const GREEN: LedColor = LedColor(0x2);
    pub const BLUE: LedColor = LedColor(0x4);
    pub const WHITE: LedColor = LedColor(0x7);

    /// Erstellt eine Farbe, überzählige Bits werden verworfen
    pub const fn from_bits(bits: u8) -> Self {
        LedColor(bits & COLOR_VALUE_MASK)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: LedColor) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for LedColor {
    type Output = LedColor;

    fn bitor(self, rhs: LedColor) -> LedColor {
        LedColor(self.0 | rhs.0)
    }
}

impl From<u8> for LedColor {
    fn from(bits: u8) -> Self {
        LedColor::from_bits(bits)
    }
}

impl From<LedColor> for u8 {
    fn from(color: LedColor) -> u8 {
        color.0
    }
}

/// Dekodierter Snapshot eines Registerwerts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LedSettings {
    pub state: LedState,
    pub color: LedColor,
    pub brightness: u8,
}

impl LedSettings {
    /// Zerlegt einen rohen Registerwert in seine drei Felder
    pub const fn from_bits(bits: u8) -> Self {
        let state = if bits & STATE_MASK == 0 {
            LedState::Off
        } else {
            LedState::On
        };

        Self {
            state,
            color: LedColor(decode_field(bits, COLOR_VALUE_MASK, COLOR_OFFSET)),
            brightness: decode_field(bits, BRIGHTNESS_VALUE_MASK, BRIGHTNESS_OFFSET),
        }
    }

    /// Packt die Felder wieder in ein Byte (Werte werden maskiert)
    pub const fn to_bits(&self) -> u8 {
        (self.state as u8 & STATE_MASK)
            | encode_field(self.color.0, COLOR_VALUE_MASK, COLOR_OFFSET)
            | encode_field(self.brightness, BRIGHTNESS_VALUE_MASK, BRIGHTNESS_OFFSET)
    }

    /// Rendert den Zustand als RGB-Farbe
    ///
    /// Jeder gesetzte Farbkanal bekommt die skalierte Helligkeit.
    /// Eine ausgeschaltete LED ist schwarz.
    pub fn to_rgb(&self) -> RGB8 {
        if !self.state.is_on() {
            return RGB8::default();
        }

        let level = channel_level(self.brightness);
        let channel = |c: LedColor| if self.color.contains(c) { level } else { 0 };

        RGB8 {
            r: channel(LedColor::RED),
            g: channel(LedColor::GREEN),
            b: channel(LedColor::BLUE),
        }
    }
}

/// Zeigt ein Registerbyte binär an, z.B. `0b0101_0100`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bits(pub u8);

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0b{:04b}_{:04b}", self.0 >> 4, self.0 & 0x0F)
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedSettings {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "LedSettings {{ state: {}, color: {=u8:b}, brightness: {} }}",
            self.state,
            self.color.0,
            self.brightness
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Bits {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=u8:#b}", self.0)
    }
}
