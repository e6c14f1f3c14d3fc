//! Register-Layout und Protokoll-Konstanten
//!
//! ```text
//! +------------+-------+-------+
//! | Brightness | Color | State |
//! +------------+-------+-------+
//!    Bit 7..4   Bit 3..1  Bit 0
//! ```

// ============================================================================
// State (1 Bit)
// ============================================================================

/// Maske für das State-Bit (Bit 0)
pub const STATE_MASK: u8 = 0x01;

// ============================================================================
// Color (3 Bit)
// ============================================================================

/// Bit-Position des Color-Feldes
pub const COLOR_OFFSET: u8 = 1;

/// Gültiger Wertebereich einer Farbe vor dem Shift (0b111)
pub const COLOR_VALUE_MASK: u8 = 0x07;

/// Maske des Color-Feldes im Register (0b0000_1110)
pub const COLOR_MASK: u8 = COLOR_VALUE_MASK << COLOR_OFFSET;

// ============================================================================
// Brightness (4 Bit)
// ============================================================================

/// Bit-Position des Brightness-Feldes
pub const BRIGHTNESS_OFFSET: u8 = 4;

/// Gültiger Wertebereich der Helligkeit vor dem Shift (0b1111)
pub const BRIGHTNESS_VALUE_MASK: u8 = 0x0F;

/// Maske des Brightness-Feldes im Register (0b1111_0000)
pub const BRIGHTNESS_MASK: u8 = BRIGHTNESS_VALUE_MASK << BRIGHTNESS_OFFSET;

/// Minimale Helligkeit
pub const BRIGHTNESS_MIN: u8 = 0x0;

/// Maximale Helligkeit
pub const BRIGHTNESS_MAX: u8 = 0xF;

// ============================================================================
// Message-Protokoll
// ============================================================================

/// Länge einer ON/OFF Message (nur Op-Code)
pub const SWITCH_MESSAGE_LEN: usize = 1;

/// Länge einer LED_SETTINGS Message (Op-Code + Color + Brightness)
pub const SETTINGS_MESSAGE_LEN: usize = 3;

/// Längste gültige Message
pub const MAX_MESSAGE_LEN: usize = SETTINGS_MESSAGE_LEN;
