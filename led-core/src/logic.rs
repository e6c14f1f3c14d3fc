//! Pure Bit-Logik
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

/// Ersetzt die durch `mask` markierten Bits von `lhs` durch die von `rhs`.
///
/// Bits außerhalb der Maske bleiben unverändert.
///
/// # Beispiele
///
/// ```
/// # use led_core::merge_bits;
/// assert_eq!(merge_bits(0b1111_1111, 0b0000_0000, 0b0000_1110), 0b1111_0001);
/// ```
pub const fn merge_bits(lhs: u8, rhs: u8, mask: u8) -> u8 {
    (lhs & !mask) | (rhs & mask)
}

/// Schneidet `value` auf `value_mask` zu und schiebt es an `offset`
pub const fn encode_field(value: u8, value_mask: u8, offset: u8) -> u8 {
    (value & value_mask) << offset
}

/// Liest ein Feld aus einem Registerwert
pub const fn decode_field(bits: u8, value_mask: u8, offset: u8) -> u8 {
    (bits >> offset) & value_mask
}

/// Rechnet eine 4-Bit Helligkeit (0-15) in einen 8-Bit Kanalwert (0-255) um
///
/// 15 * 17 = 255, daher deckt die Skalierung den vollen Bereich ab.
pub const fn channel_level(brightness: u8) -> u8 {
    (brightness & 0x0F) * 17
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_bits_keeps_unmasked_bits() {
        assert_eq!(merge_bits(0b1010_0101, 0b0000_0000, 0b0000_1111), 0b1010_0000);
        assert_eq!(merge_bits(0b1010_0101, 0b1111_1111, 0b0000_1111), 0b1010_1111);
    }

    #[test]
    fn test_merge_bits_ignores_rhs_outside_mask() {
        assert_eq!(merge_bits(0x00, 0xFF, 0x01), 0x01);
    }

    #[test]
    fn test_encode_field_truncates() {
        assert_eq!(encode_field(0x1F, 0x0F, 4), 0xF0);
        assert_eq!(encode_field(0xFF, 0x07, 1), 0x0E);
    }

    #[test]
    fn test_decode_field() {
        assert_eq!(decode_field(0b0101_0100, 0x0F, 4), 5);
        assert_eq!(decode_field(0b0101_0100, 0x07, 1), 2);
        assert_eq!(decode_field(0b0101_0100, 0x01, 0), 0);
    }

    #[test]
    fn test_channel_level_bounds() {
        assert_eq!(channel_level(0), 0);
        assert_eq!(channel_level(15), 255);
        assert_eq!(channel_level(0x1F), 255);
    }
}
