//! LED-Register Modell
//!
//! Drei unabhängige Felder (State, Color, Brightness) teilen sich ein Byte.
//! Jeder Setter schreibt nur sein eigenes Feld (Masked Merge), alle anderen
//! Bits bleiben erhalten.

use crate::config::{
    BRIGHTNESS_MASK, BRIGHTNESS_MAX, BRIGHTNESS_MIN, BRIGHTNESS_OFFSET, BRIGHTNESS_VALUE_MASK,
    COLOR_MASK, COLOR_OFFSET, COLOR_VALUE_MASK, STATE_MASK,
};
use crate::logic::{encode_field, merge_bits};
use crate::traits::RegisterCell;
use crate::types::{LedColor, LedSettings, LedState};

/// LED-Register über einer beliebigen [`RegisterCell`]
///
/// Die Zelle gehört dem Aufrufer. Für Host-Tests reicht ein `u8`:
///
/// ```
/// # use led_core::LedRegister;
/// let mut register = LedRegister::new(0u8);
/// register.init();
/// register.state_on();
/// register.set_brightness(0x5);
/// assert_eq!(register.bits(), 0b0101_0001);
/// ```
#[derive(Debug, Default)]
pub struct LedRegister<C: RegisterCell> {
    cell: C,
}

impl<C: RegisterCell> LedRegister<C> {
    /// Übernimmt die Zelle ohne sie zu verändern
    ///
    /// Der Host ruft danach [`LedRegister::init`] auf.
    pub fn new(cell: C) -> Self {
        Self { cell }
    }

    pub fn cell(&self) -> &C {
        &self.cell
    }

    pub fn into_inner(self) -> C {
        self.cell
    }

    /// Aktueller roher Registerwert
    pub fn bits(&self) -> u8 {
        self.cell.read()
    }

    /// Setzt das komplette Register auf 0
    pub fn clear(&mut self) {
        self.cell.write(0x00);
    }

    /// Initialzustand herstellen (identisch zu [`LedRegister::clear`])
    pub fn init(&mut self) {
        self.clear();
    }

    fn set_bits(&mut self, bits: u8, mask: u8) {
        self.cell.modify(|current| merge_bits(current, bits, mask));
    }

    // ========================================================================
    // State
    // ========================================================================

    pub fn set_state(&mut self, state: impl Into<LedState>) {
        let state: LedState = state.into();
        let safe_state = state as u8 & STATE_MASK;
        self.set_bits(safe_state, STATE_MASK);
    }

    pub fn state_on(&mut self) {
        self.set_state(LedState::On);
    }

    pub fn state_off(&mut self) {
        self.set_state(LedState::Off);
    }

    pub fn state(&self) -> LedState {
        self.settings().state
    }

    // ========================================================================
    // Color
    // ========================================================================

    /// Ersetzt das Color-Feld komplett (kein additives OR)
    ///
    /// Bits oberhalb von 3 Bit werden still verworfen.
    pub fn set_color(&mut self, color: u8) {
        let safe_color = encode_field(color, COLOR_VALUE_MASK, COLOR_OFFSET);
        self.set_bits(safe_color, COLOR_MASK);
    }

    pub fn color_red(&mut self) {
        self.set_color(LedColor::RED.bits());
    }

    pub fn color_green(&mut self) {
        self.set_color(LedColor::GREEN.bits());
    }

    pub fn color_blue(&mut self) {
        self.set_color(LedColor::BLUE.bits());
    }

    pub fn color(&self) -> LedColor {
        self.settings().color
    }

    // ========================================================================
    // Brightness
    // ========================================================================

    /// Ersetzt das Brightness-Feld komplett
    ///
    /// Werte über 15 werden abgeschnitten, `0x1F` wird zu `0x0F`.
    pub fn set_brightness(&mut self, brightness: u8) {
        let safe_brightness = encode_field(brightness, BRIGHTNESS_VALUE_MASK, BRIGHTNESS_OFFSET);
        self.set_bits(safe_brightness, BRIGHTNESS_MASK);
    }

    pub fn brightness_min(&mut self) {
        self.set_brightness(BRIGHTNESS_MIN);
    }

    pub fn brightness_max(&mut self) {
        self.set_brightness(BRIGHTNESS_MAX);
    }

    pub fn brightness(&self) -> u8 {
        self.settings().brightness
    }

    // ========================================================================
    // Snapshot
    // ========================================================================

    pub fn settings(&self) -> LedSettings {
        LedSettings::from_bits(self.bits())
    }

    /// Übernimmt alle drei Felder (State, dann Color, dann Brightness)
    pub fn apply_settings(&mut self, settings: LedSettings) {
        self.set_state(settings.state);
        self.set_color(settings.color.bits());
        self.set_brightness(settings.brightness);
    }
}
