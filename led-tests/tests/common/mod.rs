//! Gemeinsame Test-Helfer für die Integration Tests

#![allow(dead_code)]

use led_core::{Bits, LedRegister, RegisterCell};

// ============================================================================
// Mock Register
// ============================================================================

/// In-Memory Register mit Zugriffszählern
#[derive(Default)]
pub struct MockRegister {
    pub value: u8,
    pub write_count: usize,
    pub last_write: Option<u8>,
}

impl MockRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u8) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }
}

impl RegisterCell for MockRegister {
    fn read(&self) -> u8 {
        self.value
    }

    fn write(&mut self, value: u8) {
        self.value = value;
        self.last_write = Some(value);
        self.write_count += 1;
    }
}

/// Frisch initialisiertes Register über einem Mock
pub fn init_register() -> LedRegister<MockRegister> {
    let mut register = LedRegister::new(MockRegister::new());
    register.init();
    register
}

/// Vergleicht den Registerwert und zeigt bei Fehlern beide Werte binär
#[track_caller]
pub fn assert_bits<C: RegisterCell>(register: &LedRegister<C>, expected: u8, message: &str) {
    let actual = register.bits();
    assert!(
        actual == expected,
        "{message}\n\tIs    : {}\n\tShould: {}",
        Bits(actual),
        Bits(expected)
    );
}
