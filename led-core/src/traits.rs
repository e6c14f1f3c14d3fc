//! Hardware Abstraction Traits
//!
//! Das LED-Register ist auf dem Target ein Memory-Mapped Register.
//! Der Core kennt nur diese Schnittstelle und kann daher auf dem Host
//! mit einem einfachen Byte im Speicher getestet werden.

use core::cell::Cell;

/// Trait für den Zugriff auf das 8-Bit LED-Register
///
/// # Implementierungen
/// - **Production:** volatile MMIO-Zugriff (außerhalb dieser Crate)
/// - **Testing:** `u8`, `Cell<u8>` oder ein Mock mit Zugriffszähler
pub trait RegisterCell {
    /// Liest den aktuellen Registerwert
    fn read(&self) -> u8;

    /// Schreibt den kompletten Registerwert
    fn write(&mut self, value: u8);

    /// Read-Modify-Write in einem Aufruf
    fn modify<F>(&mut self, f: F)
    where
        F: FnOnce(u8) -> u8,
    {
        let value = self.read();
        self.write(f(value));
    }
}

impl RegisterCell for u8 {
    fn read(&self) -> u8 {
        *self
    }

    fn write(&mut self, value: u8) {
        *self = value;
    }
}

impl RegisterCell for Cell<u8> {
    fn read(&self) -> u8 {
        self.get()
    }

    fn write(&mut self, value: u8) {
        self.set(value);
    }
}

impl<C: RegisterCell + ?Sized> RegisterCell for &mut C {
    fn read(&self) -> u8 {
        (**self).read()
    }

    fn write(&mut self, value: u8) {
        (**self).write(value);
    }
}
