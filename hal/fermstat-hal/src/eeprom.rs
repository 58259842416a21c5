//! Configuration slot storage
//!
//! The configuration lives in 128 sixteen-bit slots of data EEPROM (or a
//! flash page emulating one). Slots are addressed by index; the meaning of
//! each slot is defined by `fermstat_core::config::layout`.

/// Number of 16-bit slots in the configuration area
pub const SLOT_COUNT: usize = 128;

/// Address-indexed configuration store
///
/// Access is synchronous. A write on real hardware is a bounded busy-wait,
/// so there is no cancellation and no error path: out-of-range addresses
/// read as erased (`0xFFFF`) and writes to them are dropped.
pub trait ConfigStore {
    /// Read one slot
    fn read(&mut self, address: u8) -> u16;

    /// Write one slot unconditionally
    fn write(&mut self, address: u8, value: u16);

    /// Write one slot only if the stored value differs
    ///
    /// Every scheduler and control path writes through this to keep
    /// EEPROM wear down. Returns `true` if a write was issued.
    fn update(&mut self, address: u8, value: u16) -> bool {
        if self.read(address) == value {
            return false;
        }
        self.write(address, value);
        true
    }

    /// Read one slot as a signed value (temperatures, corrections)
    fn read_i16(&mut self, address: u8) -> i16 {
        self.read(address) as i16
    }

    /// Signed counterpart of [`ConfigStore::update`]
    fn update_i16(&mut self, address: u8, value: i16) -> bool {
        self.update(address, value as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Slots {
        data: [u16; SLOT_COUNT],
        writes: usize,
    }

    impl ConfigStore for Slots {
        fn read(&mut self, address: u8) -> u16 {
            self.data.get(address as usize).copied().unwrap_or(0xFFFF)
        }

        fn write(&mut self, address: u8, value: u16) {
            if let Some(slot) = self.data.get_mut(address as usize) {
                *slot = value;
                self.writes += 1;
            }
        }
    }

    #[test]
    fn test_update_skips_unchanged() {
        let mut store = Slots {
            data: [0; SLOT_COUNT],
            writes: 0,
        };

        assert!(store.update(3, 42));
        assert!(!store.update(3, 42));
        assert_eq!(store.writes, 1);
        assert_eq!(store.read(3), 42);
    }

    #[test]
    fn test_signed_round_trip() {
        let mut store = Slots {
            data: [0; SLOT_COUNT],
            writes: 0,
        };

        store.update_i16(0, -486);
        assert_eq!(store.read_i16(0), -486);
        assert_eq!(store.read(0), 0xFE1A);
    }
}
