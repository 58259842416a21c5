//! RAM-backed configuration store
//!
//! Stands in for the data EEPROM on the host and in simulation. Counts
//! issued writes so wear-sensitive paths can be checked.

use fermstat_core::config::{default_image, TemperatureUnit};
use fermstat_hal::{ConfigStore, SLOT_COUNT};

use super::image::{ConfigImage, ImageError};

/// Value of an erased slot
pub const ERASED: u16 = 0xFFFF;

/// In-memory configuration store
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MemoryEeprom {
    unit: TemperatureUnit,
    slots: [u16; SLOT_COUNT],
    writes: u32,
}

impl MemoryEeprom {
    /// An erased store (every slot `0xFFFF`)
    pub const fn erased(unit: TemperatureUnit) -> Self {
        Self {
            unit,
            slots: [ERASED; SLOT_COUNT],
            writes: 0,
        }
    }

    /// A store holding the factory image for `unit`
    pub fn with_defaults(unit: TemperatureUnit) -> Self {
        Self {
            unit,
            slots: default_image(unit),
            writes: 0,
        }
    }

    /// Restore the factory image
    ///
    /// Goes through [`ConfigStore::update`], so only differing slots are
    /// written.
    pub fn reset(&mut self) {
        let image = default_image(self.unit);
        for (address, value) in image.iter().enumerate() {
            self.update(address as u8, *value);
        }
    }

    /// Temperature unit of the stored values
    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Slot writes issued since creation
    pub fn writes(&self) -> u32 {
        self.writes
    }

    /// Raw slot contents
    pub fn slots(&self) -> &[u16; SLOT_COUNT] {
        &self.slots
    }

    /// Serialize all slots into `buffer`
    ///
    /// Size `buffer` with [`MAX_IMAGE_SIZE`](super::MAX_IMAGE_SIZE).
    pub fn export<'a>(&self, buffer: &'a mut [u8]) -> Result<&'a mut [u8], ImageError> {
        ConfigImage::new(self.unit, &self.slots).to_bytes(buffer)
    }

    /// Load all slots from an exported image
    ///
    /// The image must use this store's temperature unit. Slots are written
    /// through [`ConfigStore::update`]. Returns the number of slots changed.
    pub fn import(&mut self, bytes: &[u8]) -> Result<usize, ImageError> {
        let image = ConfigImage::from_bytes(bytes)?;
        if image.unit != self.unit {
            return Err(ImageError::UnitMismatch);
        }

        let mut changed = 0;
        for (address, value) in image.slots.iter().enumerate() {
            if self.update(address as u8, *value) {
                changed += 1;
            }
        }
        Ok(changed)
    }
}

impl ConfigStore for MemoryEeprom {
    fn read(&mut self, address: u8) -> u16 {
        self.slots.get(address as usize).copied().unwrap_or(ERASED)
    }

    fn write(&mut self, address: u8, value: u16) {
        if let Some(slot) = self.slots.get_mut(address as usize) {
            *slot = value;
            self.writes = self.writes.saturating_add(1);
        }
    }
}
