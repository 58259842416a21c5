//! Configuration backup image
//!
//! A complete copy of the configuration store, serialized with postcard.
//! Used to back up a tuned controller or move profiles between units.

use fermstat_core::config::TemperatureUnit;
use fermstat_hal::SLOT_COUNT;
use heapless::Vec;
use serde::{Deserialize, Serialize};

/// Magic number for backup images ("FS")
pub const IMAGE_MAGIC: u16 = 0x4653;

/// Current image format version
pub const IMAGE_VERSION: u8 = 1;

/// Upper bound on a serialized image (varint-encoded slots plus header)
pub const MAX_IMAGE_SIZE: usize = 3 * SLOT_COUNT + 16;

/// Backup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImageError {
    /// Output buffer too small
    Serialize,
    /// Bytes are not a postcard image
    Deserialize,
    /// Wrong magic or unsupported version
    InvalidFormat,
    /// Image was taken from a store of another size
    SlotCount(usize),
    /// Image uses the other temperature unit
    UnitMismatch,
}

/// Serialized form of a configuration store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigImage {
    pub magic: u16,
    pub version: u8,
    pub unit: TemperatureUnit,
    pub slots: Vec<u16, SLOT_COUNT>,
}

impl ConfigImage {
    /// Capture `slots`
    pub fn new(unit: TemperatureUnit, slots: &[u16; SLOT_COUNT]) -> Self {
        let mut image = Vec::new();
        // Same capacity as the source array
        let _ = image.extend_from_slice(slots);
        Self {
            magic: IMAGE_MAGIC,
            version: IMAGE_VERSION,
            unit,
            slots: image,
        }
    }

    /// Check magic, version and size
    pub fn validate(&self) -> Result<(), ImageError> {
        if self.magic != IMAGE_MAGIC || self.version != IMAGE_VERSION {
            return Err(ImageError::InvalidFormat);
        }
        if self.slots.len() != SLOT_COUNT {
            return Err(ImageError::SlotCount(self.slots.len()));
        }
        Ok(())
    }

    /// Serialize into `buffer`, returning the used prefix
    pub fn to_bytes<'a>(&self, buffer: &'a mut [u8]) -> Result<&'a mut [u8], ImageError> {
        postcard::to_slice(self, buffer).map_err(|_| ImageError::Serialize)
    }

    /// Deserialize and validate
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ImageError> {
        let image: ConfigImage =
            postcard::from_bytes(bytes).map_err(|_| ImageError::Deserialize)?;
        image.validate()?;
        Ok(image)
    }
}
