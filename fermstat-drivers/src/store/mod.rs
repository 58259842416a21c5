//! Configuration store implementations

pub mod image;
pub mod memory;

pub use image::{ConfigImage, ImageError, IMAGE_MAGIC, IMAGE_VERSION, MAX_IMAGE_SIZE};
pub use memory::{MemoryEeprom, ERASED};
