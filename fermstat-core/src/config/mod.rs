//! Configuration
//!
//! Slot layout of the configuration store, typed views over it, and the
//! factory defaults.

pub mod defaults;
pub mod layout;
pub mod types;

pub use defaults::{default_image, menu_default};
pub use layout::*;
pub use types::*;
