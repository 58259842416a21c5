//! Device traits
//!
//! These traits define the interface between the control logic and the
//! output collaborators. Chip-level traits live in `fermstat-hal`.

pub mod display;
pub mod relay;

pub use display::{Display, Indicators};
pub use relay::{RelayOutput, RelayState, Relays};
