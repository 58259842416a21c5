//! Fermstat Hardware Abstraction Layer
//!
//! This crate defines the chip-level traits the thermostat core is written
//! against. A board support crate implements them for a concrete MCU; the
//! host test suites implement them with plain structs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  fermstat-core (control, scheduling)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  fermstat-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ fermstat-     │       │  board crate  │
//! │   drivers     │       │  (MCU regs)   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Relay and buzzer outputs
//! - [`adc::AdcChannel`] - Thermistor divider conversions
//! - [`eeprom::ConfigStore`] - 16-bit configuration slots in non-volatile memory

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod eeprom;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use adc::{AdcChannel, AdcError, ADC_MAX};
pub use eeprom::{ConfigStore, SLOT_COUNT};
pub use gpio::OutputPin;
