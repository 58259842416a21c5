//! Driver implementations
//!
//! This crate provides concrete implementations of the traits defined in
//! `fermstat-hal` and `fermstat-core`:
//!
//! - Relay outputs on GPIO pins (active-high or active-low)
//! - Adapter from `embedded-hal` digital pins
//! - ADC resolution adapter for converters wider than 10 bits
//! - RAM-backed configuration store with postcard backup images

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod relay;
pub mod store;
