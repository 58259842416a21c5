//! Mock collaborators shared by unit tests

use fermstat_hal::{AdcChannel, AdcError, ConfigStore, SLOT_COUNT};

use crate::config::{default_image, TemperatureUnit};
use crate::traits::{Display, Indicators, RelayOutput};

/// In-memory store that counts issued writes
pub struct MockStore {
    pub data: [u16; SLOT_COUNT],
    pub writes: usize,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            data: default_image(TemperatureUnit::Celsius),
            writes: 0,
        }
    }

    pub fn set(&mut self, address: u8, value: i16) {
        self.data[address as usize] = value as u16;
    }

    pub fn get(&self, address: u8) -> i16 {
        self.data[address as usize] as i16
    }
}

impl ConfigStore for MockStore {
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

#[derive(Default)]
pub struct MockRelay {
    pub on: bool,
}

impl RelayOutput for MockRelay {
    fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

/// Fixed raw reading per probe
pub struct MockAdc {
    pub raw: [u16; 2],
}

impl AdcChannel for MockAdc {
    fn convert(&mut self, probe: u8) -> Result<u16, AdcError> {
        self.raw
            .get(probe as usize)
            .copied()
            .ok_or(AdcError::NoChannel)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shown {
    Nothing,
    Temperature(i16),
    Integer(i16),
    Fault,
    Standby,
}

pub struct MockDisplay {
    pub shown: Shown,
    pub indicators: Indicators,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            shown: Shown::Nothing,
            indicators: Indicators::default(),
        }
    }
}

impl Display for MockDisplay {
    fn show_temperature(&mut self, value: i16) {
        self.shown = Shown::Temperature(value);
    }

    fn show_integer(&mut self, value: i16) {
        self.shown = Shown::Integer(value);
    }

    fn show_fault(&mut self) {
        self.shown = Shown::Fault;
    }

    fn show_standby(&mut self) {
        self.shown = Shown::Standby;
    }

    fn show_indicators(&mut self, indicators: Indicators) {
        self.indicators = indicators;
    }
}
