//! Television implementors. The remote only ever talks to the [`Television`] trait, so brands
//! can be swapped without touching the remote or its commands.

use super::HomeError;
use crate::model::TvStatus;
use std::fmt;

/// Power, channel and volume shared by every brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    pub powered: bool,
    pub channel: u32,
    pub volume: u8,
    pub max_channel: u32,
    pub max_volume: u8,
}

/// The implementor side of the remote/television bridge.
pub trait Television: Send + Sync + fmt::Debug {
    fn brand(&self) -> &str;

    fn panel(&self) -> &Panel;

    fn panel_mut(&mut self) -> &mut Panel;

    fn box_clone(&self) -> Box<dyn Television>;

    fn power_on(&mut self) {
        self.panel_mut().powered = true;
    }

    fn power_off(&mut self) {
        self.panel_mut().powered = false;
    }

    fn tune(&mut self, channel: u32) -> Result<(), HomeError> {
        let brand = self.brand().to_string();
        let panel = self.panel_mut();
        if !panel.powered {
            return Err(HomeError::PoweredOff(brand));
        }
        if channel == 0 || channel > panel.max_channel {
            return Err(HomeError::InvalidChannel {
                channel,
                max: panel.max_channel,
            });
        }
        panel.channel = channel;
        Ok(())
    }

    fn set_volume(&mut self, level: u8) -> Result<(), HomeError> {
        let brand = self.brand().to_string();
        let panel = self.panel_mut();
        if !panel.powered {
            return Err(HomeError::PoweredOff(brand));
        }
        if level > panel.max_volume {
            return Err(HomeError::VolumeTooHigh {
                level,
                max: panel.max_volume,
            });
        }
        panel.volume = level;
        Ok(())
    }

    fn status(&self) -> TvStatus {
        let panel = self.panel();
        TvStatus {
            brand: self.brand().to_string(),
            powered: panel.powered,
            channel: panel.channel,
            volume: panel.volume,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SonyTv {
    panel: Panel,
}

impl Default for SonyTv {
    fn default() -> Self {
        Self {
            panel: Panel {
                powered: false,
                channel: 1,
                volume: 20,
                max_channel: 999,
                max_volume: 100,
            },
        }
    }
}

impl Television for SonyTv {
    fn brand(&self) -> &str {
        "Sony"
    }

    fn panel(&self) -> &Panel {
        &self.panel
    }

    fn panel_mut(&mut self) -> &mut Panel {
        &mut self.panel
    }

    fn box_clone(&self) -> Box<dyn Television> {
        Box::new(self.clone())
    }
}

#[derive(Debug, Clone)]
pub struct SamsungTv {
    panel: Panel,
}

impl Default for SamsungTv {
    fn default() -> Self {
        Self {
            panel: Panel {
                powered: false,
                channel: 1,
                volume: 15,
                max_channel: 500,
                max_volume: 60,
            },
        }
    }
}

impl Television for SamsungTv {
    fn brand(&self) -> &str {
        "Samsung"
    }

    fn panel(&self) -> &Panel {
        &self.panel
    }

    fn panel_mut(&mut self) -> &mut Panel {
        &mut self.panel
    }

    fn box_clone(&self) -> Box<dyn Television> {
        Box::new(self.clone())
    }
}
