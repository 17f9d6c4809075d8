//! Undoable remote operations. Each command remembers what it replaced so `undo` can put it
//! back.

use super::Remote;
use pattern_framework::{BoxError, Command};

#[derive(Debug, Default)]
pub struct PowerOn {
    was_on: bool,
}

impl Command<Remote> for PowerOn {
    fn name(&self) -> &str {
        "power on"
    }

    fn execute(&mut self, remote: &mut Remote) -> Result<(), BoxError> {
        self.was_on = remote.status().powered;
        remote.power_on();
        Ok(())
    }

    fn undo(&mut self, remote: &mut Remote) -> Result<(), BoxError> {
        if !self.was_on {
            remote.power_off();
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct PowerOff {
    was_on: bool,
}

impl Command<Remote> for PowerOff {
    fn name(&self) -> &str {
        "power off"
    }

    fn execute(&mut self, remote: &mut Remote) -> Result<(), BoxError> {
        self.was_on = remote.status().powered;
        remote.power_off();
        Ok(())
    }

    fn undo(&mut self, remote: &mut Remote) -> Result<(), BoxError> {
        if self.was_on {
            remote.power_on();
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Tune {
    channel: u32,
    previous: u32,
}

impl Tune {
    pub fn new(channel: u32) -> Self {
        Self { channel, previous: 0 }
    }
}

impl Command<Remote> for Tune {
    fn name(&self) -> &str {
        "tune"
    }

    fn execute(&mut self, remote: &mut Remote) -> Result<(), BoxError> {
        let previous = remote.status().channel;
        remote.tune(self.channel)?;
        self.previous = previous;
        Ok(())
    }

    fn undo(&mut self, remote: &mut Remote) -> Result<(), BoxError> {
        remote.tune(self.previous)?;
        Ok(())
    }
}

#[derive(Debug)]
pub struct SetVolume {
    level: u8,
    previous: u8,
}

impl SetVolume {
    pub fn new(level: u8) -> Self {
        Self { level, previous: 0 }
    }
}

impl Command<Remote> for SetVolume {
    fn name(&self) -> &str {
        "set volume"
    }

    fn execute(&mut self, remote: &mut Remote) -> Result<(), BoxError> {
        let previous = remote.status().volume;
        remote.set_volume(self.level)?;
        self.previous = previous;
        Ok(())
    }

    fn undo(&mut self, remote: &mut Remote) -> Result<(), BoxError> {
        remote.set_volume(self.previous)?;
        Ok(())
    }
}
