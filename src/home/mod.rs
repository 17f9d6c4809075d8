//! # Smart-Home Remote
//!
//! Two patterns meet here. The [`Remote`] is the abstraction half of a bridge: it owns some
//! [`Television`] and forwards to it, whatever the brand. Operations on the remote are reified
//! as undoable commands ([`PowerOn`], [`PowerOff`], [`Tune`], [`SetVolume`]) and run by a
//! [`pattern_framework::Invoker`], which keeps the undo history.
//!
//! ## Structure
//!
//! - [`television`] - the implementor trait and the Sony and Samsung sets
//! - [`commands`] - undoable remote operations
//! - [`error`] - [`HomeError`]
//! - [`new()`] - factory for the invoker and its [`HomeClient`](crate::clients::HomeClient)

pub mod commands;
pub mod error;
pub mod television;

pub use commands::*;
pub use error::*;
pub use television::*;

use crate::clients::HomeClient;
use crate::model::TvStatus;
use pattern_framework::Invoker;
use std::fmt;
use tracing::debug;

/// Remote control bound to one television.
pub struct Remote {
    tv: Box<dyn Television>,
}

impl Remote {
    pub fn new(tv: Box<dyn Television>) -> Self {
        Self { tv }
    }

    pub fn sony() -> Self {
        Self::new(Box::new(SonyTv::default()))
    }

    pub fn samsung() -> Self {
        Self::new(Box::new(SamsungTv::default()))
    }

    pub fn power_on(&mut self) {
        debug!(brand = self.tv.brand(), "Power on");
        self.tv.power_on();
    }

    pub fn power_off(&mut self) {
        debug!(brand = self.tv.brand(), "Power off");
        self.tv.power_off();
    }

    pub fn tune(&mut self, channel: u32) -> Result<(), HomeError> {
        debug!(brand = self.tv.brand(), channel, "Tune");
        self.tv.tune(channel)
    }

    pub fn set_volume(&mut self, level: u8) -> Result<(), HomeError> {
        debug!(brand = self.tv.brand(), level, "Set volume");
        self.tv.set_volume(level)
    }

    pub fn status(&self) -> TvStatus {
        self.tv.status()
    }
}

impl Clone for Remote {
    fn clone(&self) -> Self {
        Self {
            tv: self.tv.box_clone(),
        }
    }
}

impl fmt::Debug for Remote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Remote").field("tv", &self.tv).finish()
    }
}

/// Creates the invoker around `remote` and its client.
pub fn new(remote: Remote) -> (Invoker<Remote>, HomeClient) {
    let (invoker, generic_client) = Invoker::new(remote, 32);
    (invoker, HomeClient::new(generic_client))
}
