//! Plain data carried through the pattern skins: requests handed to chains, products coming out
//! of builders, templates stored in the catalog.

pub mod computer;
pub mod furniture;
pub mod purchase;
pub mod ticket;
pub mod television;

pub use computer::*;
pub use furniture::*;
pub use purchase::*;
pub use ticket::*;
pub use television::*;
