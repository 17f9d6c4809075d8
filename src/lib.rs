//! # Pattern Recipe
//!
//! Worked scenarios for the shapes in [`pattern_framework`]. Each module is a small domain
//! built on one pattern:
//!
//! | Module | Pattern | Scenario |
//! |---|---|---|
//! | [`beverage`] | decorator | priced coffee condiments, phone accessories |
//! | [`menu`] | composite | restaurant menu with category subtotals |
//! | [`approval`] | chain of responsibility | purchase requests by amount |
//! | [`support`] | chain of responsibility | tiered support desk with ticket notes |
//! | [`cosmos`] | singleton | one Earth, one Solar System |
//! | [`catalog`] | prototype | furniture templates |
//! | [`workshop`] | builder | gaming and office computers |
//! | [`home`] | bridge + command | TV remote with undo |
//!
//! [`home`] also runs as a small actor system: [`lifecycle::HomeSystem`] spawns an invoker and
//! hands out a [`clients::HomeClient`].
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run
//! ```

pub mod approval;
pub mod beverage;
pub mod catalog;
pub mod clients;
pub mod cosmos;
pub mod home;
pub mod lifecycle;
pub mod menu;
pub mod model;
pub mod support;
pub mod workshop;
