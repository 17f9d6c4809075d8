//! # Beverage and Accessory Decorators
//!
//! Two decorator skins over the same mechanism. A coffee order is a [`Receipt`] leaf wrapped in
//! condiment layers, each adding to the cost and appending to the description. A phone is a
//! [`PhoneSpec`] leaf wrapped in protective cases that add price, features and protection.
//!
//! ```rust
//! use pattern_recipe::beverage::{order, Condiment};
//! use pattern_framework::Component;
//!
//! let latte = order(&[Condiment::Milk, Condiment::Sugar]);
//! let receipt = latte.operation();
//! assert_eq!(receipt.cost, 13.0);
//! assert_eq!(receipt.description, "coffee + milk + sugar");
//! ```

use pattern_framework::{BoxedComponent, Combine, Decorate, Increment, Leaf};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Cost plus a human-readable description of everything in the cup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub cost: f64,
    pub description: String,
}

impl Receipt {
    pub fn new(cost: f64, description: impl Into<String>) -> Self {
        Self {
            cost,
            description: description.into(),
        }
    }
}

impl Combine for Receipt {
    fn combine(self, other: Self) -> Self {
        let description = match (self.description.is_empty(), other.description.is_empty()) {
            (true, _) => other.description,
            (_, true) => self.description,
            _ => format!("{} + {}", self.description, other.description),
        };
        Receipt {
            cost: self.cost + other.cost,
            description,
        }
    }
}

pub type Beverage = BoxedComponent<Receipt>;

pub fn simple_coffee() -> Leaf<Receipt> {
    Leaf::new("coffee", Receipt::new(10.0, "coffee"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condiment {
    Milk,
    Sugar,
    Whip,
    Caramel,
}

impl Condiment {
    pub fn name(self) -> &'static str {
        match self {
            Condiment::Milk => "milk",
            Condiment::Sugar => "sugar",
            Condiment::Whip => "whip",
            Condiment::Caramel => "caramel",
        }
    }

    pub fn price(self) -> f64 {
        match self {
            Condiment::Milk => 2.0,
            Condiment::Sugar => 1.0,
            Condiment::Whip => 3.0,
            Condiment::Caramel => 2.5,
        }
    }

    pub fn layer(self) -> Increment<Receipt> {
        Increment::new(self.name(), Receipt::new(self.price(), self.name()))
    }
}

/// A coffee with `condiments` applied in order; the last one is the outermost layer.
pub fn order(condiments: &[Condiment]) -> Beverage {
    condiments
        .iter()
        .fold(simple_coffee().boxed(), |cup, condiment| {
            debug!(condiment = condiment.name(), "Add condiment");
            cup.decorate(condiment.layer()).boxed()
        })
}

/// Price, feature list and protection level of a phone with its accessories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneSpec {
    pub price: f64,
    pub features: Vec<String>,
    pub protection: u32,
}

impl PhoneSpec {
    fn new(price: f64, feature: &str, protection: u32) -> Self {
        Self {
            price,
            features: vec![feature.to_string()],
            protection,
        }
    }
}

impl Combine for PhoneSpec {
    fn combine(self, other: Self) -> Self {
        PhoneSpec {
            price: self.price + other.price,
            features: self.features.combine(other.features),
            protection: self.protection + other.protection,
        }
    }
}

pub fn basic_phone() -> Leaf<PhoneSpec> {
    Leaf::new("basic phone", PhoneSpec::new(3999.0, "basic functions", 1))
}

pub fn silicone_case() -> Increment<PhoneSpec> {
    Increment::new("silicone case", PhoneSpec::new(99.0, "anti-slip silicone protection", 1))
}

pub fn bumper_case() -> Increment<PhoneSpec> {
    Increment::new("bumper case", PhoneSpec::new(199.0, "drop-proof bumper protection", 2))
}

pub fn tempered_glass() -> Increment<PhoneSpec> {
    Increment::new("tempered glass", PhoneSpec::new(49.0, "tempered glass screen protection", 1))
}
