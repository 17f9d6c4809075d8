//! # Celestial Singletons
//!
//! There is one Earth and one Solar System. Each lives in an explicit [`Singleton`] holder,
//! built on first access and shared by every caller for the rest of the process.

use pattern_framework::Singleton;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Earth {
    pub name: String,
    pub population: String,
    pub continents: u32,
    pub oceans: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolarSystem {
    pub name: String,
    pub star: String,
    pub planets: Vec<String>,
    pub age: String,
}

static EARTH: Singleton<Earth> = Singleton::new();
static SOLAR_SYSTEM: Singleton<SolarSystem> = Singleton::new();

/// The one Earth.
pub fn earth() -> &'static Earth {
    EARTH.get_or_init(|| Earth {
        name: "Earth".to_string(),
        population: "about 7.8 billion".to_string(),
        continents: 7,
        oceans: 5,
    })
}

/// The one Solar System.
pub fn solar_system() -> &'static SolarSystem {
    SOLAR_SYSTEM.get_or_init(|| SolarSystem {
        name: "Solar System".to_string(),
        star: "Sun".to_string(),
        planets: ["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
            .iter()
            .map(|p| p.to_string())
            .collect(),
        age: "about 4.6 billion years".to_string(),
    })
}

/// How many times each holder has been built, as `(earth, solar_system)`.
pub fn constructions() -> (usize, usize) {
    (EARTH.constructions(), SOLAR_SYSTEM.constructions())
}
