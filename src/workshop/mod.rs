//! # Computer Workshop
//!
//! A builder skin. [`ComputerBuilder`] lists the assembly steps; [`GamingBuilder`] and
//! [`OfficeBuilder`] decide which parts each step installs. The directors [`full_build`] and
//! [`barebones`] decide which steps run, and work with either builder.
//!
//! ```rust
//! use pattern_recipe::workshop::{assemble, full_build, GamingBuilder};
//!
//! let rig = assemble(&full_build(), GamingBuilder::default()).unwrap();
//! assert_eq!(rig.gpu.as_deref(), Some("NVIDIA RTX 4090"));
//! ```

pub mod error;

pub use error::*;

use crate::model::Computer;
use pattern_framework::{required, Build, Director, FrameworkError};
use tracing::instrument;

/// Assembly steps. Each step returns the builder so calls can be chained.
pub trait ComputerBuilder: Build<Product = Computer> {
    fn add_cpu(&mut self) -> &mut Self;
    fn add_motherboard(&mut self) -> &mut Self;
    fn add_memory(&mut self) -> &mut Self;
    fn add_storage(&mut self) -> &mut Self;
    fn add_gpu(&mut self) -> &mut Self;
    fn add_power_supply(&mut self) -> &mut Self;
    fn add_case(&mut self) -> &mut Self;
}

/// Parts collected so far.
#[derive(Debug, Clone, Default)]
struct Parts {
    cpu: Option<String>,
    motherboard: Option<String>,
    memory: Vec<String>,
    storage: Vec<String>,
    gpu: Option<String>,
    power_supply: Option<String>,
    case: Option<String>,
}

impl Parts {
    fn finish(self) -> Result<Computer, FrameworkError> {
        if self.memory.is_empty() {
            return Err(FrameworkError::Incomplete("memory".to_string()));
        }
        if self.storage.is_empty() {
            return Err(FrameworkError::Incomplete("storage".to_string()));
        }
        Ok(Computer {
            cpu: required(self.cpu, "cpu")?,
            motherboard: required(self.motherboard, "motherboard")?,
            memory: self.memory,
            storage: self.storage,
            gpu: self.gpu,
            power_supply: required(self.power_supply, "power supply")?,
            case: self.case,
        })
    }
}

macro_rules! builder_steps {
    ($builder:ty {
        cpu: $cpu:expr,
        motherboard: $board:expr,
        memory: [$($memory:expr),+],
        storage: [$($storage:expr),+],
        gpu: $gpu:expr,
        power_supply: $psu:expr,
        case: $case:expr $(,)?
    }) => {
        impl ComputerBuilder for $builder {
            fn add_cpu(&mut self) -> &mut Self {
                self.parts.cpu = Some($cpu.to_string());
                self
            }

            fn add_motherboard(&mut self) -> &mut Self {
                self.parts.motherboard = Some($board.to_string());
                self
            }

            fn add_memory(&mut self) -> &mut Self {
                self.parts.memory = vec![$($memory.to_string()),+];
                self
            }

            fn add_storage(&mut self) -> &mut Self {
                self.parts.storage = vec![$($storage.to_string()),+];
                self
            }

            fn add_gpu(&mut self) -> &mut Self {
                self.parts.gpu = Some($gpu.to_string());
                self
            }

            fn add_power_supply(&mut self) -> &mut Self {
                self.parts.power_supply = Some($psu.to_string());
                self
            }

            fn add_case(&mut self) -> &mut Self {
                self.parts.case = Some($case.to_string());
                self
            }
        }

        impl Build for $builder {
            type Product = Computer;

            fn finish(self) -> Result<Computer, FrameworkError> {
                self.parts.finish()
            }
        }
    };
}

/// High-end parts.
#[derive(Debug, Default)]
pub struct GamingBuilder {
    parts: Parts,
}

builder_steps!(GamingBuilder {
    cpu: "Intel i9-13900K",
    motherboard: "ASUS ROG MAXIMUS Z790",
    memory: ["32GB DDR5 6000MHz", "32GB DDR5 6000MHz"],
    storage: ["2TB NVMe SSD", "4TB HDD"],
    gpu: "NVIDIA RTX 4090",
    power_supply: "1200W 80+ Platinum",
    case: "Lian Li O11 Dynamic",
});

/// Budget parts.
#[derive(Debug, Default)]
pub struct OfficeBuilder {
    parts: Parts,
}

builder_steps!(OfficeBuilder {
    cpu: "Intel i5-12400",
    motherboard: "ASUS PRIME B660",
    memory: ["16GB DDR4 3200MHz"],
    storage: ["1TB NVMe SSD"],
    gpu: "Integrated Graphics",
    power_supply: "550W 80+ Bronze",
    case: "Standard ATX Case",
});

/// Every step, in assembly order.
pub fn full_build<B: ComputerBuilder + 'static>() -> Director<B> {
    Director::new("full build")
        .step("cpu", |b: &mut B| {
            b.add_cpu();
        })
        .step("motherboard", |b: &mut B| {
            b.add_motherboard();
        })
        .step("memory", |b: &mut B| {
            b.add_memory();
        })
        .step("storage", |b: &mut B| {
            b.add_storage();
        })
        .step("gpu", |b: &mut B| {
            b.add_gpu();
        })
        .step("power supply", |b: &mut B| {
            b.add_power_supply();
        })
        .step("case", |b: &mut B| {
            b.add_case();
        })
}

/// Just enough to boot: no graphics card, no case.
pub fn barebones<B: ComputerBuilder + 'static>() -> Director<B> {
    Director::new("barebones")
        .step("cpu", |b: &mut B| {
            b.add_cpu().add_motherboard();
        })
        .step("memory", |b: &mut B| {
            b.add_memory().add_storage();
        })
        .step("power supply", |b: &mut B| {
            b.add_power_supply();
        })
}

/// Runs `director` over `builder` and finishes the computer.
#[instrument(skip_all, fields(director = director.name()))]
pub fn assemble<B: ComputerBuilder>(director: &Director<B>, builder: B) -> Result<Computer, WorkshopError> {
    Ok(director.construct(builder)?)
}
