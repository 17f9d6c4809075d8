//! Walks through every scenario in the crate, narrating through `tracing`.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use pattern_framework::telemetry::setup_tracing;
use pattern_framework::{Component, Decorate};
use pattern_recipe::approval::ApprovalDesk;
use pattern_recipe::beverage::{self, Condiment};
use pattern_recipe::catalog::FurnitureCatalog;
use pattern_recipe::home::Remote;
use pattern_recipe::lifecycle::HomeSystem;
use pattern_recipe::model::{Priority, SupportTicket, TicketKind};
use pattern_recipe::support::SupportDesk;
use pattern_recipe::workshop::{self, GamingBuilder, OfficeBuilder};
use pattern_recipe::{cosmos, menu};
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting pattern recipe demo");

    // Decorator
    let span = tracing::info_span!("decorator");
    span.in_scope(|| {
        let coffee = beverage::order(&[Condiment::Milk, Condiment::Sugar]);
        let receipt = coffee.operation();
        info!(cost = receipt.cost, description = %receipt.description, "Coffee ordered");

        let phone = beverage::basic_phone()
            .decorate(beverage::silicone_case())
            .decorate(beverage::bumper_case())
            .decorate(beverage::tempered_glass());
        let spec = phone.operation();
        info!(price = spec.price, protection = spec.protection, features = ?spec.features, "Phone configured");
    });

    // Composite
    let span = tracing::info_span!("composite");
    span.in_scope(|| {
        let menu = menu::todays_menu();
        for line in menu::render(&menu) {
            info!("{line}");
        }
    });

    // Chain of responsibility
    let span = tracing::info_span!("chain");
    span.in_scope(|| {
        let desk = ApprovalDesk::standard();
        for amount in [300.0, 2_000.0, 20_000.0] {
            match desk.approve(amount, "office supplies") {
                Ok(approval) => info!(amount, approver = %approval.approver, "Purchase approved"),
                Err(e) => warn!(amount, error = %e, "Purchase rejected"),
            }
        }

        let support = SupportDesk::standard();
        let mut ticket = SupportTicket::new(
            1,
            "Zhao",
            "Server keeps crashing",
            Priority::Critical,
            TicketKind::Technical,
        );
        let dispatch = support.resolve(&mut ticket);
        info!(ticket = ticket.id, handler = ?dispatch.handler(), status = ?ticket.status, "Ticket routed");
        for note in &ticket.notes {
            info!(ticket = ticket.id, "{note}");
        }
    });

    // Singleton
    let earth = cosmos::earth();
    let solar_system = cosmos::solar_system();
    info!(
        earth = %earth.name,
        star = %solar_system.star,
        planets = solar_system.planets.len(),
        same_earth = std::ptr::eq(earth, cosmos::earth()),
        "Singletons ready"
    );

    // Prototype
    let catalog = FurnitureCatalog::standard();
    match catalog.fitted("cabinet", "drawer") {
        Ok(cabinet) => info!(
            name = %cabinet.part().name,
            components = cabinet.components().len(),
            "Cabinet cloned and fitted"
        ),
        Err(e) => error!(error = %e, "Prototype lookup failed"),
    }

    // Builder
    for computer in [
        workshop::assemble(&workshop::full_build(), GamingBuilder::default()),
        workshop::assemble(&workshop::full_build(), OfficeBuilder::default()),
    ] {
        match computer {
            Ok(pc) => info!(cpu = %pc.cpu, gpu = ?pc.gpu, "Computer assembled"),
            Err(e) => error!(error = %e, "Assembly failed"),
        }
    }

    // Bridge + command
    let system = HomeSystem::new(Remote::sony());
    let span = tracing::info_span!("remote");
    async {
        let client = &system.home_client;
        client.power_on().await?;
        client.tune(7).await?;
        client.set_volume(35).await?;
        info!(status = ?client.status().await?, "Watching TV");

        let undone = client.undo().await?;
        info!(undone = %undone, status = ?client.status().await?, "Undid last operation");
        Ok::<_, pattern_recipe::home::HomeError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let remote = system.shutdown().await.map_err(|e| e.to_string())?;
    info!(status = ?remote.status(), "Remote handed back");

    info!("Demo completed successfully");
    Ok(())
}
