//! Floor demo - seed a small room and watch the monitor publish snapshots
//!
//! Seeds one salon with four tables, books a reservation two hours out,
//! seats a walk-in, then lets the monitor resolve the floor and prints the
//! published snapshot.
//!
//! Run: cargo run -p floor-engine --example floor_demo

use chrono::{Duration, Local};
use floor_engine::{FloorManager, FloorMonitor, FloorPolicy, MemoryStore, SystemClock, init_logger};
use shared::models::{ReservationInput, SalonCreate, TableCreate, TableStatus};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger("info");

    println!("=== Floor Demo ===\n");

    // === 1. Seed the room ===
    let manager = Arc::new(FloorManager::new(
        Arc::new(MemoryStore::new()),
        Arc::new(SystemClock),
        FloorPolicy::from_env(),
    ));

    let salon = manager
        .create_salon(SalonCreate {
            name: "Terrace".to_string(),
            description: None,
        })
        .await?;
    let mut tables = Vec::new();
    for number in 1..=4u32 {
        let table = manager
            .create_table(TableCreate {
                number,
                salon_id: salon.id,
                capacity: 4,
            })
            .await?;
        tables.push(table);
    }

    // === 2. Book table 2 for two hours from now, seat a walk-in at table 1 ===
    let scheduled = Local::now().naive_local() + Duration::hours(2);
    let booking = manager
        .create_reservation(ReservationInput {
            table_id: tables[1].id,
            first_name: "Ana".to_string(),
            last_name: "Costa".to_string(),
            phone: "+34 600 000 001".to_string(),
            email: None,
            note: Some("window seat".to_string()),
            date: Some(scheduled.date()),
            time: Some(scheduled.time()),
            party_size: 3,
            is_special: false,
        })
        .await?;
    println!(
        "Booked reservation {} for {}\n",
        booking.id,
        booking.scheduled_at()
    );

    manager
        .set_table_status(tables[0].id, TableStatus::Occupied)
        .await?;

    // === 3. Run the monitor and wait for the first published snapshot ===
    let shutdown = CancellationToken::new();
    let monitor = FloorMonitor::new(manager, shutdown.clone());
    let mut snapshots = monitor.subscribe();
    let handle = tokio::spawn(monitor.run());

    snapshots.changed().await?;
    let snapshot = snapshots.borrow().clone();
    if let Some(snapshot) = snapshot {
        println!("Floor at {}:", snapshot.generated_at);
        for table in &snapshot.tables {
            println!(
                "  table {:>2}  cap {}  {:?}",
                table.number, table.capacity, table.status
            );
        }
        println!(
            "Occupancy: {}/{} seats ({:.0}%)",
            snapshot.occupancy.venue_used_capacity,
            snapshot.occupancy.venue_capacity,
            snapshot.occupancy.venue_rate * 100.0
        );
    }

    shutdown.cancel();
    handle.await?;

    Ok(())
}
