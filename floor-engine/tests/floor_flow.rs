//! End-to-end floor behavior against the in-memory store.

use std::sync::Arc;

use anyhow::Result;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use floor_engine::core::{FixedClock, FloorPolicy};
use floor_engine::floor::FloorManager;
use floor_engine::store::{FloorStore, MemoryStore};
use shared::error::ErrorCode;
use shared::floor::{EffectiveStatus, FloorSnapshot};
use shared::models::{
    ReservationInput, ReservationStatus, SalonCreate, TableCreate, TableStatus,
};

fn opening() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn harness() -> (Arc<MemoryStore>, Arc<FixedClock>, FloorManager) {
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(FixedClock::new(opening()));
    let manager = FloorManager::new(store.clone(), clock.clone(), FloorPolicy::default());
    (store, clock, manager)
}

fn guest(table_id: i64, time: NaiveTime, party_size: i32, is_special: bool) -> ReservationInput {
    ReservationInput {
        table_id,
        first_name: "Carmen".to_string(),
        last_name: "Vidal".to_string(),
        phone: "600555333".to_string(),
        email: Some("carmen@example.com".to_string()),
        note: None,
        date: Some(opening().date()),
        time: Some(time),
        party_size,
        is_special,
    }
}

fn status_of(snapshot: &FloorSnapshot, table_id: i64) -> EffectiveStatus {
    snapshot
        .tables
        .iter()
        .find(|v| v.table_id == table_id)
        .map(|v| v.status)
        .unwrap()
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[tokio::test]
async fn test_full_service_day() -> Result<()> {
    let (store, clock, manager) = harness();

    let main = manager
        .create_salon(SalonCreate {
            name: "Main Hall".to_string(),
            description: None,
        })
        .await?;
    let terrace = manager
        .create_salon(SalonCreate {
            name: "Terrace".to_string(),
            description: Some("Outdoor seating".to_string()),
        })
        .await?;

    let four_top = manager
        .create_table(TableCreate {
            number: 1,
            salon_id: main.id,
            capacity: 4,
        })
        .await?;
    let six_top = manager
        .create_table(TableCreate {
            number: 2,
            salon_id: main.id,
            capacity: 6,
        })
        .await?;
    let deuce = manager
        .create_table(TableCreate {
            number: 1,
            salon_id: terrace.id,
            capacity: 2,
        })
        .await?;

    // Morning: an anniversary dinner at 20:00 and a party of three at
    // 21:00 on the bigger table.
    let anniversary = manager
        .create_reservation(guest(four_top.id, hm(20, 0), 4, true))
        .await?;
    manager
        .create_reservation(guest(six_top.id, hm(21, 0), 3, false))
        .await?;

    let snapshot = manager.refresh().await?;
    assert_eq!(status_of(&snapshot, four_top.id), EffectiveStatus::ReservedSoon);
    assert_eq!(status_of(&snapshot, six_top.id), EffectiveStatus::ReservedSoon);
    assert_eq!(status_of(&snapshot, deuce.id), EffectiveStatus::Empty);

    let main_occupancy = &snapshot.occupancy.per_salon[&main.id];
    assert_eq!(main_occupancy.capacity, 10);
    assert_eq!(main_occupancy.used_capacity, 7);
    assert_eq!(snapshot.occupancy.venue_capacity, 12);

    // Half past seven: the anniversary slides into its highlight window.
    clock.set(opening().date().and_hms_opt(19, 30, 0).unwrap());
    let snapshot = manager.refresh().await?;
    assert_eq!(
        status_of(&snapshot, four_top.id),
        EffectiveStatus::ReservedSpecialSoon
    );
    assert_eq!(status_of(&snapshot, six_top.id), EffectiveStatus::ReservedSoon);

    // The couple arrives and the first dishes go in.
    clock.set(opening().date().and_hms_opt(20, 5, 0).unwrap());
    store.set_active_order_items(four_top.id, 4)?;
    let snapshot = manager.refresh().await?;
    assert_eq!(status_of(&snapshot, four_top.id), EffectiveStatus::Occupied);

    // Seated guests suspend the expiry scan for their table.
    let reservations = store.load_reservations().await?;
    let record = reservations.iter().find(|r| r.id == anniversary.id).unwrap();
    assert_eq!(record.status, ReservationStatus::Active);

    // Nobody shows for the nine o'clock; the next poll releases it.
    clock.set(opening().date().and_hms_opt(21, 1, 0).unwrap());
    let snapshot = manager.refresh().await?;
    assert_eq!(status_of(&snapshot, six_top.id), EffectiveStatus::Empty);
    let reservations = store.load_reservations().await?;
    let lapsed = reservations.iter().find(|r| r.table_id == six_top.id).unwrap();
    assert_eq!(lapsed.status, ReservationStatus::Completed);

    // The couple pays; staff closes the booking and clears the table.
    manager.complete_reservation(anniversary.id).await?;
    store.set_active_order_items(four_top.id, 0)?;
    manager
        .set_table_status(four_top.id, TableStatus::Available)
        .await?;
    let snapshot = manager.refresh().await?;
    assert_eq!(status_of(&snapshot, four_top.id), EffectiveStatus::Empty);
    assert_eq!(snapshot.occupancy.venue_used_capacity, 0);

    Ok(())
}

#[tokio::test]
async fn test_next_day_booking_decays_poll_by_poll() -> Result<()> {
    let (store, clock, manager) = harness();

    let salon = manager
        .create_salon(SalonCreate {
            name: "Main Hall".to_string(),
            description: None,
        })
        .await?;
    let table = manager
        .create_table(TableCreate {
            number: 1,
            salon_id: salon.id,
            capacity: 4,
        })
        .await?;

    // Birthday dinner booked for tomorrow evening.
    let dinner_date = opening().date() + Duration::days(1);
    let mut input = guest(table.id, hm(20, 0), 2, true);
    input.date = Some(dinner_date);
    let booking = manager.create_reservation(input).await?;

    // Thirty-four hours out: calm.
    let snapshot = manager.refresh().await?;
    assert_eq!(status_of(&snapshot, table.id), EffectiveStatus::ReservedFar);

    // Evening before, twenty-three hours out: inside the day window.
    clock.set(opening().date().and_hms_opt(21, 0, 0).unwrap());
    let snapshot = manager.refresh().await?;
    assert_eq!(status_of(&snapshot, table.id), EffectiveStatus::ReservedSoon);

    // Fifty-nine minutes out: the highlight window.
    clock.set(dinner_date.and_hms_opt(19, 1, 0).unwrap());
    let snapshot = manager.refresh().await?;
    assert_eq!(
        status_of(&snapshot, table.id),
        EffectiveStatus::ReservedSpecialSoon
    );

    // Eight o'clock sharp with nobody seated: the poll releases the
    // table and closes the record.
    clock.set(dinner_date.and_hms_opt(20, 0, 0).unwrap());
    let snapshot = manager.refresh().await?;
    assert_eq!(status_of(&snapshot, table.id), EffectiveStatus::Empty);

    let reservations = store.load_reservations().await?;
    let record = reservations.iter().find(|r| r.id == booking.id).unwrap();
    assert_eq!(record.status, ReservationStatus::Completed);
    let tables = store.load_tables().await?;
    assert_eq!(tables[0].status, TableStatus::Available);

    Ok(())
}

#[tokio::test]
async fn test_snapshot_wire_shape() -> Result<()> {
    let (_, _, manager) = harness();

    let salon = manager
        .create_salon(SalonCreate {
            name: "Main Hall".to_string(),
            description: None,
        })
        .await?;
    let table = manager
        .create_table(TableCreate {
            number: 1,
            salon_id: salon.id,
            capacity: 4,
        })
        .await?;
    let empty = manager
        .create_table(TableCreate {
            number: 2,
            salon_id: salon.id,
            capacity: 2,
        })
        .await?;
    manager
        .create_reservation(guest(table.id, hm(20, 0), 2, false))
        .await?;

    let snapshot = manager.refresh().await?;
    let json = serde_json::to_value(&snapshot)?;

    let tables = json["tables"].as_array().unwrap();
    assert_eq!(tables[0]["status"], "RESERVED_SOON");
    assert_eq!(tables[0]["upcoming"]["party_size"], 2);
    assert_eq!(tables[1]["status"], "EMPTY");
    // No upcoming entry for a table without bookings.
    assert!(tables[1].get("upcoming").is_none());
    assert_eq!(tables[1]["table_id"], empty.id);

    assert!(json["generated_at"].is_string());
    assert!(json["occupancy"]["venue_rate"].is_number());

    Ok(())
}

#[tokio::test]
async fn test_booking_rules_enforced_at_the_door() -> Result<()> {
    let (_, _, manager) = harness();

    let salon = manager
        .create_salon(SalonCreate {
            name: "Main Hall".to_string(),
            description: None,
        })
        .await?;
    let table = manager
        .create_table(TableCreate {
            number: 1,
            salon_id: salon.id,
            capacity: 4,
        })
        .await?;

    // No phone, no booking.
    let mut nameless = guest(table.id, hm(20, 0), 2, false);
    nameless.phone = "  ".to_string();
    let err = manager.create_reservation(nameless).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ReservationMissingField);

    // A party of five cannot take the four-top.
    let err = manager
        .create_reservation(guest(table.id, hm(20, 0), 5, false))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::PartyExceedsCapacity);

    // 12:00 goes in; 15:00 sits on the three-hour boundary and goes in
    // too; 14:00 is then inside both gaps and bounces.
    manager
        .create_reservation(guest(table.id, hm(12, 0), 2, false))
        .await?;
    manager
        .create_reservation(guest(table.id, hm(15, 0), 2, false))
        .await?;
    let err = manager
        .create_reservation(guest(table.id, hm(14, 0), 2, false))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::SpacingViolation);

    // Cancelling the three o'clock frees the hour again.
    let day = manager.reservations_on(opening().date()).await?;
    let three = day.iter().find(|r| r.time == hm(15, 0)).unwrap();
    manager.cancel_reservation(three.id).await?;
    manager
        .create_reservation(guest(table.id, hm(15, 30), 2, false))
        .await?;

    Ok(())
}
