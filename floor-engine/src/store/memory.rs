//! In-memory storage backend

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::{
    AcceptedReservation, Reservation, ReservationStatus, Salon, SalonCreate, SalonUpdate, Table,
    TableCreate, TableStatus, TableUpdate,
};

use super::{FloorStore, StoreError, StoreResult};

/// Hash-map backed store for tests and single-process runs.
///
/// One id counter covers every entity, so ids are unique across kinds.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    tables: HashMap<i64, Table>,
    salons: HashMap<i64, Salon>,
    reservations: HashMap<i64, Reservation>,
    last_id: i64,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the live order item count for a table, the way the ordering
    /// system would.
    pub fn set_active_order_items(&self, table_id: i64, count: i32) -> StoreResult<()> {
        let mut inner = self.inner.write();
        let table = inner
            .tables
            .get_mut(&table_id)
            .ok_or(StoreError::NotFound("Table"))?;
        table.active_order_items = count;
        Ok(())
    }
}

#[async_trait]
impl FloorStore for MemoryStore {
    async fn load_tables(&self) -> StoreResult<Vec<Table>> {
        let inner = self.inner.read();
        let mut tables: Vec<Table> = inner.tables.values().cloned().collect();
        tables.sort_by_key(|t| t.id);
        Ok(tables)
    }

    async fn load_salons(&self) -> StoreResult<Vec<Salon>> {
        let inner = self.inner.read();
        let mut salons: Vec<Salon> = inner.salons.values().cloned().collect();
        salons.sort_by_key(|s| s.id);
        Ok(salons)
    }

    async fn load_reservations(&self) -> StoreResult<Vec<Reservation>> {
        let inner = self.inner.read();
        let mut reservations: Vec<Reservation> = inner.reservations.values().cloned().collect();
        reservations.sort_by_key(|r| r.id);
        Ok(reservations)
    }

    async fn insert_table(&self, create: TableCreate) -> StoreResult<Table> {
        let mut inner = self.inner.write();
        let id = inner.next_id();
        let table = Table {
            id,
            number: create.number,
            salon_id: create.salon_id,
            capacity: create.capacity,
            status: TableStatus::Available,
            active_order_items: 0,
        };
        inner.tables.insert(id, table.clone());
        Ok(table)
    }

    async fn update_table(&self, id: i64, update: TableUpdate) -> StoreResult<Table> {
        let mut inner = self.inner.write();
        let table = inner
            .tables
            .get_mut(&id)
            .ok_or(StoreError::NotFound("Table"))?;
        if let Some(number) = update.number {
            table.number = number;
        }
        if let Some(capacity) = update.capacity {
            table.capacity = capacity;
        }
        if let Some(status) = update.status {
            table.status = status;
        }
        Ok(table.clone())
    }

    async fn delete_table(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write();
        inner
            .tables
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound("Table"))
    }

    async fn persist_table_status(&self, id: i64, status: TableStatus) -> StoreResult<()> {
        let mut inner = self.inner.write();
        let table = inner
            .tables
            .get_mut(&id)
            .ok_or(StoreError::NotFound("Table"))?;
        table.status = status;
        Ok(())
    }

    async fn insert_salon(&self, create: SalonCreate) -> StoreResult<Salon> {
        let mut inner = self.inner.write();
        let id = inner.next_id();
        let salon = Salon {
            id,
            name: create.name,
            description: create.description,
        };
        inner.salons.insert(id, salon.clone());
        Ok(salon)
    }

    async fn update_salon(&self, id: i64, update: SalonUpdate) -> StoreResult<Salon> {
        let mut inner = self.inner.write();
        let salon = inner
            .salons
            .get_mut(&id)
            .ok_or(StoreError::NotFound("Salon"))?;
        if let Some(name) = update.name {
            salon.name = name;
        }
        if let Some(description) = update.description {
            salon.description = Some(description);
        }
        Ok(salon.clone())
    }

    async fn delete_salon(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write();
        inner
            .salons
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound("Salon"))
    }

    async fn insert_reservation(&self, accepted: AcceptedReservation) -> StoreResult<Reservation> {
        let mut inner = self.inner.write();
        let id = inner.next_id();
        let reservation = Reservation {
            id,
            table_id: accepted.table_id,
            first_name: accepted.first_name,
            last_name: accepted.last_name,
            phone: accepted.phone,
            email: accepted.email,
            note: accepted.note,
            date: accepted.date,
            time: accepted.time,
            party_size: accepted.party_size,
            is_special: accepted.is_special,
            status: ReservationStatus::Active,
        };
        inner.reservations.insert(id, reservation.clone());
        Ok(reservation)
    }

    async fn update_reservation_status(
        &self,
        id: i64,
        status: ReservationStatus,
    ) -> StoreResult<()> {
        let mut inner = self.inner.write();
        let reservation = inner
            .reservations
            .get_mut(&id)
            .ok_or(StoreError::NotFound("Reservation"))?;
        reservation.status = status;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn accepted(table_id: i64) -> AcceptedReservation {
        AcceptedReservation {
            table_id,
            first_name: "Ana".to_string(),
            last_name: "Moreno".to_string(),
            phone: "600111222".to_string(),
            email: None,
            note: None,
            date: NaiveDate::from_ymd_opt(2024, 6, 16).unwrap(),
            time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            party_size: 2,
            is_special: false,
        }
    }

    #[tokio::test]
    async fn test_ids_are_unique_across_kinds() {
        let store = MemoryStore::new();
        let salon = store
            .insert_salon(SalonCreate {
                name: "Main".to_string(),
                description: None,
            })
            .await
            .unwrap();
        let table = store
            .insert_table(TableCreate {
                number: 1,
                salon_id: salon.id,
                capacity: 4,
            })
            .await
            .unwrap();
        let reservation = store.insert_reservation(accepted(table.id)).await.unwrap();

        assert_ne!(salon.id, table.id);
        assert_ne!(table.id, reservation.id);
    }

    #[tokio::test]
    async fn test_insert_and_load_tables() {
        let store = MemoryStore::new();
        for number in 1..=3u32 {
            store
                .insert_table(TableCreate {
                    number,
                    salon_id: 1,
                    capacity: 4,
                })
                .await
                .unwrap();
        }

        let tables = store.load_tables().await.unwrap();
        assert_eq!(tables.len(), 3);
        assert!(tables.windows(2).all(|w| w[0].id < w[1].id));
        assert!(tables.iter().all(|t| t.status == TableStatus::Available));
    }

    #[tokio::test]
    async fn test_partial_table_update() {
        let store = MemoryStore::new();
        let table = store
            .insert_table(TableCreate {
                number: 1,
                salon_id: 1,
                capacity: 4,
            })
            .await
            .unwrap();

        let updated = store
            .update_table(
                table.id,
                TableUpdate {
                    number: None,
                    capacity: Some(6),
                    status: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.number, 1);
        assert_eq!(updated.capacity, 6);
        assert_eq!(updated.status, TableStatus::Available);
    }

    #[tokio::test]
    async fn test_missing_rows_report_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.delete_table(42).await,
            Err(StoreError::NotFound("Table"))
        ));
        assert!(matches!(
            store
                .update_reservation_status(42, ReservationStatus::Cancelled)
                .await,
            Err(StoreError::NotFound("Reservation"))
        ));
    }

    #[tokio::test]
    async fn test_reservation_starts_active() {
        let store = MemoryStore::new();
        let reservation = store.insert_reservation(accepted(1)).await.unwrap();
        assert_eq!(reservation.status, ReservationStatus::Active);

        store
            .update_reservation_status(reservation.id, ReservationStatus::Completed)
            .await
            .unwrap();
        let reservations = store.load_reservations().await.unwrap();
        assert_eq!(reservations[0].status, ReservationStatus::Completed);
    }

    #[tokio::test]
    async fn test_order_item_feed() {
        let store = MemoryStore::new();
        let table = store
            .insert_table(TableCreate {
                number: 1,
                salon_id: 1,
                capacity: 4,
            })
            .await
            .unwrap();

        store.set_active_order_items(table.id, 5).unwrap();
        let tables = store.load_tables().await.unwrap();
        assert_eq!(tables[0].active_order_items, 5);
    }
}
