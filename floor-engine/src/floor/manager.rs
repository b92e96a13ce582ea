//! Floor manager
//!
//! Owns the storage handle, the clock, and the layout overlay, and is
//! the only place floor state gets mutated. Resolution and validation
//! stay pure; every side effect funnels through here.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::RwLock;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::floor::{
    ExpireIntent, FloorSnapshot, OccupancyReport, StatusResolution, TableStatusView,
};
use shared::models::{
    CAPACITY_MAX, CAPACITY_MIN, Reservation, ReservationInput, ReservationStatus, Salon,
    SalonCreate, SalonUpdate, Table, TableCreate, TablePosition, TableStatus, TableUpdate,
};
use tokio::sync::Mutex;

use crate::core::{Clock, FloorPolicy};
use crate::floor::layout::LayoutPositions;
use crate::floor::occupancy::aggregate_occupancy;
use crate::floor::status::resolve_table;
use crate::reservations::validate_reservation;
use crate::store::FloorStore;

pub struct FloorManager {
    store: Arc<dyn FloorStore>,
    clock: Arc<dyn Clock>,
    policy: FloorPolicy,
    positions: RwLock<LayoutPositions>,
    // Serializes accept-and-persist so two clashing candidates cannot
    // both pass validation before either is stored.
    intake_lock: Mutex<()>,
}

impl FloorManager {
    pub fn new(store: Arc<dyn FloorStore>, clock: Arc<dyn Clock>, policy: FloorPolicy) -> Self {
        Self {
            store,
            clock,
            policy,
            positions: RwLock::new(LayoutPositions::new()),
            intake_lock: Mutex::new(()),
        }
    }

    /// Seed layout positions, typically loaded at startup.
    pub fn with_positions(self, positions: impl IntoIterator<Item = TablePosition>) -> Self {
        *self.positions.write() = LayoutPositions::from_positions(positions);
        self
    }

    pub fn policy(&self) -> &FloorPolicy {
        &self.policy
    }

    // ==================== Reservations ====================

    /// Validate a candidate booking and persist it on success.
    pub async fn create_reservation(&self, input: ReservationInput) -> AppResult<Reservation> {
        let _intake = self.intake_lock.lock().await;

        let table = self.table_by_id(input.table_id).await?;
        let reservations = self.store.load_reservations().await?;
        let now = self.clock.now();
        let accepted = validate_reservation(&input, &reservations, &table, now, &self.policy)?;

        let reservation = self.store.insert_reservation(accepted).await?;
        tracing::info!(
            reservation_id = reservation.id,
            table_id = reservation.table_id,
            scheduled_at = %reservation.scheduled_at(),
            "Reservation accepted"
        );
        Ok(reservation)
    }

    pub async fn cancel_reservation(&self, id: i64) -> AppResult<Reservation> {
        let reservation = self.reservation_by_id(id).await?;
        ensure_active(&reservation)?;
        self.store
            .update_reservation_status(id, ReservationStatus::Cancelled)
            .await?;
        tracing::info!(reservation_id = id, "Reservation cancelled");
        Ok(Reservation {
            status: ReservationStatus::Cancelled,
            ..reservation
        })
    }

    pub async fn complete_reservation(&self, id: i64) -> AppResult<Reservation> {
        let reservation = self.reservation_by_id(id).await?;
        ensure_active(&reservation)?;
        self.store
            .update_reservation_status(id, ReservationStatus::Completed)
            .await?;
        tracing::info!(reservation_id = id, "Reservation completed");
        Ok(Reservation {
            status: ReservationStatus::Completed,
            ..reservation
        })
    }

    /// Active bookings for one calendar day, time-ordered.
    pub async fn reservations_on(&self, date: NaiveDate) -> AppResult<Vec<Reservation>> {
        let mut day: Vec<Reservation> = self
            .store
            .load_reservations()
            .await?
            .into_iter()
            .filter(|r| r.is_active() && r.date == date)
            .collect();
        day.sort_by_key(|r| r.time);
        Ok(day)
    }

    // ==================== Tables ====================

    pub async fn tables(&self) -> AppResult<Vec<Table>> {
        Ok(self.store.load_tables().await?)
    }

    pub async fn create_table(&self, create: TableCreate) -> AppResult<Table> {
        validate_capacity(create.capacity)?;
        let salons = self.store.load_salons().await?;
        if !salons.iter().any(|s| s.id == create.salon_id) {
            return Err(
                AppError::new(ErrorCode::SalonNotFound).with_detail("salon_id", create.salon_id)
            );
        }
        let tables = self.store.load_tables().await?;
        if tables
            .iter()
            .any(|t| t.salon_id == create.salon_id && t.number == create.number)
        {
            return Err(
                AppError::new(ErrorCode::TableNumberExists).with_detail("number", create.number)
            );
        }

        let table = self.store.insert_table(create).await?;
        tracing::info!(table_id = table.id, number = table.number, "Table created");
        Ok(table)
    }

    pub async fn update_table(&self, id: i64, update: TableUpdate) -> AppResult<Table> {
        let table = self.table_by_id(id).await?;
        if let Some(capacity) = update.capacity {
            validate_capacity(capacity)?;
        }
        if let Some(number) = update.number {
            let tables = self.store.load_tables().await?;
            if tables
                .iter()
                .any(|t| t.id != id && t.salon_id == table.salon_id && t.number == number)
            {
                return Err(
                    AppError::new(ErrorCode::TableNumberExists).with_detail("number", number)
                );
            }
        }

        let updated = self.store.update_table(id, update).await?;
        tracing::info!(table_id = id, "Table updated");
        Ok(updated)
    }

    /// Staff override of the persisted status.
    pub async fn set_table_status(&self, id: i64, status: TableStatus) -> AppResult<()> {
        self.table_by_id(id).await?;
        self.store.persist_table_status(id, status).await?;
        tracing::info!(table_id = id, status = ?status, "Table status set");
        Ok(())
    }

    /// Remove a table. Refused while guests are seated or future
    /// active bookings point at it.
    pub async fn delete_table(&self, id: i64) -> AppResult<()> {
        let table = self.table_by_id(id).await?;
        if table.active_order_items > 0 || table.status == TableStatus::Occupied {
            return Err(AppError::new(ErrorCode::TableOccupied).with_detail("table_id", id));
        }
        let now = self.clock.now();
        let blocking = self
            .store
            .load_reservations()
            .await?
            .into_iter()
            .filter(|r| r.table_id == id && r.is_active() && r.scheduled_at() > now)
            .count();
        if blocking > 0 {
            return Err(AppError::new(ErrorCode::TableHasReservations)
                .with_detail("table_id", id)
                .with_detail("reservations", blocking));
        }

        self.store.delete_table(id).await?;
        self.positions.write().forget(id);
        tracing::info!(table_id = id, "Table deleted");
        Ok(())
    }

    // ==================== Salons ====================

    pub async fn salons(&self) -> AppResult<Vec<Salon>> {
        Ok(self.store.load_salons().await?)
    }

    pub async fn create_salon(&self, create: SalonCreate) -> AppResult<Salon> {
        let name = create.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::with_message(
                ErrorCode::RequiredField,
                "salon name must not be empty",
            ));
        }
        let salons = self.store.load_salons().await?;
        if salons.iter().any(|s| s.name == name) {
            return Err(AppError::new(ErrorCode::SalonNameExists).with_detail("name", name));
        }

        let salon = self
            .store
            .insert_salon(SalonCreate { name, ..create })
            .await?;
        tracing::info!(salon_id = salon.id, name = %salon.name, "Salon created");
        Ok(salon)
    }

    pub async fn update_salon(&self, id: i64, update: SalonUpdate) -> AppResult<Salon> {
        let mut update = update;
        let salons = self.store.load_salons().await?;
        if !salons.iter().any(|s| s.id == id) {
            return Err(AppError::new(ErrorCode::SalonNotFound).with_detail("salon_id", id));
        }
        if let Some(name) = update.name.take() {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AppError::with_message(
                    ErrorCode::RequiredField,
                    "salon name must not be empty",
                ));
            }
            if salons.iter().any(|s| s.id != id && s.name == name) {
                return Err(AppError::new(ErrorCode::SalonNameExists).with_detail("name", name));
            }
            update.name = Some(name);
        }

        let salon = self.store.update_salon(id, update).await?;
        tracing::info!(salon_id = id, "Salon updated");
        Ok(salon)
    }

    /// Remove a salon. Refused while any table still belongs to it.
    pub async fn delete_salon(&self, id: i64) -> AppResult<()> {
        let salons = self.store.load_salons().await?;
        if !salons.iter().any(|s| s.id == id) {
            return Err(AppError::new(ErrorCode::SalonNotFound).with_detail("salon_id", id));
        }
        let tables = self
            .store
            .load_tables()
            .await?
            .into_iter()
            .filter(|t| t.salon_id == id)
            .count();
        if tables > 0 {
            return Err(AppError::new(ErrorCode::SalonHasTables)
                .with_detail("salon_id", id)
                .with_detail("tables", tables));
        }

        self.store.delete_salon(id).await?;
        tracing::info!(salon_id = id, "Salon deleted");
        Ok(())
    }

    // ==================== Layout ====================

    /// Swap the render slots of two tables and return the stored layout.
    pub async fn reorder_tables(
        &self,
        table_id: i64,
        target_table_id: i64,
    ) -> AppResult<Vec<TablePosition>> {
        let tables = self.store.load_tables().await?;
        let a = find_table(&tables, table_id)?;
        let b = find_table(&tables, target_table_id)?;

        let mut positions = self.positions.write();
        positions.swap(a, b);
        tracing::info!(table_id, target_table_id, "Tables swapped on the plan");
        Ok(positions.to_positions())
    }

    // ==================== Floor State ====================

    /// Recompute the whole floor: apply expiries, aggregate occupancy,
    /// and return the snapshot in render order.
    pub async fn refresh(&self) -> AppResult<FloorSnapshot> {
        let now = self.clock.now();
        let tables = self.store.load_tables().await?;
        let reservations = self.store.load_reservations().await?;

        let mut resolutions: HashMap<i64, StatusResolution> =
            HashMap::with_capacity(tables.len());
        for table in &tables {
            let resolution = resolve_table(table, &reservations, now, &self.policy);
            if let Some(intent) = &resolution.expire {
                self.apply_expiry(intent).await?;
            }
            resolutions.insert(table.id, resolution);
        }

        // The lapsed bookings just completed resolve as expired from
        // this list too, so no reload is needed for the aggregate.
        let occupancy = aggregate_occupancy(&tables, &reservations, now, &self.policy);

        let positions = self.positions.read();
        let views: Vec<TableStatusView> = positions
            .ordered(&tables)
            .into_iter()
            .map(|table| {
                let resolution = &resolutions[&table.id];
                TableStatusView {
                    table_id: table.id,
                    salon_id: table.salon_id,
                    number: table.number,
                    capacity: table.capacity,
                    status: resolution.status,
                    upcoming: resolution.upcoming,
                    order_index: positions.order_index(table),
                }
            })
            .collect();

        Ok(FloorSnapshot {
            generated_at: now,
            tables: views,
            occupancy,
        })
    }

    /// Resolve one table on demand.
    ///
    /// Expiry intents are returned, not applied; the periodic refresh
    /// applies them.
    pub async fn table_status(&self, table_id: i64) -> AppResult<StatusResolution> {
        let table = self.table_by_id(table_id).await?;
        let reservations = self.store.load_reservations().await?;
        Ok(resolve_table(
            &table,
            &reservations,
            self.clock.now(),
            &self.policy,
        ))
    }

    pub async fn occupancy(&self) -> AppResult<OccupancyReport> {
        let tables = self.store.load_tables().await?;
        let reservations = self.store.load_reservations().await?;
        Ok(aggregate_occupancy(
            &tables,
            &reservations,
            self.clock.now(),
            &self.policy,
        ))
    }

    // ==================== Internal ====================

    async fn apply_expiry(&self, intent: &ExpireIntent) -> AppResult<()> {
        for &reservation_id in &intent.reservation_ids {
            self.store
                .update_reservation_status(reservation_id, ReservationStatus::Completed)
                .await?;
            tracing::info!(
                reservation_id,
                table_id = intent.table_id,
                "Reservation lapsed"
            );
        }
        self.store
            .persist_table_status(intent.table_id, TableStatus::Available)
            .await?;
        Ok(())
    }

    async fn table_by_id(&self, id: i64) -> AppResult<Table> {
        let tables = self.store.load_tables().await?;
        tables
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::new(ErrorCode::TableNotFound).with_detail("table_id", id))
    }

    async fn reservation_by_id(&self, id: i64) -> AppResult<Reservation> {
        let reservations = self.store.load_reservations().await?;
        reservations.into_iter().find(|r| r.id == id).ok_or_else(|| {
            AppError::new(ErrorCode::ReservationNotFound).with_detail("reservation_id", id)
        })
    }
}

fn find_table(tables: &[Table], id: i64) -> AppResult<&Table> {
    tables
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| AppError::new(ErrorCode::TableNotFound).with_detail("table_id", id))
}

fn ensure_active(reservation: &Reservation) -> AppResult<()> {
    match reservation.status {
        ReservationStatus::Active => Ok(()),
        ReservationStatus::Cancelled => {
            Err(AppError::new(ErrorCode::ReservationAlreadyCancelled)
                .with_detail("reservation_id", reservation.id))
        }
        ReservationStatus::Completed => {
            Err(AppError::new(ErrorCode::ReservationAlreadyCompleted)
                .with_detail("reservation_id", reservation.id))
        }
    }
}

fn validate_capacity(capacity: i32) -> AppResult<()> {
    if !(CAPACITY_MIN..=CAPACITY_MAX).contains(&capacity) {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("capacity must be between {CAPACITY_MIN} and {CAPACITY_MAX}, got {capacity}"),
        ));
    }
    Ok(())
}
