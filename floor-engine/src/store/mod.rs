//! Persistence boundary
//!
//! The engine talks to storage through [`FloorStore`]; the bundled
//! [`MemoryStore`] backs tests and single-process deployments.

pub mod memory;

use async_trait::async_trait;
use shared::error::AppError;
use shared::models::{
    AcceptedReservation, Reservation, ReservationStatus, Salon, SalonCreate, SalonUpdate, Table,
    TableCreate, TableStatus, TableUpdate,
};
use thiserror::Error;

pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(resource) => AppError::not_found(resource),
            StoreError::Conflict(message) => AppError::conflict(message),
            StoreError::Backend(message) => AppError::storage(message),
        }
    }
}

/// Storage operations the floor engine depends on.
///
/// Implementations must tolerate concurrent callers; the manager
/// serializes reservation intake itself.
#[async_trait]
pub trait FloorStore: Send + Sync {
    async fn load_tables(&self) -> StoreResult<Vec<Table>>;
    async fn load_salons(&self) -> StoreResult<Vec<Salon>>;
    async fn load_reservations(&self) -> StoreResult<Vec<Reservation>>;

    async fn insert_table(&self, create: TableCreate) -> StoreResult<Table>;
    async fn update_table(&self, id: i64, update: TableUpdate) -> StoreResult<Table>;
    async fn delete_table(&self, id: i64) -> StoreResult<()>;
    async fn persist_table_status(&self, id: i64, status: TableStatus) -> StoreResult<()>;

    async fn insert_salon(&self, create: SalonCreate) -> StoreResult<Salon>;
    async fn update_salon(&self, id: i64, update: SalonUpdate) -> StoreResult<Salon>;
    async fn delete_salon(&self, id: i64) -> StoreResult<()>;

    async fn insert_reservation(&self, accepted: AcceptedReservation) -> StoreResult<Reservation>;
    async fn update_reservation_status(
        &self,
        id: i64,
        status: ReservationStatus,
    ) -> StoreResult<()>;
}
