//! Table Position Model

use serde::{Deserialize, Serialize};

/// Layout slot of a table on the floor plan. Purely presentational;
/// never consulted by status or conflict logic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TablePosition {
    pub table_id: i64,
    pub order_index: u32,
}
