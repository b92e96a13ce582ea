//! Floor plan layout
//!
//! Presentation-only ordering of tables on the plan. Positions never
//! influence validation or status resolution; a table without a stored
//! position renders at its own number.

use std::collections::HashMap;

use shared::models::{Table, TablePosition};

/// Render positions for the floor plan, keyed by table id.
#[derive(Debug, Clone, Default)]
pub struct LayoutPositions {
    positions: HashMap<i64, u32>,
}

impl LayoutPositions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_positions(positions: impl IntoIterator<Item = TablePosition>) -> Self {
        Self {
            positions: positions
                .into_iter()
                .map(|p| (p.table_id, p.order_index))
                .collect(),
        }
    }

    /// Render index for a table; the table number when none is stored.
    pub fn order_index(&self, table: &Table) -> u32 {
        self.positions
            .get(&table.id)
            .copied()
            .unwrap_or(table.number)
    }

    /// Swap the render slots of two tables.
    ///
    /// Defaulted indexes are materialized first, so the swap sticks
    /// even when neither table was ever repositioned.
    pub fn swap(&mut self, a: &Table, b: &Table) {
        let index_a = self.order_index(a);
        let index_b = self.order_index(b);
        self.positions.insert(a.id, index_b);
        self.positions.insert(b.id, index_a);
    }

    /// Drop the stored position for a removed table.
    pub fn forget(&mut self, table_id: i64) {
        self.positions.remove(&table_id);
    }

    /// Tables in render order; ties fall back to the table number.
    pub fn ordered<'t>(&self, tables: &'t [Table]) -> Vec<&'t Table> {
        let mut ordered: Vec<&Table> = tables.iter().collect();
        ordered.sort_by_key(|t| (self.order_index(t), t.number));
        ordered
    }

    /// Stored positions in a stable order, fit for persistence.
    pub fn to_positions(&self) -> Vec<TablePosition> {
        let mut out: Vec<TablePosition> = self
            .positions
            .iter()
            .map(|(&table_id, &order_index)| TablePosition {
                table_id,
                order_index,
            })
            .collect();
        out.sort_by_key(|p| p.table_id);
        out
    }
}

/// Letter prefix for a salon by its position in the salon list.
///
/// Cosmetic only; wraps after Z.
pub fn salon_prefix(salon_index: usize) -> char {
    let offset = (salon_index % 26) as u8;
    (b'A' + offset) as char
}

/// Display label for a table on the plan, e.g. "B12".
pub fn display_label(salon_index: usize, table: &Table) -> String {
    format!("{}{}", salon_prefix(salon_index), table.number)
}
