//! Salon Model

use serde::{Deserialize, Serialize};

/// Salon entity (dining room: main hall, terrace, private room, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Salon {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Create salon payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalonCreate {
    pub name: String,
    pub description: Option<String>,
}

/// Update salon payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalonUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}
