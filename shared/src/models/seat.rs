//! Seat / Table Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Occupancy of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Empty,
    Eating,
}

impl SeatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Eating => "eating",
        }
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single table on the seat map
///
/// `x`/`y` are grid column/row positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatDetail {
    pub table_id: i64,
    pub label: String,
    pub x: u32,
    pub y: u32,
    pub status: SeatStatus,
}

/// Seat layout of a restaurant (GET /restaurants/{id}/table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantSeatsResponse {
    pub restaurant_id: i64,
    #[serde(default)]
    pub restaurant_name: String,
    #[serde(default)]
    pub seats: Vec<SeatDetail>,
}

/// Seat or clear a table (POST /restaurants/{id}/tables/{table_id})
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTableStatusRequest {
    pub action: SeatStatus,
    /// Ticket being seated; ignored when clearing a table
    #[serde(default)]
    pub queue_ticket_number: u32,
}

/// Result of a table status change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTableStatusResponse {
    pub table_id: i64,
    pub new_status: SeatStatus,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_number_defaults_to_zero() {
        let req: UpdateTableStatusRequest = serde_json::from_str(r#"{"action":"empty"}"#).unwrap();
        assert_eq!(req.action, SeatStatus::Empty);
        assert_eq!(req.queue_ticket_number, 0);
    }

    #[test]
    fn test_layout_without_seats_field() {
        let layout: RestaurantSeatsResponse =
            serde_json::from_str(r#"{"restaurant_id": 7}"#).unwrap();
        assert!(layout.seats.is_empty());
        assert!(layout.restaurant_name.is_empty());
    }
}
