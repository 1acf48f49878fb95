//! Restaurant Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Busyness colour shown on the restaurant marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestaurantStatus {
    Green,
    Yellow,
    Red,
}

impl RestaurantStatus {
    /// More than this many waiting parties turns a restaurant red
    pub const RED_THRESHOLD: u32 = 15;
    /// More than this many waiting parties turns a restaurant yellow
    pub const YELLOW_THRESHOLD: u32 = 10;

    /// Classify a restaurant by the number of parties waiting
    pub fn from_waiting(total_waiting: u32) -> Self {
        if total_waiting > Self::RED_THRESHOLD {
            Self::Red
        } else if total_waiting > Self::YELLOW_THRESHOLD {
            Self::Yellow
        } else {
            Self::Green
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for RestaurantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Restaurant list entry (GET /restaurants)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantItem {
    pub restaurant_id: i64,
    pub restaurant_name: String,
    pub lat: f64,
    pub lng: f64,
    pub image_url: String,
    /// Display price range, e.g. "150-300"
    pub average_price: String,
    pub specialties: String,
    pub status: RestaurantStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_thresholds() {
        assert_eq!(RestaurantStatus::from_waiting(0), RestaurantStatus::Green);
        assert_eq!(RestaurantStatus::from_waiting(10), RestaurantStatus::Green);
        assert_eq!(RestaurantStatus::from_waiting(11), RestaurantStatus::Yellow);
        assert_eq!(RestaurantStatus::from_waiting(15), RestaurantStatus::Yellow);
        assert_eq!(RestaurantStatus::from_waiting(16), RestaurantStatus::Red);
    }

    #[test]
    fn test_item_wire_format() {
        let json = r#"{
            "restaurant_id": 2,
            "restaurant_name": "Omurice House",
            "lat": 24.964267,
            "lng": 121.190726,
            "image_url": "https://example.com/rice.jpg",
            "average_price": "85-165",
            "specialties": "curry",
            "status": "yellow"
        }"#;
        let item: RestaurantItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.restaurant_id, 2);
        assert_eq!(item.status, RestaurantStatus::Yellow);
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!(serde_json::from_str::<RestaurantStatus>("\"blue\"").is_err());
    }
}
