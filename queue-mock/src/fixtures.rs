//! Seed data
//!
//! [`Seed::demo`] is the canned data the dev server starts with. Tests build
//! their own seeds with the builder methods.

use shared::models::SeatStatus;

use crate::store::{DiningMetrics, QueueRuntime, Restaurant, Table};

/// Initial contents of the store
#[derive(Debug, Clone, Default)]
pub struct Seed {
    pub restaurants: Vec<Restaurant>,
    pub runtimes: Vec<(i64, QueueRuntime)>,
    pub tables: Vec<Table>,
    /// (restaurant_id, user_id, ticket_number)
    pub waiting: Vec<(i64, i64, u32)>,
}

impl Seed {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a restaurant with placeholder location and pricing
    pub fn restaurant(mut self, id: i64, name: impl Into<String>) -> Self {
        self.restaurants.push(Restaurant {
            id,
            name: name.into(),
            lat: 0.0,
            lng: 0.0,
            image_url: String::new(),
            price_range: (0, 0),
            specialties: String::new(),
        });
        self
    }

    pub fn with_restaurant(mut self, restaurant: Restaurant) -> Self {
        self.restaurants.push(restaurant);
        self
    }

    pub fn runtime(mut self, restaurant_id: i64, runtime: QueueRuntime) -> Self {
        self.runtimes.push((restaurant_id, runtime));
        self
    }

    pub fn table(
        mut self,
        restaurant_id: i64,
        table_id: i64,
        label: impl Into<String>,
        (x, y): (u32, u32),
        status: SeatStatus,
    ) -> Self {
        self.tables.push(Table {
            table_id,
            restaurant_id,
            label: label.into(),
            x,
            y,
            status,
        });
        self
    }

    /// Put `user_id` in line at `restaurant_id` holding `ticket_number`
    pub fn waiting(mut self, restaurant_id: i64, user_id: i64, ticket_number: u32) -> Self {
        self.waiting.push((restaurant_id, user_id, ticket_number));
        self
    }

    /// Three restaurants near the campus with their seat maps
    pub fn demo() -> Self {
        use SeatStatus::{Eating, Empty};

        let seed = Self::empty()
            .with_restaurant(Restaurant {
                id: 1,
                name: "麥克小姐".into(),
                lat: 24.963068,
                lng: 121.190522,
                image_url: "https://images.example.com/restaurants/1.jpg".into(),
                price_range: (150, 300),
                specialties: "義大利麵、漢堡".into(),
            })
            .with_restaurant(Restaurant {
                id: 2,
                name: "歐姆萊斯".into(),
                lat: 24.964267,
                lng: 121.190726,
                image_url: "https://images.example.com/restaurants/2.jpg".into(),
                price_range: (85, 165),
                specialties: "咖哩、豬排飯".into(),
            })
            .with_restaurant(Restaurant {
                id: 3,
                name: "香城燒臘".into(),
                lat: 24.964879,
                lng: 121.193531,
                image_url: "https://images.example.com/restaurants/3.jpg".into(),
                price_range: (80, 130),
                specialties: "蜜汁叉燒、燒肉、香腸".into(),
            })
            .runtime(
                1,
                QueueRuntime {
                    current_number: 0,
                    next_ticket: 1,
                    metrics: DiningMetrics::new(10, 5),
                },
            )
            .runtime(
                2,
                QueueRuntime {
                    current_number: 14,
                    next_ticket: 17,
                    metrics: DiningMetrics::new(8, 6),
                },
            )
            .runtime(
                3,
                QueueRuntime {
                    current_number: 5,
                    next_ticket: 8,
                    metrics: DiningMetrics::new(100, 12),
                },
            );

        // 餐廳 1
        let seed = seed
            .table(1, 1, "1 桌", (1, 1), Eating)
            .table(1, 2, "2 桌", (2, 1), Empty)
            .table(1, 3, "3 桌", (3, 1), Eating)
            .table(1, 4, "4 桌", (4, 1), Eating)
            .table(1, 5, "5 桌", (1, 2), Eating)
            .table(1, 6, "6 桌", (2, 2), Eating)
            .table(1, 7, "7 桌", (4, 2), Empty);

        // 餐廳 2 (single row of booths)
        let seed = seed
            .table(2, 201, "A1", (1, 1), Empty)
            .table(2, 202, "A2", (2, 1), Empty)
            .table(2, 203, "B1", (1, 2), Eating)
            .table(2, 204, "B2", (2, 2), Eating);

        // 餐廳 3
        [
            (301, (1, 1), Empty),
            (302, (3, 1), Eating),
            (303, (5, 1), Empty),
            (304, (7, 1), Eating),
            (305, (1, 3), Empty),
            (306, (3, 3), Empty),
            (307, (5, 3), Empty),
            (308, (7, 3), Empty),
            (309, (1, 5), Empty),
            (310, (3, 5), Eating),
            (311, (5, 6), Empty),
            (312, (7, 6), Empty),
        ]
        .into_iter()
        .fold(seed, |seed, (table_id, pos, status)| {
            seed.table(3, table_id, format!("{}桌", table_id - 300), pos, status)
        })
    }
}
