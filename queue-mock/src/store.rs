//! In-memory store
//!
//! Stands in for the backend database. All state lives behind one
//! `RwLock` so a service call sees a consistent snapshot of restaurants,
//! queue entries, runtime counters and tables.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use shared::models::{SeatDetail, SeatStatus};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::fixtures::Seed;

/// Restaurant row (restaurants 表)
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub image_url: String,
    /// (low, high) price per person
    pub price_range: (u32, u32),
    pub specialties: String,
}

impl Restaurant {
    /// Display form of the price range, e.g. "150-300"
    pub fn average_price(&self) -> String {
        format!("{}-{}", self.price_range.0, self.price_range.1)
    }
}

/// One waiting party (queue 表)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueEntry {
    pub queue_id: u64,
    pub restaurant_id: i64,
    pub user_id: i64,
    pub ticket_number: u32,
}

/// Inputs of the wait-time estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiningMetrics {
    /// Average minutes a party stays at a table
    pub avg_dining_minutes: u32,
    pub table_count: u32,
}

impl DiningMetrics {
    pub const fn new(avg_dining_minutes: u32, table_count: u32) -> Self {
        Self {
            avg_dining_minutes,
            table_count,
        }
    }

    /// Minutes until `parties` groups have been seated, rounded down
    pub fn estimate(&self, parties: u32) -> u32 {
        let tables = u64::from(self.table_count.max(1));
        let minutes = u64::from(parties) * u64::from(self.avg_dining_minutes) / tables;
        u32::try_from(minutes).unwrap_or(u32::MAX)
    }
}

impl Default for DiningMetrics {
    fn default() -> Self {
        Self::new(15, 4)
    }
}

/// Ticket counters of a restaurant (queue_runtime 表)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueRuntime {
    /// Ticket currently being called
    pub current_number: u32,
    /// Ticket handed to the next party that joins
    pub next_ticket: u32,
    pub metrics: DiningMetrics,
}

impl Default for QueueRuntime {
    fn default() -> Self {
        Self {
            current_number: 0,
            next_ticket: 1,
            metrics: DiningMetrics::default(),
        }
    }
}

/// Table row (seat 表)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub table_id: i64,
    pub restaurant_id: i64,
    pub label: String,
    pub x: u32,
    pub y: u32,
    pub status: SeatStatus,
}

impl Table {
    pub fn to_seat(&self) -> SeatDetail {
        SeatDetail {
            table_id: self.table_id,
            label: self.label.clone(),
            x: self.x,
            y: self.y,
            status: self.status,
        }
    }
}

/// Everything the backend knows
#[derive(Debug, Default)]
pub struct StoreData {
    restaurants: BTreeMap<i64, Restaurant>,
    runtimes: HashMap<i64, QueueRuntime>,
    queue: Vec<QueueEntry>,
    next_queue_id: u64,
    tables: BTreeMap<i64, Table>,
}

impl StoreData {
    pub fn from_seed(seed: Seed) -> Self {
        let mut data = Self {
            next_queue_id: 1,
            ..Default::default()
        };
        for restaurant in seed.restaurants {
            data.restaurants.insert(restaurant.id, restaurant);
        }
        data.runtimes.extend(seed.runtimes);
        for table in seed.tables {
            data.tables.insert(table.table_id, table);
        }
        for (restaurant_id, user_id, ticket_number) in seed.waiting {
            data.add_to_queue(restaurant_id, user_id, ticket_number);
            // Keep issued tickets unique
            let runtime = data.runtime_mut(restaurant_id);
            if runtime.next_ticket <= ticket_number {
                runtime.next_ticket = ticket_number + 1;
            }
        }
        data
    }

    // ========== Restaurants ==========

    pub fn restaurant(&self, restaurant_id: i64) -> Option<&Restaurant> {
        self.restaurants.get(&restaurant_id)
    }

    pub fn restaurant_exists(&self, restaurant_id: i64) -> bool {
        self.restaurants.contains_key(&restaurant_id)
    }

    pub fn restaurants(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants.values()
    }

    // ========== Runtime ==========

    /// Counters of a restaurant, defaults when never touched
    pub fn runtime(&self, restaurant_id: i64) -> QueueRuntime {
        self.runtimes
            .get(&restaurant_id)
            .copied()
            .unwrap_or_default()
    }

    pub fn runtime_mut(&mut self, restaurant_id: i64) -> &mut QueueRuntime {
        self.runtimes.entry(restaurant_id).or_default()
    }

    // ========== Queue ==========

    pub fn add_to_queue(&mut self, restaurant_id: i64, user_id: i64, ticket_number: u32) -> QueueEntry {
        let entry = QueueEntry {
            queue_id: self.next_queue_id,
            restaurant_id,
            user_id,
            ticket_number,
        };
        self.next_queue_id += 1;
        self.queue.push(entry);
        entry
    }

    /// Returns whether an entry was removed
    pub fn remove_from_queue(&mut self, restaurant_id: i64, user_id: i64) -> bool {
        let before = self.queue.len();
        self.queue
            .retain(|q| !(q.restaurant_id == restaurant_id && q.user_id == user_id));
        self.queue.len() < before
    }

    /// The queue a user is currently waiting in, if any
    pub fn user_entry(&self, user_id: i64) -> Option<&QueueEntry> {
        self.queue.iter().find(|q| q.user_id == user_id)
    }

    pub fn ticket_entry(&self, restaurant_id: i64, ticket_number: u32) -> Option<&QueueEntry> {
        self.queue
            .iter()
            .find(|q| q.restaurant_id == restaurant_id && q.ticket_number == ticket_number)
    }

    pub fn waiting_count(&self, restaurant_id: i64) -> u32 {
        let count = self
            .queue
            .iter()
            .filter(|q| q.restaurant_id == restaurant_id)
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Lowest waiting ticket
    pub fn next_to_call(&self, restaurant_id: i64) -> Option<u32> {
        self.queue
            .iter()
            .filter(|q| q.restaurant_id == restaurant_id)
            .map(|q| q.ticket_number)
            .min()
    }

    /// Parties holding a lower ticket in the same restaurant
    pub fn people_ahead(&self, entry: &QueueEntry) -> u32 {
        let count = self
            .queue
            .iter()
            .filter(|q| q.restaurant_id == entry.restaurant_id && q.ticket_number < entry.ticket_number)
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    // ========== Tables ==========

    pub fn table(&self, table_id: i64) -> Option<&Table> {
        self.tables.get(&table_id)
    }

    pub fn tables_of(&self, restaurant_id: i64) -> Vec<&Table> {
        self.tables
            .values()
            .filter(|t| t.restaurant_id == restaurant_id)
            .collect()
    }

    /// Returns whether the table exists
    pub fn set_table_status(&mut self, table_id: i64, status: SeatStatus) -> bool {
        match self.tables.get_mut(&table_id) {
            Some(table) => {
                table.status = status;
                true
            }
            None => false,
        }
    }
}

/// Shared handle to [`StoreData`]
#[derive(Debug, Clone)]
pub struct Store {
    inner: Arc<RwLock<StoreData>>,
}

impl Store {
    pub fn new(seed: Seed) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreData::from_seed(seed))),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, StoreData> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, StoreData> {
        self.inner.write().await
    }
}
