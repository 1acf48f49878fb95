//! Queue Model

use serde::{Deserialize, Serialize};

/// Join a restaurant's queue (POST /restaurants/{id}/queue)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinQueueRequest {
    pub user_id: i64,
}

/// Leave a restaurant's queue (DELETE /restaurants/{id}/queue)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveQueueRequest {
    pub user_id: i64,
}

/// Ticket issued on joining a queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinQueueResponse {
    pub ticket_number: u32,
    pub people_ahead: u32,
    /// Minutes
    pub estimated_wait_time: u32,
}

/// Queue overview of a restaurant (GET /restaurants/{id}/queue/status)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStatusResponse {
    pub restaurant_id: i64,
    pub restaurant_name: String,
    /// Ticket currently being called
    pub current_number: u32,
    /// Parties waiting
    pub total_waiting: u32,
    /// Minutes
    pub avg_wait_time: u32,
}

/// A user's own place in line (GET /user/{id}/queue)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQueueStatusResponse {
    pub restaurant_id: i64,
    pub restaurant_name: String,
    pub ticket_number: u32,
    pub people_ahead: u32,
    /// Minutes
    pub estimated_wait_time: u32,
}

/// Next ticket to seat (GET /restaurants/{id}/queue/next)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueNextResponse {
    pub current_number: u32,
    /// Lowest waiting ticket, or `current_number` when nobody waits
    pub next_queue_to_call: u32,
    pub total_waiting: u32,
}
