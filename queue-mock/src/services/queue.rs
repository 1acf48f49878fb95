//! Virtual queue: join, leave and status queries

use shared::models::{JoinQueueResponse, QueueNextResponse, QueueStatusResponse, UserQueueStatusResponse};
use shared::{AppError, AppResult};

use crate::store::Store;

#[derive(Debug, Clone)]
pub struct QueueService {
    store: Store,
}

impl QueueService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Take the next ticket at `restaurant_id`
    ///
    /// A user holds at most one ticket across all restaurants.
    pub async fn join(&self, restaurant_id: i64, user_id: i64) -> AppResult<JoinQueueResponse> {
        let mut data = self.store.write().await;

        if data.user_entry(user_id).is_some() {
            return Err(AppError::already_joined());
        }
        if !data.restaurant_exists(restaurant_id) {
            return Err(AppError::restaurant_not_found());
        }

        let people_ahead = data.waiting_count(restaurant_id);
        let runtime = data.runtime_mut(restaurant_id);
        let ticket_number = runtime.next_ticket;
        runtime.next_ticket += 1;
        let metrics = runtime.metrics;
        data.add_to_queue(restaurant_id, user_id, ticket_number);

        tracing::info!(restaurant_id, user_id, ticket_number, people_ahead, "User joined queue");

        Ok(JoinQueueResponse {
            ticket_number,
            people_ahead,
            estimated_wait_time: metrics.estimate(people_ahead),
        })
    }

    /// Give up the ticket held at `restaurant_id`
    pub async fn leave(&self, restaurant_id: i64, user_id: i64) -> AppResult<()> {
        let mut data = self.store.write().await;

        let Some(entry) = data.user_entry(user_id).copied() else {
            return Err(AppError::not_in_queue());
        };
        if !data.restaurant_exists(restaurant_id) {
            return Err(AppError::restaurant_not_found());
        }
        if entry.restaurant_id != restaurant_id {
            return Err(AppError::with_message(
                shared::ErrorCode::NotInQueue,
                "User is not in this restaurant's queue.",
            ));
        }

        data.remove_from_queue(restaurant_id, user_id);
        tracing::info!(restaurant_id, user_id, ticket_number = entry.ticket_number, "User left queue");
        Ok(())
    }

    pub async fn status(&self, restaurant_id: i64) -> AppResult<QueueStatusResponse> {
        let data = self.store.read().await;
        let restaurant = data
            .restaurant(restaurant_id)
            .ok_or_else(AppError::restaurant_not_found)?;

        let runtime = data.runtime(restaurant_id);
        let total_waiting = data.waiting_count(restaurant_id);

        Ok(QueueStatusResponse {
            restaurant_id,
            restaurant_name: restaurant.name.clone(),
            current_number: runtime.current_number,
            total_waiting,
            avg_wait_time: runtime.metrics.estimate(total_waiting),
        })
    }

    /// Where `user_id` stands in line
    pub async fn user_status(&self, user_id: i64) -> AppResult<UserQueueStatusResponse> {
        let data = self.store.read().await;
        let entry = *data.user_entry(user_id).ok_or_else(AppError::not_in_queue)?;
        let restaurant = data
            .restaurant(entry.restaurant_id)
            .ok_or_else(AppError::restaurant_not_found)?;

        let people_ahead = data.people_ahead(&entry);
        let metrics = data.runtime(entry.restaurant_id).metrics;

        Ok(UserQueueStatusResponse {
            restaurant_id: entry.restaurant_id,
            restaurant_name: restaurant.name.clone(),
            ticket_number: entry.ticket_number,
            people_ahead,
            estimated_wait_time: metrics.estimate(people_ahead),
        })
    }

    /// Ticket staff should call next
    pub async fn next(&self, restaurant_id: i64) -> AppResult<QueueNextResponse> {
        let data = self.store.read().await;
        if !data.restaurant_exists(restaurant_id) {
            return Err(AppError::restaurant_not_found());
        }

        let current_number = data.runtime(restaurant_id).current_number;
        Ok(QueueNextResponse {
            current_number,
            next_queue_to_call: data.next_to_call(restaurant_id).unwrap_or(current_number),
            total_waiting: data.waiting_count(restaurant_id),
        })
    }
}
