//! Seat map and table check-in / check-out

use chrono::Utc;
use shared::models::{
    RestaurantSeatsResponse, SeatStatus, UpdateTableStatusRequest, UpdateTableStatusResponse,
};
use shared::{AppError, AppResult};

use crate::store::Store;

/// Ticket number sent when seating a party that never queued
const WALK_IN: u32 = 0;

#[derive(Debug, Clone)]
pub struct TableService {
    store: Store,
}

impl TableService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Seat layout of a restaurant, copied out of the store
    pub async fn seats(&self, restaurant_id: i64) -> AppResult<RestaurantSeatsResponse> {
        let data = self.store.read().await;
        let restaurant = data
            .restaurant(restaurant_id)
            .ok_or_else(AppError::restaurant_not_found)?;

        Ok(RestaurantSeatsResponse {
            restaurant_id,
            restaurant_name: restaurant.name.clone(),
            seats: data
                .tables_of(restaurant_id)
                .into_iter()
                .map(|t| t.to_seat())
                .collect(),
        })
    }

    /// Seat a party at a table, or clear the table
    ///
    /// Seating a ticket removes it from the queue and makes it the current
    /// number. Ticket 0 is a walk-in and leaves the queue alone, as does
    /// clearing.
    pub async fn update_status(
        &self,
        restaurant_id: i64,
        table_id: i64,
        request: UpdateTableStatusRequest,
    ) -> AppResult<UpdateTableStatusResponse> {
        let mut data = self.store.write().await;

        // A table of another restaurant is reported as missing
        let table = data
            .table(table_id)
            .filter(|t| t.restaurant_id == restaurant_id)
            .ok_or_else(AppError::table_not_found)?;

        if table.status == request.action {
            return Err(AppError::table_invalid_action(table.status));
        }

        if request.action == SeatStatus::Eating && request.queue_ticket_number != WALK_IN {
            let entry = data
                .ticket_entry(restaurant_id, request.queue_ticket_number)
                .copied()
                .ok_or_else(AppError::not_in_queue)?;

            data.remove_from_queue(restaurant_id, entry.user_id);
            data.runtime_mut(restaurant_id).current_number = entry.ticket_number;
        }

        data.set_table_status(table_id, request.action);

        tracing::info!(
            restaurant_id,
            table_id,
            status = %request.action,
            ticket = request.queue_ticket_number,
            "Table status updated"
        );

        Ok(UpdateTableStatusResponse {
            table_id,
            new_status: request.action,
            updated_at: Utc::now(),
        })
    }
}
