//! Restaurant queue operations
//!
//! One method per backend endpoint. Paths are relative to the configured
//! base URL:
//!
//! | Method | Path |
//! |--------|------|
//! | GET | restaurants |
//! | GET | restaurants/{id}/queue/status |
//! | GET | user/{id}/queue |
//! | POST | restaurants/{id}/queue |
//! | DELETE | restaurants/{id}/queue |
//! | GET | restaurants/{id}/table |
//! | GET | restaurants/{id}/queue/next |
//! | POST | restaurants/{id}/tables/{table_id} |

use async_trait::async_trait;
use shared::models::{
    JoinQueueRequest, JoinQueueResponse, LeaveQueueRequest, QueueNextResponse,
    QueueStatusResponse, RestaurantItem, RestaurantSeatsResponse, SeatDetail, SeatStatus,
    UpdateTableStatusRequest, UpdateTableStatusResponse, UserQueueStatusResponse,
};

use crate::client::{HttpClient, RestaurantClient};
use crate::ClientResult;

const JOIN_FAILED: &str = "Failed to join queue";
const LEAVE_FAILED: &str = "Failed to leave queue";

/// Restaurant queue backend
///
/// Object safe, so callers can hold an `Arc<dyn RestaurantApi>` and swap
/// transports at startup.
#[async_trait]
pub trait RestaurantApi: Send + Sync {
    /// All restaurants with their busyness colour
    async fn get_restaurants(&self) -> ClientResult<Vec<RestaurantItem>>;

    async fn get_queue_status(&self, restaurant_id: i64) -> ClientResult<QueueStatusResponse>;

    /// The ticket `user_id` currently holds
    ///
    /// Fails with `NOT_IN_QUEUE` when the user is not waiting anywhere.
    async fn get_user_queue_status(&self, user_id: i64) -> ClientResult<UserQueueStatusResponse>;

    /// Take a ticket
    ///
    /// The error message falls back to "Failed to join queue" when the
    /// backend sends none.
    async fn join_queue(&self, restaurant_id: i64, user_id: i64) -> ClientResult<JoinQueueResponse>;

    /// Give the ticket back
    ///
    /// Check [`ClientError::code`](crate::ClientError::code) for the reason,
    /// e.g. `NOT_IN_QUEUE`.
    async fn leave_queue(&self, restaurant_id: i64, user_id: i64) -> ClientResult<()>;

    /// Seat layout of a restaurant
    async fn get_seats(&self, restaurant_id: i64) -> ClientResult<Vec<SeatDetail>>;

    /// Ticket staff should call next
    async fn get_next_queue_info(&self, restaurant_id: i64) -> ClientResult<QueueNextResponse>;

    /// Seat `queue_ticket_number` at a table (`Eating`) or clear it (`Empty`)
    async fn update_table_status(
        &self,
        restaurant_id: i64,
        table_id: i64,
        action: SeatStatus,
        queue_ticket_number: u32,
    ) -> ClientResult<UpdateTableStatusResponse>;
}

#[async_trait]
impl<H: HttpClient> RestaurantApi for RestaurantClient<H> {
    async fn get_restaurants(&self) -> ClientResult<Vec<RestaurantItem>> {
        self.http().get("restaurants").await
    }

    async fn get_queue_status(&self, restaurant_id: i64) -> ClientResult<QueueStatusResponse> {
        self.http()
            .get(&format!("restaurants/{}/queue/status", restaurant_id))
            .await
    }

    async fn get_user_queue_status(&self, user_id: i64) -> ClientResult<UserQueueStatusResponse> {
        self.http().get(&format!("user/{}/queue", user_id)).await
    }

    async fn join_queue(&self, restaurant_id: i64, user_id: i64) -> ClientResult<JoinQueueResponse> {
        let request = JoinQueueRequest { user_id };
        self.http()
            .post(&format!("restaurants/{}/queue", restaurant_id), &request)
            .await
            .map_err(|e| {
                tracing::warn!(restaurant_id, user_id, error = %e, "Join queue failed");
                e.or_message(JOIN_FAILED)
            })
    }

    async fn leave_queue(&self, restaurant_id: i64, user_id: i64) -> ClientResult<()> {
        let request = LeaveQueueRequest { user_id };
        self.http()
            .delete_with_body(&format!("restaurants/{}/queue", restaurant_id), &request)
            .await
            .map_err(|e| {
                tracing::warn!(restaurant_id, user_id, error = %e, "Leave queue failed");
                e.or_message(LEAVE_FAILED)
            })
    }

    async fn get_seats(&self, restaurant_id: i64) -> ClientResult<Vec<SeatDetail>> {
        let layout: RestaurantSeatsResponse = self
            .http()
            .get(&format!("restaurants/{}/table", restaurant_id))
            .await?;
        Ok(layout.seats)
    }

    async fn get_next_queue_info(&self, restaurant_id: i64) -> ClientResult<QueueNextResponse> {
        self.http()
            .get(&format!("restaurants/{}/queue/next", restaurant_id))
            .await
    }

    async fn update_table_status(
        &self,
        restaurant_id: i64,
        table_id: i64,
        action: SeatStatus,
        queue_ticket_number: u32,
    ) -> ClientResult<UpdateTableStatusResponse> {
        let request = UpdateTableStatusRequest {
            action,
            queue_ticket_number,
        };
        self.http()
            .post(
                &format!("restaurants/{}/tables/{}", restaurant_id, table_id),
                &request,
            )
            .await
    }
}
