//! Backend services
//!
//! Business rules of the queue backend, one service per resource. Each
//! service holds a [`Store`](crate::store::Store) handle and returns
//! [`AppResult`](shared::AppResult) so handlers can `?` straight into a
//! response.

mod queue;
mod restaurant;
mod table;

pub use queue::QueueService;
pub use restaurant::RestaurantService;
pub use table::TableService;
