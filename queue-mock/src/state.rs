use std::sync::Arc;

use crate::config::Config;
use crate::fixtures::Seed;
use crate::services::{QueueService, RestaurantService, TableService};
use crate::store::Store;

/// Shared handler state
///
/// The services share one [`Store`], so a seat update is visible to the
/// next queue query.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub restaurants: RestaurantService,
    pub queue: QueueService,
    pub tables: TableService,
}

impl AppState {
    pub fn new(config: Config, seed: Seed) -> SharedState {
        let store = Store::new(seed);
        Arc::new(Self {
            config,
            restaurants: RestaurantService::new(store.clone()),
            queue: QueueService::new(store.clone()),
            tables: TableService::new(store),
        })
    }
}

/// State type carried by the router
pub type SharedState = Arc<AppState>;
