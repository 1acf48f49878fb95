//! Restaurant list (map markers)

use shared::models::{RestaurantItem, RestaurantStatus};

use crate::store::Store;

#[derive(Debug, Clone)]
pub struct RestaurantService {
    store: Store,
}

impl RestaurantService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// All restaurants, coloured by how many parties are waiting
    pub async fn list(&self) -> Vec<RestaurantItem> {
        let data = self.store.read().await;
        data.restaurants()
            .map(|r| RestaurantItem {
                restaurant_id: r.id,
                restaurant_name: r.name.clone(),
                lat: r.lat,
                lng: r.lng,
                image_url: r.image_url.clone(),
                average_price: r.average_price(),
                specialties: r.specialties.clone(),
                status: RestaurantStatus::from_waiting(data.waiting_count(r.id)),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Seed;

    #[tokio::test]
    async fn test_list_colours_by_waiting() {
        let mut seed = Seed::empty().restaurant(1, "Quiet").restaurant(2, "Busy");
        for user in 0..19 {
            seed = seed.waiting(2, 100 + user, user as u32 + 1);
        }
        let service = RestaurantService::new(Store::new(seed));

        let items = service.list().await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].restaurant_name, "Quiet");
        assert_eq!(items[0].status, RestaurantStatus::Green);
        assert_eq!(items[1].status, RestaurantStatus::Red);
    }

    #[tokio::test]
    async fn test_list_formats_price_range() {
        let service = RestaurantService::new(Store::new(Seed::demo()));
        let items = service.list().await;
        assert_eq!(items[0].average_price, "150-300");
    }
}
