// Admin dashboard views: fleet inventory and incoming bookings
use crate::api_client::ApiError;
use crate::fallback;
use crate::filter::{facet_values, filter_listing, Facet, FilterCriteria};
use crate::listing::{BookingStatus, Car, DashboardBooking, NewCar, Transaction, TransactionStatus};
use crate::store::{ListingStore, Source};
use std::collections::HashMap;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetStats {
    pub total: usize,
    pub available: usize,
    pub categories: Vec<String>,
}

#[derive(Debug, Default)]
pub struct InventoryDashboard {
    cars: Vec<Car>,
    source: Option<Source>,
}

impl InventoryDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, store: &ListingStore) {
        let fetched = store.load_cars().await;
        info!("Loaded {} cars ({:?})", fetched.items.len(), fetched.source);
        self.cars = fetched.items;
        self.source = Some(fetched.source);
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn source(&self) -> Option<Source> {
        self.source
    }

    pub fn visible(&self, query: &str, facet: &Facet) -> Vec<Car> {
        filter_listing(&self.cars, &FilterCriteria::new(query, facet.clone(), None))
    }

    pub fn stats(&self) -> FleetStats {
        let mut categories = facet_values(&self.cars);
        categories.remove(0);

        FleetStats {
            total: self.cars.len(),
            available: self.cars.iter().filter(|c| c.is_available).count(),
            categories,
        }
    }

    // Removes a car once the API confirms the delete.
    //
    // On failure the local collection is left untouched. Returns the
    // removed car, or `None` when it was not in the local collection.
    pub async fn remove(&mut self, store: &ListingStore, id: u32) -> Result<Option<Car>, ApiError> {
        if let Err(e) = store.api().delete_car(id).await {
            warn!("Delete of car {} rejected: {}", id, e);
            return Err(e);
        }
        store.invalidate_cars();

        let removed = self
            .cars
            .iter()
            .position(|c| c.id == id)
            .map(|index| self.cars.remove(index));
        info!("Removed car {} from the fleet", id);
        Ok(removed)
    }

    pub async fn add_car(&mut self, store: &ListingStore, car: NewCar) -> Result<Car, ApiError> {
        let created = store.api().create_car(car).await?;
        store.invalidate_cars();

        info!("Added {} to the fleet", created.display_name());
        self.cars.push(created.clone());
        Ok(created)
    }
}

#[derive(Debug)]
pub struct BookingsDashboard {
    bookings: Vec<DashboardBooking>,
}

impl Default for BookingsDashboard {
    fn default() -> Self {
        Self::new(fallback::dashboard_bookings())
    }
}

impl BookingsDashboard {
    pub fn new(bookings: Vec<DashboardBooking>) -> Self {
        Self { bookings }
    }

    pub fn by_status(&self, status: &Facet) -> Vec<DashboardBooking> {
        filter_listing(&self.bookings, &FilterCriteria::new("", status.clone(), None))
    }

    pub fn status_counts(&self) -> HashMap<BookingStatus, usize> {
        let mut counts: HashMap<BookingStatus, usize> =
            BookingStatus::ALL.iter().map(|s| (*s, 0)).collect();
        for booking in &self.bookings {
            *counts.entry(booking.status).or_insert(0) += 1;
        }
        counts
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesSummary {
    // Completed transactions only
    pub revenue: u64,
    pub transaction_count: usize,
    pub completed: usize,
    pub outstanding: usize,
    pub failed: usize,
}

#[derive(Debug)]
pub struct SalesDashboard {
    transactions: Vec<Transaction>,
}

impl Default for SalesDashboard {
    fn default() -> Self {
        Self::new(fallback::transactions())
    }
}

impl SalesDashboard {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    // Search by id, customer or vehicle within a status
    pub fn visible(&self, query: &str, status: &Facet) -> Vec<Transaction> {
        filter_listing(&self.transactions, &FilterCriteria::new(query, status.clone(), None))
    }

    pub fn summary(&self) -> SalesSummary {
        let count = |status: TransactionStatus| {
            self.transactions.iter().filter(|t| t.status == status).count()
        };

        SalesSummary {
            revenue: self
                .transactions
                .iter()
                .filter(|t| t.status == TransactionStatus::Completed)
                .map(|t| t.amount)
                .sum(),
            transaction_count: self.transactions.len(),
            completed: count(TransactionStatus::Completed),
            outstanding: count(TransactionStatus::Processing) + count(TransactionStatus::Pending),
            failed: count(TransactionStatus::Failed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::mock_api::MockListingApi;
    use std::sync::Arc;
    use std::time::Duration;

    async fn loaded(api: Arc<MockListingApi>) -> (InventoryDashboard, ListingStore) {
        let store = ListingStore::new(api, Duration::from_secs(60));
        let mut dashboard = InventoryDashboard::new();
        dashboard.load(&store).await;
        (dashboard, store)
    }

    fn new_car() -> NewCar {
        NewCar {
            brand: "Rolls-Royce".to_string(),
            model: "Cullinan".to_string(),
            year: 2024,
            price_per_day: 1500,
            car_type: "Luxury".to_string(),
            description: Some("Chauffeur optional.".to_string()),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_remove_after_acknowledgement() {
        let api = Arc::new(MockListingApi::new(fallback::inventory_cars(), Vec::new()));
        let (mut dashboard, store) = loaded(Arc::clone(&api)).await;
        assert_eq!(dashboard.source(), Some(Source::Remote));

        let removed = dashboard.remove(&store, 104).await.unwrap();
        assert_eq!(removed.unwrap().model, "911 GT3");
        assert_eq!(dashboard.cars().len(), 11);

        // The backing store agrees
        let reloaded = store.load_cars().await;
        assert_eq!(reloaded.source, Source::Remote);
        assert!(reloaded.items.iter().all(|c| c.id != 104));
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_car() {
        let api = Arc::new(MockListingApi::failing());
        let (mut dashboard, store) = loaded(Arc::clone(&api)).await;
        assert_eq!(dashboard.source(), Some(Source::Fallback));

        let result = dashboard.remove(&store, 101).await;
        assert!(result.is_err());
        assert_eq!(dashboard.cars().len(), 12);
    }

    #[tokio::test]
    async fn test_add_car_appends() {
        let api = Arc::new(MockListingApi::new(Vec::new(), Vec::new()));
        let (mut dashboard, store) = loaded(Arc::clone(&api)).await;

        let created = dashboard.add_car(&store, new_car()).await.unwrap();
        assert_eq!(created.display_name(), "Rolls-Royce Cullinan");
        assert_eq!(dashboard.cars().len(), 1);
        assert_eq!(dashboard.stats().categories, vec!["Luxury"]);
    }

    #[tokio::test]
    async fn test_fleet_stats() {
        let mut cars = fallback::inventory_cars();
        cars[0].is_available = false;
        let api = Arc::new(MockListingApi::new(cars, Vec::new()));
        let (dashboard, _store) = loaded(api).await;

        let stats = dashboard.stats();
        assert_eq!(stats.total, 12);
        assert_eq!(stats.available, 11);
        assert_eq!(stats.categories, vec!["Sports", "Supercar", "Electric", "Wagon", "SUV"]);
    }

    #[tokio::test]
    async fn test_visible_filters_by_type() {
        let api = Arc::new(MockListingApi::failing());
        let (dashboard, _store) = loaded(api).await;

        let supercars = dashboard.visible("", &Facet::from_label("Supercar"));
        assert_eq!(supercars.len(), 4);

        let mclaren = dashboard.visible("720", &Facet::from_label("Supercar"));
        assert_eq!(mclaren.len(), 1);
    }

    #[test]
    fn test_sales_summary_counts_completed_revenue() {
        let summary = SalesDashboard::default().summary();
        assert_eq!(
            summary,
            SalesSummary {
                revenue: 4_700,
                transaction_count: 5,
                completed: 2,
                outstanding: 2,
                failed: 1,
            }
        );
    }

    #[test]
    fn test_sales_status_facet_and_search() {
        let dashboard = SalesDashboard::default();

        let completed = dashboard.visible("", &Facet::from_label("Completed"));
        let ids: Vec<&str> = completed.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["TRX-9821", "TRX-9823"]);

        let by_id = dashboard.visible("trx-9824", &Facet::All);
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].customer_name, "William Kim");

        let tesla = dashboard.visible("tesla", &Facet::from_label("Completed"));
        assert!(tesla.is_empty());
    }

    #[test]
    fn test_empty_sales_dashboard() {
        let summary = SalesDashboard::new(Vec::new()).summary();
        assert_eq!(summary.revenue, 0);
        assert_eq!(summary.transaction_count, 0);
    }

    #[test]
    fn test_bookings_by_status() {
        let dashboard = BookingsDashboard::default();

        assert_eq!(dashboard.by_status(&Facet::All).len(), 4);

        let pending = dashboard.by_status(&Facet::from_label("Pending"));
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "BK-782");

        let counts = dashboard.status_counts();
        assert_eq!(counts[&BookingStatus::Cancelled], 1);
        assert_eq!(counts.values().sum::<usize>(), 4);
    }
}
