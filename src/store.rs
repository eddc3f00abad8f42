// Listing store: remote listings with silent fallback to the local collections
use crate::api_client::{ApiError, ListingApi};
use crate::cache::{CacheStatsReport, ResponseCache};
use crate::fallback;
use crate::listing::{BlogPost, Car, Job};
use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

const CARS_PATH: &str = "/cars";
const JOBS_PATH: &str = "/jobs";
pub const RELATED_POSTS_LIMIT: usize = 2;

#[derive(Error, Debug, PartialEq)]
pub enum StoreError {
    #[error("Car {0} not found")]
    NotFound(u32),

    #[error("Post {0} not found")]
    PostNotFound(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Remote,
    Cache,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub items: Vec<T>,
    pub source: Source,
}

impl<T> Fetched<T> {
    pub fn is_fallback(&self) -> bool {
        self.source == Source::Fallback
    }
}

// Turns a failed collection fetch into the fallback collection
pub trait WithFallback<T> {
    fn with_fallback<F>(self, fallback: F) -> Fetched<T>
    where
        F: FnOnce() -> Vec<T>;
}

impl<T> WithFallback<T> for Result<Vec<T>, ApiError> {
    fn with_fallback<F>(self, fallback: F) -> Fetched<T>
    where
        F: FnOnce() -> Vec<T>,
    {
        match self {
            Ok(items) => Fetched {
                items,
                source: Source::Remote,
            },
            Err(e) => {
                warn!("Listing fetch failed, using fallback data: {}", e);
                Fetched {
                    items: fallback(),
                    source: Source::Fallback,
                }
            }
        }
    }
}

impl<T> WithFallback<T> for Result<Fetched<T>, ApiError> {
    fn with_fallback<F>(self, fallback: F) -> Fetched<T>
    where
        F: FnOnce() -> Vec<T>,
    {
        match self {
            Ok(fetched) => fetched,
            Err(e) => Err::<Vec<T>, ApiError>(e).with_fallback(fallback),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

// Orders overlapping loads of the same view.
//
// Each load takes a ticket before it starts; only the most recent ticket
// may publish its result, so a slow response to an older request is
// dropped instead of overwriting newer data.
#[derive(Debug, Clone, Default)]
pub struct LoadSequence {
    latest: Arc<AtomicU64>,
}

impl LoadSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

// View state shared between overlapping loads
#[derive(Debug, Clone)]
pub struct SharedListing<T> {
    items: Arc<RwLock<Vec<T>>>,
    sequence: LoadSequence,
}

impl<T: Clone> Default for SharedListing<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> SharedListing<T> {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
            sequence: LoadSequence::new(),
        }
    }

    pub fn begin(&self) -> LoadTicket {
        self.sequence.begin()
    }

    // Returns false when the ticket was superseded and the items were discarded
    pub fn apply(&self, ticket: LoadTicket, items: Vec<T>) -> bool {
        if !self.sequence.is_current(ticket) {
            debug!("Discarding stale load result {:?}", ticket);
            return false;
        }
        *self.items.write() = items;
        true
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.items.read().clone()
    }
}

type SharedFetch<T> = Shared<BoxFuture<'static, Result<Vec<T>, ApiError>>>;

// Cached collection loads keyed by request path
// Overlapping loads of the same path await one shared request
struct PathLoader<T> {
    cache: ResponseCache<Vec<T>>,
    in_flight: Mutex<HashMap<String, SharedFetch<T>>>,
}

impl<T: Clone + Send + Sync + 'static> PathLoader<T> {
    fn new(ttl: Duration) -> Self {
        Self {
            cache: ResponseCache::new(ttl),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    async fn load<F>(&self, path: &str, start: F) -> Result<Fetched<T>, ApiError>
    where
        F: FnOnce() -> BoxFuture<'static, Result<Vec<T>, ApiError>>,
    {
        if let Some(items) = self.cache.get(path) {
            return Ok(Fetched {
                items,
                source: Source::Cache,
            });
        }

        let fetch = {
            let mut in_flight = self.in_flight.lock();
            match in_flight.get(path) {
                Some(pending) => {
                    debug!("Joining in-flight request for {}", path);
                    pending.clone()
                }
                None => {
                    let fetch = start().shared();
                    in_flight.insert(path.to_string(), fetch.clone());
                    fetch
                }
            }
        };

        let result = fetch.clone().await;
        if let Ok(items) = &result {
            self.cache.store(path, items.clone());
        }

        // Only the entry for this request; a newer one may already have replaced it
        let mut in_flight = self.in_flight.lock();
        if in_flight.get(path).map_or(false, |pending| pending.ptr_eq(&fetch)) {
            in_flight.remove(path);
        }

        result.map(|items| Fetched {
            items,
            source: Source::Remote,
        })
    }
}

pub struct ListingStore {
    api: Arc<dyn ListingApi>,
    cars: PathLoader<Car>,
    jobs: PathLoader<Job>,
}

impl ListingStore {
    pub fn new(api: Arc<dyn ListingApi>, cache_ttl: Duration) -> Self {
        Self {
            api,
            cars: PathLoader::new(cache_ttl),
            jobs: PathLoader::new(cache_ttl),
        }
    }

    pub fn api(&self) -> Arc<dyn ListingApi> {
        Arc::clone(&self.api)
    }

    // Inventory cars; the local dealer inventory when the API is unavailable
    pub async fn load_cars(&self) -> Fetched<Car> {
        let api = self.api();
        self.cars
            .load(CARS_PATH, move || async move { api.fetch_cars().await }.boxed())
            .await
            .with_fallback(fallback::inventory_cars)
    }

    pub async fn load_jobs(&self) -> Fetched<Job> {
        let api = self.api();
        self.jobs
            .load(JOBS_PATH, move || async move { api.fetch_jobs().await }.boxed())
            .await
            .with_fallback(fallback::jobs)
    }

    // Blog posts are local content with no remote source
    pub fn blog_posts(&self) -> Vec<BlogPost> {
        fallback::blog_posts()
    }

    pub fn blog_post(&self, id: u32) -> Result<BlogPost, StoreError> {
        fallback::blog_posts()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(StoreError::PostNotFound(id))
    }

    // The first posts other than the one being read, in listing order
    pub fn related_posts(&self, id: u32) -> Vec<BlogPost> {
        fallback::blog_posts()
            .into_iter()
            .filter(|p| p.id != id)
            .take(RELATED_POSTS_LIMIT)
            .collect()
    }

    // Loads into a shared view, publishing only if no newer load started meanwhile
    pub async fn refresh_cars(&self, view: &SharedListing<Car>) -> bool {
        let ticket = view.begin();
        let fetched = self.load_cars().await;
        view.apply(ticket, fetched.items)
    }

    // Detail lookup: local inventory first, then the API; no fallback collection exists here
    pub async fn car_detail(&self, id: u32) -> Result<Car, StoreError> {
        if let Some(car) = fallback::inventory_cars().into_iter().find(|c| c.id == id) {
            return Ok(car);
        }

        self.api.fetch_car(id).await.map_err(|e| {
            warn!("Failed to fetch car {}: {}", id, e);
            StoreError::NotFound(id)
        })
    }

    // Called after any write to /cars so the next load goes to the API
    pub fn invalidate_cars(&self) -> usize {
        self.cars.cache.invalidate(CARS_PATH)
    }

    pub fn cache_stats(&self) -> (CacheStatsReport, CacheStatsReport) {
        (self.cars.cache.stats(), self.jobs.cache.stats())
    }
}
