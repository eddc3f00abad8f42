// Listings API client
// Thin wrapper over the remote cars/jobs REST API; recovery from failures is the store's job

use crate::listing::{Car, Job, NewCar};
use crate::session::SessionContext;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Error, Debug, Clone)]
pub enum ApiError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    #[error("API error: {status_code} - {message}")]
    ApiResponseError { status_code: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Other error: {0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Initialization error: {0}")]
    InitError(String),
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: 10_000,
        }
    }
}

// Remote listings API
#[async_trait]
pub trait ListingApi: Send + Sync + 'static {
    // GET /cars
    async fn fetch_cars(&self) -> Result<Vec<Car>, ApiError>;

    // GET /cars/{id}
    async fn fetch_car(&self, id: u32) -> Result<Car, ApiError>;

    // GET /jobs
    async fn fetch_jobs(&self) -> Result<Vec<Job>, ApiError>;

    // POST /cars
    async fn create_car(&self, car: NewCar) -> Result<Car, ApiError>;

    // DELETE /cars/{id}
    async fn delete_car(&self, id: u32) -> Result<(), ApiError>;
}

pub struct HttpListingApi {
    client: Client,
    config: ClientConfig,
    session: SessionContext,
}

impl HttpListingApi {
    pub fn new(config: ClientConfig, session: SessionContext) -> Result<Self, ClientError> {
        if config.base_url.is_empty() {
            return Err(ClientError::ConfigError("base_url is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ClientError::InitError(e.to_string()))?;

        Ok(Self {
            client,
            config,
            session,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    // Attaches the bearer token when the session has one
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn map_send_error(&self, error: reqwest::Error) -> ApiError {
        if error.is_timeout() {
            ApiError::Timeout(self.config.timeout_ms)
        } else {
            ApiError::NetworkError(error.to_string())
        }
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> Result<reqwest::Response, ApiError> {
        debug!("Sending request to {}", path);

        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::ApiResponseError {
                status_code: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.client.get(self.url(path)), path).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::DecodeError(e.to_string()))
    }
}

#[async_trait]
impl ListingApi for HttpListingApi {
    async fn fetch_cars(&self) -> Result<Vec<Car>, ApiError> {
        self.get_json("/cars").await
    }

    async fn fetch_car(&self, id: u32) -> Result<Car, ApiError> {
        self.get_json(&format!("/cars/{}", id)).await
    }

    async fn fetch_jobs(&self) -> Result<Vec<Job>, ApiError> {
        self.get_json("/jobs").await
    }

    async fn create_car(&self, car: NewCar) -> Result<Car, ApiError> {
        let path = "/cars";
        let response = self
            .send(self.client.post(self.url(path)).json(&car), path)
            .await?;
        response
            .json::<Car>()
            .await
            .map_err(|e| ApiError::DecodeError(e.to_string()))
    }

    async fn delete_car(&self, id: u32) -> Result<(), ApiError> {
        let path = format!("/cars/{}", id);
        self.send(self.client.delete(self.url(&path)), &path).await?;
        Ok(())
    }
}

// In-memory API double for tests
#[cfg(test)]
pub mod mock_api {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use tokio::sync::Mutex;

    pub struct MockListingApi {
        cars: Mutex<Vec<Car>>,
        jobs: Mutex<Vec<Job>>,
        failing: AtomicBool,
        delay_ms: AtomicUsize,
        request_count: AtomicUsize,
        next_id: AtomicUsize,
    }

    impl MockListingApi {
        pub fn new(cars: Vec<Car>, jobs: Vec<Job>) -> Self {
            Self {
                cars: Mutex::new(cars),
                jobs: Mutex::new(jobs),
                failing: AtomicBool::new(false),
                delay_ms: AtomicUsize::new(0),
                request_count: AtomicUsize::new(0),
                next_id: AtomicUsize::new(1000),
            }
        }

        pub fn failing() -> Self {
            let api = Self::new(Vec::new(), Vec::new());
            api.set_failing(true);
            api
        }

        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        pub fn set_delay(&self, delay_ms: usize) {
            self.delay_ms.store(delay_ms, Ordering::SeqCst);
        }

        pub fn request_count(&self) -> usize {
            self.request_count.load(Ordering::SeqCst)
        }

        async fn enter(&self) -> Result<(), ApiError> {
            self.request_count.fetch_add(1, Ordering::SeqCst);

            let delay = self.delay_ms.load(Ordering::SeqCst);
            if delay > 0 {
                tokio::time::sleep(Duration::from_millis(delay as u64)).await;
            }

            if self.failing.load(Ordering::SeqCst) {
                return Err(ApiError::NetworkError("Service unavailable".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ListingApi for MockListingApi {
        async fn fetch_cars(&self) -> Result<Vec<Car>, ApiError> {
            self.enter().await?;
            Ok(self.cars.lock().await.clone())
        }

        async fn fetch_car(&self, id: u32) -> Result<Car, ApiError> {
            self.enter().await?;
            self.cars
                .lock()
                .await
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or_else(|| ApiError::NotFound(format!("/cars/{}", id)))
        }

        async fn fetch_jobs(&self) -> Result<Vec<Job>, ApiError> {
            self.enter().await?;
            Ok(self.jobs.lock().await.clone())
        }

        async fn create_car(&self, car: NewCar) -> Result<Car, ApiError> {
            self.enter().await?;
            let created = Car {
                id: self.next_id.fetch_add(1, Ordering::SeqCst) as u32,
                brand: car.brand,
                model: car.model,
                year: car.year,
                price_per_day: car.price_per_day,
                car_type: car.car_type,
                image_url: car.image_url,
                description: car.description,
                is_available: true,
                transmission: None,
            };
            self.cars.lock().await.push(created.clone());
            Ok(created)
        }

        async fn delete_car(&self, id: u32) -> Result<(), ApiError> {
            self.enter().await?;
            let mut cars = self.cars.lock().await;
            let before = cars.len();
            cars.retain(|c| c.id != id);
            if cars.len() == before {
                return Err(ApiError::NotFound(format!("/cars/{}", id)));
            }
            Ok(())
        }
    }
}
