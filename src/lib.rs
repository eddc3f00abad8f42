// Core library for the VelocityX rental and sales site

pub mod api_client;
pub mod booking;
pub mod cache;
pub mod config;
pub mod dashboard;
pub mod fallback;
pub mod filter;
pub mod listing;
pub mod session;
pub mod store;

// Re-export key types for convenience
pub use api_client::{ApiError, ClientConfig, ClientError, HttpListingApi, ListingApi};
pub use booking::{
    BookingConfirmation, BookingError, BookingSubmitter, BookingWizard, ContactDetails, PackageId,
    PriceSummary, SimulatedSubmitter, WizardConfig, WizardState, PACKAGES,
};
pub use config::AppConfig;
pub use dashboard::{BookingsDashboard, FleetStats, InventoryDashboard, SalesDashboard, SalesSummary};
pub use filter::{filter_faqs, filter_listing, Facet, FilterCriteria};
pub use listing::{BlogPost, Car, Job, Listing, NewCar, RentalCar, SaleCar, Transaction};
pub use session::SessionContext;
pub use store::{Fetched, ListingStore, Source, StoreError, WithFallback};
