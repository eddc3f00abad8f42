// Listing entities shown across the site and the dashboard
// Everything here is read-only once loaded; the dashboard is the only place that mutates a collection

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Common view of an entity for the search/filter engine
pub trait Listing {
    // Text fields matched by the free-text query (any field may match)
    fn search_fields(&self) -> Vec<&str>;

    // Value compared against the selected facet (category, condition, department, status)
    fn facet(&self) -> &str;

    // Price compared against the ceiling; None means the entity is never priced out
    fn price(&self) -> Option<u64> {
        None
    }
}

// Inventory car as served by the listings API
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Car {
    pub id: u32,
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub price_per_day: u64,
    #[serde(rename = "type")]
    pub car_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_available")]
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,
}

fn default_available() -> bool {
    true
}

impl Car {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

impl Listing for Car {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.brand.as_str(), self.model.as_str()]
    }

    fn facet(&self) -> &str {
        &self.car_type
    }

    fn price(&self) -> Option<u64> {
        Some(self.price_per_day)
    }
}

// Payload for adding a car from the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    pub year: u16,
    pub price_per_day: u64,
    #[serde(rename = "type")]
    pub car_type: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

// Car on the rent selection page
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RentalCar {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub car_type: String,
    pub price: u64,
    pub image: String,
    pub seats: u8,
    pub fuel: String,
    pub transmission: String,
    pub featured: bool,
}

impl Listing for RentalCar {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn facet(&self) -> &str {
        &self.car_type
    }

    fn price(&self) -> Option<u64> {
        Some(self.price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Condition {
    New,
    Used,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::Used => "Used",
        }
    }
}

// Car on the sale page
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SaleCar {
    pub id: u32,
    pub name: String,
    pub year: u16,
    pub price: u64,
    pub image: String,
    pub condition: Condition,
    pub mileage: String,
    pub transmission: String,
    pub featured: bool,
    #[serde(rename = "type")]
    pub car_type: String,
}

impl Listing for SaleCar {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    // The sale page facets on condition, not body type
    fn facet(&self) -> &str {
        self.condition.as_str()
    }

    fn price(&self) -> Option<u64> {
        Some(self.price)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Job {
    pub id: u32,
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub description: String,
}

impl Listing for Job {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.department.as_str()]
    }

    fn facet(&self) -> &str {
        &self.department
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Faq {
    pub category: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Review {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub rating: u8,
    pub text: String,
    pub image: String,
}

impl Listing for Review {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.text.as_str()]
    }

    fn facet(&self) -> &str {
        &self.role
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum BookingStatus {
    Pending,
    Approved,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pending,
        BookingStatus::Approved,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Approved => "Approved",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

// Booking row on the admin bookings dashboard
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DashboardBooking {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub car_name: String,
    pub dates: String,
    pub total: u64,
    pub status: BookingStatus,
}

impl Listing for DashboardBooking {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.customer_name.as_str(), self.car_name.as_str(), self.id.as_str()]
    }

    fn facet(&self) -> &str {
        self.status.as_str()
    }

    fn price(&self) -> Option<u64> {
        Some(self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub author: String,
    pub date: String,
    pub read_time: String,
    pub image: String,
    pub featured: bool,
}

impl Listing for BlogPost {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.excerpt.as_str()]
    }

    fn facet(&self) -> &str {
        &self.category
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum TransactionStatus {
    Completed,
    Processing,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Processing => "Processing",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Failed => "Failed",
        }
    }
}

// Sale or rental payment on the sales dashboard
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub vehicle: String,
    pub amount: u64,
    pub status: TransactionStatus,
    pub date: NaiveDate,
}

impl Listing for Transaction {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.customer_name.as_str(), self.vehicle.as_str()]
    }

    fn facet(&self) -> &str {
        self.status.as_str()
    }

    fn price(&self) -> Option<u64> {
        Some(self.amount)
    }
}
