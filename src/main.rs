use anyhow::Context;
use chrono::{Duration as DateDuration, Local};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use velocityx_rental::filter::facet_values;
use velocityx_rental::{
    fallback, filter_listing, AppConfig, BookingWizard, ContactDetails, Facet, FilterCriteria,
    HttpListingApi, InventoryDashboard, ListingStore, SalesDashboard, SessionContext,
    SimulatedSubmitter,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    info!("Using listings API at {}", config.client.base_url);

    let session = SessionContext::with_token(config.api_token.clone());
    let api = Arc::new(HttpListingApi::new(config.client.clone(), session)?);
    let store = ListingStore::new(api, config.cache_ttl());

    let (jobs, dashboard) = futures::join!(store.load_jobs(), async {
        let mut dashboard = InventoryDashboard::new();
        dashboard.load(&store).await;
        dashboard
    });

    println!("Open positions ({:?}):", jobs.source);
    for job in &jobs.items {
        println!("  {} - {} ({})", job.title, job.department, job.location);
    }

    let stats = dashboard.stats();
    println!(
        "\nFleet: {} cars, {} available, categories {:?}",
        stats.total, stats.available, stats.categories
    );

    let sales_summary = SalesDashboard::default().summary();
    println!(
        "Sales: ${} revenue over {} transactions ({} outstanding)",
        sales_summary.revenue, sales_summary.transaction_count, sales_summary.outstanding
    );

    if let Some(featured) = store.blog_posts().into_iter().find(|p| p.featured) {
        let related: Vec<String> = store.related_posts(featured.id).into_iter().map(|p| p.title).collect();
        println!("\nFeatured post: {} (related: {:?})", featured.title, related);
    }

    let rentals = fallback::rental_cars();
    println!("\nRental categories: {:?}", facet_values(&rentals));
    let criteria = FilterCriteria::new(
        "",
        Facet::from_label("Sports"),
        Some(fallback::RENTAL_PRICE_CEILING),
    );
    for car in filter_listing(&rentals, &criteria) {
        println!("  {} - ${}/day", car.name, car.price);
    }

    let sales = filter_listing(
        &fallback::sale_cars(),
        &FilterCriteria::with_ceiling(fallback::SALE_PRICE_CEILING),
    );
    println!("\nCars for sale under ${}: {}", fallback::SALE_PRICE_CEILING, sales.len());

    let mut wizard = BookingWizard::from_query(Some("alpine"));
    wizard.set_start_date((Local::now() + DateDuration::days(14)).date_naive())?;
    wizard.set_participants(2)?;
    wizard.continue_to_details()?;
    wizard.set_contact(ContactDetails::new("John", "Doe", "john@example.com"))?;

    let summary = wizard.summary();
    println!(
        "\n{}: ${} + ${} tax = ${}",
        wizard.package().name,
        summary.base(),
        summary.tax(),
        summary.total()
    );

    let submitter = SimulatedSubmitter::new(config.booking_delay());
    let confirmation = wizard.submit(&submitter).await?;
    println!("Booking confirmed: {}", confirmation.display_reference());

    Ok(())
}
