// Fixed local collections
// Used directly by pages that never hit the API, and as the substitute when a remote fetch fails

use crate::listing::{
    BlogPost, BookingStatus, Car, Condition, DashboardBooking, Faq, Job, RentalCar, Review,
    SaleCar, Transaction, TransactionStatus,
};
use chrono::NaiveDate;

// Page ceilings for the price slider
pub const RENTAL_PRICE_CEILING: u64 = 500;
pub const SALE_PRICE_CEILING: u64 = 300_000;

pub const FAQ_CATEGORIES: [&str; 4] = ["general", "account", "payments", "rentals"];

fn job(id: u32, title: &str, department: &str, location: &str, kind: &str, description: &str) -> Job {
    Job {
        id,
        title: title.to_string(),
        department: department.to_string(),
        location: location.to_string(),
        employment_type: kind.to_string(),
        description: description.to_string(),
    }
}

pub fn jobs() -> Vec<Job> {
    vec![
        job(
            1,
            "Senior Frontend Engineer",
            "Engineering",
            "Miami, FL",
            "Full-time",
            "Build the next generation of our vehicle rental platform using Next.js and WebGL.",
        ),
        job(
            2,
            "Fleet Operations Manager",
            "Operations",
            "Los Angeles, CA",
            "On-site",
            "Oversee our luxury fleet maintenance and logistics.",
        ),
        job(
            3,
            "UX/UI Designer",
            "Design",
            "Remote",
            "Contract",
            "Design premium user experiences for our high-end clientele.",
        ),
        job(
            4,
            "Customer Concierge",
            "Support",
            "New York, NY",
            "Full-time",
            "Provide 24/7 white-glove support to our VIP customers.",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn inventory_car(
    id: u32,
    brand: &str,
    model: &str,
    year: u16,
    price_per_day: u64,
    car_type: &str,
    image_url: &str,
    transmission: &str,
) -> Car {
    Car {
        id,
        brand: brand.to_string(),
        model: model.to_string(),
        year,
        price_per_day,
        car_type: car_type.to_string(),
        image_url: Some(image_url.to_string()),
        description: None,
        is_available: true,
        transmission: Some(transmission.to_string()),
    }
}

// Dealer inventory: the six rentals (101-106) followed by the six cars for sale (201-206)
pub fn inventory_cars() -> Vec<Car> {
    let mut m5 = inventory_car(
        101,
        "BMW",
        "M5 CS",
        2024,
        150,
        "Sports",
        "https://images.unsplash.com/photo-1617531653332-bd46c24f2068?w=800&auto=format&fit=crop&q=80",
        "Auto",
    );
    m5.description = Some(
        "The BMW M5 CS is the most powerful BMW M5 ever produced. With 627 horsepower and a weight reduction of 154 pounds, it redefines the sports sedan segment."
            .to_string(),
    );

    vec![
        m5,
        inventory_car(102, "Mercedes", "AMG GT", 2023, 250, "Supercar",
            "https://images.unsplash.com/photo-1618843479313-40f8afb4b4d8?w=800&auto=format&fit=crop&q=80", "Auto"),
        inventory_car(103, "Tesla", "Model S Plaid", 2024, 180, "Electric",
            "https://images.unsplash.com/photo-1617788138017-80ad40651399?w=800&auto=format&fit=crop&q=80", "Auto"),
        inventory_car(104, "Porsche", "911 GT3", 2023, 300, "Sports",
            "https://images.unsplash.com/photo-1611651338412-8403fa6e3599?q=80&w=800&auto=format&fit=crop", "Manual"),
        inventory_car(105, "Audi", "RS6 Avant", 2024, 200, "Wagon",
            "https://images.unsplash.com/photo-1603584173870-7f23fdae1b7a?w=800&auto=format&fit=crop&q=80", "Auto"),
        inventory_car(106, "Land Rover", "Defender", 2023, 160, "SUV",
            "https://images.unsplash.com/photo-1519245659620-e859806a8d3b?w=800&auto=format&fit=crop&q=80", "Auto"),
        inventory_car(201, "Audi", "RS e-tron GT", 2024, 105_000, "Electric",
            "https://images.unsplash.com/photo-1614200179396-2bdb77ebf81b?w=800&auto=format&fit=crop&q=80", "Auto"),
        inventory_car(202, "Lamborghini", "Huracan", 2023, 240_000, "Supercar",
            "https://images.unsplash.com/photo-1544636331-e26879cd4d9b?w=800&auto=format&fit=crop&q=80", "Auto"),
        inventory_car(203, "Ferrari", "F8 Tributo", 2024, 280_000, "Supercar",
            "https://images.unsplash.com/photo-1592198084033-aade902d1aae?w=800&auto=format&fit=crop&q=80", "Auto"),
        inventory_car(204, "Range Rover", "Sport", 2023, 85_000, "SUV",
            "https://images.unsplash.com/photo-1606220838315-056192d5e927?w=800&auto=format&fit=crop&q=80", "Auto"),
        inventory_car(205, "Porsche", "Taycan Turbo S", 2023, 185_000, "Electric",
            "https://images.unsplash.com/photo-1616788494707-ec28f08d05a1?q=80&w=800&auto=format&fit=crop", "Auto"),
        inventory_car(206, "McLaren", "720S", 2022, 295_000, "Supercar",
            "https://images.unsplash.com/photo-1621135802920-133df287f89c?w=800&auto=format&fit=crop&q=80", "Auto"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn rental(
    id: u32,
    name: &str,
    car_type: &str,
    price: u64,
    image: &str,
    seats: u8,
    fuel: &str,
    transmission: &str,
    featured: bool,
) -> RentalCar {
    RentalCar {
        id,
        name: name.to_string(),
        car_type: car_type.to_string(),
        price,
        image: image.to_string(),
        seats,
        fuel: fuel.to_string(),
        transmission: transmission.to_string(),
        featured,
    }
}

pub fn rental_cars() -> Vec<RentalCar> {
    vec![
        rental(101, "BMW M5 CS", "Sports", 150,
            "https://images.unsplash.com/photo-1617531653332-bd46c24f2068?w=800&auto=format&fit=crop&q=80", 4, "Petrol", "Auto", true),
        rental(102, "Mercedes AMG GT", "Supercar", 250,
            "https://images.unsplash.com/photo-1618843479313-40f8afb4b4d8?w=800&auto=format&fit=crop&q=80", 2, "Petrol", "Auto", false),
        rental(103, "Tesla Model S Plaid", "Electric", 180,
            "https://images.unsplash.com/photo-1617788138017-80ad40651399?w=800&auto=format&fit=crop&q=80", 5, "Electric", "Auto", false),
        rental(104, "Porsche 911 GT3", "Sports", 300,
            "https://images.unsplash.com/photo-1611651338412-8403fa6e3599?q=80&w=800&auto=format&fit=crop", 2, "Petrol", "Manual", true),
        rental(105, "Audi RS6 Avant", "Wagon", 200,
            "https://images.unsplash.com/photo-1603584173870-7f23fdae1b7a?w=800&auto=format&fit=crop&q=80", 5, "Petrol", "Auto", false),
        rental(106, "Land Rover Defender", "SUV", 160,
            "https://images.unsplash.com/photo-1519245659620-e859806a8d3b?w=800&auto=format&fit=crop&q=80", 7, "Diesel", "Auto", false),
    ]
}

#[allow(clippy::too_many_arguments)]
fn for_sale(
    id: u32,
    name: &str,
    year: u16,
    price: u64,
    image: &str,
    condition: Condition,
    mileage: &str,
    featured: bool,
    car_type: &str,
) -> SaleCar {
    SaleCar {
        id,
        name: name.to_string(),
        year,
        price,
        image: image.to_string(),
        condition,
        mileage: mileage.to_string(),
        transmission: "Auto".to_string(),
        featured,
        car_type: car_type.to_string(),
    }
}

pub fn sale_cars() -> Vec<SaleCar> {
    vec![
        for_sale(201, "Audi RS e-tron GT", 2024, 105_000,
            "https://images.unsplash.com/photo-1614200179396-2bdb77ebf81b?w=800&auto=format&fit=crop&q=80", Condition::New, "0", true, "Electric"),
        for_sale(202, "Lamborghini Huracan", 2023, 240_000,
            "https://images.unsplash.com/photo-1544636331-e26879cd4d9b?w=800&auto=format&fit=crop&q=80", Condition::Used, "4,500", false, "Supercar"),
        for_sale(203, "Ferrari F8 Tributo", 2024, 280_000,
            "https://images.unsplash.com/photo-1592198084033-aade902d1aae?w=800&auto=format&fit=crop&q=80", Condition::New, "0", true, "Supercar"),
        for_sale(204, "Range Rover Sport", 2023, 85_000,
            "https://images.unsplash.com/photo-1606220838315-056192d5e927?w=800&auto=format&fit=crop&q=80", Condition::Used, "12,000", false, "SUV"),
        for_sale(205, "Porsche Taycan Turbo S", 2023, 185_000,
            "https://images.unsplash.com/photo-1580273916550-e323be2ebdd9?w=800&auto=format&fit=crop&q=80", Condition::Used, "8,200", false, "Electric"),
        for_sale(206, "McLaren 720S", 2022, 295_000,
            "https://images.unsplash.com/photo-1621135802920-133df287f89c?w=800&auto=format&fit=crop&q=80", Condition::Used, "3,100", true, "Supercar"),
    ]
}

fn faq(category: &str, question: &str, answer: &str) -> Faq {
    Faq {
        category: category.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

pub fn faqs() -> Vec<Faq> {
    vec![
        faq(
            "general",
            "How does the rental process work?",
            "Our rental process is entirely digital. Simply browse our showroom, select your vehicle, choose your verified dates, and complete the booking. We handle the delivery and pickup.",
        ),
        faq(
            "general",
            "Is there a mileage limit?",
            "Most of our rentals come with a generous daily mileage allowance of 100-150 miles. Unlimited mileage packages are available for select vehicles.",
        ),
        faq(
            "account",
            "How do I verify my driver's license?",
            "You can upload your license directly in your account settings or during the checkout process. Verification is usually instant.",
        ),
        faq(
            "payments",
            "What payment methods do you accept?",
            "We accept all major credit cards (Visa, Mastercard, Amex), debit cards, and select cryptocurrency payments for long-term rentals.",
        ),
        faq(
            "rentals",
            "What if the car breaks down?",
            "All our rentals include 24/7 premium roadside assistance. In the unlikely event of a breakdown, we will provide an immediate replacement vehicle.",
        ),
    ]
}

fn review(id: u32, name: &str, role: &str, rating: u8, text: &str, avatar: &str) -> Review {
    Review {
        id,
        name: name.to_string(),
        role: role.to_string(),
        rating,
        text: text.to_string(),
        image: format!("https://i.pravatar.cc/150?u={}", avatar),
    }
}

pub fn reviews() -> Vec<Review> {
    vec![
        review(1, "Alex Thompson", "Luxury Car Collector", 5,
            "VelocityX has completely transformed my car buying experience. The attention to detail and curated selection is unmatched in the industry.", "alex"),
        review(2, "Sarah Jenkins", "Verified Buyer", 5,
            "Sold my Porsche 911 through VelocityX. The process was transparent, quick, and I got a better price than any local dealer offered.", "sarah"),
        review(3, "Michael Chen", "Business Executive", 4,
            "Rented a McLaren for a weekend getaway. The car was in pristine condition and the delivery service was prompt. Highly recommended.", "michael"),
        review(4, "Emily Davis", "Car Enthusiast", 5,
            "The 3D showroom experience is mind-blowing. It really helps to get a feel for the car before booking a test drive.", "emily"),
        review(5, "James Wilson", "Regular Customer", 5,
            "I've rented from them 5 times now. Consistent quality and excellent customer support every single time.", "james"),
        review(6, "Sophie Martin", "Interior Designer", 5,
            "Beautiful website and even more beautiful cars. The booking process for my trip to Miami was effortless.", "sophie"),
    ]
}

fn dashboard_booking(
    id: &str,
    customer: (&str, &str),
    car_name: &str,
    dates: &str,
    total: u64,
    status: BookingStatus,
) -> DashboardBooking {
    DashboardBooking {
        id: id.to_string(),
        customer_name: customer.0.to_string(),
        customer_email: customer.1.to_string(),
        car_name: car_name.to_string(),
        dates: dates.to_string(),
        total,
        status,
    }
}

pub fn dashboard_bookings() -> Vec<DashboardBooking> {
    vec![
        dashboard_booking("BK-782", ("Sarah Wilson", "sarah.w@example.com"), "Ferrari F8 Tributo",
            "Mar 20 - Mar 23, 2024", 6_200, BookingStatus::Pending),
        dashboard_booking("BK-781", ("James Bond", "007@mi6.gov"), "Aston Martin DBS",
            "Mar 18 - Mar 25, 2024", 12_500, BookingStatus::Approved),
        dashboard_booking("BK-780", ("Emily Blunt", "emily@studio.com"), "Range Rover SV",
            "Mar 15 - Mar 17, 2024", 2_100, BookingStatus::Completed),
        dashboard_booking("BK-779", ("Michael Chang", "mike.c@tech.co"), "Tesla Model S Plaid",
            "Mar 10 - Mar 12, 2024", 1_800, BookingStatus::Cancelled),
    ]
}

#[allow(clippy::too_many_arguments)]
fn blog_post(
    id: u32,
    title: &str,
    excerpt: &str,
    category: &str,
    author: &str,
    date: &str,
    read_time: &str,
    image: &str,
    featured: bool,
) -> BlogPost {
    BlogPost {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        category: category.to_string(),
        author: author.to_string(),
        date: date.to_string(),
        read_time: read_time.to_string(),
        image: image.to_string(),
        featured,
    }
}

pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        blog_post(1, "The Future of Electric Supercars",
            "Exploring how Rimac, Lotus, and Porsche are redefining performance with high-voltage mastery. We dive deep into the technology that makes 0-60 in under 2 seconds possible.",
            "Technology", "Alex Morgan", "Oct 12, 2025", "5 min read",
            "https://images.unsplash.com/photo-1617788138017-80ad40651399?q=80&w=1200&auto=format&fit=crop", true),
        blog_post(2, "Top 5 Coastal Drives in California",
            "From Big Sur to Malibu, discover the most breathtaking routes for your next convertible rental.",
            "Travel", "Elena Rodriguez", "Sep 28, 2025", "4 min read",
            "https://images.unsplash.com/photo-1492144534655-ae79c964c9d7?q=80&w=800&auto=format&fit=crop", false),
        blog_post(3, "Maintenance Secrets of a Luxury Fleet",
            "How we keep our 500+ premium vehicles in showroom condition 24/7.",
            "Behind the Scenes", "Sarah Chen", "Sep 15, 2025", "6 min read",
            "https://images.unsplash.com/photo-1487754180451-c456f719a1fc?q=80&w=800&auto=format&fit=crop", false),
        blog_post(4, "Luxury vs. Sport: Which Suits You?",
            "Comparing the Rolls-Royce Ghost against the Ferrari F8 Tributo for a weekend getaway.",
            "Guides", "Marcus Johnson", "Sep 02, 2025", "3 min read",
            "https://images.unsplash.com/photo-1552519507-da3b142c6e3d?q=80&w=800&auto=format&fit=crop", false),
    ]
}

fn transaction(
    id: &str,
    customer: (&str, &str),
    vehicle: &str,
    amount: u64,
    status: TransactionStatus,
    (year, month, day): (i32, u32, u32),
) -> Transaction {
    Transaction {
        id: id.to_string(),
        customer_name: customer.0.to_string(),
        customer_email: customer.1.to_string(),
        vehicle: vehicle.to_string(),
        amount,
        status,
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
    }
}

pub fn transactions() -> Vec<Transaction> {
    vec![
        transaction("TRX-9821", ("Olivia Martin", "olivia.martin@email.com"), "Porsche 911 GT3",
            3_500, TransactionStatus::Completed, (2024, 3, 15)),
        transaction("TRX-9822", ("Jackson Lee", "jackson.lee@email.com"), "Tesla Model S Plaid",
            850, TransactionStatus::Processing, (2024, 3, 14)),
        transaction("TRX-9823", ("Isabella Nguyen", "isabella.nguyen@email.com"), "Audi RS e-tron GT",
            1_200, TransactionStatus::Completed, (2024, 3, 14)),
        transaction("TRX-9824", ("William Kim", "will@email.com"), "Mercedes-AMG G63",
            2_100, TransactionStatus::Pending, (2024, 3, 13)),
        transaction("TRX-9825", ("Sofia Davis", "sofia.davis@email.com"), "BMW M4 Competition",
            950, TransactionStatus::Failed, (2024, 3, 12)),
    ]
}
