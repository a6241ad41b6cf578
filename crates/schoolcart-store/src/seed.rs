//! # Seed Data
//!
//! The dashboard's starting data: a small school-canteen catalog, the
//! running offers, the roster, the counter queue and a week of sales.
//!
//! Seed ids are short numeric strings; everything created at runtime gets a
//! UUID instead, so the two never collide.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use schoolcart_core::analytics::DailySales;
use schoolcart_core::types::month_day_key;
use schoolcart_core::{
    Category, CustomerType, MemberRole, Money, NewOffer, NewProduct, Offer, OfferKind, Order,
    OrderNotification, OrderStatus, Product, Student,
};

/// (id, name, category key, price in rupees, stock, profit margin %)
const PRODUCTS: &[(&str, &str, &str, i64, u32, u32)] = &[
    // Stationery
    ("1", "Classmate Notebook (200 pages)", "notebooks", 85, 120, 25),
    ("2", "Apsara Pencil Set (10 pcs)", "writing", 50, 95, 35),
    ("3", "Camlin Geometry Box", "supplies", 180, 12, 30),
    ("4", "Reynolds Ball Pen (Pack of 5)", "writing", 60, 0, 40),
    ("5", "School Bag (Premium)", "bags", 850, 25, 20),
    ("6", "Water Bottle (1L)", "supplies", 150, 45, 30),
    ("7", "Lunch Box Set", "supplies", 250, 8, 25),
    // Canteen
    ("8", "Vegetable Thali", "lunch", 180, 45, 25),
    ("9", "Samosa (2 pcs)", "snacks", 40, 78, 40),
    ("10", "Masala Chai", "drinks", 25, 55, 50),
    ("11", "Cold Coffee", "drinks", 60, 35, 45),
    ("12", "Art & Craft Kit", "art", 320, 18, 28),
];

/// (id, display name, key)
const CATEGORIES: &[(&str, &str, &str)] = &[
    ("1", "Notebooks", "notebooks"),
    ("2", "Writing", "writing"),
    ("3", "School Supplies", "supplies"),
    ("4", "Bags", "bags"),
    ("5", "Art & Craft", "art"),
    ("6", "Lunch", "lunch"),
    ("7", "Snacks", "snacks"),
    ("8", "Drinks", "drinks"),
];

/// (id, customer, items, amount in rupees, minutes ago, completed, customer type)
const ORDERS: &[(&str, &str, &str, i64, i64, bool, CustomerType)] = &[
    ("#1234", "Emma Wilson", "Notebook Set + Pen Pack", 250, 5, false, CustomerType::Student),
    ("#1235", "James Smith", "Geometry Box + Eraser", 195, 12, false, CustomerType::Staff),
    ("#1236", "Sophia Brown", "Samosa + Cold Coffee", 100, 25, true, CustomerType::Student),
    ("#1237", "Liam Johnson", "School Bag (Premium)", 850, 38, false, CustomerType::Student),
    ("#1238", "Olivia Davis", "Art Kit + Lunch Thali", 500, 60, true, CustomerType::Staff),
    ("#1239", "Arjun Patel", "Pencil Set + Sharpener", 75, 90, true, CustomerType::Student),
];

/// (label, revenue in rupees, orders)
const DAILY_SALES: &[(&str, i64, u32)] = &[
    ("01 Dec", 12_500, 45),
    ("02 Dec", 18_200, 62),
    ("03 Dec", 15_800, 51),
    ("04 Dec", 22_100, 78),
    ("05 Dec", 19_500, 65),
    ("06 Dec", 25_800, 89),
    ("07 Dec", 21_200, 72),
];

pub fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|&(id, name, category, price, stock, margin)| {
            Product::from_new(
                id,
                NewProduct {
                    name: name.to_string(),
                    category: category.to_string(),
                    price: Money::from_rupees(price),
                    stock,
                    image: None,
                    description: None,
                    profit_margin: Some(margin),
                },
            )
        })
        .collect()
}

/// Seed categories keep their hand-picked keys (`supplies`, not
/// `school-supplies`).
pub fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|&(id, name, key)| Category {
            id: id.to_string(),
            name: name.to_string(),
            key: key.to_string(),
        })
        .collect()
}

pub fn offers() -> Vec<Offer> {
    let ids = |ids: &[&str]| ids.iter().map(|id| id.to_string()).collect::<Vec<_>>();

    vec![
        Offer::from_new(
            "1",
            NewOffer {
                name: "Back to School Sale".to_string(),
                kind: OfferKind::Percentage {
                    percent: 25,
                    min_purchase: Some(Money::from_rupees(100)),
                },
                description: Some("25% off on selected school supplies".to_string()),
                start_date: "2024-06-01".to_string(),
                end_date: "2024-06-30".to_string(),
                is_active: true,
                applicable_products: ids(&["1", "2", "3"]),
            },
        ),
        Offer::from_new(
            "2",
            NewOffer {
                name: "Notebook Bundle".to_string(),
                kind: OfferKind::Bundle {
                    bundle_price: Money::from_rupees(200),
                },
                description: Some("Get 3 notebooks for ₹200".to_string()),
                start_date: "2024-01-01".to_string(),
                end_date: "2024-12-31".to_string(),
                is_active: true,
                applicable_products: ids(&["1"]),
            },
        ),
        Offer::from_new(
            "3",
            NewOffer {
                name: "Buy 2 Get 1 Free".to_string(),
                kind: OfferKind::BuyXGetY {
                    buy_quantity: 2,
                    get_quantity: 1,
                },
                description: Some("Buy 2 pencil sets, get 1 free".to_string()),
                start_date: "2024-01-01".to_string(),
                end_date: "2024-12-31".to_string(),
                is_active: false,
                applicable_products: ids(&["2"]),
            },
        ),
    ]
}

/// The roster, with three people celebrating on `today`.
pub fn roster(today: NaiveDate) -> Vec<Student> {
    let today = month_day_key(today);
    let entries = [
        ("1", "Priya Sharma", today.as_str(), MemberRole::Student),
        ("2", "Rahul Kumar", today.as_str(), MemberRole::Student),
        ("3", "Anita Verma", "03-15", MemberRole::Staff),
        ("4", "Vikash Singh", today.as_str(), MemberRole::Admin),
        ("5", "Sneha Patel", "07-22", MemberRole::Student),
        ("6", "Amit Joshi", "09-10", MemberRole::Staff),
    ];

    entries
        .iter()
        .map(|&(id, name, birthday, role)| Student {
            id: id.to_string(),
            name: name.to_string(),
            birthday: birthday.to_string(),
            role,
        })
        .collect()
}

/// The counter queue, timestamped relative to `now`.
pub fn orders(now: DateTime<Utc>) -> Vec<Order> {
    ORDERS
        .iter()
        .map(
            |&(id, customer, items, amount, minutes_ago, completed, customer_type)| Order {
                id: id.to_string(),
                customer: customer.to_string(),
                items: items.to_string(),
                amount: Money::from_rupees(amount),
                placed_at: now - Duration::minutes(minutes_ago),
                status: if completed {
                    OrderStatus::Completed
                } else {
                    OrderStatus::Pending
                },
                customer_type,
            },
        )
        .collect()
}

/// One unread notification per pending seed order.
pub fn notifications(now: DateTime<Utc>) -> Vec<OrderNotification> {
    orders(now)
        .into_iter()
        .filter(Order::is_pending)
        .enumerate()
        .map(|(index, order)| OrderNotification {
            id: (index + 1).to_string(),
            order_id: order.id,
            customer: order.customer,
            items: order.items,
            amount: order.amount,
            received_at: order.placed_at,
            read: false,
        })
        .collect()
}

pub fn daily_sales() -> Vec<DailySales> {
    DAILY_SALES
        .iter()
        .map(|&(label, revenue, orders)| DailySales {
            label: label.to_string(),
            revenue: Money::from_rupees(revenue),
            orders,
        })
        .collect()
}
