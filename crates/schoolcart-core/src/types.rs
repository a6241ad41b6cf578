//! # Domain Types
//!
//! Core domain types used throughout the SchoolCart dashboard.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │     Offer       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  category (key)─┼──►│  key            │   │  kind (tagged)  │       │
//! │  │  stock          │   │  name           │   │  applicable ────┼──► ids│
//! │  │  status (derived│   └─────────────────┘   │  is_active      │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Student      │   │     Order       │   │ OrderNotification│      │
//! │  │  birthday MM-DD │   │  pending/done   │   │  read flag      │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! References between entities are informal: nothing here checks that a
//! category key or an applicable product id exists.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::{DEFAULT_PROFIT_MARGIN_PCT, LOW_STOCK_THRESHOLD};

// =============================================================================
// Stock Status
// =============================================================================

/// Availability of a product, derived from its stock count alone.
///
/// ```text
/// stock:   0 │ 1 ........ 15 │ 16 ...
/// status: out│     low       │ in
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// Derives the status for a stock count.
    pub const fn from_stock(stock: u32) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock <= LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Badge text shown in the inventory table.
    pub const fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Opaque identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Key of the category this product is filed under.
    pub category: String,

    /// Unit price.
    pub price: Money,

    /// Units on hand.
    pub stock: u32,

    /// Derived from `stock`; never set directly.
    pub status: StockStatus,

    /// Image reference (URL or data URI).
    pub image: Option<String>,

    pub description: Option<String>,

    /// Profit margin in percent. `None` means the default of 20.
    pub profit_margin: Option<u32>,
}

impl Product {
    /// Builds a product from a creation payload, deriving its status.
    pub fn from_new(id: impl Into<String>, new: NewProduct) -> Self {
        Product {
            id: id.into(),
            status: StockStatus::from_stock(new.stock),
            name: new.name,
            category: new.category,
            price: new.price,
            stock: new.stock,
            image: new.image,
            description: new.description,
            profit_margin: new.profit_margin,
        }
    }

    /// Merges a partial update into this product.
    ///
    /// `status` is recomputed only when the update carries `stock`.
    pub fn apply_update(&mut self, update: ProductUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
            self.status = StockStatus::from_stock(stock);
        }
        if let Some(image) = update.image {
            self.image = Some(image);
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(profit_margin) = update.profit_margin {
            self.profit_margin = Some(profit_margin);
        }
    }

    /// Profit margin in percent, falling back to the default.
    #[inline]
    pub fn profit_margin_pct(&self) -> u32 {
        self.profit_margin.unwrap_or(DEFAULT_PROFIT_MARGIN_PCT)
    }

    /// Profit expected from selling the whole stock at the current price.
    pub fn projected_profit(&self) -> Money {
        self.price
            .multiply_quantity(i64::from(self.stock))
            .percentage(self.profit_margin_pct())
    }
}

/// Payload for creating a product (no id, no status).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: Money,
    pub stock: u32,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub profit_margin: Option<u32>,
}

/// Partial product update. Absent fields are left as they are.
///
/// There is deliberately no `status` field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Money>,
    pub stock: Option<u32>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub profit_margin: Option<u32>,
}

impl ProductUpdate {
    /// Update that only sets the stock count.
    pub fn stock(stock: u32) -> Self {
        ProductUpdate {
            stock: Some(stock),
            ..Default::default()
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Machine key products refer to. Fixed at creation.
    pub key: String,
}

impl Category {
    /// Creates a category, deriving its key from `name`.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Category {
            id: id.into(),
            key: Category::key_for(&name),
            name,
        }
    }

    /// Lowercases `name` and replaces every whitespace run with one hyphen.
    ///
    /// ## Example
    /// ```rust
    /// use schoolcart_core::Category;
    ///
    /// assert_eq!(Category::key_for("Art Supplies"), "art-supplies");
    /// assert_eq!(Category::key_for("Lunch   Boxes"), "lunch-boxes");
    /// ```
    pub fn key_for(name: &str) -> String {
        let mut key = String::with_capacity(name.len());
        let mut in_whitespace = false;
        for c in name.chars() {
            if c.is_whitespace() {
                if !in_whitespace {
                    key.push('-');
                }
                in_whitespace = true;
            } else {
                key.extend(c.to_lowercase());
                in_whitespace = false;
            }
        }
        key
    }
}

// =============================================================================
// Offer
// =============================================================================

/// Discount mechanics of an offer. Each variant carries only its own fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "offer_type", rename_all = "kebab-case")]
pub enum OfferKind {
    /// `percent`% off.
    Percentage {
        percent: u32,
        #[serde(default)]
        min_purchase: Option<Money>,
    },
    /// A fixed amount off.
    Fixed {
        amount: Money,
        #[serde(default)]
        min_purchase: Option<Money>,
    },
    /// Buy `buy_quantity`, get `get_quantity` free.
    BuyXGetY { buy_quantity: u32, get_quantity: u32 },
    /// A fixed price for the bundle.
    Bundle { bundle_price: Money },
}

impl OfferKind {
    /// Name of the offer type as shown in the offer form.
    pub const fn label(&self) -> &'static str {
        match self {
            OfferKind::Percentage { .. } => "Percentage Off",
            OfferKind::Fixed { .. } => "Fixed Discount",
            OfferKind::BuyXGetY { .. } => "Buy X Get Y Free",
            OfferKind::Bundle { .. } => "Bundle Price",
        }
    }

    /// The `offer_type` tag this kind serializes with.
    pub const fn tag(&self) -> &'static str {
        match self {
            OfferKind::Percentage { .. } => "percentage",
            OfferKind::Fixed { .. } => "fixed",
            OfferKind::BuyXGetY { .. } => "buy-x-get-y",
            OfferKind::Bundle { .. } => "bundle",
        }
    }

    /// Minimum purchase required, for the kinds that have one.
    pub fn min_purchase(&self) -> Option<Money> {
        match self {
            OfferKind::Percentage { min_purchase, .. } | OfferKind::Fixed { min_purchase, .. } => {
                *min_purchase
            }
            OfferKind::BuyXGetY { .. } | OfferKind::Bundle { .. } => None,
        }
    }
}

/// One-line summary, e.g. `25% off` or `Buy 2, Get 1 Free`.
impl fmt::Display for OfferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OfferKind::Percentage { percent, .. } => write!(f, "{}% off", percent),
            OfferKind::Fixed { amount, .. } => write!(f, "{} off", amount),
            OfferKind::BuyXGetY {
                buy_quantity,
                get_quantity,
            } => write!(f, "Buy {}, Get {} Free", buy_quantity, get_quantity),
            OfferKind::Bundle { bundle_price } => write!(f, "Bundle: {}", bundle_price),
        }
    }
}

/// A promotional offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Offer {
    pub id: String,
    pub name: String,
    pub kind: OfferKind,
    pub description: Option<String>,
    /// Calendar date as entered; never parsed.
    pub start_date: String,
    /// Calendar date as entered; never parsed or compared to `start_date`.
    pub end_date: String,
    pub is_active: bool,
    /// Product ids this offer may discount. Duplicates are tolerated.
    pub applicable_products: Vec<String>,
}

impl Offer {
    /// Builds an offer from a creation payload.
    pub fn from_new(id: impl Into<String>, new: NewOffer) -> Self {
        Offer {
            id: id.into(),
            name: new.name,
            kind: new.kind,
            description: new.description,
            start_date: new.start_date,
            end_date: new.end_date,
            is_active: new.is_active,
            applicable_products: new.applicable_products,
        }
    }

    /// Merges a partial update into this offer.
    pub fn apply_update(&mut self, update: OfferUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(start_date) = update.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            self.end_date = end_date;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        if let Some(applicable_products) = update.applicable_products {
            self.applicable_products = applicable_products;
        }
    }

    /// True when the offer is active and lists `product_id`.
    pub fn applies_to(&self, product_id: &str) -> bool {
        self.is_active && self.applicable_products.iter().any(|id| id == product_id)
    }
}

/// Payload for creating an offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewOffer {
    pub name: String,
    pub kind: OfferKind,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
    pub applicable_products: Vec<String>,
}

/// Partial offer update. Absent fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct OfferUpdate {
    pub name: Option<String>,
    pub kind: Option<OfferKind>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_active: Option<bool>,
    pub applicable_products: Option<Vec<String>>,
}

// =============================================================================
// Roster
// =============================================================================

/// Role of a roster entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Student,
    Staff,
    Admin,
}

/// A student, staff member or admin on the school roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Student {
    pub id: String,
    pub name: String,
    /// Year-agnostic birthday, `MM-DD`.
    pub birthday: String,
    pub role: MemberRole,
}

impl Student {
    /// Exact string match against a `MM-DD` key.
    #[inline]
    pub fn has_birthday_on(&self, month_day: &str) -> bool {
        self.birthday == month_day
    }
}

/// Projects a date to its `MM-DD` birthday key.
///
/// ```rust
/// use chrono::NaiveDate;
/// use schoolcart_core::types::month_day_key;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!(month_day_key(date), "03-05");
/// ```
pub fn month_day_key(date: NaiveDate) -> String {
    date.format("%m-%d").to_string()
}

// =============================================================================
// Orders
// =============================================================================

/// Who placed an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    Student,
    Staff,
}

/// Where an order is in the counter queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
}

/// An order waiting at (or served by) the counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    /// Counter number, e.g. `#1234`.
    pub id: String,
    pub customer: String,
    /// Human-readable item summary.
    pub items: String,
    pub amount: Money,
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub customer_type: CustomerType,
}

impl Order {
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}

/// A new-order notification shown in the header bell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderNotification {
    pub id: String,
    pub order_id: String,
    pub customer: String,
    pub items: String,
    pub amount: Money,
    #[ts(as = "String")]
    pub received_at: DateTime<Utc>,
    pub read: bool,
}
