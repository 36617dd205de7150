//! Sales result rows and the sales filter DTO.

use nativequery_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Result rows
// ---------------------------------------------------------------------------

/// One denormalized row of a sale joined with its customer, a single line
/// item, that item's product, and a single payment.
///
/// A sale with several items or payments yields one row per combination.
/// Rows are only built by the row mapper; fields are exposed read-only.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleFullRow {
    id: DbId,
    sale_date: Timestamp,
    customer_id: DbId,
    customer_full_name: String,
    customer_email: String,
    customer_active: bool,
    sale_item_id: DbId,
    sale_item_quantity: i32,
    sale_item_unit_price: Decimal,
    sale_item_discount: Decimal,
    product_id: DbId,
    product_name: String,
    product_description: Option<String>,
    product_price: Decimal,
    product_active: bool,
    sale_payment_id: DbId,
    sale_payment_payment_type: String,
    sale_payment_paid_amount: Decimal,
    sale_payment_payment_date: Timestamp,
    total_amount: Decimal,
    status: String,
}

impl SaleFullRow {
    pub fn id(&self) -> DbId {
        self.id
    }

    pub fn sale_date(&self) -> Timestamp {
        self.sale_date
    }

    pub fn customer_id(&self) -> DbId {
        self.customer_id
    }

    pub fn customer_full_name(&self) -> &str {
        &self.customer_full_name
    }

    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }

    pub fn customer_active(&self) -> bool {
        self.customer_active
    }

    pub fn sale_item_id(&self) -> DbId {
        self.sale_item_id
    }

    pub fn sale_item_quantity(&self) -> i32 {
        self.sale_item_quantity
    }

    pub fn sale_item_unit_price(&self) -> Decimal {
        self.sale_item_unit_price
    }

    pub fn sale_item_discount(&self) -> Decimal {
        self.sale_item_discount
    }

    pub fn product_id(&self) -> DbId {
        self.product_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn product_description(&self) -> Option<&str> {
        self.product_description.as_deref()
    }

    pub fn product_price(&self) -> Decimal {
        self.product_price
    }

    pub fn product_active(&self) -> bool {
        self.product_active
    }

    pub fn sale_payment_id(&self) -> DbId {
        self.sale_payment_id
    }

    pub fn sale_payment_payment_type(&self) -> &str {
        &self.sale_payment_payment_type
    }

    pub fn sale_payment_paid_amount(&self) -> Decimal {
        self.sale_payment_paid_amount
    }

    pub fn sale_payment_payment_date(&self) -> Timestamp {
        self.sale_payment_payment_date
    }

    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

/// A sale joined with its customer only, without line-item detail.
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleCustomerRow {
    pub id: DbId,
    pub total_amount: Decimal,
    pub status: String,
    pub customer_id: DbId,
    pub customer_full_name: String,
    pub customer_email: String,
    pub customer_active: bool,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Structured filter for `POST /sales/filter`.
///
/// Absent fields impose no constraint; an empty filter matches every row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesFilter {
    /// Sale id to match exactly.
    pub id: Option<DbId>,
    /// Case-insensitive substring of the customer's full name.
    pub customer_name: Option<String>,
}
