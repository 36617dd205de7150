//! Read-only queries over `sales` and its joined tables.
//!
//! Every query uses the same table aliases (`s`, `c`, `si`, `p`, `sp`) so
//! that dynamic filter keys from [`SaleColumn`] can be dropped straight into
//! the WHERE clause. Empty results are returned as empty vectors; only
//! driver and statement failures surface as errors.

use nativequery_core::paging::{Page, PageRequest};
use nativequery_core::sales_filter::{contains_pattern, DynamicFilter, FilterValue, SaleColumn};
use nativequery_core::types::DbId;
use sqlx::PgPool;

use crate::models::sale::{SaleCustomerRow, SaleFullRow, SalesFilter};

// ---------------------------------------------------------------------------
// SQL fragments
// ---------------------------------------------------------------------------

/// Column list for sale-with-items rows.
const FULL_COLUMNS: &str = "\
    s.id, s.sale_date, \
    c.id AS customer_id, c.full_name AS customer_full_name, \
    c.email AS customer_email, c.active AS customer_active, \
    si.id AS sale_item_id, si.quantity AS sale_item_quantity, \
    si.unit_price AS sale_item_unit_price, si.discount AS sale_item_discount, \
    p.id AS product_id, p.name AS product_name, \
    p.description AS product_description, p.price AS product_price, \
    p.active AS product_active, \
    sp.id AS sale_payment_id, sp.payment_type AS sale_payment_payment_type, \
    sp.paid_amount AS sale_payment_paid_amount, \
    sp.payment_date AS sale_payment_payment_date, \
    s.total_amount, s.status";

/// Join producing one row per (sale, item, payment).
const FULL_FROM: &str = "\
    FROM sales s \
    JOIN customers c ON c.id = s.customer_id \
    JOIN sale_items si ON si.sale_id = s.id \
    JOIN products p ON p.id = si.product_id \
    JOIN sale_payments sp ON sp.sale_id = s.id";

const FULL_ORDER: &str = "ORDER BY s.id, si.id, sp.id";

/// Column list for sale-with-customer summary rows.
const SUMMARY_COLUMNS: &str = "\
    s.id, s.total_amount, s.status, \
    c.id AS customer_id, c.full_name AS customer_full_name, \
    c.email AS customer_email, c.active AS customer_active";

const SUMMARY_FROM: &str = "FROM sales s JOIN customers c ON c.id = s.customer_id";

const SUMMARY_ORDER: &str = "ORDER BY s.id";

// ---------------------------------------------------------------------------
// SaleQueryRepo
// ---------------------------------------------------------------------------

/// Provides the read operations behind the `/sales` endpoints.
pub struct SaleQueryRepo;

impl SaleQueryRepo {
    /// List every sale-with-items row.
    pub async fn find_sales(pool: &PgPool) -> Result<Vec<SaleFullRow>, sqlx::Error> {
        let query = format!("SELECT {FULL_COLUMNS} {FULL_FROM} {FULL_ORDER}");
        sqlx::query_as::<_, SaleFullRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// List sale-with-items rows belonging to one customer.
    pub async fn find_sales_by_customer_id(
        pool: &PgPool,
        customer_id: DbId,
    ) -> Result<Vec<SaleFullRow>, sqlx::Error> {
        let query = format!("SELECT {FULL_COLUMNS} {FULL_FROM} WHERE c.id = $1 {FULL_ORDER}");
        sqlx::query_as::<_, SaleFullRow>(&query)
            .bind(customer_id)
            .fetch_all(pool)
            .await
    }

    /// List sale-with-items rows matching a structured filter.
    ///
    /// `id` matches the sale id; `customer_name` is a case-insensitive
    /// substring match on the customer's full name.
    pub async fn find_sales_by_filter(
        pool: &PgPool,
        filter: &SalesFilter,
    ) -> Result<Vec<SaleFullRow>, sqlx::Error> {
        let (where_clause, bind_values) = build_sales_filter(filter);
        let query = format!("SELECT {FULL_COLUMNS} {FULL_FROM} {where_clause} {FULL_ORDER}");

        let q = bind_filter_values(sqlx::query_as::<_, SaleFullRow>(&query), &bind_values);
        q.fetch_all(pool).await
    }

    /// List sale-with-items rows where every filter column equals its value.
    pub async fn find_sales_by_columns(
        pool: &PgPool,
        filter: &DynamicFilter,
    ) -> Result<Vec<SaleFullRow>, sqlx::Error> {
        let (where_clause, bind_values) = build_column_filter(filter);
        let query = format!("SELECT {FULL_COLUMNS} {FULL_FROM} {where_clause} {FULL_ORDER}");

        let q = bind_filter_values(sqlx::query_as::<_, SaleFullRow>(&query), &bind_values);
        q.fetch_all(pool).await
    }

    /// List every sale-with-customer summary row.
    pub async fn find_sales_customers(pool: &PgPool) -> Result<Vec<SaleCustomerRow>, sqlx::Error> {
        let query = format!("SELECT {SUMMARY_COLUMNS} {SUMMARY_FROM} {SUMMARY_ORDER}");
        sqlx::query_as::<_, SaleCustomerRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// One page of summary rows plus the total number of summary rows.
    pub async fn find_sales_customers_page(
        pool: &PgPool,
        request: PageRequest,
    ) -> Result<Page<SaleCustomerRow>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} {SUMMARY_FROM} {SUMMARY_ORDER} \
             LIMIT $1 OFFSET $2"
        );
        let content = sqlx::query_as::<_, SaleCustomerRow>(&query)
            .bind(request.size())
            .bind(request.offset())
            .fetch_all(pool)
            .await?;

        let total = Self::count_sales_customers(pool).await?;

        Ok(Page::new(content, request, total))
    }

    /// Count summary rows (for pagination metadata).
    pub async fn count_sales_customers(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*)::BIGINT AS count {SUMMARY_FROM}");
        sqlx::query_scalar::<_, i64>(&query).fetch_one(pool).await
    }
}

// ---------------------------------------------------------------------------
// Filter builders
// ---------------------------------------------------------------------------

/// Build a WHERE clause and bind values from a [`SalesFilter`].
///
/// The `where_clause` is empty if no filters are active, or starts with `WHERE `.
fn build_sales_filter(filter: &SalesFilter) -> (String, Vec<FilterValue>) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_values: Vec<FilterValue> = Vec::new();

    if let Some(id) = filter.id {
        bind_values.push(FilterValue::Int(id));
        conditions.push(format!("{} = ${}", SaleColumn::SaleId.key(), bind_values.len()));
    }

    if let Some(ref name) = filter.customer_name {
        bind_values.push(FilterValue::Text(contains_pattern(name)));
        conditions.push(format!(
            "c.full_name ILIKE ${} ESCAPE '\\'",
            bind_values.len()
        ));
    }

    (where_clause(&conditions), bind_values)
}

/// Build a WHERE clause and bind values from a [`DynamicFilter`].
///
/// Column names come from [`SaleColumn::key`], so only whitelisted
/// identifiers reach the SQL text.
fn build_column_filter(filter: &DynamicFilter) -> (String, Vec<FilterValue>) {
    let mut conditions: Vec<String> = Vec::with_capacity(filter.len());
    let mut bind_values: Vec<FilterValue> = Vec::with_capacity(filter.len());

    for (column, value) in filter.entries() {
        bind_values.push(value.clone());
        conditions.push(format!("{} = ${}", column.key(), bind_values.len()));
    }

    (where_clause(&conditions), bind_values)
}

fn where_clause(conditions: &[String]) -> String {
    if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    }
}

/// Bind a slice of [`FilterValue`] to a sqlx `QueryAs` in order.
fn bind_filter_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    bind_values: &'q [FilterValue],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for val in bind_values {
        match val {
            FilterValue::Int(v) => q = q.bind(*v),
            FilterValue::Text(v) => q = q.bind(v.as_str()),
            FilterValue::Bool(v) => q = q.bind(*v),
        }
    }
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sales_filter_has_no_where_clause() {
        let (clause, values) = build_sales_filter(&SalesFilter::default());
        assert!(clause.is_empty());
        assert!(values.is_empty());
    }

    #[test]
    fn sales_filter_numbers_placeholders_in_order() {
        let filter = SalesFilter {
            id: Some(7),
            customer_name: Some("ana".into()),
        };
        let (clause, values) = build_sales_filter(&filter);

        assert_eq!(clause, "WHERE s.id = $1 AND c.full_name ILIKE $2 ESCAPE '\\'");
        assert_eq!(
            values,
            vec![FilterValue::Int(7), FilterValue::Text("%ana%".into())]
        );
    }

    #[test]
    fn name_only_filter_starts_at_first_placeholder() {
        let filter = SalesFilter {
            id: None,
            customer_name: Some("50%".into()),
        };
        let (clause, values) = build_sales_filter(&filter);

        assert_eq!(clause, "WHERE c.full_name ILIKE $1 ESCAPE '\\'");
        assert_eq!(values, vec![FilterValue::Text("%50\\%%".into())]);
    }

    #[test]
    fn column_filter_uses_whitelisted_keys() {
        let filter = DynamicFilter::new()
            .with("p.id", 1)
            .unwrap()
            .with("c.id", 1)
            .unwrap();
        let (clause, values) = build_column_filter(&filter);

        assert_eq!(clause, "WHERE c.id = $1 AND p.id = $2");
        assert_eq!(values, vec![FilterValue::Int(1), FilterValue::Int(1)]);
    }

    #[test]
    fn empty_column_filter_has_no_where_clause() {
        let (clause, values) = build_column_filter(&DynamicFilter::new());
        assert!(clause.is_empty());
        assert!(values.is_empty());
    }
}
