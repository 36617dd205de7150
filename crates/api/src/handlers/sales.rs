//! Handlers for the `/sales` endpoints.
//!
//! Each handler is a thin adapter: it turns the request (path, JSON body,
//! query string, or a fixed filter) into one `SaleQueryRepo` call and
//! returns the rows as JSON.

use axum::extract::{Path, Query, State};
use axum::Json;
use nativequery_core::paging::Page;
use nativequery_core::sales_filter::DynamicFilter;
use nativequery_core::types::DbId;
use nativequery_db::models::sale::{SaleCustomerRow, SaleFullRow, SalesFilter};
use nativequery_db::repositories::SaleQueryRepo;

use crate::error::AppResult;
use crate::query::PageParams;
use crate::state::AppState;

/// Product id constrained by `GET /sales/dynamic`.
pub const DYNAMIC_PRODUCT_ID: DbId = 1;

/// Customer id constrained by `GET /sales/dynamic`.
pub const DYNAMIC_CUSTOMER_ID: DbId = 1;

// ---------------------------------------------------------------------------
// Sale-with-items rows
// ---------------------------------------------------------------------------

/// GET /sales
pub async fn list_sales(State(state): State<AppState>) -> AppResult<Json<Vec<SaleFullRow>>> {
    let rows = SaleQueryRepo::find_sales(&state.pool).await?;

    tracing::debug!(count = rows.len(), "Listed sales");

    Ok(Json(rows))
}

/// GET /sales/customer/{customer_id}
///
/// Unknown customers yield an empty array.
pub async fn list_sales_by_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<DbId>,
) -> AppResult<Json<Vec<SaleFullRow>>> {
    let rows = SaleQueryRepo::find_sales_by_customer_id(&state.pool, customer_id).await?;

    tracing::debug!(customer_id, count = rows.len(), "Listed sales by customer");

    Ok(Json(rows))
}

/// POST /sales/filter
///
/// Body: `{ "id"?: number, "customerName"?: string }`.
pub async fn filter_sales(
    State(state): State<AppState>,
    Json(filter): Json<SalesFilter>,
) -> AppResult<Json<Vec<SaleFullRow>>> {
    let rows = SaleQueryRepo::find_sales_by_filter(&state.pool, &filter).await?;

    tracing::debug!(
        id = ?filter.id,
        customer_name = ?filter.customer_name,
        count = rows.len(),
        "Filtered sales",
    );

    Ok(Json(rows))
}

/// GET /sales/dynamic
///
/// Applies a fixed equality filter: `p.id = 1 AND c.id = 1`.
pub async fn list_dynamic_sales(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SaleFullRow>>> {
    let filter = DynamicFilter::new()
        .with("p.id", DYNAMIC_PRODUCT_ID)?
        .with("c.id", DYNAMIC_CUSTOMER_ID)?;

    let rows = SaleQueryRepo::find_sales_by_columns(&state.pool, &filter).await?;

    tracing::debug!(count = rows.len(), "Listed dynamic sales");

    Ok(Json(rows))
}

// ---------------------------------------------------------------------------
// Sale-with-customer summary rows
// ---------------------------------------------------------------------------

/// GET /sales/customers
pub async fn list_sales_customers(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SaleCustomerRow>>> {
    let rows = SaleQueryRepo::find_sales_customers(&state.pool).await?;

    tracing::debug!(count = rows.len(), "Listed sales customers");

    Ok(Json(rows))
}

/// GET /sales/customers/pageable?page=&size=
///
/// Defaults: `page=0`, `size=5`.
pub async fn list_sales_customers_page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Page<SaleCustomerRow>>> {
    let request = params.to_page_request()?;
    let page = SaleQueryRepo::find_sales_customers_page(&state.pool, request).await?;

    tracing::debug!(
        page = request.page(),
        size = request.size(),
        total = page.total_elements,
        "Listed sales customers page",
    );

    Ok(Json(page))
}
