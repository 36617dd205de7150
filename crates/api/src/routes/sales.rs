//! Route definitions for the sales queries.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::sales;
use crate::state::AppState;

/// Sales routes mounted at `/sales`.
///
/// ```text
/// GET    /                          -> list_sales
/// GET    /customer/{customer_id}    -> list_sales_by_customer
/// POST   /filter                    -> filter_sales
/// GET    /dynamic                   -> list_dynamic_sales
/// GET    /customers                 -> list_sales_customers
/// GET    /customers/pageable        -> list_sales_customers_page
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sales::list_sales))
        .route("/customer/{customer_id}", get(sales::list_sales_by_customer))
        .route("/filter", post(sales::filter_sales))
        .route("/dynamic", get(sales::list_dynamic_sales))
        .route("/customers", get(sales::list_sales_customers))
        .route("/customers/pageable", get(sales::list_sales_customers_page))
}
