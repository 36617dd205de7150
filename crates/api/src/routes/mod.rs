pub mod health;
pub mod sales;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /sales                                           all sale-with-items rows
/// /sales/customer/{customer_id}                    rows for one customer
/// /sales/filter                                    rows matching a filter (POST)
/// /sales/dynamic                                   rows for product 1, customer 1
/// /sales/customers                                 all summary rows
/// /sales/customers/pageable                        one page of summary rows
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/sales", sales::router())
}
