use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/dashboard", get(handlers::dashboard))
        .route("/api/dashboard-chart-data", get(handlers::chart_data))
        .route("/api/dashboard-chart-view", get(handlers::chart_view))
        .route("/api/dashboard-table-data", get(handlers::table_data))
        .route("/api/dashboard-table-rows", get(handlers::table_rows))
        .route("/api/form-product-data", get(handlers::product_data))
        .route("/api/usage-report", post(handlers::usage_report))
        .route("/api/purchase-report", post(handlers::purchase_report))
        .with_state(state)
}
