use crate::aggregate::{alerts_payload, chart_payload};
use crate::chart::{build_charts, ChartsView};
use crate::errors::AppError;
use crate::models::{
    AlertsPayload, ChartsPayload, ProductsPayload, PurchaseReportRequest, ReportResponse, Store,
    UsageReportRequest,
};
use crate::month::MonthKey;
use crate::reports::{order_records, submitted, usage_records, PURCHASE_SUBMITTED, USAGE_SUBMITTED};
use crate::state::AppState;
use crate::storage::persist_store;
use crate::table::{build_table, AlertTable};
use crate::ui::render_dashboard;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};
use chrono::{Local, NaiveDate};
use tracing::{error, info};

pub async fn root() -> Redirect {
    Redirect::to("/dashboard")
}

pub async fn dashboard(State(state): State<AppState>) -> Html<String> {
    let today = today();
    let store = state.store.lock().await;

    let charts = charts_view(&store, today).map_err(|err| {
        error!("chart section failed: {}", err.message);
        err.message
    });
    let table = alerts(&state, &store, today)
        .map(|payload| build_table(&payload.alerts))
        .map_err(|err| {
            error!("alert section failed: {}", err.message);
            err.message
        });

    Html(render_dashboard(
        charts.as_ref().map_err(String::as_str),
        table.as_ref().map_err(String::as_str),
    ))
}

pub async fn chart_data(State(state): State<AppState>) -> Result<Json<ChartsPayload>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(chart_payload(&store)?))
}

pub async fn chart_view(State(state): State<AppState>) -> Result<Json<ChartsView>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(charts_view(&store, today())?))
}

pub async fn table_data(State(state): State<AppState>) -> Result<Json<AlertsPayload>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(alerts(&state, &store, today())?))
}

pub async fn table_rows(State(state): State<AppState>) -> Result<Json<AlertTable>, AppError> {
    let store = state.store.lock().await;
    let payload = alerts(&state, &store, today())?;
    Ok(Json(build_table(&payload.alerts)))
}

pub async fn product_data(State(state): State<AppState>) -> Json<ProductsPayload> {
    let store = state.store.lock().await;
    Json(ProductsPayload {
        products: store.products.clone(),
    })
}

pub async fn usage_report(
    State(state): State<AppState>,
    Json(payload): Json<UsageReportRequest>,
) -> Result<Json<ReportResponse>, AppError> {
    let mut store = state.store.lock().await;
    let records = usage_records(&store, &payload)?;
    let count = records.len();

    let mut next = store.clone();
    next.usages.extend(records);
    persist_store(&state.data_path, &next).await?;
    *store = next;

    info!(items = count, "usage report stored");
    Ok(Json(submitted(USAGE_SUBMITTED)))
}

pub async fn purchase_report(
    State(state): State<AppState>,
    Json(payload): Json<PurchaseReportRequest>,
) -> Result<Json<ReportResponse>, AppError> {
    let mut store = state.store.lock().await;
    let records = order_records(&store, &payload)?;
    let count = records.len();

    let mut next = store.clone();
    next.orders.extend(records);
    persist_store(&state.data_path, &next).await?;
    *store = next;

    info!(items = count, "purchase report stored");
    Ok(Json(submitted(PURCHASE_SUBMITTED)))
}

fn charts_view(store: &Store, today: NaiveDate) -> Result<ChartsView, AppError> {
    let payload = chart_payload(store)?;
    Ok(build_charts(&payload, MonthKey::from_date(today).unwrap_or(MonthKey::MAX)))
}

fn alerts(state: &AppState, store: &Store, today: NaiveDate) -> Result<AlertsPayload, AppError> {
    Ok(alerts_payload(store, state.thresholds, today)?)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
