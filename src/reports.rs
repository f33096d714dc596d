use crate::errors::AppError;
use crate::models::{
    OrderRecord, PurchaseReportRequest, ReportResponse, Store, UsageRecord, UsageReportRequest,
};
use crate::month::{parse_day, DAY_FORMAT};
use chrono::NaiveDate;

pub const USAGE_SUBMITTED: &str = "Usage report submitted successfully";
pub const PURCHASE_SUBMITTED: &str = "Report submitted successfully";

fn require_items<T>(items: &[T]) -> Result<(), AppError> {
    if items.is_empty() {
        return Err(AppError::bad_request("Invalid data or missing items"));
    }
    Ok(())
}

fn require_day(value: &str) -> Result<NaiveDate, AppError> {
    parse_day(value).ok_or_else(|| AppError::bad_request(format!("Invalid date format: {value}")))
}

fn require_product(store: &Store, id: &str) -> Result<(), AppError> {
    if store.products.iter().any(|product| product.id == id) {
        Ok(())
    } else {
        Err(AppError::bad_request(format!("Product '{id}' not found")))
    }
}

/// Validates every item, then converts them to usage records. Nothing is
/// returned unless the whole request is valid.
pub fn usage_records(store: &Store, request: &UsageReportRequest) -> Result<Vec<UsageRecord>, AppError> {
    require_items(&request.items)?;

    request
        .items
        .iter()
        .map(|item| {
            if item.product.trim().is_empty() || item.usage_date.trim().is_empty() {
                return Err(AppError::bad_request("Missing product or usage date"));
            }
            let used = require_day(&item.usage_date)?;
            require_product(store, &item.product)?;
            Ok(UsageRecord {
                products: vec![item.product.clone()],
                usage_date: used.format(DAY_FORMAT).to_string(),
            })
        })
        .collect()
}

pub fn order_records(store: &Store, request: &PurchaseReportRequest) -> Result<Vec<OrderRecord>, AppError> {
    require_items(&request.items)?;

    request
        .items
        .iter()
        .map(|item| {
            if item.product.trim().is_empty() || item.order_date.trim().is_empty() {
                return Err(AppError::bad_request("Missing product or order date"));
            }
            let ordered = require_day(&item.order_date)?;
            let expires = match item.expiration_date.as_deref().map(str::trim) {
                Some(raw) if !raw.is_empty() => Some(require_day(raw)?),
                _ => None,
            };
            if expires.is_some_and(|expires| expires < ordered) {
                return Err(AppError::bad_request(
                    "Expiration date cannot be earlier than order date",
                ));
            }
            require_product(store, &item.product)?;
            Ok(OrderRecord {
                products: vec![item.product.clone()],
                order_date: ordered.format(DAY_FORMAT).to_string(),
                expiration_date: expires.map(|date| date.format(DAY_FORMAT).to_string()),
            })
        })
        .collect()
}

pub fn submitted(message: &str) -> ReportResponse {
    ReportResponse {
        status: 200,
        message: message.to_string(),
    }
}
