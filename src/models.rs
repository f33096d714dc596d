use crate::month::MonthKey;
use serde::{Deserialize, Serialize};

// Store

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Store {
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
    #[serde(default)]
    pub products: Vec<ProductRecord>,
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
    #[serde(default)]
    pub usages: Vec<UsageRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub products: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(default)]
    pub products: Vec<String>,
    pub order_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageRecord {
    #[serde(default)]
    pub products: Vec<String>,
    pub usage_date: String,
}

// Chart data

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ChartsPayload {
    pub charts: Vec<CategorySeries>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySeries {
    pub category: String,
    pub data: Vec<MonthRecord>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthRecord {
    pub month: MonthKey,
    pub orders: u64,
    pub usages: u64,
}

// Alerts

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AlertsPayload {
    pub alerts: Vec<AlertRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertRecord {
    pub urgency: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub product: String,
    #[serde(rename = "effective-date")]
    pub effective_date: String,
}

// Products and reports

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductsPayload {
    pub products: Vec<ProductRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UsageReportRequest {
    #[serde(default)]
    pub items: Vec<UsageReportItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsageReportItem {
    #[serde(default)]
    pub product: String,
    #[serde(rename = "usageDate", default)]
    pub usage_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PurchaseReportRequest {
    #[serde(default)]
    pub items: Vec<PurchaseReportItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseReportItem {
    #[serde(default)]
    pub product: String,
    #[serde(rename = "orderDate", default)]
    pub order_date: String,
    #[serde(rename = "expirationDate", default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportResponse {
    pub status: u16,
    pub message: String,
}
