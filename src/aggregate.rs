use crate::config::AlertThresholds;
use crate::errors::DataError;
use crate::models::{AlertRecord, AlertsPayload, CategorySeries, ChartsPayload, MonthRecord, Store};
use crate::month::{parse_day, MonthKey};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

pub const EXPIRATION_ALERT: &str = "Expiration";

fn stored_day(field: &'static str, value: &str) -> Result<NaiveDate, DataError> {
    parse_day(value).ok_or_else(|| DataError {
        field,
        value: value.to_string(),
    })
}

fn stored_month(field: &'static str, value: &str) -> Result<MonthKey, DataError> {
    MonthKey::from_date(stored_day(field, value)?).ok_or_else(|| DataError {
        field,
        value: value.to_string(),
    })
}

/// Product id to category id. A product listed under several categories
/// belongs to the last one.
fn product_categories(store: &Store) -> HashMap<&str, &str> {
    let mut map = HashMap::new();
    for category in &store.categories {
        for product in &category.products {
            map.insert(product.as_str(), category.id.as_str());
        }
    }
    map
}

/// Monthly order and usage counts per category, one chart per category.
pub fn chart_payload(store: &Store) -> Result<ChartsPayload, DataError> {
    let category_of = product_categories(store);
    let mut counts: HashMap<&str, BTreeMap<MonthKey, (u64, u64)>> = HashMap::new();

    for order in &store.orders {
        let month = stored_month("order date", &order.order_date)?;
        for product in &order.products {
            if let Some(category) = category_of.get(product.as_str()) {
                counts.entry(*category).or_default().entry(month).or_default().0 += 1;
            }
        }
    }

    for usage in &store.usages {
        let month = stored_month("usage date", &usage.usage_date)?;
        for product in &usage.products {
            if let Some(category) = category_of.get(product.as_str()) {
                counts.entry(*category).or_default().entry(month).or_default().1 += 1;
            }
        }
    }

    // A repeated category id keeps its first position and takes the last name.
    let mut named: Vec<(&str, &str)> = Vec::new();
    for category in &store.categories {
        match named.iter_mut().find(|(id, _)| *id == category.id.as_str()) {
            Some(entry) => entry.1 = category.name.as_str(),
            None => named.push((category.id.as_str(), category.name.as_str())),
        }
    }

    let charts = named
        .into_iter()
        .map(|(id, name)| CategorySeries {
            category: name.to_string(),
            data: counts
                .get(id)
                .map(|months| {
                    months
                        .iter()
                        .map(|(month, (orders, usages))| MonthRecord {
                            month: *month,
                            orders: *orders,
                            usages: *usages,
                        })
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect();

    Ok(ChartsPayload { charts })
}

/// Alerts for products whose earliest expiration falls within the thresholds.
pub fn alerts_payload(
    store: &Store,
    thresholds: AlertThresholds,
    today: NaiveDate,
) -> Result<AlertsPayload, DataError> {
    // Position follows the first listing, the category follows the last.
    let mut listed: Vec<(&str, &str)> = Vec::new();
    for category in &store.categories {
        for product in &category.products {
            match listed.iter_mut().find(|(id, _)| *id == product.as_str()) {
                Some(entry) => entry.1 = category.name.as_str(),
                None => listed.push((product.as_str(), category.name.as_str())),
            }
        }
    }

    let mut earliest: HashMap<&str, (NaiveDate, &str)> = HashMap::new();
    for order in &store.orders {
        let Some(raw) = order.expiration_date.as_deref() else {
            continue;
        };
        let expires = stored_day("expiration date", raw)?;
        for product in &order.products {
            let entry = earliest.entry(product.as_str()).or_insert((expires, raw));
            if expires < entry.0 {
                *entry = (expires, raw);
            }
        }
    }

    let mut alerts = Vec::new();
    for (product_id, category) in listed {
        let Some((expires, raw)) = earliest.get(product_id) else {
            continue;
        };
        let days = (*expires - today).num_days();
        let urgency = if days <= thresholds.critical_days {
            "Critical"
        } else if days <= thresholds.warning_days {
            "Warning"
        } else {
            continue;
        };
        let Some(product) = store.products.iter().find(|p| p.id == product_id) else {
            continue;
        };
        alerts.push(AlertRecord {
            urgency: urgency.to_string(),
            kind: EXPIRATION_ALERT.to_string(),
            category: category.to_string(),
            product: product.name.clone(),
            effective_date: raw.to_string(),
        });
    }

    Ok(AlertsPayload { alerts })
}
