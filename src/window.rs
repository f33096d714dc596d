use crate::models::CategorySeries;
use crate::month::MonthKey;
use serde::Serialize;

pub const WINDOW_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MonthWindow {
    months: [MonthKey; WINDOW_LEN],
}

impl MonthWindow {
    /// Anchors earlier than the twelfth month of year 1 are moved up to it,
    /// so every label stays a valid key.
    pub fn ending_at(anchor: MonthKey) -> Self {
        let back = WINDOW_LEN as i32 - 1;
        let first = anchor.max(MonthKey::MIN.offset(back)).offset(-back);
        Self {
            months: std::array::from_fn(|i| first.offset(i as i32)),
        }
    }

    pub fn for_series(series: &[CategorySeries], fallback: MonthKey) -> Self {
        Self::ending_at(latest_month(series).unwrap_or(fallback))
    }

    pub fn anchor(&self) -> MonthKey {
        self.months[WINDOW_LEN - 1]
    }

    pub fn months(&self) -> &[MonthKey] {
        &self.months
    }

    pub fn labels(&self) -> Vec<String> {
        self.months.iter().map(ToString::to_string).collect()
    }
}

pub fn latest_month(series: &[CategorySeries]) -> Option<MonthKey> {
    series
        .iter()
        .flat_map(|chart| chart.data.iter().map(|record| record.month))
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthRecord;

    fn key(value: &str) -> MonthKey {
        value.parse().unwrap()
    }

    fn series(category: &str, months: &[&str]) -> CategorySeries {
        CategorySeries {
            category: category.to_string(),
            data: months
                .iter()
                .map(|month| MonthRecord {
                    month: key(month),
                    orders: 1,
                    usages: 1,
                })
                .collect(),
        }
    }

    #[test]
    fn window_is_twelve_ascending_consecutive_months() {
        let window = MonthWindow::ending_at(key("2024-03"));
        let months = window.months();
        assert_eq!(months.len(), WINDOW_LEN);
        assert_eq!(months[0], key("2023-04"));
        assert_eq!(window.anchor(), key("2024-03"));
        for pair in months.windows(2) {
            assert_eq!(pair[0].next(), pair[1]);
        }
    }

    #[test]
    fn anchors_on_latest_month_across_categories() {
        let charts = vec![
            series("Gloves", &["2024-01", "2023-06"]),
            series("Masks", &["2024-05", "2024-02"]),
            series("Gowns", &[]),
        ];
        let window = MonthWindow::for_series(&charts, key("2030-01"));
        assert_eq!(window.anchor(), key("2024-05"));
        assert_eq!(window.labels().first().map(String::as_str), Some("2023-06"));
    }

    #[test]
    fn empty_input_uses_fallback_anchor() {
        let charts = vec![series("Gloves", &[])];
        let window = MonthWindow::for_series(&charts, key("2026-10"));
        assert_eq!(window.anchor(), key("2026-10"));
        assert_eq!(window.months()[0], key("2025-11"));
        assert_eq!(MonthWindow::for_series(&[], key("2026-10")), window);
    }

    #[test]
    fn earliest_anchor_keeps_labels_parseable() {
        let window = MonthWindow::ending_at(key("0001-03"));
        assert_eq!(window.months()[0], MonthKey::MIN);
        assert_eq!(window.anchor(), key("0001-12"));
        for label in window.labels() {
            assert!(label.parse::<MonthKey>().is_ok(), "unparseable {label}");
        }

        let latest = MonthWindow::ending_at(MonthKey::MAX);
        assert_eq!(latest.months()[0], key("9999-01"));
    }

    #[test]
    fn serializes_as_label_list() {
        let window = MonthWindow::ending_at(key("2025-01"));
        let json = serde_json::to_value(&window).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 12);
        assert_eq!(json[0], "2024-02");
        assert_eq!(json[11], "2025-01");
    }
}
