use crate::models::CategorySeries;
use crate::month::MonthKey;
use crate::window::MonthWindow;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonthCounts {
    pub orders: u64,
    pub usages: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignedSeries {
    pub category: String,
    pub points: Vec<MonthCounts>,
}

/// Looks up each window month by exact key. Months without a record are
/// `(0, 0)`; when a month appears more than once the first record wins.
pub fn align_series(series: &CategorySeries, window: &MonthWindow) -> AlignedSeries {
    let points = window
        .months()
        .iter()
        .map(|month| {
            series
                .data
                .iter()
                .find(|record| record.month == *month)
                .map(|record| MonthCounts {
                    orders: record.orders,
                    usages: record.usages,
                })
                .unwrap_or_default()
        })
        .collect();

    AlignedSeries {
        category: series.category.clone(),
        points,
    }
}

pub fn duplicate_months(series: &CategorySeries) -> Vec<MonthKey> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    series
        .data
        .iter()
        .filter(|record| !seen.insert(record.month) && reported.insert(record.month))
        .map(|record| record.month)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthRecord;

    fn key(value: &str) -> MonthKey {
        value.parse().unwrap()
    }

    fn record(month: &str, orders: u64, usages: u64) -> MonthRecord {
        MonthRecord {
            month: key(month),
            orders,
            usages,
        }
    }

    fn gloves(data: Vec<MonthRecord>) -> CategorySeries {
        CategorySeries {
            category: "Gloves".to_string(),
            data,
        }
    }

    #[test]
    fn single_record_lands_on_final_index() {
        let series = gloves(vec![record("2024-03", 5, 2)]);
        let window = MonthWindow::ending_at(key("2024-03"));
        let aligned = align_series(&series, &window);

        assert_eq!(window.labels()[0], "2023-04");
        assert_eq!(aligned.category, "Gloves");
        assert_eq!(aligned.points.len(), 12);
        assert!(aligned.points[..11].iter().all(|p| *p == MonthCounts::default()));
        assert_eq!(aligned.points[11], MonthCounts { orders: 5, usages: 2 });
    }

    #[test]
    fn records_outside_window_are_ignored() {
        let series = gloves(vec![
            record("2022-01", 9, 9),
            record("2024-01", 1, 0),
            record("2023-05", 0, 4),
        ]);
        let window = MonthWindow::ending_at(key("2024-03"));
        let aligned = align_series(&series, &window);

        assert_eq!(aligned.points[1], MonthCounts { orders: 0, usages: 4 });
        assert_eq!(aligned.points[9], MonthCounts { orders: 1, usages: 0 });
        let total: u64 = aligned.points.iter().map(|p| p.orders + p.usages).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn first_duplicate_wins_and_is_reported() {
        let series = gloves(vec![
            record("2024-03", 1, 1),
            record("2024-02", 2, 2),
            record("2024-03", 7, 7),
            record("2024-03", 8, 8),
        ]);
        let window = MonthWindow::ending_at(key("2024-03"));
        let aligned = align_series(&series, &window);

        assert_eq!(aligned.points[11], MonthCounts { orders: 1, usages: 1 });
        assert_eq!(duplicate_months(&series), vec![key("2024-03")]);
        assert!(duplicate_months(&gloves(vec![record("2024-01", 1, 1)])).is_empty());
    }

    #[test]
    fn alignment_is_repeatable() {
        let series = gloves(vec![record("2024-03", 5, 2), record("2023-12", 1, 3)]);
        let window = MonthWindow::ending_at(key("2024-03"));
        assert_eq!(align_series(&series, &window), align_series(&series, &window));
    }
}
