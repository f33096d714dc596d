use crate::align::{align_series, duplicate_months, AlignedSeries};
use crate::models::ChartsPayload;
use crate::month::MonthKey;
use crate::window::MonthWindow;
use serde::Serialize;
use tracing::warn;

pub const PURCHASE_LABEL: &str = "Purchase Frequency";
pub const USAGE_LABEL: &str = "Usage Frequency";
pub const PURCHASE_COLOR: &str = "#25bac3";
pub const USAGE_COLOR: &str = "rgba(255, 179, 0, 0.7)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub label: &'static str,
    pub color: &'static str,
    pub data: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub category: String,
    pub labels: Vec<String>,
    pub datasets: [ChartDataset; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartsView {
    pub months: MonthWindow,
    pub charts: Vec<ChartView>,
}

impl ChartView {
    pub fn purchased(&self) -> &[u64] {
        &self.datasets[0].data
    }

    pub fn used(&self) -> &[u64] {
        &self.datasets[1].data
    }
}

pub fn project(aligned: &AlignedSeries, window: &MonthWindow) -> ChartView {
    let (purchased, used): (Vec<u64>, Vec<u64>) = aligned
        .points
        .iter()
        .map(|point| (point.orders, point.usages))
        .unzip();

    ChartView {
        category: aligned.category.clone(),
        labels: window.labels(),
        datasets: [
            ChartDataset {
                label: PURCHASE_LABEL,
                color: PURCHASE_COLOR,
                data: purchased,
            },
            ChartDataset {
                label: USAGE_LABEL,
                color: USAGE_COLOR,
                data: used,
            },
        ],
    }
}

// `current` anchors the window when the payload has no records.
pub fn build_charts(payload: &ChartsPayload, current: MonthKey) -> ChartsView {
    let window = MonthWindow::for_series(&payload.charts, current);

    let charts = payload
        .charts
        .iter()
        .map(|series| {
            for month in duplicate_months(series) {
                warn!(category = %series.category, %month, "duplicate month records, keeping the first");
            }
            project(&align_series(series, &window), &window)
        })
        .collect();

    ChartsView {
        months: window,
        charts,
    }
}
