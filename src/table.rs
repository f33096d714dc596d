use crate::models::AlertRecord;
use serde::Serialize;

pub const ALERT_HEADERS: [&str; 5] = ["Urgency", "Type", "Category", "Product Name", "Effective Date"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTag {
    Critical,
    Warning,
    None,
}

impl UrgencyTag {
    /// Case-sensitive: only the exact strings `Critical` and `Warning` are tagged.
    pub fn classify(urgency: &str) -> Self {
        match urgency {
            "Critical" => Self::Critical,
            "Warning" => Self::Warning,
            _ => Self::None,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::None => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertRow {
    pub tag: UrgencyTag,
    pub urgency: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub product: String,
    #[serde(rename = "effective-date")]
    pub effective_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertTable {
    pub headers: [&'static str; 5],
    pub rows: Vec<AlertRow>,
}

impl From<&AlertRecord> for AlertRow {
    fn from(alert: &AlertRecord) -> Self {
        Self {
            tag: UrgencyTag::classify(&alert.urgency),
            urgency: alert.urgency.clone(),
            kind: alert.kind.clone(),
            category: alert.category.clone(),
            product: alert.product.clone(),
            effective_date: alert.effective_date.clone(),
        }
    }
}

/// One row per alert, in input order.
pub fn build_rows(alerts: &[AlertRecord]) -> Vec<AlertRow> {
    alerts.iter().map(AlertRow::from).collect()
}

pub fn build_table(alerts: &[AlertRecord]) -> AlertTable {
    AlertTable {
        headers: ALERT_HEADERS,
        rows: build_rows(alerts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(urgency: &str, product: &str) -> AlertRecord {
        AlertRecord {
            urgency: urgency.to_string(),
            kind: "Expiration".to_string(),
            category: "Gloves".to_string(),
            product: product.to_string(),
            effective_date: "2025-04-01".to_string(),
        }
    }

    #[test]
    fn rows_preserve_order_and_length() {
        let alerts = vec![alert("Warning", "A"), alert("Critical", "B"), alert("Info", "C")];
        let rows = build_rows(&alerts);
        assert_eq!(rows.len(), 3);
        let products: Vec<_> = rows.iter().map(|row| row.product.as_str()).collect();
        assert_eq!(products, ["A", "B", "C"]);
        assert_eq!(rows[1], AlertRow::from(&alerts[1]));
    }

    #[test]
    fn fields_pass_through_unchanged() {
        let rows = build_rows(&[alert("Critical", "Nitrile Gloves")]);
        let row = &rows[0];
        assert_eq!(row.urgency, "Critical");
        assert_eq!(row.kind, "Expiration");
        assert_eq!(row.category, "Gloves");
        assert_eq!(row.product, "Nitrile Gloves");
        assert_eq!(row.effective_date, "2025-04-01");
    }

    #[test]
    fn urgency_tag_is_case_sensitive() {
        assert_eq!(UrgencyTag::classify("Critical"), UrgencyTag::Critical);
        assert_eq!(UrgencyTag::classify("Warning"), UrgencyTag::Warning);
        assert_eq!(UrgencyTag::classify("critical"), UrgencyTag::None);
        assert_eq!(UrgencyTag::classify("WARNING"), UrgencyTag::None);
        assert_eq!(UrgencyTag::classify(" Critical"), UrgencyTag::None);
        assert_eq!(UrgencyTag::classify(""), UrgencyTag::None);
        assert_eq!(UrgencyTag::None.css_class(), "");
    }

    #[test]
    fn empty_input_gives_header_only_table() {
        let table = build_table(&[]);
        assert!(table.rows.is_empty());
        assert_eq!(table.headers[3], "Product Name");
    }

    #[test]
    fn large_inputs_do_not_recurse() {
        let alerts: Vec<_> = (0..200_000).map(|i| alert("Warning", &i.to_string())).collect();
        let rows = build_rows(&alerts);
        assert_eq!(rows.len(), alerts.len());
        assert_eq!(rows.last().map(|row| row.product.as_str()), Some("199999"));
    }
}
