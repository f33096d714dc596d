use crate::models::{ProductRecord, ReportResponse, UsageReportItem, UsageReportRequest};
use crate::month::DAY_FORMAT;
use chrono::NaiveDate;
use std::fmt;

pub const SUBMITTED_NOTICE: &str = "Form submitted successfully!";
pub const REJECTED_NOTICE: &str = "Failed to submit the form. Please try again.";
pub const TRANSPORT_NOTICE: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormItem {
    pub id: ItemId,
    pub product: Option<String>,
    pub usage_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    UnknownItem(ItemId),
    UnknownProduct(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownItem(id) => write!(f, "no form item with id {}", id.0),
            Self::UnknownProduct(product) => write!(f, "product '{product}' is not selectable"),
        }
    }
}

impl std::error::Error for FormError {}

#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Response {
        http_status: u16,
        body: Option<ReportResponse>,
    },
    Transport(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Submitted,
    Rejected,
    TransportError,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Self::Submitted => SUBMITTED_NOTICE,
            Self::Rejected => REJECTED_NOTICE,
            Self::TransportError => TRANSPORT_NOTICE,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReportForm {
    products: Vec<ProductRecord>,
    items: Vec<FormItem>,
    next_id: u32,
}

impl ReportForm {
    pub fn new(products: Vec<ProductRecord>) -> Self {
        let mut form = Self {
            products,
            ..Self::default()
        };
        if !form.products.is_empty() {
            form.add_item();
        }
        form
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn items(&self) -> &[FormItem] {
        &self.items
    }

    pub fn add_item(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push(FormItem {
            id,
            product: None,
            usage_date: None,
        });
        id
    }

    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn select_product(&mut self, id: ItemId, product: &str) -> Result<(), FormError> {
        if !self.products.iter().any(|p| p.id == product) {
            return Err(FormError::UnknownProduct(product.to_string()));
        }
        self.item_mut(id)?.product = Some(product.to_string());
        Ok(())
    }

    pub fn set_usage_date(&mut self, id: ItemId, date: NaiveDate) -> Result<(), FormError> {
        self.item_mut(id)?.usage_date = Some(date);
        Ok(())
    }

    /// Encodes the items in display order. Unset fields become empty strings,
    /// which the server rejects.
    pub fn collect(&self) -> UsageReportRequest {
        UsageReportRequest {
            items: self
                .items
                .iter()
                .map(|item| UsageReportItem {
                    product: item.product.clone().unwrap_or_default(),
                    usage_date: item
                        .usage_date
                        .map(|date| date.format(DAY_FORMAT).to_string())
                        .unwrap_or_default(),
                })
                .collect(),
        }
    }

    pub fn reset(&mut self, products: Vec<ProductRecord>) {
        self.products = products;
        self.items.clear();
        self.add_item();
    }

    pub fn apply_outcome(&mut self, outcome: SubmitOutcome) -> Notice {
        match outcome {
            SubmitOutcome::Response {
                http_status,
                body: Some(body),
            } if (200..300).contains(&http_status) && body.status == 200 => {
                let products = std::mem::take(&mut self.products);
                self.reset(products);
                Notice::Submitted
            }
            SubmitOutcome::Response { .. } => Notice::Rejected,
            SubmitOutcome::Transport(_) => Notice::TransportError,
        }
    }

    fn item_mut(&mut self, id: ItemId) -> Result<&mut FormItem, FormError> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(FormError::UnknownItem(id))
    }
}
