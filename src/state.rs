use crate::config::AlertThresholds;
use crate::models::Store;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub store: Arc<Mutex<Store>>,
    pub thresholds: AlertThresholds,
}

impl AppState {
    pub fn new(data_path: PathBuf, store: Store, thresholds: AlertThresholds) -> Self {
        Self {
            data_path,
            store: Arc::new(Mutex::new(store)),
            thresholds,
        }
    }
}
