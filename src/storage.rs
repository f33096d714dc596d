use crate::errors::AppError;
use crate::models::Store;
use std::path::Path;
use tokio::fs;
use tracing::{error, info};

pub async fn load_store(path: &Path) -> Store {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<Store>(&bytes) {
            Ok(store) => {
                info!(
                    categories = store.categories.len(),
                    products = store.products.len(),
                    orders = store.orders.len(),
                    usages = store.usages.len(),
                    "loaded store"
                );
                store
            }
            Err(err) => {
                error!("failed to parse store file: {err}");
                Store::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Store::default(),
        Err(err) => {
            error!("failed to read store file: {err}");
            Store::default()
        }
    }
}

pub async fn persist_store(path: &Path, store: &Store) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(store).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
