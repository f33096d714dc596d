pub mod aggregate;
pub mod align;
pub mod app;
pub mod chart;
pub mod config;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod models;
pub mod month;
pub mod reports;
pub mod state;
pub mod storage;
pub mod table;
pub mod ui;
pub mod window;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::load_store;
