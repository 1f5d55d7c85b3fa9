pub mod app;
pub mod config;
pub mod errors;
pub mod format;
pub mod handlers;
pub mod models;
pub mod state;
pub mod ui;
pub mod view;

pub use app::router;
pub use config::driver_from_env;
pub use state::AppState;
