pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod models;
pub mod queries;
pub mod server;
pub mod state;
pub mod validation;

pub use config::Config;
pub use error::{Error, Result};
pub use queries::{Storage, Store};
pub use state::AppState;

/// Load configuration from environment variables
pub fn load_config() -> Result<Config> {
    Ok(Config::load()?)
}
