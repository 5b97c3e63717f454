pub mod clients;
pub mod config;
pub mod defects;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod normalize;
pub mod services;
pub mod utils;

pub use config::Settings;
pub use error::{Error, Result};
pub use fixtures::{CreatedItem, Harness};
pub use models::{ItemPayload, ItemRecord, ItemStatistics};
pub use normalize::CreatedId;
pub use services::ItemApi;
