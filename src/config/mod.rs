//! Configuration loading and management for the playroom engine.
//!
//! This module loads the venue configuration from YAML files: venue
//! metadata, the tariff table with its accessory fee, and the catalog
//! lists used by the session form.
//!
//! # Example
//!
//! ```no_run
//! use playroom_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/sala_ruiz").unwrap();
//! println!("Loaded venue: {}", config.venue().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CatalogConfig, MatchKind, PagingConfig, TariffRule, TariffsConfig, VenueConfig, VenueMetadata,
};
