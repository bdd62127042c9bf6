//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the venue
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::calculation::TariffTable;
use crate::error::{EngineError, EngineResult};

use super::types::{CatalogConfig, TariffsConfig, VenueConfig, VenueMetadata};

/// Loads and provides access to the venue configuration.
///
/// # Directory Structure
///
/// ```text
/// config/sala_ruiz/
/// ├── venue.yaml     # Venue name and currency
/// ├── tariffs.yaml   # Hourly tariffs and accessory fee
/// └── catalog.yaml   # Locations, games, paging and debounce settings
/// ```
///
/// # Example
///
/// ```no_run
/// use playroom_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/sala_ruiz").unwrap();
/// let rate = loader.tariffs().rate_for("Play 5 número 1");
/// println!("Hourly rate: {}", rate);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: VenueConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<VenueMetadata>(&path.join("venue.yaml"))?;
        let tariffs = Self::load_yaml::<TariffsConfig>(&path.join("tariffs.yaml"))?;
        let catalog = Self::load_yaml::<CatalogConfig>(&path.join("catalog.yaml"))?;

        if catalog.paging.sales_page_size == 0
            || catalog.paging.plays_page_size == 0
            || catalog.paging.public_page_size == 0
        {
            return Err(EngineError::ConfigParseError {
                path: path.join("catalog.yaml").display().to_string(),
                message: "page sizes must be greater than zero".to_string(),
            });
        }

        if let Some(rule) = tariffs.rules.iter().find(|r| r.pattern.trim().is_empty()) {
            return Err(EngineError::ConfigParseError {
                path: path.join("tariffs.yaml").display().to_string(),
                message: format!(
                    "tariff rule with rate {} has an empty pattern",
                    rule.hourly_rate
                ),
            });
        }

        debug!(
            venue = %metadata.name,
            tariff_rules = tariffs.rules.len(),
            locations = catalog.locations.len(),
            "Loaded venue configuration"
        );

        Ok(Self {
            config: VenueConfig::new(metadata, tariffs, catalog),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying venue configuration.
    pub fn config(&self) -> &VenueConfig {
        &self.config
    }

    /// Returns the venue metadata.
    pub fn venue(&self) -> &VenueMetadata {
        self.config.venue()
    }

    /// Returns the tariff table.
    pub fn tariffs(&self) -> &TariffTable {
        self.config.tariffs()
    }

    /// Returns the fee charged per extra controller.
    pub fn accessory_fee(&self) -> u32 {
        self.config.accessory_fee()
    }

    /// Returns true if `location` is one of the configured rentable locations.
    pub fn is_known_location(&self, location: &str) -> bool {
        self.config
            .catalog()
            .locations
            .iter()
            .any(|l| l == location)
    }
}
