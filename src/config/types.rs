//! Configuration types for the venue.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::calculation::TariffTable;

/// Metadata about the venue.
#[derive(Debug, Clone, Deserialize)]
pub struct VenueMetadata {
    /// The venue's display name.
    pub name: String,
    /// The currency code prices are expressed in (e.g., "CRC").
    pub currency: String,
}

impl Default for VenueMetadata {
    fn default() -> Self {
        Self {
            name: "Sala de Juegos Ruiz".to_string(),
            currency: "CRC".to_string(),
        }
    }
}

/// How a tariff rule matches a location name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// The location name contains the pattern.
    Contains,
    /// The location name equals the pattern.
    Equals,
}

/// A single tariff rule: a location pattern and its hourly rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffRule {
    /// How the pattern is matched.
    #[serde(rename = "match")]
    pub kind: MatchKind,
    /// The location pattern.
    pub pattern: String,
    /// Hourly rate in whole currency units.
    pub hourly_rate: u32,
}

impl TariffRule {
    /// Creates a rule matching locations that contain `pattern`.
    pub fn contains(pattern: impl Into<String>, hourly_rate: u32) -> Self {
        Self {
            kind: MatchKind::Contains,
            pattern: pattern.into(),
            hourly_rate,
        }
    }

    /// Creates a rule matching locations equal to `pattern`.
    pub fn equals(pattern: impl Into<String>, hourly_rate: u32) -> Self {
        Self {
            kind: MatchKind::Equals,
            pattern: pattern.into(),
            hourly_rate,
        }
    }

    /// Returns true if this rule applies to the location.
    pub fn matches(&self, location: &str) -> bool {
        match self.kind {
            MatchKind::Contains => location.contains(&self.pattern),
            MatchKind::Equals => location == self.pattern,
        }
    }
}

/// Tariff configuration file structure (`tariffs.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct TariffsConfig {
    /// Fee charged per extra controller, in whole currency units.
    pub accessory_fee: u32,
    /// Tariff rules in priority order.
    pub rules: Vec<TariffRule>,
}

impl Default for TariffsConfig {
    fn default() -> Self {
        Self {
            accessory_fee: 200,
            rules: vec![
                TariffRule::contains("Play 5", 1000),
                TariffRule::contains("Play 4", 800),
                TariffRule::equals("Ping Pong", 800),
            ],
        }
    }
}

/// Page sizes for the different list views.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PagingConfig {
    /// Items revealed per step in the sales catalog.
    pub sales_page_size: usize,
    /// Rows per page in the plays table.
    pub plays_page_size: usize,
    /// Items per page in the public catalog.
    pub public_page_size: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            sales_page_size: 10,
            plays_page_size: 5,
            public_page_size: 12,
        }
    }
}

/// Catalog configuration file structure (`catalog.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Rentable locations shown in the session form.
    pub locations: Vec<String>,
    /// Games offered in the session form.
    pub games: Vec<String>,
    /// Maximum number of games recorded per session.
    pub max_games: usize,
    /// Debounce delay for search-as-you-type, in milliseconds.
    pub search_debounce_ms: u64,
    /// Page sizes.
    pub paging: PagingConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let locations = [
            "Play 4 número 1",
            "Play 4 número 2",
            "Play 4 número 3",
            "Play 5 número 1",
            "Play 5 número 2",
            "Ping Pong",
        ];
        let games = [
            "Dragon Ball Sparking Zero",
            "FIFA 25",
            "Call of Duty",
            "Mortal Kombat 1",
            "NBA 2K24",
            "GTA V",
            "Minecraft",
            "Fortnite",
            "Rocket League",
            "EA Sports FC 25",
            "Resident Evil",
            "Spider-Man 2",
            "God of War Ragnarök",
        ];
        Self {
            locations: locations.iter().map(|s| s.to_string()).collect(),
            games: games.iter().map(|s| s.to_string()).collect(),
            max_games: 2,
            search_debounce_ms: 500,
            paging: PagingConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Search debounce delay.
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

/// The complete venue configuration.
///
/// Aggregates the venue metadata, the tariff table and the catalog lists.
/// [`VenueConfig::default`] carries the venue's built-in values, so an
/// embedding application can run without a configuration directory.
#[derive(Debug, Clone)]
pub struct VenueConfig {
    metadata: VenueMetadata,
    tariffs: TariffTable,
    accessory_fee: u32,
    catalog: CatalogConfig,
}

impl VenueConfig {
    /// Creates a new VenueConfig from its component parts.
    pub fn new(metadata: VenueMetadata, tariffs: TariffsConfig, catalog: CatalogConfig) -> Self {
        Self {
            metadata,
            tariffs: TariffTable::new(tariffs.rules),
            accessory_fee: tariffs.accessory_fee,
            catalog,
        }
    }

    /// Returns the venue metadata.
    pub fn venue(&self) -> &VenueMetadata {
        &self.metadata
    }

    /// Returns the tariff table.
    pub fn tariffs(&self) -> &TariffTable {
        &self.tariffs
    }

    /// Returns the fee per extra controller.
    pub fn accessory_fee(&self) -> u32 {
        self.accessory_fee
    }

    /// Returns the catalog configuration.
    pub fn catalog(&self) -> &CatalogConfig {
        &self.catalog
    }
}

impl Default for VenueConfig {
    fn default() -> Self {
        Self::new(
            VenueMetadata::default(),
            TariffsConfig::default(),
            CatalogConfig::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_rule_matches_substring() {
        let rule = TariffRule::contains("Play 5", 1000);
        assert!(rule.matches("Play 5 número 1"));
        assert!(!rule.matches("Play 4 número 1"));
    }

    #[test]
    fn test_equals_rule_requires_exact_name() {
        let rule = TariffRule::equals("Ping Pong", 800);
        assert!(rule.matches("Ping Pong"));
        assert!(!rule.matches("Ping Pong 2"));
    }

    #[test]
    fn test_rule_deserializes_from_yaml() {
        let rule: TariffRule =
            serde_yaml::from_str("match: equals\npattern: Ping Pong\nhourly_rate: 800\n").unwrap();
        assert_eq!(rule, TariffRule::equals("Ping Pong", 800));
    }

    #[test]
    fn test_default_config_has_venue_constants() {
        let config = VenueConfig::default();
        assert_eq!(config.accessory_fee(), 200);
        assert_eq!(config.catalog().max_games, 2);
        assert_eq!(config.catalog().search_debounce_ms, 500);
        assert_eq!(config.catalog().paging.sales_page_size, 10);
        assert_eq!(config.catalog().locations.len(), 6);
        assert_eq!(config.tariffs().rate_for("Play 5 número 2"), 1000);
    }
}
