// Engine settings, loaded from the embedded default.json or an override file
use std::fs;
use std::path::Path;

use serde::Deserialize;
use shared::models::Language;

use crate::error::EngineError;

/// Fixed exchange rate used when rendering CZK. It is a configuration
/// constant, not a live rate; callers must not assume real-time accuracy.
pub const DEFAULT_CZK_PER_USD: f64 = 25.0;

/// Shelf capacity assumed for products that do not declare one.
pub const DEFAULT_STOCK_CAPACITY: u32 = 50;

pub const DEFAULT_HEATMAP_SEED: u64 = 42;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    pub default_language: Language,
    pub czk_per_usd: f64,
    pub default_stock_capacity: u32,
    pub heatmap_seed: u64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            default_language: Language::En,
            czk_per_usd: DEFAULT_CZK_PER_USD,
            default_stock_capacity: DEFAULT_STOCK_CAPACITY,
            heatmap_seed: DEFAULT_HEATMAP_SEED,
        }
    }
}

impl EngineSettings {
    pub fn load_default() -> Result<Self, EngineError> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json(config_str)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path)?;
        tracing::info!(path = %path.display(), "Loaded engine settings override");
        Self::from_json(&config_str)
    }

    pub fn from_json(config_str: &str) -> Result<Self, EngineError> {
        let settings: EngineSettings = serde_json::from_str(config_str)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.czk_per_usd.is_finite() || self.czk_per_usd <= 0.0 {
            return Err(EngineError::ConfigError(format!(
                "czk_per_usd must be a positive number, got {}",
                self.czk_per_usd
            )));
        }
        if self.default_stock_capacity == 0 {
            return Err(EngineError::ConfigError(
                "default_stock_capacity must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
