//! TOML configuration for the explorer.
//!
//! Every section is optional:
//!
//! ```toml
//! order = "component-major"
//!
//! [columns]
//! cancer_type = "cancer"
//! line_of_therapy = "line"
//! regimen = "regimen"
//!
//! [horizons]
//! "1" = "12"
//! "2" = "24"
//!
//! [line_labels]
//! "1" = "No prior treatment"
//! "2+" = "At least one prior treatment"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ici_core::{HorizonMap, LineLabels, PipelineOptions};
use ici_model::{KeyColumns, ShapeOrder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub columns: KeyColumns,
    pub order: ShapeOrder,
    pub horizons: HorizonMap,
    pub line_labels: LineLabels,
}

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).context("parse configuration")?;
        config.columns.validate()?;
        Ok(config)
    }

    /// Pipeline options, with `order` overriding the configured order when set.
    pub fn pipeline_options(&self, order: Option<ShapeOrder>) -> PipelineOptions {
        PipelineOptions::default().with_order(order.unwrap_or(self.order))
    }
}

/// Load configuration from `path`, or defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    AppConfig::from_toml(&contents).with_context(|| format!("load config: {}", path.display()))
}
