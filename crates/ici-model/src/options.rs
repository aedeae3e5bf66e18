//! Configuration options for the outcome pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Names of the three key columns every trial table carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyColumns {
    pub cancer_type: String,
    pub line_of_therapy: String,
    pub regimen: String,
}

impl Default for KeyColumns {
    fn default() -> Self {
        Self {
            cancer_type: "cancer_type".to_string(),
            line_of_therapy: "line_of_therapy".to_string(),
            regimen: "regimen".to_string(),
        }
    }
}

impl KeyColumns {
    pub fn new(
        cancer_type: impl Into<String>,
        line_of_therapy: impl Into<String>,
        regimen: impl Into<String>,
    ) -> Self {
        Self {
            cancer_type: cancer_type.into(),
            line_of_therapy: line_of_therapy.into(),
            regimen: regimen.into(),
        }
    }

    /// Ensure none of the configured names is blank.
    pub fn validate(&self) -> Result<()> {
        for (role, name) in self.roles() {
            if name.trim().is_empty() {
                return Err(ModelError::BlankKeyColumn { role });
            }
        }
        Ok(())
    }

    /// Whether `column` is one of the key columns.
    pub fn contains(&self, column: &str) -> bool {
        self.roles().iter().any(|(_, name)| *name == column)
    }

    /// Role label paired with each configured column name.
    pub fn roles(&self) -> [(&'static str, &str); 3] {
        [
            ("cancer_type", self.cancer_type.as_str()),
            ("line_of_therapy", self.line_of_therapy.as_str()),
            ("regimen", self.regimen.as_str()),
        ]
    }
}

/// Row order of the long-format output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeOrder {
    /// All components of the first regimen, then the second regimen, ...
    #[default]
    RegimenMajor,
    /// The first component for every regimen, then the second component, ...
    ComponentMajor,
}
