use serde::{Deserialize, Serialize};

/// The (cancer type, line of therapy) pair rows are filtered on.
///
/// Values are compared exactly; callers normalise case beforehand if needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub cancer_type: String,
    pub line_of_therapy: String,
}

impl FilterCriteria {
    pub fn new(cancer_type: impl Into<String>, line_of_therapy: impl Into<String>) -> Self {
        Self {
            cancer_type: cancer_type.into(),
            line_of_therapy: line_of_therapy.into(),
        }
    }
}

/// A single user selection as received from the rendering layer.
///
/// Every field is optional here; the pipeline decides which absences are
/// structural errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeRequest {
    pub cancer_type: Option<String>,
    pub line_of_therapy: Option<String>,
    pub metric: Option<String>,
}

impl ComputeRequest {
    pub fn new(
        cancer_type: impl Into<String>,
        line_of_therapy: impl Into<String>,
        metric: impl Into<String>,
    ) -> Self {
        Self {
            cancer_type: Some(cancer_type.into()),
            line_of_therapy: Some(line_of_therapy.into()),
            metric: Some(metric.into()),
        }
    }
}
