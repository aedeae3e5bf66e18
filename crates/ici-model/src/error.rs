use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("metric name must not be empty")]
    EmptyMetricName,
    #[error("key column `{role}` must have a non-empty name")]
    BlankKeyColumn { role: &'static str },
}

pub type Result<T> = std::result::Result<T, ModelError>;
