use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TjError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
