//! Core domain types and the library-wide error taxonomy.

pub mod types;

pub use types::*;

/// Engine and configuration errors surfaced by the API.
///
/// `Configuration` covers preconditions detected before any computation
/// starts; `Numerical` covers invariants that fail mid-computation. Non-finite
/// prices produced by well-formed but extreme inputs are not errors: they
/// propagate into results unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// A precondition on configuration or model parameters was violated.
    Configuration(String),
    /// A numerical invariant failed during computation.
    Numerical(String),
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(msg) => write!(f, "invalid configuration: {msg}"),
            Self::Numerical(msg) => write!(f, "numerical error: {msg}"),
        }
    }
}

impl std::error::Error for PricingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_message() {
        let err = PricingError::Configuration("eta must be > 0".to_string());
        assert_eq!(err.to_string(), "invalid configuration: eta must be > 0");

        let err = PricingError::Numerical("probability outside [0, 1]".to_string());
        assert_eq!(err.to_string(), "numerical error: probability outside [0, 1]");
    }
}
