use thiserror::Error;

pub type HnResult<T> = Result<T, HnError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HnError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}

impl HnError {
    pub fn invalid_arg(what: impl Into<String>) -> Self {
        HnError::InvalidArg { what: what.into() }
    }

    /// True for errors caused by caller-supplied values rather than broken state.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, HnError::InvalidArg { .. } | HnError::NonFinite { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_arg_message() {
        let err = HnError::invalid_arg("num_nodes must be positive (got 0)");
        assert_eq!(
            err.to_string(),
            "Invalid argument: num_nodes must be positive (got 0)"
        );
        assert!(err.is_invalid_input());
    }

    #[test]
    fn invariant_is_not_input_error() {
        let err = HnError::Invariant {
            what: "adjacency".into(),
        };
        assert!(!err.is_invalid_input());
    }
}
