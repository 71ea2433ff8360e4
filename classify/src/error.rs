//! Classifier error contract.
//!
//! Downstream tooling pattern-matches on the stable `err_code` and, in
//! several golden tests, on the literal `detailed_cause` wording. Both fields
//! must survive verbatim to the build log.

use snafu::Snafu;

pub type Result<T, E = ClassifyError> = std::result::Result<T, E>;

/// Stable code for malformed classify parameters.
pub const ERR_PARAM_INVALID: &str = "E90001";

/// Malformed parameter bundle or input descriptor for a classify call.
///
/// Never retried; aborts the current operator's compilation.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display("errCode {err_code}: {detailed_cause}"))]
pub struct ClassifyError {
    err_code: String,
    detailed_cause: String,
}

impl ClassifyError {
    pub fn new(err_code: impl Into<String>, detailed_cause: impl Into<String>) -> Self {
        Self { err_code: err_code.into(), detailed_cause: detailed_cause.into() }
    }

    pub fn param_invalid(detailed_cause: impl Into<String>) -> Self {
        Self::new(ERR_PARAM_INVALID, detailed_cause)
    }

    pub fn err_code(&self) -> &str {
        &self.err_code
    }

    pub fn detailed_cause(&self) -> &str {
        &self.detailed_cause
    }
}

impl From<tessel_shape::Error> for ClassifyError {
    fn from(err: tessel_shape::Error) -> Self {
        ClassifyError::param_invalid(err.to_string())
    }
}
