use thiserror::Error;

/// Reasons a sensor package cannot be turned into a workout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    /// The activity code is not one of `SWM`, `RUN`, `WLK`.
    #[error("unrecognized activity code {code:?} (expected one of SWM, RUN, WLK)")]
    UnrecognizedActivity { code: String },

    /// Wrong number of fields, or a field that is not a usable number.
    #[error("malformed input for {code}: {reason}")]
    MalformedInput { code: String, reason: String },

    /// A value used as a divisor is zero, negative or NaN.
    #[error("{field} must be greater than zero, got {value}")]
    InvalidDivisor { field: &'static str, value: f64 },
}

impl WorkoutError {
    pub fn malformed(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            code: code.into(),
            reason: reason.into(),
        }
    }
}
