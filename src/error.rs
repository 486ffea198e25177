//! Failure kinds surfaced by the forecast operations.

use thiserror::Error;

/// Every way a forecast request can fail.
///
/// None of these are retried. Each one maps to a single sentence for the
/// listener through [`ForecastError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    /// The spoken resort name is not in the catalog
    #[error("unknown resort: {0}")]
    UnknownResort(String),

    /// The resort exists but the forecast source has no gridpoint for it
    #[error("resort {0} is not covered by the forecast source")]
    Unsupported(String),

    /// Fetch, status or decode failure, or no data where some was expected
    #[error("forecast unavailable: {0}")]
    TerminalError(String),

    /// The requested day is not one of the seven weekday names
    #[error("not a day of the week: {0}")]
    InvalidDay(String),

    /// The weekday is valid but outside the current forecast horizon
    #[error("no forecast data for {0}")]
    NoDataForDay(String),
}

impl ForecastError {
    pub fn terminal<S: Into<String>>(reason: S) -> Self {
        Self::TerminalError(reason.into())
    }

    /// True when the forecast source failed rather than the request being unanswerable
    #[must_use]
    pub fn is_service_failure(&self) -> bool {
        matches!(self, ForecastError::TerminalError(_))
    }

    /// Get the sentence read back to the user for this failure
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ForecastError::UnknownResort(name) => format!(
                "Sorry, I don't know a ski resort called {name}. Which resort would you like the weather for?"
            ),
            ForecastError::Unsupported(_) => {
                "Sorry, the weather service doesn't provide forecasts for that resort yet."
                    .to_string()
            }
            ForecastError::TerminalError(_) => {
                "Sorry, I'm having trouble reaching the weather service right now. Please try again later."
                    .to_string()
            }
            ForecastError::InvalidDay(day) => format!(
                "Sorry, {day} isn't a day of the week. Try asking for a day like Monday or Saturday."
            ),
            ForecastError::NoDataForDay(day) => format!(
                "Sorry, the forecast doesn't reach {day} yet. Try asking for the weekly forecast instead."
            ),
        }
    }
}
