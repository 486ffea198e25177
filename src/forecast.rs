//! Turns raw forecast periods into per-day summaries and looks up single days.

use crate::client::ForecastSource;
use crate::constants::WEEKDAYS;
use crate::error::ForecastError;
use crate::models::{DaySummary, ForecastPeriod};

/// Pair each daytime period with the night after it.
///
/// The provider alternates day and night. When the sequence opens on the
/// current night, that night has no day and the final entry is a day with
/// no night, so both ends are dropped. The night of the last pair may sit
/// just past that range. Pairing is positional only.
pub fn normalize_periods(periods: &[ForecastPeriod]) -> Vec<DaySummary> {
    let Some(first) = periods.first() else {
        return Vec::new();
    };

    let (start, end) = if first.is_daytime {
        (0, periods.len())
    } else {
        (1, periods.len() - 1)
    };

    if end <= start {
        return Vec::new();
    }

    (start..end)
        .step_by(2)
        .filter_map(|i| Some((&periods[i], periods.get(i + 1)?)))
        .map(|(day, night)| DaySummary {
            day: day.name.clone(),
            temp_high: day.temperature,
            temp_low: night.temperature,
            short_forecast: day.short_forecast.clone(),
            detailed_forecast: day.detailed_forecast.clone(),
        })
        .collect()
}

/// Case-insensitive check against the seven weekday names
pub fn is_valid_weekday(day: &str) -> bool {
    WEEKDAYS.iter().any(|weekday| weekday.eq_ignore_ascii_case(day))
}

/// Find the summary for a weekday.
///
/// The name is validated before the lookup, so an unrecognized name is
/// `InvalidDay` even when `summaries` is empty. A holiday name in place of
/// the weekday counts as absent.
pub fn select_day<'a>(summaries: &'a [DaySummary], day: &str) -> Result<&'a DaySummary, ForecastError> {
    if !is_valid_weekday(day) {
        return Err(ForecastError::InvalidDay(day.to_string()));
    }

    summaries
        .iter()
        .find(|summary| summary.day.eq_ignore_ascii_case(day))
        .ok_or_else(|| ForecastError::NoDataForDay(day.to_string()))
}

/// Detailed forecast for the first period, whether that is today or tonight
pub async fn forecast_today(
    source: &dyn ForecastSource,
    resort_id: &str,
) -> Result<String, ForecastError> {
    let periods = source.fetch_periods(resort_id).await?;

    periods
        .into_iter()
        .next()
        .map(|period| period.detailed_forecast)
        .ok_or_else(|| ForecastError::terminal("forecast contained no periods"))
}

/// All complete days in the current forecast horizon; may be empty
pub async fn forecast_week(
    source: &dyn ForecastSource,
    resort_id: &str,
) -> Result<Vec<DaySummary>, ForecastError> {
    let periods = source.fetch_periods(resort_id).await?;
    let summaries = normalize_periods(&periods);

    tracing::debug!(
        "Normalized {} periods into {} days for {}",
        periods.len(),
        summaries.len(),
        resort_id
    );

    Ok(summaries)
}

/// Summary for one weekday. Fetch failures win over day validation.
pub async fn forecast_day(
    source: &dyn ForecastSource,
    resort_id: &str,
    day: &str,
) -> Result<DaySummary, ForecastError> {
    let summaries = forecast_week(source, resort_id).await?;
    select_day(&summaries, day).cloned()
}
