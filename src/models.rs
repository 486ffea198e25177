use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// National Weather Service API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<ForecastPeriod>,
}

/// One roughly twelve hour slot of the gridpoint forecast, tagged day or night
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ForecastPeriod {
    pub name: String,
    #[serde(rename = "isDaytime")]
    pub is_daytime: bool,
    pub temperature: i32,
    #[serde(rename = "shortForecast")]
    pub short_forecast: String,
    #[serde(rename = "detailedForecast")]
    pub detailed_forecast: String,
}

// ============================================================================
// Derived Forecast Models
// ============================================================================

/// A daytime period paired with the night that follows it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub day: String,
    pub temp_high: i32,
    pub temp_low: i32,
    pub short_forecast: String,
    pub detailed_forecast: String,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetResortForecastRequest {
    /// Resort name as spoken, e.g. "Stevens Pass" or "Mount Hood Meadows"
    pub resort: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetDayForecastRequest {
    /// Resort name as spoken, e.g. "Stevens Pass" or "Mount Hood Meadows"
    pub resort: String,
    /// Day of the week, e.g. "Saturday"
    pub day: String,
}
