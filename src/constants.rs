/// User agent string for HTTP requests
pub const USER_AGENT: &str = "mcp-ski-weather-server/0.1.0";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Outbound request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Prefix for environment overrides, e.g. `SKI_WEATHER_API_BASE`
pub const ENV_PREFIX: &str = "SKI_WEATHER";

/// Day names accepted by the day lookup, lowercase
pub const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];
