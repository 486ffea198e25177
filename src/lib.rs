//! Ski resort weather over the Model Context Protocol.
//!
//! Resolves a resort name to a National Weather Service gridpoint, fetches the
//! gridpoint forecast and shapes it into today, weekly and single-day answers.

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod forecast;
pub mod formatters;
pub mod models;
pub mod resorts;
pub mod service;

pub use client::{ForecastSource, NwsClient};
pub use config::ServerConfig;
pub use error::ForecastError;
pub use forecast::{
    forecast_day, forecast_today, forecast_week, is_valid_weekday, normalize_periods, select_day,
};
pub use models::{DaySummary, ForecastPeriod};
pub use service::SkiWeather;
