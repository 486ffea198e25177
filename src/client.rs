//! Forecast source abstraction and the api.weather.gov client.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;

use crate::config::ServerConfig;
use crate::error::ForecastError;
use crate::models::{ForecastPeriod, ForecastResponse};
use crate::resorts::gridpoint_for;

/// Anything that can produce the raw forecast periods for a resort.
///
/// Implementations report an unmapped resort as `Unsupported` and every
/// transport or decode failure as `TerminalError`. Callers never retry.
#[async_trait]
pub trait ForecastSource: Send + Sync {
    async fn fetch_periods(&self, resort_id: &str) -> Result<Vec<ForecastPeriod>, ForecastError>;
}

/// Client for the National Weather Service gridpoint forecast endpoint
#[derive(Debug, Clone)]
pub struct NwsClient {
    client: Arc<Client>,
    api_base: String,
}

impl NwsClient {
    /// Creates a client from the server configuration
    pub fn new(config: &ServerConfig) -> Result<Self, ForecastError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ForecastError::terminal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client: Arc::new(client),
            api_base: config.api_base.clone(),
        })
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn make_request<T: for<'de> Deserialize<'de>>(&self, url: &str) -> anyhow::Result<T> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/geo+json")
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("Request failed with status: {}", response.status());
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }
}

#[async_trait]
impl ForecastSource for NwsClient {
    async fn fetch_periods(&self, resort_id: &str) -> Result<Vec<ForecastPeriod>, ForecastError> {
        let gridpoint = gridpoint_for(resort_id)?;
        let url = format!("{}/gridpoints/{}/forecast", self.api_base, gridpoint);

        tracing::info!("Requesting forecast for {} from {}", resort_id, url);

        let forecast = self
            .make_request::<ForecastResponse>(&url)
            .await
            .map_err(|e| {
                tracing::warn!("Error fetching forecast for {}: {}", resort_id, e);
                ForecastError::terminal(format!("failed to fetch forecast: {e}"))
            })?;

        Ok(forecast.properties.periods)
    }
}
