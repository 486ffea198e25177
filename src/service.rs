use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::client::{ForecastSource, NwsClient};
use crate::config::ServerConfig;
use crate::error::ForecastError;
use crate::forecast::{forecast_day, forecast_today, forecast_week};
use crate::formatters::{format_forecast_day, format_forecast_today, format_forecast_week, format_resorts};
use crate::models::{GetDayForecastRequest, GetResortForecastRequest};
use crate::resorts::{resolve_resort, Resort};

/// Ski resort weather service that handles MCP requests
#[derive(Clone)]
pub struct SkiWeather {
    source: Arc<dyn ForecastSource>,
    tool_router: ToolRouter<Self>,
}

impl SkiWeather {
    /// Creates a service backed by the National Weather Service API
    pub fn new(config: &ServerConfig) -> Result<Self, ForecastError> {
        Ok(Self::with_source(Arc::new(NwsClient::new(config)?)))
    }

    /// Creates a service backed by any forecast source
    pub fn with_source(source: Arc<dyn ForecastSource>) -> Self {
        Self {
            source,
            tool_router: Self::tool_router(),
        }
    }

    fn lookup_resort(spoken: &str) -> Result<&'static Resort, ForecastError> {
        resolve_resort(spoken).ok_or_else(|| ForecastError::UnknownResort(spoken.to_string()))
    }

    /// Turns a formatted answer or a forecast failure into a tool result
    fn respond(result: Result<String, ForecastError>) -> CallToolResult {
        match result {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => {
                if e.is_service_failure() {
                    tracing::warn!("Forecast request failed: {}", e);
                } else {
                    tracing::info!("Forecast request rejected: {}", e);
                }
                CallToolResult::error(vec![Content::text(e.user_message())])
            }
        }
    }

    async fn today(&self, spoken: &str) -> Result<String, ForecastError> {
        let resort = Self::lookup_resort(spoken)?;
        let detailed = forecast_today(self.source.as_ref(), resort.id).await?;
        Ok(format_forecast_today(resort.name, &detailed))
    }

    async fn week(&self, spoken: &str) -> Result<String, ForecastError> {
        let resort = Self::lookup_resort(spoken)?;
        let summaries = forecast_week(self.source.as_ref(), resort.id).await?;
        if summaries.is_empty() {
            return Err(ForecastError::terminal("no complete days in forecast"));
        }
        Ok(format_forecast_week(resort.name, &summaries))
    }

    async fn day(&self, spoken: &str, day: &str) -> Result<String, ForecastError> {
        let resort = Self::lookup_resort(spoken)?;
        let summary = forecast_day(self.source.as_ref(), resort.id, day).await?;
        Ok(format_forecast_day(resort.name, &summary))
    }
}

#[tool_handler]
impl ServerHandler for SkiWeather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-ski-weather".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Ski resort weather powered by the National Weather Service API. \
                Provides today's, weekly and single-day forecasts for US ski resorts."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl SkiWeather {
    /// Lists the resorts the service knows about
    #[tool(description = "List the ski resorts this service knows about, with their identifiers. Resorts outside National Weather Service coverage are marked.")]
    async fn list_resorts(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Listing resorts");
        Ok(CallToolResult::success(vec![Content::text(format_resorts())]))
    }

    /// Gets the forecast for the current period at a resort
    #[tool(description = "Get today's weather forecast for a ski resort. Provide the resort name (e.g., 'Stevens Pass', 'Alta', 'Mount Bachelor').")]
    async fn get_forecast_today(
        &self,
        Parameters(request): Parameters<GetResortForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting today's forecast for resort: {}", request.resort);
        Ok(Self::respond(self.today(&request.resort).await))
    }

    /// Gets the day-by-day forecast for the coming week
    #[tool(description = "Get the weather forecast for the coming week at a ski resort, with daily highs and lows. Provide the resort name (e.g., 'Snowbird').")]
    async fn get_forecast_week(
        &self,
        Parameters(request): Parameters<GetResortForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting weekly forecast for resort: {}", request.resort);
        Ok(Self::respond(self.week(&request.resort).await))
    }

    /// Gets the forecast for one day of the week
    #[tool(description = "Get the weather forecast for a specific day of the week at a ski resort. Provide the resort name and a day of the week (e.g., resort: 'Park City', day: 'Saturday').")]
    async fn get_forecast_day(
        &self,
        Parameters(request): Parameters<GetDayForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting forecast for resort: {}, day: {}",
            request.resort,
            request.day
        );
        Ok(Self::respond(self.day(&request.resort, &request.day).await))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::test_support::{period, week, StubSource};

    fn service(result: Result<Vec<crate::models::ForecastPeriod>, ForecastError>) -> SkiWeather {
        SkiWeather::with_source(Arc::new(StubSource(result)))
    }

    fn text_of(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|c| c.as_text().map(|t| t.text.clone()))
            .collect()
    }

    #[tokio::test]
    async fn test_today_uses_resort_display_name() {
        let svc = service(Ok(week(&["Monday"])));
        let text = svc.today("alta").await.unwrap();
        assert_eq!(text, "Here is today's forecast for Alta. Monday detailed");
    }

    #[tokio::test]
    async fn test_unknown_resort_skips_fetch() {
        let svc = service(Err(ForecastError::terminal("should not be reached")));
        assert_eq!(
            svc.week("Whistler").await,
            Err(ForecastError::UnknownResort("Whistler".into()))
        );
    }

    #[tokio::test]
    async fn test_week_empty_horizon_is_terminal() {
        let svc = service(Ok(vec![period("Tonight", false, 20)]));
        assert!(matches!(
            svc.week("Snowbird").await,
            Err(ForecastError::TerminalError(_))
        ));
    }

    #[tokio::test]
    async fn test_day_round_trip() {
        let svc = service(Ok(week(&["Friday", "Saturday"])));
        let text = svc.day("Park City", "saturday").await.unwrap();
        assert!(text.starts_with("Saturday at Park City:"));
        assert!(text.contains("high will be 31 and the low 21"));
    }

    #[tokio::test]
    async fn test_tool_errors_carry_user_message() {
        let svc = service(Ok(week(&["Friday"])));
        let result = svc
            .get_forecast_day(Parameters(GetDayForecastRequest {
                resort: "Alta".into(),
                day: "caturday".into(),
            }))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            ForecastError::InvalidDay("caturday".into()).user_message()
        );
    }

    #[tokio::test]
    async fn test_tool_unsupported_resort() {
        let svc = service(Err(ForecastError::Unsupported("Mount_Washington".into())));
        let result = svc
            .get_forecast_today(Parameters(GetResortForecastRequest {
                resort: "Mount Washington".into(),
            }))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            ForecastError::Unsupported(String::new()).user_message()
        );
    }

    #[tokio::test]
    async fn test_tool_week_success() {
        let svc = service(Ok(week(&["Friday", "Saturday", "Sunday"])));
        let result = svc
            .get_forecast_week(Parameters(GetResortForecastRequest {
                resort: "stevens pass".into(),
            }))
            .await
            .unwrap();

        assert_ne!(result.is_error, Some(true));
        let text = text_of(&result);
        assert!(text.contains("Stevens Pass"));
        assert!(text.contains("Sunday: Sunday short, with a high of 32 and a low of 22 degrees."));
    }
}
