use crate::models::DaySummary;
use crate::resorts::{Resort, RESORTS};

/// Formats the forecast for the current period at a resort
pub fn format_forecast_today(resort_name: &str, detailed_forecast: &str) -> String {
    format!("Here is today's forecast for {}. {}", resort_name, detailed_forecast)
}

/// Formats the weekly forecast, one sentence per day
pub fn format_forecast_week(resort_name: &str, summaries: &[DaySummary]) -> String {
    let mut output = format!("Here is the forecast for {} this week.\n", resort_name);
    for summary in summaries {
        output.push_str(&format!(
            "{}: {}, with a high of {} and a low of {} degrees.\n",
            summary.day, summary.short_forecast, summary.temp_high, summary.temp_low
        ));
    }
    output
}

/// Formats the forecast for a single day
pub fn format_forecast_day(resort_name: &str, summary: &DaySummary) -> String {
    format!(
        "{} at {}: {} The high will be {} and the low {} degrees.",
        summary.day, resort_name, summary.detailed_forecast, summary.temp_high, summary.temp_low
    )
}

/// Formats the resort catalog
pub fn format_resorts() -> String {
    let mut output = String::from("Ski resorts:\n\n");
    for Resort { id, name, gridpoint } in RESORTS {
        match gridpoint {
            Some(_) => output.push_str(&format!("  {} ({})\n", name, id)),
            None => output.push_str(&format!("  {} ({}) - forecast not available\n", name, id)),
        }
    }
    output
}
