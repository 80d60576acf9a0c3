use std::fs;

use tracing::{debug, info, warn};

use crate::api::goldprice::GoldPriceClient;
use crate::models::chart::ChartOptions;
use crate::models::state::{FetchData, FetchOutcome, FetchSequence, ViewState};
use crate::services::{chart_service, trend_service};
use crate::settings::{self, Settings};

/// Fetch history for the selected range and render the trend chart.
pub async fn execute(
    range: &str,
    records: Option<u32>,
    out: &str,
    width: u32,
    height: u32,
    scale: u32,
) -> Result<(), String> {
    let days = trend_service::parse_range_days(range)?;

    let stored = Settings::load();
    let client = GoldPriceClient::with_base_url(settings::admin_token(), stored.resolve_base_url());
    info!(
        "Fetching {} days of history from {}{}",
        days,
        client.base_url(),
        records
            .map(|r| format!(" (capped at {} records)", r))
            .unwrap_or_default()
    );

    let seqs = FetchSequence::default();
    let seq = seqs.next();
    let state = ViewState::default().begin_fetch(seq);

    let outcome = FetchOutcome {
        seq,
        result: fetch_history(&client, days, records).await,
    };
    let state = state.apply(&outcome);

    if let Err(e) = &outcome.result {
        return Err(format!("Failed to fetch price history: {}", e));
    }

    debug!("Loaded {} history points", state.history.len());

    let opts = ChartOptions {
        width,
        height,
        scale,
        ..ChartOptions::default()
    };
    match chart_service::generate_chart(&state.history, &opts)? {
        Some(bytes) => {
            fs::write(out, &bytes)
                .map_err(|e| format!("Failed to write chart file {}: {}", out, e))?;
            info!(
                "Trend chart for the last {} days written to {} ({} bytes)",
                days,
                out,
                bytes.len()
            );
        }
        None => warn!(
            "Not enough history in the last {} days to draw a trend ({} point(s), need at least 2)",
            days,
            state.history.len()
        ),
    }

    Ok(())
}

async fn fetch_history(
    client: &GoldPriceClient,
    days: u32,
    records: Option<u32>,
) -> Result<FetchData, String> {
    let history = client
        .price_history(days, records)
        .await
        .map_err(|e| format!("price history: {}", e))?;
    Ok(FetchData {
        latest: None,
        history,
    })
}
