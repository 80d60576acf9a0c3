use std::fs;

use tracing::{info, warn};

use crate::api::goldprice::GoldPriceClient;
use crate::models::chart::ChartOptions;
use crate::models::state::{FetchData, FetchOutcome, FetchSequence, ViewState};
use crate::services::chart_service;
use crate::settings::{self, Settings};
use crate::utils::Table;

/// Fetch the latest quote plus the 7-day history, print the quote and
/// optionally render the 7-day trend chart.
pub async fn execute(
    out: Option<&str>,
    width: u32,
    height: u32,
    scale: u32,
) -> Result<(), String> {
    let stored = Settings::load();
    let client = GoldPriceClient::with_base_url(settings::admin_token(), stored.resolve_base_url());
    info!("Fetching latest gold price from {}", client.base_url());

    let seqs = FetchSequence::default();
    let seq = seqs.next();
    let state = ViewState::default().begin_fetch(seq);

    let outcome = FetchOutcome {
        seq,
        result: fetch_dashboard(&client).await,
    };
    let state = state.apply(&outcome);

    if let Err(e) = &outcome.result {
        // Nothing was displayed before this fetch, so surface the failure
        return Err(format!("Failed to fetch gold price: {}", e));
    }

    let latest = state
        .latest
        .as_ref()
        .ok_or_else(|| "No quote data available".to_string())?;

    let updated = latest
        .updated_at()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| latest.update_time.clone());

    let base = format!("{:.2}", latest.base_price);
    let official = format!("{:.2}", latest.official_price);
    let sale = format!("{:.2}", latest.sale_price);

    let mut table = Table::new(vec!["Base", "Official", "Sale", "Updated"]);
    table.add_row(vec![&base, &official, &sale, &updated]);
    println!("{}", table.render());

    info!("Loaded {} history points", state.history.len());

    if let Some(out) = out {
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
                info!("Trend chart written to {} ({} bytes)", out, bytes.len());
            }
            None => warn!(
                "Not enough history to draw a trend ({} point(s), need at least 2)",
                state.history.len()
            ),
        }
    }

    Ok(())
}

async fn fetch_dashboard(client: &GoldPriceClient) -> Result<FetchData, String> {
    let latest = client
        .latest_price()
        .await
        .map_err(|e| format!("latest price: {}", e))?;
    let history = client
        .price_history(7, None)
        .await
        .map_err(|e| format!("price history: {}", e))?;
    Ok(FetchData {
        latest: Some(latest),
        history,
    })
}
