use tracing::{info, warn};

use crate::api::goldprice::GoldPriceClient;
use crate::settings::{self, Settings};

/// Persist (or clear) the base-URL override, then re-trigger a fetch to
/// verify the configured origin is reachable.
pub async fn execute(url: Option<&str>, clear: bool) -> Result<(), String> {
    let path = Settings::default_path();
    let mut stored = Settings::load_from(&path);

    if clear {
        stored.base_url = None;
        info!("Cleared base URL override");
    } else {
        let url = url.ok_or_else(|| "A URL is required unless --clear is given".to_string())?;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(format!(
                "Invalid base URL '{}': expected an http(s) origin",
                url
            ));
        }
        let url = url.trim_end_matches('/').to_string();
        info!("Base URL override set to {}", url);
        stored.base_url = Some(url);
    }

    stored.store_to(&path)?;

    // The original settings dialog kicks off a fresh fetch right after saving
    let client = GoldPriceClient::with_base_url(settings::admin_token(), stored.resolve_base_url());
    match client.latest_price().await {
        Ok(quote) => info!(
            "Fetch against {} succeeded (base price {:.2})",
            client.base_url(),
            quote.base_price
        ),
        Err(e) => warn!("Fetch against {} failed: {}", client.base_url(), e),
    }

    Ok(())
}
