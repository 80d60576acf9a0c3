use std::cmp::Ordering;

use crate::api::goldprice::GoldPrice;
use crate::models::chart::{ChartOptions, ChartPoint, TrendLayout};

/// Display range padding below the series minimum
const PAD_BELOW: f64 = 0.05;
/// Display range headroom above the series maximum
const PAD_ABOVE: f64 = 0.5;
/// Absolute pad applied when every price in the series is equal
const FLAT_PAD: f64 = 5.0;
/// Minimum logical pixels per plotted point
const POINT_GAP: u32 = 50;

/// Map a range selector to a day count
/// Supported: 7d, 30d, 90d (with a few aliases)
pub fn parse_range_days(range: &str) -> Result<u32, String> {
    match range.to_lowercase().as_str() {
        "7d" | "1w" => Ok(7),
        "30d" | "1m" | "1month" => Ok(30),
        "90d" | "3m" | "3months" => Ok(90),
        _ => Err(format!(
            "Unknown range: '{}'. Supported: 7d, 30d, 90d",
            range
        )),
    }
}

/// Widen the surface so dense series keep at least POINT_GAP px per point
pub fn surface_width(requested: u32, n_points: usize) -> u32 {
    requested.max(n_points as u32 * POINT_GAP)
}

/// Reverse the newest-first series to chronological order. Descending by
/// time is the API contract; the stable re-sort on parsed timestamps
/// catches payloads that arrive in a different order.
fn chronological(history: &[GoldPrice]) -> Vec<GoldPrice> {
    let mut series: Vec<GoldPrice> = history.to_vec();
    series.reverse();
    series.sort_by(|a, b| match (a.updated_at(), b.updated_at()) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => Ordering::Equal,
    });
    series
}

/// Compute chart geometry for a newest-first price series.
///
/// Returns `None` when there are fewer than two points to plot; the caller
/// skips drawing entirely in that case.
pub fn compute_layout(history: &[GoldPrice], opts: &ChartOptions) -> Option<TrendLayout> {
    if history.len() < 2 {
        return None;
    }

    let series = chronological(history);
    let prices: Vec<f64> = series.iter().map(|p| p.base_price).collect();

    let max_price = prices.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min_price = prices.iter().cloned().fold(f64::INFINITY, f64::min);
    let range = max_price - min_price;

    // A flat series gets an absolute pad so the range never collapses to zero
    let (display_min, display_max) = if range == 0.0 {
        (min_price - FLAT_PAD, max_price + FLAT_PAD)
    } else {
        (min_price - range * PAD_BELOW, max_price + range * PAD_ABOVE)
    };
    let display_range = display_max - display_min;

    let width = surface_width(opts.width, prices.len()) as f64;
    let height = opts.height as f64;
    let draw_width = width - opts.margin * 2.0;

    let points: Vec<ChartPoint> = prices
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            let x_percent = i as f64 / (prices.len() - 1) as f64;
            ChartPoint {
                x: opts.margin + x_percent * draw_width,
                y: height - (p - display_min) / display_range * height,
            }
        })
        .collect();

    // Ties are found on the raw prices, not on derived pixel positions
    let max_indices: Vec<usize> = prices
        .iter()
        .enumerate()
        .filter(|(_, &p)| p == max_price)
        .map(|(i, _)| i)
        .collect();
    let min_indices: Vec<usize> = prices
        .iter()
        .enumerate()
        .filter(|(_, &p)| p == min_price)
        .map(|(i, _)| i)
        .collect();

    Some(TrendLayout {
        points,
        display_min,
        display_max,
        width,
        height,
        max_indices,
        min_indices,
    })
}
