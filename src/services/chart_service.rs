use std::sync::atomic::{AtomicU64, Ordering};

use plotters::element::Pixel;
use plotters::prelude::*;

use crate::api::goldprice::GoldPrice;
use crate::models::chart::{ChartOptions, TrendLayout};
use crate::services::trend_service;

/// Gold line and marker color (#D4AF37)
const GOLD: RGBColor = RGBColor(0xd4, 0xaf, 0x37);
/// Gradient alpha at the top edge of the surface; fades to 0 at the baseline
const FILL_ALPHA_TOP: f64 = 0.15;

static CHART_SEQ: AtomicU64 = AtomicU64::new(0);

/// Generate a trend chart image as PNG bytes.
///
/// Returns `Ok(None)` when the series has fewer than two points; nothing is
/// drawn in that case.
pub fn generate_chart(
    history: &[GoldPrice],
    opts: &ChartOptions,
) -> Result<Option<Vec<u8>>, String> {
    let layout = match trend_service::compute_layout(history, opts) {
        Some(layout) => layout,
        None => return Ok(None),
    };
    render_layout(&layout, opts.scale).map(Some)
}

/// Rasterize a computed layout at the given device-pixel scale.
///
/// The backing store is `logical * scale`; layout coordinates stay in
/// logical units and are scaled only here.
pub fn render_layout(layout: &TrendLayout, scale: u32) -> Result<Vec<u8>, String> {
    let scale = scale.max(1);
    let s = scale as f64;
    let dev_w = (layout.width * s).round() as u32;
    let dev_h = (layout.height * s).round() as u32;

    // Unique temporary file path for BitMapBackend
    let temp_file = format!(
        "/tmp/goldtrend_chart_{}_{}.png",
        std::process::id(),
        CHART_SEQ.fetch_add(1, Ordering::SeqCst)
    );

    {
        let backend = BitMapBackend::new(&temp_file, (dev_w, dev_h));
        let root = backend.into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| format!("Failed to fill canvas: {}", e))?;

        let dev_points: Vec<(i32, i32)> = layout
            .points
            .iter()
            .map(|p| ((p.x * s).round() as i32, (p.y * s).round() as i32))
            .collect();

        // Gradient fill under the polyline: column by column, alpha keyed to
        // the pixel's vertical position on the full surface
        let h = dev_h as f64;
        for win in layout.points.windows(2) {
            let (a, b) = (win[0], win[1]);
            let x0 = (a.x * s).round() as i32;
            let x1 = (b.x * s).round() as i32;
            if x1 <= x0 {
                continue;
            }
            for x in x0..x1 {
                let t = (x - x0) as f64 / (x1 - x0) as f64;
                let y_line = ((a.y + (b.y - a.y) * t) * s).round().max(0.0) as i32;
                for y in y_line..dev_h as i32 {
                    let alpha = FILL_ALPHA_TOP * (1.0 - y as f64 / h);
                    root.draw(&Pixel::new((x, y), GOLD.mix(alpha)))
                        .map_err(|e| format!("Failed to draw fill: {}", e))?;
                }
            }
        }

        // Gold polyline over the fill
        root.draw(&PathElement::new(
            dev_points.clone(),
            GOLD.stroke_width(2 * scale),
        ))
        .map_err(|e| format!("Failed to draw line: {}", e))?;

        // Markers for extrema, then the larger outlined current-value marker
        let last = layout.last_index();
        for idx in layout.highlight_indices() {
            if idx == last {
                continue;
            }
            root.draw(&Circle::new(
                dev_points[idx],
                (3 * scale) as i32,
                GOLD.mix(0.8).filled(),
            ))
            .map_err(|e| format!("Failed to draw marker: {}", e))?;
        }
        root.draw(&Circle::new(
            dev_points[last],
            (4 * scale) as i32,
            GOLD.filled(),
        ))
        .map_err(|e| format!("Failed to draw marker: {}", e))?;
        root.draw(&Circle::new(
            dev_points[last],
            (4 * scale) as i32,
            WHITE.stroke_width(scale),
        ))
        .map_err(|e| format!("Failed to draw marker outline: {}", e))?;

        root.present()
            .map_err(|e| format!("Failed to render chart: {}", e))?;
    }

    // Read the temporary file into memory
    use std::fs;
    let image_data = fs::read(&temp_file)
        .map_err(|e| format!("Failed to read chart file: {}", e))?;

    // Clean up temporary file
    let _ = fs::remove_file(&temp_file);

    Ok(image_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(id: i64, price: f64, time: &str) -> GoldPrice {
        GoldPrice {
            id,
            base_price: price,
            official_price: price,
            sale_price: price,
            update_time: time.to_string(),
        }
    }

    fn small_options() -> ChartOptions {
        ChartOptions {
            width: 120,
            height: 80,
            margin: 10.0,
            scale: 1,
        }
    }

    #[test]
    fn test_generate_chart_produces_png_bytes() {
        let history = vec![
            quote(1, 512.0, "2024-05-03T10:00:00"),
            quote(2, 505.0, "2024-05-02T10:00:00"),
            quote(3, 508.0, "2024-05-01T10:00:00"),
        ];
        let bytes = generate_chart(&history, &small_options())
            .unwrap()
            .expect("three points should draw");
        assert!(!bytes.is_empty());
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_short_series_draws_nothing() {
        let opts = small_options();
        assert!(generate_chart(&[], &opts).unwrap().is_none());

        let single = vec![quote(1, 512.0, "2024-05-03T10:00:00")];
        assert!(generate_chart(&single, &opts).unwrap().is_none());
    }

    #[test]
    fn test_scale_multiplies_backing_store() {
        let history = vec![
            quote(1, 512.0, "2024-05-02T10:00:00"),
            quote(2, 505.0, "2024-05-01T10:00:00"),
        ];
        let opts = ChartOptions {
            scale: 2,
            ..small_options()
        };
        // Rendering at 2x must not panic or clip; byte output is still a PNG
        let bytes = generate_chart(&history, &opts).unwrap().unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }
}
