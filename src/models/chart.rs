//! Chart geometry models

/// A single point mapped onto the drawing surface, in logical pixels.
/// Canvas convention: y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// Rendering options for the trend surface, in logical pixels
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    /// Horizontal inset left and right of the polyline
    pub margin: f64,
    /// Device pixel ratio applied to the backing store
    pub scale: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        ChartOptions {
            width: 375,
            height: 250,
            margin: 50.0,
            scale: 2,
        }
    }
}

/// Computed geometry for one trend chart, ready to rasterize
#[derive(Debug, Clone)]
pub struct TrendLayout {
    /// Points in chronological order, one per input quote
    pub points: Vec<ChartPoint>,
    /// Padded vertical display range
    pub display_min: f64,
    pub display_max: f64,
    /// Logical surface dimensions after dynamic widening
    pub width: f64,
    pub height: f64,
    /// Indices tied for the series maximum, by price value
    pub max_indices: Vec<usize>,
    /// Indices tied for the series minimum, by price value
    pub min_indices: Vec<usize>,
}

impl TrendLayout {
    /// Index of the newest point, always marked as the current value
    pub fn last_index(&self) -> usize {
        self.points.len() - 1
    }

    /// Indices that get a marker: series max, series min and the newest point
    pub fn highlight_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .max_indices
            .iter()
            .chain(self.min_indices.iter())
            .copied()
            .collect();
        indices.push(self.last_index());
        indices.sort_unstable();
        indices.dedup();
        indices
    }
}
