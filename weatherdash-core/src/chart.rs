//! Chart data for the six dashboard panels.
//!
//! Each panel is a different view over the same [`MetricsRow`]: the row is
//! consumed read-only and its fixed positional order carries the labels.
//! Everything here is pure derivation; drawing belongs to the binary.

use serde::Serialize;

use crate::metrics::MetricsRow;

/// Number of histogram bins for the distribution panel.
pub const HISTOGRAM_BINS: usize = 5;

/// The six chart variants, in dashboard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    HBar,
    Area,
    Histogram,
}

impl ChartKind {
    /// Panel title shown above each chart.
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Line => "Trend Analysis",
            ChartKind::Bar => "Value Comparison",
            ChartKind::Pie => "Proportion View",
            ChartKind::HBar => "Rank Comparison",
            ChartKind::Area => "Volume Change",
            ChartKind::Histogram => "Distribution Pattern",
        }
    }

    pub const fn all() -> [ChartKind; 6] {
        [
            ChartKind::Line,
            ChartKind::Bar,
            ChartKind::Pie,
            ChartKind::HBar,
            ChartKind::Area,
            ChartKind::Histogram,
        ]
    }
}

/// One bin of the distribution panel; `upper` is inclusive for the last bin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Plottable data derived from the metrics row.
#[derive(Debug, Clone, Serialize)]
pub enum ChartData {
    /// Labeled values in row order (line, bar, hbar, area).
    Series { points: Vec<(&'static str, f64)> },
    /// Percentage share of the row total per metric (pie); negative
    /// values are clamped to a zero-width slice.
    Shares { slices: Vec<(&'static str, f64)> },
    /// Value distribution over fixed-width bins (histogram).
    Histogram { bins: Vec<HistogramBin> },
}

impl ChartData {
    pub fn for_kind(kind: ChartKind, row: &MetricsRow) -> Self {
        match kind {
            ChartKind::Line | ChartKind::Bar | ChartKind::HBar | ChartKind::Area => {
                ChartData::Series { points: series(row) }
            }
            ChartKind::Pie => ChartData::Shares { slices: shares(row) },
            ChartKind::Histogram => ChartData::Histogram { bins: histogram(row) },
        }
    }
}

/// A chart panel: which variant, its title, and the derived data.
#[derive(Debug, Clone, Serialize)]
pub struct ChartPanel {
    pub kind: ChartKind,
    pub title: &'static str,
    pub data: ChartData,
}

/// The six panels for one render pass, in dashboard order.
pub fn panels(row: &MetricsRow) -> Vec<ChartPanel> {
    ChartKind::all()
        .into_iter()
        .map(|kind| ChartPanel {
            kind,
            title: kind.title(),
            data: ChartData::for_kind(kind, row),
        })
        .collect()
}

fn series(row: &MetricsRow) -> Vec<(&'static str, f64)> {
    row.entries().iter().map(|(name, v)| (name.as_str(), *v)).collect()
}

fn shares(row: &MetricsRow) -> Vec<(&'static str, f64)> {
    // sub-zero temperatures would make slices negative; they contribute
    // nothing to the pie instead
    let total: f64 = row.values().iter().map(|v| v.max(0.0)).sum();
    row.entries()
        .iter()
        .map(|(name, v)| {
            let pct = if total == 0.0 { 0.0 } else { v.max(0.0) / total * 100.0 };
            (name.as_str(), pct)
        })
        .collect()
}

fn histogram(row: &MetricsRow) -> Vec<HistogramBin> {
    let values = row.values();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let width = (max - min) / HISTOGRAM_BINS as f64;

    let mut bins: Vec<HistogramBin> = (0..HISTOGRAM_BINS)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: min + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for v in values {
        let idx = if width == 0.0 {
            // all values identical
            0
        } else {
            (((v - min) / width) as usize).min(HISTOGRAM_BINS - 1)
        };
        bins[idx].count += 1;
    }

    bins
}
