//! Terminal rendering of the view model.
//!
//! Pure formatting: everything here turns an already-composed
//! [`ViewModel`] into text. No metric value is computed or altered.

use weatherdash_core::chart::HistogramBin;
use weatherdash_core::{ChartData, ChartKind, ChartPanel, ViewModel};

const BAR_WIDTH: usize = 30;
const SPARK_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub fn print_dashboard(vm: &ViewModel) {
    print!("{}", dashboard_string(vm));
}

fn dashboard_string(vm: &ViewModel) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Weather Dashboard — {} ({}, {} theme)\n",
        vm.city, vm.unit, vm.theme
    ));
    out.push_str(&format!("background {}\n\n", vm.palette.background));

    // KPI card row
    for card in &vm.cards {
        out.push_str(&format!(
            "  [{}] {} {}{}\n",
            card.color,
            card.label,
            fmt_value(card.value),
            card.suffix
        ));
    }
    out.push('\n');

    out.push_str(&format!("Location: {:.3}, {:.3}\n", vm.pin.0, vm.pin.1));
    out.push_str(&format!(
        "Sun Timings (UTC): sunrise {}  sunset {}\n\n",
        vm.sunrise, vm.sunset
    ));

    for panel in &vm.panels {
        out.push_str(&panel_string(panel));
        out.push('\n');
    }

    out
}

fn panel_string(panel: &ChartPanel) -> String {
    let mut out = format!("── {} ──\n", panel.title);

    match &panel.data {
        ChartData::Series { points } => match panel.kind {
            ChartKind::Line => out.push_str(&line_chart(points)),
            ChartKind::HBar => out.push_str(&bar_chart(points, '█', true)),
            ChartKind::Area => out.push_str(&bar_chart(points, '▒', false)),
            _ => out.push_str(&bar_chart(points, '█', false)),
        },
        ChartData::Shares { slices } => out.push_str(&pie_chart(slices)),
        ChartData::Histogram { bins } => out.push_str(&histogram_chart(bins)),
    }

    out
}

fn line_chart(points: &[(&'static str, f64)]) -> String {
    let values: Vec<f64> = points.iter().map(|(_, v)| *v).collect();
    let labels = points
        .iter()
        .map(|(label, v)| format!("{label}={}", fmt_value(*v)))
        .collect::<Vec<_>>()
        .join("  ");

    format!("  {}\n  {labels}\n", sparkline(&values))
}

fn bar_chart(points: &[(&'static str, f64)], fill: char, ranked: bool) -> String {
    let mut points: Vec<(&str, f64)> = points.iter().map(|(l, v)| (*l, *v)).collect();
    if ranked {
        points.sort_by(|a, b| b.1.total_cmp(&a.1));
    }

    let max = points.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);
    let label_width = points.iter().map(|(l, _)| l.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (label, value) in &points {
        out.push_str(&format!(
            "  {label:<label_width$} │{} {}\n",
            fill.to_string().repeat(bar_len(*value, max)),
            fmt_value(*value)
        ));
    }
    out
}

fn pie_chart(slices: &[(&'static str, f64)]) -> String {
    let label_width = slices.iter().map(|(l, _)| l.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (label, pct) in slices {
        out.push_str(&format!(
            "  {label:<label_width$} {pct:>5.1}% {}\n",
            "█".repeat(bar_len(*pct, 100.0))
        ));
    }
    out
}

fn histogram_chart(bins: &[HistogramBin]) -> String {
    let max = bins.iter().map(|b| b.count).max().unwrap_or(0);

    let mut out = String::new();
    for bin in bins {
        out.push_str(&format!(
            "  [{:>7.1} .. {:>7.1})  {}  {}\n",
            bin.lower,
            bin.upper,
            bin.count,
            "█".repeat(bar_len(bin.count as f64, max as f64))
        ));
    }
    out
}

/// Bar length scaled against the panel maximum; non-zero values always
/// get at least one cell, negatives get none.
fn bar_len(value: f64, max: f64) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    let len = (value / max * BAR_WIDTH as f64).round() as usize;
    len.clamp(1, BAR_WIDTH)
}

fn sparkline(values: &[f64]) -> String {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    values
        .iter()
        .map(|v| {
            if max == min {
                SPARK_GLYPHS[3]
            } else {
                let idx = ((v - min) / (max - min) * 7.0).round() as usize;
                SPARK_GLYPHS[idx.min(7)]
            }
        })
        .collect()
}

/// Whole numbers without a decimal point, everything else to one decimal.
fn fmt_value(v: f64) -> String {
    if v.fract().abs() < 1e-9 {
        format!("{}", v as i64)
    } else {
        format!("{v:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weatherdash_core::{DisplayUnit, Selection, Theme, WeatherReading};

    fn sample_vm() -> ViewModel {
        let reading = WeatherReading {
            city: "Chennai".into(),
            temperature_c: 20.0,
            feels_like_c: 18.0,
            humidity_pct: 60,
            pressure_hpa: 1013,
            wind_speed_mps: 3.5,
            latitude: 13.0878,
            longitude: 80.2785,
            sunrise_epoch: 1_700_000_000,
            sunset_epoch: 1_700_040_000,
        };
        let selection = Selection {
            city: "Chennai".into(),
            unit: DisplayUnit::Celsius,
            theme: Theme::Light,
        };
        ViewModel::compose(&reading, &selection, 10)
    }

    #[test]
    fn fmt_value_trims_whole_numbers() {
        assert_eq!(fmt_value(60.0), "60");
        assert_eq!(fmt_value(3.5), "3.5");
        assert_eq!(fmt_value(64.4), "64.4");
        assert_eq!(fmt_value(-40.0), "-40");
    }

    #[test]
    fn bar_len_scales_against_max() {
        assert_eq!(bar_len(1013.0, 1013.0), BAR_WIDTH);
        assert_eq!(bar_len(0.0, 1013.0), 0);
        assert_eq!(bar_len(-5.0, 1013.0), 0);
        // small but non-zero values stay visible
        assert_eq!(bar_len(1.0, 1013.0), 1);
    }

    #[test]
    fn sparkline_marks_extremes() {
        let line = sparkline(&[0.0, 50.0, 100.0]);
        let chars: Vec<char> = line.chars().collect();
        assert_eq!(chars[0], '▁');
        assert_eq!(chars[2], '█');
    }

    #[test]
    fn sparkline_is_flat_for_identical_values() {
        assert_eq!(sparkline(&[5.0, 5.0, 5.0]), "▄▄▄");
    }

    #[test]
    fn dashboard_contains_all_sections() {
        let text = dashboard_string(&sample_vm());

        assert!(text.contains("Weather Dashboard — Chennai"));
        assert!(text.contains("Temperature 20°C"));
        assert!(text.contains("Humidity 60%"));
        assert!(text.contains("Location: 13.088"));
        assert!(text.contains("sunrise 22:13"));
        assert!(text.contains("sunset 09:20"));

        for title in [
            "Trend Analysis",
            "Value Comparison",
            "Proportion View",
            "Rank Comparison",
            "Volume Change",
            "Distribution Pattern",
        ] {
            assert!(text.contains(title), "missing panel: {title}");
        }
    }

    #[test]
    fn ranked_bars_are_sorted_descending() {
        let points = [("A", 1.0), ("B", 3.0), ("C", 2.0)];
        let chart = bar_chart(&points, '█', true);

        let b = chart.find("B").unwrap();
        let c = chart.find("C").unwrap();
        let a = chart.find("A").unwrap();
        assert!(b < c && c < a);
    }
}
