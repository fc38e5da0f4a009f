//! Terminal histogram rendering
//!
//! Renders the binned distribution as horizontal bars with spec-limit
//! markers and an optional located-unit marker. A braille-canvas mode
//! draws a compact vertical-bar plot over the padded display axis.

use console::style;
use drawille::Canvas;

use crate::cli::helpers::truncate_str;
use crate::core::histogram::Histogram;

const BAR_MAX_WIDTH: usize = 50;

/// Braille canvas size in drawille pixels (2x4 per output char).
const BRAILLE_WIDTH: u32 = 120;
const BRAILLE_HEIGHT: u32 = 48;

/// Render the histogram as one horizontal bar row per bin.
///
/// Rows are labeled with their bin center; the first and last rows carry
/// the LSL/USL markers since edges are anchored at the limits. `marker`
/// annotates the bin containing a located unit's measurement.
pub fn render_histogram(
    variable: &str,
    hist: &Histogram,
    lsl: f64,
    usl: f64,
    display: (f64, f64),
    marker: Option<(f64, &str)>,
) -> String {
    let bins = hist.bin_count();
    let max_density = hist.max_density();
    let marker_bin = marker.and_then(|(value, _)| hist.bin_of(value));

    let mut lines = Vec::new();
    lines.push(format!(
        "   {} {} ({} in range, {} bins)",
        style("Histogram:").bold(),
        style(variable).cyan(),
        hist.counted(),
        bins
    ));
    lines.push(String::new());

    for i in 0..bins {
        let bar_width = if max_density > 0.0 {
            (hist.densities[i] / max_density * BAR_MAX_WIDTH as f64) as usize
        } else {
            0
        };
        let center = (hist.edges[i] + hist.edges[i + 1]) / 2.0;
        let bar = "█".repeat(bar_width);

        let mut notes = String::new();
        if i == 0 {
            notes.push_str(&format!(" {}", style("◄LSL").cyan()));
        }
        if i == bins - 1 {
            notes.push_str(&format!(" {}", style("◄USL").cyan()));
        }
        if marker_bin == Some(i) {
            if let Some((_, label)) = marker {
                notes.push_str(&format!(" {}", style(format!("◀ {}", label)).green().bold()));
            }
        }

        lines.push(format!(
            "   {:>10.4} │{:<width$}│ {:>5}{}",
            center,
            style(bar).blue(),
            hist.counts[i],
            notes,
            width = BAR_MAX_WIDTH
        ));
    }

    lines.push(format!("   {:>10} └{}┘", "", "─".repeat(BAR_MAX_WIDTH)));
    lines.push(format!(
        "   {} LSL={:.4}  USL={:.4}  axis=[{:.4}, {:.4}]",
        style("Legend:").dim(),
        lsl,
        usl,
        display.0,
        display.1
    ));

    if let Some((value, label)) = marker {
        if hist.bin_of(value).is_none() {
            lines.push(format!(
                "   {}",
                style(format!(
                    "marker for {} at {:.4} lies outside the binned range",
                    label, value
                ))
                .yellow()
            ));
        }
    }

    lines.join("\n")
}

/// Render the histogram on a braille canvas over the padded display axis.
///
/// Vertical bars span each bin's edge range, limit boundaries are drawn as
/// dashed vertical lines, and a located unit renders as a glyph at the
/// vertical midline of the plot (horizontal position only).
pub fn render_braille(
    variable: &str,
    hist: &Histogram,
    lsl: f64,
    usl: f64,
    display: (f64, f64),
    marker: Option<(f64, &str)>,
) -> String {
    let (lo, hi) = display;
    let span = hi - lo;
    let mut canvas = Canvas::new(BRAILLE_WIDTH, BRAILLE_HEIGHT);
    let floor = BRAILLE_HEIGHT - 1;

    let x_of = |value: f64| -> Option<u32> {
        if span <= 0.0 {
            return None;
        }
        let t = (value - lo) / span;
        if !(0.0..=1.0).contains(&t) {
            return None;
        }
        Some((t * (BRAILLE_WIDTH - 1) as f64).round() as u32)
    };

    // bars
    let max_density = hist.max_density();
    for i in 0..hist.bin_count() {
        let height = if max_density > 0.0 {
            (hist.densities[i] / max_density * (BRAILLE_HEIGHT - 2) as f64).round() as u32
        } else {
            0
        };
        if height == 0 {
            continue;
        }
        if let (Some(x0), Some(x1)) = (x_of(hist.edges[i]), x_of(hist.edges[i + 1])) {
            for x in x0..=x1 {
                canvas.line(x, floor - height, x, floor);
            }
        }
    }

    // dashed limit boundaries
    for limit in [lsl, usl] {
        if let Some(x) = x_of(limit) {
            let mut y = 0;
            while y < BRAILLE_HEIGHT {
                canvas.set(x, y);
                y += 2;
            }
        }
    }

    // located-unit glyph at the vertical midline
    if let Some((value, _)) = marker {
        if let Some(x) = x_of(value) {
            let mid = BRAILLE_HEIGHT / 2;
            canvas.set(x, mid);
            canvas.set(x.saturating_sub(1), mid - 1);
            canvas.set(x, mid - 1);
            canvas.set(x + 1, mid - 1);
        }
    }

    let mut lines = Vec::new();
    lines.push(format!(
        "  {} {} ({} in range)",
        style("Histogram:").bold(),
        style(variable).cyan(),
        hist.counted()
    ));
    lines.push(canvas.frame());
    lines.push(format!(
        "  {} LSL={:.4}  USL={:.4}  axis=[{:.4}, {:.4}]",
        style("Legend:").dim(),
        lsl,
        usl,
        display.0,
        display.1
    ));
    if let Some((value, label)) = marker {
        if x_of(value).is_some() {
            lines.push(format!(
                "  {} {} at {:.4}",
                style("▼").green().bold(),
                label,
                value
            ));
        } else {
            lines.push(format!(
                "  {}",
                style(format!(
                    "marker for {} at {:.4} lies outside the display range",
                    label, value
                ))
                .yellow()
            ));
        }
    }
    lines.join("\n")
}

/// Render a located unit's full record as a one-row table with column
/// headers. An empty record (the cleared presentation) renders as nothing.
pub fn render_record_table(record: &[(String, String)]) -> String {
    if record.is_empty() {
        return String::new();
    }

    let mut builder = tabled::builder::Builder::default();
    builder.push_record(record.iter().map(|(name, _)| name.clone()));
    builder.push_record(record.iter().map(|(_, value)| truncate_str(value, 24)));

    let mut table = builder.build();
    table.with(tabled::settings::Style::sharp());
    table.to_string()
}
