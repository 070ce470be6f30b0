use owo_colors::OwoColorize;
use std::io::IsTerminal;

use super::dataset::BodySummary;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format the per-body summary as an aligned table:
/// body, rows, mean P_life, mean IELS.
pub fn format_summary_table(summaries: &[BodySummary], use_colors: bool) -> String {
    if summaries.is_empty() {
        return "No bodies scored.".to_string();
    }

    let name_width = summaries
        .iter()
        .map(|s| s.body.len())
        .max()
        .unwrap_or(0)
        .max("Body".len());

    let mut lines = Vec::with_capacity(summaries.len() + 1);
    let header = format!(
        "{:<name_width$}  {:>6}  {:>10}  {:>10}",
        "Body", "Rows", "P_life", "IELS"
    );
    lines.push(if use_colors {
        header.bold().to_string()
    } else {
        header
    });

    for summary in summaries {
        let p_life = format_metric(summary.mean_life_probability);
        let iels = format_metric(summary.mean_earth_likeness);
        if use_colors {
            lines.push(format!(
                "{:<name_width$}  {:>6}  {:>10}  {:>10}",
                summary.body.cyan(),
                summary.rows,
                p_life.green(),
                iels.yellow(),
            ));
        } else {
            lines.push(format!(
                "{:<name_width$}  {:>6}  {:>10}  {:>10}",
                summary.body, summary.rows, p_life, iels,
            ));
        }
    }

    lines.join("\n")
}

/// Format a [0, 1] metric compactly: scientific notation for tiny values,
/// fixed precision otherwise.
pub fn format_metric(value: f64) -> String {
    if value != 0.0 && value.abs() < 1e-4 {
        format!("{:.3e}", value)
    } else {
        format!("{:.4}", value)
    }
}
