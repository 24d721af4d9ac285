// src/histogram/report.rs

use super::layout::{DisplayRow, Layout};
use super::tally::Tally;
use crate::core::{CollapseError, Palette, Result};
use crate::core::layout_constants::BAR_GLYPHS;
use serde::{Deserialize, Serialize};

/// Title line of every text report.
pub const REPORT_TITLE: &str = "Measurement Results Histogram:";
/// Prefix of the footer line, followed by the outcome count.
pub const FOOTER_PREFIX: &str = "Total shots: ";

/// Pads `text` with spaces on the right to `width` characters.
fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut padded = String::with_capacity(text.len() + width.saturating_sub(len));
    padded.push_str(text);
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(len)));
    padded
}

/// Writes the text report for already laid-out rows.
///
/// Every styled piece is `{style}{text}{reset}`; with [`Palette::PLAIN`] the
/// style and reset are empty so no escape bytes appear.
pub fn format_text(rows: &[DisplayRow], layout: &Layout, total: usize, palette: &Palette) -> String {
    let p = palette;
    let rule = format!("{}{}{}", p.border, "-".repeat(layout.separator_width), p.reset);

    let mut lines = Vec::with_capacity(rows.len() + 6);
    lines.push(format!("{}{}{}", p.header, REPORT_TITLE, p.reset));
    lines.push(rule.clone());
    lines.push(format!(
        "{}{} {}| {}{:<6} {}| {}{:<5} {}| {}Distribution{}",
        p.label,
        pad_right("Result", layout.label_width),
        p.reset,
        p.count,
        "Count",
        p.reset,
        p.percent,
        "%",
        p.reset,
        p.bar,
        p.reset,
    ));
    lines.push(rule.clone());

    for (index, row) in rows.iter().enumerate() {
        // Glyphs rotate by position so adjacent bars stay distinguishable.
        let glyph = BAR_GLYPHS[index % BAR_GLYPHS.len()];
        let bar: String = std::iter::repeat_n(glyph, row.bar_length).collect();
        lines.push(format!(
            "{}{} {}| {}{:<6} {}| {}{:>4.1}% {}| {}{}{}",
            p.label,
            pad_right(&row.display_label, layout.label_width),
            p.reset,
            p.count,
            row.count,
            p.reset,
            p.percent,
            row.percentage,
            p.reset,
            p.bar,
            bar,
            p.reset,
        ));
    }

    lines.push(rule);
    lines.push(format!("{}{}{}{}{}", p.header, FOOTER_PREFIX, p.count, total, p.reset));

    lines.join("\n")
}

/// Structured report: the raw tally plus shot bookkeeping.
///
/// Serializes as `{"results": {key: count, ...}, "total_shots": n, "result_count": m}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Occurrences per canonical key, in first-seen order.
    pub results: Tally,
    /// Shots the caller asked the engine for.
    pub total_shots: usize,
    /// Outcomes actually tallied. May differ from `total_shots`.
    pub result_count: usize,
}

impl Summary {
    /// Builds a summary whose shot count is the number of tallied outcomes.
    pub fn new(results: Tally) -> Self {
        let count = results.total();
        Self::with_shots(results, count)
    }

    /// Builds a summary with a caller-supplied shot count.
    pub fn with_shots(results: Tally, total_shots: usize) -> Self {
        let result_count = results.total();
        Self {
            results,
            total_shots,
            result_count,
        }
    }

    /// Pretty-printed JSON form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a summary previously produced by [`Summary::to_json`].
    ///
    /// # Errors
    /// * `CollapseError::Serialization` if the text is not a summary object.
    /// * `CollapseError::InvalidInput` if `result_count` disagrees with the counts in `results`.
    pub fn from_json(text: &str) -> Result<Self> {
        let summary: Summary = serde_json::from_str(text)?;
        if summary.result_count != summary.results.total() {
            return Err(CollapseError::invalid_input(format!(
                "result_count is {} but results hold {} outcomes",
                summary.result_count,
                summary.results.total()
            )));
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::histogram::layout::build_rows;

    fn tally_of(keys: &[&str]) -> Tally {
        let mut tally = Tally::new();
        for key in keys {
            tally.record(key.to_string());
        }
        tally
    }

    #[test]
    fn pads_by_characters() {
        assert_eq!(pad_right("|1⟩", 8), "|1⟩     ");
        assert_eq!(pad_right("toolongvalue", 4), "toolongvalue");
    }

    #[test]
    fn plain_report_lines() {
        let tally = tally_of(&["1", "1", "0", "1"]);
        let (layout, rows) = build_rows(&tally, 80);
        let text = format_text(&rows, &layout, tally.total(), &Palette::PLAIN);
        let lines: Vec<&str> = text.lines().collect();

        let rule = "-".repeat(46);
        let expected = vec![
            "Measurement Results Histogram:".to_string(),
            rule.clone(),
            "Result   | Count  | %     | Distribution".to_string(),
            rule.clone(),
            format!("|1⟩      | 3      | 75.0% | {}", "█".repeat(24)),
            format!("|0⟩      | 1      | 25.0% | {}", "▓".repeat(8)),
            rule.clone(),
            "Total shots: 4".to_string(),
        ];
        assert_eq!(lines, expected);
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn colorful_report_wraps_pieces() {
        let tally = tally_of(&["0"]);
        let (layout, rows) = build_rows(&tally, 80);
        let text = format_text(&rows, &layout, tally.total(), &Palette::ANSI);

        assert!(text.starts_with("\x1b[1;36mMeasurement Results Histogram:\x1b[0m"));
        assert!(text.ends_with("\x1b[1;36mTotal shots: \x1b[0;93m1\x1b[0m"));
        assert!(text.contains("\x1b[0;92m100.0% \x1b[0m"));
    }

    #[test]
    fn summary_json_shape() -> Result<()> {
        let summary = Summary::with_shots(tally_of(&["1", "0", "1"]), 1024);
        let value: serde_json::Value = serde_json::from_str(&summary.to_json()?)?;
        assert_eq!(value, serde_json::json!({
            "results": {"1": 2, "0": 1},
            "total_shots": 1024,
            "result_count": 3,
        }));

        let back = Summary::from_json(&summary.to_json()?)?;
        assert_eq!(back, summary);
        Ok(())
    }

    #[test]
    fn summary_rejects_mismatched_result_count() {
        let text = r#"{"results": {"1": 2, "0": 1}, "total_shots": 3, "result_count": 5}"#;
        let err = Summary::from_json(text).unwrap_err();
        assert!(matches!(err, CollapseError::InvalidInput { .. }));
    }

    #[test]
    fn summary_rejects_overflowing_counts() {
        let text = format!(
            r#"{{"results": {{"a": {}, "b": 1}}, "total_shots": 1, "result_count": 1}}"#,
            usize::MAX
        );
        let err = Summary::from_json(&text).unwrap_err();
        assert!(matches!(err, CollapseError::Serialization(_)));
    }
}
