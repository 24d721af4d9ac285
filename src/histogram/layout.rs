// src/histogram/layout.rs

//! Column widths and bar lengths for the text report.

use super::tally::Tally;
use crate::core::layout_constants::{
    BAR_WIDTH_RATIO, FIXED_COLUMNS_WIDTH, MAX_BAR_LENGTH, MIN_LABEL_WIDTH, SEPARATOR_BAR_ALLOWANCE,
};
use crate::core::{CanonicalKey, display_label};

/// One line of the histogram, computed once per render and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    /// The canonical key this row aggregates.
    pub key: CanonicalKey,
    /// The key as shown: `|key⟩` for bit strings, the key itself otherwise.
    pub display_label: String,
    /// Occurrences of `key`.
    pub count: usize,
    /// Unrounded share of all outcomes, in percent.
    pub percentage: f64,
    /// Number of bar glyphs drawn for this row.
    pub bar_length: usize,
}

/// Widths shared by every line of one report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// The configured line budget.
    pub max_width: usize,
    /// Width of the `Result` column, in characters.
    pub label_width: usize,
    /// Length of a bar at 100%.
    pub bar_capacity: usize,
    /// Length of the separator rules.
    pub separator_width: usize,
}

impl Layout {
    /// Computes the layout for a set of display labels under `max_width`.
    ///
    /// Widths are measured in characters, so `|1⟩` is three wide.
    pub fn compute<'a, I>(labels: I, max_width: usize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let widest = labels.into_iter().map(|label| label.chars().count()).max().unwrap_or(0);
        let label_width = widest.max(MIN_LABEL_WIDTH);

        // Signed: a narrow budget may leave negative room, which means no bars.
        let available_width = max_width as i64 - label_width as i64 - FIXED_COLUMNS_WIDTH as i64;
        let scaled = (available_width as f64 * BAR_WIDTH_RATIO).floor();
        let bar_capacity = scaled.clamp(0.0, MAX_BAR_LENGTH as f64) as usize;

        let separator_width =
            max_width.min(label_width + FIXED_COLUMNS_WIDTH + SEPARATOR_BAR_ALLOWANCE.min(bar_capacity));

        Self {
            max_width,
            label_width,
            bar_capacity,
            separator_width,
        }
    }

    /// Bar length for a row holding `percentage` percent of all outcomes.
    pub fn bar_length(&self, percentage: f64) -> usize {
        ((percentage / 100.0) * self.bar_capacity as f64).floor().max(0.0) as usize
    }
}

/// Turns a tally into ordered display rows plus the layout they share.
///
/// Rows are ordered by descending count, ties broken by ascending raw key.
pub fn build_rows(tally: &Tally, max_width: usize) -> (Layout, Vec<DisplayRow>) {
    let sorted = tally.sorted();
    let labels: Vec<String> = sorted.iter().map(|(key, _)| display_label(key)).collect();
    let layout = Layout::compute(labels.iter().map(String::as_str), max_width);

    let max_percentage = sorted
        .iter()
        .map(|(key, _)| tally.percentage(key))
        .fold(0.0_f64, f64::max);

    let rows = sorted
        .into_iter()
        .zip(labels)
        .map(|((key, count), label)| {
            let percentage = tally.percentage(key);
            let bar_length = if max_percentage > 0.0 { layout.bar_length(percentage) } else { 0 };
            tracing::trace!(key, count, percentage, bar_length, "laid out histogram row");
            DisplayRow {
                key: key.to_string(),
                display_label: label,
                count,
                percentage,
                bar_length,
            }
        })
        .collect();

    (layout, rows)
}
