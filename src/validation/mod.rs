// src/validation/mod.rs

//! Provides functions to check rendered histogram rows against the counting
//! and ordering rules every report must satisfy.

use crate::core::{CollapseError, Result};
use crate::histogram::{DisplayRow, Layout};

// Default tolerance value (can be overridden by caller)
const DEFAULT_PERCENT_TOLERANCE: f64 = 1e-9;

/// Sums the unrounded percentages of all rows.
pub fn percentage_total(rows: &[DisplayRow]) -> f64 {
    rows.iter().map(|row| row.percentage).sum()
}

/// Checks that the row counts add up to the number of outcomes rendered.
///
/// # Arguments
/// * `rows` - The rows of one report.
/// * `outcome_count` - How many outcomes were fed to the renderer.
///
/// # Returns
/// * `Ok(())` if the counts are conserved.
/// * `Err(CollapseError::InvariantViolation)` otherwise.
pub fn check_count_conservation(rows: &[DisplayRow], outcome_count: usize) -> Result<()> {
    let counted: usize = rows.iter().map(|row| row.count).sum();
    if counted != outcome_count {
        return Err(CollapseError::invariant(format!(
            "Row counts sum to {} but {} outcomes were rendered",
            counted, outcome_count
        )));
    }
    Ok(())
}

/// Checks that the unrounded percentages sum to 100 (or to 0 for an empty report).
///
/// # Arguments
/// * `rows` - The rows of one report.
/// * `tolerance` - Allowed absolute deviation, in percentage points. Defaults to 1e-9.
pub fn check_percentage_sum(rows: &[DisplayRow], tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_PERCENT_TOLERANCE);
    let expected = if rows.is_empty() { 0.0 } else { 100.0 };
    let total = percentage_total(rows);
    if (total - expected).abs() > effective_tolerance {
        Err(CollapseError::invariant(format!(
            "Percentages sum to {} (expected {}, deviation > {})",
            total, expected, effective_tolerance
        )))
    } else {
        Ok(())
    }
}

/// Checks that rows are non-increasing in count, with equal counts in ascending key order.
pub fn check_row_ordering(rows: &[DisplayRow]) -> Result<()> {
    for (index, pair) in rows.windows(2).enumerate() {
        let (a, b) = (&pair[0], &pair[1]);
        let ordered = a.count > b.count || (a.count == b.count && a.key < b.key);
        if !ordered {
            return Err(CollapseError::invariant(format!(
                "Rows {} ('{}', {}) and {} ('{}', {}) are out of order",
                index,
                a.key,
                a.count,
                index + 1,
                b.key,
                b.count
            )));
        }
    }
    Ok(())
}

/// Checks that no bar is longer than the layout allows.
pub fn check_bar_lengths(rows: &[DisplayRow], layout: &Layout) -> Result<()> {
    match rows.iter().find(|row| row.bar_length > layout.bar_capacity) {
        Some(row) => Err(CollapseError::invariant(format!(
            "Bar for '{}' has length {} but capacity is {}",
            row.key, row.bar_length, layout.bar_capacity
        ))),
        None => Ok(()),
    }
}

/// Runs every row check.
///
/// # Arguments
/// * `rows` - The rows of one report.
/// * `layout` - The layout the rows were computed under.
/// * `outcome_count` - How many outcomes were fed to the renderer.
/// * `tolerance` - Optional percentage tolerance, see [`check_percentage_sum`].
pub fn validate_rows(
    rows: &[DisplayRow],
    layout: &Layout,
    outcome_count: usize,
    tolerance: Option<f64>,
) -> Result<()> {
    check_count_conservation(rows, outcome_count)?;
    check_percentage_sum(rows, tolerance)?;
    check_row_ordering(rows)?;
    check_bar_lengths(rows, layout)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::display_label;

    fn row(key: &str, count: usize, percentage: f64) -> DisplayRow {
        DisplayRow {
            key: key.to_string(),
            display_label: display_label(key),
            count,
            percentage,
            bar_length: 0,
        }
    }

    #[test]
    fn accepts_consistent_rows() -> Result<()> {
        let rows = vec![row("10", 2, 50.0), row("01", 1, 25.0), row("11", 1, 25.0)];
        let layout = Layout::compute(rows.iter().map(|r| r.display_label.as_str()), 80);
        validate_rows(&rows, &layout, 4, None)
    }

    #[test]
    fn accepts_empty_report() -> Result<()> {
        let layout = Layout::compute(std::iter::empty::<&str>(), 80);
        validate_rows(&[], &layout, 0, None)
    }

    #[test]
    fn rejects_lost_counts() {
        let rows = vec![row("1", 3, 75.0)];
        assert!(matches!(
            check_count_conservation(&rows, 4),
            Err(CollapseError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn rejects_bad_percentages() {
        let rows = vec![row("1", 3, 75.0), row("0", 1, 20.0)];
        assert!(check_percentage_sum(&rows, None).is_err());
        assert!(check_percentage_sum(&rows, Some(5.0)).is_ok());
    }

    #[test]
    fn rejects_misordered_ties() {
        let rows = vec![row("11", 1, 50.0), row("01", 1, 50.0)];
        assert!(check_row_ordering(&rows).is_err());
        let rows = vec![row("0", 1, 25.0), row("1", 3, 75.0)];
        assert!(check_row_ordering(&rows).is_err());
    }

    #[test]
    fn rejects_overlong_bars() {
        let mut rows = vec![row("1", 1, 100.0)];
        let layout = Layout::compute(["|1⟩"], 80);
        rows[0].bar_length = layout.bar_capacity + 1;
        assert!(check_bar_lengths(&rows, &layout).is_err());
    }
}
