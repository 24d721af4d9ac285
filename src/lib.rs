// src/lib.rs

//! `collapse` - Measurement-result aggregation and histogram rendering
//!
//! This library turns the raw outcomes of repeated circuit executions
//! (booleans, `One`/`Zero` results, and nested tuples or arrays of them) into
//! canonical bit strings, tallies how often each appears, and renders a
//! fixed-width, optionally colorized histogram or a structured JSON summary.

pub mod core;
pub mod config;
pub mod histogram;
pub mod parsing;
pub mod output;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{CanonicalKey, CollapseError, Palette, RawOutcome, Result, canonicalize, display_label};
pub use config::{RenderConfig, ReportFormat};
pub use histogram::{DisplayRow, HistogramRenderer, Layout, Summary, Tally, create_histogram};
pub use parsing::{OutputStyle, outcomes_from_json, parse_outcome, parse_output};
pub use output::{save_report, strip_ansi};
pub use validation::validate_rows;

// Example 1: Single-qubit shots
// Renders a plain-text histogram for four single-bit outcomes.
/// ```
/// use collapse::{HistogramRenderer, RawOutcome, RenderConfig};
///
/// let outcomes: Vec<RawOutcome> = [true, true, false, true]
///     .into_iter()
///     .map(RawOutcome::from)
///     .collect();
///
/// // No styling bytes when colors are off
/// let renderer = HistogramRenderer::new(RenderConfig::default().with_colorful(false));
/// let report = renderer.render_text(&outcomes);
/// println!("{}", report);
///
/// assert!(report.contains("Measurement Results Histogram:"));
/// assert!(report.contains("Total shots: 4"));
///
/// // |1⟩ is the most frequent result, so its row comes first
/// let one = report.find("|1⟩").unwrap();
/// let zero = report.find("|0⟩").unwrap();
/// assert!(one < zero);
/// assert!(report.contains("75.0%"));
/// assert!(report.contains("25.0%"));
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Structured summary
// Produces the JSON frequency mapping instead of the table.
/// ```
/// use collapse::{HistogramRenderer, RawOutcome, CollapseError};
///
/// let outcomes: Vec<RawOutcome> = [true, false, true, true, true]
///     .into_iter()
///     .map(RawOutcome::from)
///     .collect();
///
/// let summary = HistogramRenderer::default().summary(&outcomes);
/// let json: serde_json::Value = serde_json::from_str(&summary.to_json()?)?;
///
/// assert_eq!(json, serde_json::json!({
///     "results": {"1": 4, "0": 1},
///     "total_shots": 5,
///     "result_count": 5
/// }));
/// # Ok::<(), CollapseError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
