// src/histogram/mod.rs

//! Tallies measurement outcomes and renders them as a histogram.
//! This module contains the `HistogramRenderer` entry point; the tally, the
//! layout arithmetic, and the report writers live in submodules.

mod layout;
mod report;
mod tally;

// Re-export the main public interface types
pub use layout::{DisplayRow, Layout, build_rows};
pub use report::{FOOTER_PREFIX, REPORT_TITLE, Summary, format_text};
pub use tally::Tally;

use crate::config::{RenderConfig, ReportFormat};
use crate::core::{RawOutcome, Result};
use tracing::{debug, warn};

/// Stateless renderer turning outcome sequences into reports.
///
/// Holds only the caller's `RenderConfig`. Each call canonicalizes, tallies,
/// and lays out from scratch, so one renderer can serve any number of
/// independent inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistogramRenderer {
    config: RenderConfig,
}

impl HistogramRenderer {
    /// Creates a renderer for the given configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The configuration this renderer reads.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Canonicalizes and counts the outcomes. No layout is computed.
    pub fn tally(&self, outcomes: &[RawOutcome]) -> Tally {
        Tally::from_outcomes(outcomes)
    }

    /// Computes the ordered display rows and the layout they share.
    pub fn rows(&self, outcomes: &[RawOutcome]) -> (Layout, Vec<DisplayRow>) {
        build_rows(&self.tally(outcomes), self.config.max_width)
    }

    /// Renders the text report.
    ///
    /// An empty outcome sequence is valid: the report carries the header,
    /// rules, and a `Total shots: 0` footer with no data rows.
    pub fn render_text(&self, outcomes: &[RawOutcome]) -> String {
        let tally = self.tally(outcomes);
        let (layout, rows) = build_rows(&tally, self.config.max_width);

        if layout.bar_capacity == 0 && !rows.is_empty() {
            warn!(
                max_width = self.config.max_width,
                label_width = layout.label_width,
                "line budget leaves no room for distribution bars"
            );
        }
        debug!(
            outcomes = tally.total(),
            distinct = tally.distinct(),
            label_width = layout.label_width,
            bar_capacity = layout.bar_capacity,
            colorful = self.config.colorful,
            "rendering histogram"
        );

        format_text(&rows, &layout, tally.total(), &self.config.palette())
    }

    /// Builds the structured summary; `total_shots` equals the outcome count.
    pub fn summary(&self, outcomes: &[RawOutcome]) -> Summary {
        Summary::new(self.tally(outcomes))
    }

    /// Builds the structured summary with the shot count the caller configured.
    pub fn summary_with_shots(&self, outcomes: &[RawOutcome], total_shots: usize) -> Summary {
        let tally = self.tally(outcomes);
        if tally.total() != total_shots {
            debug!(total_shots, result_count = tally.total(), "shot count differs from outcomes tallied");
        }
        Summary::with_shots(tally, total_shots)
    }

    /// Renders in the requested format: the text table, or the summary as JSON.
    pub fn render(&self, outcomes: &[RawOutcome], format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text(outcomes)),
            ReportFormat::Json => self.summary(outcomes).to_json(),
        }
    }
}

/// Renders the text report for `outcomes` under `config`.
pub fn create_histogram(outcomes: &[RawOutcome], config: &RenderConfig) -> String {
    HistogramRenderer::new(*config).render_text(outcomes)
}
