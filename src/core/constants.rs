//! Layout constants shared by the histogram renderer.

/// Fixed numbers governing the histogram table layout.
pub mod layout_constants {
    /// Narrowest the `Result` column may ever be.
    pub const MIN_LABEL_WIDTH: usize = 8;
    /// Characters reserved for the Count and Percent columns and their separators.
    pub const FIXED_COLUMNS_WIDTH: usize = 18;
    /// Share of the leftover width that bars may occupy.
    pub const BAR_WIDTH_RATIO: f64 = 0.6;
    /// Hard cap on the longest bar.
    pub const MAX_BAR_LENGTH: usize = 40;
    /// Bar allowance used when sizing the separator rules.
    pub const SEPARATOR_BAR_ALLOWANCE: usize = 20;
    /// Line width used when the caller does not choose one.
    pub const DEFAULT_MAX_WIDTH: usize = 80;
    /// Fill characters, cycled by row index.
    pub const BAR_GLYPHS: [char; 4] = ['█', '▓', '▒', '░'];
}
