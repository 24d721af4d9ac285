// src/core/palette.rs

//! Styling table applied to each structural piece of a text report.

/// A fixed set of styling sequences, one per structural piece of the report.
///
/// The table is read-only; the renderer picks [`Palette::ANSI`] or
/// [`Palette::PLAIN`] from the `RenderConfig` and threads it through every
/// line it writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Title and footer text.
    pub header: &'static str,
    /// Separator rules.
    pub border: &'static str,
    /// Result labels.
    pub label: &'static str,
    /// Occurrence counts.
    pub count: &'static str,
    /// Percentages.
    pub percent: &'static str,
    /// Distribution bars.
    pub bar: &'static str,
    /// Terminates any of the above.
    pub reset: &'static str,
}

impl Palette {
    /// Terminal styling: bold cyan headers, gray borders, white labels,
    /// yellow counts, green percentages, blue bars.
    pub const ANSI: Palette = Palette {
        header: "\x1b[1;36m",
        border: "\x1b[0;37m",
        label: "\x1b[0;97m",
        count: "\x1b[0;93m",
        percent: "\x1b[0;92m",
        bar: "\x1b[0;94m",
        reset: "\x1b[0m",
    };

    /// No styling bytes at all.
    pub const PLAIN: Palette = Palette {
        header: "",
        border: "",
        label: "",
        count: "",
        percent: "",
        bar: "",
        reset: "",
    };

    /// Returns `true` if this palette emits no bytes.
    pub fn is_plain(&self) -> bool {
        *self == Palette::PLAIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_is_empty() {
        let p = Palette::PLAIN;
        for piece in [p.header, p.border, p.label, p.count, p.percent, p.bar, p.reset] {
            assert!(piece.is_empty());
        }
        assert!(p.is_plain());
        assert!(!Palette::ANSI.is_plain());
    }

    #[test]
    fn ansi_palette_pieces_are_csi_sequences() {
        let p = Palette::ANSI;
        for piece in [p.header, p.border, p.label, p.count, p.percent, p.bar, p.reset] {
            assert!(piece.starts_with("\x1b["));
            assert!(piece.ends_with('m'));
        }
    }
}
