// src/output.rs

//! Writing reports to non-terminal sinks.

use crate::core::Result;
use std::fs;
use std::path::Path;
use tracing::info;

const ESC: char = '\x1b';

/// Removes ANSI escape sequences from `text`.
///
/// Handles control sequences (`ESC [ <parameters> <intermediates> <final>`)
/// and two-character escapes whose second character lies in `'@'..='_'`.
/// An `ESC` followed by anything else, or at the end of the input, is kept.
pub fn strip_ansi(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != ESC {
            stripped.push(c);
            continue;
        }
        match chars.peek() {
            Some('[') => {
                chars.next();
                // Parameter and intermediate bytes run up to the final byte in '@'..='~'.
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            Some(next) if ('@'..='_').contains(next) => {
                chars.next();
            }
            _ => stripped.push(c),
        }
    }

    stripped
}

/// Writes `report` to `path`, replacing any existing file.
///
/// With `strip_styling`, escape sequences are removed first so the file holds
/// plain text.
pub fn save_report(path: impl AsRef<Path>, report: &str, strip_styling: bool) -> Result<()> {
    let path = path.as_ref();
    if strip_styling {
        fs::write(path, strip_ansi(report))?;
    } else {
        fs::write(path, report)?;
    }
    info!(path = %path.display(), strip_styling, "saved report");
    Ok(())
}
