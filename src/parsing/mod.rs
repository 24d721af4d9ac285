// src/parsing/mod.rs

//! Adapters that turn execution-engine output into [`RawOutcome`] values.
//!
//! Engines report results in a handful of textual shapes: one result per line
//! in the `(One, Zero)` / `[One, Zero]` notation, JSON arrays of booleans and
//! result names, or a remote job response carrying a label/probability
//! histogram. Everything here maps those shapes onto the closed outcome model
//! so the histogram never inspects foreign types.

use crate::core::{CollapseError, RawOutcome, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// How result lines are picked out of an engine's standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Only the last non-empty line is a result; earlier lines are program output.
    #[default]
    LastLine,
    /// One result per line, interleaved with `METADATA`, `START` and `END` markers.
    Qir,
}

const QIR_MARKERS: [&str; 3] = ["METADATA", "START", "END"];

/// Deepest bracket nesting the result parser accepts; deeper lines stay opaque.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Selects the lines of `stdout` that carry results.
pub fn extract_result_lines(stdout: &str, style: OutputStyle) -> Vec<&str> {
    let lines = stdout.lines().map(str::trim).filter(|line| !line.is_empty());
    match style {
        OutputStyle::LastLine => lines.last().into_iter().collect(),
        OutputStyle::Qir => lines
            .filter(|line| !QIR_MARKERS.iter().any(|marker| line.starts_with(*marker)))
            .collect(),
    }
}

/// Parses every result line of `stdout` into an outcome.
pub fn parse_output(stdout: &str, style: OutputStyle) -> Vec<RawOutcome> {
    let outcomes: Vec<RawOutcome> = extract_result_lines(stdout, style)
        .into_iter()
        .map(parse_outcome)
        .collect();
    debug!(?style, outcomes = outcomes.len(), "parsed engine output");
    outcomes
}

/// Parses one result written in the engine's textual notation.
///
/// * `true` / `false`, `One` / `Zero` become bits;
/// * `None` / `null` become [`RawOutcome::Absent`];
/// * `(a, b, ...)` and `[a, b, ...]` become groups, nested to any depth;
/// * anything else, including unbalanced brackets or nesting deeper than
///   [`MAX_NESTING_DEPTH`], is kept as opaque text.
///
/// Never fails.
pub fn parse_outcome(text: &str) -> RawOutcome {
    let trimmed = text.trim();
    let mut parser = Parser { input: trimmed, pos: 0, depth: 0 };
    match parser.parse_value() {
        Some(outcome) if parser.at_end() => outcome,
        _ => RawOutcome::Opaque(trimmed.to_string()),
    }
}

/// Recursive-descent reader over the result notation. `None` means "not well formed".
struct Parser<'a> {
    input: &'a str,
    pos: usize,
    /// Groups currently open.
    depth: usize,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.pos == self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn parse_value(&mut self) -> Option<RawOutcome> {
        self.skip_whitespace();
        match self.peek()? {
            '(' => self.parse_group(')'),
            '[' => self.parse_group(']'),
            _ => self.parse_atom(),
        }
    }

    fn parse_group(&mut self, close: char) -> Option<RawOutcome> {
        if self.depth == MAX_NESTING_DEPTH {
            return None;
        }
        self.depth += 1;
        let group = self.parse_group_items(close);
        self.depth -= 1;
        group
    }

    fn parse_group_items(&mut self, close: char) -> Option<RawOutcome> {
        self.pos += 1; // opening bracket
        let mut items = Vec::new();

        self.skip_whitespace();
        if self.peek()? == close {
            self.pos += 1;
            return Some(RawOutcome::Group(items));
        }

        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek()? {
                ',' => self.pos += 1,
                c if c == close => {
                    self.pos += 1;
                    return Some(RawOutcome::Group(items));
                }
                _ => return None,
            }
        }
    }

    fn parse_atom(&mut self) -> Option<RawOutcome> {
        let rest = self.rest();
        let len = rest
            .find(|c: char| matches!(c, ',' | '(' | ')' | '[' | ']'))
            .unwrap_or(rest.len());
        let token = rest[..len].trim();
        if token.is_empty() {
            return None;
        }
        self.pos += len;

        Some(match token {
            "true" => RawOutcome::Bit(true),
            "false" => RawOutcome::Bit(false),
            "None" | "null" => RawOutcome::Absent,
            other => RawOutcome::named(other),
        })
    }
}

/// Maps a JSON value onto the outcome model.
///
/// Booleans become bits, arrays become groups, `null` becomes `Absent`, strings
/// go through [`RawOutcome::named`], and numbers or objects are kept as opaque
/// compact JSON text.
pub fn outcome_from_json(value: &Value) -> RawOutcome {
    match value {
        Value::Bool(bit) => RawOutcome::Bit(*bit),
        Value::Array(items) => RawOutcome::Group(items.iter().map(outcome_from_json).collect()),
        Value::Null => RawOutcome::Absent,
        Value::String(name) => RawOutcome::named(name),
        other => RawOutcome::Opaque(other.to_string()),
    }
}

/// Parses a JSON array of outcomes.
///
/// # Errors
/// * `CollapseError::Serialization` if `text` is not JSON.
/// * `CollapseError::InvalidInput` if the top-level value is not an array.
pub fn outcomes_from_json(text: &str) -> Result<Vec<RawOutcome>> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(items) => Ok(items.iter().map(outcome_from_json).collect()),
        other => Err(CollapseError::invalid_input(format!(
            "expected a JSON array of outcomes, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// The part of a remote job response that carries results.
#[derive(Debug, Deserialize)]
struct HistogramResponse {
    #[serde(rename = "Histogram")]
    histogram: Vec<Value>,
}

/// Reads the label/probability histogram from a remote job response.
///
/// The JSON object is taken from the first `{` to the last `}` so that any
/// chatter around it is ignored. The `Histogram` array alternates labels and
/// values; each label is parsed with [`parse_outcome`] and canonicalized.
/// Pairs with a non-string label or a non-numeric value are skipped.
///
/// # Errors
/// * `CollapseError::InvalidInput` if no JSON object is present.
/// * `CollapseError::Serialization` if the object is malformed or lacks `Histogram`.
pub fn parse_histogram_response(response: &str) -> Result<Vec<(String, f64)>> {
    let (Some(from), Some(to)) = (response.find('{'), response.rfind('}')) else {
        return Err(CollapseError::invalid_input("response contains no JSON object"));
    };
    if to < from {
        return Err(CollapseError::invalid_input("response contains no JSON object"));
    }

    let parsed: HistogramResponse = serde_json::from_str(&response[from..=to])?;

    let mut entries = Vec::with_capacity(parsed.histogram.len() / 2);
    for (index, pair) in parsed.histogram.chunks(2).enumerate() {
        match pair {
            [Value::String(label), Value::Number(value)] => match value.as_f64() {
                Some(value) => entries.push((parse_outcome(label).canonical_key(), value)),
                None => warn!(index, "histogram value is not representable as f64; skipping"),
            },
            _ => warn!(index, "malformed histogram pair; skipping"),
        }
    }
    Ok(entries)
}
