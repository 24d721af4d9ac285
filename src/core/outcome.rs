// src/core/outcome.rs

//! Measurement outcomes and their canonical keys.

use std::fmt;

/// The flattened textual form of an outcome, used as the aggregation key.
///
/// Pure-bit outcomes produce strings over `'0'`/`'1'`; anything else produces
/// a best-effort textual fallback.
pub type CanonicalKey = String;

/// One observed result handed over by an execution engine.
///
/// The set of shapes is closed. Producers map their own value types into these
/// variants before the histogram ever sees them, so canonicalization is a plain
/// structural recursion with no failure cases.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawOutcome {
    /// A two-valued measurement result (a boolean or a `One`/`Zero` result).
    Bit(bool),
    /// An ordered grouping of outcomes: a tuple or an array of any length.
    Group(Vec<RawOutcome>),
    /// The explicit "no value" marker.
    Absent,
    /// Any other value, carried as its caller-supplied textual form.
    Opaque(String),
}

impl RawOutcome {
    /// The `One` measurement result.
    pub const ONE: RawOutcome = RawOutcome::Bit(true);
    /// The `Zero` measurement result.
    pub const ZERO: RawOutcome = RawOutcome::Bit(false);

    /// Maps a named result to an outcome.
    ///
    /// Exactly the literals `"One"` and `"Zero"` are recognized as bits.
    /// Every other name is kept as an opaque value.
    pub fn named(name: &str) -> Self {
        match name {
            "One" => RawOutcome::ONE,
            "Zero" => RawOutcome::ZERO,
            other => RawOutcome::Opaque(other.to_string()),
        }
    }

    /// Builds a group from anything convertible into outcomes.
    pub fn group<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<RawOutcome>,
    {
        RawOutcome::Group(items.into_iter().map(Into::into).collect())
    }

    /// Returns the canonical key for this outcome. See [`canonicalize`].
    pub fn canonical_key(&self) -> CanonicalKey {
        let mut key = String::new();
        self.write_canonical(&mut key);
        key
    }

    /// Appends this outcome's canonical form to `out`.
    fn write_canonical(&self, out: &mut String) {
        match self {
            RawOutcome::Bit(true) => out.push('1'),
            RawOutcome::Bit(false) => out.push('0'),
            // Children are concatenated without separators; an empty group adds nothing.
            RawOutcome::Group(items) => {
                for item in items {
                    item.write_canonical(out);
                }
            }
            RawOutcome::Absent => out.push_str("None"),
            RawOutcome::Opaque(text) => out.push_str(text),
        }
    }

    /// Returns `true` if every leaf of this outcome is a bit.
    ///
    /// An empty group has no leaves and counts as pure.
    pub fn is_pure_bits(&self) -> bool {
        match self {
            RawOutcome::Bit(_) => true,
            RawOutcome::Group(items) => items.iter().all(RawOutcome::is_pure_bits),
            RawOutcome::Absent | RawOutcome::Opaque(_) => false,
        }
    }

    /// Nesting depth: leaves are depth 0, a group is one deeper than its deepest child.
    pub fn depth(&self) -> usize {
        match self {
            RawOutcome::Group(items) => 1 + items.iter().map(RawOutcome::depth).max().unwrap_or(0),
            _ => 0,
        }
    }
}

/// Converts one outcome into its canonical key.
///
/// Rules:
/// * a bit becomes `"1"` or `"0"`;
/// * a group becomes the concatenation of its children's keys, in order;
/// * `Absent` becomes the literal `"None"`;
/// * an opaque value becomes its textual form, unchanged.
///
/// The function is total: every outcome, however deeply nested, has a key.
pub fn canonicalize(outcome: &RawOutcome) -> CanonicalKey {
    outcome.canonical_key()
}

/// Returns `true` if `key` consists solely of `'0'` and `'1'` characters.
///
/// The empty key qualifies vacuously.
pub fn is_bit_string(key: &str) -> bool {
    key.chars().all(|c| c == '0' || c == '1')
}

/// Produces the display label for a key: `|key⟩` for bit strings, the key itself otherwise.
pub fn display_label(key: &str) -> String {
    if is_bit_string(key) {
        format!("|{}⟩", key)
    } else {
        key.to_string()
    }
}

impl fmt::Display for RawOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawOutcome::Bit(true) => write!(f, "One"),
            RawOutcome::Bit(false) => write!(f, "Zero"),
            RawOutcome::Group(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    write!(f, "{}{}", if i > 0 { ", " } else { "" }, item)?;
                }
                write!(f, ")")
            }
            RawOutcome::Absent => write!(f, "None"),
            RawOutcome::Opaque(text) => write!(f, "{}", text),
        }
    }
}

impl From<bool> for RawOutcome {
    fn from(bit: bool) -> Self {
        RawOutcome::Bit(bit)
    }
}

impl<T: Into<RawOutcome>> From<Option<T>> for RawOutcome {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawOutcome::Absent, Into::into)
    }
}

impl<T: Into<RawOutcome>> From<Vec<T>> for RawOutcome {
    fn from(items: Vec<T>) -> Self {
        RawOutcome::group(items)
    }
}

impl<A, B> From<(A, B)> for RawOutcome
where
    A: Into<RawOutcome>,
    B: Into<RawOutcome>,
{
    fn from((a, b): (A, B)) -> Self {
        RawOutcome::Group(vec![a.into(), b.into()])
    }
}

impl<A, B, C> From<(A, B, C)> for RawOutcome
where
    A: Into<RawOutcome>,
    B: Into<RawOutcome>,
    C: Into<RawOutcome>,
{
    fn from((a, b, c): (A, B, C)) -> Self {
        RawOutcome::Group(vec![a.into(), b.into(), c.into()])
    }
}

impl<A, B, C, D> From<(A, B, C, D)> for RawOutcome
where
    A: Into<RawOutcome>,
    B: Into<RawOutcome>,
    C: Into<RawOutcome>,
    D: Into<RawOutcome>,
{
    fn from((a, b, c, d): (A, B, C, D)) -> Self {
        RawOutcome::Group(vec![a.into(), b.into(), c.into(), d.into()])
    }
}
