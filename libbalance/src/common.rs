//! Common types used by libbalance.

/// Describes the character span of a substring in a text.
///
/// For example, in "*  12", "12" has the span (3, 5).
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub struct Span {
    /// Inclusive lower bound index of the span
    pub lo: usize,
    /// Exclusive upper bound index of the span
    pub hi: usize,
}

impl Span {
    /// A zero-width span at `pos`, for pointing at something missing.
    pub fn at(pos: usize) -> Self {
        Self { lo: pos, hi: pos }
    }
}

impl From<(usize, usize)> for Span {
    fn from(span: (usize, usize)) -> Self {
        Self {
            lo: span.0,
            hi: span.1,
        }
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(span: std::ops::Range<usize>) -> Self {
        Self {
            lo: span.start,
            hi: span.end,
        }
    }
}

impl From<Span> for (usize, usize) {
    fn from(span: Span) -> Self {
        (span.lo, span.hi)
    }
}
