//! Single-pass lexical classification of SQL script text.
//!
//! The scanner walks the text once, left to right, and yields contiguous
//! [`Span`]s tagged with the [`RegionKind`] they belong to. It never fails:
//! an unterminated string or comment simply runs to the end of the input.

use std::iter::FusedIterator;

/// Lexical region a character position belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// Ordinary SQL text; the only region where delimiters are significant
    Code,
    /// Inside `'...'`
    SingleQuoted,
    /// Inside `"..."`
    DoubleQuoted,
    /// From `--` up to, but not including, the end of the line
    LineComment,
    /// From `/*` to the matching `*/`, both markers included
    BlockComment,
    /// Optimizer hint `/*+ ... */`; kept when comments are stripped
    HintComment,
}

impl RegionKind {
    pub fn is_code(self) -> bool {
        self == RegionKind::Code
    }

    pub fn is_quoted(self) -> bool {
        matches!(self, RegionKind::SingleQuoted | RegionKind::DoubleQuoted)
    }

    pub fn is_comment(self) -> bool {
        matches!(
            self,
            RegionKind::LineComment | RegionKind::BlockComment | RegionKind::HintComment
        )
    }

    /// Comments that are deleted by comment stripping (hints are not)
    pub fn is_removable_comment(self) -> bool {
        matches!(self, RegionKind::LineComment | RegionKind::BlockComment)
    }

    fn closing_quote(self) -> Option<u8> {
        match self {
            RegionKind::SingleQuoted => Some(b'\''),
            RegionKind::DoubleQuoted => Some(b'"'),
            _ => None,
        }
    }
}

/// A classified, half-open byte range `[start, end)` of the scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub kind: RegionKind,
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(kind: RegionKind, start: usize, end: usize) -> Self {
        Span { kind, start, end }
    }

    /// The slice of `source` this span covers
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Outcome of feeding one position of the input to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    /// The byte is content of the current region
    Stay,
    /// A marker of `width` bytes at this position opens a new region
    Enter { kind: RegionKind, width: usize },
    /// The current region ends after `width` more bytes (0 leaves the byte to `Code`)
    Exit { width: usize },
    /// Backslash inside quotes: the next byte is taken literally
    Escape,
}

/// The transition function shared by every consumer of the scanner.
///
/// `bytes[pos]` is the byte being consumed; `pending_escape` is only ever
/// true inside a quoted region.
fn transition(kind: RegionKind, pending_escape: bool, bytes: &[u8], pos: usize) -> Transition {
    let current = bytes[pos];
    let next = bytes.get(pos + 1).copied();
    match kind {
        RegionKind::Code => match (current, next) {
            (b'\'', _) => Transition::Enter {
                kind: RegionKind::SingleQuoted,
                width: 1,
            },
            (b'"', _) => Transition::Enter {
                kind: RegionKind::DoubleQuoted,
                width: 1,
            },
            (b'-', Some(b'-')) => Transition::Enter {
                kind: RegionKind::LineComment,
                width: 2,
            },
            (b'/', Some(b'*')) => {
                let kind = if bytes.get(pos + 2) == Some(&b'+') {
                    RegionKind::HintComment
                } else {
                    RegionKind::BlockComment
                };
                Transition::Enter { kind, width: 2 }
            }
            _ => Transition::Stay,
        },
        RegionKind::SingleQuoted | RegionKind::DoubleQuoted => {
            if pending_escape {
                Transition::Stay
            } else if current == b'\\' {
                Transition::Escape
            } else if Some(current) == kind.closing_quote() {
                Transition::Exit { width: 1 }
            } else {
                Transition::Stay
            }
        }
        RegionKind::LineComment => {
            if current == b'\n' {
                Transition::Exit { width: 0 }
            } else {
                Transition::Stay
            }
        }
        RegionKind::BlockComment | RegionKind::HintComment => match (current, next) {
            (b'*', Some(b'/')) => Transition::Exit { width: 2 },
            _ => Transition::Stay,
        },
    }
}

/// Streaming span producer returned by [`scan`].
///
/// All markers are ASCII, so every span boundary falls on a UTF-8 character
/// boundary and [`Span::text`] never panics for spans of the scanned text.
#[derive(Debug, Clone)]
pub struct Spans<'a> {
    source: &'a str,
    kind: RegionKind,
    start: usize,
    pos: usize,
    pending_escape: bool,
}

impl<'a> Spans<'a> {
    fn new(source: &'a str) -> Self {
        Spans {
            source,
            kind: RegionKind::Code,
            start: 0,
            pos: 0,
            pending_escape: false,
        }
    }

    fn finish_region(&mut self, end: usize) -> Span {
        let span = Span::new(self.kind, self.start, end);
        self.kind = RegionKind::Code;
        self.start = end;
        self.pos = end;
        self.pending_escape = false;
        span
    }
}

impl Iterator for Spans<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let source = self.source;
        let bytes = source.as_bytes();

        while self.pos < bytes.len() {
            match transition(self.kind, self.pending_escape, bytes, self.pos) {
                Transition::Stay => {
                    self.pending_escape = false;
                    self.pos += 1;
                }
                Transition::Escape => {
                    self.pending_escape = true;
                    self.pos += 1;
                }
                Transition::Enter { kind, width } => {
                    let marker = self.pos;
                    if marker > self.start {
                        // Emit the code before the marker; the marker is
                        // re-examined on the next call.
                        let span = Span::new(self.kind, self.start, marker);
                        self.start = marker;
                        return Some(span);
                    }
                    self.kind = kind;
                    self.pos = marker + width;
                }
                Transition::Exit { width } => {
                    let end = self.pos + width;
                    return Some(self.finish_region(end));
                }
            }
        }

        if self.start < bytes.len() {
            return Some(self.finish_region(bytes.len()));
        }
        None
    }
}

impl FusedIterator for Spans<'_> {}

/// Classify `text` into contiguous spans.
///
/// Empty text yields no spans. Spans are non-empty, ordered, non-overlapping,
/// and together cover the whole text.
pub fn scan(text: &str) -> Spans<'_> {
    Spans::new(text)
}

/// Region of the character at byte offset `pos`, or `None` past the end
pub fn region_at(text: &str, pos: usize) -> Option<RegionKind> {
    scan(text)
        .find(|span| span.start <= pos && pos < span.end)
        .map(|span| span.kind)
}

/// Check if a byte offset of `text` lies inside a single- or double-quoted literal
pub fn is_in_quotes(text: &str, pos: usize) -> bool {
    region_at(text, pos).is_some_and(RegionKind::is_quoted)
}
