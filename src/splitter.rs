//! Splitting a script into individual statements at top-level delimiters
use crate::scanner::{Span, Spans, scan};
use std::iter::FusedIterator;

/// Default statement delimiter
pub const DEFAULT_DELIMITER: char = ';';

/// Lazy iterator over the statements of a script, see [`statements`]
#[derive(Debug, Clone)]
pub struct Statements<'a> {
    source: &'a str,
    delimiter: char,
    spans: Spans<'a>,
    // Code span whose remainder has not been searched for delimiters yet
    code: Option<Span>,
    segment_start: usize,
    finished: bool,
}

impl<'a> Statements<'a> {
    fn new(source: &'a str, delimiter: char) -> Self {
        Statements {
            source,
            delimiter,
            spans: scan(source),
            code: None,
            segment_start: 0,
            finished: false,
        }
    }

    /// Next raw segment between two top-level delimiters, blank or not
    fn next_segment(&mut self) -> Option<&'a str> {
        loop {
            if let Some(span) = self.code.as_mut() {
                let rest = span.text(self.source);
                if let Some(offset) = rest.find(self.delimiter) {
                    let cut = span.start + offset;
                    let segment = &self.source[self.segment_start..cut];
                    self.segment_start = cut + self.delimiter.len_utf8();
                    span.start = self.segment_start;
                    return Some(segment);
                }
                self.code = None;
            }

            match self.spans.next() {
                Some(span) if span.kind.is_code() => self.code = Some(span),
                // Strings and comments are copied through without looking inside
                Some(_) => {}
                None if self.finished => return None,
                None => {
                    self.finished = true;
                    return Some(&self.source[self.segment_start..]);
                }
            }
        }
    }
}

impl<'a> Iterator for Statements<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let segment = self.next_segment()?;
            if !is_blank(segment) {
                return Some(segment);
            }
        }
    }
}

impl FusedIterator for Statements<'_> {}

fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

/// Iterate the statements of `script` separated by top-level `delimiter`s.
///
/// A delimiter only counts inside
/// [`RegionKind::Code`](crate::scanner::RegionKind::Code); inside string
/// literals and comments (hints included) it is ordinary content. The
/// delimiter itself is not part of any statement, and segments that are
/// empty or whitespace-only are skipped. Statements are returned exactly as
/// written, without trimming.
pub fn statements(script: &str, delimiter: char) -> Statements<'_> {
    Statements::new(script, delimiter)
}

/// Split multi-statement SQL into individual statements using `;`
pub fn split(script: &str) -> Vec<String> {
    split_with_delimiter(script, DEFAULT_DELIMITER)
}

/// Split multi-statement SQL into individual statements using `delimiter`
pub fn split_with_delimiter(script: &str, delimiter: char) -> Vec<String> {
    statements(script, delimiter).map(str::to_string).collect()
}

/// Like [`split_with_delimiter`], treating an absent script as empty
pub fn split_optional(script: Option<&str>, delimiter: char) -> Vec<String> {
    script
        .map(|script| split_with_delimiter(script, delimiter))
        .unwrap_or_default()
}
