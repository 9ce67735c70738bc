//! Chord-span extraction.
//!
//! Finds the delimited chord annotations inside a song document without
//! interpreting their contents. The default delimiter pair is the
//! `<b>`/`</b>` markup that scraped chord sheets carry; producers using a
//! different inline convention can inject their own pair.

/// A chord annotation located in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordSpan<'a> {
    /// The full matched span, delimiters included.
    pub text: &'a str,
    /// The chord text between the delimiters.
    pub chord: &'a str,
    /// Byte offset of the opening delimiter.
    pub start: usize,
    /// Byte offset one past the closing delimiter.
    pub end: usize,
}

/// Scans a document for chord spans, non-overlapping and in document order.
///
/// Each span closes at the nearest closing marker, so adjacent annotations
/// are never merged into one. An opening marker with no matching close
/// yields no span and the dangling text stays literal; documents are
/// user-authored free text and must never fail to render.
#[derive(Debug, Clone, Copy)]
pub struct ChordTokenExtractor {
    open: &'static str,
    close: &'static str,
}

impl ChordTokenExtractor {
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        Self { open, close }
    }

    pub fn open_marker(&self) -> &'static str {
        self.open
    }

    pub fn close_marker(&self) -> &'static str {
        self.close
    }

    pub fn extract<'a>(&self, document: &'a str) -> Vec<ChordSpan<'a>> {
        let mut spans = Vec::new();
        // An empty marker would match everywhere and never advance.
        if self.open.is_empty() || self.close.is_empty() {
            return spans;
        }

        let mut pos = 0;
        while let Some(opened) = document[pos..].find(self.open) {
            let start = pos + opened;
            let chord_start = start + self.open.len();
            let chord_end = match document[chord_start..].find(self.close) {
                Some(closed) => chord_start + closed,
                // Unterminated span, skip the rest of the document.
                None => break,
            };
            let end = chord_end + self.close.len();
            spans.push(ChordSpan {
                text: &document[start..end],
                chord: &document[chord_start..chord_end],
                start,
                end,
            });
            pos = end;
        }
        spans
    }
}

impl Default for ChordTokenExtractor {
    fn default() -> Self {
        Self::new("<b>", "</b>")
    }
}
