//! Whole-document transposition.
//!
//! Runs the two-stage pipeline: [`ChordTokenExtractor`] locates the chord
//! spans, then each root note inside a span is shifted with
//! [`NoteTransposer`]. Everything outside a span, and every non-note byte
//! inside one, is copied through verbatim.

use crate::extract::ChordTokenExtractor;
use crate::note::NoteTransposer;

/// Rewrites the root notes inside every chord span of a document.
///
/// Stateless; a call is a pure function of the document and the offset, so
/// callers that re-render on a changing offset just invoke it again.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentTransposer {
    extractor: ChordTokenExtractor,
    notes: NoteTransposer,
}

impl ContentTransposer {
    pub fn new(extractor: ChordTokenExtractor, notes: NoteTransposer) -> Self {
        Self { extractor, notes }
    }

    /// Transpose every chord span by `semitones`. Only the value mod 12
    /// affects the pitch; the sign handles direction.
    ///
    /// An offset of exactly 0 returns the document byte for byte, flat
    /// spellings included. Any other offset re-spells resolved roots to
    /// sharps.
    pub fn transpose(&self, document: &str, semitones: i32) -> String {
        if semitones == 0 {
            return document.to_string();
        }

        let mut out = String::with_capacity(document.len());
        let mut copied = 0;
        for span in self.extractor.extract(document) {
            out.push_str(&document[copied..span.start]);
            out.push_str(self.extractor.open_marker());
            self.transpose_chord_into(&mut out, span.chord, semitones);
            out.push_str(self.extractor.close_marker());
            copied = span.end;
        }
        out.push_str(&document[copied..]);
        out
    }

    /// Scan chord text for maximal root-note occurrences, a letter A..G
    /// with an optional single `#` or `b`, and shift each one
    /// independently. Quality suffixes, digits, and separators stay in
    /// place.
    fn transpose_chord_into(&self, out: &mut String, chord: &str, semitones: i32) {
        let mut chars = chord.char_indices().peekable();
        while let Some((start, c)) = chars.next() {
            if !('A'..='G').contains(&c) {
                out.push(c);
                continue;
            }
            let mut end = start + c.len_utf8();
            if let Some(&(acc_start, acc)) = chars.peek() {
                if acc == '#' || acc == 'b' {
                    chars.next();
                    end = acc_start + acc.len_utf8();
                }
            }
            out.push_str(self.notes.transpose(&chord[start..end], semitones));
        }
    }
}
