use crate::pitch::PitchClassTable;

/// Transposes a single note name by a signed number of semitones.
///
/// Names that match neither scale table pass through unchanged, which lets
/// callers run this over chord text that mixes root letters with quality
/// suffixes and separators.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoteTransposer {
    table: PitchClassTable,
}

impl NoteTransposer {
    pub fn new(table: PitchClassTable) -> Self {
        Self { table }
    }

    /// Resolve `name`, shift it, and render it in sharp spelling. A name
    /// that resolves always comes back sharp, so `transpose("Bb", 0)` is
    /// "A#"; the byte-identical zero-offset case is handled one level up
    /// by [`ContentTransposer`](crate::content::ContentTransposer).
    pub fn transpose<'a>(&self, name: &'a str, semitones: i32) -> &'a str {
        match self.table.index_of(name) {
            Some(pc) => self.table.name_of(pc.transposed(semitones)),
            None => name,
        }
    }
}
