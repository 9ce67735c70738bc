pub mod content;
pub mod error;
pub mod extract;
pub mod note;
pub mod pitch;
pub mod sheet;

pub use content::ContentTransposer;
pub use error::SheetError;
pub use extract::{ChordSpan, ChordTokenExtractor};
pub use note::NoteTransposer;
pub use pitch::{PitchClass, PitchClassTable};
pub use sheet::{Metadata, SongSheet};

/// Transpose every chord span in a document by a number of semitones.
/// This is the main entry point for the library.
pub fn transpose(document: &str, semitones: i32) -> String {
    ContentTransposer::default().transpose(document, semitones)
}

/// Transpose a sheet that may carry a YAML frontmatter block. The header
/// is reproduced verbatim; only the body is rewritten.
pub fn transpose_sheet(source: &str, semitones: i32) -> Result<String, SheetError> {
    let sheet = SongSheet::parse(source)?;
    Ok(sheet.transpose_body(&ContentTransposer::default(), semitones))
}

/// Transpose a sheet by its own stored `transposition` offset, the path a
/// viewer takes when loading a song with a saved offset.
pub fn transpose_sheet_stored(source: &str) -> Result<String, SheetError> {
    let sheet = SongSheet::parse(source)?;
    let semitones = sheet.metadata.transposition;
    Ok(sheet.transpose_body(&ContentTransposer::default(), semitones))
}
