//! Pitch-class tables for the twelve-tone scale.
//!
//! Index 0 is anchored at A. The sharp and flat sequences are index-aligned,
//! so `SHARP_NAMES[i]` and `FLAT_NAMES[i]` spell the same pitch class. These
//! two sequences are the entire input vocabulary for root-note recognition;
//! anything that matches neither is not a note.

const SHARP_NAMES: [&str; 12] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];
const FLAT_NAMES: [&str; 12] = [
    "A", "Bb", "B", "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab",
];

/// One of the 12 equal-tempered tones, independent of spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Shift by a signed number of semitones, wrapping within the octave.
    /// `rem_euclid` is true mathematical modulo, so negative offsets
    /// normalize correctly. The offset is reduced before the sum so that
    /// extreme magnitudes cannot overflow.
    pub fn transposed(self, semitones: i32) -> PitchClass {
        let step = semitones.rem_euclid(12);
        PitchClass(((self.0 as i32 + step) % 12) as u8)
    }

    /// Position in the 12-tone scale, 0 = A.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The two note-name sequences and their reverse lookup.
///
/// An immutable value rather than process-global state; the default tables
/// cover standard sharp and flat spellings.
#[derive(Debug, Clone, Copy)]
pub struct PitchClassTable {
    sharp: [&'static str; 12],
    flat: [&'static str; 12],
}

impl PitchClassTable {
    pub const fn new(sharp: [&'static str; 12], flat: [&'static str; 12]) -> Self {
        Self { sharp, flat }
    }

    /// Look a note name up in the sharp sequence first, then the flat one.
    /// Returns `None` for anything that is not a note name. Callers rely on
    /// this to leave non-note text untouched, so a miss is not an error.
    pub fn index_of(&self, name: &str) -> Option<PitchClass> {
        position(&self.sharp, name).or_else(|| position(&self.flat, name))
    }

    /// Render a pitch class as text. Output is always the sharp spelling,
    /// whichever table the input came from.
    pub fn name_of(&self, pc: PitchClass) -> &'static str {
        self.sharp[pc.index()]
    }
}

impl Default for PitchClassTable {
    fn default() -> Self {
        Self::new(SHARP_NAMES, FLAT_NAMES)
    }
}

fn position(names: &[&'static str; 12], name: &str) -> Option<PitchClass> {
    names.iter().position(|n| *n == name).map(|i| PitchClass(i as u8))
}
