//! Integration tests for the chordshift engine
//!
//! Tests the full pipeline from a chord-annotated document to its
//! transposed rendering, including the frontmatter-aware sheet entry
//! points and the algebraic properties of the transform.

use chordshift::{transpose, transpose_sheet, transpose_sheet_stored};

#[test]
fn test_verse_up_a_whole_step() {
    let document = "The verse: <b>G</b> <b>D</b> <b>Em</b>";
    assert_eq!(
        transpose(document, 2),
        "The verse: <b>A</b> <b>E</b> <b>F#m</b>"
    );
}

#[test]
fn test_down_a_semitone() {
    assert_eq!(transpose("<b>C</b>", -1), "<b>B</b>");
}

#[test]
fn test_slash_chord() {
    assert_eq!(transpose("<b>G/B</b>", 1), "<b>G#/C</b>");
}

#[test]
fn test_suffix_preserved() {
    assert_eq!(transpose("<b>Asus4</b>", 3), "<b>Csus4</b>");
}

#[test]
fn test_malformed_span_returned_unchanged() {
    assert_eq!(transpose("<b>G", 2), "<b>G");
}

#[test]
fn test_noop_is_byte_identical() {
    // Flat spellings survive the zero-offset short circuit untouched.
    let document = "Intro: <b>Bb</b> <b>Gb7</b>\nlyrics line\n<b>Eb/Bb</b>";
    assert_eq!(transpose(document, 0), document);
}

#[test]
fn test_periodicity_mod_twelve() {
    // Sharp-spelled input, so a full-octave rewrite reproduces it exactly.
    let document = "<b>A#</b> la <b>C#m</b> la <b>G</b>";
    for n in [1, 2, 5, 11, 12, -4] {
        assert_eq!(
            transpose(document, n),
            transpose(document, n + 12),
            "offset {} and {} should render identically",
            n,
            n + 12
        );
    }
}

#[test]
fn test_transpositions_compose() {
    let document = "<b>C</b> <b>G/B</b> <b>F#m7</b>";
    let two_steps = transpose(&transpose(document, 3), 4);
    assert_eq!(two_steps, transpose(document, 7));

    // A full octave in two hops lands back on the sharp-spelled original.
    let octave = transpose(&transpose(document, 5), 7);
    assert_eq!(octave, document);
}

#[test]
fn test_lyrics_never_change() {
    let before = "Down by the river <b>Dm</b> I shot my baby <b>A7</b>\n";
    let after = transpose(before, 6);
    assert_eq!(after, "Down by the river <b>G#m</b> I shot my baby <b>D#7</b>\n");
    // Everything outside the spans is byte-identical.
    assert_eq!(&after[..18], &before[..18]);
    assert!(after.ends_with(" I shot my baby <b>D#7</b>\n"));
}

#[test]
fn test_sheet_header_passes_through() {
    let source = "---\ntitle: Knockin' on Heaven's Door\nartist: Bob Dylan\n---\n<b>G</b> <b>D</b> <b>Am</b>\n";
    let out = transpose_sheet(source, 2).unwrap();
    assert_eq!(
        out,
        "---\ntitle: Knockin' on Heaven's Door\nartist: Bob Dylan\n---\n<b>A</b> <b>E</b> <b>Bm</b>\n"
    );
}

#[test]
fn test_sheet_without_frontmatter() {
    let out = transpose_sheet("<b>E</b> <b>A</b>", 1).unwrap();
    assert_eq!(out, "<b>F</b> <b>A#</b>");
}

#[test]
fn test_stored_offset_applied() {
    let source = "---\ntransposition: -2\n---\n<b>D</b> <b>G</b>\n";
    let out = transpose_sheet_stored(source).unwrap();
    assert_eq!(out, "---\ntransposition: -2\n---\n<b>C</b> <b>F</b>\n");
}

#[test]
fn test_stored_offset_defaults_to_noop() {
    let source = "---\ntitle: As Written\n---\n<b>Bb</b>\n";
    let out = transpose_sheet_stored(source).unwrap();
    assert_eq!(out, source);
}

#[test]
fn test_invalid_frontmatter_is_rejected() {
    let source = "---\ntitle: [broken\n---\n<b>C</b>";
    assert!(transpose_sheet(source, 1).is_err());
}
