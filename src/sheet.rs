//! Song-sheet frontmatter.
//!
//! A sheet may open with a YAML metadata block between `---` lines:
//!
//! ```text
//! ---
//! title: Wish You Were Here
//! artist: Pink Floyd
//! capo: 2
//! transposition: -2
//! ---
//! Verse: <b>Em7</b> <b>G</b>
//! ```
//!
//! The block carries the song's stored transposition offset next to its
//! content, so a sheet is self-contained. Transposition reproduces the
//! header byte for byte and only rewrites the body.

use serde::Deserialize;

use crate::content::ContentTransposer;
use crate::error::SheetError;

/// Sheet metadata after defaults are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub capo: Option<u8>,
    /// Stored transposition offset in semitones.
    pub transposition: i32,
}

/// Raw metadata for YAML deserialization.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
struct RawMetadata {
    title: Option<String>,
    artist: Option<String>,
    capo: Option<u8>,
    transposition: Option<i32>,
}

/// A parsed sheet: optional frontmatter plus the body text.
#[derive(Debug, Clone)]
pub struct SongSheet<'a> {
    pub metadata: Metadata,
    /// Raw frontmatter block, marker lines included, kept so output can
    /// reproduce it verbatim.
    header: Option<&'a str>,
    pub body: &'a str,
}

impl<'a> SongSheet<'a> {
    /// Split an optional leading frontmatter block from the body.
    ///
    /// A source that does not open with a `---` line, or whose block never
    /// closes, is treated as all-body with default metadata; that mirrors
    /// the skip policy for malformed chord spans. Invalid YAML inside a
    /// well-delimited block is an error.
    pub fn parse(source: &'a str) -> Result<Self, SheetError> {
        match split_frontmatter(source) {
            Some((header, yaml, body)) => {
                let raw: RawMetadata = serde_yaml::from_str(yaml)
                    .map_err(|e| SheetError::Metadata(e.to_string()))?;
                Ok(SongSheet {
                    metadata: Metadata {
                        title: raw.title,
                        artist: raw.artist,
                        capo: raw.capo,
                        transposition: raw.transposition.unwrap_or(0),
                    },
                    header: Some(header),
                    body,
                })
            }
            None => Ok(SongSheet {
                metadata: Metadata::default(),
                header: None,
                body: source,
            }),
        }
    }

    pub fn header(&self) -> Option<&'a str> {
        self.header
    }

    /// Header verbatim, body transposed.
    pub fn transpose_body(&self, transposer: &ContentTransposer, semitones: i32) -> String {
        let body = transposer.transpose(self.body, semitones);
        match self.header {
            Some(header) => {
                let mut out = String::with_capacity(header.len() + body.len());
                out.push_str(header);
                out.push_str(&body);
                out
            }
            None => body,
        }
    }
}

/// Returns (raw header including both marker lines, yaml content, body),
/// or `None` when there is no complete leading block.
fn split_frontmatter(source: &str) -> Option<(&str, &str, &str)> {
    let mut pos = 0;
    let mut yaml_start = 0;
    let mut opened = false;
    while pos < source.len() {
        let line_end = source[pos..]
            .find('\n')
            .map_or(source.len(), |i| pos + i + 1);
        let line = source[pos..line_end].trim();
        if !opened {
            // Frontmatter is only recognized at the very top.
            if line != "---" {
                return None;
            }
            opened = true;
            yaml_start = line_end;
        } else if line == "---" {
            return Some((
                &source[..line_end],
                &source[yaml_start..pos],
                &source[line_end..],
            ));
        }
        pos = line_end;
    }
    None
}
