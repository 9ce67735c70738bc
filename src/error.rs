use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    /// The frontmatter block is well delimited but its YAML is invalid.
    /// This is the only hard error in the crate; the transposition engine
    /// itself is total over its inputs.
    #[error("Invalid metadata: {0}")]
    Metadata(String),
}
