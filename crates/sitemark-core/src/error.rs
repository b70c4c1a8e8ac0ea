use thiserror::Error;

/// Failures raised while converting a single document.
///
/// Conversion is all-or-nothing: the first error aborts the whole document
/// with no partial tree.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    /// An inline delimiter was opened but never closed.
    #[error("unmatched {delimiter} in inline text")]
    UnmatchedDelimiter { delimiter: &'static str },
    /// A block reached the code converter without ``` on both its first and
    /// last line.
    #[error("code block is missing its ``` fences")]
    MalformedCodeFence,
    /// The document has no `# ` line to use as a page title.
    #[error("document has no h1 title")]
    MissingTitle,
}
