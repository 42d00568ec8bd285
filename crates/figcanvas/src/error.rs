use thiserror::Error;

/// Font-load failures. Fatal to the failing load only; callers loading a
/// batch of fonts should skip the bad font and continue.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("malformed header: {0}")]
    MalformedHeader(String),
    #[error("truncated or empty glyph data for codepoint U+{codepoint:04X}")]
    TruncatedGlyph { codepoint: u32 },
    #[error("layout code {0} out of range")]
    InvalidLayout(i32),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported export format {0:?}")]
    UnsupportedFormat(String),
}

pub type Result<T, E = FontError> = std::result::Result<T, E>;
