use std::io;

/// An error produced while building a code table, or while encoding or
/// decoding against one.
///
/// None of these are transient: calling [`build`] again with valid input
/// always recovers.
///
/// [`build`]: crate::Codec::build
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("cannot build a code table from an empty input")]
    EmptyInput,

    #[error("no code table has been built")]
    NotBuilt,

    /// The symbol at `position` has no code in the current table.
    #[error("symbol {symbol} at position {position} not in code table")]
    UnknownSymbol { position: usize, symbol: String },

    /// The bit-string ran out in the middle of a code.
    #[error("bit-string ends mid-code: {leftover:?} left over after {consumed} symbols")]
    MalformedInput { consumed: usize, leftover: String },

    /// The bits at `position` match no code, however many more follow.
    #[error("no code matches {candidate:?} at bit position {position}")]
    UnmatchedCode { position: usize, candidate: String },

    #[error("invalid bit {found:?} at position {position}; expected '0' or '1'")]
    InvalidBit { position: usize, found: char },
}

pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
    /// True for the errors caused by a bad bit-string passed to `decode`.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            CodecError::MalformedInput { .. }
                | CodecError::UnmatchedCode { .. }
                | CodecError::InvalidBit { .. }
        )
    }
}

impl From<CodecError> for io::Error {
    fn from(e: CodecError) -> Self {
        let kind = if e.is_malformed() {
            io::ErrorKind::InvalidData
        } else {
            io::ErrorKind::InvalidInput
        };
        io::Error::new(kind, e)
    }
}
