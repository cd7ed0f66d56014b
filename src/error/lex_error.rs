use thiserror::Error;

/// Represents all errors that can occur while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// No token mapping recognized the character under the cursor.
    #[error("Error on line {line}: Tokenization failed at character '{character}', position {position}.")]
    TokenizationFailed {
        /// The unrecognized character.
        character: char,
        /// The character offset in the input.
        position:  usize,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A numeric literal could not be represented.
    #[error("Error on line {line}: Malformed number literal '{text}'.")]
    MalformedNumber {
        /// The digits that were read.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal was not closed before the end of the input.
    #[error("Error on line {line}: Unterminated string literal.")]
    UnterminatedString {
        /// The source line where the literal starts.
        line: usize,
    },
}
