/// Lexing or parsing failure, located by byte offset into the expression text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("syntax error at byte {offset}: {message}")]
pub(crate) struct SyntaxError {
    pub(crate) offset: usize,
    pub(crate) message: String,
}

impl SyntaxError {
    pub(crate) fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}
