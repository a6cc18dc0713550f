
/// Reasons the notation did not match the grammar.
///
/// These never reach the caller on their own, they are carried as the
/// source of [`crate::Error::Format`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParserError {
    #[error("At position {0} - {1}")]
    AtPosition(usize, Box<ParserError>),

    #[error("Invalid token: {0:?}")]
    Token(char),

    #[error("Invalid identifier: {0}")]
    Identifier(String),

    #[error("Input string is empty")]
    Empty,

    #[error("Expected {expected}, got {found}")]
    Expected {
        expected: &'static str,
        found: String
    },

    #[error("Unexpected trailing input: {0}")]
    Trailing(String),
}

impl ParserError {
    /// The underlying error, without position information.
    pub fn err(&self) -> &Self {
        match self {
            ParserError::AtPosition(_, err) => err.as_ref(),
            other => other
        }
    }

    /// Character offset where matching stopped, if known.
    pub fn pos(&self) -> Option<&usize> {
        match self {
            ParserError::AtPosition(position, _) => Some(position),
            _ => None
        }
    }

    /// Attaches `position` unless the error already carries one.
    pub fn at_pos(self, position: usize) -> Self {
        match self {
            ParserError::AtPosition(_, _) => self,
            other => ParserError::AtPosition(position, Box::new(other))
        }
    }
}

pub type Result<T, E = ParserError> = std::result::Result<T, E>;
