use std::fmt::Display;
use crate::parser::ParserError;


/// Errors produced while turning notation into a [`crate::RollSpec`].
///
/// Rolling a valid spec never fails, so every variant here comes from
/// parsing or from spec construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input does not match `[COUNT]dSIDES[(+|-)MODIFIER]` at all.
    #[error("Invalid dice notation '{input}'. Use forms like 'd20', '1d6', '2d12+2', '5d6-8' etc.")]
    Format {
        /// The trimmed input that was rejected.
        input: String,
        /// What the parser tripped over.
        #[source]
        cause: ParserError
    },

    /// The notation matched but a number is outside its bound.
    #[error("Invalid {field} '{value}' must be {bound}")]
    Range {
        /// Which field was out of range.
        field: Field,
        /// The offending value, as written.
        value: String,
        /// The violated bound, e.g. `at least 2`.
        bound: Bound
    },

    /// An operator other than `+` or `-` was found in front of the modifier.
    #[error("Invalid modifier operator '{0}'")]
    Operator(char)
}

impl Error {
    /// The caller facing category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Format { .. } => ErrorKind::FormatError,
            Error::Range { .. } => ErrorKind::RangeError,
            Error::Operator(_) => ErrorKind::OperatorError
        }
    }

    pub(crate) fn format(input: &str, cause: ParserError) -> Self {
        Error::Format { input: input.into(), cause }
    }

    pub(crate) fn range<V: Display>(field: Field, value: V, bound: Bound) -> Self {
        Error::Range { field, value: value.to_string(), bound }
    }
}


/// Coarse classification of [`Error`], as exposed in error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// See [`Error::Format`].
    FormatError,
    /// See [`Error::Range`].
    RangeError,
    /// See [`Error::Operator`].
    OperatorError
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            ErrorKind::FormatError => "FormatError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::OperatorError => "OperatorError"
        };

        write!(f, "{kind}")
    }
}


/// A numeric field of a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Number of dice.
    Count,
    /// Faces per die.
    Sides,
    /// The signed value added after summing.
    Modifier
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Count => write!(f, "count of dice"),
            Field::Sides => write!(f, "count of sides"),
            Field::Modifier => write!(f, "modifier")
        }
    }
}


/// An inclusive bound a [`Field`] has to respect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The value must be greater than or equal to this.
    AtLeast(i64),
    /// The value must be less than or equal to this.
    AtMost(i64)
}

impl Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::AtLeast(n) => write!(f, "at least {n}"),
            Bound::AtMost(n) => write!(f, "at most {n}")
        }
    }
}
