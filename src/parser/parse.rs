use crate::RollSpec;
use crate::error::{Bound, Error, Field};
use crate::parser::error::*;
use crate::parser::{Lexer, Token};
use crate::roll::{MAX_COUNT, MAX_SIDES, MAX_MODIFIER};


/// The pieces of a notation that matched the grammar, still as written.
///
/// Range checks happen afterwards in [`RawNotation::into_spec`] so a
/// well formed but out of range notation gets a message about the number,
/// not about the format.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawNotation {
    count: Option<String>,
    sides: String,
    modifier: Option<(char, String)>
}

impl RawNotation {
    fn into_spec(self) -> Result<RollSpec, Error> {
        let sides = unsigned(Field::Sides, &self.sides, MAX_SIDES)?;

        let count = match &self.count {
            Some(digits) => unsigned(Field::Count, digits, MAX_COUNT)?,
            None => 1
        };

        let modifier = match &self.modifier {
            Some((op, digits)) => signed(*op, digits)?,
            None => 0
        };

        RollSpec::builder(sides)
            .count(count)
            .modifier(modifier)
            .build()
    }
}


/// Parser for `[COUNT]dSIDES[(+|-)MODIFIER]` notation.
///
/// Parsing runs in two stages: the token stream is matched against the
/// grammar first, then the numbers are checked against their bounds. The
/// first stage fails with [`Error::Format`], the second with [`Error::Range`].
#[derive(Debug)]
pub struct Parser {
    input: String,
    lexer: Lexer,
    current: Token
}

impl Parser {
    /// Creates a new `Parser` for the given input, ignoring surrounding whitespace.
    ///
    /// # Errors
    /// Returns [`Error::Format`] if the input is blank or starts with a
    /// character the notation never uses.
    ///
    /// # Examples
    /// ```
    /// use dice_roller::{Parser, ErrorKind};
    ///
    /// assert!(Parser::new(" 1d6+3 ").is_ok());
    ///
    /// let err = Parser::new("   ").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::FormatError);
    /// ```
    pub fn new(input: &str) -> Result<Self, Error> {
        let input = input.trim();
        let mut lexer = Lexer::new(input);

        let current = lexer.next_token()
            .map_err(|err| Error::format(input, err.at_pos(lexer.position)))?;

        if current == Token::Eof {
            return Err(Error::format(input, ParserError::Empty));
        }

        Ok(Self { input: input.into(), lexer, current })
    }

    /// Parses the whole input into a validated [`RollSpec`].
    ///
    /// # Errors
    /// - [`Error::Format`] if the input does not match the grammar. Its source is a
    ///   [`ParserError::AtPosition`] pointing at where matching stopped.
    /// - [`Error::Range`] if count, sides or modifier are out of bounds.
    ///
    /// # Examples
    /// ```
    /// use dice_roller::Parser;
    ///
    /// let spec = Parser::new("36D12-10").unwrap().parse().unwrap();
    /// assert_eq!(spec.count(), 36);
    /// assert_eq!(spec.sides(), 12);
    /// assert_eq!(spec.modifier(), -10);
    /// ```
    pub fn parse(&mut self) -> Result<RollSpec, Error> {
        let raw = self.parse_tokens()
            .map_err(|err| Error::format(&self.input, err.at_pos(self.lexer.position)))?;

        raw.into_spec()
    }

    fn next_token(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn parse_tokens(&mut self) -> Result<RawNotation> {
        let count = self.parse_count()?;
        self.expect_dice()?;
        let sides = self.expect_number("number of sides")?;
        let modifier = self.parse_modifier()?;

        match &self.current {
            Token::Eof => Ok(RawNotation { count, sides, modifier }),
            other => Err(ParserError::Trailing(format!("{other:?}")))
        }
    }

    fn parse_count(&mut self) -> Result<Option<String>> {
        match &self.current {
            Token::Number(digits) => {
                let digits = digits.clone();
                self.next_token()?;
                Ok(Some(digits))
            },
            _ => Ok(None)
        }
    }

    fn expect_dice(&mut self) -> Result<()> {
        match &self.current {
            Token::Dice => self.next_token(),
            other => Err(ParserError::Expected { expected: "'d'", found: format!("{other:?}") })
        }
    }

    fn expect_number(&mut self, expected: &'static str) -> Result<String> {
        match &self.current {
            Token::Number(digits) => {
                let digits = digits.clone();
                self.next_token()?;
                Ok(digits)
            },
            other => Err(ParserError::Expected { expected, found: format!("{other:?}") })
        }
    }

    fn parse_modifier(&mut self) -> Result<Option<(char, String)>> {
        match self.current {
            Token::Operator(op) => {
                self.next_token()?;
                let digits = self.expect_number("modifier value")?;
                Ok(Some((op, digits)))
            },
            _ => Ok(None)
        }
    }
}


/// Maps a modifier operator to the sign it applies.
///
/// # Errors
/// Returns [`Error::Operator`] for anything other than `+` and `-`. The lexer
/// only produces those two today; any new operator token has to be handled here.
pub(crate) fn operator_sign(op: char) -> Result<i64, Error> {
    match op {
        '+' => Ok(1),
        '-' => Ok(-1),
        other => Err(Error::Operator(other))
    }
}

fn unsigned(field: Field, digits: &str, max: u16) -> Result<u32, Error> {
    digits.parse()
        .map_err(|_| Error::range(field, digits, Bound::AtMost(max as i64)))
}

fn signed(op: char, digits: &str) -> Result<i64, Error> {
    let sign = operator_sign(op)?;

    let magnitude: i64 = digits.parse()
        .map_err(|_| match sign {
            1 => Error::range(Field::Modifier, digits, Bound::AtMost(MAX_MODIFIER)),
            _ => Error::range(Field::Modifier, format!("-{digits}"), Bound::AtLeast(-MAX_MODIFIER))
        })?;

    Ok(sign * magnitude)
}


/// Parses dice notation into a validated [`RollSpec`].
///
/// The grammar is `[COUNT]dSIDES[(+|-)MODIFIER]`, case insensitive, with
/// surrounding whitespace ignored. A missing count means one die.
///
/// # Errors
/// - [`Error::Format`] if the input does not match the grammar.
/// - [`Error::Range`] if count is outside `1..=1000`, sides is outside `2..=1000`,
///   or the modifier is too large.
///
/// # Examples
/// ```
/// use dice_roller::{parse, ErrorKind};
///
/// let spec = parse("d20").unwrap();
/// assert_eq!((spec.count(), spec.sides(), spec.modifier()), (1, 20, 0));
///
/// let spec = parse("3d6+2").unwrap();
/// assert_eq!(spec.to_string(), "3d6+2");
///
/// assert_eq!(parse("d1").unwrap_err().kind(), ErrorKind::RangeError);
/// assert_eq!(parse("xyz").unwrap_err().kind(), ErrorKind::FormatError);
/// ```
pub fn parse(input: &str) -> Result<RollSpec, Error> {
    let result = Parser::new(input).and_then(|mut parser| parser.parse());

    match &result {
        Ok(spec) => tracing::debug!(input, spec = %spec, "parsed dice notation"),
        Err(err) => tracing::debug!(input, error = %err, "rejected dice notation")
    }

    result
}
