use crate::parser::error::*;


#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// A run of ASCII digits, kept as written so out of range values can be reported verbatim.
    Number(String),
    Dice,
    Operator(char),
    Eof,
}


#[derive(Debug)]
pub(crate) struct Lexer {
    input: Vec<char>,
    pub position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    pub fn next_token(&mut self) -> Result<Token> {
        if self.position >= self.input.len() {
            return Ok(Token::Eof);
        }

        let ch = self.input[self.position];

        match ch {
            '+' | '-' => {
                self.position += 1;
                Ok(Token::Operator(ch))
            }
            '0'..='9' => Ok(self.read_number()),
            'a'..='z' | 'A'..='Z' => self.read_identifier(),
            _ => Err(ParserError::Token(ch))
        }
    }

    fn read_number(&mut self) -> Token {
        let start = self.position;
        while self.position < self.input.len() && self.input[self.position].is_ascii_digit() {
            self.position += 1;
        }

        Token::Number(self.input[start..self.position].iter().collect())
    }

    fn read_identifier(&mut self) -> Result<Token> {
        let start = self.position;
        while self.position < self.input.len() && self.input[self.position].is_ascii_alphabetic() {
            self.position += 1;
        }

        let identifier: String = self.input[start..self.position].iter().collect();
        match identifier.as_str() {
            "d" | "D" => Ok(Token::Dice),
            other => Err(ParserError::Identifier(other.into())),
        }
    }
}
