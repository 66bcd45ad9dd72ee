use super::error::*;
use super::lex::*;
use super::RowNumber;

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    number: RowNumber,
    tokens: Vec<String>,
}

impl Line {
    /// Lexes one physical line. Blank and comment-only lines are `None`.
    pub fn new(s: &str) -> Result<Option<Line>, Error> {
        let tokens = lex_line(s);
        if tokens.is_empty() {
            return Ok(None);
        }
        Line::from_tokens(tokens).map(Some)
    }

    pub fn from_tokens(mut tokens: Vec<String>) -> Result<Line, Error> {
        if tokens.is_empty() {
            return Err(error!(MissingArgument; "ROW NUMBER"));
        }
        let label = tokens.remove(0);
        match label.parse::<i32>() {
            Ok(n) if n >= 0 => Ok(Line {
                number: RowNumber::from(n),
                tokens,
            }),
            _ => Err(error!(MalformedRow; &label)),
        }
    }

    pub fn number(&self) -> RowNumber {
        self.number
    }

    /// The command keyword followed by its arguments.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.tokens.is_empty() {
            write!(f, "{}", self.number)
        } else {
            write!(f, "{} {}", self.number, self.tokens.join(" "))
        }
    }
}
