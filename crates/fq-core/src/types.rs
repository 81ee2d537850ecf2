use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FucqError, Result};

/// Separator between the run length and the byte in a token's textual form.
pub const FORM_SEPARATOR: char = ',';

/// One maximal run: `count` consecutive copies of `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub count: usize,
    pub value: u8,
}

/// Ordered run tokens. Order is the only record of the original byte order.
pub type TokenSequence = Vec<Token>;

impl Token {
    pub fn new(count: usize, value: u8) -> Self {
        Self { count, value }
    }

    /// Textual form `"<count>,<byte>"`, the byte rendered as one character.
    pub fn form(&self) -> String {
        format!("{}{}{}", self.count, FORM_SEPARATOR, self.value as char)
    }

    /// Parse a textual form produced by [`Token::form`].
    pub fn parse_form(form: &str) -> Result<Self> {
        let (count, value) = form
            .split_once(FORM_SEPARATOR)
            .ok_or_else(|| FucqError::MalformedToken(format!("missing separator in {form:?}")))?;

        if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FucqError::MalformedToken(format!("bad run length in {form:?}")));
        }
        if count.len() > 1 && count.starts_with('0') {
            return Err(FucqError::MalformedToken(format!("leading zero in {form:?}")));
        }
        let count: usize = count
            .parse()
            .map_err(|_| FucqError::MalformedToken(format!("run length out of range in {form:?}")))?;
        if count == 0 {
            return Err(FucqError::MalformedToken(format!("zero run length in {form:?}")));
        }

        let mut chars = value.chars();
        let value = match (chars.next(), chars.next()) {
            (Some(c), None) => u8::try_from(u32::from(c))
                .map_err(|_| FucqError::MalformedToken(format!("value is not a byte in {form:?}")))?,
            _ => {
                return Err(FucqError::MalformedToken(format!(
                    "value must be a single character in {form:?}"
                )))
            }
        };

        Ok(Self { count, value })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.form())
    }
}

/// True when no two adjacent tokens share a value and every count is positive.
pub fn is_maximal(tokens: &[Token]) -> bool {
    tokens.iter().all(|t| t.count > 0) && tokens.windows(2).all(|w| w[0].value != w[1].value)
}
