//! Alphabet compaction: each distinct run token gets a one-letter code.
//!
//! Codes are assigned in first-occurrence order from `a..z` then `A..Z`.
//! Rewriting happens per token over the token array, so a form that is a
//! substring of another (`1,5` inside `11,5`) can never be mis-substituted.

use fq_core::{FucqError, Result, Token, TokenSequence};
use std::collections::{HashMap, HashSet};

/// Code symbols in assignment order.
pub const ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Maximum number of distinct token forms in one sequence.
pub const MAX_SYMBOLS: usize = ALPHABET.len();

/// The i-th code symbol.
pub fn alphabet_symbol(index: usize) -> Option<char> {
    ALPHABET.get(index).map(|&b| b as char)
}

/// Position of `symbol` in the alphabet.
pub fn symbol_index(symbol: char) -> Option<usize> {
    match symbol {
        'a'..='z' => Some(symbol as usize - 'a' as usize),
        'A'..='Z' => Some(26 + symbol as usize - 'A' as usize),
        _ => None,
    }
}

/// Ordered `(symbol, form)` pairs. Symbols run contiguously from `a`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeMap {
    entries: Vec<(char, String)>,
}

impl CodeMap {
    /// Build from explicit pairs, checking the symbol order and form bijection.
    pub fn from_entries(entries: Vec<(char, String)>) -> Result<Self> {
        if entries.len() > MAX_SYMBOLS {
            return Err(FucqError::FrameCorrupt(format!(
                "code map has {} entries, alphabet holds {MAX_SYMBOLS}",
                entries.len()
            )));
        }
        {
            let mut seen = HashMap::with_capacity(entries.len());
            for (idx, (symbol, form)) in entries.iter().enumerate() {
                if alphabet_symbol(idx) != Some(*symbol) {
                    return Err(FucqError::FrameCorrupt(format!(
                        "code map entry {idx} has symbol {symbol:?}, expected {:?}",
                        ALPHABET[idx] as char
                    )));
                }
                Token::parse_form(form)?;
                if let Some(prev) = seen.insert(form.as_str(), *symbol) {
                    return Err(FucqError::FrameCorrupt(format!(
                        "form {form:?} mapped by both {prev:?} and {symbol:?}"
                    )));
                }
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[(char, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Form assigned to `symbol`.
    pub fn get(&self, symbol: char) -> Option<&str> {
        let idx = symbol_index(symbol)?;
        self.entries.get(idx).map(|(_, form)| form.as_str())
    }
}

/// Replace every token with its code symbol.
pub fn compact(tokens: &[Token]) -> Result<(String, CodeMap)> {
    let mut codes: HashMap<Token, char> = HashMap::new();
    let mut entries: Vec<(char, String)> = Vec::new();
    let mut compacted = String::with_capacity(tokens.len());

    for token in tokens {
        let symbol = match codes.get(token) {
            Some(&symbol) => symbol,
            None => {
                let Some(symbol) = alphabet_symbol(entries.len()) else {
                    let distinct = count_distinct(tokens);
                    return Err(FucqError::TooManyDistinctTokens {
                        distinct,
                        max: MAX_SYMBOLS,
                    });
                };
                codes.insert(*token, symbol);
                entries.push((symbol, token.form()));
                symbol
            }
        };
        compacted.push(symbol);
    }

    Ok((compacted, CodeMap { entries }))
}

/// Rebuild the token sequence from code symbols.
///
/// Run values must be lowercase hex digits, the only bytes the hex layer
/// ever hands to the tokenizer.
pub fn expand(compacted: &str, map: &CodeMap) -> Result<TokenSequence> {
    let decoded: Vec<Token> = map
        .entries()
        .iter()
        .map(|(symbol, form)| {
            let token = Token::parse_form(form)?;
            if !matches!(token.value, b'0'..=b'9' | b'a'..=b'f') {
                return Err(FucqError::MalformedToken(format!(
                    "code {symbol:?} maps to non-hex value in {form:?}"
                )));
            }
            Ok(token)
        })
        .collect::<Result<_>>()?;

    compacted
        .chars()
        .enumerate()
        .map(|(pos, symbol)| {
            symbol_index(symbol)
                .and_then(|idx| decoded.get(idx).copied())
                .ok_or_else(|| {
                    FucqError::MalformedToken(format!("unknown code {symbol:?} at position {pos}"))
                })
        })
        .collect()
}

fn count_distinct(tokens: &[Token]) -> usize {
    let mut seen = HashSet::new();
    tokens.iter().filter(|t| seen.insert(**t)).count()
}
