//! Run-length tokenizer: bytes ↔ maximal `(count, byte)` runs.

use fq_core::{FucqError, Result, Token, TokenSequence};

/// Split `data` into maximal runs of identical bytes, left to right.
pub fn tokenize(data: &[u8]) -> TokenSequence {
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < data.len() {
        let value = data[i];
        let run = data[i..].iter().take_while(|&&b| b == value).count();
        tokens.push(Token::new(run, value));
        i += run;
    }
    tokens
}

/// Expand runs back into bytes. A zero-length run is malformed.
pub fn detokenize(tokens: &[Token]) -> Result<Vec<u8>> {
    detokenize_bounded(tokens, isize::MAX as usize)
}

/// Expand runs back into bytes, refusing to produce more than `limit` bytes.
///
/// The total is checked and reserved before any run is written, so run
/// lengths from an untrusted frame cannot overflow or abort the allocator.
pub fn detokenize_bounded(tokens: &[Token], limit: usize) -> Result<Vec<u8>> {
    let mut total = 0usize;
    for (idx, token) in tokens.iter().enumerate() {
        if token.count == 0 {
            return Err(FucqError::MalformedToken(format!(
                "token {idx} has zero run length"
            )));
        }
        total = total
            .checked_add(token.count)
            .filter(|&t| t <= limit)
            .ok_or_else(|| {
                FucqError::MalformedToken(format!(
                    "runs exceed {limit} bytes at token {idx}"
                ))
            })?;
    }

    let mut out = Vec::new();
    out.try_reserve_exact(total)
        .map_err(|e| FucqError::MalformedToken(format!("cannot hold {total} bytes: {e}")))?;
    for token in tokens {
        out.extend(std::iter::repeat(token.value).take(token.count));
    }
    Ok(out)
}
