//! Token queue — exclusive, range-based consumption of the token stream.
//!
//! Tokens are indexed by their exact location. Popping a range returns every
//! token between the token at `range.begin` and the token at `range.end`
//! and marks them consumed, so a later overlapping range does not receive
//! them again unless it explicitly asks to ignore prior consumption.

use rustc_hash::FxHashMap;
use text_size::TextSize;
use thiserror::Error;

use crate::base::{SourceRange, Token};
use crate::syntax::RawToken;

/// A range that cannot be resolved against the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenLookupError {
    #[error("range begin {0:?} is not a token location")]
    UnindexedBegin(TextSize),

    #[error("range end {0:?} is not a token location")]
    UnindexedEnd(TextSize),

    #[error("range {0} ends before it begins")]
    Inverted(SourceRange),
}

#[derive(Debug, Clone, Default)]
pub struct TokenQueue {
    tokens: Vec<Token>,
    consumed: Vec<bool>,
    index: FxHashMap<TextSize, usize>,
}

impl TokenQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token in stream order.
    pub fn add_token(&mut self, raw: &RawToken) {
        let slot = self.tokens.len();
        self.tokens.push(Token {
            index: slot as u64,
            name: raw.text.clone(),
            kind: raw.kind.clone(),
            location: raw.location,
        });
        self.consumed.push(false);
        self.index.insert(raw.location, slot);
    }

    /// Take every token in `range`, skipping consumed ones unless
    /// `ignore_consumed` is set. Returned tokens are marked consumed.
    pub fn pop_tokens_for_range(
        &mut self,
        range: SourceRange,
        ignore_consumed: bool,
    ) -> Result<Vec<Token>, TokenLookupError> {
        let (begin, end) = self.slots(range)?;

        let mut result = Vec::with_capacity(end + 1 - begin);
        for slot in begin..=end {
            if !ignore_consumed && self.consumed[slot] {
                continue;
            }
            result.push(self.tokens[slot].clone());
            self.consumed[slot] = true;
        }
        Ok(result)
    }

    /// Mark every token in `range` consumed without returning it.
    /// Returns how many tokens were newly consumed.
    pub fn discard_range(&mut self, range: SourceRange) -> Result<usize, TokenLookupError> {
        let (begin, end) = self.slots(range)?;
        let mut drained = 0;
        for consumed in &mut self.consumed[begin..=end] {
            if !*consumed {
                *consumed = true;
                drained += 1;
            }
        }
        Ok(drained)
    }

    /// The token at an exact location.
    pub fn get_token_at(&self, location: TextSize) -> Option<&Token> {
        self.index.get(&location).map(|&slot| &self.tokens[slot])
    }

    pub fn is_consumed(&self, location: TextSize) -> bool {
        self.index
            .get(&location)
            .is_some_and(|&slot| self.consumed[slot])
    }

    /// Tokens no node has claimed yet.
    pub fn unconsumed(&self) -> impl Iterator<Item = &Token> {
        self.tokens
            .iter()
            .zip(&self.consumed)
            .filter(|(_, consumed)| !**consumed)
            .map(|(token, _)| token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn slots(&self, range: SourceRange) -> Result<(usize, usize), TokenLookupError> {
        let begin = *self
            .index
            .get(&range.begin)
            .ok_or(TokenLookupError::UnindexedBegin(range.begin))?;
        let end = *self
            .index
            .get(&range.end)
            .ok_or(TokenLookupError::UnindexedEnd(range.end))?;
        if begin > end {
            return Err(TokenLookupError::Inverted(range));
        }
        Ok((begin, end))
    }
}
