//! Lexical tokens as they appear in extraction output.

use smol_str::SmolStr;
use text_size::TextSize;

/// One lexical token of a translation unit.
///
/// `index` is the token's position in the stream (0-based), so sorting any
/// subset of tokens by `index` restores source order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Token {
    pub index: u64,
    /// Spelling of the token; literal tokens keep their source text.
    pub name: SmolStr,
    /// Frontend token kind name (e.g. `identifier`, `l_paren`, `kw_int`).
    pub kind: SmolStr,
    pub location: TextSize,
}

impl Token {
    pub fn is_pragma(&self) -> bool {
        self.kind.contains("pragma")
    }
}
