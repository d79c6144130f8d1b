/// Source range tracking for syntax tree entities
///
/// Both ends of a range are token start locations, as a frontend reports
/// them: `begin` is the first token of the entity and `end` the start of its
/// last token. A range therefore covers every token whose location lies in
/// `begin..=end`.
use text_size::TextSize;

/// An inclusive range of token locations in a translation unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct SourceRange {
    pub begin: TextSize,
    pub end: TextSize,
}

impl SourceRange {
    pub fn new(begin: TextSize, end: TextSize) -> Self {
        Self { begin, end }
    }

    /// Create a range from raw byte offsets
    pub fn from_offsets(begin: u32, end: u32) -> Self {
        Self {
            begin: TextSize::new(begin),
            end: TextSize::new(end),
        }
    }

    /// A range covering exactly one token
    pub fn at(location: TextSize) -> Self {
        Self {
            begin: location,
            end: location,
        }
    }

    /// Check if a token location falls within this range
    pub fn contains(&self, location: TextSize) -> bool {
        self.begin <= location && location <= self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.begin > self.end
    }
}

impl std::fmt::Display for SourceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", u32::from(self.begin), u32::from(self.end))
    }
}
