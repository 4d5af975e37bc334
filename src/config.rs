/// Container nesting allowed by [`ParserConfig::default`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Length, in chars, of the unconsumed-text excerpt carried by a
/// [`MalformedDocument`](crate::Error::MalformedDocument) error.
pub const DEFAULT_EXCERPT_LEN: usize = 100;

/// Knobs for a [`Parser`](crate::Parser).
///
/// ```
/// use json_tree::{Parser, ParserConfig};
///
/// let parser = Parser::with_config(ParserConfig::default().with_max_depth(2));
/// assert!(parser.try_parse("[[1]]").is_some());
/// assert!(parser.try_parse("[[[1]]]").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest array/object nesting accepted; anything deeper is malformed.
    pub max_depth: usize,
    /// Upper bound on the excerpt in a malformed-document error.
    pub excerpt_len: usize,
}

impl ParserConfig {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_excerpt_len(mut self, excerpt_len: usize) -> Self {
        self.excerpt_len = excerpt_len;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            excerpt_len: DEFAULT_EXCERPT_LEN,
        }
    }
}
