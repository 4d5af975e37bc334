use crate::config::ParserConfig;
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::{Node, Property};

/// Parses `input` as a single JSON document with the default configuration.
pub fn parse(input: &str) -> Result<Node> {
    Parser::default().parse(input)
}

/// Like [`parse`], but returns `None` instead of an error.
pub fn try_parse(input: &str) -> Option<Node> {
    Parser::default().try_parse(input)
}

/// Entry point for parsing with a non-default [`ParserConfig`].
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn parse(&self, input: &str) -> Result<Node> {
        let mut reader = Reader::new(input, self.config);
        match reader.read_document() {
            Some(node) => {
                tracing::trace!(kind = %node.kind(), len = reader.cursor.len(), "parsed JSON document");
                Ok(node)
            }
            None => {
                // rules rewind on failure, so report where reading got furthest
                let position = reader.cursor.furthest();
                tracing::debug!(position, len = reader.cursor.len(), "malformed JSON document");
                Err(Error::malformed(
                    position,
                    reader.cursor.excerpt(position, self.config.excerpt_len),
                ))
            }
        }
    }

    pub fn try_parse(&self, input: &str) -> Option<Node> {
        Reader::new(input, self.config).read_document()
    }
}

type Rule<T> = fn(&mut Reader) -> Option<T>;

/// Recursive-descent reader, one method per production.
///
/// Rules return `None` on "no match". A rule may leave the cursor anywhere
/// when it fails; callers go through [`Reader::attempt`], which rewinds.
struct Reader {
    cursor: Cursor,
    config: ParserConfig,
    depth: usize,
}

impl Reader {
    fn new(input: &str, config: ParserConfig) -> Self {
        Self {
            cursor: Cursor::new(input),
            config,
            depth: 0,
        }
    }

    fn attempt<T>(&mut self, rule: Rule<T>) -> Option<T> {
        let checkpoint = self.cursor.position();
        let result = rule(self);
        if result.is_none() {
            self.cursor.rewind(checkpoint);
        }
        result
    }

    fn read_document(&mut self) -> Option<Node> {
        self.cursor.skip_whitespace();
        let node = self.read_value()?;
        self.cursor.skip_whitespace();
        self.cursor.is_at_end().then_some(node)
    }

    fn read_value(&mut self) -> Option<Node> {
        let rules: [Rule<Node>; 6] = [
            Self::read_null,
            Self::read_bool,
            Self::read_number,
            Self::read_string,
            Self::read_array,
            Self::read_object,
        ];
        rules.into_iter().find_map(|rule| self.attempt(rule))
    }

    fn read_null(&mut self) -> Option<Node> {
        self.cursor.read_literal("null").then_some(Node::NULL)
    }

    fn read_bool(&mut self) -> Option<Node> {
        if self.cursor.read_literal("true") {
            Some(Node::TRUE)
        } else if self.cursor.read_literal("false") {
            Some(Node::FALSE)
        } else {
            None
        }
    }

    fn read_number(&mut self) -> Option<Node> {
        let mut unparsed = String::new();
        if let Some(sign) = self.cursor.read_if(|c| c == '-') {
            unparsed.push(sign);
        }
        self.read_digits(&mut unparsed)?;
        if let Some(fraction) = self.attempt(Self::read_fraction) {
            unparsed.push_str(&fraction);
        }
        if let Some(exponent) = self.attempt(Self::read_exponent) {
            unparsed.push_str(&exponent);
        }

        // `str::parse` is locale-independent; overflow to infinity is no match
        unparsed
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Node::Number)
    }

    /// `digit+`, appended to `buffer`.
    fn read_digits(&mut self, buffer: &mut String) -> Option<()> {
        let start = buffer.len();
        while let Some(digit) = self.cursor.read_if(|c| c.is_ascii_digit()) {
            buffer.push(digit);
        }
        (buffer.len() > start).then_some(())
    }

    fn read_fraction(&mut self) -> Option<String> {
        let mut fraction = String::from(self.cursor.read_if(|c| c == '.')?);
        self.read_digits(&mut fraction)?;
        Some(fraction)
    }

    fn read_exponent(&mut self) -> Option<String> {
        let mut exponent = String::from(self.cursor.read_if(|c| matches!(c, 'e' | 'E'))?);
        if let Some(sign) = self.cursor.read_if(|c| matches!(c, '+' | '-')) {
            exponent.push(sign);
        }
        self.read_digits(&mut exponent)?;
        Some(exponent)
    }

    fn read_string(&mut self) -> Option<Node> {
        self.read_string_literal().map(Node::String)
    }

    fn read_string_literal(&mut self) -> Option<String> {
        if !self.cursor.read_char('"') {
            return None;
        }

        let mut output = String::new();
        // an escape that fails to decode is consumed raw, one char at a time
        while let Some(ch) = self
            .attempt(Self::read_escape)
            .or_else(|| self.cursor.read_if(|c| c != '"'))
        {
            output.push(ch);
        }

        self.cursor.read_char('"').then_some(output)
    }

    fn read_escape(&mut self) -> Option<char> {
        if !self.cursor.read_char('\\') {
            return None;
        }

        let escaped = self.cursor.read_if(|c| {
            matches!(c, '\\' | '"' | '/' | 'b' | 'f' | 'n' | 'r' | 't' | 'u')
        })?;
        match escaped {
            // `\b` (backspace) and `\f` (formfeed) have no Rust escape
            'b' => Some('\u{8}'),
            'f' => Some('\u{c}'),
            'n' => Some('\n'),
            'r' => Some('\r'),
            't' => Some('\t'),
            'u' => self.read_unicode_escape(),
            other => Some(other),
        }
    }

    /// The `XXXX` of `\uXXXX`. A high surrogate must be followed by a
    /// `\uXXXX` low surrogate; the pair decodes to one char.
    fn read_unicode_escape(&mut self) -> Option<char> {
        let unit = self.read_code_unit()?;
        match unit {
            0xD800..=0xDBFF => {
                let low = self.attempt(Self::read_low_surrogate)?;
                let high = u32::from(unit - 0xD800);
                let low = u32::from(low - 0xDC00);
                char::from_u32(0x10000 + (high << 10) + low)
            }
            _ => char::from_u32(u32::from(unit)),
        }
    }

    fn read_low_surrogate(&mut self) -> Option<u16> {
        if !self.cursor.read_literal("\\u") {
            return None;
        }
        self.read_code_unit()
            .filter(|unit| (0xDC00..=0xDFFF).contains(unit))
    }

    /// Exactly four hex digits as a UTF-16 code unit.
    fn read_code_unit(&mut self) -> Option<u16> {
        let digits = self.cursor.read_run(4, |c| c.is_ascii_hexdigit())?;
        digits
            .iter()
            .try_fold(0u16, |unit, digit| Some(unit << 4 | digit.to_digit(16)? as u16))
    }

    fn read_array(&mut self) -> Option<Node> {
        if !self.cursor.read_char('[') {
            return None;
        }
        let children = self.nested(|reader| reader.read_items(Self::read_value))?;
        self.cursor.read_char(']').then_some(Node::Array(children))
    }

    fn read_object(&mut self) -> Option<Node> {
        if !self.cursor.read_char('{') {
            return None;
        }
        let properties = self.nested(|reader| reader.read_items(Self::read_property))?;
        self.cursor.read_char('}').then_some(Node::Object(properties))
    }

    fn read_property(&mut self) -> Option<Property> {
        let name = self.read_string_literal()?;
        self.cursor.skip_whitespace();
        if !self.cursor.read_char(':') {
            return None;
        }
        self.cursor.skip_whitespace();
        let value = self.read_value()?;
        Some(Property::new(name, value))
    }

    /// Comma-separated items, read greedily until one fails to parse.
    /// The caller decides whether what follows closes the container.
    fn read_items<T>(&mut self, item: Rule<T>) -> Vec<T> {
        let mut items = Vec::new();
        loop {
            self.cursor.skip_whitespace();
            let Some(value) = self.attempt(item) else {
                break;
            };
            items.push(value);
            self.cursor.skip_whitespace();
            if !self.cursor.read_char(',') {
                break;
            }
        }
        items
    }

    fn nested<T>(&mut self, body: impl FnOnce(&mut Self) -> T) -> Option<T> {
        if self.depth >= self.config.max_depth {
            tracing::debug!(
                max_depth = self.config.max_depth,
                position = self.cursor.position(),
                "JSON nesting limit reached"
            );
            return None;
        }
        self.depth += 1;
        let result = body(self);
        self.depth -= 1;
        Some(result)
    }
}
