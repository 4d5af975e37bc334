/// Position tracker over the source text.
///
/// Every read is all-or-nothing: on a match the cursor advances past the
/// consumed characters, otherwise it stays where it was. The furthest
/// position ever reached survives rewinds and marks where reading got stuck.
#[derive(Debug)]
pub(crate) struct Cursor {
    chars: Vec<char>,
    index: usize,
    furthest: usize,
}

impl Cursor {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            index: 0,
            furthest: 0,
        }
    }

    /// Current offset in chars, `0 <= position <= len`.
    pub(crate) fn position(&self) -> usize {
        self.index
    }

    /// High-water mark of `position`; never lowered by [`Cursor::rewind`].
    pub(crate) fn furthest(&self) -> usize {
        self.furthest
    }

    pub(crate) fn rewind(&mut self, position: usize) {
        debug_assert!(position <= self.chars.len());
        self.index = position;
    }

    pub(crate) fn len(&self) -> usize {
        self.chars.len()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.index >= self.chars.len()
    }

    pub(crate) fn read_if(&mut self, predicate: impl Fn(char) -> bool) -> Option<char> {
        let ch = *self.chars.get(self.index)?;
        if !predicate(ch) {
            return None;
        }
        self.advance(1);
        Some(ch)
    }

    pub(crate) fn read_char(&mut self, expected: char) -> bool {
        self.read_if(|ch| ch == expected).is_some()
    }

    /// Reads exactly `len` chars if every one of them satisfies `predicate`.
    pub(crate) fn read_run(
        &mut self,
        len: usize,
        predicate: impl Fn(char) -> bool,
    ) -> Option<&[char]> {
        let start = self.index;
        let run = self.chars.get(start..start.checked_add(len)?)?;
        if !run.iter().copied().all(predicate) {
            return None;
        }
        self.index += len;
        self.furthest = self.furthest.max(self.index);
        Some(run)
    }

    pub(crate) fn read_literal(&mut self, expected: &str) -> bool {
        let len = expected.chars().count();
        let matched = self
            .chars
            .get(self.index..self.index + len)
            .is_some_and(|window| window.iter().copied().eq(expected.chars()));
        if matched {
            self.advance(len);
        }
        matched
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while self.read_if(char::is_whitespace).is_some() {}
    }

    fn advance(&mut self, len: usize) {
        self.index += len;
        self.furthest = self.furthest.max(self.index);
    }

    /// Text from `from` onwards, cut to at most `limit` chars.
    pub(crate) fn excerpt(&self, from: usize, limit: usize) -> String {
        self.chars
            .get(from..)
            .unwrap_or_default()
            .iter()
            .take(limit)
            .collect()
    }
}
