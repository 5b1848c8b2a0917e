///
/// SubstringReader
///
/// Forward-only cursor over a `&str` that tracks the character position
/// for error messages. Positions are reported as character offsets.
///

#[derive(Clone, Debug)]
pub struct SubstringReader<'a> {
    source: &'a str,
    offset: usize,
    position: usize,
}

impl<'a> SubstringReader<'a> {
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            position: 0,
        }
    }

    /// Character position of the next unread character.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.offset..]
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.offset >= self.source.len()
    }

    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    pub fn read(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        self.position += 1;

        Some(c)
    }

    /// Consume `expected` if it is next.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.read();
            true
        } else {
            false
        }
    }

    /// Consume characters while `pred` holds and return the consumed slice.
    pub fn read_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let start = self.offset;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.read();
        }

        &self.source[start..self.offset]
    }

    /// Skip spaces; returns the number skipped.
    pub fn skip_whitespace(&mut self) -> usize {
        self.read_while(|c| c == ' ').len()
    }
}
