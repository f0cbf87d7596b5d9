//! Byte cursor over the source text.
//!
//! The cursor only ever stops on `char` boundaries: it advances by whole
//! whitespace runs or by the length of a matched token, and every token rule
//! matches ASCII delimiters.

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Unconsumed source text.
    #[inline]
    pub(crate) fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Skip Unicode whitespace, returning the number of bytes skipped.
    pub(crate) fn skip_whitespace(&mut self) -> usize {
        let rest = self.rest();
        let skipped = rest.len() - rest.trim_start().len();
        self.pos += skipped;
        skipped
    }

    /// Consume `len` bytes.
    #[inline]
    pub(crate) fn advance(&mut self, len: usize) {
        debug_assert!(
            self.source.is_char_boundary(self.pos + len),
            "cursor advanced into the middle of a character"
        );
        self.pos += len;
    }
}
