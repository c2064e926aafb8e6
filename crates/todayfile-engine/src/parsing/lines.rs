use std::io::{self, BufRead};

/// One-line-lookahead cursor over an input stream.
///
/// Lines are handed out with their trailing newline stripped. End of
/// input is `Ok(None)`, distinct from an empty line. A single line may
/// be pushed back with [`LineReader::unget`]; the held line is returned
/// by the next `peek` or `next_line` call.
pub(crate) struct LineReader<R> {
    input: R,
    /// The lookahead slot: empty, or holding one peeked/ungot line.
    pending: Option<String>,
}

impl<R: BufRead> LineReader<R> {
    pub(crate) fn new(input: R) -> Self {
        Self {
            input,
            pending: None,
        }
    }

    /// Returns the next line without consuming it. Repeated peeks see
    /// the same line.
    pub(crate) fn peek(&mut self) -> io::Result<Option<&str>> {
        if self.pending.is_none() {
            self.pending = self.read_line()?;
        }
        Ok(self.pending.as_deref())
    }

    /// Consumes and returns the next line, draining the lookahead slot
    /// first if a peeked or ungot line is pending.
    pub(crate) fn next_line(&mut self) -> io::Result<Option<String>> {
        if let Some(line) = self.pending.take() {
            return Ok(Some(line));
        }
        self.read_line()
    }

    /// Pushes `line` back so the next `peek`/`next_line` returns it.
    ///
    /// # Panics
    ///
    /// Panics if a pushed-back line is already pending. Only one line of
    /// lookahead is supported; a second unget is a parser bug, not an
    /// input problem.
    pub(crate) fn unget(&mut self, line: String) {
        assert!(self.pending.is_none(), "cannot unget more than one line");
        self.pending = Some(line);
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
        }
        Ok(Some(line))
    }
}
