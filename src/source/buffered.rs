//! Buffered reader source

use std::io::{self, BufRead};

use super::LineSource;

/// Reads lines from a [`BufRead`] into one reused buffer
#[derive(Debug)]
pub struct BufReadSource<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> BufReadSource<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(128),
        }
    }

    /// Recover the inner reader
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> LineSource for BufReadSource<R> {
    fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        Ok(Some(&self.buf))
    }
}
