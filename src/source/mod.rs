//! Line producers
//!
//! A [`LineSource`] hands out one raw line at a time, borrowed from an
//! internal buffer, so reading never grows memory with input size.
//!
//! - [`BufReadSource`]: any [`BufRead`](std::io::BufRead), one reused buffer
//! - [`MmapSource`]: memory-mapped file scanned with `memchr`
//!
//! # Example
//!
//! ```
//! use stationstats::source::{BufReadSource, LineSource};
//!
//! let mut source = BufReadSource::new("A;1.0\nB;2.0\n".as_bytes());
//!
//! assert_eq!(source.next_line().unwrap(), Some(&b"A;1.0"[..]));
//! assert_eq!(source.next_line().unwrap(), Some(&b"B;2.0"[..]));
//! assert_eq!(source.next_line().unwrap(), None);
//! ```

mod buffered;
mod mmap;

pub use buffered::BufReadSource;
pub use mmap::MmapSource;

use std::io;

/// Sequential producer of raw input lines
pub trait LineSource {
    /// Next line without its `\n`, or `None` at end of input
    ///
    /// A final line lacking a newline is still returned; a newline at the
    /// very end of input does not produce an extra empty line.
    fn next_line(&mut self) -> io::Result<Option<&[u8]>>;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        (**self).next_line()
    }
}
