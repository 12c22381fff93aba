//! Memory-mapped file source

use std::fs::File;
use std::io;
use std::path::Path;

use memchr::memchr;
use memmap2::Mmap;

use super::LineSource;

/// Scans a memory-mapped file for newlines
///
/// Pages are faulted in by the OS as the scan advances; nothing is copied.
#[derive(Debug)]
pub struct MmapSource {
    /// `None` for empty files, which cannot be mapped
    map: Option<Mmap>,
    pos: usize,
}

impl MmapSource {
    /// Open and map `path`
    ///
    /// # Safety
    ///
    /// Same contract as [`from_file`](Self::from_file).
    pub unsafe fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::from_file(&file)
    }

    /// Map an already opened file
    ///
    /// # Safety
    ///
    /// The file must not be truncated or modified, by this or any other
    /// process, while the source is alive. Truncation makes later reads
    /// fault (`SIGBUS` on unix). Use [`BufReadSource`](super::BufReadSource)
    /// when that cannot be guaranteed.
    pub unsafe fn from_file(file: &File) -> io::Result<Self> {
        let map = if file.metadata()?.len() == 0 {
            None
        } else {
            // SAFETY: forwarded to the caller, see `# Safety`.
            let map = unsafe { Mmap::map(file)? };
            #[cfg(unix)]
            map.advise(memmap2::Advice::Sequential)?;
            Some(map)
        };
        Ok(Self { map, pos: 0 })
    }

    /// Mapped length in bytes
    pub fn len(&self) -> usize {
        self.map.as_ref().map_or(0, |m| m.len())
    }

    /// Check if the file is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LineSource for MmapSource {
    fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        let data: &[u8] = match &self.map {
            Some(map) => &map[..],
            None => return Ok(None),
        };
        if self.pos >= data.len() {
            return Ok(None);
        }

        let rest = &data[self.pos..];
        let line = match memchr(b'\n', rest) {
            Some(end) => {
                self.pos += end + 1;
                &rest[..end]
            }
            None => {
                self.pos = data.len();
                rest
            }
        };
        Ok(Some(line))
    }
}
