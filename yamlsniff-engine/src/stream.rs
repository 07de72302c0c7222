//! Lazy line sequence over several sources

use std::iter::{Fuse, FusedIterator};
use std::path::Path;

use crate::decoder::decode_auto;
use crate::error::{EngineError, Result};
use crate::lines::next_line;
use crate::policy::ErrorPolicy;
use crate::source::{FsReader, SourceReader};

/// Decoded text of the current source and how far it has been consumed
#[derive(Debug)]
struct CurrentSource {
    text: String,
    pos: usize,
}

impl CurrentSource {
    fn next_line(&mut self) -> Option<String> {
        let (line, consumed) = next_line(&self.text[self.pos..])?;
        let line = line.to_owned();
        self.pos += consumed;
        Some(line)
    }
}

/// Lines of every source, in order, one per pull.
///
/// A source is read and decoded only once the previous one is exhausted, and
/// its bytes are released by the [`SourceReader`] before decoding starts. The
/// first error is yielded once and ends the sequence; a caller that wants to
/// skip the failing source can call [`LinesOf::resume`].
pub struct LinesOf<I, R = FsReader>
where
    I: Iterator,
{
    sources: Fuse<I>,
    reader: R,
    policy: ErrorPolicy,
    current: Option<CurrentSource>,
    failed: bool,
}

impl<I, R> LinesOf<I, R>
where
    I: Iterator,
    I::Item: AsRef<Path>,
    R: SourceReader,
{
    /// Create a line sequence reading `sources` through `reader`
    pub fn with_reader<S>(sources: S, reader: R, policy: ErrorPolicy) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            sources: sources.into_iter().fuse(),
            reader,
            policy,
            current: None,
            failed: false,
        }
    }

    /// Continue with the next source after an error was yielded
    pub fn resume(&mut self) {
        self.failed = false;
    }

    /// Policy the sources are decoded with
    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    fn open(&mut self, path: &Path) -> Result<CurrentSource> {
        let bytes = self
            .reader
            .read_source(path)
            .map_err(|source| EngineError::Source {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), len = bytes.len(), "read source");

        let text = decode_auto(&bytes, self.policy)?;
        Ok(CurrentSource { text, pos: 0 })
    }
}

impl<I> LinesOf<I, FsReader>
where
    I: Iterator,
    I::Item: AsRef<Path>,
{
    /// Create a line sequence reading `sources` from the file system
    pub fn new<S>(sources: S, policy: ErrorPolicy) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self::with_reader(sources, FsReader, policy)
    }
}

impl<I, R> Iterator for LinesOf<I, R>
where
    I: Iterator,
    I::Item: AsRef<Path>,
    R: SourceReader,
{
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            if let Some(current) = self.current.as_mut() {
                if let Some(line) = current.next_line() {
                    return Some(Ok(line));
                }
                tracing::trace!(bytes = current.text.len(), "source exhausted");
                self.current = None;
            }

            let source = self.sources.next()?;
            let path = source.as_ref();
            match self.open(path) {
                Ok(current) => self.current = Some(current),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "source failed");
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<I, R> FusedIterator for LinesOf<I, R>
where
    I: Iterator,
    I::Item: AsRef<Path>,
    R: SourceReader,
{
}

impl<I, R> std::fmt::Debug for LinesOf<I, R>
where
    I: Iterator,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinesOf")
            .field("policy", &self.policy)
            .field("current", &self.current)
            .field("failed", &self.failed)
            .finish_non_exhaustive()
    }
}

/// Lines of every file in `paths`, decoded after detecting each file's encoding
pub fn lines_of<S>(paths: S, policy: ErrorPolicy) -> LinesOf<S::IntoIter>
where
    S: IntoIterator,
    S::Item: AsRef<Path>,
{
    LinesOf::new(paths, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;
    use std::path::PathBuf;

    #[derive(Default)]
    struct MemoryReader {
        files: HashMap<PathBuf, Vec<u8>>,
        reads: Vec<PathBuf>,
    }

    impl SourceReader for MemoryReader {
        fn read_source(&mut self, path: &Path) -> io::Result<Vec<u8>> {
            self.reads.push(path.to_path_buf());
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such source"))
        }
    }

    fn reader(files: &[(&str, &[u8])]) -> MemoryReader {
        MemoryReader {
            files: files
                .iter()
                .map(|(name, bytes)| (PathBuf::from(name), bytes.to_vec()))
                .collect(),
            reads: Vec::new(),
        }
    }

    #[test]
    fn test_sources_read_lazily_in_order() {
        let mut reader = reader(&[("a", b"1\n2\n"), ("b", b"\xFF\xFE3\x00")]);
        let mut lines = LinesOf::with_reader(["a", "b"], &mut reader, ErrorPolicy::Strict);

        assert_eq!(lines.next().unwrap().unwrap(), "1");
        assert_eq!(lines.next().unwrap().unwrap(), "2");
        assert_eq!(lines.next().unwrap().unwrap(), "3");
        assert!(lines.next().is_none());
        drop(lines);

        assert_eq!(reader.reads, [PathBuf::from("a"), PathBuf::from("b")]);
    }

    #[test]
    fn test_abandoned_sequence_reads_no_further() {
        let mut reader = reader(&[("a", b"1\n2\n"), ("b", b"3\n")]);
        let mut lines = LinesOf::with_reader(["a", "b"], &mut reader, ErrorPolicy::Strict);
        assert_eq!(lines.next().unwrap().unwrap(), "1");
        drop(lines);

        assert_eq!(reader.reads, [PathBuf::from("a")]);
    }

    #[test]
    fn test_first_error_ends_sequence() {
        let mut reader = reader(&[("a", b"1\n"), ("c", b"3\n")]);
        let mut lines = LinesOf::with_reader(["a", "b", "c"], &mut reader, ErrorPolicy::Strict);

        assert_eq!(lines.next().unwrap().unwrap(), "1");
        let err = lines.next().unwrap().unwrap_err();
        assert_eq!(err.path(), Some(Path::new("b")));
        assert!(lines.next().is_none());
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_resume_skips_failed_source() {
        let mut reader = reader(&[("a", b"1\n"), ("b", b"\xff\n"), ("c", b"3\n")]);
        let mut lines = LinesOf::with_reader(["a", "b", "c"], &mut reader, ErrorPolicy::Strict);

        assert_eq!(lines.next().unwrap().unwrap(), "1");
        assert!(matches!(lines.next(), Some(Err(EngineError::Decode(_)))));
        lines.resume();
        assert_eq!(lines.next().unwrap().unwrap(), "3");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_lenient_policy_keeps_going() {
        let mut reader = reader(&[("b", b"\xff\n"), ("c", b"3\n")]);
        let lines: Vec<String> =
            LinesOf::with_reader(["b", "c"], &mut reader, ErrorPolicy::Replace)
                .collect::<Result<_>>()
                .unwrap();
        assert_eq!(lines, ["\u{FFFD}", "3"]);
    }

    #[test]
    fn test_empty_source_yields_nothing() {
        let mut reader = reader(&[("empty", b""), ("a", b"x")]);
        let lines: Vec<String> =
            LinesOf::with_reader(["empty", "a"], &mut reader, ErrorPolicy::Strict)
                .collect::<Result<_>>()
                .unwrap();
        assert_eq!(lines, ["x"]);
    }
}
