//! Sequential block transfer between byte sources and sinks.
//!
//! A transfer reads a [`Source`] in fixed-size blocks and writes each block to
//! a [`Sink`], reporting progress after every write. Targets are addressed by
//! `file://host/path` URIs or plain paths; other schemes are rejected.
//!
//! # Example
//!
//! ```
//! use oxiarc_core::transfer::{MemorySink, MemorySource, transfer};
//!
//! let mut source = MemorySource::new(b"Hello, World!".to_vec());
//! let mut sink = MemorySink::new();
//! let progress = transfer(&mut source, &mut sink, 4, |_| {}).unwrap();
//!
//! assert_eq!(progress.written, 13);
//! assert_eq!(progress.blocks, 4);
//! assert_eq!(sink.into_inner(), b"Hello, World!");
//! ```

use crate::error::{OxiArcError, Result};
use std::fs::File;
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Default block size for transfers.
pub const DEFAULT_BLOCK_SIZE: usize = 4960;

/// A readable byte source with a known size.
pub trait Source {
    /// Total number of bytes the source holds.
    fn size(&self) -> u64;

    /// Read the next block into `buf`, returning the number of bytes read.
    /// Returns 0 once the source is exhausted.
    fn read_block(&mut self, buf: &mut [u8]) -> Result<usize>;
}

/// A writable byte destination.
pub trait Sink {
    /// Write a whole block.
    fn write_block(&mut self, block: &[u8]) -> Result<()>;

    /// Flush and release the destination.
    fn finish(&mut self) -> Result<()>;
}

/// Snapshot of a running transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferProgress {
    /// Size reported by the source when the transfer started.
    pub total: u64,
    /// Bytes written so far.
    pub written: u64,
    /// Blocks written so far.
    pub blocks: u64,
    /// Time since the transfer started.
    pub elapsed: Duration,
}

impl TransferProgress {
    /// Completion as a percentage, or 100 for an empty source.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.written as f64 / self.total as f64 * 100.0
        }
    }
}

/// Resolve a target URI to a local path.
///
/// Accepts `file://host/path` (the host part is ignored) or a bare path.
pub fn resolve_target(uri: &str) -> Result<PathBuf> {
    if let Some(rest) = uri.strip_prefix("file://") {
        let path = rest
            .find('/')
            .map(|idx| &rest[idx..])
            .ok_or_else(|| OxiArcError::target_unavailable(uri, "URI has no path component"))?;
        return Ok(PathBuf::from(path));
    }

    if let Some((scheme, _)) = uri.split_once("://") {
        return Err(OxiArcError::unsupported_scheme(scheme));
    }

    Ok(PathBuf::from(uri))
}

/// File-backed source.
#[derive(Debug)]
pub struct FileSource {
    file: File,
    size: u64,
}

impl FileSource {
    /// Open a file for reading.
    ///
    /// Regular files are sized from metadata; anything else (block devices)
    /// is sized by seeking to the end.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(OxiArcError::source_not_found(path.display().to_string()));
        }

        let mut file = File::open(path)
            .map_err(|e| OxiArcError::target_unavailable(path.display().to_string(), e.to_string()))?;
        let metadata = file.metadata()?;

        let size = if metadata.is_file() {
            metadata.len()
        } else {
            let end = file.seek(SeekFrom::End(0))?;
            file.seek(SeekFrom::Start(0))?;
            end
        };

        Ok(Self { file, size })
    }
}

impl Source for FileSource {
    fn size(&self) -> u64 {
        self.size
    }

    fn read_block(&mut self, buf: &mut [u8]) -> Result<usize> {
        Ok(self.file.read(buf)?)
    }
}

/// File-backed sink. Creates the file or truncates an existing one.
#[derive(Debug)]
pub struct FileSink {
    writer: BufWriter<File>,
}

impl FileSink {
    /// Create (or truncate) a file for writing.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| OxiArcError::target_unavailable(path.display().to_string(), e.to_string()))?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl Sink for FileSink {
    fn write_block(&mut self, block: &[u8]) -> Result<()> {
        self.writer.write_all(block)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// In-memory source.
#[derive(Debug, Clone)]
pub struct MemorySource {
    data: Vec<u8>,
    pos: usize,
}

impl MemorySource {
    /// Wrap a byte buffer.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, pos: 0 }
    }
}

impl Source for MemorySource {
    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    fn read_block(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = buf.len().min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// In-memory sink.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    data: Vec<u8>,
    finished: bool,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether [`Sink::finish`] has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Take the collected bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl Sink for MemorySink {
    fn write_block(&mut self, block: &[u8]) -> Result<()> {
        self.data.extend_from_slice(block);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}

/// Copy `source` into `sink` block by block.
///
/// The source size is sampled once at the start; bytes beyond it are not
/// written. `on_progress` runs after every block write. A `block_size` of 0
/// selects [`DEFAULT_BLOCK_SIZE`].
pub fn transfer<S, K, F>(
    source: &mut S,
    sink: &mut K,
    block_size: usize,
    mut on_progress: F,
) -> Result<TransferProgress>
where
    S: Source + ?Sized,
    K: Sink + ?Sized,
    F: FnMut(&TransferProgress),
{
    let block_size = if block_size == 0 {
        DEFAULT_BLOCK_SIZE
    } else {
        block_size
    };

    let start = Instant::now();
    let mut progress = TransferProgress {
        total: source.size(),
        written: 0,
        blocks: 0,
        elapsed: Duration::ZERO,
    };
    let mut buf = vec![0u8; block_size];

    while progress.written < progress.total {
        let n = source.read_block(&mut buf)?;
        if n == 0 {
            break;
        }

        let remaining = progress.total - progress.written;
        let take = (n as u64).min(remaining) as usize;
        sink.write_block(&buf[..take])?;

        progress.written += take as u64;
        progress.blocks += 1;
        progress.elapsed = start.elapsed();
        on_progress(&progress);
    }

    sink.finish()?;
    progress.elapsed = start.elapsed();
    Ok(progress)
}

/// Copy between two URIs or paths using file targets.
pub fn transfer_uri<F>(
    src_uri: &str,
    dst_uri: &str,
    block_size: usize,
    on_progress: F,
) -> Result<TransferProgress>
where
    F: FnMut(&TransferProgress),
{
    let src = resolve_target(src_uri)?;
    let dst = resolve_target(dst_uri)?;

    let mut source = FileSource::open(&src)?;
    let mut sink = FileSink::create(&dst)?;
    transfer(&mut source, &mut sink, block_size, on_progress)
}
