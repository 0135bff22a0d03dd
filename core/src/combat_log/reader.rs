use crate::combat_log::{Event, LogParser, ParseError, ReaderError};
use encoding_rs::UTF_8;
use memchr::memchr_iter;
use memmap2::Mmap;
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

/// Output of a full read, in file order. Lines classified as
/// [`Event::Unknown`] are only counted, never retained.
#[derive(Debug, Default)]
pub struct ParsedLog {
    /// Non-blank lines after the header that produced an event or an error
    pub lines: Vec<(u64, Result<Event, ParseError>)>,
    pub unknown: u64,
    /// Physical lines in the file, header included
    pub line_count: u64,
}

pub struct Reader {
    path: PathBuf,
}

impl Reader {
    pub fn from(file_path: PathBuf) -> Self {
        Reader { path: file_path }
    }

    /// Parses and classifies the whole file. Lines are processed in parallel;
    /// results keep file order so dispatch afterwards matches a sequential scan.
    pub fn read_log_file(&self, parser: &LogParser) -> Result<ParsedLog, ReaderError> {
        let file = fs::File::open(&self.path).map_err(|source| ReaderError::OpenFile {
            path: self.path.clone(),
            source,
        })?;

        if file.metadata().is_ok_and(|m| m.len() == 0) {
            return Ok(ParsedLog::default());
        }

        let mmap = unsafe { Mmap::map(&file) }.map_err(|source| ReaderError::MemoryMap {
            path: self.path.clone(),
            source,
        })?;
        let bytes = mmap.as_ref();

        let line_ranges = line_ranges(bytes);
        let line_count = line_ranges.len() as u64;

        let unknown = AtomicU64::new(0);

        // line 1 is the header
        let lines = line_ranges
            .par_iter()
            .skip(1)
            .filter_map(|&(line_number, start, end)| {
                let (line, _, _) = UTF_8.decode(&bytes[start..end]);
                if line.trim().is_empty() {
                    return None;
                }
                match parser.parse_line(line_number, &line) {
                    Ok(Event::Unknown(_)) => {
                        unknown.fetch_add(1, Ordering::Relaxed);
                        None
                    }
                    result => Some((line_number, result)),
                }
            })
            .collect();

        Ok(ParsedLog {
            lines,
            unknown: unknown.into_inner(),
            line_count,
        })
    }
}

// (line_number, start, end) for every physical line, 1-based
fn line_ranges(bytes: &[u8]) -> Vec<(u64, usize, usize)> {
    let mut ranges = Vec::new();
    let mut start = 0;
    for end in memchr_iter(b'\n', bytes) {
        ranges.push((ranges.len() as u64 + 1, start, end));
        start = end + 1;
    }
    if start < bytes.len() {
        ranges.push((ranges.len() as u64 + 1, start, bytes.len()));
    }
    ranges
}
