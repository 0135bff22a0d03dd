//! Error types for combat log parsing

use std::path::PathBuf;
use thiserror::Error;

/// A raw identifier field did not have the shape its normalizer expects
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("player name {raw} has no server suffix (expected \"Name-Realm\")")]
    MissingServerSuffix { raw: String },

    #[error("player name {raw} is empty before the server suffix")]
    EmptyPlayerName { raw: String },
}

/// Errors during combat log line splitting and classification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing payload at line {line_number}: expected three timestamp tokens")]
    MissingPayload { line_number: u64 },

    #[error("field {index} out of range at line {line_number} ({len} fields)")]
    FieldOutOfRange {
        line_number: u64,
        index: usize,
        len: usize,
    },

    #[error("invalid value format at line {line_number}: {detail}")]
    InvalidValue { line_number: u64, detail: String },
}

/// Any per-line failure. The session skips the line and keeps scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors during log file reading operations
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("failed to open log file {path}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to memory map file {path}")]
    MemoryMap {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
