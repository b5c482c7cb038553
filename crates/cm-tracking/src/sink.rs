//! Best-effort fix persistence.
//!
//! The stream offers every processed fix to a [`FixSink`].  Sink failures are
//! logged and swallowed; they never reach observers or navigation.  An
//! unconfigured sink is [`NoopSink`], not an error.

use std::fmt;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use serde::Serialize;

use crate::{PositionFix, SinkError};

// ── UserId ────────────────────────────────────────────────────────────────────

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Identifier fixes are recorded under, `user-<epoch-millis>-<9 base36 chars>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UserId(pub String);

impl UserId {
    /// A fresh id from the wall clock and the thread-local RNG.
    pub fn generate() -> Self {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        Self::generate_with(&mut rand::thread_rng(), now_ms)
    }

    /// Deterministic variant for tests and replays.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, now_ms: i64) -> Self {
        let suffix: String = (0..9)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        Self(format!("user-{now_ms}-{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ── FixRecord ─────────────────────────────────────────────────────────────────

/// Flat row persisted per fix.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FixRecord {
    pub user_id:         String,
    pub lat:             f64,
    pub lng:             f64,
    pub accuracy:        f64,
    pub timestamp:       i64,
    pub nearby_building: Option<String>,
}

impl FixRecord {
    pub fn new(user_id: &UserId, fix: &PositionFix) -> Self {
        Self {
            user_id:         user_id.0.clone(),
            lat:             fix.coordinates.lat,
            lng:             fix.coordinates.lng,
            accuracy:        fix.accuracy,
            timestamp:       fix.timestamp_ms,
            nearby_building: fix.nearby.as_ref().map(|id| id.to_string()),
        }
    }
}

// ── FixSink ───────────────────────────────────────────────────────────────────

/// The "persist fix" capability.
pub trait FixSink {
    fn save_fix(&mut self, record: &FixRecord) -> Result<(), SinkError>;
}

/// Persistence not configured: accepts and discards every record.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopSink;

impl FixSink for NoopSink {
    fn save_fix(&mut self, _record: &FixRecord) -> Result<(), SinkError> {
        Ok(())
    }
}

impl<S: FixSink + ?Sized> FixSink for &mut S {
    fn save_fix(&mut self, record: &FixRecord) -> Result<(), SinkError> {
        (**self).save_fix(record)
    }
}

impl<S: FixSink + ?Sized> FixSink for Box<S> {
    fn save_fix(&mut self, record: &FixRecord) -> Result<(), SinkError> {
        (**self).save_fix(record)
    }
}

// ── CsvFixSink ────────────────────────────────────────────────────────────────

/// Appends one CSV row per fix, header first, flushing after every row.
pub struct CsvFixSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvFixSink<W> {
    pub fn new(inner: W) -> Self {
        Self { writer: csv::Writer::from_writer(inner) }
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W, SinkError> {
        self.writer.into_inner().map_err(|e| SinkError::Io(e.into_error()))
    }
}

impl CsvFixSink<std::fs::File> {
    /// Create (truncating) a CSV file at `path`.
    pub fn create(path: &std::path::Path) -> Result<Self, SinkError> {
        Ok(Self { writer: csv::Writer::from_path(path)? })
    }
}

impl<W: Write> FixSink for CsvFixSink<W> {
    fn save_fix(&mut self, record: &FixRecord) -> Result<(), SinkError> {
        self.writer.serialize(record)?;
        self.writer.flush()?;
        Ok(())
    }
}
