//! Process-wide codec counters.
//!
//! Counters only observe; they never influence what the codec returns.

use std::sync::atomic::{AtomicU64, Ordering};

use super::Error;

/// Track APT codec metrics without external dependencies.
pub(crate) struct Metrics;

static ENCODED_MESSAGES: AtomicU64 = AtomicU64::new(0);
static DECODED_MESSAGES: AtomicU64 = AtomicU64::new(0);
static ENCODED_BYTES: AtomicU64 = AtomicU64::new(0);
static DECODED_BYTES: AtomicU64 = AtomicU64::new(0);
static LARGEST_PAYLOAD: AtomicU64 = AtomicU64::new(0);

struct ErrorCounters {
    incomplete: AtomicU64,
    unknown_id: AtomicU64,
    shape_mismatch: AtomicU64,
    length_mismatch: AtomicU64,
    schema_violation: AtomicU64,
}

static ERROR_COUNTERS: ErrorCounters = ErrorCounters::new();

impl ErrorCounters {
    const fn new() -> Self {
        Self {
            incomplete: AtomicU64::new(0),
            unknown_id: AtomicU64::new(0),
            shape_mismatch: AtomicU64::new(0),
            length_mismatch: AtomicU64::new(0),
            schema_violation: AtomicU64::new(0),
        }
    }

    fn increment(&self, err: &Error) {
        let counter = match err {
            Error::Incomplete { .. } => &self.incomplete,
            Error::UnknownMessageId { .. } => &self.unknown_id,
            Error::ShapeMismatch { .. } => &self.shape_mismatch,
            Error::LengthMismatch { .. } => &self.length_mismatch,
            Error::SchemaViolation { .. } => &self.schema_violation,
            _ => return,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

impl Metrics {
    #[inline]
    pub(crate) fn record_encoded(frame_len: usize) {
        ENCODED_MESSAGES.fetch_add(1, Ordering::Relaxed);
        ENCODED_BYTES.fetch_add(frame_len as u64, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_decoded(frame_len: usize, payload_len: usize) {
        DECODED_MESSAGES.fetch_add(1, Ordering::Relaxed);
        DECODED_BYTES.fetch_add(frame_len as u64, Ordering::Relaxed);
        update_max(&LARGEST_PAYLOAD, payload_len as u64);
    }

    #[inline]
    pub(crate) fn record_error(err: &Error) {
        ERROR_COUNTERS.increment(err);
    }
}

fn update_max(target: &AtomicU64, candidate: u64) {
    let mut current = target.load(Ordering::Relaxed);
    while candidate > current {
        match target.compare_exchange_weak(
            current,
            candidate,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => return,
            Err(old) => current = old,
        }
    }
}

/// Read the current counters.
#[must_use]
pub fn snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        encoded_messages: ENCODED_MESSAGES.load(Ordering::Relaxed),
        decoded_messages: DECODED_MESSAGES.load(Ordering::Relaxed),
        encoded_bytes: ENCODED_BYTES.load(Ordering::Relaxed),
        decoded_bytes: DECODED_BYTES.load(Ordering::Relaxed),
        largest_payload: LARGEST_PAYLOAD.load(Ordering::Relaxed),
        incomplete: ERROR_COUNTERS.incomplete.load(Ordering::Relaxed),
        unknown_ids: ERROR_COUNTERS.unknown_id.load(Ordering::Relaxed),
        shape_mismatches: ERROR_COUNTERS.shape_mismatch.load(Ordering::Relaxed),
        length_mismatches: ERROR_COUNTERS.length_mismatch.load(Ordering::Relaxed),
        schema_violations: ERROR_COUNTERS.schema_violation.load(Ordering::Relaxed),
    }
}

/// Lightweight snapshot of codec counters.
#[allow(missing_docs)]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub encoded_messages: u64,
    pub decoded_messages: u64,
    pub encoded_bytes: u64,
    pub decoded_bytes: u64,
    pub largest_payload: u64,
    pub incomplete: u64,
    pub unknown_ids: u64,
    pub shape_mismatches: u64,
    pub length_mismatches: u64,
    pub schema_violations: u64,
}

impl MetricsSnapshot {
    /// Messages the decoder rejected but framed correctly.
    #[must_use]
    pub const fn skipped_messages(&self) -> u64 {
        self.unknown_ids + self.shape_mismatches
    }

    /// Average encoded frame size in bytes.
    #[must_use]
    pub fn avg_encoded_len(&self) -> Option<u64> {
        average(self.encoded_bytes, self.encoded_messages)
    }

    /// Average decoded frame size in bytes.
    #[must_use]
    pub fn avg_decoded_len(&self) -> Option<u64> {
        average(self.decoded_bytes, self.decoded_messages)
    }
}

fn average(total: u64, count: u64) -> Option<u64> {
    total.checked_div(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_max_keeps_largest() {
        let target = AtomicU64::new(10);
        update_max(&target, 4);
        assert_eq!(target.load(Ordering::Relaxed), 10);
        update_max(&target, 42);
        assert_eq!(target.load(Ordering::Relaxed), 42);
    }

    #[test]
    fn test_snapshot_averages() {
        let snapshot = MetricsSnapshot {
            encoded_messages: 4,
            encoded_bytes: 48,
            ..MetricsSnapshot::default()
        };

        assert_eq!(snapshot.avg_encoded_len(), Some(12));
        assert_eq!(snapshot.avg_decoded_len(), None);
    }
}
