//! Dispatch metrics for observability
//!
//! Counters describing what the multi-destination logger did with the records
//! it was given.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use filtered_logger::DispatchMetrics;
///
/// let metrics = DispatchMetrics::new();
/// metrics.record_handled();
/// metrics.record_unhandled();
///
/// assert_eq!(metrics.handled_count(), 1);
/// assert_eq!(metrics.unhandled_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DispatchMetrics {
    /// Records at least one destination accepted
    handled: AtomicU64,

    /// Records no destination accepted, including dispatch with no destinations
    unhandled: AtomicU64,

    /// Destination writes that returned an error or panicked
    write_failures: AtomicU64,
}

impl DispatchMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            handled: AtomicU64::new(0),
            unhandled: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn handled_count(&self) -> u64 {
        self.handled.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn unhandled_count(&self) -> u64 {
        self.unhandled.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_handled(&self) {
        self.handled.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_unhandled(&self) {
        self.unhandled.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the previous failure count
    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.handled.store(0, Ordering::Relaxed);
        self.unhandled.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let metrics = DispatchMetrics::new();
        metrics.record_handled();
        metrics.record_handled();
        assert_eq!(metrics.record_write_failure(), 0);
        assert_eq!(metrics.record_write_failure(), 1);

        assert_eq!(metrics.handled_count(), 2);
        assert_eq!(metrics.unhandled_count(), 0);
        assert_eq!(metrics.write_failures(), 2);

        metrics.reset();
        assert_eq!(metrics.handled_count(), 0);
        assert_eq!(metrics.write_failures(), 0);
    }
}
