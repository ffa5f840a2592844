//! Tuning constants for searchlite.
//!
//! All result limits and concurrency parameters are compile-time constants;
//! the engine takes no runtime configuration beyond its stop-word set.

/// Maximum number of documents returned by a ranked query.
pub const MAX_RESULT_COUNT: usize = 5;

/// Two relevance values closer than this are considered tied and fall back
/// to the rating comparison.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Number of shards in the concurrent relevance accumulator.
///
/// More shards reduce lock contention during parallel scoring at the cost
/// of a longer drain. Typical useful range: 8–128.
pub const ACCUMULATOR_SHARDS: usize = 16;

/// Size of the request-queue rolling window: one entry per minute of a day.
pub const REQUEST_WINDOW_SIZE: usize = 1440;
