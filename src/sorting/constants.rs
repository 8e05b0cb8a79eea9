// Tuning constants for the trace generators

/// Run length used by the simplified Tim sort.
///
/// Production Tim sort picks adaptive runs (32..64) and gallops while
/// merging; a run of 4 keeps both phases visible on a ~20 element array.
pub const TIM_SORT_RUN: usize = 4;

/// Digit base for radix sort passes (ones, tens, hundreds, ...)
pub const RADIX_BASE: i64 = 10;

/// Largest value counting sort will allocate a bucket for
pub const COUNTING_SORT_VALUE_LIMIT: i32 = 1_000_000;
