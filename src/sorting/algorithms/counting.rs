//! Counting sort for bounded non-negative values

use crate::snapshot::Trace;
use crate::sorting::algorithm::Algorithm;
use crate::sorting::constants::COUNTING_SORT_VALUE_LIMIT;
use crate::sorting::errors::SortError;
use crate::sorting::run::SortRun;

/// Tally every value, then rebuild the buffer in value order.
///
/// During reconstruction the already written prefix is shown as sorted.
pub fn counting_sort(input: &[i32]) -> Result<Trace, SortError> {
    let max = checked_max(input, Algorithm::Counting)?;
    if max > COUNTING_SORT_VALUE_LIMIT {
        return Err(SortError::ValueOutOfRange {
            algorithm: Algorithm::Counting,
            value: max,
            limit: COUNTING_SORT_VALUE_LIMIT,
        });
    }

    let mut run = SortRun::new(input);
    if run.is_trivial() {
        return Ok(run.finish());
    }

    let mut counts = vec![0usize; max as usize + 1];
    for i in 0..run.len() {
        counts[run.data[i] as usize] += 1;
        run.snapshot(&[i], &[]);
    }

    let mut k = 0;
    for (value, &count) in counts.iter().enumerate() {
        for _ in 0..count {
            run.write(&[], k, value as i32);
            run.mark_sorted(k);
            k += 1;
        }
    }

    Ok(run.finish())
}

/// Largest value in `input`, rejecting negatives. Empty input yields 0.
pub(crate) fn checked_max(input: &[i32], algorithm: Algorithm) -> Result<i32, SortError> {
    let mut max = 0;
    for (index, &value) in input.iter().enumerate() {
        if value < 0 {
            return Err(SortError::InvalidInputDomain {
                algorithm,
                index,
                value,
            });
        }
        max = max.max(value);
    }
    Ok(max)
}
