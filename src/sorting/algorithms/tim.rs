//! Simplified Tim sort: insertion-sorted fixed runs, then bottom-up merges
//!
//! This keeps the two phases of Tim sort but drops adaptive run detection and
//! galloping. Run length is fixed per call.

use super::insertion::insertion_sort_range;
use super::merge::merge_runs;
use crate::snapshot::Trace;
use crate::sorting::constants::TIM_SORT_RUN;
use crate::sorting::run::SortRun;

pub fn tim_sort(input: &[i32]) -> Trace {
    tim_sort_with_run(input, TIM_SORT_RUN)
}

/// Tim sort with an explicit run length. A length of 0 is treated as 1.
pub fn tim_sort_with_run(input: &[i32], run_len: usize) -> Trace {
    let mut run = SortRun::new(input);
    if run.is_trivial() {
        return run.finish();
    }
    let n = run.len();
    let run_len = run_len.max(1);

    for lo in (0..n).step_by(run_len) {
        let hi = (lo + run_len - 1).min(n - 1);
        insertion_sort_range(&mut run, lo, hi);
    }

    let mut size = run_len;
    while size < n {
        for left in (0..n).step_by(2 * size) {
            let mid = left + size - 1;
            let right = (left + 2 * size - 1).min(n - 1);
            if mid < right {
                merge_runs(&mut run, left, mid, right);
            }
        }
        size *= 2;
    }

    run.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_are_sorted_before_merging() {
        let trace = tim_sort(&[4, 3, 2, 1, 8, 7, 6, 5]);
        let first_write = trace
            .iter()
            .position(|s| s.swap.len() == 1)
            .expect("merge phase writes");
        assert_eq!(trace[first_write - 1].array, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(trace[first_write - 1].comparison, vec![0, 4]);
    }

    #[test]
    fn test_run_length_one_is_pure_merging() {
        let trace = tim_sort_with_run(&[3, 1, 2], 0);
        // no insertion phase: every mutation is a single-position write
        assert!(trace
            .iter()
            .filter(|s| !s.swap.is_empty())
            .all(|s| s.swap.len() == 1));
        assert_eq!(trace.last().map(|s| s.array.clone()), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_partial_last_run() {
        let trace = tim_sort(&[6, 5, 4, 3, 2, 1]);
        assert_eq!(
            trace.last().map(|s| s.array.clone()),
            Some(vec![1, 2, 3, 4, 5, 6])
        );
    }
}
