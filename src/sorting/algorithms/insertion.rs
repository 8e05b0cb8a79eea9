//! Insertion sort: shift each element left past strictly greater neighbours

use crate::snapshot::Trace;
use crate::sorting::run::SortRun;

pub fn insertion_sort(input: &[i32]) -> Trace {
    let mut run = SortRun::new(input);
    if run.is_trivial() {
        return run.finish();
    }
    let end = run.len() - 1;
    insertion_sort_range(&mut run, 0, end);
    run.finish()
}

/// Insertion-sort the inclusive range `lo..=hi` of the working buffer.
///
/// Sorted marks are left untouched; the ordering invariant here is local to
/// the range rather than cumulative.
pub(crate) fn insertion_sort_range(run: &mut SortRun, lo: usize, hi: usize) {
    for i in lo + 1..=hi {
        let mut j = i;
        run.snapshot(&[i], &[]);

        while j > lo && run.data[j - 1] > run.data[j] {
            run.snapshot(&[j - 1, j], &[]);
            run.swap(&[j - 1, j], j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_precedes_each_shift() {
        let trace = insertion_sort(&[2, 1]);
        assert_eq!(trace[1].comparison, vec![1]);
        assert_eq!(trace[2].comparison, vec![0, 1]);
        assert_eq!(trace[2].array, vec![2, 1]);
        assert_eq!(trace[3].swap, vec![0, 1]);
        assert_eq!(trace[3].array, vec![1, 2]);
    }

    #[test]
    fn test_no_sorted_marks_until_final_step() {
        let trace = insertion_sort(&[4, 2, 3, 1]);
        let last = trace.len() - 1;
        assert!(trace.steps()[..last].iter().all(|s| s.sorted.is_empty()));
        assert_eq!(trace[last].sorted, vec![0, 1, 2, 3]);
    }
}
