//! Selection sort: repeatedly pull the minimum of the unsorted suffix forward

use crate::snapshot::Trace;
use crate::sorting::run::SortRun;

pub fn selection_sort(input: &[i32]) -> Trace {
    let mut run = SortRun::new(input);
    if run.is_trivial() {
        return run.finish();
    }
    let n = run.len();

    for i in 0..n {
        let mut min_idx = i;
        run.snapshot(&[i], &[]);

        for j in i + 1..n {
            run.snapshot(&[min_idx, j], &[]);
            if run.data[j] < run.data[min_idx] {
                min_idx = j;
            }
        }

        if min_idx != i {
            run.swap(&[], i, min_idx)
                .describe(format!("Move minimum from {} to {}", min_idx, i));
        }
        run.mark_sorted(i);
    }

    run.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_swap_per_misplaced_minimum() {
        let trace = selection_sort(&[3, 1, 2]);
        // i=0 swaps 3<->1, i=1 swaps 3<->2, i=2 nothing left
        assert_eq!(trace.mutation_count(), 2);
        let swaps: Vec<_> = trace.iter().filter(|s| !s.swap.is_empty()).collect();
        assert_eq!(swaps[0].swap, vec![0, 1]);
        assert_eq!(swaps[0].array, vec![1, 3, 2]);
        assert_eq!(swaps[1].sorted, vec![0]);
    }
}
