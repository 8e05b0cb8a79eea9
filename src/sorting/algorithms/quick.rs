//! Quick sort with the Lomuto partition scheme

use crate::snapshot::Trace;
use crate::sorting::run::SortRun;

/// Pivot is the last element of each subrange. No position is marked sorted
/// before the terminal step.
pub fn quick_sort(input: &[i32]) -> Trace {
    let mut run = SortRun::new(input);
    if run.is_trivial() {
        return run.finish();
    }
    let hi = run.len() - 1;
    quick_sort_range(&mut run, 0, hi);
    run.finish()
}

fn quick_sort_range(run: &mut SortRun, lo: usize, hi: usize) {
    if lo >= hi {
        return;
    }
    let p = partition(run, lo, hi);
    if p > lo {
        quick_sort_range(run, lo, p - 1);
    }
    quick_sort_range(run, p + 1, hi);
}

/// Partition `lo..=hi` around `data[hi]` and return the pivot's final index
fn partition(run: &mut SortRun, lo: usize, hi: usize) -> usize {
    let pivot = run.data[hi];
    // Next slot for an element smaller than the pivot
    let mut store = lo;

    for j in lo..hi {
        run.snapshot(&[j, hi], &[]);
        if run.data[j] < pivot {
            run.swap(&[store, j], store, j);
            store += 1;
        }
    }

    run.swap(&[store, hi], store, hi)
        .describe(format!("Pivot {} placed at position {}", pivot, store));
    store
}
