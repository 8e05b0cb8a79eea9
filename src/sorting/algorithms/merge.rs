//! Top-down merge sort, merging in place over the working buffer

use crate::snapshot::Trace;
use crate::sorting::run::SortRun;

pub fn merge_sort(input: &[i32]) -> Trace {
    let mut run = SortRun::new(input);
    if run.is_trivial() {
        return run.finish();
    }
    let end = run.len() - 1;
    merge_sort_range(&mut run, 0, end);
    run.finish()
}

fn merge_sort_range(run: &mut SortRun, start: usize, end: usize) {
    if start >= end {
        return;
    }
    let mid = start + (end - start) / 2;
    merge_sort_range(run, start, mid);
    merge_sort_range(run, mid + 1, end);
    merge_runs(run, start, mid, end);
}

/// Merge the sorted ranges `start..=mid` and `mid+1..=end`.
///
/// Both halves are copied out first and written back position by position.
/// Comparison highlights use the halves' original positions; ties take from
/// the left half, which keeps the merge stable.
pub(crate) fn merge_runs(run: &mut SortRun, start: usize, mid: usize, end: usize) {
    let left = run.data[start..=mid].to_vec();
    let right = run.data[mid + 1..=end].to_vec();

    let (mut i, mut j, mut k) = (0, 0, start);

    while i < left.len() && j < right.len() {
        run.snapshot(&[start + i, mid + 1 + j], &[]);
        if left[i] <= right[j] {
            run.write(&[], k, left[i]);
            i += 1;
        } else {
            run.write(&[], k, right[j]);
            j += 1;
        }
        k += 1;
    }

    for &value in left[i..].iter().chain(&right[j..]) {
        run.write(&[], k, value);
        k += 1;
    }
}
