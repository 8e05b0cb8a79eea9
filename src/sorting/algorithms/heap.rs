//! Heap sort over an implicit max-heap

use crate::snapshot::Trace;
use crate::sorting::run::SortRun;

pub fn heap_sort(input: &[i32]) -> Trace {
    let mut run = SortRun::new(input);
    if run.is_trivial() {
        return run.finish();
    }
    let n = run.len();

    for i in (0..n / 2).rev() {
        sift_down(&mut run, n, i);
    }

    for end in (1..n).rev() {
        run.data.swap(0, end);
        run.mark_sorted(end);
        let max = run.data[end];
        run.snapshot(&[0, end], &[0, end])
            .describe(format!("Move maximum {} to position {}", max, end));
        sift_down(&mut run, end, 0);
    }
    run.mark_sorted(0);

    run.finish()
}

/// Restore the max-heap property for the subtree rooted at `root`, looking
/// only at the first `heap_len` positions
fn sift_down(run: &mut SortRun, heap_len: usize, root: usize) {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    run.snapshot(&[root], &[]);

    if left < heap_len {
        run.snapshot(&[largest, left], &[]);
        if run.data[left] > run.data[largest] {
            largest = left;
        }
    }

    if right < heap_len {
        run.snapshot(&[largest, right], &[]);
        if run.data[right] > run.data[largest] {
            largest = right;
        }
    }

    if largest != root {
        run.swap(&[root, largest], root, largest);
        sift_down(run, heap_len, largest);
    }
}
