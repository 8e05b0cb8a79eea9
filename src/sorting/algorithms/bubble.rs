//! Bubble sort: adjacent compare-and-swap passes over a shrinking suffix

use crate::snapshot::Trace;
use crate::sorting::run::SortRun;

/// Runs exactly `n` outer passes (no early exit on a swap-free pass) so the
/// trace shows the full quadratic comparison volume.
pub fn bubble_sort(input: &[i32]) -> Trace {
    let mut run = SortRun::new(input);
    if run.is_trivial() {
        return run.finish();
    }
    let n = run.len();

    for i in 0..n {
        for j in 0..n - i - 1 {
            run.snapshot(&[j, j + 1], &[]);
            if run.data[j] > run.data[j + 1] {
                run.swap(&[j, j + 1], j, j + 1);
            }
        }
        run.mark_sorted(n - i - 1);
        run.snapshot(&[], &[])
            .describe(format!("Position {} holds its final value", n - i - 1));
    }

    run.finish()
}
