//! Shell sort with the halving gap sequence n/2, n/4, ..., 1

use crate::snapshot::Trace;
use crate::sorting::run::SortRun;

pub fn shell_sort(input: &[i32]) -> Trace {
    let mut run = SortRun::new(input);
    if run.is_trivial() {
        return run.finish();
    }
    let n = run.len();

    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let temp = run.data[i];
            let mut j = i;
            run.snapshot(&[i], &[]);

            while j >= gap && run.data[j - gap] > temp {
                run.snapshot(&[j, j - gap], &[]);
                let shifted = run.data[j - gap];
                run.write(&[j, j - gap], j, shifted);
                j -= gap;
            }
            run.write(&[], j, temp);
        }
        gap /= 2;
    }

    run.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gapped_shift_then_place() {
        let trace = shell_sort(&[2, 1]);
        // gap 1: inspect, compare, shift, place
        assert_eq!(trace[1].comparison, vec![1]);
        assert_eq!(trace[2].comparison, vec![1, 0]);
        assert_eq!(trace[3].swap, vec![1]);
        assert_eq!(trace[3].array, vec![2, 2]);
        assert_eq!(trace[4].swap, vec![0]);
        assert_eq!(trace[4].array, vec![1, 2]);
    }
}
