//! LSD radix sort, one stable counting pass per decimal digit

use super::counting::checked_max;
use crate::snapshot::Trace;
use crate::sorting::algorithm::Algorithm;
use crate::sorting::constants::RADIX_BASE;
use crate::sorting::errors::SortError;
use crate::sorting::run::SortRun;

/// Intermediate passes are not position-wise final, so nothing is marked
/// sorted until the terminal step.
pub fn radix_sort(input: &[i32]) -> Result<Trace, SortError> {
    let max = checked_max(input, Algorithm::Radix)? as i64;

    let mut run = SortRun::new(input);
    if run.is_trivial() {
        return Ok(run.finish());
    }
    let n = run.len();

    let mut exp: i64 = 1;
    while max / exp > 0 {
        let digit_of = |value: i32| ((value as i64 / exp) % RADIX_BASE) as usize;
        let mut counts = [0usize; RADIX_BASE as usize];

        for i in 0..n {
            counts[digit_of(run.data[i])] += 1;
            let step = run.snapshot(&[i], &[]);
            if i == 0 {
                step.describe(format!("Bucket by digit of place value {}", exp));
            }
        }

        for d in 1..counts.len() {
            counts[d] += counts[d - 1];
        }

        // Walk backwards so equal digits keep their relative order
        let mut output = vec![0; n];
        for i in (0..n).rev() {
            let d = digit_of(run.data[i]);
            counts[d] -= 1;
            output[counts[d]] = run.data[i];
        }

        for (i, value) in output.into_iter().enumerate() {
            run.write(&[], i, value);
        }

        exp *= RADIX_BASE;
    }

    Ok(run.finish())
}
