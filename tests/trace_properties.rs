// Properties every generated trace must satisfy, checked for all algorithms

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortty::snapshot::Trace;
use sortty::sorting::{generate_trace, Algorithm};

fn trace_for(algorithm: Algorithm, input: &[i32]) -> Trace {
    generate_trace(algorithm, input)
        .unwrap_or_else(|e| panic!("{} failed on {:?}: {}", algorithm, input, e))
}

fn sample_inputs() -> Vec<Vec<i32>> {
    let mut inputs = vec![
        vec![],
        vec![7],
        vec![2, 1],
        vec![5, 3, 8, 1],
        vec![1, 2, 3, 4, 5, 6],
        vec![6, 5, 4, 3, 2, 1],
        vec![3, 3, 1, 1, 2, 2],
        vec![0, 0, 0, 0],
        vec![170, 45, 75, 90, 802, 24, 2, 66],
        vec![9, 1, 8, 2, 7],
    ];

    let mut rng = StdRng::seed_from_u64(0x5eed);
    for len in [3, 9, 17, 20, 33] {
        inputs.push((0..len).map(|_| rng.gen_range(0..100)).collect());
    }
    inputs
}

fn sorted_copy(input: &[i32]) -> Vec<i32> {
    let mut expected = input.to_vec();
    expected.sort();
    expected
}

#[test]
fn test_final_step_is_sorted_with_every_index_marked() {
    for algorithm in Algorithm::ALL {
        for input in sample_inputs() {
            let trace = trace_for(algorithm, &input);
            let last = trace.last().expect("trace is never empty");

            assert_eq!(last.array, sorted_copy(&input), "{} on {:?}", algorithm, input);
            let mut marked = last.sorted.clone();
            marked.sort_unstable();
            assert_eq!(
                marked,
                (0..input.len()).collect::<Vec<_>>(),
                "{} on {:?}",
                algorithm,
                input
            );
        }
    }
}

#[test]
fn test_first_step_is_untouched_input() {
    for algorithm in Algorithm::ALL {
        for input in sample_inputs() {
            let trace = trace_for(algorithm, &input);
            let first = &trace[0];

            assert_eq!(first.array, input, "{}", algorithm);
            assert!(first.comparison.is_empty());
            assert!(first.swap.is_empty());
            assert!(first.sorted.is_empty());
        }
    }
}

#[test]
fn test_array_length_is_constant() {
    for algorithm in Algorithm::ALL {
        for input in sample_inputs() {
            let trace = trace_for(algorithm, &input);
            assert!(trace.len() >= 2);
            assert!(
                trace.iter().all(|step| step.array.len() == input.len()),
                "{} on {:?}",
                algorithm,
                input
            );
        }
    }
}

#[test]
fn test_highlighted_indices_are_in_bounds() {
    for algorithm in Algorithm::ALL {
        for input in sample_inputs() {
            let trace = trace_for(algorithm, &input);
            for step in &trace {
                let indices = step
                    .comparison
                    .iter()
                    .chain(&step.swap)
                    .chain(&step.sorted);
                assert!(indices.into_iter().all(|&i| i < input.len()), "{}", algorithm);
                assert!(step.comparison.len() <= 2);
                assert!(step.swap.len() <= 2);
            }
        }
    }
}

#[test]
fn test_sorted_set_never_shrinks() {
    for algorithm in Algorithm::ALL {
        for input in sample_inputs() {
            let trace = trace_for(algorithm, &input);
            for pair in trace.steps().windows(2) {
                let (before, after) = (&pair[0], &pair[1]);
                assert!(
                    before.sorted.iter().all(|i| after.sorted.contains(i)),
                    "{} on {:?}: {:?} -> {:?}",
                    algorithm,
                    input,
                    before.sorted,
                    after.sorted
                );
            }
        }
    }
}

#[test]
fn test_array_only_changes_at_recorded_mutations() {
    for algorithm in Algorithm::ALL {
        for input in sample_inputs() {
            let trace = trace_for(algorithm, &input);
            for pair in trace.steps().windows(2) {
                let (before, after) = (&pair[0], &pair[1]);
                let changed: Vec<usize> = (0..input.len())
                    .filter(|&i| before.array[i] != after.array[i])
                    .collect();
                assert!(
                    changed.iter().all(|i| after.swap.contains(i)),
                    "{} on {:?}: positions {:?} changed outside swap set {:?}",
                    algorithm,
                    input,
                    changed,
                    after.swap
                );
            }
        }
    }
}

#[test]
fn test_presorted_input_stays_sorted() {
    let input = vec![1, 2, 2, 5, 9, 12, 40];
    for algorithm in Algorithm::ALL.into_iter().filter(|a| a.is_comparison_based()) {
        let trace = trace_for(algorithm, &input);
        assert_eq!(trace.last().map(|s| s.array.clone()), Some(input.clone()));
    }
}

#[test]
fn test_bucket_sorts_preserve_duplicates() {
    let input = vec![4, 1, 4, 0, 1, 4, 13, 13, 0];
    for algorithm in [Algorithm::Counting, Algorithm::Radix] {
        let trace = trace_for(algorithm, &input);
        let last = trace.last().expect("final step");
        assert_eq!(last.array, sorted_copy(&input), "{}", algorithm);
    }
}

#[test]
fn test_steps_are_independent_of_caller_buffers() {
    for algorithm in Algorithm::ALL {
        let mut input = vec![4, 2, 9, 1, 3];
        let trace = trace_for(algorithm, &input);
        let captured = trace.clone();

        input.iter_mut().for_each(|v| *v = 0);
        input.push(5);

        assert_eq!(trace, captured);
        assert_eq!(trace[0].array, vec![4, 2, 9, 1, 3]);
    }
}

#[test]
fn test_bubble_sort_scenario() {
    let trace = trace_for(Algorithm::Bubble, &[5, 3, 8, 1]);
    let last = trace.last().expect("final step");

    assert_eq!(last.array, vec![1, 3, 5, 8]);
    assert_eq!(last.sorted, vec![0, 1, 2, 3]);

    let first_comparison = trace
        .iter()
        .find(|step| !step.comparison.is_empty())
        .expect("at least one comparison");
    assert_eq!(first_comparison.comparison, vec![0, 1]);
}

#[test]
fn test_empty_and_single_inputs_have_two_steps() {
    for algorithm in Algorithm::ALL {
        let trace = trace_for(algorithm, &[]);
        assert_eq!(trace.len(), 2, "{}", algorithm);
        assert!(trace[0].array.is_empty());
        assert!(trace[1].array.is_empty());

        let trace = trace_for(algorithm, &[42]);
        assert_eq!(trace.len(), 2, "{}", algorithm);
        assert_eq!(trace[1].array, vec![42]);
        assert_eq!(trace[1].sorted, vec![0]);
        assert_eq!(trace.comparison_count(), 0);
    }
}

#[test]
fn test_selection_sort_on_equal_values_never_swaps() {
    let trace = trace_for(Algorithm::Selection, &[2, 2, 2]);

    assert!(trace.iter().all(|step| step.swap.is_empty()));
    assert_eq!(trace.last().map(|s| s.sorted.clone()), Some(vec![0, 1, 2]));
}

#[test]
fn test_radix_sort_scenario() {
    let trace = trace_for(Algorithm::Radix, &[9, 1, 8, 2, 7]);
    assert_eq!(trace.last().map(|s| s.array.clone()), Some(vec![1, 2, 7, 8, 9]));
}

#[test]
fn test_radix_ones_pass_is_stable_by_last_digit() {
    let input = [170, 45, 75, 90, 802, 24, 2, 66];
    let trace = trace_for(Algorithm::Radix, &input);

    // initial step, n tally steps, then n copy-back writes for the ones digit
    let after_ones = &trace[2 * input.len()];
    assert_eq!(after_ones.swap, vec![input.len() - 1]);
    assert_eq!(after_ones.array, vec![170, 90, 802, 2, 24, 45, 75, 66]);
    assert!(after_ones.sorted.is_empty());
}

#[test]
fn test_counting_sort_marks_written_prefix() {
    let trace = trace_for(Algorithm::Counting, &[3, 0, 2, 0]);
    let writes: Vec<_> = trace.iter().filter(|s| !s.swap.is_empty()).collect();

    assert_eq!(writes.len(), 4);
    for (k, step) in writes.iter().enumerate() {
        assert_eq!(step.swap, vec![k]);
        assert_eq!(step.sorted, (0..k).collect::<Vec<_>>());
    }
}
