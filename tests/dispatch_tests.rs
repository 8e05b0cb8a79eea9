// Dispatcher, identifier parsing and input-domain errors

use sortty::sorting::algorithms;
use sortty::sorting::{
    generate_trace, generate_trace_by_name, generate_trace_with, Algorithm, SortError, TraceConfig,
};

#[test]
fn test_dispatch_matches_direct_generators() {
    let input = [12, 4, 19, 4, 0, 7];

    let pairs = [
        (Algorithm::Bubble, algorithms::bubble_sort(&input)),
        (Algorithm::Selection, algorithms::selection_sort(&input)),
        (Algorithm::Insertion, algorithms::insertion_sort(&input)),
        (Algorithm::Quick, algorithms::quick_sort(&input)),
        (Algorithm::Merge, algorithms::merge_sort(&input)),
        (Algorithm::Heap, algorithms::heap_sort(&input)),
        (Algorithm::Shell, algorithms::shell_sort(&input)),
        (Algorithm::Counting, algorithms::counting_sort(&input).unwrap()),
        (Algorithm::Radix, algorithms::radix_sort(&input).unwrap()),
        (Algorithm::Tim, algorithms::tim_sort(&input)),
    ];

    for (algorithm, direct) in pairs {
        assert_eq!(generate_trace(algorithm, &input), Ok(direct), "{}", algorithm);
    }
}

#[test]
fn test_generation_is_deterministic() {
    let input = [31, 7, 7, 2, 98, 15, 40];
    for algorithm in Algorithm::ALL {
        assert_eq!(
            generate_trace(algorithm, &input),
            generate_trace(algorithm, &input)
        );
    }
}

#[test]
fn test_generate_by_name() {
    let trace = generate_trace_by_name("merge sort", &[2, 1]).expect("known algorithm");
    assert_eq!(trace.last().map(|s| s.array.clone()), Some(vec![1, 2]));

    let err = generate_trace_by_name("bogo", &[2, 1]).unwrap_err();
    assert_eq!(
        err,
        SortError::UnknownAlgorithm {
            name: "bogo".to_string()
        }
    );
    assert_eq!(err.to_string(), "Unknown algorithm 'bogo'");
}

#[test]
fn test_tim_run_size_is_configurable() {
    let input = [8, 7, 6, 5, 4, 3, 2, 1];
    let default = generate_trace(Algorithm::Tim, &input).unwrap();
    let whole = generate_trace_with(
        Algorithm::Tim,
        &input,
        &TraceConfig { tim_run_size: 8 },
    )
    .unwrap();

    // A single run covering the array is plain insertion sort
    assert_eq!(whole, algorithms::insertion_sort(&input));
    assert_ne!(default, whole);
    assert_eq!(TraceConfig::default().tim_run_size, 4);
}

#[test]
fn test_negative_values_rejected_by_bucket_sorts() {
    let input = [3, 8, -5, 1];

    for algorithm in [Algorithm::Counting, Algorithm::Radix] {
        let err = generate_trace(algorithm, &input).unwrap_err();
        assert_eq!(
            err,
            SortError::InvalidInputDomain {
                algorithm,
                index: 2,
                value: -5,
            }
        );
        assert!(err.to_string().contains("non-negative"));
    }
}

#[test]
fn test_negative_values_sort_with_comparison_algorithms() {
    let input = [3, -8, 0, -1, 12, -8];
    for algorithm in Algorithm::ALL.into_iter().filter(|a| a.is_comparison_based()) {
        let trace = generate_trace(algorithm, &input).expect("comparison sorts accept any i32");
        assert_eq!(
            trace.last().map(|s| s.array.clone()),
            Some(vec![-8, -8, -1, 0, 3, 12]),
            "{}",
            algorithm
        );
    }
}

#[test]
fn test_algorithm_metadata() {
    for algorithm in Algorithm::ALL {
        let info = algorithm.info();
        assert!(info.name.ends_with("Sort"));
        assert!(info.time_complexity.starts_with("O("));
        assert!(info.space_complexity.starts_with("O("));
        assert!(!info.pseudocode.is_empty());
    }
    assert_eq!(Algorithm::Radix.info().time_complexity, "O(nk)");
}
