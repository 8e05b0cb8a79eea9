//! Maps an algorithm identifier to its trace generator

use super::algorithm::Algorithm;
use super::algorithms;
use super::constants::TIM_SORT_RUN;
use super::errors::SortError;
use crate::snapshot::Trace;
use tracing::debug;

/// Generator settings that are not part of the algorithm identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceConfig {
    /// Run length for the simplified Tim sort
    pub tim_run_size: usize,
}

impl Default for TraceConfig {
    fn default() -> Self {
        TraceConfig {
            tim_run_size: TIM_SORT_RUN,
        }
    }
}

/// Generate the trace for `algorithm` over `input` with default settings
pub fn generate_trace(algorithm: Algorithm, input: &[i32]) -> Result<Trace, SortError> {
    generate_trace_with(algorithm, input, &TraceConfig::default())
}

/// Generate the trace for `algorithm` over `input`.
///
/// Only counting and radix sort can fail, and only on input outside their
/// value domain. `input` is never modified.
pub fn generate_trace_with(
    algorithm: Algorithm,
    input: &[i32],
    config: &TraceConfig,
) -> Result<Trace, SortError> {
    let trace = match algorithm {
        Algorithm::Bubble => algorithms::bubble_sort(input),
        Algorithm::Selection => algorithms::selection_sort(input),
        Algorithm::Insertion => algorithms::insertion_sort(input),
        Algorithm::Quick => algorithms::quick_sort(input),
        Algorithm::Merge => algorithms::merge_sort(input),
        Algorithm::Heap => algorithms::heap_sort(input),
        Algorithm::Shell => algorithms::shell_sort(input),
        Algorithm::Counting => algorithms::counting_sort(input)?,
        Algorithm::Radix => algorithms::radix_sort(input)?,
        Algorithm::Tim => algorithms::tim_sort_with_run(input, config.tim_run_size),
    };

    debug!(
        algorithm = algorithm.name(),
        input_len = input.len(),
        steps = trace.len(),
        "generated trace"
    );
    Ok(trace)
}

/// Look up an algorithm by identifier and generate its trace.
///
/// Unknown identifiers fail with [`SortError::UnknownAlgorithm`]; there is no
/// fallback algorithm.
pub fn generate_trace_by_name(name: &str, input: &[i32]) -> Result<Trace, SortError> {
    let algorithm: Algorithm = name.parse()?;
    generate_trace(algorithm, input)
}
