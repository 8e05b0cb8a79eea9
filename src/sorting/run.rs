//! Working state of a single trace generation call
//!
//! A [`SortRun`] owns the one mutable buffer an algorithm sorts, the
//! cumulative set of finalized positions, and the [`StepRecorder`] that
//! snapshots both. Nothing here is shared between calls.

use crate::snapshot::{Step, StepRecorder, Trace};

#[derive(Debug)]
pub struct SortRun {
    /// The working buffer
    pub data: Vec<i32>,
    sorted: Vec<usize>,
    recorder: StepRecorder,
}

impl SortRun {
    /// Copy `input` into a fresh working buffer and record the initial step
    pub fn new(input: &[i32]) -> Self {
        let mut recorder = StepRecorder::new();
        recorder.record(input, &[], &[], &[]);
        SortRun {
            data: input.to_vec(),
            sorted: Vec::new(),
            recorder,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inputs of fewer than two elements are already sorted
    pub fn is_trivial(&self) -> bool {
        self.data.len() < 2
    }

    /// Record the buffer with the given highlights and the cumulative sorted set
    pub fn snapshot(&mut self, comparison: &[usize], swap: &[usize]) -> &mut Step {
        self.recorder
            .record(&self.data, comparison, swap, &self.sorted)
    }

    /// Swap two positions and record the result
    pub fn swap(&mut self, comparison: &[usize], a: usize, b: usize) -> &mut Step {
        self.data.swap(a, b);
        self.snapshot(comparison, &[a, b])
    }

    /// Overwrite one position and record the result
    pub fn write(&mut self, comparison: &[usize], index: usize, value: i32) -> &mut Step {
        self.data[index] = value;
        self.snapshot(comparison, &[index])
    }

    /// Mark a position as holding its final value. Marks are never removed.
    pub fn mark_sorted(&mut self, index: usize) {
        if !self.sorted.contains(&index) {
            self.sorted.push(index);
        }
    }

    /// Record the terminal step with every position sorted and seal the trace
    pub fn finish(mut self) -> Trace {
        let all: Vec<usize> = (0..self.data.len()).collect();
        self.recorder.record(&self.data, &[], &[], &all);
        self.recorder.finish()
    }
}
