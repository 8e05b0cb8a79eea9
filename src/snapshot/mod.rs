// Step snapshots and trace history for sort playback

use rustc_hash::FxHashMap;
use std::ops::Index;

/// How a single bar should be drawn for a given step.
///
/// Variants are ordered by rendering priority: when an index appears in
/// several highlight sets the highest variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Highlight {
    Idle,
    Comparison,
    Swap,
    Sorted,
}

/// Immutable snapshot of the array plus the highlighted index sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub array: Vec<i32>,
    pub comparison: Vec<usize>,
    pub swap: Vec<usize>,
    pub sorted: Vec<usize>,
    pub description: Option<String>,
}

impl Step {
    /// Attach a human readable description to this step
    pub fn describe(&mut self, text: impl Into<String>) -> &mut Self {
        self.description = Some(text.into());
        self
    }

    /// Number of elements in the snapshot
    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// Check if the snapshot holds no elements
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Classify one index by the highest-priority set containing it
    pub fn highlight_of(&self, index: usize) -> Highlight {
        if self.sorted.contains(&index) {
            Highlight::Sorted
        } else if self.swap.contains(&index) {
            Highlight::Swap
        } else if self.comparison.contains(&index) {
            Highlight::Comparison
        } else {
            Highlight::Idle
        }
    }

    /// Resolve every highlighted index at once.
    ///
    /// Indices absent from the map are [`Highlight::Idle`].
    pub fn highlights(&self) -> FxHashMap<usize, Highlight> {
        let mut map = FxHashMap::default();
        let sets = [
            (&self.comparison, Highlight::Comparison),
            (&self.swap, Highlight::Swap),
            (&self.sorted, Highlight::Sorted),
        ];
        for (indices, highlight) in sets {
            for &index in indices.iter() {
                let entry = map.entry(index).or_insert(highlight);
                if highlight > *entry {
                    *entry = highlight;
                }
            }
        }
        map
    }

    /// The step's own description, or one derived from its highlight sets
    pub fn summary(&self) -> String {
        if let Some(text) = &self.description {
            return text.clone();
        }

        let value_at = |i: usize| {
            self.array
                .get(i)
                .map(|v| v.to_string())
                .unwrap_or_else(|| "?".to_string())
        };

        match (self.comparison.as_slice(), self.swap.as_slice()) {
            (_, [a, b]) => format!(
                "Swap positions {} and {} (now {} and {})",
                a,
                b,
                value_at(*a),
                value_at(*b)
            ),
            (_, [a]) => format!("Write {} to position {}", value_at(*a), a),
            ([a, b], []) => format!(
                "Compare {} at {} with {} at {}",
                value_at(*a),
                a,
                value_at(*b),
                b
            ),
            ([a], []) => format!("Inspect {} at position {}", value_at(*a), a),
            _ if !self.array.is_empty() && self.sorted.len() == self.array.len() => {
                "Array is sorted".to_string()
            }
            _ => String::new(),
        }
    }
}

/// Ordered, immutable history of steps for one algorithm run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Get the number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps that highlight a comparison without mutating
    pub fn comparison_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| !s.comparison.is_empty() && s.swap.is_empty())
            .count()
    }

    /// Number of steps that record a swap or overwrite
    pub fn mutation_count(&self) -> usize {
        self.steps.iter().filter(|s| !s.swap.is_empty()).count()
    }
}

impl Index<usize> for Trace {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Collects steps while an algorithm runs.
///
/// Every capture copies the working array and index sets, so later mutation
/// of the caller's buffers never reaches recorded history.
#[derive(Debug, Default)]
pub struct StepRecorder {
    steps: Vec<Step>,
}

impl StepRecorder {
    pub fn new() -> Self {
        StepRecorder { steps: Vec::new() }
    }

    /// Capture a snapshot of `array` with the given highlight sets
    pub fn record(
        &mut self,
        array: &[i32],
        comparison: &[usize],
        swap: &[usize],
        sorted: &[usize],
    ) -> &mut Step {
        self.steps.push(Step {
            array: array.to_vec(),
            comparison: comparison.to_vec(),
            swap: swap.to_vec(),
            sorted: sorted.to_vec(),
            description: None,
        });
        let last = self.steps.len() - 1;
        &mut self.steps[last]
    }

    /// Get the number of recorded steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Seal the recording into an immutable trace
    pub fn finish(self) -> Trace {
        Trace { steps: self.steps }
    }
}
