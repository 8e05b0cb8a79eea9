//! Instrumented sorting algorithms
//!
//! Each generator copies its input into a private working buffer, sorts it,
//! and returns the recorded [`Trace`](crate::snapshot::Trace). All of them:
//!
//! - record the untouched input as the first step
//! - record a comparison step *before* acting on the comparison
//! - record a mutation step *after* each swap or overwrite
//! - finish with every position marked sorted
//!
//! Inputs with fewer than two elements produce exactly the initial and final
//! steps. Counting and radix sort bucket by value and reject negative input.

mod bubble;
mod counting;
mod heap;
mod insertion;
mod merge;
mod quick;
mod radix;
mod selection;
mod shell;
mod tim;

pub use bubble::bubble_sort;
pub use counting::counting_sort;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use radix::radix_sort;
pub use selection::selection_sort;
pub use shell::shell_sort;
pub use tim::{tim_sort, tim_sort_with_run};
