//! # Introduction
//!
//! SorTTY runs a sorting algorithm over a small integer array, capturing a
//! snapshot of the array at every comparison, swap and overwrite. The
//! resulting trace is then replayed forward and backward through a terminal
//! UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Algorithm → SortRun → Steps → Trace → Player → TUI
//! ```
//!
//! 1. [`input`]: random or user-supplied integer arrays.
//! 2. [`sorting`]: ten instrumented algorithms and the dispatcher that
//!    picks one by [`sorting::Algorithm`].
//! 3. [`snapshot`]: [`snapshot::Step`] values and the immutable
//!    [`snapshot::Trace`] they form.
//! 4. [`playback`]: cursor, auto-play timing and speed over a trace.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use sortty::sorting::{generate_trace, Algorithm};
//!
//! let trace = generate_trace(Algorithm::Bubble, &[5, 3, 8, 1]).unwrap();
//! assert_eq!(trace[1].comparison, vec![0, 1]);
//! assert_eq!(trace.last().unwrap().array, vec![1, 3, 5, 8]);
//! ```
//!
//! ## Supported algorithms
//!
//! Bubble, Selection, Insertion, Quick (Lomuto), Merge, Heap, Shell,
//! Counting, Radix (LSD, base 10) and a simplified Tim sort. Counting and
//! Radix sort require non-negative input.

pub mod input;
pub mod logging;
pub mod playback;
pub mod snapshot;
pub mod sorting;
pub mod ui;
