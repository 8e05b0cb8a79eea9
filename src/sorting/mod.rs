//! Trace generation for the supported sorting algorithms
//!
//! - [`algorithm`]: the closed [`Algorithm`] set and its reference metadata
//! - [`algorithms`]: one instrumented generator per algorithm
//! - [`dispatch`]: identifier to generator mapping
//! - [`run`]: per-call working buffer and step recording
//! - [`errors`]: input contract violations
//!
//! # Generation Model
//!
//! Each call owns one mutable working buffer. Algorithms mutate it in place
//! and snapshot it at every comparison, swap, overwrite and finalization, so
//! the resulting trace is a value independent of the buffer.

pub mod algorithm;
pub mod algorithms;
pub mod constants;
pub mod dispatch;
pub mod errors;
pub mod run;

pub use algorithm::{Algorithm, AlgorithmInfo};
pub use dispatch::{generate_trace, generate_trace_by_name, generate_trace_with, TraceConfig};
pub use errors::SortError;
