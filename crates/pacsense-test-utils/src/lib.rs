//! Test utilities for pacsense development.
//!
//! Provides a [`GridBuilder`](fixtures::GridBuilder) for laying out
//! rendered grids cell by cell, the colour palette the tests share, and
//! a [`CaptureWriter`](capture::CaptureWriter) for asserting on log
//! output.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod capture;
pub mod fixtures;

pub use capture::CaptureWriter;
pub use fixtures::{repeat_batch, GridBuilder};
