//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns. Currently only request
//! tracing.

pub mod trace;

pub use trace::Trace;
