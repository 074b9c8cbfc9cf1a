//! Command implementations.
//!
//! Each action is implemented in its own module for clean separation.

pub(crate) mod completions;
pub(crate) mod demo;
pub(crate) mod list;
pub(crate) mod sync;
