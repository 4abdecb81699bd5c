//! Implements utility functions for reading and writing simulation results

mod result_dump;
pub use result_dump::*;
