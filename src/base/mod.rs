//! Implements the base structures for post-processing a simulation

mod config;
mod constants;
mod fields;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::fields::*;
