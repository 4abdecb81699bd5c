//! Post-processing and diagnostic charts for cyclic PM4Silt/PM4Sand element simulations
//!
//! The workflow is:
//!
//! 1. Extract the results at a point with [post::Ingestor] (from any [post::ResultProvider])
//! 2. Load the material constants with [post::MaterialParams::load]
//! 3. Draw the charts with [chart::ChartPlotter]

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod chart;
pub mod post;
pub mod prelude;
pub mod util;
