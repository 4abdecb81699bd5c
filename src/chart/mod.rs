//! Implements the diagnostic charts

mod chart_kind;
mod chart_plotter;
pub use crate::chart::chart_kind::*;
pub use crate::chart::chart_plotter::*;
