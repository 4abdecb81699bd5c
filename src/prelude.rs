//! Makes available common structures needed to post-process a simulation
//!
//! You may write `use pm4post::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Config, MaterialField, ResultField, ResultSource, DEFAULT_OUT_DIR, DEFAULT_TEST_DIR};
pub use crate::chart::{ChartKind, ChartPlotter};
pub use crate::post::{AxisLimits, Bound, Column, Ingestor, Invariant, MaterialParams, Phase, ResultTable};
pub use crate::post::{MaterialRegistry, ResultProvider};
pub use crate::util::ResultDump;
pub use crate::StrError;
