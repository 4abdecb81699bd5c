//! Implements the extraction of results and the calculation of derived quantities

mod axis_range;
mod ingestor;
mod invariants;
mod material_params;
mod result_table;
mod surfaces;
mod testing;
pub use crate::post::axis_range::*;
pub use crate::post::ingestor::*;
pub use crate::post::invariants::*;
pub use crate::post::material_params::*;
pub use crate::post::result_table::*;
pub use crate::post::surfaces::*;

#[allow(unused_imports)]
pub(crate) use crate::post::testing::*;
