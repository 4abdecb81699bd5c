/// Defines the directory where the chart files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/pm4post/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/pm4post/test";

/// Defines the default stem of the chart file names
pub const DEFAULT_FN_STEM: &str = "pm4silt";

/// Defines the relative padding added to automatic axis bounds
pub const AXIS_PADDING: f64 = 0.1;

/// Defines the default number of points used to sweep the mean stress of a surface curve
pub const DEFAULT_N_SURFACE_POINT: usize = 2001;

/// Defines the minimum mean stress of the critical-state line in the e-log(p) chart
pub const CSL_P_MIN: f64 = 1.0;

/// Defines the maximum mean stress of the critical-state line in the e-log(p) chart
pub const CSL_P_MAX: f64 = 100_000.0;

/// Defines the offset between the current stress ratio and the yield-surface line (PM4Silt's m)
pub const YIELD_SURFACE_M: f64 = 0.01;
