use super::{Column, ResultTable};
use crate::base::AXIS_PADDING;
use crate::StrError;

/// Defines a requested axis bound
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bound {
    /// Calculated from the data with 10% padding
    Auto,

    /// Given explicitly
    Value(f64),
}

impl Default for Bound {
    fn default() -> Self {
        Bound::Auto
    }
}

/// Holds the requested bounds of the x and y axes of a chart
///
/// Bounds are given in the units of the result table; e.g., γxy is a fraction even though
/// the shear strain chart displays it in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisLimits {
    pub xmin: Bound,
    pub xmax: Bound,
    pub ymin: Bound,
    pub ymax: Bound,
}

impl AxisLimits {
    /// Allocates a new instance with automatic bounds
    pub fn new() -> Self {
        AxisLimits::default()
    }

    /// Sets explicit bounds of the x-axis
    pub fn set_x(&mut self, xmin: f64, xmax: f64) -> &mut Self {
        self.xmin = Bound::Value(xmin);
        self.xmax = Bound::Value(xmax);
        self
    }

    /// Sets explicit bounds of the y-axis
    pub fn set_y(&mut self, ymin: f64, ymax: f64) -> &mut Self {
        self.ymin = Bound::Value(ymin);
        self.ymax = Bound::Value(ymax);
        self
    }
}

/// Calculates the (min, max) range of one or more series
///
/// Each series is padded independently: an automatic lower bound is `min − 0.1·span` and an
/// automatic upper bound is `max + 0.1·span`, with `span = max − min`. The merged range takes
/// the smallest lower bound and the largest upper bound. Non-finite values are ignored.
pub fn calc_range(series: &[&[f64]], lower: Bound, upper: Bound) -> Result<(f64, f64), StrError> {
    if series.is_empty() {
        return Err("at least one series is required");
    }
    let mut merged_min = f64::INFINITY;
    let mut merged_max = f64::NEG_INFINITY;
    for values in series {
        let (min, max) = values
            .iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(a, b), v| (f64::min(a, *v), f64::max(b, *v)));
        let needs_data = lower == Bound::Auto || upper == Bound::Auto;
        if needs_data && min > max {
            return Err("cannot calculate automatic bounds of a series without finite values");
        }
        let span = max - min;
        let lo = match lower {
            Bound::Auto => min - AXIS_PADDING * span,
            Bound::Value(v) => v,
        };
        let hi = match upper {
            Bound::Auto => max + AXIS_PADDING * span,
            Bound::Value(v) => v,
        };
        merged_min = f64::min(merged_min, lo);
        merged_max = f64::max(merged_max, hi);
    }
    Ok((merged_min, merged_max))
}

/// Calculates the (min, max) range of one or more columns of the result table
pub fn calc_axis_range(
    table: &ResultTable,
    columns: &[Column],
    lower: Bound,
    upper: Bound,
) -> Result<(f64, f64), StrError> {
    let data = columns
        .iter()
        .map(|c| table.column(*c))
        .collect::<Result<Vec<_>, _>>()?;
    let series: Vec<&[f64]> = data.iter().map(|v| v.as_slice()).collect();
    calc_range(&series, lower, upper)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
