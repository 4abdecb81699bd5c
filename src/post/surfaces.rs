use super::{MaterialParams, ResultRow, ResultTable};
use crate::base::ResultField;
use crate::StrError;
use russell_lab::Vector;

/// Holds the history variables that position the bounding and dilatancy surfaces
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceState {
    /// Current critical-state (consolidation) pressure
    pub pcs: f64,

    /// Current mobilized stress ratio M
    pub mm: f64,
}

impl SurfaceState {
    /// Allocates a new instance
    pub fn new(pcs: f64, mm: f64) -> Result<Self, StrError> {
        if pcs <= 0.0 {
            return Err("pcs must be > 0");
        }
        if mm <= 0.0 {
            return Err("M must be > 0");
        }
        Ok(SurfaceState { pcs, mm })
    }

    /// Allocates a new instance with the values of a result row
    pub fn from_row(row: &ResultRow) -> Result<Self, StrError> {
        SurfaceState::new(row.get(ResultField::Pcs), row.get(ResultField::M))
    }
}

/// Calculates the critical state stress ratio M = 2 sin(φcv)
pub fn calc_mm(params: &MaterialParams) -> Result<f64, StrError> {
    if params.phi_cv <= 0.0 || params.phi_cv >= 90.0 {
        return Err("phicv must be in (0, 90) degrees");
    }
    Ok(2.0 * f64::sin(params.phi_cv.to_radians()))
}

/// Calculates the state parameter ξγ = ln(pb) − ln(pcs)
fn calc_xi(pb: f64, state: &SurfaceState) -> Result<f64, StrError> {
    if pb <= 0.0 {
        return Err("pb must be > 0");
    }
    Ok(f64::ln(pb) - f64::ln(state.pcs))
}

/// Calculates the bounding surface stress ratio Mb at the trial mean stress pb
///
/// Wet side (pb ≥ pcs):
///
/// ```text
/// Mb = M exp(−nbwet ξγ)
/// ```
///
/// Dry side (pb < pcs):
///
/// ```text
/// CMB = 1 / ((2 sin(60°) / M)^(1/nbdry) − 1)
/// Mb  = M ((1 + CMB) / (pb/pcs + CMB))^nbdry
/// ```
///
/// Both branches give Mb = M at pb = pcs.
pub fn calc_mm_b(pb: f64, state: &SurfaceState, params: &MaterialParams) -> Result<f64, StrError> {
    let xi = calc_xi(pb, state)?;
    if pb >= state.pcs {
        return Ok(state.mm * f64::exp(-params.nb_wet * xi));
    }
    if params.nb_dry <= 0.0 {
        return Err("nbdry must be > 0");
    }
    let base = f64::powf(2.0 * f64::sin(60.0_f64.to_radians()) / state.mm, 1.0 / params.nb_dry);
    if base <= 1.0 {
        return Err("M must be smaller than 2 sin(60°) on the dry side");
    }
    let cmb = 1.0 / (base - 1.0);
    Ok(state.mm * f64::powf((1.0 + cmb) / (pb / state.pcs + cmb), params.nb_dry))
}

/// Calculates the dilatancy surface stress ratio Md = M exp(nd ξγ) at the trial mean stress pb
pub fn calc_mm_d(pb: f64, state: &SurfaceState, params: &MaterialParams) -> Result<f64, StrError> {
    let xi = calc_xi(pb, state)?;
    Ok(state.mm * f64::exp(params.nd * xi))
}

/// Calculates Mb for each trial mean stress
pub fn calc_mm_b_curve(pbs: &[f64], state: &SurfaceState, params: &MaterialParams) -> Result<Vec<f64>, StrError> {
    pbs.iter().map(|pb| calc_mm_b(*pb, state, params)).collect()
}

/// Calculates Md for each trial mean stress
pub fn calc_mm_d_curve(pbs: &[f64], state: &SurfaceState, params: &MaterialParams) -> Result<Vec<f64>, StrError> {
    pbs.iter().map(|pb| calc_mm_d(*pb, state, params)).collect()
}

/// Generates `n` equally spaced mean stresses in (0, p_max]
///
/// The origin is excluded because the surfaces are undefined at pb = 0.
pub fn surface_sweep(p_max: f64, n: usize) -> Result<Vec<f64>, StrError> {
    if p_max <= 0.0 {
        return Err("p_max must be > 0");
    }
    if n < 1 {
        return Err("the number of points must be ≥ 1");
    }
    let all = Vector::linspace(0.0, p_max, n + 1)?;
    Ok(all.as_data()[1..].to_vec())
}

/// Calculates the friction angle (degrees) corresponding to a stress ratio
///
/// ```text
/// φ = asin(3 M / (6 + M))
/// ```
pub fn friction_angle(mm: f64) -> Result<f64, StrError> {
    if !mm.is_finite() || mm < 0.0 || 3.0 * mm / (6.0 + mm) > 1.0 {
        return Err("M must be in [0, 3]");
    }
    Ok(f64::asin(3.0 * mm / (6.0 + mm)).to_degrees())
}

/// Calculates tan(φ) for the friction angle corresponding to a stress ratio
///
/// M = 3 is rejected because φ = 90° has no finite tangent.
pub fn tan_friction_angle(mm: f64) -> Result<f64, StrError> {
    let phi = friction_angle(mm)?;
    if 3.0 * mm / (6.0 + mm) >= 1.0 {
        return Err("M must be in [0, 3) for a finite tan(φ)");
    }
    Ok(f64::tan(phi.to_radians()))
}

/// Calculates the slope of a surface line in the (σ'y, τxy) plane
///
/// The sign of the shear stress increment orients the line; a zero increment counts as positive.
pub fn stress_space_slope(mm: f64, dtau: f64) -> Result<f64, StrError> {
    let slope = tan_friction_angle(mm)?;
    Ok(if dtau < 0.0 { -slope } else { slope })
}

/// Returns the sign (±1) of the shear stress increment arriving at a row
///
/// The first row uses the sign of its own shear stress. This orientation is only a heuristic
/// for mirroring the surfaces onto the negative shear-stress half of the chart.
pub fn shear_increment_sign(table: &ResultTable, index: usize) -> Result<f64, StrError> {
    let current = table.row(index)?.get(ResultField::Sxy);
    let dtau = if index == 0 {
        current
    } else {
        current - table.row(index - 1)?.get(ResultField::Sxy)
    };
    Ok(if dtau < 0.0 { -1.0 } else { 1.0 })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
