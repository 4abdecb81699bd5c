use crate::StrError;

/// Holds the in-plane stress invariants and stress ratios of one row
///
/// All quantities follow the compression-positive convention of the result table:
///
/// ```text
/// p* = (σx + σy) / 2
/// q* = √2 · |σ − p*·I|   (2D deviator with components σx−p*, σy−p*, σxy)
/// r  = (σ − p*·I) / p*
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StressInvariants {
    /// Mean-like stress p*
    pub p_ast: f64,

    /// Deviatoric-like stress q*
    pub q_ast: f64,

    /// Stress ratios (r_xx, r_yy, r_xy); None if p* ≤ 0
    pub ratios: Option<(f64, f64, f64)>,
}

impl StressInvariants {
    /// Calculates the invariants from the in-plane stress components
    pub fn new(sx: f64, sy: f64, sxy: f64) -> Self {
        let p_ast = calc_p_ast(sx, sy);
        let q_ast = calc_q_ast(sx, sy, sxy);
        let ratios = calc_stress_ratios(sx, sy, sxy).ok();
        StressInvariants { p_ast, q_ast, ratios }
    }

    /// Returns the stress ratio q*/p*
    pub fn eta(&self) -> Result<f64, StrError> {
        if self.p_ast <= 0.0 {
            return Err("stress ratio is undefined for p* ≤ 0");
        }
        Ok(self.q_ast / self.p_ast)
    }
}

/// Calculates the mean-like stress p* = (σx + σy) / 2
#[inline]
pub fn calc_p_ast(sx: f64, sy: f64) -> f64 {
    (sx + sy) / 2.0
}

/// Calculates the deviatoric-like stress q* = √2 · |σ − p*·I|
pub fn calc_q_ast(sx: f64, sy: f64, sxy: f64) -> f64 {
    let p = calc_p_ast(sx, sy);
    let (dx, dy) = (sx - p, sy - p);
    let norm = f64::sqrt(dx * dx + dy * dy + 2.0 * sxy * sxy);
    f64::sqrt(2.0) * norm
}

/// Calculates the normalized stress ratios (r_xx, r_yy, r_xy)
///
/// Returns an error if p* ≤ 0.
pub fn calc_stress_ratios(sx: f64, sy: f64, sxy: f64) -> Result<(f64, f64, f64), StrError> {
    let p = calc_p_ast(sx, sy);
    if p <= 0.0 {
        return Err("stress ratios are undefined for p* ≤ 0");
    }
    Ok(((sx - p) / p, (sy - p) / p, sxy / p))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
