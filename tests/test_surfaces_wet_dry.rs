use pm4post::base::N_RESULT_FIELD;
use pm4post::post::{
    calc_mm, calc_mm_b_curve, calc_mm_d_curve, friction_angle, shear_increment_sign, stress_space_slope, surface_sweep,
    ResultRow, SurfaceState,
};
use pm4post::prelude::*;
use russell_lab::approx_eq;

// Bounding and dilatancy surfaces swept across the critical state
//
// TEST GOAL
//
// Verifies that the sweep of trial mean stresses crosses from the dry side (pb < pcs)
// to the wet side (pb ≥ pcs) without a jump, that Mb decreases and Md increases with pb,
// and that the surfaces are mirrored onto the negative shear stress when unloading.
//
// CONFIGURATION AND PARAMETERS
//
// * φcv = 33° thus M = 2 sin(33°)
// * nbwet = 0.8, nbdry = 0.5, nd = 0.3
// * pcs = 80 kPa

const PCS: f64 = 80.0;

fn params() -> MaterialParams {
    MaterialParams {
        su_ratio: 0.25,
        su: 0.0,
        g0: 500.0,
        hp0: 0.5,
        patm: 101.3,
        ng: 0.75,
        h0: 0.5,
        e0: 0.9,
        lambda: 0.06,
        phi_cv: 33.0,
        nb_wet: 0.8,
        nb_dry: 0.5,
        nd: 0.3,
        ad0: 0.8,
        ru_max: 0.96,
        z_max: 10.0,
        cz: 100.0,
        c_eps: 0.0,
        cgd: 3.0,
        ckaf: 4.0,
        nu: 0.3,
        cg_consol: 2.0,
        fs_u: 1.0,
        psi_r: 0.0,
        d_r: 0.5,
        phi_c: 0.0,
        cc: 0.0,
    }
}

fn row(step: usize, sxy: f64) -> ResultRow {
    let mut values = [0.0; N_RESULT_FIELD];
    values[ResultField::Sx.index()] = 40.0;
    values[ResultField::Sy.index()] = 80.0;
    values[ResultField::Sxy.index()] = sxy;
    values[ResultField::Pcs.index()] = PCS;
    values[ResultField::M.index()] = 1.0;
    ResultRow { phase: 0, step, values }
}

#[test]
fn test_surfaces_wet_dry() -> Result<(), StrError> {
    let params = params();
    let mm = calc_mm(&params)?;
    approx_eq(mm, 2.0 * f64::sin(33.0_f64.to_radians()), 1e-15);
    let state = SurfaceState::new(PCS, mm)?;

    // sweep (the last point is 2 pcs)
    let pbs = surface_sweep(2.0 * PCS, 400)?;
    assert_eq!(pbs.len(), 400);
    assert!(pbs[0] > 0.0);
    approx_eq(pbs[399], 2.0 * PCS, 1e-13);
    let mm_b = calc_mm_b_curve(&pbs, &state, &params)?;
    let mm_d = calc_mm_d_curve(&pbs, &state, &params)?;

    // monotonic
    for i in 1..pbs.len() {
        assert!(mm_b[i] < mm_b[i - 1]);
        assert!(mm_d[i] > mm_d[i - 1]);
    }

    // both sides of pcs (the 200th point is pcs)
    approx_eq(pbs[199], PCS, 1e-13);
    approx_eq(mm_b[199], mm, 1e-13);
    approx_eq(mm_d[199], mm, 1e-13);
    assert!(mm_b[198] > mm && mm_b[200] < mm);
    assert!(mm_d[198] < mm && mm_d[200] > mm);
    approx_eq(mm_b[198], mm_b[199], 1e-2);
    approx_eq(mm_b[200], mm_b[199], 1e-2);

    // wet side closed form
    approx_eq(mm_b[399], mm * f64::exp(-0.8 * f64::ln(2.0)), 1e-14);
    approx_eq(mm_d[399], mm * f64::exp(0.3 * f64::ln(2.0)), 1e-14);

    // the dry side stays below the limiting ratio 2 sin(60°)
    assert!(mm_b[0] < 2.0 * f64::sin(60.0_f64.to_radians()));
    Ok(())
}

#[test]
fn test_surfaces_mirrored_by_shear_increment() -> Result<(), StrError> {
    let table = ResultTable::from_rows(vec![row(0, 5.0), row(1, 10.0), row(2, 4.0), row(3, 4.0)])?;
    let state = SurfaceState::from_row(table.row(0)?)?;
    assert_eq!(state.pcs, PCS);
    let expected = [1.0, 1.0, -1.0, 1.0];
    for (i, sign) in expected.iter().enumerate() {
        assert_eq!(shear_increment_sign(&table, i)?, *sign);
    }
    let up = stress_space_slope(1.0, 1.0)?;
    let down = stress_space_slope(1.0, -1.0)?;
    assert_eq!(up, -down);
    approx_eq(up, f64::tan(friction_angle(1.0)?.to_radians()), 1e-15);
    Ok(())
}
