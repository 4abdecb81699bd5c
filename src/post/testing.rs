use super::{MaterialParams, ResultRow, ResultTable};
use crate::base::{ResultField, N_RESULT_FIELD};
use russell_lab::math::PI;

/// Returns a set of PM4Silt constants with the given surface parameters
#[allow(dead_code)]
pub(crate) fn sample_material_params(phi_cv: f64, nb_wet: f64, nb_dry: f64, nd: f64) -> MaterialParams {
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
        phi_cv,
        nb_wet,
        nb_dry,
        nd,
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

/// Generates a table resembling a cyclic direct simple shear test
///
/// The first two rows belong to a consolidation phase; the remaining rows belong to a cyclic
/// phase with 20 rows per cycle and a vertical stress degrading from 100 to 50.
#[allow(dead_code)]
pub(crate) fn generate_cyclic_table(nrow: usize) -> ResultTable {
    let (gamma_cs, lambda) = (1.1, 0.06);
    let rows = (0..nrow)
        .map(|i| {
            let phase = if i < 2 { 0 } else { 1 };
            let t = if i < 2 { 0.0 } else { (i - 2) as f64 };
            let sy = 100.0 - 50.0 * t / (nrow as f64);
            let sx = 0.5 * sy;
            let sxy = 20.0 * f64::sin(2.0 * PI * t / 20.0);
            let p = (sx + sy) / 2.0;
            let e = 0.8 - 0.0005 * t;
            let mut values = [0.0; N_RESULT_FIELD];
            let mut set = |field: ResultField, value: f64| values[field.index()] = value;
            set(ResultField::Sx, sx);
            set(ResultField::Sy, sy);
            set(ResultField::Sz, sx);
            set(ResultField::Sxy, sxy);
            set(ResultField::P, (sx + sy + sx) / 3.0);
            set(ResultField::Gamxy, 0.0001 * (1.0 + t) * f64::sin(2.0 * PI * t / 20.0));
            set(ResultField::Pcs, 100.0);
            set(ResultField::M, 1.0);
            set(ResultField::MCurrent, 1.0);
            set(ResultField::Gamma, gamma_cs);
            set(ResultField::E, e);
            set(ResultField::Xi, e - (gamma_cs - lambda * f64::ln(p)));
            set(ResultField::Ru, 1.0 - sy / 100.0);
            set(ResultField::RuExtreme, 1.0 - sy / 100.0);
            set(ResultField::AlphaXx, 0.01 * f64::cos(2.0 * PI * t / 20.0));
            set(ResultField::AlphaYy, -0.01 * f64::cos(2.0 * PI * t / 20.0));
            set(ResultField::AlphaXy, 0.1 * f64::sin(2.0 * PI * t / 20.0));
            ResultRow { phase, step: i, values }
        })
        .collect();
    ResultTable::from_rows(rows).unwrap()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
