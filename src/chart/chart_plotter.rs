use super::ChartKind;
use crate::base::{ResultField, AXIS_PADDING, CSL_P_MAX, CSL_P_MIN, DEFAULT_N_SURFACE_POINT, YIELD_SURFACE_M};
use crate::post::{
    calc_axis_range, calc_mm, calc_mm_b, calc_mm_b_curve, calc_mm_d, calc_mm_d_curve, shear_increment_sign,
    stress_space_slope, surface_sweep, AxisLimits, Bound, Column, Invariant, MaterialParams, ResultTable, SurfaceState,
};
use crate::StrError;
use plotpy::{Curve, Legend, Plot};
use std::ffi::OsStr;

const COLOR_PATH: &str = "black";
const COLOR_REFERENCE: &str = "black";
const COLOR_M: &str = "red";
const COLOR_MB: &str = "blue";
const COLOR_MD: &str = "forestgreen";
const COLOR_YIELD: &str = "gray";
const COLOR_DENSE: &str = "limegreen";
const COLOR_LOOSE: &str = "firebrick";

/// Draws the diagnostic charts of a result table
///
/// Each chart draws the rows `0..cutoff` and highlights the row `cutoff − 1` as the current state.
pub struct ChartPlotter<'a> {
    /// Number of points used to sweep the Mb and Md curves
    pub n_surface_point: usize,

    /// Uses a logarithmic x-axis in the void ratio chart
    pub log_scale_void_ratio: bool,

    table: &'a ResultTable,
    params: &'a MaterialParams,
}

impl<'a> ChartPlotter<'a> {
    /// Allocates a new instance
    pub fn new(table: &'a ResultTable, params: &'a MaterialParams) -> Self {
        ChartPlotter {
            n_surface_point: DEFAULT_N_SURFACE_POINT,
            log_scale_void_ratio: true,
            table,
            params,
        }
    }

    /// Draws a chart on the current axes of a plot
    ///
    /// # Input
    ///
    /// * `plot` -- the plot (or subplot) to draw on
    /// * `kind` -- the chart
    /// * `cutoff` -- the number of rows to draw (1 ≤ cutoff ≤ nrow)
    /// * `limits` -- the requested axis bounds
    pub fn draw(&self, plot: &mut Plot, kind: ChartKind, cutoff: usize, limits: &AxisLimits) -> Result<(), StrError> {
        self.table.check_cutoff(cutoff)?;
        log::debug!("drawing {:?} up to row {}", kind, cutoff);
        match kind {
            ChartKind::ShearStressStrain => self.draw_shear_stress_strain(plot, cutoff, limits)?,
            ChartKind::ShearStressVerticalStress => self.draw_shear_stress_vertical_stress(plot, cutoff, limits)?,
            ChartKind::BackStress => self.draw_back_stress(plot, cutoff, limits)?,
            ChartKind::StressPathSurfaces => self.draw_stress_path_surfaces(plot, cutoff, limits)?,
            ChartKind::VoidRatioMeanStress => self.draw_void_ratio_mean_stress(plot, cutoff, limits)?,
            ChartKind::StressSpaceSurfaces => self.draw_stress_space_surfaces(plot, cutoff, limits)?,
            ChartKind::PorePressureRatio => self.draw_pore_pressure_ratio(plot, cutoff, limits)?,
        }
        let (x_label, y_label) = kind.labels();
        plot.grid_and_labels(x_label, y_label);
        Ok(())
    }

    /// Saves a single chart
    ///
    /// # Input
    ///
    /// * `kind` -- the chart
    /// * `cutoff` -- the number of rows to draw
    /// * `limits` -- the requested axis bounds
    /// * `filepath` -- may be a String, &str, or Path
    pub fn save<P>(&self, kind: ChartKind, cutoff: usize, limits: &AxisLimits, filepath: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let mut plot = Plot::new();
        self.draw(&mut plot, kind, cutoff, limits)?;
        plot.save(filepath)
    }

    /// Draws all charts in a 4x2 grid of subplots
    ///
    /// | row\col |         0          |          1          |
    /// |:-------:|:------------------:|:-------------------:|
    /// |    0    |     (γxy, τxy)     |      (σ'y, τxy)     |
    /// |    1    |  (p*, q*) surfaces | (σ'y, τxy) surfaces |
    /// |    2    |   (p*, e) + CSL    |      (N, α)         |
    /// |    3    |      (N, ru)       |                     |
    pub fn draw_mosaic(&self, plot: &mut Plot, cutoff: usize) -> Result<(), StrError> {
        let limits = AxisLimits::new();
        for (i, kind) in ChartKind::ALL.iter().enumerate() {
            plot.set_subplot(4, 2, i + 1);
            self.draw(plot, *kind, cutoff, &limits)?;
        }
        plot.set_figure_size_points(700.0, 1100.0);
        Ok(())
    }

    /// Saves all charts in a 4x2 grid of subplots
    ///
    /// # Input
    ///
    /// * `cutoff` -- the number of rows to draw
    /// * `filepath` -- may be a String, &str, or Path
    pub fn save_mosaic<P>(&self, cutoff: usize, filepath: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let mut plot = Plot::new();
        self.draw_mosaic(&mut plot, cutoff)?;
        plot.save(filepath)
    }

    // --------------------------------------------------------------------------------------------------------------

    /// Returns the values of a column (up to cutoff) and its resolved range
    fn series(
        &self,
        column: Column,
        cutoff: usize,
        lower: Bound,
        upper: Bound,
    ) -> Result<(Vec<f64>, f64, f64), StrError> {
        let mut values = self.table.column(column)?;
        let (min, max) = calc_axis_range(self.table, &[column], lower, upper)?;
        values.truncate(cutoff);
        Ok((values, min, max))
    }

    /// Returns the range of the γxy axis in percent
    ///
    /// The bounds (explicit or automatic) are resolved as fractions, then converted to percent.
    fn shear_strain_range(&self, limits: &AxisLimits) -> Result<(f64, f64), StrError> {
        let column = [Column::Field(ResultField::Gamxy)];
        let (min, max) = calc_axis_range(self.table, &column, limits.xmin, limits.xmax)?;
        Ok((100.0 * min, 100.0 * max))
    }

    fn draw_shear_stress_strain(&self, plot: &mut Plot, cutoff: usize, limits: &AxisLimits) -> Result<(), StrError> {
        let gamma: Vec<_> = self.table.field(ResultField::Gamxy).iter().map(|g| 100.0 * g).collect();
        let (xmin, xmax) = self.shear_strain_range(limits)?;
        let (tau, ymin, ymax) = self.series(Column::Field(ResultField::Sxy), cutoff, limits.ymin, limits.ymax)?;
        plot.add(&reference_line(xmin, 0.0, xmax, 0.0));
        plot.add(&reference_line(0.0, ymin, 0.0, ymax));
        add_path(plot, &gamma[..cutoff], &tau, COLOR_PATH, None);
        plot.set_range(xmin, xmax, ymin, ymax);
        Ok(())
    }

    fn draw_shear_stress_vertical_stress(
        &self,
        plot: &mut Plot,
        cutoff: usize,
        limits: &AxisLimits,
    ) -> Result<(), StrError> {
        let (sy, xmin, xmax) = self.series(Column::Field(ResultField::Sy), cutoff, limits.xmin, limits.xmax)?;
        let (tau, ymin, ymax) = self.series(Column::Field(ResultField::Sxy), cutoff, limits.ymin, limits.ymax)?;
        plot.add(&reference_line(xmin, 0.0, xmax, 0.0));
        add_path(plot, &sy, &tau, COLOR_PATH, None);
        plot.set_range(xmin, xmax, ymin, ymax);
        Ok(())
    }

    fn draw_back_stress(&self, plot: &mut Plot, cutoff: usize, limits: &AxisLimits) -> Result<(), StrError> {
        let components = [
            (ResultField::AlphaXx, "blue", "$\\alpha_{xx}$"),
            (ResultField::AlphaYy, "red", "$\\alpha_{yy}$"),
            (ResultField::AlphaXy, COLOR_MD, "$\\alpha_{xy}$"),
        ];
        let (n, xmin, xmax) = self.series(Column::Index, cutoff, limits.xmin, limits.xmax)?;
        let columns: Vec<_> = components.iter().map(|(f, _, _)| Column::Field(*f)).collect();
        let (ymin, ymax) = calc_axis_range(self.table, &columns, limits.ymin, limits.ymax)?;
        plot.add(&reference_line(xmin, 0.0, xmax, 0.0));
        for (field, color, label) in components {
            let alpha = self.table.field(field);
            add_path(plot, &n, &alpha[..cutoff], color, Some(label));
        }
        plot.set_range(xmin, xmax, ymin, ymax);
        add_legend(plot, "upper left", 3);
        Ok(())
    }

    fn draw_stress_path_surfaces(&self, plot: &mut Plot, cutoff: usize, limits: &AxisLimits) -> Result<(), StrError> {
        let p_col = Column::Derived(Invariant::MeanStress);
        let q_col = Column::Derived(Invariant::DeviatoricStress);
        let (p, xmin, xmax) = self.series(p_col, cutoff, limits.xmin, limits.xmax)?;
        let (q, ymin, ymax) = self.series(q_col, cutoff, limits.ymin, limits.ymax)?;
        let xmin = if limits.xmin == Bound::Auto { 0.0 } else { xmin };
        let ymin = if limits.ymin == Bound::Auto { 0.0 } else { ymin };

        // critical state line
        let mm = calc_mm(self.params)?;
        let mut curve_mm = Curve::new();
        curve_mm
            .set_line_color(COLOR_M)
            .set_label("$M$")
            .draw(&vec![0.0, xmax], &vec![0.0, xmax * mm]);
        plot.add(&curve_mm);

        // bounding and dilatancy surfaces at the current state
        let index = cutoff - 1;
        let state = SurfaceState::from_row(self.table.row(index)?)?;
        let pbs = surface_sweep(xmax, self.n_surface_point)?;
        let mm_b = calc_mm_b_curve(&pbs, &state, self.params)?;
        let mm_d = calc_mm_d_curve(&pbs, &state, self.params)?;
        let qb: Vec<_> = pbs.iter().zip(&mm_b).map(|(pb, m)| pb * m).collect();
        let qd: Vec<_> = pbs.iter().zip(&mm_d).map(|(pb, m)| pb * m).collect();
        let mut curve_mm_b = Curve::new();
        let mut curve_mm_d = Curve::new();
        curve_mm_b.set_line_color(COLOR_MB).set_label("$M_{b}$").draw(&pbs, &qb);
        curve_mm_d.set_line_color(COLOR_MD).set_label("$M_{d}$").draw(&pbs, &qd);
        plot.add(&curve_mm_b).add(&curve_mm_d);

        // yield surface around the current stress ratio
        let eta = self.table.invariants(index)?.eta()?;
        let mut curve_eta = Curve::new();
        let mut curve_yield = Curve::new();
        curve_eta
            .set_line_color(COLOR_YIELD)
            .draw(&vec![0.0, xmax], &vec![0.0, xmax * eta]);
        curve_yield
            .set_line_color(COLOR_YIELD)
            .set_label("Yield surface")
            .draw(&vec![0.0, xmax], &vec![0.0, xmax * (eta - 2.0 * YIELD_SURFACE_M)]);
        plot.add(&curve_eta).add(&curve_yield);

        add_path(plot, &p, &q, COLOR_PATH, None);
        plot.set_range(xmin, xmax, ymin, ymax);
        add_legend(plot, "upper left", 1);
        Ok(())
    }

    fn draw_void_ratio_mean_stress(&self, plot: &mut Plot, cutoff: usize, limits: &AxisLimits) -> Result<(), StrError> {
        let p_col = Column::Derived(Invariant::MeanStress);
        let (p, mut xmin, xmax) = self.series(p_col, cutoff, limits.xmin, limits.xmax)?;
        let (e, ymin, ymax) = self.series(Column::Field(ResultField::E), cutoff, limits.ymin, limits.ymax)?;
        if self.log_scale_void_ratio {
            if xmin <= 0.0 {
                if limits.xmin != Bound::Auto {
                    return Err("the lower bound of a logarithmic axis must be > 0");
                }
                let all = self.table.column(p_col)?;
                let smallest = all.iter().filter(|v| **v > 0.0).fold(f64::INFINITY, |a, b| f64::min(a, *b));
                if !smallest.is_finite() {
                    return Err("a logarithmic axis requires some p* > 0");
                }
                xmin = smallest * (1.0 - AXIS_PADDING);
            }
            plot.set_log_x(true); // must be before `add`
        }

        // critical state line
        let index = cutoff - 1;
        let row = self.table.row(index)?;
        let gamma = row.get(ResultField::Gamma);
        let lambda = self.params.lambda;
        let mut curve_csl = Curve::new();
        curve_csl.set_line_color(COLOR_M).set_label("Critical state").draw(
            &vec![CSL_P_MIN, CSL_P_MAX],
            &vec![gamma - lambda * f64::ln(CSL_P_MIN), gamma - lambda * f64::ln(CSL_P_MAX)],
        );
        plot.add(&curve_csl);

        add_path(plot, &p, &e, COLOR_PATH, None);

        // distance to the critical state line
        let xi = row.get(ResultField::Xi);
        let (p_now, e_now) = (p[index], e[index]);
        let color = if xi > 0.0 { COLOR_DENSE } else { COLOR_LOOSE };
        let mut curve_xi = Curve::new();
        curve_xi
            .set_line_color(color)
            .set_label(&format!("$\\xi =$ {:.2}", xi))
            .draw(&vec![p_now, p_now], &vec![e_now, e_now - xi]);
        plot.add(&curve_xi);

        plot.set_range(xmin, xmax, ymin, ymax);
        add_legend(plot, "lower left", 1);
        Ok(())
    }

    fn draw_stress_space_surfaces(&self, plot: &mut Plot, cutoff: usize, limits: &AxisLimits) -> Result<(), StrError> {
        let (sy, xmin, xmax) = self.series(Column::Field(ResultField::Sy), cutoff, limits.xmin, limits.xmax)?;
        let (tau, ymin, ymax) = self.series(Column::Field(ResultField::Sxy), cutoff, limits.ymin, limits.ymax)?;

        // surfaces evaluated at the current mean stress and oriented by the last shear increment
        let index = cutoff - 1;
        let state = SurfaceState::from_row(self.table.row(index)?)?;
        let p_now = self.table.invariants(index)?.p_ast;
        let sign = shear_increment_sign(self.table, index)?;
        let surfaces = [
            (calc_mm(self.params)?, COLOR_M, "$M$"),
            (calc_mm_b(p_now, &state, self.params)?, COLOR_MB, "$M_{b}$"),
            (calc_mm_d(p_now, &state, self.params)?, COLOR_MD, "$M_{d}$"),
        ];
        let x_end = f64::max(xmax, 0.0);
        for (mm, color, label) in surfaces {
            let slope = stress_space_slope(mm, sign)?;
            let mut curve = Curve::new();
            curve
                .set_line_color(color)
                .set_label(label)
                .draw(&vec![0.0, x_end], &vec![0.0, slope * x_end]);
            plot.add(&curve);
        }

        plot.add(&reference_line(xmin, 0.0, xmax, 0.0));
        add_path(plot, &sy, &tau, COLOR_PATH, None);
        plot.set_range(xmin, xmax, ymin, ymax);
        add_legend(plot, "upper left", 3);
        Ok(())
    }

    fn draw_pore_pressure_ratio(&self, plot: &mut Plot, cutoff: usize, limits: &AxisLimits) -> Result<(), StrError> {
        let (n, xmin, xmax) = self.series(Column::Index, cutoff, limits.xmin, limits.xmax)?;
        let columns = [Column::Field(ResultField::Ru), Column::Field(ResultField::RuExtreme)];
        let (ymin, ymax) = calc_axis_range(self.table, &columns, limits.ymin, limits.ymax)?;
        let ru = self.table.field(ResultField::Ru);
        let ru_extreme = self.table.field(ResultField::RuExtreme);
        add_path(plot, &n, &ru[..cutoff], COLOR_PATH, Some("$r_u$"));
        add_path(plot, &n, &ru_extreme[..cutoff], COLOR_MB, Some("$r_{u,extreme}$"));
        plot.set_range(xmin, xmax, ymin, ymax);
        add_legend(plot, "upper left", 2);
        Ok(())
    }
}

/// Returns a dotted reference line
fn reference_line(x0: f64, y0: f64, x1: f64, y1: f64) -> Curve {
    let mut curve = Curve::new();
    curve
        .set_line_color(COLOR_REFERENCE)
        .set_line_style(":")
        .draw(&vec![x0, x1], &vec![y0, y1]);
    curve
}

/// Adds a path and highlights its last point
fn add_path(plot: &mut Plot, x: &[f64], y: &[f64], color: &str, label: Option<&str>) {
    let n = usize::min(x.len(), y.len());
    if n < 1 {
        return;
    }
    let mut line = Curve::new();
    line.set_line_color(color).draw(&x[..n].to_vec(), &y[..n].to_vec());
    let mut marker = Curve::new();
    marker
        .set_line_style("None")
        .set_marker_style("o")
        .set_marker_color(color)
        .set_marker_line_color(color);
    if let Some(l) = label {
        marker.set_label(l);
    }
    marker.draw(&vec![x[n - 1]], &vec![y[n - 1]]);
    plot.add(&line).add(&marker);
}

/// Adds a legend to the current axes
fn add_legend(plot: &mut Plot, location: &str, num_col: usize) {
    let mut legend = Legend::new();
    legend.set_location(location).set_num_col(num_col).draw();
    plot.add(&legend);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ChartPlotter;
    use crate::base::{ResultField, DEFAULT_TEST_DIR, N_RESULT_FIELD};
    use crate::chart::ChartKind;
    use crate::post::{
        calc_range, generate_cyclic_table, sample_material_params, AxisLimits, Bound, ResultRow, ResultTable,
    };
    use plotpy::Plot;
    use russell_lab::approx_eq;

    const SAVE_FIGURE: bool = false;

    #[test]
    fn draw_works_for_all_charts() {
        let table = generate_cyclic_table(62);
        let params = sample_material_params(30.0, 0.5, 0.1, 0.3);
        let mut plotter = ChartPlotter::new(&table, &params);
        plotter.n_surface_point = 101;
        let limits = AxisLimits::new();
        for kind in ChartKind::ALL {
            for cutoff in [1, 2, 30, 62] {
                let mut plot = Plot::new();
                plotter.draw(&mut plot, kind, cutoff, &limits).unwrap();
            }
        }
        plotter.log_scale_void_ratio = false;
        let mut plot = Plot::new();
        plotter.draw(&mut plot, ChartKind::VoidRatioMeanStress, 10, &limits).unwrap();
        let mut plot = Plot::new();
        plotter.draw_mosaic(&mut plot, 40).unwrap();
        if SAVE_FIGURE {
            let path = format!("{}/test_chart_plotter_mosaic.svg", DEFAULT_TEST_DIR);
            plotter.save_mosaic(40, &path).unwrap();
            for kind in ChartKind::ALL {
                let path = format!("{}/test_chart_plotter_{}.svg", DEFAULT_TEST_DIR, kind.suffix());
                plotter.save(kind, 40, &limits, &path).unwrap();
            }
        }
    }

    #[test]
    fn shear_strain_bounds_are_fractions() {
        let table = generate_cyclic_table(42);
        let params = sample_material_params(30.0, 0.5, 0.1, 0.3);
        let plotter = ChartPlotter::new(&table, &params);
        let mut limits = AxisLimits::new();
        limits.set_x(-0.01, 0.02);
        let (xmin, xmax) = plotter.shear_strain_range(&limits).unwrap();
        approx_eq(xmin, -1.0, 1e-15);
        approx_eq(xmax, 2.0, 1e-15);

        let gamma = table.field(ResultField::Gamxy);
        let (min, max) = calc_range(&[&gamma], Bound::Auto, Bound::Auto).unwrap();
        let (xmin, xmax) = plotter.shear_strain_range(&AxisLimits::new()).unwrap();
        approx_eq(xmin, 100.0 * min, 1e-13);
        approx_eq(xmax, 100.0 * max, 1e-13);
        assert!(xmax > 100.0 * gamma.iter().fold(f64::NEG_INFINITY, |a, b| f64::max(a, *b)));
    }

    #[test]
    fn draw_captures_cutoff_errors() {
        let params = sample_material_params(30.0, 0.5, 0.1, 0.3);
        let empty = ResultTable::from_rows(Vec::new()).unwrap();
        let plotter = ChartPlotter::new(&empty, &params);
        let mut plot = Plot::new();
        assert_eq!(
            plotter.draw(&mut plot, ChartKind::ShearStressStrain, 1, &AxisLimits::new()).err(),
            Some("the result table is empty")
        );

        let table = generate_cyclic_table(10);
        let plotter = ChartPlotter::new(&table, &params);
        for kind in ChartKind::ALL {
            assert_eq!(
                plotter.draw(&mut plot, kind, 0, &AxisLimits::new()).err(),
                Some("cutoff must be ≥ 1")
            );
            assert_eq!(
                plotter.draw(&mut plot, kind, 11, &AxisLimits::new()).err(),
                Some("cutoff exceeds the number of rows")
            );
        }
    }

    #[test]
    fn draw_captures_degenerate_states() {
        let params = sample_material_params(30.0, 0.5, 0.1, 0.3);
        let mut values = [0.0; N_RESULT_FIELD];
        values[ResultField::Pcs.index()] = 100.0;
        values[ResultField::M.index()] = 1.0;
        let table = ResultTable::from_rows(vec![ResultRow { phase: 0, step: 0, values }]).unwrap();
        let plotter = ChartPlotter::new(&table, &params);
        let mut limits = AxisLimits::new();
        limits.set_x(1.0, 10.0).set_y(0.0, 1.0);
        let mut plot = Plot::new();
        assert_eq!(
            plotter.draw(&mut plot, ChartKind::StressPathSurfaces, 1, &limits).err(),
            Some("stress ratio is undefined for p* ≤ 0")
        );
        assert_eq!(
            plotter.draw(&mut plot, ChartKind::StressSpaceSurfaces, 1, &limits).err(),
            Some("pb must be > 0")
        );
        limits.set_x(-1.0, 10.0);
        assert_eq!(
            plotter.draw(&mut plot, ChartKind::VoidRatioMeanStress, 1, &limits).err(),
            Some("the lower bound of a logarithmic axis must be > 0")
        );
    }

    #[test]
    fn draw_captures_invalid_history_variables() {
        let params = sample_material_params(30.0, 0.5, 0.1, 0.3);
        let mut values = [0.0; N_RESULT_FIELD];
        values[ResultField::Sx.index()] = 50.0;
        values[ResultField::Sy.index()] = 100.0;
        let table = ResultTable::from_rows(vec![ResultRow { phase: 0, step: 0, values }]).unwrap();
        let plotter = ChartPlotter::new(&table, &params);
        let mut plot = Plot::new();
        let mut limits = AxisLimits::new();
        limits.set_x(0.0, 120.0).set_y(0.0, 50.0);
        assert_eq!(
            plotter.draw(&mut plot, ChartKind::StressPathSurfaces, 1, &limits).err(),
            Some("pcs must be > 0")
        );
    }
}
