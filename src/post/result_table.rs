use super::{StepOutcome, StressInvariants};
use crate::base::{ResultField, N_RESULT_FIELD};
use crate::StrError;

/// Defines the identifier of a calculation step in the host result service
pub type StepId = usize;

/// Holds the values extracted at one step
#[derive(Clone, Debug, PartialEq)]
pub struct ResultRow {
    /// Zero-based index of the loading phase
    pub phase: usize,

    /// Identifier of the step within the host result service
    pub step: StepId,

    /// Holds one value per ResultField (in column order)
    pub values: [f64; N_RESULT_FIELD],
}

impl ResultRow {
    /// Returns the value of a field
    #[inline]
    pub fn get(&self, field: ResultField) -> f64 {
        self.values[field.index()]
    }
}

/// Defines the quantities derived from the in-plane stress components
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Invariant {
    /// Mean-like stress p*
    MeanStress,

    /// Deviatoric-like stress q*
    DeviatoricStress,

    /// Stress ratio r_xx
    RatioXx,

    /// Stress ratio r_yy
    RatioYy,

    /// Stress ratio r_xy
    RatioXy,
}

/// Defines a column of the result table
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Column {
    /// Extracted field
    Field(ResultField),

    /// Derived stress invariant
    Derived(Invariant),

    /// Row index (simulating a pseudo time)
    Index,

    /// Phase index
    Phase,
}

/// Holds the rows extracted at one point, ordered by (phase, step)
///
/// The table is immutable; the stress invariants are calculated once when the table is built.
#[derive(Clone, Debug)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
    invariants: Vec<StressInvariants>,
}

impl ResultTable {
    /// Allocates a new instance from rows given in temporal order
    ///
    /// Returns an error if the rows are not strictly ordered by phase. Within a phase,
    /// the step order is the order of the rows, so repeated step identifiers are rejected.
    pub fn from_rows(rows: Vec<ResultRow>) -> Result<Self, StrError> {
        for pair in rows.windows(2) {
            if pair[1].phase < pair[0].phase {
                return Err("rows must be ordered by phase");
            }
            if pair[1].phase == pair[0].phase && pair[1].step == pair[0].step {
                return Err("rows must not contain repeated steps");
            }
        }
        let invariants = rows
            .iter()
            .map(|r| StressInvariants::new(r.get(ResultField::Sx), r.get(ResultField::Sy), r.get(ResultField::Sxy)))
            .collect();
        Ok(ResultTable { rows, invariants })
    }

    /// Allocates a new instance keeping only the extracted steps
    pub fn from_outcomes(outcomes: Vec<StepOutcome>) -> Result<Self, StrError> {
        let rows = outcomes
            .into_iter()
            .filter_map(|outcome| match outcome {
                StepOutcome::Extracted(row) => Some(row),
                StepOutcome::Skipped { .. } => None,
            })
            .collect();
        ResultTable::from_rows(rows)
    }

    /// Returns the number of rows
    #[inline]
    pub fn nrow(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns all rows
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Returns a row or an error if the index is out of range
    pub fn row(&self, index: usize) -> Result<&ResultRow, StrError> {
        self.rows.get(index).ok_or("row index is out of range")
    }

    /// Returns the stress invariants of a row or an error if the index is out of range
    pub fn invariants(&self, index: usize) -> Result<&StressInvariants, StrError> {
        self.invariants.get(index).ok_or("row index is out of range")
    }

    /// Returns the values of an extracted field
    pub fn field(&self, field: ResultField) -> Vec<f64> {
        self.rows.iter().map(|r| r.get(field)).collect()
    }

    /// Returns the values of a column
    ///
    /// Returns an error if a stress ratio is requested and some row has p* ≤ 0.
    pub fn column(&self, column: Column) -> Result<Vec<f64>, StrError> {
        match column {
            Column::Field(field) => Ok(self.field(field)),
            Column::Derived(Invariant::MeanStress) => Ok(self.invariants.iter().map(|v| v.p_ast).collect()),
            Column::Derived(Invariant::DeviatoricStress) => Ok(self.invariants.iter().map(|v| v.q_ast).collect()),
            Column::Derived(ratio) => self
                .invariants
                .iter()
                .map(|v| match (v.ratios, ratio) {
                    (Some((rxx, _, _)), Invariant::RatioXx) => Ok(rxx),
                    (Some((_, ryy, _)), Invariant::RatioYy) => Ok(ryy),
                    (Some((_, _, rxy)), _) => Ok(rxy),
                    (None, _) => Err("stress ratios are undefined for p* ≤ 0"),
                })
                .collect(),
            Column::Index => Ok((0..self.rows.len()).map(|i| i as f64).collect()),
            Column::Phase => Ok(self.rows.iter().map(|r| r.phase as f64).collect()),
        }
    }

    /// Checks that `cutoff` selects at least one row and no more than the available rows
    pub fn check_cutoff(&self, cutoff: usize) -> Result<(), StrError> {
        if self.rows.is_empty() {
            return Err("the result table is empty");
        }
        if cutoff < 1 {
            return Err("cutoff must be ≥ 1");
        }
        if cutoff > self.rows.len() {
            return Err("cutoff exceeds the number of rows");
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Column, Invariant, ResultRow, ResultTable};
    use crate::base::{ResultField, N_RESULT_FIELD};
    use crate::post::StepOutcome;
    use russell_lab::approx_eq;

    fn row(phase: usize, step: usize, sx: f64, sy: f64, sxy: f64) -> ResultRow {
        let mut values = [0.0; N_RESULT_FIELD];
        values[ResultField::Sx.index()] = sx;
        values[ResultField::Sy.index()] = sy;
        values[ResultField::Sxy.index()] = sxy;
        values[ResultField::Ru.index()] = step as f64 / 10.0;
        ResultRow { phase, step, values }
    }

    #[test]
    fn from_rows_captures_errors() {
        assert_eq!(
            ResultTable::from_rows(vec![row(1, 0, 1.0, 1.0, 0.0), row(0, 1, 1.0, 1.0, 0.0)]).err(),
            Some("rows must be ordered by phase")
        );
        assert_eq!(
            ResultTable::from_rows(vec![row(0, 3, 1.0, 1.0, 0.0), row(0, 3, 1.0, 1.0, 0.0)]).err(),
            Some("rows must not contain repeated steps")
        );
    }

    #[test]
    fn columns_work() {
        let table = ResultTable::from_rows(vec![
            row(0, 0, 100.0, 60.0, 15.0),
            row(0, 1, 80.0, 80.0, 0.0),
            row(1, 2, 50.0, 30.0, -10.0),
        ])
        .unwrap();
        assert_eq!(table.nrow(), 3);
        assert!(!table.is_empty());
        assert_eq!(table.field(ResultField::Ru), &[0.0, 0.1, 0.2]);
        assert_eq!(table.column(Column::Index).unwrap(), &[0.0, 1.0, 2.0]);
        assert_eq!(table.column(Column::Phase).unwrap(), &[0.0, 0.0, 1.0]);
        assert_eq!(
            table.column(Column::Derived(Invariant::MeanStress)).unwrap(),
            &[80.0, 80.0, 40.0]
        );
        let q = table.column(Column::Derived(Invariant::DeviatoricStress)).unwrap();
        approx_eq(q[0], 50.0, 1e-13);
        approx_eq(q[1], 0.0, 1e-15);
        let rxy = table.column(Column::Derived(Invariant::RatioXy)).unwrap();
        approx_eq(rxy[0], 0.1875, 1e-15);
        approx_eq(rxy[2], -0.25, 1e-15);
        let ryy = table.column(Column::Derived(Invariant::RatioYy)).unwrap();
        approx_eq(ryy[2], -0.25, 1e-15);
        assert_eq!(table.row(2).unwrap().step, 2);
        assert_eq!(table.row(3).err(), Some("row index is out of range"));
        assert_eq!(table.invariants(1).unwrap().p_ast, 80.0);
    }

    #[test]
    fn ratio_columns_reject_degenerate_mean_stress() {
        let table = ResultTable::from_rows(vec![row(0, 0, 0.0, 0.0, 0.0), row(0, 1, 10.0, 10.0, 1.0)]).unwrap();
        assert_eq!(
            table.column(Column::Derived(Invariant::RatioXx)).err(),
            Some("stress ratios are undefined for p* ≤ 0")
        );
        assert!(table.column(Column::Derived(Invariant::MeanStress)).is_ok());
    }

    #[test]
    fn from_outcomes_drops_skipped_steps() {
        let outcomes = vec![
            StepOutcome::Extracted(row(0, 0, 1.0, 1.0, 0.0)),
            StepOutcome::Skipped {
                phase: 0,
                step: 1,
                field: ResultField::Sxy,
                reason: "result is not available",
            },
            StepOutcome::Extracted(row(0, 2, 2.0, 2.0, 0.0)),
        ];
        let table = ResultTable::from_outcomes(outcomes).unwrap();
        assert_eq!(table.nrow(), 2);
        assert_eq!(table.row(1).unwrap().step, 2);
    }

    #[test]
    fn check_cutoff_works() {
        let empty = ResultTable::from_rows(Vec::new()).unwrap();
        assert_eq!(empty.check_cutoff(1).err(), Some("the result table is empty"));
        let table = ResultTable::from_rows(vec![row(0, 0, 1.0, 1.0, 0.0), row(0, 1, 1.0, 1.0, 0.0)]).unwrap();
        assert_eq!(table.check_cutoff(0).err(), Some("cutoff must be ≥ 1"));
        assert_eq!(table.check_cutoff(3).err(), Some("cutoff exceeds the number of rows"));
        assert!(table.check_cutoff(1).is_ok());
        assert!(table.check_cutoff(2).is_ok());
    }
}
