use super::{ResultRow, ResultTable, StepId};
use crate::base::{ResultField, ResultSource, N_RESULT_FIELD};
use crate::StrError;
use std::collections::HashSet;

/// Defines the coordinates (x, y) of the point where results are extracted
pub type Point = (f64, f64);

/// Defines the capability of querying a single scalar result of the host simulation
pub trait ResultProvider {
    /// Returns the (raw) value of a result at a step and point
    ///
    /// Returns an error if the result is not available for this step.
    fn single_result(&self, step: StepId, source: ResultSource, point: Point) -> Result<f64, StrError>;
}

/// Holds a loading phase and its calculation steps (in order)
#[derive(Clone, Debug, PartialEq)]
pub struct Phase {
    /// Name of the phase
    pub name: String,

    /// Identifiers of the steps
    pub steps: Vec<StepId>,
}

/// Holds the result of extracting one step
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// All fields were extracted
    Extracted(ResultRow),

    /// Some field was not available; the step is dropped
    Skipped {
        /// Zero-based index of the phase
        phase: usize,

        /// Identifier of the step
        step: StepId,

        /// First field that failed
        field: ResultField,

        /// Message from the result provider
        reason: StrError,
    },
}

/// Extracts the result table at a point from a result provider
pub struct Ingestor<'a, R: ResultProvider> {
    provider: &'a R,
    point: Point,
}

impl<'a, R: ResultProvider> Ingestor<'a, R> {
    /// Allocates a new instance
    pub fn new(provider: &'a R, point: Point) -> Self {
        Ingestor { provider, point }
    }

    /// Extracts all fields of a single step
    ///
    /// Each value is multiplied by the scale factor of its field.
    pub fn extract_step(&self, phase: usize, step: StepId) -> StepOutcome {
        let mut values = [0.0; N_RESULT_FIELD];
        for field in ResultField::ALL {
            match self.provider.single_result(step, field.source(), self.point) {
                Ok(value) => values[field.index()] = value * field.scale(),
                Err(reason) => {
                    return StepOutcome::Skipped {
                        phase,
                        step,
                        field,
                        reason,
                    }
                }
            }
        }
        StepOutcome::Extracted(ResultRow { phase, step, values })
    }

    /// Extracts all steps of all phases (in order)
    ///
    /// Steps with unavailable results are reported as [StepOutcome::Skipped] and a warning is logged.
    /// A step listed again within the same phase is extracted only once; the repeat is logged and ignored.
    pub fn extract(&self, phases: &[Phase]) -> Vec<StepOutcome> {
        let mut outcomes = Vec::with_capacity(phases.iter().map(|p| p.steps.len()).sum());
        for (phase_id, phase) in phases.iter().enumerate() {
            let mut seen = HashSet::new();
            for step in &phase.steps {
                if !seen.insert(*step) {
                    log::warn!("step {} is repeated in phase {} ({}) and was ignored", step, phase_id, phase.name);
                    continue;
                }
                let outcome = self.extract_step(phase_id, *step);
                if let StepOutcome::Skipped { field, reason, .. } = &outcome {
                    log::warn!(
                        "step {} of phase {} ({}) was not extracted: {} ({})",
                        step,
                        phase_id,
                        phase.name,
                        reason,
                        field.key()
                    );
                }
                outcomes.push(outcome);
            }
        }
        outcomes
    }

    /// Extracts the result table and returns it with the number of skipped steps
    pub fn run(&self, phases: &[Phase]) -> Result<(ResultTable, usize), StrError> {
        let outcomes = self.extract(phases);
        let n_skipped = outcomes
            .iter()
            .filter(|o| matches!(o, StepOutcome::Skipped { .. }))
            .count();
        let table = ResultTable::from_outcomes(outcomes)?;
        log::info!(
            "extracted {} rows from {} phases at ({}, {}); {} steps skipped",
            table.nrow(),
            phases.len(),
            self.point.0,
            self.point.1,
            n_skipped
        );
        Ok((table, n_skipped))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
