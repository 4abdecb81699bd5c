use crate::base::{MaterialField, ResultSource};
use crate::post::{MaterialParams, MaterialRegistry, Phase, Point, ResultProvider, StepId};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Defines the tolerance used to compare the requested point with the dumped point
const POINT_TOLERANCE: f64 = 1e-8;

/// Holds the raw results of one calculation step
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DumpedStep {
    pub id: StepId,
    pub results: BTreeMap<String, f64>, // source key => raw value
}

/// Holds the steps of one loading phase
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DumpedPhase {
    pub name: String,
    pub steps: Vec<DumpedStep>,
}

/// Holds the results of a simulation at one point, exported by the host program
///
/// The dump provides both the single-result queries and the material user slots,
/// thus it can be used in place of the host program's result service.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResultDump {
    pub point: Point,
    pub phases: Vec<DumpedPhase>,
    pub materials: Vec<BTreeMap<String, f64>>, // "User{slot}" => value

    #[serde(skip)]
    index: HashMap<StepId, (usize, usize)>, // step id => (phase, position)
}

impl ResultDump {
    /// Allocates a new (empty) instance
    pub fn new(x: f64, y: f64) -> Self {
        ResultDump {
            point: (x, y),
            phases: Vec::new(),
            materials: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Adds a phase and returns its index
    pub fn add_phase(&mut self, name: &str) -> usize {
        self.phases.push(DumpedPhase {
            name: name.to_string(),
            steps: Vec::new(),
        });
        self.phases.len() - 1
    }

    /// Appends a step (without results) to a phase
    pub fn add_step(&mut self, phase: usize, id: StepId) -> Result<&mut Self, StrError> {
        if self.index.contains_key(&id) {
            return Err("step id already exists");
        }
        let dumped = self.phases.get_mut(phase).ok_or("phase index is out of range")?;
        dumped.steps.push(DumpedStep {
            id,
            results: BTreeMap::new(),
        });
        self.index.insert(id, (phase, dumped.steps.len() - 1));
        Ok(self)
    }

    /// Sets the raw value of a result at a step
    pub fn set_result(&mut self, step: StepId, source: ResultSource, value: f64) -> Result<&mut Self, StrError> {
        let (phase, position) = *self.index.get(&step).ok_or("unknown step")?;
        let dumped = &mut self.phases[phase].steps[position];
        dumped.results.insert(source.key(), value);
        Ok(self)
    }

    /// Adds a material with the given constants and returns its index
    pub fn add_material(&mut self, params: &MaterialParams) -> usize {
        let slots = MaterialField::ALL
            .iter()
            .map(|f| (format!("User{}", f.user_slot()), params.get(*f)))
            .collect();
        self.materials.push(slots);
        self.materials.len() - 1
    }

    /// Returns the phases and their steps, ready for extraction
    ///
    /// If `selected` is given, only those phases are returned (in the given order).
    pub fn phases(&self, selected: Option<&[usize]>) -> Result<Vec<Phase>, StrError> {
        let convert = |p: &DumpedPhase| Phase {
            name: p.name.clone(),
            steps: p.steps.iter().map(|s| s.id).collect(),
        };
        match selected {
            None => Ok(self.phases.iter().map(convert).collect()),
            Some(indices) => indices
                .iter()
                .map(|i| self.phases.get(*i).map(convert).ok_or("phase index is out of range"))
                .collect(),
        }
    }

    /// Returns the total number of steps
    pub fn n_step(&self) -> usize {
        self.phases.iter().map(|p| p.steps.len()).sum()
    }

    /// Reads a JSON file containing the results
    ///
    /// Returns an error if a step id appears more than once (in any phase).
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let mut data: ResultDump = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        data.build_index()?;
        Ok(data)
    }

    /// Writes a JSON file with the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }

    /// Maps each step id to its location and rejects repeated ids
    fn build_index(&mut self) -> Result<(), StrError> {
        self.index.clear();
        for (phase, dumped) in self.phases.iter().enumerate() {
            for (position, step) in dumped.steps.iter().enumerate() {
                if self.index.insert(step.id, (phase, position)).is_some() {
                    log::error!("step {} is repeated in phase {} ({})", step.id, phase, dumped.name);
                    return Err("step ids must be unique");
                }
            }
        }
        Ok(())
    }

    fn find_step(&self, id: StepId) -> Option<&DumpedStep> {
        let (phase, position) = *self.index.get(&id)?;
        self.phases.get(phase)?.steps.get(position).filter(|s| s.id == id)
    }
}

impl ResultProvider for ResultDump {
    fn single_result(&self, step: StepId, source: ResultSource, point: Point) -> Result<f64, StrError> {
        if f64::abs(point.0 - self.point.0) > POINT_TOLERANCE || f64::abs(point.1 - self.point.1) > POINT_TOLERANCE {
            return Err("point does not match the result dump");
        }
        let dumped = self.find_step(step).ok_or("unknown step")?;
        dumped
            .results
            .get(&source.key())
            .copied()
            .ok_or("result is not available")
    }
}

impl MaterialRegistry for ResultDump {
    fn user_value(&self, material: usize, slot: usize) -> Result<f64, StrError> {
        let slots = self.materials.get(material).ok_or("unknown material")?;
        slots
            .get(&format!("User{}", slot))
            .copied()
            .ok_or("user parameter is not available")
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ResultDump;
    use crate::base::{ResultField, ResultSource, DEFAULT_TEST_DIR};
    use crate::post::{sample_material_params, Ingestor, MaterialParams, MaterialRegistry, ResultProvider};
    use std::fs;

    fn sample_dump() -> ResultDump {
        let mut dump = ResultDump::new(0.5, 0.5);
        let consolidation = dump.add_phase("consolidation");
        let cyclic = dump.add_phase("cyclic");
        dump.add_step(consolidation, 10).unwrap();
        dump.add_step(cyclic, 11).unwrap().add_step(cyclic, 12).unwrap();
        for step in [10, 11, 12] {
            for field in ResultField::ALL {
                dump.set_result(step, field.source(), step as f64).unwrap();
            }
        }
        dump.add_material(&sample_material_params(30.0, 0.5, 0.1, 0.3));
        dump
    }

    #[test]
    fn builders_capture_errors() {
        let mut dump = sample_dump();
        assert_eq!(dump.add_step(0, 11).err(), Some("step id already exists"));
        assert_eq!(dump.add_step(2, 13).err(), Some("phase index is out of range"));
        assert_eq!(
            dump.set_result(99, ResultSource::Sigxy, 1.0).err(),
            Some("unknown step")
        );
        assert_eq!(dump.n_step(), 3);
        let phases = dump.phases(None).unwrap();
        assert_eq!(phases.len(), 2);
        assert_eq!(phases[1].name, "cyclic");
        assert_eq!(phases[1].steps, &[11, 12]);
        let phases = dump.phases(Some(&[1])).unwrap();
        assert_eq!(phases[0].steps, &[11, 12]);
        assert_eq!(dump.phases(Some(&[3])).err(), Some("phase index is out of range"));
    }

    #[test]
    fn single_result_works() {
        let mut dump = sample_dump();
        let point = (0.5, 0.5);
        assert_eq!(dump.single_result(11, ResultSource::Sigxy, point), Ok(11.0));
        assert_eq!(
            dump.single_result(11, ResultSource::Sigxy, (0.0, 0.5)).err(),
            Some("point does not match the result dump")
        );
        assert_eq!(
            dump.single_result(99, ResultSource::Sigxy, point).err(),
            Some("unknown step")
        );
        dump.phases[1].steps[0].results.remove(&ResultSource::PGamxy.key());
        assert_eq!(
            dump.single_result(11, ResultSource::PGamxy, point).err(),
            Some("result is not available")
        );
        let ingestor = Ingestor::new(&dump, point);
        let (table, n_skipped) = ingestor.run(&dump.phases(None).unwrap()).unwrap();
        assert_eq!(n_skipped, 1);
        assert_eq!(table.nrow(), 2);
        assert_eq!(table.row(1).unwrap().step, 12);
        assert_eq!(table.row(1).unwrap().get(ResultField::P), -12.0);
    }

    #[test]
    fn user_value_works() {
        let mut dump = sample_dump();
        assert_eq!(dump.user_value(0, 10), Ok(30.0));
        assert_eq!(dump.user_value(1, 10).err(), Some("unknown material"));
        assert_eq!(dump.user_value(0, 22).err(), Some("user parameter is not available"));
        let params = MaterialParams::load(&dump, 0).unwrap();
        assert_eq!(params, sample_material_params(30.0, 0.5, 0.1, 0.3));
        dump.materials[0].remove("User9");
        assert_eq!(MaterialParams::load(&dump, 0).err(), Some("user parameter is not available"));
    }

    #[test]
    fn read_and_write_json_work() {
        let dump = sample_dump();
        let path = format!("{}/test_result_dump.json", DEFAULT_TEST_DIR);
        dump.write_json(&path).unwrap();
        let read = ResultDump::read_json(&path).unwrap();
        assert_eq!(read.point, (0.5, 0.5));
        assert_eq!(read.n_step(), 3);
        assert_eq!(read.materials, dump.materials);
        assert_eq!(read.phases[0].steps[0].results, dump.phases[0].steps[0].results);
        assert_eq!(ResultDump::read_json("/tmp/pm4post/not-found.json").err(), Some("file not found"));
        assert_eq!(read.single_result(12, ResultSource::Sigxy, (0.5, 0.5)), Ok(12.0));
    }

    #[test]
    fn read_json_rejects_repeated_step_ids() {
        let path = format!("{}/test_result_dump_repeated_ids.json", DEFAULT_TEST_DIR);
        let json = r#"{
            "point": [0.0, 0.0],
            "phases": [
                { "name": "a", "steps": [{ "id": 1, "results": { "Sigxy": -5.0 } }] },
                { "name": "b", "steps": [{ "id": 1, "results": { "Sigxy": -9.0 } }] }
            ],
            "materials": []
        }"#;
        fs::create_dir_all(DEFAULT_TEST_DIR).unwrap();
        fs::write(&path, json).unwrap();
        assert_eq!(ResultDump::read_json(&path).err(), Some("step ids must be unique"));

        let json = json.replace(
            r#"{ "id": 1, "results": { "Sigxy": -9.0 } }"#,
            r#"{ "id": 2, "results": { "Sigxy": -9.0 } }"#,
        );
        fs::write(&path, json).unwrap();
        let dump = ResultDump::read_json(&path).unwrap();
        assert_eq!(dump.single_result(1, ResultSource::Sigxy, (0.0, 0.0)), Ok(-5.0));
        assert_eq!(dump.single_result(2, ResultSource::Sigxy, (0.0, 0.0)), Ok(-9.0));
    }
}
