use super::{DEFAULT_FN_STEM, DEFAULT_N_SURFACE_POINT, DEFAULT_OUT_DIR};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds configuration data for a post-processing run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Coordinates (x, y) of the point where results are extracted
    pub point: (f64, f64),

    /// Index of the material in the material registry
    pub material: usize,

    /// Number of rows to draw (None means all rows)
    pub cutoff: Option<usize>,

    /// Number of points used to sweep the bounding and dilatancy surfaces
    pub n_surface_point: usize,

    /// Draws the void ratio against the mean stress using a logarithmic x-axis
    pub log_scale_void_ratio: bool,

    /// Directory where the figures are saved
    pub out_dir: String,

    /// Stem of the figure file names
    pub fn_stem: String,

    /// Indices of the phases to extract (None means all phases)
    pub phases: Option<Vec<usize>>,
}

impl Config {
    /// Allocates a new instance
    pub fn new() -> Self {
        Config {
            point: (0.0, 0.0),
            material: 0,
            cutoff: None,
            n_surface_point: DEFAULT_N_SURFACE_POINT,
            log_scale_void_ratio: true,
            out_dir: DEFAULT_OUT_DIR.to_string(),
            fn_stem: DEFAULT_FN_STEM.to_string(),
            phases: None,
        }
    }

    /// Sets the point where results are extracted
    pub fn set_point(&mut self, x: f64, y: f64) -> Result<&mut Self, StrError> {
        if !x.is_finite() || !y.is_finite() {
            return Err("point coordinates must be finite");
        }
        self.point = (x, y);
        Ok(self)
    }

    /// Sets the index of the material
    pub fn set_material(&mut self, index: usize) -> Result<&mut Self, StrError> {
        self.material = index;
        Ok(self)
    }

    /// Sets the number of rows to draw
    pub fn set_cutoff(&mut self, cutoff: usize) -> Result<&mut Self, StrError> {
        if cutoff < 1 {
            return Err("cutoff must be ≥ 1");
        }
        self.cutoff = Some(cutoff);
        Ok(self)
    }

    /// Sets the number of points used to sweep the surfaces
    pub fn set_n_surface_point(&mut self, n: usize) -> Result<&mut Self, StrError> {
        if n < 2 {
            return Err("n_surface_point must be ≥ 2");
        }
        self.n_surface_point = n;
        Ok(self)
    }

    /// Sets the logarithmic x-axis option of the e-p chart
    pub fn set_log_scale_void_ratio(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.log_scale_void_ratio = flag;
        Ok(self)
    }

    /// Sets the output directory and the file stem
    pub fn set_output(&mut self, out_dir: &str, fn_stem: &str) -> Result<&mut Self, StrError> {
        if out_dir.is_empty() {
            return Err("out_dir must not be empty");
        }
        if fn_stem.is_empty() {
            return Err("fn_stem must not be empty");
        }
        self.out_dir = out_dir.to_string();
        self.fn_stem = fn_stem.to_string();
        Ok(self)
    }

    /// Restricts the extraction to a subset of phases
    pub fn set_phases(&mut self, phases: &[usize]) -> Result<&mut Self, StrError> {
        if phases.is_empty() {
            return Err("the list of phases must not be empty");
        }
        if phases.windows(2).any(|w| w[1] <= w[0]) {
            return Err("the phases must be given in increasing order");
        }
        self.phases = Some(phases.to_vec());
        Ok(self)
    }

    /// Returns the cutoff to be used with a table of `nrow` rows
    pub fn resolve_cutoff(&self, nrow: usize) -> Result<usize, StrError> {
        if nrow < 1 {
            return Err("the result table is empty");
        }
        match self.cutoff {
            Some(c) if c > nrow => Err("cutoff exceeds the number of rows"),
            Some(c) => Ok(c),
            None => Ok(nrow),
        }
    }

    /// Reads a JSON file containing the configuration
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
        let config: Config = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        config.validate()?;
        Ok(config)
    }

    /// Writes a JSON file with the configuration
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

    /// Checks the values read from a file using the same rules as the setters
    fn validate(&self) -> Result<(), StrError> {
        let mut check = Config::new();
        check
            .set_point(self.point.0, self.point.1)?
            .set_n_surface_point(self.n_surface_point)?
            .set_output(&self.out_dir, &self.fn_stem)?;
        if let Some(c) = self.cutoff {
            check.set_cutoff(c)?;
        }
        if let Some(phases) = &self.phases {
            check.set_phases(phases)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n")?;
        write!(f, "==================\n")?;
        write!(f, "point = {:?}\n", self.point)?;
        write!(f, "material = {:?}\n", self.material)?;
        write!(f, "cutoff = {:?}\n", self.cutoff)?;
        write!(f, "n_surface_point = {:?}\n", self.n_surface_point)?;
        write!(f, "log_scale_void_ratio = {:?}\n", self.log_scale_void_ratio)?;
        write!(f, "out_dir = {:?}\n", self.out_dir)?;
        write!(f, "fn_stem = {:?}\n", self.fn_stem)?;
        write!(f, "phases = {:?}\n", self.phases)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
