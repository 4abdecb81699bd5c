use pm4post::prelude::*;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "pm4post_charts",
    about = "Generates the diagnostic charts of a PM4Silt element simulation"
)]
struct Options {
    /// JSON file with the results exported by the host program
    dump: String,

    /// JSON file with the configuration
    #[structopt(long)]
    config: Option<String>,

    /// Number of rows to draw
    #[structopt(long)]
    cutoff: Option<usize>,

    /// Directory where the figures are saved
    #[structopt(long)]
    out_dir: Option<String>,
}

fn main() -> Result<(), StrError> {
    env_logger::init();

    // parse options
    let options = Options::from_args();

    // load data
    let dump = ResultDump::read_json(&options.dump)?;
    let mut config = match &options.config {
        Some(path) => Config::read_json(path)?,
        None => {
            let mut config = Config::new();
            config.set_point(dump.point.0, dump.point.1)?;
            config
        }
    };
    if let Some(cutoff) = options.cutoff {
        config.set_cutoff(cutoff)?;
    }
    if let Some(out_dir) = &options.out_dir {
        let fn_stem = config.fn_stem.clone();
        config.set_output(out_dir, &fn_stem)?;
    }

    // extract results
    let phases = dump.phases(config.phases.as_deref())?;
    let (table, n_skipped) = Ingestor::new(&dump, config.point).run(&phases)?;
    let params = MaterialParams::load(&dump, config.material)?;
    let cutoff = config.resolve_cutoff(table.nrow())?;

    // draw charts
    let mut plotter = ChartPlotter::new(&table, &params);
    plotter.n_surface_point = config.n_surface_point;
    plotter.log_scale_void_ratio = config.log_scale_void_ratio;
    let limits = AxisLimits::new();
    for kind in ChartKind::ALL {
        let path = format!("{}/{}_{}.svg", config.out_dir, config.fn_stem, kind.suffix());
        plotter.save(kind, cutoff, &limits, &path)?;
    }
    let path_mosaic = format!("{}/{}_mosaic.svg", config.out_dir, config.fn_stem);
    plotter.save_mosaic(cutoff, &path_mosaic)?;

    // message
    let thin_line = format!("{:─^1$}", "", path_mosaic.len());
    println!("\n\n{}", thin_line);
    println!("{}", config);
    println!("{} rows extracted; {} steps skipped; {} rows drawn", table.nrow(), n_skipped, cutoff);
    println!("charts generated; the mosaic is:");
    println!("{}", path_mosaic);
    println!("{}\n\n", thin_line);
    Ok(())
}
