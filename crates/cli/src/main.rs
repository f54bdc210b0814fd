//! U-LaserTime CLI

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use u_lasertime_cli::{
    error_json, report_json, save_report, EntitySummary, JobFile, MachineProfile, MM_PPI,
};
use u_lasertime_core::DEFAULT_ERROR_LIMIT;
use u_lasertime_estimator::JobTimeEstimator;

#[derive(Parser)]
#[command(name = "lasertime")]
#[command(about = "Estimate laser cutter job time from classified vector paths")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the execution time of a job
    Estimate {
        /// Job file (JSON, or TOML by extension)
        job: PathBuf,

        #[command(flatten)]
        machine: MachineArgs,

        /// Pixels per inch of the source units (25.4 means 1 unit = 1 mm)
        #[arg(long, default_value_t = MM_PPI)]
        ppi: f64,

        /// Machine profile file (JSON, or TOML by extension); flags override it
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Also write the report to this file (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the classified entities of a job without estimating
    Classify {
        /// Job file (JSON, or TOML by extension)
        job: PathBuf,

        /// Pixels per inch of the source units (25.4 means 1 unit = 1 mm)
        #[arg(long, default_value_t = MM_PPI)]
        ppi: f64,
    },
}

#[derive(Args)]
struct MachineArgs {
    /// Speed for cut paths in mm/s (red #FF0000)
    #[arg(long, alias = "cut_speed")]
    cut_speed: Option<f64>,

    /// Speed for vector marking in mm/s (green #00FF00)
    #[arg(long, alias = "vector_engrave_speed")]
    vector_engrave_speed: Option<f64>,

    /// Speed for raster engraving in mm/s (blue #0000FF)
    #[arg(long, alias = "raster_engrave_speed")]
    raster_engrave_speed: Option<f64>,

    /// Travel speed between and within entities in mm/s
    #[arg(long, alias = "transit_speed")]
    transit_speed: Option<f64>,

    /// Travel acceleration in mm/s² [default: 500]
    #[arg(long, alias = "accel")]
    acceleration: Option<f64>,

    /// Delay per drawable segment in seconds [default: 0.05]
    #[arg(long, alias = "junction_delay")]
    junction_delay: Option<f64>,

    /// Settling time at the start of each cut/mark entity in seconds [default: 0.1]
    #[arg(long, alias = "burn_dwell")]
    burn_dwell: Option<f64>,

    /// Raster line advance along Y in mm [default: 0.1]
    #[arg(long, alias = "scan_gap")]
    scan_gap: Option<f64>,

    /// Raster overscan fraction [default: 0.1]
    #[arg(long, alias = "overscan_factor")]
    overscan_factor: Option<f64>,
}

impl From<&MachineArgs> for MachineProfile {
    fn from(args: &MachineArgs) -> Self {
        MachineProfile {
            cut_speed: args.cut_speed,
            vector_engrave_speed: args.vector_engrave_speed,
            raster_engrave_speed: args.raster_engrave_speed,
            transit_speed: args.transit_speed,
            acceleration: args.acceleration,
            junction_delay: args.junction_delay,
            burn_dwell: args.burn_dwell,
            scan_gap: args.scan_gap,
            overscan_factor: args.overscan_factor,
            ..Default::default()
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn load_entities(job: &Path, ppi: f64) -> anyhow::Result<Vec<u_lasertime_core::LaserEntity>> {
    let file = JobFile::from_path(job)
        .with_context(|| format!("failed to load job {}", job.display()))?;
    Ok(file.into_entities(ppi)?)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Estimate {
            job,
            machine,
            ppi,
            profile,
            output,
        } => {
            let base = match &profile {
                Some(path) => MachineProfile::from_path(path)
                    .with_context(|| format!("failed to load profile {}", path.display()))?,
                None => MachineProfile::default(),
            };
            let config = base.merged_with(&MachineProfile::from(&machine)).to_config()?;
            log::debug!("Machine configuration: {:?}", config);

            let entities = load_entities(&job, ppi)?;
            let report = JobTimeEstimator::new(config).calculate_total_job(&entities);

            println!("{}", report_json(&report)?);

            if let Some(path) = output {
                save_report(&report, &path)
                    .with_context(|| format!("failed to write report {}", path.display()))?;
                log::info!("Report saved to: {}", path.display());
            }
        }

        Commands::Classify { job, ppi } => {
            let entities = load_entities(&job, ppi)?;
            let summaries: Vec<EntitySummary> = entities
                .iter()
                .enumerate()
                .map(|(i, e)| EntitySummary::new(i, e, DEFAULT_ERROR_LIMIT))
                .collect();
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            println!("{}", error_json(&format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}
