//! Command-line front-end for U-LaserTime
//!
//! This crate provides:
//! - Job file loading (JSON or TOML) with SVG path data
//! - Colour-to-operation classification and unit scaling
//! - Machine profiles layered under command-line parameters
//! - JSON output of job reports and errors

mod job;
mod output;
mod profile;

pub use job::{process_for_color, JobEntry, JobFile, MM_PPI};
pub use output::{error_json, report_json, save_report, EntitySummary};
pub use profile::MachineProfile;
