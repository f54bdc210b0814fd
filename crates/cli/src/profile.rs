//! Machine profiles: stored machine parameters that command-line flags override.

use std::path::Path;

use serde::{Deserialize, Serialize};
use u_lasertime_core::{Error, Result};
use u_lasertime_estimator::MachineConfig;

/// A partial set of machine parameters.
///
/// Every field is optional so a profile can hold just the values that rarely
/// change for a given machine (acceleration, delays) while speeds come from
/// the command line, or the other way round.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MachineProfile {
    /// Cut speed (mm/s).
    pub cut_speed: Option<f64>,
    /// Vector engrave speed (mm/s).
    pub vector_engrave_speed: Option<f64>,
    /// Raster engrave speed (mm/s).
    pub raster_engrave_speed: Option<f64>,
    /// Transit speed (mm/s).
    pub transit_speed: Option<f64>,
    /// Acceleration (mm/s²).
    pub acceleration: Option<f64>,
    /// Junction delay (s).
    pub junction_delay: Option<f64>,
    /// Burn dwell (s).
    pub burn_dwell: Option<f64>,
    /// Raster scan gap (mm).
    pub scan_gap: Option<f64>,
    /// Raster overscan factor.
    pub overscan_factor: Option<f64>,
    /// Curve length accuracy (mm).
    pub length_accuracy: Option<f64>,
    /// Home position (mm).
    pub home_position: Option<(f64, f64)>,
}

impl MachineProfile {
    /// Parses a profile from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Parses a profile from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Loads a profile, choosing the format from the extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        if crate::job::is_toml(path) {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    /// Layers `other` on top of this profile; values set in `other` win.
    pub fn merged_with(self, other: &MachineProfile) -> Self {
        Self {
            cut_speed: other.cut_speed.or(self.cut_speed),
            vector_engrave_speed: other.vector_engrave_speed.or(self.vector_engrave_speed),
            raster_engrave_speed: other.raster_engrave_speed.or(self.raster_engrave_speed),
            transit_speed: other.transit_speed.or(self.transit_speed),
            acceleration: other.acceleration.or(self.acceleration),
            junction_delay: other.junction_delay.or(self.junction_delay),
            burn_dwell: other.burn_dwell.or(self.burn_dwell),
            scan_gap: other.scan_gap.or(self.scan_gap),
            overscan_factor: other.overscan_factor.or(self.overscan_factor),
            length_accuracy: other.length_accuracy.or(self.length_accuracy),
            home_position: other.home_position.or(self.home_position),
        }
    }

    /// Builds a validated machine configuration.
    ///
    /// The four speeds are required; everything else falls back to the
    /// estimator defaults.
    pub fn to_config(&self) -> Result<MachineConfig> {
        let mut config = MachineConfig::new(
            required("cut_speed", self.cut_speed)?,
            required("vector_engrave_speed", self.vector_engrave_speed)?,
            required("raster_engrave_speed", self.raster_engrave_speed)?,
            required("transit_speed", self.transit_speed)?,
        );

        if let Some(v) = self.acceleration {
            config = config.with_acceleration(v);
        }
        if let Some(v) = self.junction_delay {
            config = config.with_junction_delay(v);
        }
        if let Some(v) = self.burn_dwell {
            config = config.with_burn_dwell(v);
        }
        if let Some(v) = self.scan_gap {
            config = config.with_scan_gap(v);
        }
        if let Some(v) = self.overscan_factor {
            config = config.with_overscan_factor(v);
        }
        if let Some(v) = self.length_accuracy {
            config = config.with_length_accuracy(v);
        }
        if let Some((x, y)) = self.home_position {
            config = config.with_home_position(x, y);
        }

        config.validate()?;
        Ok(config)
    }
}

fn required(name: &'static str, value: Option<f64>) -> Result<f64> {
    value.ok_or(Error::MissingParameter(name))
}
