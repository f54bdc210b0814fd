//! Machine configuration for job time estimation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use u_lasertime_core::{Error, Point, Result, DEFAULT_ERROR_LIMIT};

/// Default acceleration in mm/s².
pub const DEFAULT_ACCELERATION: f64 = 500.0;
/// Default junction delay in seconds.
pub const DEFAULT_JUNCTION_DELAY: f64 = 0.05;
/// Default burn dwell in seconds.
pub const DEFAULT_BURN_DWELL: f64 = 0.1;
/// Default raster scan gap in mm.
pub const DEFAULT_SCAN_GAP: f64 = 0.1;
/// Default raster overscan factor.
pub const DEFAULT_OVERSCAN_FACTOR: f64 = 0.1;

/// Machine parameters used by the estimator.
///
/// Speeds are in mm/s and must be strictly positive. The estimator itself
/// does not check them: call [`MachineConfig::validate`] before estimating.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MachineConfig {
    /// Speed for cut paths (mm/s).
    pub cut_speed: f64,

    /// Speed for vector marking paths (mm/s).
    pub vector_engrave_speed: f64,

    /// Speed for raster scan lines (mm/s).
    pub raster_engrave_speed: f64,

    /// Target speed for non-burning travel moves (mm/s).
    pub transit_speed: f64,

    /// Head acceleration for travel moves (mm/s²).
    /// `f64::INFINITY` models immediate velocity changes.
    pub acceleration: f64,

    /// Time penalty per drawable segment, for the deceleration at each vertex (s).
    pub junction_delay: f64,

    /// Settling time added once at the start of each cut/mark entity (s).
    pub burn_dwell: f64,

    /// Raster line advance along Y (mm).
    pub scan_gap: f64,

    /// Fraction of raster base time added for beam-on acceleration at line ends.
    pub overscan_factor: f64,

    /// Bound on curve discretization error for length computation (mm).
    pub length_accuracy: f64,

    /// Machine home, where the head starts.
    /// Default is (0.0, 0.0).
    pub home_position: (f64, f64),
}

impl MachineConfig {
    /// Creates a configuration with the required speeds and default options.
    pub fn new(
        cut_speed: f64,
        vector_engrave_speed: f64,
        raster_engrave_speed: f64,
        transit_speed: f64,
    ) -> Self {
        Self {
            cut_speed,
            vector_engrave_speed,
            raster_engrave_speed,
            transit_speed,
            acceleration: DEFAULT_ACCELERATION,
            junction_delay: DEFAULT_JUNCTION_DELAY,
            burn_dwell: DEFAULT_BURN_DWELL,
            scan_gap: DEFAULT_SCAN_GAP,
            overscan_factor: DEFAULT_OVERSCAN_FACTOR,
            length_accuracy: DEFAULT_ERROR_LIMIT,
            home_position: (0.0, 0.0),
        }
    }

    /// Sets the travel acceleration.
    pub fn with_acceleration(mut self, acceleration: f64) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Treats every velocity change as instantaneous (plain distance / speed travel).
    pub fn with_instant_acceleration(self) -> Self {
        self.with_acceleration(f64::INFINITY)
    }

    /// Sets the per-segment junction delay.
    pub fn with_junction_delay(mut self, delay: f64) -> Self {
        self.junction_delay = delay;
        self
    }

    /// Sets the per-entity burn dwell.
    pub fn with_burn_dwell(mut self, dwell: f64) -> Self {
        self.burn_dwell = dwell;
        self
    }

    /// Sets the raster scan gap.
    pub fn with_scan_gap(mut self, gap: f64) -> Self {
        self.scan_gap = gap;
        self
    }

    /// Sets the raster overscan factor.
    pub fn with_overscan_factor(mut self, factor: f64) -> Self {
        self.overscan_factor = factor;
        self
    }

    /// Sets the curve length accuracy.
    pub fn with_length_accuracy(mut self, accuracy: f64) -> Self {
        self.length_accuracy = accuracy;
        self
    }

    /// Sets the home position.
    pub fn with_home_position(mut self, x: f64, y: f64) -> Self {
        self.home_position = (x, y);
        self
    }

    /// Home position as a point.
    pub fn home(&self) -> Point {
        Point::new(self.home_position.0, self.home_position.1)
    }

    /// Speed used to burn drawable segments of a vector operation.
    pub fn vector_speed(&self, cut: bool) -> f64 {
        if cut {
            self.cut_speed
        } else {
            self.vector_engrave_speed
        }
    }

    /// Checks every parameter against its valid range.
    ///
    /// Non-positive speeds would make the estimate divide by zero, so the
    /// invocation layer must reject them here before estimating.
    pub fn validate(&self) -> Result<()> {
        let speeds = [
            ("cut_speed", self.cut_speed),
            ("vector_engrave_speed", self.vector_engrave_speed),
            ("raster_engrave_speed", self.raster_engrave_speed),
            ("transit_speed", self.transit_speed),
        ];
        for (name, value) in speeds {
            positive_finite(name, value)?;
        }

        // Infinity is allowed and means instant velocity change
        if self.acceleration.is_nan() || self.acceleration <= 0.0 {
            return Err(Error::invalid_parameter(
                "acceleration",
                self.acceleration,
                "must be positive",
            ));
        }

        positive_finite("scan_gap", self.scan_gap)?;
        positive_finite("length_accuracy", self.length_accuracy)?;

        let delays = [
            ("junction_delay", self.junction_delay),
            ("burn_dwell", self.burn_dwell),
            ("overscan_factor", self.overscan_factor),
        ];
        for (name, value) in delays {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid_parameter(
                    name,
                    value,
                    "must be a finite non-negative number",
                ));
            }
        }

        let (hx, hy) = self.home_position;
        if !hx.is_finite() {
            return Err(Error::invalid_parameter("home_x", hx, "must be finite"));
        }
        if !hy.is_finite() {
            return Err(Error::invalid_parameter("home_y", hy, "must be finite"));
        }

        Ok(())
    }
}

fn positive_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_parameter(
            name,
            value,
            "must be a finite positive number",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> MachineConfig {
        MachineConfig::new(10.0, 50.0, 100.0, 200.0)
    }

    #[test]
    fn test_defaults() {
        let config = base();
        assert_eq!(config.acceleration, 500.0);
        assert_eq!(config.junction_delay, 0.05);
        assert_eq!(config.burn_dwell, 0.1);
        assert_eq!(config.scan_gap, 0.1);
        assert_eq!(config.overscan_factor, 0.1);
        assert_eq!(config.home_position, (0.0, 0.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = base()
            .with_acceleration(1000.0)
            .with_junction_delay(0.0)
            .with_burn_dwell(0.2)
            .with_home_position(5.0, 5.0);

        assert_eq!(config.acceleration, 1000.0);
        assert_eq!(config.junction_delay, 0.0);
        assert_eq!(config.burn_dwell, 0.2);
        assert_eq!(config.home(), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_vector_speed() {
        let config = base();
        assert_eq!(config.vector_speed(true), 10.0);
        assert_eq!(config.vector_speed(false), 50.0);
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let config = MachineConfig::new(10.0, 50.0, 100.0, bad);
            let err = config.validate().unwrap_err();
            assert!(matches!(
                err,
                Error::InvalidParameter { name: "transit_speed", .. }
            ));
        }
    }

    #[test]
    fn test_infinite_acceleration_is_valid() {
        assert!(base().with_instant_acceleration().validate().is_ok());
        assert!(base().with_acceleration(0.0).validate().is_err());
    }

    #[test]
    fn test_rejects_negative_delays() {
        assert!(base().with_junction_delay(-0.1).validate().is_err());
        assert!(base().with_burn_dwell(-1.0).validate().is_err());
        assert!(base().with_overscan_factor(-0.5).validate().is_err());
        assert!(base().with_scan_gap(0.0).validate().is_err());
    }
}
