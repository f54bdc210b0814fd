//! Result types for job time estimation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use u_lasertime_core::ProcessType;

/// Accumulated time and burned length of a vector layer (cut or mark).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayerMetrics {
    /// Burn time in seconds, including dwell and junction delays.
    pub time: f64,
    /// Burned length in mm.
    pub distance: f64,
}

/// Accumulated time and engraved area of the raster layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RasterMetrics {
    /// Engraving time in seconds, including overscan.
    pub time: f64,
    /// Engraved bounding-box area in mm².
    pub area: f64,
}

/// Per-operation breakdown of a job.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayerBreakdown {
    /// Cut layer.
    pub cut: LayerMetrics,
    /// Mark layer.
    pub mark: LayerMetrics,
    /// Raster layer.
    pub raster: RasterMetrics,
}

impl LayerBreakdown {
    /// Time spent on the given layer.
    pub fn time(&self, process: ProcessType) -> f64 {
        match process {
            ProcessType::Cut => self.cut.time,
            ProcessType::Mark => self.mark.time,
            ProcessType::Raster => self.raster.time,
        }
    }

    /// Burned length (cut, mark) or engraved area (raster) of the given layer.
    pub fn amount(&self, process: ProcessType) -> f64 {
        match process {
            ProcessType::Cut => self.cut.distance,
            ProcessType::Mark => self.mark.distance,
            ProcessType::Raster => self.raster.area,
        }
    }

    fn rounded(&self) -> Self {
        Self {
            cut: LayerMetrics {
                time: round2(self.cut.time),
                distance: round2(self.cut.distance),
            },
            mark: LayerMetrics {
                time: round2(self.mark.time),
                distance: round2(self.mark.distance),
            },
            raster: RasterMetrics {
                time: round2(self.raster.time),
                area: round2(self.raster.area),
            },
        }
    }
}

/// Final time-and-distance report of a laser job.
///
/// Numeric fields are rounded to two decimals; `formatted_time` is derived
/// from the unrounded total.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JobReport {
    /// Estimated wall-clock time of the whole job (s).
    #[cfg_attr(feature = "serde", serde(rename = "estimated_total_time_seconds"))]
    pub total_time: f64,

    /// `total_time` as zero-padded `HH:MM:SS`.
    pub formatted_time: String,

    /// Part of `total_time` spent on non-burning travel (s).
    #[cfg_attr(feature = "serde", serde(rename = "transit_time_seconds"))]
    pub transit_time: f64,

    /// Total burned vector length (mm).
    #[cfg_attr(feature = "serde", serde(rename = "total_distance_burned_mm"))]
    pub total_distance_burned: f64,

    /// Total non-burning travel length (mm).
    #[cfg_attr(feature = "serde", serde(rename = "total_distance_transit_mm"))]
    pub total_distance_transit: f64,

    /// Per-operation breakdown.
    pub layer_breakdown: LayerBreakdown,
}

impl JobReport {
    /// Builds a report from raw accumulated values, rounding as it goes.
    pub fn from_totals(
        total_time: f64,
        transit_time: f64,
        total_distance_burned: f64,
        total_distance_transit: f64,
        layer_breakdown: LayerBreakdown,
    ) -> Self {
        Self {
            total_time: round2(total_time),
            formatted_time: format_hms(total_time),
            transit_time: round2(transit_time),
            total_distance_burned: round2(total_distance_burned),
            total_distance_transit: round2(total_distance_transit),
            layer_breakdown: layer_breakdown.rounded(),
        }
    }

    /// Returns the total head travel (burned + transit).
    pub fn total_distance(&self) -> f64 {
        self.total_distance_burned + self.total_distance_transit
    }

    /// Returns the time the beam is busy (total minus transit).
    pub fn burn_time(&self) -> f64 {
        self.total_time - self.transit_time
    }
}

/// Rounds to two decimal places.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats seconds as zero-padded `HH:MM:SS`, truncating fractions.
///
/// Hours are not wrapped at 24. Negative or non-finite input formats as
/// `00:00:00`.
pub fn format_hms(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_report() {
        let report = JobReport::from_totals(0.0, 0.0, 0.0, 0.0, LayerBreakdown::default());
        assert_eq!(report.formatted_time, "00:00:00");
        assert_eq!(report.total_distance(), 0.0);
        assert_eq!(report.burn_time(), 0.0);
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(0.0), "00:00:00");
        assert_eq!(format_hms(59.99), "00:00:59");
        assert_eq!(format_hms(3661.5), "01:01:01");
        assert_eq!(format_hms(100.0 * 3600.0), "100:00:00");
        assert_eq!(format_hms(-4.0), "00:00:00");
        assert_eq!(format_hms(f64::NAN), "00:00:00");
    }

    #[test]
    fn test_round2() {
        assert_relative_eq!(round2(1.23456), 1.23);
        assert_relative_eq!(round2(2.675_1), 2.68);
        assert_relative_eq!(round2(550.0), 550.0);
    }

    #[test]
    fn test_formatted_time_uses_unrounded_total() {
        // 59.996 rounds to 60.00 but formats as 59 whole seconds
        let report = JobReport::from_totals(59.996, 0.0, 0.0, 0.0, LayerBreakdown::default());
        assert_relative_eq!(report.total_time, 60.0);
        assert_eq!(report.formatted_time, "00:00:59");
    }

    #[test]
    fn test_breakdown_lookup() {
        let breakdown = LayerBreakdown {
            cut: LayerMetrics {
                time: 1.0,
                distance: 10.0,
            },
            mark: LayerMetrics {
                time: 2.0,
                distance: 20.0,
            },
            raster: RasterMetrics {
                time: 3.0,
                area: 30.0,
            },
        };
        assert_eq!(breakdown.time(ProcessType::Mark), 2.0);
        assert_eq!(breakdown.amount(ProcessType::Raster), 30.0);
    }

    #[test]
    fn test_burn_time() {
        let report = JobReport::from_totals(10.0, 2.5, 100.0, 40.0, LayerBreakdown::default());
        assert_relative_eq!(report.burn_time(), 7.5);
        assert_relative_eq!(report.total_distance(), 140.0);
    }
}
