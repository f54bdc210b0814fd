//! Laser job time estimation from classified vector paths.
//!
//! Given cut, mark and raster entities, this crate estimates the wall-clock
//! time of the job and breaks it down per operation layer, separating:
//! - Travel (non-burning) time and distance
//! - Burn time and burned length for vector layers
//! - Raster engraving time and area
//!
//! # Algorithm
//!
//! 1. **Transit ordering**: Nearest-neighbor ordering of entities from
//!    machine home, following each entity's start and end points
//! 2. **Motion model**: Trapezoidal (or triangular) velocity profile for
//!    every travel move
//! 3. **Vector accounting**: Per-segment burn time at the layer speed, plus
//!    a junction delay per segment and a dwell per entity
//! 4. **Raster accounting**: Block model over the bounding box, with one
//!    scan line per scan gap and an overscan margin
//! 5. **Report assembly**: Totals, per-layer breakdown and `HH:MM:SS` time
//!
//! # Example
//!
//! ```rust
//! use u_lasertime_core::{LaserEntity, ProcessType};
//! use u_lasertime_estimator::{JobTimeEstimator, MachineConfig};
//!
//! let square = LaserEntity::from_svg("M 0 0 L 100 0 L 100 100 L 0 100 Z", ProcessType::Cut)?;
//! let config = MachineConfig::new(10.0, 50.0, 100.0, 200.0)
//!     .with_burn_dwell(0.0)
//!     .with_junction_delay(0.0);
//! config.validate()?;
//!
//! let report = JobTimeEstimator::new(config).calculate_total_job(&[square]);
//! assert_eq!(report.total_distance_burned, 400.0);
//! assert_eq!(report.formatted_time, "00:00:40");
//! # Ok::<(), u_lasertime_core::Error>(())
//! ```

pub mod config;
pub mod estimator;
pub mod motion;
pub mod result;
pub mod sequence;

pub use config::MachineConfig;
pub use estimator::JobTimeEstimator;
pub use motion::{travel_time, TravelProfile};
pub use result::{format_hms, round2, JobReport, LayerBreakdown, LayerMetrics, RasterMetrics};
pub use sequence::{nearest_neighbor_order, optimize_transit_order, transit_distance};
