//! # U-LaserTime Core
//!
//! Geometry adapter and data model for the U-LaserTime job estimator.
//!
//! This crate provides the types shared between the estimation engine and
//! the invocation front-ends.
//!
//! ## Core Components
//!
//! - **Paths**: [`LaserPath`], [`Segment`] - a Bézier path decomposed into
//!   travel moves and drawable curves
//! - **Geometry adapter**: [`path_length`], [`bounding_box`],
//!   [`raster_dimensions`], [`distance`] - zero-fallback geometric queries
//! - **Entities**: [`LaserEntity`], [`ProcessType`] - classified shapes
//! - **Errors**: [`Error`], [`Result`]
//!
//! ## Example
//!
//! ```rust
//! use u_lasertime_core::{path_length, LaserEntity, ProcessType, DEFAULT_ERROR_LIMIT};
//!
//! let entity = LaserEntity::from_svg("M 0 0 L 100 0 L 100 100 L 0 100 Z", ProcessType::Cut)?;
//! let length = path_length(&entity.path, DEFAULT_ERROR_LIMIT);
//! assert!((length - 400.0).abs() < 1e-9);
//! # Ok::<(), u_lasertime_core::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod entity;
pub mod error;
pub mod geometry;
pub mod path;

// Re-exports
pub use entity::{LaserEntity, ProcessType};
pub use error::{Error, Result};
pub use geometry::{
    bounding_box, distance, path_length, point_distance, raster_dimensions, BoundingBox,
    DEFAULT_ERROR_LIMIT,
};
pub use kurbo::Point;
pub use path::{LaserPath, Segment};
