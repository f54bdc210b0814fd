//! Classified laser entities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::LaserPath;

/// Laser operation applied to an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProcessType {
    /// Vector cut through the material.
    Cut,
    /// Vector engraving (marking) along the path.
    Mark,
    /// Raster engraving of the path's bounding box.
    Raster,
}

impl ProcessType {
    /// All process types in report order.
    pub const ALL: [ProcessType; 3] = [Self::Cut, Self::Mark, Self::Raster];

    /// Lowercase name used in reports and job files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cut => "cut",
            Self::Mark => "mark",
            Self::Raster => "raster",
        }
    }

    /// Returns true for the segment-wise vector operations.
    pub fn is_vector(&self) -> bool {
        matches!(self, Self::Cut | Self::Mark)
    }
}

impl fmt::Display for ProcessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cut" => Ok(Self::Cut),
            "mark" => Ok(Self::Mark),
            "raster" => Ok(Self::Raster),
            _ => Err(Error::UnknownProcessType(s.to_string())),
        }
    }
}

/// One classified vector shape with its assigned laser operation.
#[derive(Debug, Clone, PartialEq)]
pub struct LaserEntity {
    /// Geometry of the shape.
    pub path: LaserPath,
    /// Operation the classifier assigned.
    pub process_type: ProcessType,
}

impl LaserEntity {
    /// Creates a new entity.
    pub fn new(path: LaserPath, process_type: ProcessType) -> Self {
        Self { path, process_type }
    }

    /// Creates an entity from SVG path data.
    pub fn from_svg(data: &str, process_type: ProcessType) -> Result<Self> {
        Ok(Self::new(LaserPath::from_svg(data)?, process_type))
    }

    /// Creates a cut entity.
    pub fn cut(path: LaserPath) -> Self {
        Self::new(path, ProcessType::Cut)
    }

    /// Creates a mark entity.
    pub fn mark(path: LaserPath) -> Self {
        Self::new(path, ProcessType::Mark)
    }

    /// Creates a raster entity.
    pub fn raster(path: LaserPath) -> Self {
        Self::new(path, ProcessType::Raster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_process_type() {
        assert_eq!("cut".parse::<ProcessType>().unwrap(), ProcessType::Cut);
        assert_eq!(" Mark ".parse::<ProcessType>().unwrap(), ProcessType::Mark);
        assert_eq!("RASTER".parse::<ProcessType>().unwrap(), ProcessType::Raster);
    }

    #[test]
    fn test_unknown_process_type_rejected() {
        let err = "weld".parse::<ProcessType>().unwrap_err();
        assert!(matches!(err, Error::UnknownProcessType(ref s) if s == "weld"));
    }

    #[test]
    fn test_display_roundtrips() {
        for pt in ProcessType::ALL {
            assert_eq!(pt.to_string().parse::<ProcessType>().unwrap(), pt);
        }
    }

    #[test]
    fn test_is_vector() {
        assert!(ProcessType::Cut.is_vector());
        assert!(ProcessType::Mark.is_vector());
        assert!(!ProcessType::Raster.is_vector());
    }

    #[test]
    fn test_from_svg() {
        let e = LaserEntity::from_svg("M 0 0 L 10 0", ProcessType::Cut).unwrap();
        assert_eq!(e.process_type, ProcessType::Cut);
        assert_eq!(e.path.segments().len(), 2);
    }
}
