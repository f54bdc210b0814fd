//! Travel time under a trapezoidal velocity profile.
//!
//! Travel moves do not reach their target speed instantly. The head
//! accelerates, cruises and decelerates; when the move is too short to reach
//! the target speed the cruise phase vanishes and the profile becomes
//! triangular.
//!
//! ```text
//! d_acc = v² / (2a)
//!
//! d >= 2·d_acc:  t = 2·v/a + (d − 2·d_acc) / v        (trapezoid)
//! d <  2·d_acc:  t = 2·√(d·a) / a                      (triangle)
//! ```
//!
//! The two branches meet at `d = 2·d_acc`, where both give `2·v/a`.

/// Distance needed to accelerate from rest to `target_speed`.
#[inline]
pub fn accel_distance(target_speed: f64, acceleration: f64) -> f64 {
    target_speed * target_speed / (2.0 * acceleration)
}

/// Time to traverse `distance` starting and ending at rest.
///
/// Returns 0 for non-positive distances. An infinite `acceleration`
/// degenerates to `distance / target_speed`.
pub fn travel_time(distance: f64, target_speed: f64, acceleration: f64) -> f64 {
    if distance <= 0.0 {
        return 0.0;
    }

    let d_acc = accel_distance(target_speed, acceleration);

    if distance >= 2.0 * d_acc {
        let ramp = 2.0 * (target_speed / acceleration);
        let cruise = (distance - 2.0 * d_acc) / target_speed;
        ramp + cruise
    } else {
        let peak_speed = (distance * acceleration).sqrt();
        2.0 * peak_speed / acceleration
    }
}

/// A target speed and acceleration pair for repeated travel queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelProfile {
    /// Cruise speed (mm/s).
    pub target_speed: f64,
    /// Acceleration and deceleration (mm/s²).
    pub acceleration: f64,
}

impl TravelProfile {
    /// Creates a new profile.
    pub fn new(target_speed: f64, acceleration: f64) -> Self {
        Self {
            target_speed,
            acceleration,
        }
    }

    /// Time to traverse `distance` under this profile.
    pub fn time(&self, distance: f64) -> f64 {
        travel_time(distance, self.target_speed, self.acceleration)
    }

    /// Shortest move that reaches the target speed.
    pub fn cruise_threshold(&self) -> f64 {
        2.0 * accel_distance(self.target_speed, self.acceleration)
    }
}
