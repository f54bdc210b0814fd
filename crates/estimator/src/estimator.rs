//! Job time estimation and public API.
//!
//! Combines transit ordering, the travel profile and per-entity accounting
//! into a complete job report.

use u_lasertime_core::{
    bounding_box, point_distance, raster_dimensions, LaserEntity, Point, ProcessType, Segment,
};

use crate::config::MachineConfig;
use crate::motion::TravelProfile;
use crate::result::{JobReport, LayerBreakdown, LayerMetrics};
use crate::sequence::optimize_transit_order;

/// Estimates laser job execution time from classified entities.
#[derive(Debug, Clone)]
pub struct JobTimeEstimator {
    config: MachineConfig,
}

impl JobTimeEstimator {
    /// Creates an estimator for the given machine.
    pub fn new(config: MachineConfig) -> Self {
        Self { config }
    }

    /// Returns the machine configuration.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    fn transit_profile(&self) -> TravelProfile {
        TravelProfile::new(self.config.transit_speed, self.config.acceleration)
    }

    /// Raster block time for a `width` × `height` area.
    ///
    /// One scan line per `scan_gap` of height, each `width / speed` long,
    /// plus the overscan fraction. Zero if either dimension is zero.
    pub fn raster_time(&self, width: f64, height: f64) -> f64 {
        if width == 0.0 || height == 0.0 {
            return 0.0;
        }

        let time_per_pass = width / self.config.raster_engrave_speed;
        let passes = height / self.config.scan_gap;
        let base_time = time_per_pass * passes;
        let overscan_time = base_time * self.config.overscan_factor;
        base_time + overscan_time
    }

    /// Processing time of a single entity, excluding any travel.
    ///
    /// Cut and mark entities pay the burn dwell plus length / speed and a
    /// junction delay per drawable segment. Raster entities use the block
    /// model of [`raster_time`](Self::raster_time). An entity without
    /// segments takes no time.
    pub fn entity_time(&self, entity: &LaserEntity) -> f64 {
        if entity.path.is_empty() {
            return 0.0;
        }

        match entity.process_type {
            ProcessType::Raster => {
                let (width, height) = raster_dimensions(&entity.path);
                self.raster_time(width, height)
            }
            ProcessType::Cut | ProcessType::Mark => {
                let speed = self
                    .config
                    .vector_speed(entity.process_type == ProcessType::Cut);
                let burn: f64 = entity
                    .path
                    .segments()
                    .iter()
                    .filter(|seg| !seg.is_move())
                    .map(|seg| {
                        seg.length(self.config.length_accuracy) / speed + self.config.junction_delay
                    })
                    .sum();
                self.config.burn_dwell + burn
            }
        }
    }

    /// Estimates the full job.
    ///
    /// Entities are first reordered by nearest neighbor from machine home,
    /// then processed in that order while tracking the head position.
    /// An empty input yields an all-zero report.
    pub fn calculate_total_job(&self, entities: &[LaserEntity]) -> JobReport {
        let ordered = optimize_transit_order(entities, self.config.home());

        let mut pass = EstimationPass::new(self.config.home());
        for entity in ordered {
            log::debug!(
                "Processing {} entity with {} segments",
                entity.process_type,
                entity.path.segments().len()
            );
            match entity.process_type {
                ProcessType::Raster => self.process_raster(&mut pass, entity),
                ProcessType::Cut | ProcessType::Mark => self.process_vector(&mut pass, entity),
            }
        }

        let report = pass.finish();
        log::info!(
            "Estimated {} entities: {} ({:.2} s, transit {:.2} s)",
            entities.len(),
            report.formatted_time,
            report.total_time,
            report.transit_time
        );
        report
    }

    fn process_raster(&self, pass: &mut EstimationPass, entity: &LaserEntity) {
        let (width, height) = raster_dimensions(&entity.path);
        if width == 0.0 || height == 0.0 {
            log::warn!("Skipping raster entity with degenerate size {width} x {height}");
            return;
        }

        let bbox = bounding_box(&entity.path);
        pass.travel_to(bbox.top_left(), &self.transit_profile());

        let time = self.raster_time(width, height);
        pass.total_time += time;
        pass.layers.raster.time += time;
        pass.layers.raster.area += width * height;

        pass.position = bbox.bottom_right();
    }

    fn process_vector(&self, pass: &mut EstimationPass, entity: &LaserEntity) {
        if entity.path.is_empty() {
            log::warn!("Skipping {} entity with no path segments", entity.process_type);
            return;
        }

        let is_cut = entity.process_type == ProcessType::Cut;
        let speed = self.config.vector_speed(is_cut);
        let profile = self.transit_profile();

        let dwell = self.config.burn_dwell;
        pass.total_time += dwell;
        pass.layer_mut(is_cut).time += dwell;

        for segment in entity.path.segments() {
            match segment {
                Segment::Move { end, .. } => pass.travel_to(*end, &profile),
                Segment::Draw(_) => {
                    let length = segment.length(self.config.length_accuracy);
                    let time = length / speed + self.config.junction_delay;
                    log::trace!("Burn {length:.3} mm in {time:.3} s");

                    pass.total_time += time;
                    pass.total_distance_burned += length;
                    let layer = pass.layer_mut(is_cut);
                    layer.time += time;
                    layer.distance += length;

                    pass.position = segment.end();
                }
            }
        }
    }
}

/// Running state of a single estimation pass.
///
/// Owns the head position and every accumulator; entities must be fed in
/// visiting order since travel depends on where the previous one ended.
#[derive(Debug)]
struct EstimationPass {
    position: Point,
    total_time: f64,
    transit_time: f64,
    total_distance_burned: f64,
    total_distance_transit: f64,
    layers: LayerBreakdown,
}

impl EstimationPass {
    fn new(home: Point) -> Self {
        Self {
            position: home,
            total_time: 0.0,
            transit_time: 0.0,
            total_distance_burned: 0.0,
            total_distance_transit: 0.0,
            layers: LayerBreakdown::default(),
        }
    }

    fn layer_mut(&mut self, is_cut: bool) -> &mut LayerMetrics {
        if is_cut {
            &mut self.layers.cut
        } else {
            &mut self.layers.mark
        }
    }

    /// Moves the head with the beam off, accounting transit distance and time.
    fn travel_to(&mut self, target: Point, profile: &TravelProfile) {
        let dist = point_distance(self.position, target);
        let time = profile.time(dist);
        log::trace!("Transit {dist:.3} mm in {time:.3} s");

        self.total_distance_transit += dist;
        self.transit_time += time;
        self.total_time += time;
        self.position = target;
    }

    fn finish(self) -> JobReport {
        JobReport::from_totals(
            self.total_time,
            self.transit_time,
            self.total_distance_burned,
            self.total_distance_transit,
            self.layers,
        )
    }
}
