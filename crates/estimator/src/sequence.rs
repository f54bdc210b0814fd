//! Transit ordering of laser entities.
//!
//! Determines the order in which entities are processed, reducing
//! non-burning travel between them.
//!
//! # Algorithm
//!
//! **Nearest Neighbor (NN)**: starting from machine home, repeatedly pick
//! the unvisited entity whose start point is closest to the current head
//! position, then move the head to that entity's end point. Ties go to the
//! entity met first in input order. O(n²) in the number of entities, which
//! stays small for a single job. No improvement pass follows: the order is
//! a heuristic, not an optimal tour.

use u_lasertime_core::{distance, point_distance, LaserEntity, Point};

/// Nearest-neighbor visiting order, as indices into `entities`.
///
/// Entities with an empty path are taken as soon as the scan meets them.
/// An entity whose start point cannot be resolved is treated as lying at
/// the current position.
pub fn nearest_neighbor_order(entities: &[LaserEntity], home: Point) -> Vec<usize> {
    let n = entities.len();
    let mut unvisited: Vec<usize> = (0..n).collect();
    let mut order = Vec::with_capacity(n);
    let mut current_pos = home;

    while !unvisited.is_empty() {
        let mut best_slot = 0;
        let mut best_dist = f64::INFINITY;

        for (slot, &idx) in unvisited.iter().enumerate() {
            let path = &entities[idx].path;
            if path.is_empty() {
                best_slot = slot;
                break;
            }

            let start = path.start_point().unwrap_or(current_pos);
            let dist = point_distance(current_pos, start);
            if dist < best_dist {
                best_dist = dist;
                best_slot = slot;
            }
        }

        let idx = unvisited.remove(best_slot);
        order.push(idx);

        if let Some(end) = entities[idx].path.end_point() {
            current_pos = end;
        }
    }

    order
}

/// Reorders entities with [`nearest_neighbor_order`], borrowing them.
pub fn optimize_transit_order(entities: &[LaserEntity], home: Point) -> Vec<&LaserEntity> {
    let order = nearest_neighbor_order(entities, home);
    log::debug!(
        "Transit order for {} entities: {:?}",
        entities.len(),
        order
    );
    order.into_iter().map(|i| &entities[i]).collect()
}

/// Straight-line transit distance of visiting entities in the given order.
///
/// Sums the gaps from home to the first start point and from each end
/// point to the next start point. Useful to compare candidate orders.
pub fn transit_distance(order: &[&LaserEntity], home: Point) -> f64 {
    let mut current = Some(home);
    let mut total = 0.0;

    for entity in order {
        total += distance(current, entity.path.start_point());
        if let Some(end) = entity.path.end_point() {
            current = Some(end);
        }
    }

    total
}
