use nalgebra::distance;
use crate::components::{Point2, Vector2};
use crate::globals::SEPARATION_WEIGHT;
use crate::params::FlockParams;

/// Per-boid aggregates from one pass over the rest of the flock.
///
/// Separation accumulates on its own (tighter) radius; alignment and
/// cohesion share the view radius and the `total` count. `total` is also
/// the divisor for the separation average, even though the two radii
/// disagree.
#[derive(Copy, Clone, Debug)]
pub struct NeighborSums {
    pub alignment: Vector2,
    pub cohesion: Vector2,
    pub separation: Vector2,
    pub total: usize,
}

impl NeighborSums {
    pub fn new() -> Self {
        Self {
            alignment: Vector2::zeros(),
            cohesion: Vector2::zeros(),
            separation: Vector2::zeros(),
            total: 0,
        }
    }

    /// Folds one other boid into the aggregates. Exactly coincident pairs
    /// contribute no separation (the inverse-distance weight is undefined
    /// there) but still count as view neighbors.
    pub fn accumulate(
        &mut self,
        pos: Point2,
        other_pos: Point2,
        other_vel: Vector2,
        params: &FlockParams,
    ) {
        let d = distance(&pos, &other_pos);
        if d > 0.0 && d < params.separation_radius {
            self.separation += (pos - other_pos) / d;
        }
        if d < params.view_radius {
            self.alignment += other_vel;
            self.cohesion += other_pos.coords;
            self.total += 1;
        }
    }
}

/// Caps `v` at magnitude `max`, rescaling to exactly `max` when above it.
pub fn limit(v: Vector2, max: f32) -> Vector2 {
    let mag = v.norm();
    if mag > max {
        v * (max / mag)
    } else {
        v
    }
}

/// Reynolds steering: `desired` rescaled to full speed, minus the current
/// velocity, capped at `max_force`. `None` when `desired` has no direction,
/// so callers skip the force instead of propagating NaN.
fn steer(desired: Vector2, vel: Vector2, max_speed: f32, max_force: f32) -> Option<Vector2> {
    let mag = desired.norm();
    if mag == 0.0 {
        return None;
    }
    Some(limit(desired * (max_speed / mag) - vel, max_force))
}

/// Steers toward the average heading of view neighbors.
pub fn alignment_force(sums: &NeighborSums, vel: Vector2, params: &FlockParams) -> Vector2 {
    if sums.total == 0 {
        return Vector2::zeros();
    }
    let desired = sums.alignment / sums.total as f32;
    steer(desired, vel, params.max_speed, params.max_force).unwrap_or_else(Vector2::zeros)
}

/// Steers toward the centroid of view neighbors.
pub fn cohesion_force(
    sums: &NeighborSums,
    pos: Point2,
    vel: Vector2,
    params: &FlockParams,
) -> Vector2 {
    if sums.total == 0 {
        return Vector2::zeros();
    }
    let desired = sums.cohesion / sums.total as f32 - pos.coords;
    steer(desired, vel, params.max_speed, params.max_force).unwrap_or_else(Vector2::zeros)
}

/// Steers away from crowding neighbors. Weighted 1.5x and allowed twice the
/// force cap so avoidance wins when the forces conflict. Gated on the view
/// neighbor count like the other two forces.
pub fn separation_force(sums: &NeighborSums, vel: Vector2, params: &FlockParams) -> Vector2 {
    if sums.total == 0 {
        return Vector2::zeros();
    }
    let avg = sums.separation / sums.total as f32;
    let mag = avg.norm();
    if mag == 0.0 {
        return Vector2::zeros();
    }
    let force = (avg * (params.max_speed / mag) - vel) * SEPARATION_WEIGHT;
    limit(force, 2.0 * params.max_force)
}

/// Flees the pointer (or seeks it when `repel_mode` is off) once within
/// `mouse_radius`. A pointer sitting exactly on the boid applies nothing.
pub fn pointer_force(
    pos: Point2,
    vel: Vector2,
    pointer: Point2,
    params: &FlockParams,
) -> Vector2 {
    if distance(&pos, &pointer) >= params.mouse_radius {
        return Vector2::zeros();
    }
    let dir = if params.repel_mode {
        pos - pointer
    } else {
        pointer - pos
    };
    steer(dir, vel, params.max_speed, params.max_force).unwrap_or_else(Vector2::zeros)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn params() -> FlockParams {
        FlockParams::default()
    }

    #[test]
    fn limit_caps_long_vectors_only() {
        let capped = limit(Vector2::new(3.0, 4.0), 1.0);
        assert!((capped.norm() - 1.0).abs() < EPS);
        assert!((capped.x - 0.6).abs() < EPS);

        let short = limit(Vector2::new(0.3, 0.4), 1.0);
        assert_eq!(short, Vector2::new(0.3, 0.4));
    }

    #[test]
    fn accumulate_splits_by_radius() {
        let p = params();
        let mut sums = NeighborSums::new();
        let pos = Point2::new(0.0, 0.0);

        // inside the separation radius: contributes to all three
        sums.accumulate(pos, Point2::new(10.0, 0.0), Vector2::new(0.0, 1.0), &p);
        assert_eq!(sums.separation, Vector2::new(-1.0, 0.0));
        assert_eq!(sums.total, 1);

        // inside view only: no separation contribution
        sums.accumulate(pos, Point2::new(30.0, 0.0), Vector2::new(0.0, 1.0), &p);
        assert_eq!(sums.separation, Vector2::new(-1.0, 0.0));
        assert_eq!(sums.alignment, Vector2::new(0.0, 2.0));
        assert_eq!(sums.total, 2);

        // outside view: ignored entirely
        sums.accumulate(pos, Point2::new(100.0, 0.0), Vector2::new(5.0, 5.0), &p);
        assert_eq!(sums.total, 2);
    }

    #[test]
    fn coincident_neighbor_adds_no_separation() {
        let p = params();
        let mut sums = NeighborSums::new();
        let pos = Point2::new(5.0, 5.0);
        sums.accumulate(pos, pos, Vector2::new(1.0, 0.0), &p);
        assert_eq!(sums.separation, Vector2::zeros());
        assert_eq!(sums.total, 1);
        assert!(sums.separation.x.is_finite());
    }

    #[test]
    fn forces_are_zero_without_view_neighbors() {
        let p = params();
        let mut sums = NeighborSums::new();
        // a crowding neighbor that is somehow outside the view radius
        sums.separation = Vector2::new(-1.0, 0.0);
        let vel = Vector2::new(1.0, 0.0);
        assert_eq!(alignment_force(&sums, vel, &p), Vector2::zeros());
        assert_eq!(cohesion_force(&sums, Point2::new(0.0, 0.0), vel, &p), Vector2::zeros());
        assert_eq!(separation_force(&sums, vel, &p), Vector2::zeros());
    }

    #[test]
    fn zero_length_desired_skips_the_force() {
        let p = params();
        let mut sums = NeighborSums::new();
        let pos = Point2::new(0.0, 0.0);
        // two neighbors whose velocities cancel exactly
        sums.accumulate(pos, Point2::new(30.0, 0.0), Vector2::new(2.0, 0.0), &p);
        sums.accumulate(pos, Point2::new(0.0, 30.0), Vector2::new(-2.0, 0.0), &p);
        let force = alignment_force(&sums, Vector2::new(1.0, 0.0), &p);
        assert_eq!(force, Vector2::zeros());
    }

    #[test]
    fn two_boid_scenario_force_magnitudes() {
        // boid at (10,0) looking at a neighbor at (0,0), both moving (1,0)
        let p = params();
        let pos = Point2::new(10.0, 0.0);
        let vel = Vector2::new(1.0, 0.0);
        let mut sums = NeighborSums::new();
        sums.accumulate(pos, Point2::new(0.0, 0.0), Vector2::new(1.0, 0.0), &p);

        let align = alignment_force(&sums, vel, &p);
        let cohere = cohesion_force(&sums, pos, vel, &p);
        let separate = separation_force(&sums, vel, &p);

        // alignment wants full speed along the shared heading
        assert!((align.x - p.max_force).abs() < EPS);
        // cohesion pulls back toward the neighbor, capped at max_force
        assert!((cohere.x + p.max_force).abs() < EPS);
        // separation pushes away at the doubled cap
        assert!((separate.x - 2.0 * p.max_force).abs() < EPS);
        assert!(separate.norm() >= align.norm());
        assert!(separate.norm() >= cohere.norm());
    }

    #[test]
    fn pointer_force_repels_and_attracts() {
        let mut p = params();
        let pos = Point2::new(400.0, 300.0);
        let vel = Vector2::new(1.0, 0.0);
        let pointer = Point2::new(450.0, 300.0);

        let repel = pointer_force(pos, vel, pointer, &p);
        assert!((repel.x + p.max_force).abs() < EPS);

        p.repel_mode = false;
        let attract = pointer_force(pos, vel, pointer, &p);
        assert!((attract.x - p.max_force).abs() < EPS);
    }

    #[test]
    fn pointer_force_ignores_far_and_coincident_pointers() {
        let p = params();
        let pos = Point2::new(400.0, 300.0);
        let vel = Vector2::new(1.0, 0.0);

        let far = pointer_force(pos, vel, Point2::new(4000.0, 300.0), &p);
        assert_eq!(far, Vector2::zeros());

        // exactly on the boid: zero-length direction, force skipped
        let on_top = pointer_force(pos, vel, pos, &p);
        assert_eq!(on_top, Vector2::zeros());
        assert!(on_top.x.is_finite() && on_top.y.is_finite());
    }
}
