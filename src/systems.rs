use ggez::{Context, graphics::*};
use specs::prelude::*;
use nalgebra as na;
use rand::prelude::*;
use crate::components::*;
use crate::params::{FlockParams, Pointer};
use crate::steering::{self, NeighborSums};
use crate::globals::*;

/// Phase 1: every boid scans the whole flock (start-of-tick snapshot) and
/// writes its steering forces into `Acc`. Reads are shared and each boid
/// writes only its own acceleration, so the parallel join is deterministic.
pub struct SteeringSystem;
impl<'a> System<'a> for SteeringSystem {
	type SystemData = (
		Entities<'a>,
		ReadStorage<'a, Pos>,
		ReadStorage<'a, Vel>,
		WriteStorage<'a, Acc>,
		ReadExpect<'a, FlockParams>,
		ReadExpect<'a, Pointer>,
	);

	fn run(&mut self, (entities, positions, velocities, mut accels, params, pointer): Self::SystemData) {
		let params = *params;
		let pointer = pointer.0;
		(&entities, &positions, &velocities, &mut accels).par_join()
			.for_each(|(ent, pos, vel, acc)| {
				let mut sums = NeighborSums::new();
				for (other, other_pos, other_vel) in (&entities, &positions, &velocities).join() {
					if other == ent {
						continue;
					}
					sums.accumulate(pos.0, other_pos.0, other_vel.0, &params);
				}
				acc.0 = steering::alignment_force(&sums, vel.0, &params)
					+ steering::cohesion_force(&sums, pos.0, vel.0, &params)
					+ steering::separation_force(&sums, vel.0, &params)
					+ steering::pointer_force(pos.0, vel.0, pointer, &params);
			});
	}
}

/// Phase 2: velocity/position integration with the hard speed cap, then the
/// boundary snap. Acceleration is consumed and zeroed here.
pub struct IntegrateSystem;
impl<'a> System<'a> for IntegrateSystem {
	type SystemData = (
		WriteStorage<'a, Pos>,
		WriteStorage<'a, Vel>,
		WriteStorage<'a, Acc>,
		ReadExpect<'a, FlockParams>,
	);

	fn run(&mut self, (mut positions, mut velocities, mut accels, params): Self::SystemData) {
		let max_speed = params.max_speed;
		(&mut positions, &mut velocities, &mut accels).par_join()
			.for_each(|(pos, vel, acc)| {
				vel.0 += acc.0;
				vel.0 = steering::limit(vel.0, max_speed);
				pos.0 += vel.0;
				acc.0 = Vector2::zeros();
				snap_to_bounds(&mut pos.0, SCREEN_W, SCREEN_H);
			});
	}
}

/// A boid leaving one edge lands exactly on the opposite edge; overshoot is
/// discarded (a snap, not a modulo wrap).
fn snap_to_bounds(pos: &mut Point2, width: f32, height: f32) {
	if pos.x > width {
		pos.x = 0.0;
	} else if pos.x < 0.0 {
		pos.x = width;
	}
	if pos.y > height {
		pos.y = 0.0;
	} else if pos.y < 0.0 {
		pos.y = height;
	}
}

/// Draws each boid as a triangle along its heading, with a per-frame random
/// jitter on the rear corners. A boid with zero velocity has no heading and
/// is skipped for the frame.
pub struct DrawSystem<'draw>(&'draw mut Context);
impl<'draw> DrawSystem<'draw> {
	pub fn new(ctx: &'draw mut Context) -> Self {
		Self(ctx)
	}
}
impl<'draw, 'world> System<'world> for DrawSystem<'draw> {
	type SystemData = (
		ReadStorage<'world, Pos>,
		ReadStorage<'world, Vel>,
	);

	fn run(&mut self, (positions, velocities): Self::SystemData) {
		let mut rng = thread_rng();
		let mut mesh = MeshBuilder::new();
		let rot_l = na::Rotation2::new(WIGGLE_ANGLE);
		let rot_r = na::Rotation2::new(-WIGGLE_ANGLE);
		let body = Color::from_rgb(200, 200, 255);
		let mut drawn = 0;
		for (pos, vel) in (&positions, &velocities).join() {
			let speed = vel.0.norm();
			if speed == 0.0 {
				continue;
			}
			let dir = vel.0 / speed;
			let nose = pos.0 + dir * (BOID_SIZE * 2.0);
			let left = pos.0 + rot_l * dir * BOID_SIZE + jitter(&mut rng);
			let right = pos.0 + rot_r * dir * BOID_SIZE + jitter(&mut rng);
			mesh.polygon(DrawMode::fill(), &[nose, left, right], body).unwrap();
			drawn += 1;
		}
		if drawn > 0 {
			let mesh = mesh.build(self.0).unwrap();
			draw(self.0, &mesh, (Point2::new(0.0, 0.0), 0.0, WHITE)).unwrap();
		}
	}
}

fn jitter(rng: &mut ThreadRng) -> Vector2 {
	Vector2::new(
		rng.gen_range(-WIGGLE_AMOUNT, WIGGLE_AMOUNT),
		rng.gen_range(-WIGGLE_AMOUNT, WIGGLE_AMOUNT),
	)
}
