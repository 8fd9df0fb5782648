use specs::prelude::*;
use rand::prelude::*;
use std::f32::consts::TAU;
use crate::components::*;
use crate::globals::*;
use crate::params::{FlockParams, Pointer};
use crate::systems::{IntegrateSystem, SteeringSystem};

/// Owns the boid population and the shared tunables, and advances the whole
/// flock one tick at a time.
///
/// A tick is two phases: every boid's steering is computed against the
/// start-of-tick snapshot, then every boid integrates. The two-phase split
/// makes the result independent of evaluation order.
pub struct FlockField {
    world: World,
    updater: Dispatcher<'static, 'static>,
}

impl FlockField {
    /// An empty field with default parameters. `spawn` adds boids.
    pub fn new() -> Self {
        let mut world = World::new();
        let mut updater = DispatcherBuilder::new()
            .with(SteeringSystem, "steering", &[])
            .with(IntegrateSystem, "integrate", &["steering"])
            .build();
        updater.setup(&mut world);
        world.insert(FlockParams::default());
        // off at infinity until the first tick supplies a real pointer
        world.insert(Pointer(Point2::new(f32::INFINITY, f32::INFINITY)));
        Self { world, updater }
    }

    /// A field of `count` boids at uniformly random positions, headed in
    /// uniformly random directions at full speed.
    pub fn with_random_boids(count: usize) -> Self {
        let mut field = Self::new();
        let max_speed = field.params().max_speed;
        let mut rng = thread_rng();
        for _ in 0..count {
            let pos = Point2::new(rng.gen_range(0.0, SCREEN_W), rng.gen_range(0.0, SCREEN_H));
            let angle = rng.gen::<f32>() * TAU;
            let vel = Vector2::new(angle.cos(), angle.sin()) * max_speed;
            field.spawn(pos, vel);
        }
        field
    }

    pub fn spawn(&mut self, pos: Point2, vel: Vector2) {
        self.world
            .create_entity()
            .with(Pos(pos))
            .with(Vel(vel))
            .with(Acc(Vector2::zeros()))
            .build();
    }

    /// Advances every boid by one tick against `pointer`, this frame's
    /// stimulus position.
    pub fn tick(&mut self, pointer: Point2) {
        self.world.insert(Pointer(pointer));
        self.updater.dispatch(&self.world);
    }

    pub fn params(&self) -> FlockParams {
        *self.world.read_resource::<FlockParams>()
    }

    /// Replaces the shared parameters. Only valid between ticks; the menu
    /// and key handlers are the intended callers.
    pub fn set_params(&mut self, params: FlockParams) {
        self.world.insert(params);
    }

    /// Position/velocity snapshot in spawn order, for tests and anything
    /// else that wants the state without joining storages itself.
    pub fn snapshot(&self) -> Vec<(Point2, Vector2)> {
        let positions = self.world.read_storage::<Pos>();
        let velocities = self.world.read_storage::<Vel>();
        (&positions, &velocities)
            .join()
            .map(|(p, v)| (p.0, v.0))
            .collect()
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}
