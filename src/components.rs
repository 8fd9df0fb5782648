use specs::{Component, storage::*};
use nalgebra as na;

pub type Point2 = na::Point2<f32>;
pub type Vector2 = na::Vector2<f32>;

/// Boid position, wrapped into `[0, SCREEN_W) x [0, SCREEN_H)` each tick.
#[derive(Copy, Clone, Debug, Component)]
#[storage(DenseVecStorage)]
pub struct Pos(pub Point2);

/// Boid velocity, capped at `max_speed` after integration.
#[derive(Copy, Clone, Debug, Component)]
#[storage(DenseVecStorage)]
pub struct Vel(pub Vector2);

/// Pending acceleration. Accumulates steering forces during a tick and is
/// zeroed again by integration; never carried across ticks.
#[derive(Copy, Clone, Debug, Component)]
#[storage(DenseVecStorage)]
pub struct Acc(pub Vector2);
