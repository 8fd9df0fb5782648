use crate::components::Point2;
use crate::globals::*;

/// Shared tunables read by every boid each tick. Owned by the `FlockField`
/// world as a resource; the menu layer mutates it strictly between ticks.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlockParams {
    /// Perception distance for alignment and cohesion neighbors.
    pub view_radius: f32,
    /// Tighter range that triggers the crowd-avoidance force.
    pub separation_radius: f32,
    /// Distance at which boids react to the pointer.
    pub mouse_radius: f32,
    pub max_speed: f32,
    pub max_force: f32,
    /// `true`: flee the pointer; `false`: seek it.
    pub repel_mode: bool,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            view_radius: VIEW_RADIUS,
            separation_radius: SEPARATION_RADIUS,
            mouse_radius: MOUSE_RADIUS,
            max_speed: MAX_SPEED,
            max_force: MAX_FORCE,
            repel_mode: true,
        }
    }
}

/// Current pointer position, refreshed at the start of every tick.
#[derive(Copy, Clone, Debug)]
pub struct Pointer(pub Point2);

/// Parameters exposed in the on-screen adjustment menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuItem {
    ViewRadius,
    MouseRadius,
}

impl MenuItem {
    pub const ALL: [MenuItem; 2] = [MenuItem::ViewRadius, MenuItem::MouseRadius];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::ViewRadius => "VIEW_RADIUS",
            MenuItem::MouseRadius => "MOUSE_RADIUS",
        }
    }

    pub fn value(self, params: &FlockParams) -> f32 {
        match self {
            MenuItem::ViewRadius => params.view_radius,
            MenuItem::MouseRadius => params.mouse_radius,
        }
    }

    /// Steps the parameter by `delta`, flooring at zero so the radii stay
    /// non-negative.
    pub fn adjust(self, params: &mut FlockParams, delta: f32) {
        let slot = match self {
            MenuItem::ViewRadius => &mut params.view_radius,
            MenuItem::MouseRadius => &mut params.mouse_radius,
        };
        *slot = (*slot + delta).max(0.0);
    }
}
