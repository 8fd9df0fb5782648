pub const SCREEN_W: f32 = 800.0;
pub const SCREEN_H: f32 = 600.0;

pub const BOID_N: usize = 80;
pub const BOID_SIZE: f32 = 3.0;

pub const MAX_SPEED: f32 = 3.0;
pub const MAX_FORCE: f32 = 0.1;

pub const VIEW_RADIUS: f32 = 50.0;
pub const SEPARATION_RADIUS: f32 = 20.0;
pub const MOUSE_RADIUS: f32 = 150.0;

pub const SEPARATION_WEIGHT: f32 = 1.5;

pub const WIGGLE_ANGLE: f32 = 2.0;
pub const WIGGLE_AMOUNT: f32 = 1.5;

pub const PARAM_STEP: f32 = 10.0;
pub const MENU_OFFSET: f32 = 10.0;
pub const MENU_SPACING: f32 = 30.0;
pub const MENU_FONT_SIZE: f32 = 20.0;
