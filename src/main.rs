use ggez::{self, conf, event, graphics, Context, ContextBuilder, GameResult};
use ggez::event::{KeyCode, KeyMods};
use ggez::input::mouse;
use specs::prelude::*;

mod components;
mod flock;
mod globals;
mod params;
mod steering;
mod systems;

use components::Point2;
use flock::FlockField;
use globals::*;
use params::MenuItem;

struct Game {
    flock: FlockField,
    selected: usize,
}

impl Game {
    fn new(_ctx: &mut Context) -> GameResult<Self> {
        Ok(Self {
            flock: FlockField::with_random_boids(BOID_N),
            selected: 0,
        })
    }

    fn adjust_selected(&mut self, delta: f32) {
        let mut params = self.flock.params();
        MenuItem::ALL[self.selected].adjust(&mut params, delta);
        self.flock.set_params(params);
    }

    fn draw_menu(&self, ctx: &mut Context) -> GameResult {
        let params = self.flock.params();
        for (i, item) in MenuItem::ALL.iter().enumerate() {
            let color = if i == self.selected {
                graphics::WHITE
            } else {
                graphics::Color::from_rgb(150, 150, 150)
            };
            let text = graphics::Text::new((
                format!("{}: {}", item.label(), item.value(&params)),
                graphics::Font::default(),
                MENU_FONT_SIZE,
            ));
            let dest = Point2::new(MENU_OFFSET, MENU_OFFSET + i as f32 * MENU_SPACING);
            graphics::draw(ctx, &text, (dest, color))?;
        }
        Ok(())
    }
}

impl event::EventHandler for Game {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let pointer = mouse::position(ctx);
        self.flock.tick(Point2::new(pointer.x, pointer.y));
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        graphics::clear(ctx, graphics::Color::from_rgb(30, 30, 47));
        {
            systems::DrawSystem::new(ctx)
                .run_now(self.flock.world());
        }
        self.draw_menu(ctx)?;
        graphics::present(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, keycode: KeyCode, _keymods: KeyMods, _repeat: bool) {
        let entries = MenuItem::ALL.len();
        match keycode {
            KeyCode::Down => self.selected = (self.selected + 1) % entries,
            KeyCode::Up => self.selected = (self.selected + entries - 1) % entries,
            KeyCode::Right => self.adjust_selected(PARAM_STEP),
            KeyCode::Left => self.adjust_selected(-PARAM_STEP),
            KeyCode::R => {
                let mut params = self.flock.params();
                params.repel_mode = !params.repel_mode;
                self.flock.set_params(params);
            }
            KeyCode::Escape => event::quit(ctx),
            _ => {}
        }
    }
}

fn main() -> GameResult {
    let cb = ContextBuilder::new("flock-field", "flock-field")
        .window_setup(
            conf::WindowSetup::default()
                .title("Boids Simulation")
        )
        .window_mode(
            conf::WindowMode::default()
                .dimensions(SCREEN_W, SCREEN_H)
        );
    let (ctx, event_loop) = &mut cb.build()?;

    let state = &mut Game::new(ctx)?;
    event::run(ctx, event_loop, state)
}
