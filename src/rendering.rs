use ggez::{
    Context, GameResult,
    graphics::{self, Color, DrawMode, MeshBuilder},
};

use crate::{color::parse_color, state::SceneState};

pub struct Renderer {
    background: Color,
}

impl Renderer {
    pub fn new(background: &str) -> Self {
        Self {
            background: parse_color(background).unwrap_or(Color::WHITE),
        }
    }

    pub fn draw(&self, ctx: &mut Context, scene: &SceneState) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, self.background);

        // an empty mesh cannot be uploaded
        if !scene.balls.is_empty() {
            let mut mb = MeshBuilder::new();
            for ball in &scene.balls {
                let c = parse_color(&ball.color).unwrap_or(Color::BLACK);
                mb.circle(DrawMode::fill(), ball.pos, ball.radius, 0.5, c)?;
            }
            let mesh = graphics::Mesh::from_data(&ctx.gfx, mb.build());
            canvas.draw(&mesh, graphics::DrawParam::default());
        }

        canvas.finish(ctx)
    }
}
