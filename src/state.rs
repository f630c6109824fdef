use ggez::glam::Vec2;

use crate::config::SceneConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: String,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, vel: Vec2, color: &str) -> Self {
        debug_assert!(radius > 0.0, "ball radius must be positive");
        Self {
            pos,
            vel,
            radius,
            color: color.to_string(),
        }
    }

    /// Square hit box of side 2*radius centered on the ball, strict on both axes.
    pub fn contains(&self, point: Vec2) -> bool {
        (self.pos.x - point.x).abs() < self.radius && (self.pos.y - point.y).abs() < self.radius
    }
}

/// Where the color menu was opened and which ball it recolors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub pos: Vec2,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging {
        index: usize,
        origin: Vec2,
    },
    MenuOpen(Selection),
}

pub struct SceneState {
    pub balls: Vec<Ball>,
    pub width: f32,
    pub height: f32,
    pub interaction: Interaction,
}

impl SceneState {
    pub fn new(width: f32, height: f32, balls: Vec<Ball>) -> Self {
        Self {
            balls,
            width,
            height,
            interaction: Interaction::Idle,
        }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        let balls = config
            .balls
            .iter()
            .map(|b| {
                Ball::new(
                    Vec2::new(b.x, b.y),
                    b.radius,
                    Vec2::new(b.speed_x, b.speed_y),
                    &b.color,
                )
            })
            .collect();
        Self::new(config.width, config.height, balls)
    }

    pub fn dragged_index(&self) -> Option<usize> {
        match self.interaction {
            Interaction::Dragging { index, .. } => Some(index),
            _ => None,
        }
    }

    pub fn selection(&self) -> Option<Selection> {
        match self.interaction {
            Interaction::MenuOpen(sel) => Some(sel),
            _ => None,
        }
    }

    pub fn menu_open(&self) -> bool {
        self.selection().is_some()
    }

    /// First ball in list order whose hit box contains `point`.
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        self.balls.iter().position(|b| b.contains(point))
    }
}
