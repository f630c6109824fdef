use std::path::Path;

use anyhow::{Context, ensure};
use serde::Deserialize;

use crate::color::parse_color;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct BallDef {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed_x: f32,
    pub speed_y: f32,
    pub color: String,
}

impl Default for BallDef {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            radius: 10.0,
            speed_x: 0.0,
            speed_y: 0.0,
            color: "black".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PaletteEntry {
    pub label: String,
    pub color: String,
}

impl PaletteEntry {
    fn new(label: &str, color: &str) -> Self {
        Self {
            label: label.to_string(),
            color: color.to_string(),
        }
    }
}

/// Everything the scene starts from. Every field falls back to the stock demo.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub width: f32,
    pub height: f32,
    pub background: String,
    pub ticks_per_second: u32,
    pub balls: Vec<BallDef>,
    pub palette: Vec<PaletteEntry>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let ball = |x, y, radius, speed_x, speed_y, color: &str| BallDef {
            x,
            y,
            radius,
            speed_x,
            speed_y,
            color: color.to_string(),
        };
        Self {
            width: 1300.0,
            height: 900.0,
            background: "white".to_string(),
            ticks_per_second: 60,
            balls: vec![
                ball(190.0, 109.0, 30.0, 0.1, 0.5, "black"),
                ball(234.0, 432.0, 50.0, 0.5, 0.1, "green"),
                ball(533.0, 122.0, 90.0, 0.1, 0.5, "blue"),
                ball(643.0, 421.0, 70.0, 0.5, 0.1, "orange"),
            ],
            palette: vec![
                PaletteEntry::new("Красный", "red"),
                PaletteEntry::new("Зеленый", "green"),
                PaletteEntry::new("Синий", "blue"),
            ],
        }
    }
}

impl SceneConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading scene file {}", path.display()))?;
        Self::from_json(&data)
            .with_context(|| format!("loading scene file {}", path.display()))
    }

    pub fn from_json(data: &str) -> anyhow::Result<Self> {
        let config: SceneConfig =
            serde_json::from_str(data).context("malformed scene json")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.width > 0.0 && self.height > 0.0,
            "surface must have a positive size, got {}x{}",
            self.width,
            self.height
        );
        ensure!(self.ticks_per_second > 0, "ticks_per_second must be positive");
        ensure!(
            parse_color(&self.background).is_some(),
            "unknown background color {:?}",
            self.background
        );

        for (i, b) in self.balls.iter().enumerate() {
            ensure!(
                b.radius.is_finite() && b.radius > 0.0,
                "ball {i} has non-positive radius {}",
                b.radius
            );
            ensure!(
                [b.x, b.y, b.speed_x, b.speed_y].iter().all(|v| v.is_finite()),
                "ball {i} has a non-finite position or speed"
            );
            ensure!(
                parse_color(&b.color).is_some(),
                "ball {i} has unknown color {:?}",
                b.color
            );
        }

        ensure!(!self.palette.is_empty(), "palette needs at least one color");
        for entry in &self.palette {
            ensure!(
                parse_color(&entry.color).is_some(),
                "palette entry {:?} has unknown color {:?}",
                entry.label,
                entry.color
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_is_valid() {
        let config = SceneConfig::default();
        config.validate().unwrap();
        assert_eq!(config.balls.len(), 4);
        assert_eq!(config.palette.len(), 3);
        assert_eq!((config.width, config.height), (1300.0, 900.0));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let json = r##"{
            "width": 400,
            "balls": [ { "x": 50, "y": 60, "radius": 5, "color": "#00ff00" } ]
        }"##;
        let config = SceneConfig::from_json(json).unwrap();
        assert_eq!(config.width, 400.0);
        assert_eq!(config.height, 900.0);
        assert_eq!(config.balls.len(), 1);
        assert_eq!(config.balls[0].speed_x, 0.0);
        assert_eq!(config.palette, SceneConfig::default().palette);
    }

    #[test]
    fn rejects_non_positive_radius() {
        let json = r#"{ "balls": [ { "radius": 0 } ] }"#;
        let err = SceneConfig::from_json(json).unwrap_err();
        assert!(format!("{err:#}").contains("radius"));
    }

    #[test]
    fn rejects_unknown_color() {
        let json = r#"{ "palette": [ { "label": "x", "color": "mauve-ish" } ] }"#;
        let err = SceneConfig::from_json(json).unwrap_err();
        assert!(format!("{err:#}").contains("mauve-ish"));
    }

    #[test]
    fn rejects_empty_palette() {
        assert!(SceneConfig::from_json(r#"{ "palette": [] }"#).is_err());
    }

    #[test]
    fn empty_ball_list_is_allowed() {
        let config = SceneConfig::from_json(r#"{ "balls": [] }"#).unwrap();
        assert!(config.balls.is_empty());
    }
}
