use ggegui::egui;
use ggez::glam::Vec2;
use ggez::graphics::{Canvas, DrawParam};
use ggez::{Context, GameResult};
use std::sync::mpsc::Sender;

use crate::{color::parse_rgb8, config::PaletteEntry, state::SceneState};

pub enum UiMessage {
    SelectColor { color: String },
}

/// The color menu overlay. Shown only while the scene has a selection.
pub struct UiState {
    gui: ggegui::Gui,
    sender: Sender<UiMessage>,
    palette: Vec<PaletteEntry>,
}

impl UiState {
    pub fn new(ctx: &mut Context, tx: Sender<UiMessage>, palette: Vec<PaletteEntry>) -> Self {
        Self {
            gui: ggegui::Gui::new(ctx),
            sender: tx,
            palette,
        }
    }

    pub fn render(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, None);
        canvas.draw(&self.gui, DrawParam::default().dest(Vec2::ZERO));
        canvas.finish(ctx)
    }

    pub fn update(&mut self, scene: &SceneState, ctx: &mut Context) {
        let egui_ctx = self.gui.ctx();

        if let Some(selection) = scene.selection() {
            egui::Area::new(egui::Id::new("color_menu"))
                .fixed_pos(egui::pos2(selection.pos.x, selection.pos.y))
                .order(egui::Order::Foreground)
                .show(&egui_ctx, |ui| {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        for entry in &self.palette {
                            let (r, g, b) = parse_rgb8(&entry.color).unwrap_or((0, 0, 0));
                            let label = egui::RichText::new(&entry.label)
                                .color(egui::Color32::WHITE);
                            let button = egui::Button::new(label)
                                .fill(egui::Color32::from_rgb(r, g, b))
                                .min_size(egui::vec2(120.0, 0.0));

                            if ui.add(button).clicked() {
                                let msg = UiMessage::SelectColor {
                                    color: entry.color.clone(),
                                };
                                if self.sender.send(msg).is_err() {
                                    log::warn!("color choice dropped, receiver is gone");
                                }
                            }
                        }
                    });
                });
        }

        self.gui.update(ctx);
    }

    /// True when the pointer is over the overlay, so presses there belong to it.
    pub fn wants_pointer(&mut self) -> bool {
        self.gui.ctx().is_pointer_over_area()
    }
}
