use std::path::Path;
use std::sync::mpsc::{Receiver, TryRecvError, channel};

use ggez::conf::{WindowMode, WindowSetup};
use ggez::event::{self, EventHandler};
use ggez::glam::Vec2;
use ggez::input::mouse::MouseButton;
use ggez::{Context, ContextBuilder, GameError, GameResult};

use ball_canvas::animation::AnimationLoop;
use ball_canvas::config::SceneConfig;
use ball_canvas::input;
use ball_canvas::rendering::Renderer;
use ball_canvas::state::SceneState;
use ball_canvas::ui::{UiMessage, UiState};

const SCENE_ENV: &str = "BALL_CANVAS_SCENE";
const DEFAULT_SCENE_FILE: &str = "scene.json";

struct MainState {
    scene: SceneState,
    animation: AnimationLoop,
    renderer: Renderer,
    ui: UiState,
    ui_rx: Receiver<UiMessage>,
    ticks_per_second: u32,
}

impl MainState {
    fn new(ctx: &mut Context, config: SceneConfig) -> Self {
        let (tx, rx) = channel();
        Self {
            scene: SceneState::from_config(&config),
            animation: AnimationLoop::new(),
            renderer: Renderer::new(&config.background),
            ui: UiState::new(ctx, tx, config.palette.clone()),
            ui_rx: rx,
            ticks_per_second: config.ticks_per_second,
        }
    }
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        self.ui.update(&self.scene, ctx);

        loop {
            match self.ui_rx.try_recv() {
                Ok(UiMessage::SelectColor { color }) => {
                    input::choose_color(&mut self.scene, &mut self.animation, &color);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        while ctx.time.check_update_time(self.ticks_per_second) {
            self.animation.frame(&mut self.scene);
        }

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        self.renderer.draw(ctx, &self.scene)?;
        self.ui.render(ctx)
    }

    fn mouse_button_down_event(
        &mut self,
        _ctx: &mut Context,
        button: MouseButton,
        x: f32,
        y: f32,
    ) -> Result<(), GameError> {
        // presses on the menu belong to the menu
        if self.ui.wants_pointer() {
            return Ok(());
        }
        input::process_press(
            &mut self.scene,
            &mut self.animation,
            button.into(),
            Vec2::new(x, y),
        );
        Ok(())
    }

    fn mouse_button_up_event(
        &mut self,
        _ctx: &mut Context,
        _button: MouseButton,
        _x: f32,
        _y: f32,
    ) -> Result<(), GameError> {
        input::process_release(&mut self.scene);
        Ok(())
    }

    fn mouse_motion_event(
        &mut self,
        _ctx: &mut Context,
        x: f32,
        y: f32,
        _dx: f32,
        _dy: f32,
    ) -> Result<(), GameError> {
        input::process_move(&mut self.scene, Vec2::new(x, y));
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> Result<bool, GameError> {
        self.animation.stop();
        Ok(false)
    }
}

fn load_config() -> anyhow::Result<SceneConfig> {
    match std::env::var(SCENE_ENV) {
        Ok(path) => SceneConfig::load(path),
        Err(_) if Path::new(DEFAULT_SCENE_FILE).exists() => SceneConfig::load(DEFAULT_SCENE_FILE),
        Err(_) => {
            log::info!("no {DEFAULT_SCENE_FILE} found, using the built-in scene");
            Ok(SceneConfig::default())
        }
    }
}

pub fn main() -> GameResult {
    env_logger::init();

    let config = load_config()
        .map_err(|e| GameError::CustomError(format!("{e:#}")))?;
    log::info!(
        "scene: {}x{}, {} balls, {} colors",
        config.width,
        config.height,
        config.balls.len(),
        config.palette.len()
    );

    let mode = WindowMode::default().dimensions(config.width, config.height);
    let (mut ctx, event_loop) = ContextBuilder::new("ball_canvas", "ball-canvas")
        .window_setup(WindowSetup::default().title("Ball Canvas"))
        .window_mode(mode)
        .build()?;

    let state = MainState::new(&mut ctx, config);
    event::run(ctx, event_loop, state)
}
