//! Pointer handling for the scene.
//!
//! The interaction mode stored in [`SceneState::interaction`] decides which
//! inputs are accepted: a press on a ball starts a drag or opens the color menu,
//! motion only matters while dragging, and a release only ends an active drag.

use ggez::glam::Vec2;
use ggez::input::mouse::MouseButton;

use crate::animation::AnimationLoop;
use crate::state::{Interaction, SceneState, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

impl PointerButton {
    /// Maps DOM-style button ids: 0 is left, 2 is right.
    pub fn from_id(id: u16) -> Self {
        match id {
            0 => PointerButton::Primary,
            2 => PointerButton::Secondary,
            _ => PointerButton::Other,
        }
    }
}

impl From<MouseButton> for PointerButton {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Right => PointerButton::Secondary,
            _ => PointerButton::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    DragStarted(usize),
    MenuOpened(Selection),
    MenuDismissed,
}

pub fn process_press(
    scene: &mut SceneState,
    anim: &mut AnimationLoop,
    button: PointerButton,
    at: Vec2,
) -> Option<PointerAction> {
    match button {
        PointerButton::Primary => start_drag(scene, at),
        PointerButton::Secondary => open_menu(scene, anim, at),
        PointerButton::Other => None,
    }
}

fn start_drag(scene: &mut SceneState, at: Vec2) -> Option<PointerAction> {
    if scene.interaction != Interaction::Idle {
        return None;
    }
    let index = scene.hit_test(at)?;

    let ball = &mut scene.balls[index];
    ball.vel = Vec2::ZERO;
    ball.pos = at;
    scene.interaction = Interaction::Dragging { index, origin: at };
    log::debug!("drag started on ball {index} at ({:.1}, {:.1})", at.x, at.y);
    Some(PointerAction::DragStarted(index))
}

fn open_menu(
    scene: &mut SceneState,
    anim: &mut AnimationLoop,
    at: Vec2,
) -> Option<PointerAction> {
    if scene.dragged_index().is_some() {
        return None;
    }

    match scene.hit_test(at) {
        Some(index) => {
            let selection = Selection { pos: at, index };
            scene.interaction = Interaction::MenuOpen(selection);
            anim.pause();
            log::info!("color menu opened for ball {index}");
            Some(PointerAction::MenuOpened(selection))
        }
        None if scene.menu_open() => {
            dismiss_menu(scene, anim);
            Some(PointerAction::MenuDismissed)
        }
        None => None,
    }
}

/// Moves the dragged ball to follow the pointer exactly.
pub fn process_move(scene: &mut SceneState, at: Vec2) {
    if let Interaction::Dragging { index, .. } = scene.interaction {
        scene.balls[index].pos = at;
    }
}

/// Ends a drag, flicking the ball at unit speed along the press to current
/// position direction. Returns false when there was no drag to end.
pub fn process_release(scene: &mut SceneState) -> bool {
    let Interaction::Dragging { index, origin } = scene.interaction else {
        return false;
    };
    scene.interaction = Interaction::Idle;

    let ball = &mut scene.balls[index];
    let travel = ball.pos - origin;
    let (sin, cos) = travel.y.atan2(travel.x).sin_cos();
    ball.vel += Vec2::new(cos, sin);
    log::debug!(
        "drag released on ball {index}, velocity ({:.3}, {:.3})",
        ball.vel.x,
        ball.vel.y
    );
    true
}

/// Applies `color` to the ball the menu was opened on, then closes the menu
/// and resumes animation. Returns false if no menu was open.
pub fn choose_color(scene: &mut SceneState, anim: &mut AnimationLoop, color: &str) -> bool {
    let Some(selection) = scene.selection() else {
        return false;
    };

    debug_assert!(
        selection.index < scene.balls.len(),
        "selection index {} out of range",
        selection.index
    );
    match scene.balls.get_mut(selection.index) {
        Some(ball) => {
            ball.color = color.to_string();
            log::info!("ball {} recolored to {color}", selection.index);
        }
        None => log::error!("selection index {} out of range", selection.index),
    }

    dismiss_menu(scene, anim);
    true
}

pub fn dismiss_menu(scene: &mut SceneState, anim: &mut AnimationLoop) {
    if scene.menu_open() {
        scene.interaction = Interaction::Idle;
        anim.resume();
        log::info!("color menu closed");
    }
}
