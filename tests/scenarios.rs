use ball_canvas::animation::{AnimationLoop, LoopState};
use ball_canvas::config::SceneConfig;
use ball_canvas::input::{self, PointerButton};
use ball_canvas::state::{Interaction, SceneState};
use ggez::glam::Vec2;

const EPS: f32 = 1e-3;

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < EPS
}

fn run(anim: &mut AnimationLoop, scene: &mut SceneState, frames: usize) {
    for _ in 0..frames {
        anim.frame(scene);
    }
}

#[test]
fn default_scene_moves_linearly_at_first() {
    let config = SceneConfig::default();
    let mut scene = SceneState::from_config(&config);
    let mut anim = AnimationLoop::new();

    run(&mut anim, &mut scene, 20);

    for (ball, def) in scene.balls.iter().zip(&config.balls) {
        let expected = Vec2::new(def.x + 20.0 * def.speed_x, def.y + 20.0 * def.speed_y);
        assert!(close(ball.pos, expected), "{:?} vs {:?}", ball.pos, expected);
    }
}

#[test]
fn menu_freezes_motion_until_color_chosen() {
    let config = SceneConfig::default();
    let mut scene = SceneState::from_config(&config);
    let mut anim = AnimationLoop::new();
    run(&mut anim, &mut scene, 5);

    let target = scene.balls[2].pos;
    input::process_press(&mut scene, &mut anim, PointerButton::Secondary, target);
    assert_eq!(anim.state(), LoopState::Paused);

    let frozen: Vec<_> = scene.balls.iter().map(|b| (b.pos, b.vel)).collect();
    run(&mut anim, &mut scene, 30);
    let after: Vec<_> = scene.balls.iter().map(|b| (b.pos, b.vel)).collect();
    assert_eq!(frozen, after);

    let chosen = config.palette[0].color.clone();
    assert!(input::choose_color(&mut scene, &mut anim, &chosen));
    assert_eq!(scene.balls[2].color, chosen);

    run(&mut anim, &mut scene, 1);
    for ((pos, vel), ball) in frozen.iter().zip(&scene.balls) {
        assert_eq!(ball.vel, *vel);
        assert!(close(ball.pos, *pos + *vel));
    }
}

#[test]
fn outside_click_resumes_without_recoloring() {
    let mut scene = SceneState::from_config(&SceneConfig::default());
    let mut anim = AnimationLoop::new();
    let colors: Vec<_> = scene.balls.iter().map(|b| b.color.clone()).collect();

    let right = PointerButton::from_id(2);
    input::process_press(&mut scene, &mut anim, right, Vec2::new(190.0, 109.0));
    assert!(scene.menu_open());
    input::process_press(&mut scene, &mut anim, right, Vec2::new(1250.0, 850.0));

    assert!(!scene.menu_open());
    assert!(anim.is_running());
    let after: Vec<_> = scene.balls.iter().map(|b| b.color.clone()).collect();
    assert_eq!(colors, after);
}

#[test]
fn dragged_ball_is_held_then_flicked() {
    let mut scene = SceneState::from_config(&SceneConfig::default());
    let mut anim = AnimationLoop::new();

    let left = PointerButton::from_id(0);
    input::process_press(&mut scene, &mut anim, left, Vec2::new(1000.0, 700.0));
    assert_eq!(scene.interaction, Interaction::Idle);

    input::process_press(&mut scene, &mut anim, left, Vec2::new(643.0, 421.0));
    assert_eq!(scene.dragged_index(), Some(3));

    // held in place while the loop keeps running
    run(&mut anim, &mut scene, 10);
    assert_eq!(scene.balls[3].pos, Vec2::new(643.0, 421.0));

    input::process_move(&mut scene, Vec2::new(900.0, 600.0));
    input::process_move(&mut scene, Vec2::new(1000.0, 421.0));
    assert!(input::process_release(&mut scene));
    assert!(close(scene.balls[3].vel, Vec2::new(1.0, 0.0)));

    run(&mut anim, &mut scene, 3);
    assert!(close(scene.balls[3].pos, Vec2::new(1003.0, 421.0)));
    assert!(!input::process_release(&mut scene));
}

#[test]
fn empty_scene_survives_everything() {
    let config = SceneConfig::from_json(r#"{ "balls": [] }"#).unwrap();
    let mut scene = SceneState::from_config(&config);
    let mut anim = AnimationLoop::new();

    run(&mut anim, &mut scene, 3);
    for button in [PointerButton::Primary, PointerButton::Secondary] {
        let action = input::process_press(&mut scene, &mut anim, button, Vec2::ZERO);
        assert_eq!(action, None);
    }
    assert!(!input::process_release(&mut scene));
    assert!(!input::choose_color(&mut scene, &mut anim, "red"));
    assert_eq!(anim.ticks(), 3);
}

#[test]
fn teardown_stops_ticks() {
    let mut scene = SceneState::from_config(&SceneConfig::default());
    let mut anim = AnimationLoop::new();
    anim.stop();
    let before = scene.balls[0].pos;
    run(&mut anim, &mut scene, 5);
    assert_eq!(scene.balls[0].pos, before);
}
