use ggez::glam::Vec2;

use crate::state::{Ball, SceneState};

/// Velocity scale applied when a ball touches the radius-inset boundary.
pub const SOFT_BOUNCE_DAMPING: f32 = 0.2;

/// Advances the scene by one tick.
///
/// Balls are processed in list order. For each ball that is not being dragged:
/// every other ball it overlaps gets its velocity overwritten by [`deflect`],
/// then the ball's own velocity is reflected off the walls and integrated.
/// Later balls therefore see the already-moved positions of earlier ones,
/// which makes the deflection order-dependent.
pub fn tick(scene: &mut SceneState) {
    let dragged = scene.dragged_index();
    let (width, height) = (scene.width, scene.height);

    for i in 0..scene.balls.len() {
        if Some(i) == dragged {
            continue;
        }

        let (mover_pos, mover_radius) = (scene.balls[i].pos, scene.balls[i].radius);
        for (j, other) in scene.balls.iter_mut().enumerate() {
            if i != j {
                deflect(mover_pos, mover_radius, other);
            }
        }

        // one integration per ball per tick, however many neighbours it has
        let ball = &mut scene.balls[i];
        ball.vel.x = bounce_axis(ball.pos.x, ball.vel.x, ball.radius, width);
        ball.vel.y = bounce_axis(ball.pos.y, ball.vel.y, ball.radius, height);
        ball.pos += ball.vel;
    }
}

/// Overwrites `other`'s velocity if it overlaps a ball at `mover_pos`.
///
/// Not momentum conserving: the new velocity is `(cos + sin, cos - sin)` of the
/// angle from the mover to `other`. Touching balls (distance equal to the sum of
/// radii) are left alone.
pub fn deflect(mover_pos: Vec2, mover_radius: f32, other: &mut Ball) -> bool {
    let delta = other.pos - mover_pos;
    if delta.length() >= mover_radius + other.radius {
        return false;
    }

    let (sin, cos) = delta.y.atan2(delta.x).sin_cos();
    other.vel = Vec2::new(cos + sin, cos - sin);
    true
}

/// Reflects one velocity component against `[0, extent]`.
///
/// Leaving the surface entirely flips the speed as is; only leaving the
/// radius-inset band `[radius, extent - radius]` flips and damps it.
pub fn bounce_axis(pos: f32, speed: f32, radius: f32, extent: f32) -> f32 {
    let next = pos + speed;
    if next > extent || next < 0.0 {
        -speed
    } else if next > extent - radius || next < radius {
        -speed * SOFT_BOUNCE_DAMPING
    } else {
        speed
    }
}
