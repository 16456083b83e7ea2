use std::f32::consts::PI;

use bevy::prelude::*;

/// Downward acceleration in viewport percent per simulated second squared.
///
/// Tuned for looks, not physically calibrated. Positive y points down.
pub const GRAVITY: f32 = 9.8;

/// Position and velocity of a projectile after one integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileStep {
    /// New position.
    pub position: Vec2,
    /// New velocity.
    pub velocity: Vec2,
}

/// Advances a projectile by one step of `t` simulated seconds under gravity and drag.
///
/// The drag force is `drag * |v|`, opposite to the current velocity, i.e. linear
/// in speed. Both the velocity and position updates use the starting velocity and
/// acceleration:
///
/// ```text
/// v' = v + a·t
/// p' = p + v·t + a·t²/2
/// ```
pub fn projectile_motion_with_drag(
    position: Vec2,
    velocity: Vec2,
    drag: f32,
    t: f32,
) -> ProjectileStep {
    let drag_force = drag * velocity.length();
    let drag_angle = velocity.y.atan2(velocity.x) + PI;
    let drag_vec = Vec2::new(drag_force * drag_angle.cos(), drag_force * drag_angle.sin());

    let acceleration = drag_vec + Vec2::new(0.0, GRAVITY);

    ProjectileStep {
        position: position + velocity * t + acceleration * t * t / 2.0,
        velocity: velocity + acceleration * t,
    }
}
