use bevy::prelude::*;
use bevy_confetti::physics::{GRAVITY, projectile_motion_with_drag};

#[test]
fn identical_inputs_give_identical_steps() {
    let inputs = [
        (Vec2::new(-5.0, 105.0), Vec2::new(45.0, -78.0), 0.8, 1.0 / 30.0),
        (Vec2::new(105.0, -5.0), Vec2::new(-10.0, 3.0), 0.0, 0.5),
        (Vec2::ZERO, Vec2::ZERO, 2.0, 0.1),
    ];
    for (p, v, drag, t) in inputs {
        assert_eq!(
            projectile_motion_with_drag(p, v, drag, t),
            projectile_motion_with_drag(p, v, drag, t)
        );
    }
}

#[test]
fn gravity_only_matches_closed_form_over_many_steps() {
    let mut position = Vec2::new(-5.0, 105.0);
    let mut velocity = Vec2::new(20.0, -60.0);
    let (p0, v0) = (position, velocity);
    let t = 1.0 / 30.0;

    for _ in 0..30 {
        let step = projectile_motion_with_drag(position, velocity, 0.0, t);
        position = step.position;
        velocity = step.velocity;
    }

    let total = 30.0 * t;
    let expected = Vec2::new(
        p0.x + v0.x * total,
        p0.y + v0.y * total + GRAVITY * total * total / 2.0,
    );
    assert!((position - expected).length() < 1e-3, "{position} vs {expected}");
    assert!((velocity.y - (v0.y + GRAVITY * total)).abs() < 1e-3);
    assert!((velocity.x - v0.x).abs() < 1e-5);
}

#[test]
fn drag_approaches_terminal_velocity() {
    let drag = 0.8;
    let mut position = Vec2::new(50.0, 0.0);
    let mut velocity = Vec2::ZERO;

    for _ in 0..3000 {
        let step = projectile_motion_with_drag(position, velocity, drag, 1.0 / 30.0);
        position = step.position;
        velocity = step.velocity;
    }

    // linear drag settles where drag * |v| balances gravity
    assert!((velocity.y - GRAVITY / drag).abs() < 1e-2, "{velocity}");
    assert!(velocity.x.abs() < 1e-5);
}
