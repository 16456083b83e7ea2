use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::ConfettiConfig;
use crate::physics::projectile_motion_with_drag;
use crate::sampling::{rand_degrees, rand_norm};

/// Upper bound on the steps a piece takes in a single frame, so a long frame
/// hitch cannot stall the app.
pub const MAX_STEPS_PER_FRAME: u32 = 64;

/// The viewport corner a piece is launched from.
///
/// Pieces start slightly outside the corner and are launched toward the
/// viewport interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Reflect)]
pub enum StartCorner {
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    #[default]
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

impl StartCorner {
    /// All four corners.
    pub const ALL: [StartCorner; 4] = [
        StartCorner::TopLeft,
        StartCorner::TopRight,
        StartCorner::BottomLeft,
        StartCorner::BottomRight,
    ];

    /// Corner used for the `index`-th piece of a burst: bottom-left for even
    /// indices, bottom-right for odd ones.
    pub fn for_burst_index(index: u32) -> Self {
        if index % 2 == 0 {
            StartCorner::BottomLeft
        } else {
            StartCorner::BottomRight
        }
    }

    /// Starting position in viewport percent, 5% outside the corner on both axes.
    pub fn start_position(self) -> Vec2 {
        let x = match self {
            StartCorner::TopLeft | StartCorner::BottomLeft => -5.0,
            StartCorner::TopRight | StartCorner::BottomRight => 105.0,
        };
        let y = match self {
            StartCorner::TopLeft | StartCorner::TopRight => -5.0,
            StartCorner::BottomLeft | StartCorner::BottomRight => 105.0,
        };
        Vec2::new(x, y)
    }

    /// Turns a sampled launch angle (degrees) into one that points away from this corner.
    pub fn orient_angle(self, angle: f32) -> f32 {
        match self {
            StartCorner::TopLeft => angle,
            StartCorner::TopRight => 180.0 - angle,
            StartCorner::BottomLeft => -angle,
            StartCorner::BottomRight => angle + 180.0,
        }
    }
}

/// Simulation parameters copied from the [`ConfettiConfig`] when a piece is spawned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceParams {
    /// Drag coefficient passed to the integrator.
    pub drag: f32,
    /// Simulated seconds per tick.
    pub time_step: f32,
    /// Exit margin in viewport percent.
    pub stop_margin: f32,
    /// Spin multiplier applied after every tick.
    pub rotation_damping: f32,
}

impl From<&ConfettiConfig> for PieceParams {
    fn from(config: &ConfettiConfig) -> Self {
        Self {
            drag: config.drag_friction,
            time_step: config.time_step,
            stop_margin: config.stop_margin,
            rotation_damping: config.rotation_damping,
        }
    }
}

/// Kinematic state of one confetti piece.
///
/// Position is in viewport percent with y pointing down, matching the `left`
/// and `top` of the piece's [`Node`]. Rotation is in degrees.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    /// Position in viewport percent.
    pub position: Vec2,
    /// Velocity in viewport percent per simulated second.
    pub velocity: Vec2,
    /// Simulated rotation in degrees.
    pub rotation: f32,
    /// Spin in degrees per simulated second.
    pub rotation_speed: f32,
    /// Parameters copied from the config at spawn.
    pub params: PieceParams,
}

impl ConfettiPiece {
    /// Samples the launch state of a piece leaving `corner`.
    pub fn launch(rng: &mut impl Rng, config: &ConfettiConfig, corner: StartCorner) -> Self {
        let angle = corner.orient_angle(rand_norm(rng, config.angle, config.spread));
        let theta = angle.to_radians();
        let speed = rand_norm(rng, config.start_velocity, config.start_velocity_stdev);

        Self {
            position: corner.start_position(),
            velocity: Vec2::new(speed * theta.cos(), speed * theta.sin()),
            rotation: rand_degrees(rng),
            rotation_speed: rand_norm(rng, 0.0, config.rotation_speed_stdev),
            params: PieceParams::from(config),
        }
    }

    /// Advances the piece by one tick.
    pub fn step(&mut self) {
        let step = projectile_motion_with_drag(
            self.position,
            self.velocity,
            self.params.drag,
            self.params.time_step,
        );
        self.position = step.position;
        self.velocity = step.velocity;

        self.rotation += self.rotation_speed * self.params.time_step;
        self.rotation_speed *= self.params.rotation_damping;
    }

    /// Returns `true` once the piece is further than the stop margin outside the viewport.
    pub fn is_offscreen(&self) -> bool {
        let min = -self.params.stop_margin;
        let max = 100.0 + self.params.stop_margin;
        self.position.x < min
            || self.position.x > max
            || self.position.y < min
            || self.position.y > max
    }
}

/// The repeating schedule of a single piece.
///
/// Lives on the same entity as the piece's [`Node`], so despawning the piece
/// cancels its schedule.
#[derive(Component, Debug, Clone)]
pub struct PieceTimer(pub Timer);

impl PieceTimer {
    /// Creates a repeating timer firing every `config.tick_interval()`.
    pub fn new(config: &ConfettiConfig) -> Self {
        Self(Timer::new(config.tick_interval(), TimerMode::Repeating))
    }

    /// Number of steps owed after the last tick.
    ///
    /// A zero interval steps once per frame. Otherwise it is one step per
    /// elapsed interval, capped at [`MAX_STEPS_PER_FRAME`].
    pub fn steps_due(&self) -> u32 {
        if self.0.duration().is_zero() {
            return 1;
        }
        self.0.times_finished_this_tick().min(MAX_STEPS_PER_FRAME)
    }
}

fn sync_piece_node(piece: &ConfettiPiece, node: &mut Node, transform: &mut UiTransform) {
    node.left = Val::Percent(piece.position.x);
    node.top = Val::Percent(piece.position.y);
    transform.rotation = Rot2::degrees(piece.rotation.round());
}

/// Ticks every piece's own timer, steps it once per elapsed interval and
/// despawns it as soon as it leaves the viewport.
pub fn tick_confetti_pieces(
    mut commands: Commands,
    time: Res<Time>,
    mut pieces: Query<(
        Entity,
        &mut ConfettiPiece,
        &mut PieceTimer,
        &mut Node,
        &mut UiTransform,
    )>,
) {
    let mut removed = 0usize;

    for (entity, mut piece, mut timer, mut node, mut transform) in pieces.iter_mut() {
        timer.0.tick(time.delta());

        let ticks = timer.steps_due();
        if ticks == 0 {
            continue;
        }

        let mut offscreen = false;
        for _ in 0..ticks {
            piece.step();
            if piece.is_offscreen() {
                offscreen = true;
                break;
            }
        }

        if offscreen {
            commands.entity(entity).despawn();
            removed += 1;
        } else {
            sync_piece_node(&piece, &mut node, &mut transform);
        }
    }

    if removed > 0 {
        debug!("removed {removed} confetti pieces");
    }
}
