use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use rand::Rng;

use crate::config::ConfettiConfig;
use crate::piece::{ConfettiPiece, PieceTimer, StartCorner};
use crate::sampling::{ConfettiRng, rand_degrees, rand_index, rand_norm};

const CONTAINER_Z_INDEX: i32 = 999_999;
const SHADOW_OFFSET: f32 = 5.0;
const SHADOW_SPREAD: f32 = 5.0;
const SHADOW_BLUR: f32 = 30.0;
const SHADOW_ALPHA: f32 = 0.1;

/// Marker for the full-window overlay node that parents every confetti piece.
#[derive(Component)]
pub struct ConfettiContainer;

/// Remembers the overlay container so every burst reuses the same one.
#[derive(Resource, Default)]
pub struct ConfettiOverlay {
    container: Option<Entity>,
}

impl ConfettiOverlay {
    /// The current container, if one has been created and not despawned since.
    pub fn container(&self) -> Option<Entity> {
        self.container
    }
}

/// Triggers a confetti burst.
///
/// ```
/// use bevy::prelude::*;
/// use bevy_confetti::prelude::*;
///
/// fn celebrate(mut commands: Commands) {
///     commands.trigger(ConfettiBurst::default());
/// }
/// ```
#[derive(Event, Default, Clone, Debug)]
pub struct ConfettiBurst {
    /// Overrides the active [`ConfettiConfig`] for this burst only.
    pub config: Option<ConfettiConfig>,
}

impl ConfettiBurst {
    /// A burst using `config` instead of the active configuration.
    pub fn with_config(config: ConfettiConfig) -> Self {
        Self {
            config: Some(config),
        }
    }
}

/// System parameter for spawning confetti from any system.
///
/// ```
/// use bevy::prelude::*;
/// use bevy_confetti::prelude::*;
///
/// fn celebrate(keyboard: Res<ButtonInput<KeyCode>>, mut confetti: Confetti) {
///     if keyboard.just_pressed(KeyCode::Space) {
///         confetti.burst();
///     }
/// }
/// ```
#[derive(SystemParam)]
pub struct Confetti<'w, 's> {
    commands: Commands<'w, 's>,
    config: Res<'w, ConfettiConfig>,
    rng: ResMut<'w, ConfettiRng>,
    overlay: ResMut<'w, ConfettiOverlay>,
}

impl Confetti<'_, '_> {
    /// Returns the overlay container, spawning it if it does not exist yet.
    pub fn container(&mut self) -> Entity {
        if let Some(container) = self.overlay.container {
            return container;
        }

        let container = self.commands.spawn(container_bundle()).id();
        debug!("created confetti container {container}");
        self.overlay.container = Some(container);
        container
    }

    /// Spawns a full burst with the active configuration and returns the container.
    pub fn burst(&mut self) -> Entity {
        let container = self.container();
        spawn_burst(&mut self.commands, &mut self.rng.0, &self.config, container);
        container
    }

    /// Spawns a full burst with `config` instead of the active configuration.
    pub fn burst_with(&mut self, config: &ConfettiConfig) -> Entity {
        let container = self.container();
        spawn_burst(&mut self.commands, &mut self.rng.0, config, container);
        container
    }

    /// Spawns a single piece under `parent`, launched from `corner`.
    ///
    /// `element_count` is ignored: exactly one piece is created.
    pub fn piece(&mut self, parent: Entity, corner: StartCorner) -> Entity {
        spawn_piece(
            &mut self.commands,
            &mut self.rng.0,
            &self.config,
            parent,
            corner,
        )
    }
}

fn container_bundle() -> impl Bundle {
    (
        Name::new("Confetti"),
        ConfettiContainer,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            top: Val::Px(0.0),
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        },
        GlobalZIndex(CONTAINER_Z_INDEX),
        Pickable::IGNORE,
    )
}

fn spawn_burst(
    commands: &mut Commands,
    rng: &mut impl Rng,
    config: &ConfettiConfig,
    container: Entity,
) {
    info!("confetti!");
    if config.colors.is_empty() {
        warn!("confetti config has no colors, pieces will be white");
    }

    for i in 0..config.element_count {
        spawn_piece(
            commands,
            rng,
            config,
            container,
            StartCorner::for_burst_index(i),
        );
    }
}

fn spawn_piece(
    commands: &mut Commands,
    rng: &mut impl Rng,
    config: &ConfettiConfig,
    parent: Entity,
    corner: StartCorner,
) -> Entity {
    let start = corner.start_position();
    let width = rand_norm(rng, config.particle_size, config.particle_size_stdev);
    let height = rand_norm(rng, config.particle_size, config.particle_size_stdev);
    let color = rand_index(rng, config.colors.len())
        .map(|i| config.colors[i])
        .unwrap_or(Color::WHITE);
    // shown until the first tick, the simulated rotation is sampled separately
    let initial_rotation = rand_degrees(rng).floor();

    let piece = ConfettiPiece::launch(rng, config, corner);

    commands
        .spawn((
            Name::new("Confetti Piece"),
            piece,
            PieceTimer::new(config),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(start.x),
                top: Val::Percent(start.y),
                width: Val::Px(width),
                height: Val::Px(height),
                ..default()
            },
            BackgroundColor(color),
            BoxShadow::new(
                Color::srgba(0.0, 0.0, 0.0, SHADOW_ALPHA),
                Val::Px(SHADOW_OFFSET),
                Val::Px(SHADOW_OFFSET),
                Val::Px(SHADOW_SPREAD),
                Val::Px(SHADOW_BLUR),
            ),
            UiTransform {
                rotation: Rot2::degrees(initial_rotation),
                ..default()
            },
            Pickable::IGNORE,
            ChildOf(parent),
        ))
        .id()
}

pub(crate) fn on_confetti_burst(event: On<ConfettiBurst>, mut confetti: Confetti) {
    match &event.config {
        Some(config) => confetti.burst_with(config),
        None => confetti.burst(),
    };
}

pub(crate) fn forget_removed_container(
    event: On<Remove, ConfettiContainer>,
    mut overlay: ResMut<ConfettiOverlay>,
) {
    if overlay.container == Some(event.entity) {
        debug!("confetti container {} removed", event.entity);
        overlay.container = None;
    }
}
