#![allow(dead_code)]

use std::path::Path;
use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_confetti::prelude::*;

pub const TICK: Duration = Duration::from_millis(10);

pub fn fixtures_path() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .to_string_lossy()
        .to_string()
}

pub fn create_app_with_plugin(plugin: ConfettiPlugin) -> App {
    let mut app = App::new();

    app.add_plugins(MinimalPlugins);
    app.add_plugins(AssetPlugin {
        file_path: fixtures_path(),
        ..default()
    });

    // every update advances the clock by exactly one piece tick
    app.insert_resource(TimeUpdateStrategy::ManualDuration(TICK));

    app.add_plugins(plugin);
    app.insert_resource(ConfettiRng::seeded(42));

    app
}

pub fn create_minimal_app() -> App {
    create_app_with_plugin(ConfettiPlugin::default())
}

pub fn create_app_with_config(config: ConfettiConfig) -> App {
    let mut app = create_minimal_app();
    app.insert_resource(config);
    app
}

pub fn advance_frames(app: &mut App, n: u32) {
    for _ in 0..n {
        app.update();
    }
}

/// runs updates until `done` returns true, returning the number of updates it took.
pub fn run_until(
    app: &mut App,
    max_updates: u32,
    done: impl Fn(&mut App) -> bool,
) -> Option<u32> {
    for i in 0..max_updates {
        app.update();
        if done(app) {
            return Some(i + 1);
        }
    }
    None
}

/// like `run_until`, but gives background asset loading some real time between updates.
pub fn run_until_loaded(
    app: &mut App,
    max_updates: u32,
    done: impl Fn(&mut App) -> bool,
) -> bool {
    for _ in 0..max_updates {
        std::thread::sleep(Duration::from_millis(5));
        app.update();
        if done(app) {
            return true;
        }
    }
    false
}

pub fn burst(app: &mut App) -> Entity {
    app.world_mut()
        .run_system_once(|mut confetti: Confetti| confetti.burst())
        .expect("burst system should run")
}

pub fn spawn_piece(app: &mut App, corner: StartCorner) -> (Entity, Entity) {
    app.world_mut()
        .run_system_once(move |mut confetti: Confetti| {
            let container = confetti.container();
            (container, confetti.piece(container, corner))
        })
        .expect("piece system should run")
}

pub fn count<C: Component>(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<(), With<C>>()
        .iter(app.world())
        .count()
}

pub fn pieces(app: &mut App) -> Vec<ConfettiPiece> {
    app.world_mut()
        .query::<&ConfettiPiece>()
        .iter(app.world())
        .cloned()
        .collect()
}

pub fn small_config(element_count: u32) -> ConfettiConfig {
    ConfettiConfig {
        element_count,
        ..default()
    }
}
