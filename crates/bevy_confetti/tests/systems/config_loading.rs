use super::helpers::*;

use bevy::asset::{AssetServer, LoadState};
use bevy::prelude::*;
use bevy_confetti::prelude::*;

fn app_loading(path: &str) -> App {
    create_app_with_plugin(ConfettiPlugin {
        config_path: Some(path.to_string()),
        ..default()
    })
}

fn load_failed(app: &mut App) -> bool {
    let Some(handle) = app.world().get_resource::<ConfettiConfigHandle>() else {
        return false;
    };
    let asset_server = app.world().resource::<AssetServer>();
    matches!(asset_server.load_state(&handle.0), LoadState::Failed(_))
}

#[test]
fn loads_config_file_into_resource() {
    let mut app = app_loading("custom_config.ron");

    assert!(
        run_until_loaded(&mut app, 200, |app| {
            app.world().resource::<ConfettiConfig>().element_count == 7
        }),
        "config file should be applied"
    );

    let config = app.world().resource::<ConfettiConfig>();
    assert_eq!(config.angle, 45.0);
    assert_eq!(config.drag_friction, 0.5);
    assert_eq!(config.stop_margin, 20.0);
    assert_eq!(config.tick_interval_ms, 16);
    assert_eq!(config.rotation_damping, 0.95);
    assert_eq!(
        config.colors,
        vec![
            Color::srgb(1.0, 0.0, 0.0),
            Color::srgb(0.0, 1.0, 0.0),
            Color::srgb(0.0, 0.0, 1.0),
        ]
    );
}

#[test]
fn loaded_config_drives_next_burst() {
    let mut app = app_loading("custom_config.ron");
    assert!(run_until_loaded(&mut app, 200, |app| {
        app.world().resource::<ConfettiConfig>().element_count == 7
    }));

    burst(&mut app);

    let pieces = pieces(&mut app);
    assert_eq!(pieces.len(), 7);
    assert!(pieces.iter().all(|p| p.params.stop_margin == 20.0));
}

#[test]
fn partial_config_keeps_defaults() {
    let mut app = app_loading("partial_config.ron");

    assert!(run_until_loaded(&mut app, 200, |app| {
        app.world().resource::<ConfettiConfig>().element_count == 3
    }));

    let config = app.world().resource::<ConfettiConfig>();
    let defaults = ConfettiConfig::default();
    assert_eq!(config.angle, defaults.angle);
    assert_eq!(config.start_velocity, defaults.start_velocity);
    assert_eq!(config.colors.len(), 1);
}

#[test]
fn invalid_config_keeps_current_one() {
    let mut app = app_loading("invalid_config.ron");

    assert!(
        run_until_loaded(&mut app, 200, load_failed),
        "invalid RON should fail to load"
    );
    assert_eq!(
        *app.world().resource::<ConfettiConfig>(),
        ConfettiConfig::default()
    );
}

#[test]
fn unparsable_color_fails_to_load() {
    let mut app = app_loading("bad_color_config.ron");

    assert!(
        run_until_loaded(&mut app, 200, load_failed),
        "unknown color should fail to load"
    );
    assert_eq!(
        app.world().resource::<ConfettiConfig>().colors,
        ConfettiConfig::default().colors
    );
}

#[test]
fn no_config_path_keeps_defaults() {
    let mut app = create_minimal_app();
    advance_frames(&mut app, 5);

    assert!(app.world().get_resource::<ConfettiConfigHandle>().is_none());
    assert_eq!(
        *app.world().resource::<ConfettiConfig>(),
        ConfettiConfig::default()
    );
}
