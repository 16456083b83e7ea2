use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_confetti::prelude::*;

const DEFAULT_CONFIG: &str = "confetti.ron";

struct CliArgs {
    config_path: Option<String>,
}

impl CliArgs {
    fn from_env() -> Self {
        Self {
            config_path: std::env::args().nth(1),
        }
    }
}

fn main() {
    let args = CliArgs::from_env();
    let config_path = args
        .config_path
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Confetti".into(),
                resolution: WindowResolution::new(1366, 768),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(ConfettiPlugin {
            config_path: Some(config_path),
            ..default()
        })
        .insert_resource(ClearColor(Color::srgb(0.09, 0.09, 0.11)))
        .add_systems(Startup, (setup_camera, setup_hint, initial_burst))
        .add_systems(Update, burst_on_space)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn setup_hint(mut commands: Commands) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(16.0),
            left: Val::Px(16.0),
            ..default()
        },
        Text::new("Space or Cmd+Shift+Alt+C for confetti"),
        TextColor(Color::srgb(0.63, 0.63, 0.67)),
    ));
}

fn initial_burst(mut commands: Commands) {
    commands.trigger(ConfettiBurst::default());
}

fn burst_on_space(keyboard: Res<ButtonInput<KeyCode>>, mut confetti: Confetti) {
    if keyboard.just_pressed(KeyCode::Space) {
        confetti.burst();
    }
}
