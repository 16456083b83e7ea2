use std::time::Duration;

use bevy::{
    asset::{AssetLoader, LoadContext, LoadState, io::Reader},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Asset loader for [`ConfettiConfig`] files in RON format.
#[derive(Default, TypePath)]
pub struct ConfettiConfigAssetLoader;

/// Errors that can occur when loading a [`ConfettiConfig`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfettiConfigAssetLoaderError {
    /// An I/O error occurred while reading the config file.
    #[error("Could not load confetti config: {0}")]
    Io(#[from] std::io::Error),
    /// The config file contained invalid RON, or a color that is not a hex string.
    #[error("Could not parse RON: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

impl AssetLoader for ConfettiConfigAssetLoader {
    type Asset = ConfettiConfig;
    type Settings = ();
    type Error = ConfettiConfigAssetLoaderError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &(),
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        let config = ron::de::from_bytes::<ConfettiConfig>(&bytes)?;
        Ok(config)
    }

    fn extensions(&self) -> &[&str] {
        &["ron"]
    }
}

/// Settings controlling the look and motion of every confetti burst.
///
/// This is both a [`Resource`] and an [`Asset`]. The resource is the active
/// configuration: each burst reads it once and copies what it needs into the
/// pieces it spawns, so edits only affect future bursts. Loading a config file
/// through [`ConfettiPlugin::config_path`](crate::ConfettiPlugin::config_path)
/// replaces the resource whenever the file is loaded or modified.
///
/// No validation is performed. Out-of-range values such as a negative
/// `time_step` produce odd visuals, not errors.
#[derive(Resource, Asset, TypePath, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfettiConfig {
    /// Mean launch angle in degrees. Lower works better for the top corners,
    /// higher for the bottom ones.
    pub angle: f32,
    /// Standard deviation of the launch angle, in degrees.
    pub spread: f32,
    /// Mean launch speed, in viewport percent per simulated second.
    pub start_velocity: f32,
    /// Standard deviation of the launch speed.
    pub start_velocity_stdev: f32,
    /// Number of pieces spawned by one burst.
    pub element_count: u32,
    /// Drag coefficient. Higher values make pieces float like paper.
    pub drag_friction: f32,
    /// How far past the viewport edge, in percent, a piece travels before it is removed.
    pub stop_margin: f32,
    /// Mean piece width and height in logical pixels.
    pub particle_size: f32,
    /// Standard deviation of the piece width and height.
    pub particle_size_stdev: f32,
    /// Simulated seconds advanced per tick. Lower is slower.
    pub time_step: f32,
    /// Real time between ticks, in milliseconds.
    ///
    /// `0` steps every piece once per frame. Long frames never take more than
    /// [`MAX_STEPS_PER_FRAME`](crate::piece::MAX_STEPS_PER_FRAME) steps.
    pub tick_interval_ms: u64,
    /// Standard deviation of the initial spin, in degrees per simulated second.
    pub rotation_speed_stdev: f32,
    /// Multiplier applied to the spin after every tick.
    pub rotation_damping: f32,
    /// Palette the piece colors are picked from, written as hex strings in RON.
    #[serde(with = "hex_colors")]
    pub colors: Vec<Color>,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            angle: 60.0,
            spread: 10.0,
            start_velocity: 90.0,
            start_velocity_stdev: 20.0,
            element_count: 200,
            drag_friction: 0.8,
            stop_margin: 10.0,
            particle_size: 10.0,
            particle_size_stdev: 2.0,
            time_step: 1.0 / 30.0,
            tick_interval_ms: 10,
            rotation_speed_stdev: 60.0,
            rotation_damping: 0.98,
            colors: DEFAULT_COLORS
                .iter()
                .map(|hex| Color::Srgba(Srgba::hex(hex).unwrap_or(Srgba::WHITE)))
                .collect(),
        }
    }
}

const DEFAULT_COLORS: [&str; 5] = ["#a864fd", "#29cdff", "#78ff44", "#ff718d", "#fdff6a"];

impl ConfettiConfig {
    /// Real time between two ticks of a piece.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

mod hex_colors {
    use bevy::color::{Color, Srgba};
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

    pub fn serialize<S: Serializer>(colors: &[Color], serializer: S) -> Result<S::Ok, S::Error> {
        colors
            .iter()
            .map(|color| color.to_srgba().to_hex())
            .collect::<Vec<_>>()
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Color>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|hex| {
                Srgba::hex(hex)
                    .map(Color::Srgba)
                    .map_err(|err| D::Error::custom(format!("invalid color \"{hex}\": {err}")))
            })
            .collect()
    }
}

/// Handle of the config file the plugin keeps in sync with the [`ConfettiConfig`] resource.
#[derive(Resource)]
pub struct ConfettiConfigHandle(pub Handle<ConfettiConfig>);

#[derive(Resource)]
pub(crate) struct ConfettiConfigPath(pub String);

pub(crate) fn load_config_file(
    mut commands: Commands,
    path: Option<Res<ConfettiConfigPath>>,
    asset_server: Res<AssetServer>,
) {
    let Some(path) = path else {
        return;
    };
    debug!("loading confetti config from {:?}", path.0);
    commands.insert_resource(ConfettiConfigHandle(asset_server.load(path.0.clone())));
}

pub(crate) fn apply_loaded_config(
    mut events: MessageReader<AssetEvent<ConfettiConfig>>,
    handle: Option<Res<ConfettiConfigHandle>>,
    assets: Res<Assets<ConfettiConfig>>,
    mut config: ResMut<ConfettiConfig>,
) {
    let Some(handle) = handle else {
        return;
    };

    let changed = events
        .read()
        .filter(|event| event.is_added(&handle.0) || event.is_modified(&handle.0))
        .count();
    if changed == 0 {
        return;
    }

    if let Some(loaded) = assets.get(&handle.0) {
        if loaded.colors.is_empty() {
            warn!("confetti config has no colors, pieces will be white");
        }
        *config = loaded.clone();
        info!("applied confetti config");
    }
}

pub(crate) fn report_failed_config(
    handle: Option<Res<ConfettiConfigHandle>>,
    asset_server: Res<AssetServer>,
    mut reported: Local<bool>,
) {
    let Some(handle) = handle else {
        return;
    };

    match asset_server.load_state(&handle.0) {
        LoadState::Failed(err) => {
            if !*reported {
                warn!("failed to load confetti config, keeping the current one: {err}");
                *reported = true;
            }
        }
        _ => *reported = false,
    }
}
