#![deny(missing_docs)]

//! **bevy_confetti** blasts a burst of confetti pieces out of the bottom corners
//! of the window. Every piece is a UI [`Node`] parented to a full-window overlay,
//! launched with a randomized angle, speed, size, color and spin, and animated
//! with a small drag/gravity model until it leaves the screen.
//!
//! # Getting started
//!
//! Add [`ConfettiPlugin`] to your app:
//!
//! ```no_run
//! use bevy::prelude::*;
//! use bevy_confetti::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins((DefaultPlugins, ConfettiPlugin::default()))
//!         .add_systems(Startup, |mut commands: Commands| {
//!             commands.spawn(Camera2d);
//!         })
//!         .run();
//! }
//! ```
//!
//! Press Cmd/Super + Shift + Alt + C (see [`ConfettiShortcut`]), trigger a
//! [`ConfettiBurst`], or use the [`Confetti`] system parameter:
//!
//! ```
//! use bevy::prelude::*;
//! use bevy_confetti::prelude::*;
//!
//! fn on_level_complete(mut confetti: Confetti) {
//!     let container = confetti.burst();
//!     // a single extra piece from the top-left corner
//!     confetti.piece(container, StartCorner::TopLeft);
//! }
//! ```
//!
//! # Configuration
//!
//! The active [`ConfettiConfig`] resource controls every future burst. It can be
//! edited directly, overridden per burst with [`ConfettiBurst::with_config`], or
//! loaded (and hot reloaded) from a RON file with [`ConfettiPlugin::config_path`]:
//!
//! ```ron
//! (
//!     angle: 60.0,
//!     spread: 10.0,
//!     element_count: 200,
//!     colors: ["#a864fd", "#29cdff", "#78ff44", "#ff718d", "#fdff6a"],
//! )
//! ```

/// Burst orchestration: the overlay container, [`Confetti`] and [`ConfettiBurst`].
pub mod burst;
/// [`ConfettiConfig`] and its RON asset loader.
pub mod config;
/// Keyboard shortcut.
pub mod input;
/// The drag/gravity integrator.
pub mod physics;
/// Per-piece state, launch and animation.
pub mod piece;
/// Convenience re-exports.
pub mod prelude;
/// Random sampling helpers.
pub mod sampling;

use bevy::prelude::*;

use burst::{ConfettiOverlay, forget_removed_container, on_confetti_burst};
use config::{
    ConfettiConfigAssetLoader, ConfettiConfigPath, apply_loaded_config, load_config_file,
    report_failed_config,
};
use input::trigger_on_shortcut;
use piece::tick_confetti_pieces;
use sampling::ConfettiRng;

/// Plugin that adds confetti bursts to a Bevy app.
///
/// Requires the asset plugin. The UI plugin and a camera are needed for the
/// pieces to actually show up.
pub struct ConfettiPlugin {
    /// Whether [`ConfettiShortcut`] triggers bursts.
    pub shortcut: bool,
    /// Asset path of a RON [`ConfettiConfig`] to load and keep in sync.
    pub config_path: Option<String>,
}

impl Default for ConfettiPlugin {
    fn default() -> Self {
        Self {
            shortcut: true,
            config_path: None,
        }
    }
}

impl Plugin for ConfettiPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<ConfettiConfig>()
            .init_asset_loader::<ConfettiConfigAssetLoader>();

        app.init_resource::<ConfettiConfig>()
            .init_resource::<ConfettiRng>()
            .init_resource::<ConfettiOverlay>()
            .init_resource::<ConfettiShortcut>();

        app.add_observer(on_confetti_burst)
            .add_observer(forget_removed_container);

        if let Some(path) = &self.config_path {
            app.insert_resource(ConfettiConfigPath(path.clone()));
        }

        app.add_systems(Startup, load_config_file).add_systems(
            Update,
            (
                (apply_loaded_config, report_failed_config),
                tick_confetti_pieces,
            ),
        );

        if self.shortcut {
            app.add_systems(
                Update,
                trigger_on_shortcut.run_if(resource_exists::<ButtonInput<KeyCode>>),
            );
        }
    }
}

pub use burst::{Confetti, ConfettiBurst, ConfettiContainer};
pub use config::{ConfettiConfig, ConfettiConfigHandle};
pub use input::ConfettiShortcut;
pub use piece::{ConfettiPiece, PieceParams, PieceTimer, StartCorner};
