use bevy::prelude::*;

use crate::burst::ConfettiBurst;

/// Keyboard shortcut that triggers a [`ConfettiBurst`].
///
/// Fires when `key` is just pressed while at least one key of every
/// `modifiers` group is held. Defaults to Cmd/Super + Shift + Alt + C.
#[derive(Resource, Debug, Clone)]
pub struct ConfettiShortcut {
    /// Key that fires the burst when just pressed.
    pub key: KeyCode,
    /// Modifier groups. One key of each pair must be held.
    pub modifiers: Vec<[KeyCode; 2]>,
}

impl Default for ConfettiShortcut {
    fn default() -> Self {
        Self {
            key: KeyCode::KeyC,
            modifiers: vec![
                [KeyCode::SuperLeft, KeyCode::SuperRight],
                [KeyCode::ShiftLeft, KeyCode::ShiftRight],
                [KeyCode::AltLeft, KeyCode::AltRight],
            ],
        }
    }
}

impl ConfettiShortcut {
    /// Returns `true` if the shortcut was completed this frame.
    pub fn just_triggered(&self, keyboard: &ButtonInput<KeyCode>) -> bool {
        keyboard.just_pressed(self.key)
            && self
                .modifiers
                .iter()
                .all(|group| keyboard.any_pressed(*group))
    }
}

pub(crate) fn trigger_on_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    shortcut: Res<ConfettiShortcut>,
    mut commands: Commands,
) {
    if shortcut.just_triggered(&keyboard) {
        commands.trigger(ConfettiBurst::default());
    }
}
