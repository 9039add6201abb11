//=========================================================================
// Input System
//
// High-level interface for input handling within the engine.
// Translates batches of physical key events into the game's fixed
// `KeyState` through a configurable binding table.
//
// Responsibilities:
// - Own the KeyCode → GameKey binding table
// - Digest each frame's batches of raw events into `KeyState`
// - Expose the default WASD/arrows + Space + R layout
//
// Notes:
// This system is owned by GlobalSystems and updated once per tick on the
// logic thread. Scenes never see raw events, only `KeyState`.
//
//=========================================================================

//=== Submodules ==========================================================
pub mod event;
mod key_state;

//=== Standard Library Imports ============================================
use std::collections::HashMap;

//=== External Crates =====================================================
use log::{debug, trace};

//=== Public API ==========================================================
pub use event::{InputEvent, KeyCode};
pub use key_state::{GameKey, KeyState};

//=== InputSystem =========================================================

/// Maps physical keys to [`GameKey`]s and feeds frame events into a
/// [`KeyState`].
///
/// Several physical keys may drive the same game key (W and ↑ both mean
/// `Forward`). Unbound keys are ignored.
pub struct InputSystem {
    bindings: HashMap<KeyCode, GameKey>,
}

impl InputSystem {
    //--- Construction -----------------------------------------------------

    /// Creates an input system with no bindings.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Creates an input system with the default layout.
    ///
    /// | Game key  | Physical keys |
    /// |-----------|---------------|
    /// | Forward   | W, ↑          |
    /// | Back      | S, ↓          |
    /// | Left      | A, ←          |
    /// | Right     | D, →          |
    /// | Interact  | Space         |
    /// | Restart   | R             |
    pub fn new() -> Self {
        let mut system = Self::empty();
        system.bind_key(KeyCode::KeyW, GameKey::Forward);
        system.bind_key(KeyCode::ArrowUp, GameKey::Forward);
        system.bind_key(KeyCode::KeyS, GameKey::Back);
        system.bind_key(KeyCode::ArrowDown, GameKey::Back);
        system.bind_key(KeyCode::KeyA, GameKey::Left);
        system.bind_key(KeyCode::ArrowLeft, GameKey::Left);
        system.bind_key(KeyCode::KeyD, GameKey::Right);
        system.bind_key(KeyCode::ArrowRight, GameKey::Right);
        system.bind_key(KeyCode::Space, GameKey::Interact);
        system.bind_key(KeyCode::KeyR, GameKey::Restart);
        system
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a physical key to a game key, replacing any previous binding.
    pub fn bind_key(&mut self, key: KeyCode, game_key: GameKey) {
        if let Some(previous) = self.bindings.insert(key, game_key) {
            if previous != game_key {
                debug!("Rebound {:?}: {:?} -> {:?}", key, previous, game_key);
            }
        }
    }

    /// Removes the binding for a physical key.
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    /// Returns the game key bound to a physical key.
    pub fn binding(&self, key: KeyCode) -> Option<GameKey> {
        self.bindings.get(&key).copied()
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears last frame's edges, then applies every event in order.
    pub fn process_frame(&self, keys: &mut KeyState, batches: &[Vec<InputEvent>]) {
        keys.begin_frame();

        for event in batches.iter().flatten() {
            let Some(game_key) = self.binding(event.key()) else {
                trace!("Unbound key ignored: {:?}", event);
                continue;
            };

            if event.is_down() {
                keys.press(game_key);
            } else {
                keys.release(game_key);
            }
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------
    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown(key)
    }
    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp(key)
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn default_layout_binds_wasd_and_arrows() {
        let system = InputSystem::new();
        assert_eq!(system.binding(KeyCode::KeyW), Some(GameKey::Forward));
        assert_eq!(system.binding(KeyCode::ArrowUp), Some(GameKey::Forward));
        assert_eq!(system.binding(KeyCode::KeyA), Some(GameKey::Left));
        assert_eq!(system.binding(KeyCode::ArrowRight), Some(GameKey::Right));
        assert_eq!(system.binding(KeyCode::Space), Some(GameKey::Interact));
        assert_eq!(system.binding(KeyCode::KeyR), Some(GameKey::Restart));
        assert_eq!(system.binding(KeyCode::Escape), None);
    }

    #[test]
    fn key_press_and_release_updates_state() {
        let system = InputSystem::new();
        let mut keys = KeyState::new();

        system.process_frame(&mut keys, &[vec![key_down(KeyCode::KeyW)]]);
        assert!(keys.is_down(GameKey::Forward));
        assert!(keys.just_pressed(GameKey::Forward));

        system.process_frame(&mut keys, &[vec![key_up(KeyCode::KeyW)]]);
        assert!(!keys.is_down(GameKey::Forward));
        assert!(!keys.just_pressed(GameKey::Forward));
    }

    #[test]
    fn held_key_survives_empty_frames() {
        let system = InputSystem::new();
        let mut keys = KeyState::new();

        system.process_frame(&mut keys, &[vec![key_down(KeyCode::KeyD)]]);
        system.process_frame(&mut keys, &[]);

        assert!(keys.is_down(GameKey::Right));
        assert!(!keys.just_pressed(GameKey::Right));
    }

    #[test]
    fn tap_within_one_frame_still_registers_edge() {
        let system = InputSystem::new();
        let mut keys = KeyState::new();

        system.process_frame(
            &mut keys,
            &[vec![key_down(KeyCode::Space), key_up(KeyCode::Space)]],
        );

        assert!(keys.just_pressed(GameKey::Interact));
        assert!(!keys.is_down(GameKey::Interact));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let system = InputSystem::empty();
        let mut keys = KeyState::new();

        system.process_frame(&mut keys, &[vec![key_down(KeyCode::KeyW)]]);
        assert_eq!(keys, KeyState::new());
    }

    #[test]
    fn rebinding_replaces_previous_target() {
        let mut system = InputSystem::new();
        system.bind_key(KeyCode::KeyE, GameKey::Interact);
        system.unbind_key(KeyCode::Space);

        let mut keys = KeyState::new();
        system.process_frame(&mut keys, &[vec![key_down(KeyCode::Space)]]);
        assert!(!keys.is_down(GameKey::Interact));

        system.process_frame(&mut keys, &[vec![key_down(KeyCode::KeyE)]]);
        assert!(keys.just_pressed(GameKey::Interact));
    }

    #[test]
    fn batches_are_applied_in_order() {
        let system = InputSystem::new();
        let mut keys = KeyState::new();

        system.process_frame(
            &mut keys,
            &[
                vec![key_down(KeyCode::KeyA)],
                vec![key_up(KeyCode::KeyA), key_down(KeyCode::KeyS)],
            ],
        );

        assert!(!keys.is_down(GameKey::Left));
        assert!(keys.is_down(GameKey::Back));
    }
}
