//=========================================================================
// Global Systems
//=========================================================================
//
// Container for engine-level systems with logic.
//
// Contains systems that process input, drive the active scene and present
// its notifications. Systems operate on GameContext data.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::GameContext;
use crate::core::hud::{self, HudState};
use crate::core::input::InputSystem;
use crate::core::scene::Scene;

//=== GlobalSystems =======================================================

/// Container for engine-level logic systems.
///
/// # Available Systems
///
/// - `input`: Key binding table feeding `GameContext::keys`
/// - `hud`: Display state rebuilt from scene notifications
/// - the active scene, set with [`GlobalSystems::set_scene`]
pub struct GlobalSystems {
    /// The input system for key bindings and input processing.
    pub input: InputSystem,

    /// What the HUD currently shows.
    pub hud: HudState,

    scene: Option<Box<dyn Scene>>,
    entered: bool,
}

impl GlobalSystems {
    /// Creates a new systems container with the default key layout and no
    /// scene.
    ///
    /// This is typically called internally by the engine. Users should access
    /// systems via [`crate::Engine::init`] instead.
    pub(crate) fn new() -> Self {
        Self {
            input: InputSystem::new(),
            hud: HudState::new(),
            scene: None,
            entered: false,
        }
    }

    //--- Scene API --------------------------------------------------------

    /// Installs the scene to run. It is entered on the next update.
    pub fn set_scene<S: Scene + 'static>(&mut self, scene: S) {
        info!("Scene set: {}", scene.name());
        self.scene = Some(Box::new(scene));
        self.entered = false;
    }

    /// Name of the active scene, if any.
    pub fn scene_name(&self) -> Option<&'static str> {
        self.scene.as_ref().map(|scene| scene.name())
    }

    //--- Update Loop ------------------------------------------------------

    /// Updates all engine systems for the current tick.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Scene Entry**: Enters a newly set scene
    /// 2. **Input Processing**: Converts platform events to key state
    /// 3. **Timers**: Advances the scheduler and dispatches firings
    /// 4. **Scene Update**: Updates the scene with current context
    /// 5. **Presentation**: Drains notifications into the HUD
    pub(crate) fn update(&mut self, context: &mut GameContext) {
        let Some(scene) = self.scene.as_mut() else {
            context.frame_events.clear();
            return;
        };

        // 1. Enter scene once
        if !self.entered {
            info!("Entering scene: {}", scene.name());
            scene.on_enter(context);
            self.entered = true;
        }

        // 2. Process input events into key state
        self.input.process_frame(&mut context.keys, &context.frame_events);
        context.frame_events.clear();

        // 3. Fire due timers
        for task in context.scheduler.advance(context.dt) {
            scene.on_task(task, context);
        }

        // 4. Update scene
        scene.update(context);

        // 5. Present notifications
        let events = context.events.take();
        hud::present(&mut self.hud, &events);
    }

    /// Pauses or resumes the game when the window is hidden or shown.
    pub(crate) fn set_visible(&mut self, visible: bool, context: &mut GameContext) {
        if !context.set_visible(visible) {
            return;
        }

        if visible {
            info!("Window visible, resuming");
        } else {
            warn!("Window hidden, pausing");
        }

        if let Some(scene) = self.scene.as_mut() {
            scene.on_visibility_changed(visible, context);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{GameKey, InputEvent, KeyCode};
    use crate::core::scene::{CourierConfig, CourierScene};
    use crate::core::hud::FAILED_MESSAGE;
    use std::time::Duration;

    const TICK: Duration = Duration::from_millis(250);

    fn courier() -> (GlobalSystems, GameContext) {
        let mut systems = GlobalSystems::new();
        systems.set_scene(CourierScene::new(CourierConfig::default()).unwrap());
        (systems, GameContext::new(TICK))
    }

    #[test]
    fn update_without_scene_drops_input() {
        let mut systems = GlobalSystems::new();
        let mut context = GameContext::new(TICK);
        context.frame_events.push(vec![InputEvent::KeyDown(KeyCode::KeyW)]);

        systems.update(&mut context);
        assert!(context.frame_events.is_empty());
        assert_eq!(systems.scene_name(), None);
    }

    #[test]
    fn first_update_enters_scene_and_fills_hud() {
        let (mut systems, mut context) = courier();
        systems.update(&mut context);

        assert_eq!(systems.scene_name(), Some("courier"));
        assert_eq!(systems.hud.timer, "1:00");
        assert_eq!(systems.hud.counter, "0/5");
        assert!(context.events.is_empty(), "events drained each tick");
    }

    #[test]
    fn clock_advances_with_logic_time() {
        let (mut systems, mut context) = courier();
        for _ in 0..8 {
            systems.update(&mut context);
        }
        // 8 ticks of 250 ms = 2 s
        assert_eq!(systems.hud.timer, "0:58");
    }

    #[test]
    fn hidden_window_freezes_clock() {
        let (mut systems, mut context) = courier();
        systems.update(&mut context);

        systems.set_visible(false, &mut context);
        for _ in 0..8 {
            systems.update(&mut context);
        }
        assert_eq!(systems.hud.timer, "1:00");

        systems.set_visible(true, &mut context);
        for _ in 0..4 {
            systems.update(&mut context);
        }
        assert_eq!(systems.hud.timer, "0:59");
    }

    #[test]
    fn raw_keys_reach_scene() {
        let (mut systems, mut context) = courier();
        context.frame_events.push(vec![InputEvent::KeyDown(KeyCode::KeyD)]);
        systems.update(&mut context);

        assert!(context.keys.is_down(GameKey::Right));
    }

    #[test]
    fn timeout_shows_overlay() {
        let (mut systems, mut context) = courier();
        for _ in 0..(60 * 4) {
            systems.update(&mut context);
        }
        assert_eq!(systems.hud.timer, "0:00");
        assert_eq!(systems.hud.message, Some(FAILED_MESSAGE));
        assert!(context.scheduler.is_empty());
    }
}
