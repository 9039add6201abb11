//=========================================================================
// Game Context
//=========================================================================
//
// Shared data container for scenes.
//
// Contains state data that scenes read/write:
// - keys: tracked key flags for this tick
// - scheduler: repeating timers (session clock, patrol loop)
// - events: notifications for display collaborators
// - dt: fixed logic-tick duration
//
// Constructed once by the orchestrator and passed explicitly; there is
// no ambient game state.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::events::EventQueue;
use crate::core::input::{InputEvent, KeyState};
use crate::core::scheduler::Scheduler;

//=== GameContext =========================================================

/// Shared context data accessible to scenes during updates.
pub struct GameContext {
    /// Tracked key state after this tick's input was applied.
    pub keys: KeyState,

    /// Repeating timers. Advanced by `dt` each visible tick.
    pub scheduler: Scheduler,

    /// Notifications produced this tick. Drained by GlobalSystems after
    /// the scene update.
    pub events: EventQueue,

    /// Duration of one logic tick.
    pub dt: Duration,

    /// Raw input batches for the current tick. Consumed by InputSystem.
    pub(crate) frame_events: Vec<Vec<InputEvent>>,

    visible: bool,
}

impl GameContext {
    /// Creates a new context with empty state.
    pub fn new(dt: Duration) -> Self {
        Self {
            keys: KeyState::new(),
            scheduler: Scheduler::new(),
            events: EventQueue::new(),
            dt,
            frame_events: Vec::new(),
            visible: true,
        }
    }

    /// Returns `false` while the window is hidden and the game is paused.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Suspends or resumes every tick source.
    ///
    /// Hiding pauses the scheduler and releases held keys so the actor
    /// does not keep walking on return. Returns `true` if the state
    /// changed.
    pub(crate) fn set_visible(&mut self, visible: bool) -> bool {
        if self.visible == visible {
            return false;
        }
        self.visible = visible;

        if visible {
            self.scheduler.unpause();
        } else {
            self.scheduler.pause();
            self.keys.release_all();
            self.frame_events.clear();
        }
        true
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::GameKey;

    #[test]
    fn starts_visible() {
        let context = GameContext::new(Duration::from_millis(16));
        assert!(context.is_visible());
        assert!(!context.scheduler.is_paused());
    }

    #[test]
    fn hiding_pauses_and_releases_keys() {
        let mut context = GameContext::new(Duration::from_millis(16));
        context.keys.press(GameKey::Forward);

        assert!(context.set_visible(false));
        assert!(context.scheduler.is_paused());
        assert!(!context.keys.is_down(GameKey::Forward));

        assert!(!context.set_visible(false), "no change");
        assert!(context.set_visible(true));
        assert!(!context.scheduler.is_paused());
    }
}
