//=========================================================================
// Scene System
//=========================================================================
//
// Scene trait and the two playable scenes.
//
// Architecture:
//   GlobalSystems
//     └─ scene: Option<Box<dyn Scene>>
//
// Flow:
//   on_enter() once → per tick: on_task() for each firing → update()
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::globals::GameContext;
use crate::core::scheduler::TaskHandle;

//=== Module Declarations =================================================

mod courier;
mod stalker;

//=== Public API ==========================================================

pub use courier::{CourierConfig, CourierScene};
pub use stalker::{room_obstacles, StalkerConfig, StalkerScene};

//=== Scene Trait =========================================================

/// Defines scene behavior with lifecycle hooks and update logic.
///
/// Each scene owns its own world state; the shared [`GameContext`] carries
/// only per-tick input, timers and outgoing notifications.
///
/// # Minimal Implementation
///
/// Only `name()` and `update()` are required. Hooks have default empty
/// implementations:
///
/// ```rust
/// # use harvest_engine::prelude::*;
/// struct Idle;
///
/// impl Scene for Idle {
///     fn name(&self) -> &'static str {
///         "idle"
///     }
///
///     fn update(&mut self, _context: &mut GameContext) {}
/// }
/// ```
pub trait Scene: Send {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Called once when the scene becomes active.
    ///
    /// Default implementation does nothing. Override to start timers.
    fn on_enter(&mut self, _context: &mut GameContext) {}

    /// Called every tick, after scheduler firings were dispatched.
    fn update(&mut self, context: &mut GameContext);

    /// Called for each scheduler firing this tick, in registration order.
    ///
    /// Firings for tasks the scene does not own should be ignored.
    fn on_task(&mut self, _task: TaskHandle, _context: &mut GameContext) {}

    /// Called when the window is hidden or shown again.
    ///
    /// The scheduler is already paused (or resumed) and keys released by
    /// the time this runs.
    fn on_visibility_changed(&mut self, _visible: bool, _context: &mut GameContext) {}
}
