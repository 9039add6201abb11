//=========================================================================
// Global Engine State
//=========================================================================
//
// Separates systems (logic components) from context (shared data).
//
// Architecture:
//   GlobalSystems: InputSystem + active Scene + HUD (owned by orchestrator)
//   GameContext: KeyState + Scheduler + EventQueue (passed to scenes)
//
//=========================================================================

//=== Module Declarations =================================================

mod global_context;
mod global_systems;

//=== Public API ==========================================================

pub use global_context::GameContext;
pub use global_systems::GlobalSystems;
