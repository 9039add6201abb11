//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use harvest_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder};

// Global systems and context
pub use crate::core::globals::{GameContext, GlobalSystems};

// Errors
pub use crate::core::error::ConfigError;
pub use crate::core::platform_bridge::PlatformError;

// Input system
pub use crate::core::input::{GameKey, InputEvent, KeyCode, KeyState};

// Game state
pub use crate::core::carry::{Actor, ActorId, Item, ItemId};
pub use crate::core::events::{ActorPose, GameEvent, SessionOutcome};
pub use crate::core::session::{Session, SessionStatus};

// Scene system
pub use crate::core::scene::{CourierConfig, CourierScene, Scene, StalkerConfig, StalkerScene};
