//=========================================================================
// Input Event Types
//
// Defines the internal representation of low-level keyboard events.
//
// This module abstracts away platform-specific input (e.g. Winit) into
// a unified, engine-friendly format used by the input subsystem.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputSystem (bindings → GameKey)
//         ↓
//    KeyState (enum-indexed flags)
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// `KeyW` is always the same physical key regardless of keyboard layout,
/// so WASD movement keeps its shape on AZERTY keyboards.
///
/// Only bindable keys are listed. Everything else is filtered
/// by the platform layer as `Unidentified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys used by the default bindings and common alternates.
    KeyA, KeyD, KeyE, KeyP, KeyQ, KeyR, KeyS, KeyW,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,

    //--- Fallback ---------------------------------------------------------

    /// Any key not mapped above.
    Unidentified,
}

//=== InputEvent ==========================================================

/// A normalized keyboard transition as produced by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
}

impl InputEvent {
    /// Returns the key this event refers to.
    pub fn key(&self) -> KeyCode {
        match *self {
            InputEvent::KeyDown(key) | InputEvent::KeyUp(key) => key,
        }
    }

    /// Returns `true` for a key press.
    pub fn is_down(&self) -> bool {
        matches!(self, InputEvent::KeyDown(_))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
