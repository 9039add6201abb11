//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core interface types (events and errors).
//
// Defines the contract for communication between platform and core threads.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from platform to core via MPSC.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PlatformEvent {
    /// Batched key events for one rendered frame, in arrival order.
    Inputs(Vec<InputEvent>),

    /// Window was hidden (`false`) or shown again (`true`).
    VisibilityChanged(bool),

    /// Window close requested.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(String),

    /// Event loop execution error.
    #[error("event loop error: {0}")]
    EventLoopExecution(String),
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_event_is_debug() {
        let debug_str = format!("{:?}", PlatformEvent::VisibilityChanged(false));
        assert!(debug_str.contains("VisibilityChanged"));
    }

    #[test]
    fn platform_error_display_format() {
        let err = PlatformError::EventLoopCreation("no display".into());
        assert_eq!(err.to_string(), "event loop creation failed: no display");
    }

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlatformError>();
    }
}
