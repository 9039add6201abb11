//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the logic thread via a crossbeam
// channel.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  EventCollector  │
//  │   ↓                      │    │  ↓               │
//  │  InputProcessor          │    │  InputSystem     │
//  │   └─ drops auto-repeat   │    │  ↓               │
//  │   ↓                      │    │  KeyState        │
//  │  InputBuffer             │    │  ↓               │
//  │   ↓                      │    │  Scene + HUD     │
//  │  RedrawRequested         │    └──────────────────┘
//  │   ↓ (flush)              │             ↑
//  │  Channel ────────────────┼─────────────┘
//  └──────────────────────────┘    PlatformEvent
//
//  Frame Boundary: RedrawRequested
//    → All buffered input sent as one batch
//    → Core processes at fixed TPS (independent of refresh rate)
//    → Empty buffers NOT sent
//
//  Visibility: Occluded / suspended / Focused
//    → visible only while focused, not occluded and not suspended
//    → VisibilityChanged sent immediately (not batched)
//    → Occluded is not reported by every backend; focus loss covers
//      minimising there
// ```
//
// Responsibilities:
// - Create and manage OS window
// - Convert Winit key events → engine InputEvents
// - Buffer input until frame boundary
// - Report visibility changes and window close
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Platform ============================================================

/// Window manager and input event aggregator.
///
/// Runs on the main thread (Winit requirement on macOS/iOS) and sends
/// batched events to the logic thread.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(sender, title)`
/// 2. **Execution**: `platform.run()` - blocks in the event loop
/// 3. **Event processing**: Winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: User closes window → sends `WindowClosed` → exits
///
/// # Thread Safety
///
/// This type is NOT Send/Sync - it must remain on the main thread.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    title: String,

    /// Buffers key events until `RedrawRequested`.
    buffer: InputBuffer,

    /// Channel to send events to the logic thread.
    event_sender: Sender<PlatformEvent>,

    input_processor: InputProcessor,

    focused: bool,
    occluded: bool,
    suspended: bool,

    /// Last visibility reported to the logic thread.
    visible: bool,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform instance with the given event sender.
    ///
    /// Does not create window yet - that happens lazily in `resumed()`.
    pub fn new(event_sender: Sender<PlatformEvent>, title: impl Into<String>) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            title: title.into(),
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
            focused: true,
            occluded: false,
            suspended: false,
            visible: true,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new()
            .map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))
    }

    //--- Internal Helpers -------------------------------------------------

    /// Flushes buffered input events to the logic thread.
    ///
    /// If the channel is disconnected (logic thread exited early), logs a
    /// warning and drops the events so the window can still be closed.
    fn flush_input_buffer(&mut self) {
        if let Some(batch) = self.buffer.drain() {
            let count = batch.len();
            trace!(target: "platform::input", "Flushing {} key events", count);

            if self.event_sender.send(PlatformEvent::Inputs(batch)).is_err() {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events",
                    count
                );
            }
        }
    }

    /// Recomputes visibility from the window flags and reports a change.
    /// Repeats of the current state are not sent.
    fn refresh_visibility(&mut self) {
        let visible = self.focused && !self.occluded && !self.suspended;
        if self.visible == visible {
            return;
        }
        self.visible = visible;

        // Input typed just before hiding belongs to the old frame.
        self.buffer.clear();

        debug!(target: "platform", "Visibility changed: {}", visible);
        if self.event_sender.send(PlatformEvent::VisibilityChanged(visible)).is_err() {
            warn!(target: "platform", "Channel disconnected, visibility change dropped");
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or resume).
    ///
    /// Creates the window if it doesn't exist yet; otherwise this is a
    /// resume and the game becomes visible again.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            debug!(target: "platform", "Resumed with existing window");
            window.request_redraw();
            self.suspended = false;
            self.refresh_visibility();
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(800, 600));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    /// Called when the app is sent to the background.
    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.suspended = true;
        self.refresh_visibility();
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::Occluded(occluded) => {
                self.occluded = *occluded;
                self.refresh_visibility();
            }

            WindowEvent::Focused(focused) => {
                self.focused = *focused;
                self.refresh_visibility();
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push(event);
                } else {
                    trace!(target: "platform::input", "Key ignored");
                }
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush all buffered input
                self.flush_input_buffer();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {
                // Ignore: Resized, mouse, etc.
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
