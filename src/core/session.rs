//=========================================================================
// Session Clock & Objective Tracker
//=========================================================================
//
// Timed-objective state machine: a countdown in whole seconds and a
// delivered-item counter.
//
// State machine:
// ```text
//   Inactive ──start()──> Active ──(remaining == 0)──────> Failed
//                           │                               │
//                           └──(collected == required)──> Completed
//                                                           │
//   {Completed, Failed} ──reset()──> Active <───────────────┘
// ```
//
// Invalid calls (tick while Inactive, collecting after the end) are
// silent no-ops. Notifications are buffered and drained by the owner.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::events::{GameEvent, SessionOutcome};

//=== SessionStatus =======================================================

/// Lifecycle status of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Inactive,
    Active,
    Completed,
    Failed,
}

impl SessionStatus {
    /// Returns `true` for `Completed` and `Failed`.
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::Failed)
    }
}

//=== Session =============================================================

/// Countdown plus objective counter for one timed run.
#[derive(Debug, Clone)]
pub struct Session {
    total_duration: u32,
    required_count: u32,
    warning_threshold: u32,

    remaining: u32,
    collected_count: u32,
    status: SessionStatus,

    outbox: Vec<GameEvent>,
}

impl Session {
    /// Low-time warning threshold used by [`Session::new`], in seconds.
    pub const DEFAULT_WARNING_THRESHOLD: u32 = 10;

    //--- Construction -----------------------------------------------------

    /// Creates an inactive session.
    pub fn new(total_duration: u32, required_count: u32) -> Self {
        Self {
            total_duration,
            required_count,
            warning_threshold: Self::DEFAULT_WARNING_THRESHOLD,
            remaining: total_duration,
            collected_count: 0,
            status: SessionStatus::Inactive,
            outbox: Vec::new(),
        }
    }

    /// Sets the remaining-time threshold at or below which time
    /// notifications carry the warning flag.
    pub fn with_warning_threshold(mut self, seconds: u32) -> Self {
        self.warning_threshold = seconds;
        self
    }

    //--- Lifecycle --------------------------------------------------------

    /// Begins a run. Calling this while Active restarts the run.
    pub fn start(&mut self) {
        self.status = SessionStatus::Active;
        self.remaining = self.total_duration;
        self.collected_count = 0;

        info!(
            "Session started ({}s, {} items required)",
            self.total_duration, self.required_count
        );

        self.outbox.push(GameEvent::SessionStarted);
        self.emit_time();
        self.emit_progress();
    }

    /// Restores initial values and starts a new run.
    pub fn reset(&mut self) {
        self.status = SessionStatus::Inactive;
        self.remaining = self.total_duration;
        self.collected_count = 0;
        debug!("Session reset");
        self.start();
    }

    /// Advances the countdown by one second.
    pub fn tick(&mut self) {
        if self.status != SessionStatus::Active {
            return;
        }

        self.remaining = self.remaining.saturating_sub(1);
        self.emit_time();

        if self.remaining == 0 {
            self.finish(SessionOutcome::Failed);
        }
    }

    /// Counts one delivered item.
    pub fn record_collection(&mut self) {
        if self.status != SessionStatus::Active {
            return;
        }

        self.collected_count += 1;
        self.emit_progress();

        if self.collected_count >= self.required_count {
            self.finish(SessionOutcome::Completed);
        }
    }

    //--- Notifications ----------------------------------------------------

    /// Takes the notifications produced since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.outbox)
    }

    //--- Query API --------------------------------------------------------

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn collected_count(&self) -> u32 {
        self.collected_count
    }

    pub fn required_count(&self) -> u32 {
        self.required_count
    }

    pub fn total_duration(&self) -> u32 {
        self.total_duration
    }

    /// Returns `true` once the remaining time is within the warning window.
    pub fn is_low_time(&self) -> bool {
        self.remaining <= self.warning_threshold
    }

    //--- Internal Helpers -------------------------------------------------

    fn finish(&mut self, outcome: SessionOutcome) {
        self.status = match outcome {
            SessionOutcome::Completed => SessionStatus::Completed,
            SessionOutcome::Failed => SessionStatus::Failed,
        };
        info!(
            "Session ended: {:?} ({}/{} delivered, {}s left)",
            outcome, self.collected_count, self.required_count, self.remaining
        );
        self.outbox.push(GameEvent::SessionEnded(outcome));
    }

    fn emit_time(&mut self) {
        self.outbox.push(GameEvent::TimeChanged {
            remaining: self.remaining,
            warning: self.is_low_time(),
        });
    }

    fn emit_progress(&mut self) {
        self.outbox.push(GameEvent::ObjectiveProgress {
            collected: self.collected_count,
            required: self.required_count,
        });
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
