//=========================================================================
// Game Events
//=========================================================================
//
// Notifications emitted by game state for display collaborators (HUD,
// overlay, model swap).
//
// Architecture:
//   Session / Scene → push() → EventQueue → take() → HUD (log output)
//
// Pattern: push during update → take at tick boundary → repeat
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::carry::ItemId;

//=== SessionOutcome ======================================================

/// Terminal result of a timed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every required item was delivered in time.
    Completed,

    /// The countdown reached zero first.
    Failed,
}

//=== ActorPose ===========================================================

/// Which model the host should show for the controlled actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActorPose {
    #[default]
    Idle,
    Walking,
    IdleCarrying,
    WalkingCarrying,
}

impl ActorPose {
    /// Picks the pose for the given movement/carry combination.
    pub fn from_flags(moving: bool, carrying: bool) -> Self {
        match (moving, carrying) {
            (true, true) => ActorPose::WalkingCarrying,
            (true, false) => ActorPose::Walking,
            (false, true) => ActorPose::IdleCarrying,
            (false, false) => ActorPose::Idle,
        }
    }
}

//=== GameEvent ===========================================================

/// A notification for display collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Countdown changed. `warning` is set once the low-time threshold
    /// is reached.
    TimeChanged { remaining: u32, warning: bool },

    /// Delivered count changed.
    ObjectiveProgress { collected: u32, required: u32 },

    /// Session entered a terminal state.
    SessionEnded(SessionOutcome),

    /// A fresh session started (initial start or restart).
    SessionStarted,

    ItemPickedUp(ItemId),
    ItemDelivered(ItemId),

    /// The actor's displayed model should change.
    PoseChanged(ActorPose),
}

//=== EventQueue ==========================================================

/// FIFO buffer of [`GameEvent`]s drained once per tick.
#[derive(Debug, Default)]
pub struct EventQueue {
    queue: Vec<GameEvent>,
}

impl EventQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Appends an event.
    pub fn push(&mut self, event: GameEvent) {
        self.queue.push(event);
    }

    /// Appends every event from an iterator, preserving order.
    pub fn extend<I: IntoIterator<Item = GameEvent>>(&mut self, events: I) {
        self.queue.extend(events);
    }

    /// Returns an iterator over the queued events.
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Takes all events, leaving the queue empty.
    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.queue)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
