//=========================================================================
// HUD
//=========================================================================
//
// Display-side view of game events: the countdown, the delivery counter
// and the end-of-session overlay.
//
// Architecture:
//   GameEvent → HudState::apply() → changed? → log output
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::events::{GameEvent, SessionOutcome};

//=== Formatting ==========================================================

/// Overlay text shown when every item was delivered.
pub const COMPLETED_MESSAGE: &str = "GAME COMPLETE!";

/// Overlay text shown when the countdown ran out.
pub const FAILED_MESSAGE: &str = "TIME'S UP";

/// Formats whole seconds as `M:SS`.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Formats the delivery counter as `collected/required`.
pub fn format_counter(collected: u32, required: u32) -> String {
    format!("{}/{}", collected, required)
}

/// Overlay text for a terminal outcome.
pub fn outcome_message(outcome: SessionOutcome) -> &'static str {
    match outcome {
        SessionOutcome::Completed => COMPLETED_MESSAGE,
        SessionOutcome::Failed => FAILED_MESSAGE,
    }
}

//=== HudState ============================================================

/// What the HUD currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HudState {
    pub timer: String,
    pub counter: String,
    /// Low-time highlight on the timer.
    pub warning: bool,
    /// End-of-session overlay, if shown.
    pub message: Option<&'static str>,
}

impl HudState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event. Returns `true` if anything visible changed.
    pub fn apply(&mut self, event: &GameEvent) -> bool {
        match *event {
            GameEvent::TimeChanged { remaining, warning } => {
                let timer = format_clock(remaining);
                let changed = timer != self.timer || warning != self.warning;
                self.timer = timer;
                self.warning = warning;
                changed
            }
            GameEvent::ObjectiveProgress { collected, required } => {
                let counter = format_counter(collected, required);
                let changed = counter != self.counter;
                self.counter = counter;
                changed
            }
            GameEvent::SessionEnded(outcome) => {
                self.message = Some(outcome_message(outcome));
                true
            }
            GameEvent::SessionStarted => {
                let changed = self.message.is_some() || self.warning;
                self.message = None;
                self.warning = false;
                changed
            }
            GameEvent::ItemPickedUp(_)
            | GameEvent::ItemDelivered(_)
            | GameEvent::PoseChanged(_) => false,
        }
    }

    /// Single-line rendering for log output.
    pub fn line(&self) -> String {
        let mut line = format!("[{}{}]  [{}]", self.timer, if self.warning { " !" } else { "" }, self.counter);
        if let Some(message) = self.message {
            line.push_str("  ");
            line.push_str(message);
        }
        line
    }
}

//=== Presenting ==========================================================

/// Applies a tick's worth of events and logs the HUD once if it changed.
///
/// Non-HUD events (pickups, pose changes) are logged at debug level.
pub fn present(hud: &mut HudState, events: &[GameEvent]) {
    let mut changed = false;

    for event in events {
        if hud.apply(event) {
            changed = true;
        } else {
            debug!(target: "hud", "{:?}", event);
        }
    }

    if changed {
        info!(target: "hud", "{}", hud.line());
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::carry::ItemId;

    #[test]
    fn clock_format() {
        assert_eq!(format_clock(60), "1:00");
        assert_eq!(format_clock(59), "0:59");
        assert_eq!(format_clock(5), "0:05");
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(605), "10:05");
    }

    #[test]
    fn counter_format() {
        assert_eq!(format_counter(0, 5), "0/5");
        assert_eq!(format_counter(5, 5), "5/5");
    }

    #[test]
    fn time_event_updates_timer_and_warning() {
        let mut hud = HudState::new();
        assert!(hud.apply(&GameEvent::TimeChanged { remaining: 10, warning: true }));
        assert_eq!(hud.timer, "0:10");
        assert!(hud.warning);

        assert!(!hud.apply(&GameEvent::TimeChanged { remaining: 10, warning: true }));
    }

    #[test]
    fn progress_event_updates_counter() {
        let mut hud = HudState::new();
        assert!(hud.apply(&GameEvent::ObjectiveProgress { collected: 2, required: 5 }));
        assert_eq!(hud.counter, "2/5");
    }

    #[test]
    fn end_shows_overlay_and_restart_hides_it() {
        let mut hud = HudState::new();
        hud.apply(&GameEvent::TimeChanged { remaining: 3, warning: true });
        hud.apply(&GameEvent::SessionEnded(SessionOutcome::Failed));
        assert_eq!(hud.message, Some(FAILED_MESSAGE));

        assert!(hud.apply(&GameEvent::SessionStarted));
        assert_eq!(hud.message, None);
        assert!(!hud.warning);
    }

    #[test]
    fn completed_overlay_text() {
        assert_eq!(outcome_message(SessionOutcome::Completed), COMPLETED_MESSAGE);
    }

    #[test]
    fn world_events_do_not_touch_hud() {
        let mut hud = HudState::new();
        assert!(!hud.apply(&GameEvent::ItemPickedUp(ItemId(0))));
        assert_eq!(hud, HudState::new());
    }

    #[test]
    fn line_includes_overlay() {
        let mut hud = HudState::new();
        present(
            &mut hud,
            &[
                GameEvent::TimeChanged { remaining: 42, warning: false },
                GameEvent::ObjectiveProgress { collected: 5, required: 5 },
                GameEvent::SessionEnded(SessionOutcome::Completed),
            ],
        );
        assert_eq!(hud.line(), "[0:42]  [5/5]  GAME COMPLETE!");
    }
}
