//=========================================================================
// Scheduler
//=========================================================================
//
// Fixed-interval tasks advanced by logic time, with cancellation handles.
//
// Architecture:
//   every(period) → TaskHandle
//   advance(dt)   → accumulate per task → Vec<TaskHandle> due this tick
//
// Tasks carry no callback; the owner matches returned handles against
// the ones it holds. A paused scheduler accumulates nothing, so pausing
// on visibility loss and unpausing later resumes each task's phase where
// it stopped.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, warn};

//=== TaskHandle ==========================================================

/// Cancellation handle for a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

//=== TaskEntry ===========================================================

#[derive(Debug)]
struct TaskEntry {
    handle: TaskHandle,
    period: Duration,
    accumulated: Duration,
}

//=== Scheduler ===========================================================

/// Owns repeating timers for the logic thread.
#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<TaskEntry>,
    next_id: u64,
    paused: bool,
}

impl Scheduler {
    /// Maximum firings of one task per [`Scheduler::advance`] call.
    ///
    /// Extra periods beyond this are dropped after a long stall.
    pub const MAX_CATCH_UP: u32 = 4;

    /// Creates an empty, running scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Task Management --------------------------------------------------

    /// Schedules a task that fires every `period`.
    ///
    /// The first firing happens one full period from now.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn every(&mut self, period: Duration) -> TaskHandle {
        assert!(!period.is_zero(), "Task period must be positive");

        let handle = TaskHandle(self.next_id);
        self.next_id += 1;

        self.tasks.push(TaskEntry {
            handle,
            period,
            accumulated: Duration::ZERO,
        });

        debug!("Scheduled task {:?} every {:?}", handle, period);
        handle
    }

    /// Cancels a task. Returns `false` if it was not scheduled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.handle != handle);
        let removed = self.tasks.len() != before;
        if removed {
            debug!("Cancelled task {:?}", handle);
        }
        removed
    }

    /// Returns `true` if the task is still scheduled.
    pub fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|task| task.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    //--- Global Pause -----------------------------------------------------

    /// Pauses every task (visibility loss).
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Undoes [`Scheduler::pause`].
    pub fn unpause(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    //--- Advancing --------------------------------------------------------

    /// Advances logic time and returns every firing due, in registration
    /// order. A task due twice in one call appears twice.
    pub fn advance(&mut self, dt: Duration) -> Vec<TaskHandle> {
        let mut fired = Vec::new();
        if self.paused {
            return fired;
        }

        for task in &mut self.tasks {
            task.accumulated += dt;

            let mut count = 0;
            while task.accumulated >= task.period {
                task.accumulated -= task.period;
                if count < Self::MAX_CATCH_UP {
                    fired.push(task.handle);
                }
                count += 1;
            }

            if count > Self::MAX_CATCH_UP {
                warn!(
                    "Task {:?} fell behind, dropped {} firings",
                    task.handle,
                    count - Self::MAX_CATCH_UP
                );
            }
        }

        fired
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
