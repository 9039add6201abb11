//=========================================================================
// Patrol
//=========================================================================
//
// Back-and-forth walk along the X axis, restarted on a fixed interval.
//
// Timeline (defaults):
// ```text
//   t=0s   segment → right end   (1s, eased)   heading → +π/2 by 0.5s
//   t=1s   hold
//   t=2s   segment → left end    (1s, eased)   heading → -π/2 by 0.5s
//   t=3s   hold
//   ...
// ```
//
// The interval lives in the Scheduler; stopping the patrol cancels its
// task handle. Segment interpolation is advanced by the per-frame update.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::time::Duration;

use glam::Vec3;
use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::scheduler::{Scheduler, TaskHandle};

//=== Easing ==============================================================

/// Sine ease-in over `t ∈ [0, 1]`.
pub fn sine_ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (FRAC_PI_2 * (1.0 - t)).sin()
}

/// Adjusts `(from, to)` so interpolating between them turns the short
/// way around the circle.
pub fn shortest_arc(from: f32, to: f32) -> (f32, f32) {
    if (to - from).abs() <= PI {
        return (from, to);
    }
    if to > from {
        (from + TAU, to)
    } else {
        (from, to + TAU)
    }
}

//=== PatrolConfig ========================================================

/// Shape of the patrol path and its timing.
#[derive(Debug, Clone, PartialEq)]
pub struct PatrolConfig {
    /// Total distance between the two ends.
    pub move_distance: f32,
    /// Duration of each one-way walk.
    pub segment_duration: Duration,
    /// Interval between segment starts.
    pub loop_period: Duration,
    pub center_x: f32,
    pub fixed_y: f32,
    pub fixed_z: f32,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            move_distance: 2.0,
            segment_duration: Duration::from_secs(1),
            loop_period: Duration::from_secs(2),
            center_x: 0.0,
            fixed_y: 0.0,
            fixed_z: 1.1,
        }
    }
}

impl PatrolConfig {
    pub fn left_end(&self) -> Vec3 {
        Vec3::new(self.center_x - self.move_distance / 2.0, self.fixed_y, self.fixed_z)
    }

    pub fn right_end(&self) -> Vec3 {
        Vec3::new(self.center_x + self.move_distance / 2.0, self.fixed_y, self.fixed_z)
    }
}

//=== Segment =============================================================

#[derive(Debug, Clone, PartialEq)]
struct Segment {
    from: Vec3,
    to: Vec3,
    from_yaw: f32,
    to_yaw: f32,
    elapsed: Duration,
    duration: Duration,
}

impl Segment {
    fn progress(&self) -> f32 {
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    fn sample(&self) -> (Vec3, f32) {
        let t = self.progress();
        let position = self.from.lerp(self.to, sine_ease_in(t));

        // Rotation completes at the halfway point, then holds.
        let turn = sine_ease_in((t * 2.0).min(1.0));
        let heading = self.from_yaw + (self.to_yaw - self.from_yaw) * turn;

        (position, heading)
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

//=== Patrol ==============================================================

/// Interval-driven patrol for a single figure.
#[derive(Debug)]
pub struct Patrol {
    config: PatrolConfig,
    going_right: bool,
    segment: Option<Segment>,
    task: Option<TaskHandle>,
}

impl Patrol {
    pub fn new(config: PatrolConfig) -> Self {
        Self {
            config,
            going_right: true,
            segment: None,
            task: None,
        }
    }

    pub fn config(&self) -> &PatrolConfig {
        &self.config
    }

    /// Starts (or restarts) the patrol from the figure's current pose.
    ///
    /// The first segment begins immediately; later ones begin on each
    /// scheduler firing.
    pub fn start(&mut self, scheduler: &mut Scheduler, position: Vec3, heading: f32) {
        self.stop(scheduler);

        self.going_right = true;
        self.task = Some(scheduler.every(self.config.loop_period));
        self.begin_segment(position, heading);

        info!(
            "Patrol started (every {:?}, span {:.1})",
            self.config.loop_period, self.config.move_distance
        );
    }

    /// Cancels the interval and drops any segment in progress.
    pub fn stop(&mut self, scheduler: &mut Scheduler) {
        if let Some(task) = self.task.take() {
            scheduler.cancel(task);
            self.segment = None;
            debug!("Patrol stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    pub fn task(&self) -> Option<TaskHandle> {
        self.task
    }

    /// Handles a scheduler firing. Returns `true` if it belonged to this
    /// patrol.
    pub fn on_task(&mut self, handle: TaskHandle, position: Vec3, heading: f32) -> bool {
        if self.task != Some(handle) {
            return false;
        }
        self.begin_segment(position, heading);
        true
    }

    /// Advances the current segment. Returns the new pose while a segment
    /// is in progress.
    pub fn update(&mut self, dt: Duration) -> Option<(Vec3, f32)> {
        let segment = self.segment.as_mut()?;
        segment.elapsed += dt;
        let pose = segment.sample();

        if segment.is_finished() {
            self.segment = None;
        }
        Some(pose)
    }

    //--- Internal Helpers -------------------------------------------------

    fn begin_segment(&mut self, position: Vec3, heading: f32) {
        let (to, target_yaw) = if self.going_right {
            (self.config.right_end(), FRAC_PI_2)
        } else {
            (self.config.left_end(), -FRAC_PI_2)
        };
        let (from_yaw, to_yaw) = shortest_arc(heading, target_yaw);

        self.segment = Some(Segment {
            from: position,
            to,
            from_yaw,
            to_yaw,
            elapsed: Duration::ZERO,
            duration: self.config.segment_duration,
        });
        self.going_right = !self.going_right;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
