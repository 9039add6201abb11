//=========================================================================
// Courier Scene
//=========================================================================
//
// Timed pickup-and-delivery run: walk to an item, pick it up, carry it to
// the drop zone, repeat until every required item is delivered or the
// clock runs out.
//
// Per tick:
// ```text
//   Restart edge? ── restart()
//   Active?  ── movement ── Interact edge ── pickup | deliver
//   pose change? ── PoseChanged
//   session events ── GameContext.events
// ```
//
// The countdown is a 1 s scheduler task owned by this scene. It is
// cancelled as soon as the session reaches a terminal status.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use glam::Vec3;
use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::Scene;
use crate::core::carry::{self, Actor, ActorId, Item, ItemId};
use crate::core::error::{self, ConfigError};
use crate::core::events::{ActorPose, GameEvent};
use crate::core::globals::GameContext;
use crate::core::input::GameKey;
use crate::core::movement::{self, Direction};
use crate::core::scheduler::TaskHandle;
use crate::core::session::{Session, SessionStatus};

//=== CourierConfig =======================================================

/// Layout and rules of a courier run.
#[derive(Debug, Clone, PartialEq)]
pub struct CourierConfig {
    /// Countdown length in seconds.
    pub total_duration: u32,
    pub required_count: u32,
    /// Remaining seconds at or below which the timer is highlighted.
    pub warning_threshold: u32,
    pub spawn_points: Vec<Vec3>,
    pub drop_zone: Vec3,
    pub pickup_range: f32,
    pub drop_range: f32,
    /// World units per logic tick.
    pub move_speed: f32,
    pub player_start: Vec3,
}

impl Default for CourierConfig {
    fn default() -> Self {
        Self {
            total_duration: 60,
            required_count: 5,
            warning_threshold: Session::DEFAULT_WARNING_THRESHOLD,
            spawn_points: vec![
                Vec3::new(3.0, 0.3, 1.0),
                Vec3::new(-3.0, 0.3, 2.0),
                Vec3::new(5.0, 0.3, -2.0),
                Vec3::new(0.0, 0.3, 4.0),
                Vec3::new(-2.0, 0.3, -3.0),
            ],
            drop_zone: Vec3::new(-5.0, 0.01, -5.0),
            pickup_range: 2.0,
            drop_range: 2.0,
            move_speed: 0.08,
            player_start: Vec3::ZERO,
        }
    }
}

impl CourierConfig {
    /// Rejects layouts that cannot produce a fair run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_duration == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.required_count == 0 {
            return Err(ConfigError::ZeroRequired);
        }
        if self.required_count as usize > self.spawn_points.len() {
            return Err(ConfigError::UnreachableObjective {
                required: self.required_count,
                available: self.spawn_points.len(),
            });
        }
        error::check_range("pickup_range", self.pickup_range)?;
        error::check_range("drop_range", self.drop_range)?;
        error::check_speed(self.move_speed)
    }
}

//=== CourierScene ========================================================

pub struct CourierScene {
    config: CourierConfig,
    session: Session,
    actor: Actor,
    items: Vec<Item>,
    pose: ActorPose,
    clock: Option<TaskHandle>,
}

impl CourierScene {
    pub const PLAYER: ActorId = ActorId(0);

    /// Builds the scene after validating `config`.
    pub fn new(config: CourierConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let session = Session::new(config.total_duration, config.required_count)
            .with_warning_threshold(config.warning_threshold);
        let actor = Actor::new(Self::PLAYER, config.player_start);
        let items = spawn_items(&config.spawn_points);

        Ok(Self {
            config,
            session,
            actor,
            items,
            pose: ActorPose::Idle,
            clock: None,
        })
    }

    //--- Query API --------------------------------------------------------

    pub fn config(&self) -> &CourierConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn pose(&self) -> ActorPose {
        self.pose
    }

    /// Handle of the running countdown task, if any.
    pub fn clock(&self) -> Option<TaskHandle> {
        self.clock
    }

    //--- Lifecycle --------------------------------------------------------

    /// Puts everything back to its starting state and begins a new run.
    ///
    /// Available at any time, including mid-run.
    pub fn restart(&mut self, context: &mut GameContext) {
        carry::release_held(&mut self.actor, &mut self.items);
        self.items = spawn_items(&self.config.spawn_points);

        self.actor.position = self.config.player_start;
        self.actor.heading = 0.0;
        self.set_pose(ActorPose::Idle, context);

        self.session.reset();
        self.start_clock(context);
        self.flush_session(context);

        info!("Courier run restarted");
    }

    //--- Internal Helpers -------------------------------------------------

    fn start_clock(&mut self, context: &mut GameContext) {
        self.stop_clock(context);
        self.clock = Some(context.scheduler.every(Duration::from_secs(1)));
    }

    fn stop_clock(&mut self, context: &mut GameContext) {
        if let Some(clock) = self.clock.take() {
            context.scheduler.cancel(clock);
            debug!("Countdown task cancelled");
        }
    }

    fn set_pose(&mut self, pose: ActorPose, context: &mut GameContext) {
        if self.pose != pose {
            self.pose = pose;
            context.events.push(GameEvent::PoseChanged(pose));
        }
    }

    /// Forwards session notifications and stops the clock once the run
    /// is over.
    fn flush_session(&mut self, context: &mut GameContext) {
        context.events.extend(self.session.take_events());
        if self.session.status().is_terminal() {
            self.stop_clock(context);
        }
    }

    fn interact(&mut self, context: &mut GameContext) {
        if self.actor.is_carrying() {
            let delivered = carry::attempt_deliver(
                &mut self.actor,
                &mut self.items,
                self.config.drop_zone,
                self.config.drop_range,
            );
            if let Some(id) = delivered {
                info!("Item {} delivered", id.0);
                context.events.push(GameEvent::ItemDelivered(id));
                self.session.record_collection();
            }
        } else if let Some(id) =
            carry::attempt_pickup(&mut self.actor, &mut self.items, self.config.pickup_range)
        {
            info!("Item {} picked up, carried at {}", id.0, self.actor.carried_position());
            context.events.push(GameEvent::ItemPickedUp(id));
        }
    }
}

fn spawn_items(points: &[Vec3]) -> Vec<Item> {
    points
        .iter()
        .enumerate()
        .map(|(index, &position)| Item::new(ItemId(index), position))
        .collect()
}

//=== Scene Implementation ================================================

impl Scene for CourierScene {
    fn name(&self) -> &'static str {
        "courier"
    }

    fn on_enter(&mut self, context: &mut GameContext) {
        self.session.start();
        self.start_clock(context);
        self.flush_session(context);
    }

    fn update(&mut self, context: &mut GameContext) {
        if context.keys.just_pressed(GameKey::Restart) {
            self.restart(context);
        }

        let mut moving = false;

        if self.session.status() == SessionStatus::Active {
            let dir = Direction::from_keys(&context.keys);
            let step = movement::step(
                self.actor.position,
                self.actor.heading,
                dir,
                self.config.move_speed,
            );
            self.actor.position = step.position;
            self.actor.heading = step.heading;
            moving = step.moving;

            if context.keys.just_pressed(GameKey::Interact) {
                self.interact(context);
            }
        }

        let pose = ActorPose::from_flags(moving, self.actor.is_carrying());
        self.set_pose(pose, context);
        self.flush_session(context);
    }

    fn on_task(&mut self, task: TaskHandle, context: &mut GameContext) {
        if self.clock != Some(task) {
            return;
        }
        self.session.tick();
        self.flush_session(context);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
