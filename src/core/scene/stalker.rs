//=========================================================================
// Stalker Scene
//=========================================================================
//
// Walking figure in a closed 15×15 room furnished with solid props.
//
// Control modes:
// ```text
//   Patrol (autopilot) ──first movement input──> Manual
// ```
//
// In manual mode the figure steps per tick and is blocked by the room's
// boxes. Patrol segments are animation only and ignore collision; a figure
// left overlapping a prop can only move out of it.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use log::info;

//=== Internal Dependencies ===============================================

use super::Scene;
use crate::core::error::{self, ConfigError};
use crate::core::events::{ActorPose, GameEvent};
use crate::core::globals::GameContext;
use crate::core::movement::{self, Aabb, Body, Direction};
use crate::core::patrol::{Patrol, PatrolConfig};
use crate::core::scheduler::TaskHandle;

//=== Room Layout =========================================================

/// Solid boxes of the furnished room.
///
/// Two sides are real walls; the open sides are closed off at the floor
/// edge. Overhead props are included and never block a standing body.
pub fn room_obstacles() -> Vec<Aabb> {
    vec![
        // Walls
        Aabb::from_center_size(Vec3::new(0.0, 2.5, 7.5), Vec3::new(15.0, 5.0, 0.1)),
        Aabb::from_center_size(Vec3::new(-7.5, 2.5, 0.0), Vec3::new(0.1, 5.0, 15.0)),
        // Floor edges
        Aabb::from_center_size(Vec3::new(7.5, 2.5, 0.0), Vec3::new(0.1, 5.0, 15.0)),
        Aabb::from_center_size(Vec3::new(0.0, 2.5, -7.5), Vec3::new(15.0, 5.0, 0.1)),
        // Main table, auxiliary table, stool
        Aabb::new(Vec3::new(-1.5, 0.0, -0.75), Vec3::new(1.5, 0.875, 0.75)),
        Aabb::new(Vec3::new(1.5, 0.0, -1.2), Vec3::new(2.9, 0.76, -0.4)),
        Aabb::new(Vec3::new(-1.4, 0.0, 1.2), Vec3::new(-1.0, 0.54, 1.6)),
        // Crate with the small box on top
        Aabb::new(Vec3::new(1.1, 0.0, 1.6), Vec3::new(1.9, 0.775, 2.4)),
        // Shelf
        Aabb::from_center_size(Vec3::new(0.0, 2.9, 6.95), Vec3::new(3.0, 0.12, 0.25)),
    ]
}

//=== StalkerConfig =======================================================

#[derive(Debug, Clone, PartialEq)]
pub struct StalkerConfig {
    pub start: Vec3,
    /// World units per logic tick.
    pub move_speed: f32,
    pub body: Body,
    pub obstacles: Vec<Aabb>,
    /// Autopilot used until the first movement input. `None` starts in
    /// manual control.
    pub patrol: Option<PatrolConfig>,
}

impl Default for StalkerConfig {
    fn default() -> Self {
        Self {
            start: Vec3::new(0.0, 0.0, 3.0),
            move_speed: 0.08,
            body: Body::default(),
            obstacles: room_obstacles(),
            patrol: Some(PatrolConfig::default()),
        }
    }
}

impl StalkerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        error::check_speed(self.move_speed)?;
        error::check_range("body.half_width", self.body.half_width)?;
        error::check_range("body.height", self.body.height)?;

        if let Some(patrol) = &self.patrol {
            error::check_range("patrol.move_distance", patrol.move_distance)?;
            if patrol.segment_duration.is_zero() || patrol.loop_period.is_zero() {
                return Err(ConfigError::ZeroDuration);
            }
        }
        Ok(())
    }
}

//=== StalkerScene ========================================================

pub struct StalkerScene {
    config: StalkerConfig,
    position: Vec3,
    heading: f32,
    pose: ActorPose,
    patrol: Option<Patrol>,
}

impl StalkerScene {
    pub fn new(config: StalkerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let patrol = config.patrol.clone().map(Patrol::new);
        Ok(Self {
            position: config.start,
            heading: 0.0,
            pose: ActorPose::Idle,
            patrol,
            config,
        })
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn pose(&self) -> ActorPose {
        self.pose
    }

    /// Returns `true` while the autopilot drives the figure.
    pub fn is_patrolling(&self) -> bool {
        self.patrol.as_ref().is_some_and(Patrol::is_running)
    }

    //--- Internal Helpers -------------------------------------------------

    fn take_control(&mut self, context: &mut GameContext) {
        if let Some(mut patrol) = self.patrol.take() {
            patrol.stop(&mut context.scheduler);
            info!("Patrol interrupted, manual control");
        }
    }

    fn walk(&mut self, dir: Direction) -> bool {
        let step = movement::step(self.position, self.heading, dir, self.config.move_speed);
        self.heading = step.heading;
        self.position = movement::resolve_move(
            self.position,
            step.position,
            &self.config.body,
            &self.config.obstacles,
        );
        step.moving
    }
}

//=== Scene Implementation ================================================

impl Scene for StalkerScene {
    fn name(&self) -> &'static str {
        "stalker"
    }

    fn on_enter(&mut self, context: &mut GameContext) {
        if let Some(patrol) = self.patrol.as_mut() {
            patrol.start(&mut context.scheduler, self.position, self.heading);
        }
    }

    fn update(&mut self, context: &mut GameContext) {
        if context.keys.any_movement() {
            self.take_control(context);
        }
        let dir = Direction::from_keys(&context.keys);

        let moving = match self.patrol.as_mut() {
            Some(patrol) => match patrol.update(context.dt) {
                Some((position, heading)) => {
                    self.position = position;
                    self.heading = heading;
                    true
                }
                None => false,
            },
            None => self.walk(dir),
        };

        let pose = ActorPose::from_flags(moving, false);
        if pose != self.pose {
            self.pose = pose;
            context.events.push(GameEvent::PoseChanged(pose));
        }
    }

    fn on_task(&mut self, task: TaskHandle, _context: &mut GameContext) {
        if let Some(patrol) = self.patrol.as_mut() {
            patrol.on_task(task, self.position, self.heading);
        }
    }

    fn on_visibility_changed(&mut self, visible: bool, _context: &mut GameContext) {
        if visible {
            info!("Stalker resumed at ({:.2}, {:.2})", self.position.x, self.position.z);
        } else {
            info!("Stalker paused");
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::GameKey;
    use std::time::Duration;

    const TICK: Duration = Duration::from_millis(100);

    fn manual() -> (StalkerScene, GameContext) {
        let config = StalkerConfig {
            patrol: None,
            ..StalkerConfig::default()
        };
        let mut scene = StalkerScene::new(config).unwrap();
        let mut context = GameContext::new(TICK);
        scene.on_enter(&mut context);
        (scene, context)
    }

    fn run(scene: &mut StalkerScene, context: &mut GameContext, ticks: usize) {
        for _ in 0..ticks {
            for task in context.scheduler.advance(context.dt) {
                scene.on_task(task, context);
            }
            scene.update(context);
        }
    }

    //=====================================================================
    // Config
    //=====================================================================

    #[test]
    fn default_config_is_valid() {
        assert!(StalkerConfig::default().validate().is_ok());
    }

    #[test]
    fn config_rejects_bad_speed() {
        let config = StalkerConfig {
            move_speed: 0.0,
            ..StalkerConfig::default()
        };
        assert_eq!(StalkerScene::new(config).err(), Some(ConfigError::InvalidSpeed(0.0)));
    }

    #[test]
    fn start_position_is_clear_of_props() {
        let config = StalkerConfig::default();
        let bounds = config.body.bounds_at(config.start);
        assert!(config.obstacles.iter().all(|obstacle| !bounds.overlaps(obstacle)));
    }

    //=====================================================================
    // Manual control
    //=====================================================================

    #[test]
    fn manual_walk_moves_figure() {
        let (mut scene, mut context) = manual();
        context.keys.press(GameKey::Left);
        run(&mut scene, &mut context, 5);

        assert!((scene.position().x + 0.4).abs() < 1e-4);
        assert_eq!(scene.pose(), ActorPose::Walking);
    }

    #[test]
    fn back_wall_blocks_forward_walk() {
        let (mut scene, mut context) = manual();
        context.keys.press(GameKey::Forward);
        run(&mut scene, &mut context, 200);

        // Wall face at z = 7.45, body half width 0.3.
        assert!(scene.position().z <= 7.15 + 1e-4);
        assert!(scene.position().z > 7.0);
    }

    #[test]
    fn crate_blocks_walk() {
        let (mut scene, mut context) = manual();
        scene.position = Vec3::new(1.5, 0.0, 3.0);
        context.keys.press(GameKey::Back);
        run(&mut scene, &mut context, 20);

        // Crate top face at z = 2.4.
        assert!(scene.position().z >= 2.7 - 1e-4);
    }

    //=====================================================================
    // Patrol
    //=====================================================================

    #[test]
    fn patrol_drives_figure_until_input() {
        let mut scene = StalkerScene::new(StalkerConfig::default()).unwrap();
        let mut context = GameContext::new(TICK);
        scene.on_enter(&mut context);
        assert!(scene.is_patrolling());

        run(&mut scene, &mut context, 10);
        assert!((scene.position() - Vec3::new(1.0, 0.0, 1.1)).length() < 1e-4);

        context.keys.press(GameKey::Left);
        run(&mut scene, &mut context, 1);
        assert!(!scene.is_patrolling());
        assert!(context.scheduler.is_empty());
    }

    #[test]
    fn opposite_keys_still_take_control() {
        let mut scene = StalkerScene::new(StalkerConfig::default()).unwrap();
        let mut context = GameContext::new(TICK);
        scene.on_enter(&mut context);

        context.keys.press(GameKey::Left);
        context.keys.press(GameKey::Right);
        run(&mut scene, &mut context, 1);

        assert!(!scene.is_patrolling());
        assert_eq!(scene.pose(), ActorPose::Idle);
    }

    #[test]
    fn stool_blocks_walk_after_patrol_ends_inside_it() {
        let mut scene = StalkerScene::new(StalkerConfig::default()).unwrap();
        let mut context = GameContext::new(TICK);
        scene.on_enter(&mut context);
        run(&mut scene, &mut context, 30);

        // Walls, floor edges, tables, then the stool.
        let stool = scene.config.obstacles[6];
        let body = scene.config.body;
        let parked = scene.position();
        assert!(body.bounds_at(parked).overlaps(&stool));
        let depth = body.bounds_at(parked).penetration(&stool);

        context.keys.press(GameKey::Forward);
        run(&mut scene, &mut context, 20);

        assert!(!scene.is_patrolling());
        assert!(scene.position().z - body.half_width < stool.max.z);
        let after = body.bounds_at(scene.position()).penetration(&stool);
        assert!(after.z <= depth.z + 1e-4, "no deeper than where the patrol left it");

        // Sideways is the way out; the main table blocks walking back.
        context.keys.release(GameKey::Forward);
        context.keys.press(GameKey::Right);
        run(&mut scene, &mut context, 10);
        assert!(!body.bounds_at(scene.position()).overlaps(&stool));
    }

    #[test]
    fn patrol_alternates_direction_on_loop() {
        let mut scene = StalkerScene::new(StalkerConfig::default()).unwrap();
        let mut context = GameContext::new(TICK);
        scene.on_enter(&mut context);

        run(&mut scene, &mut context, 30);
        assert!((scene.position() - Vec3::new(-1.0, 0.0, 1.1)).length() < 1e-4);
        assert_eq!(scene.pose(), ActorPose::Idle, "holding between segments");
    }
}
