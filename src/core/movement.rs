//=========================================================================
// Movement & Collision
//=========================================================================
//
// Per-frame directional stepping on the XZ plane with axis-aligned
// bounding-box blocking.
//
// Architecture:
//   KeyState → Direction::from_keys() → step() → resolve_move(obstacles)
//
// Speeds are in world units per logic tick, not per second: the logic
// thread runs at a fixed rate, so a tick is the unit of motion.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Internal Dependencies ===============================================

use crate::core::input::{GameKey, KeyState};

//=== Aabb ================================================================

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Builds a box from its center and full size.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Builds a box standing on `feet` with the given footprint and height.
    pub fn standing(feet: Vec3, half_width: f32, height: f32) -> Self {
        Self {
            min: Vec3::new(feet.x - half_width, feet.y, feet.z - half_width),
            max: Vec3::new(feet.x + half_width, feet.y + height, feet.z + half_width),
        }
    }

    /// Strict overlap test: boxes that only touch do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    /// Per-axis overlap depth with `other`; an axis with no overlap is
    /// zero or negative.
    pub fn penetration(&self, other: &Aabb) -> Vec3 {
        self.max.min(other.max) - self.min.max(other.min)
    }

    /// Returns the same box moved by `offset`.
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

//=== Direction ===========================================================

/// Unnormalized movement intent on the XZ plane.
///
/// Each axis is -1, 0 or 1. Diagonals are not normalized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Direction {
    pub x: f32,
    pub z: f32,
}

impl Direction {
    /// Reads the four movement keys. Opposite keys cancel out.
    pub fn from_keys(keys: &KeyState) -> Self {
        let mut dir = Self::default();
        if keys.is_down(GameKey::Forward) {
            dir.z += 1.0;
        }
        if keys.is_down(GameKey::Back) {
            dir.z -= 1.0;
        }
        if keys.is_down(GameKey::Left) {
            dir.x -= 1.0;
        }
        if keys.is_down(GameKey::Right) {
            dir.x += 1.0;
        }
        dir
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.z == 0.0
    }

    /// Yaw facing this direction (0 = +Z, π/2 = +X).
    pub fn heading(&self) -> f32 {
        self.x.atan2(self.z)
    }
}

//=== Stepping ============================================================

/// Result of one movement step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub position: Vec3,
    pub heading: f32,
    /// `true` if a movement key was held, even when the step was blocked.
    pub moving: bool,
}

/// Moves `position` by `speed` along each pressed axis.
///
/// Heading only changes while there is a direction; standing still keeps
/// the last facing.
pub fn step(position: Vec3, heading: f32, dir: Direction, speed: f32) -> Step {
    if dir.is_zero() {
        return Step {
            position,
            heading,
            moving: false,
        };
    }

    Step {
        position: position + Vec3::new(dir.x * speed, 0.0, dir.z * speed),
        heading: dir.heading(),
        moving: true,
    }
}

//=== Collision ===========================================================

/// Footprint of a walking figure, measured from its feet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub half_width: f32,
    pub height: f32,
}

impl Body {
    pub fn bounds_at(&self, feet: Vec3) -> Aabb {
        Aabb::standing(feet, self.half_width, self.height)
    }
}

impl Default for Body {
    fn default() -> Self {
        Self {
            half_width: 0.3,
            height: 1.8,
        }
    }
}

/// Moves from `from` toward `to` unless that would overlap an obstacle.
///
/// A blocked move is retried with only its X component, then only its Z
/// component, so the body slides along walls instead of sticking.
///
/// A body that already overlaps an obstacle at `from` may only move in
/// ways that do not push it deeper on any axis, so it can walk back out
/// but never through.
pub fn resolve_move(from: Vec3, to: Vec3, body: &Body, obstacles: &[Aabb]) -> Vec3 {
    let start = body.bounds_at(from);
    let free = |feet: Vec3| {
        let bounds = body.bounds_at(feet);
        obstacles.iter().all(|obstacle| {
            if !bounds.overlaps(obstacle) {
                return true;
            }
            if !start.overlaps(obstacle) {
                return false;
            }
            let before = start.penetration(obstacle);
            let after = bounds.penetration(obstacle);
            after.cmple(before + Vec3::splat(PENETRATION_EPSILON)).all()
        })
    };

    if free(to) {
        return to;
    }

    let x_only = Vec3::new(to.x, from.y, from.z);
    if x_only != from && free(x_only) {
        return x_only;
    }

    let z_only = Vec3::new(from.x, from.y, to.z);
    if z_only != from && free(z_only) {
        return z_only;
    }

    from
}

/// Float slack when comparing overlap depths before and after a step.
const PENETRATION_EPSILON: f32 = 1e-5;

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn keys(pressed: &[GameKey]) -> KeyState {
        let mut state = KeyState::new();
        for &key in pressed {
            state.press(key);
        }
        state
    }

    //=====================================================================
    // Aabb
    //=====================================================================

    #[test]
    fn from_center_size_spans_half_each_side() {
        let b = Aabb::from_center_size(Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b.min, Vec3::new(0.0, -1.0, -2.0));
        assert_eq!(b.max, Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn overlapping_boxes() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::splat(0.5), Vec3::splat(1.5));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn touching_boxes_do_not_overlap() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn separated_on_one_axis_do_not_overlap() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let above = a.translated(Vec3::new(0.5, 3.0, 0.5));
        assert!(!a.overlaps(&above));
    }

    //=====================================================================
    // Direction & step
    //=====================================================================

    #[test]
    fn direction_from_keys() {
        assert_eq!(Direction::from_keys(&keys(&[GameKey::Forward])), Direction { x: 0.0, z: 1.0 });
        assert_eq!(
            Direction::from_keys(&keys(&[GameKey::Back, GameKey::Left])),
            Direction { x: -1.0, z: -1.0 }
        );
    }

    #[test]
    fn opposite_keys_cancel() {
        let dir = Direction::from_keys(&keys(&[GameKey::Left, GameKey::Right]));
        assert!(dir.is_zero());
    }

    #[test]
    fn headings_match_compass() {
        assert_eq!(Direction { x: 0.0, z: 1.0 }.heading(), 0.0);
        assert!((Direction { x: 1.0, z: 0.0 }.heading() - FRAC_PI_2).abs() < 1e-6);
        assert!((Direction { x: 0.0, z: -1.0 }.heading() - PI).abs() < 1e-6);
        assert!((Direction { x: 1.0, z: 1.0 }.heading() - FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn step_moves_per_axis() {
        let result = step(Vec3::ZERO, 0.0, Direction { x: 1.0, z: 1.0 }, 0.08);
        assert!(result.moving);
        assert!((result.position.x - 0.08).abs() < 1e-6);
        assert!((result.position.z - 0.08).abs() < 1e-6);
    }

    #[test]
    fn idle_step_keeps_position_and_heading() {
        let start = Vec3::new(1.0, 0.0, 2.0);
        let result = step(start, 1.25, Direction::default(), 0.08);
        assert!(!result.moving);
        assert_eq!(result.position, start);
        assert_eq!(result.heading, 1.25);
    }

    //=====================================================================
    // resolve_move
    //=====================================================================

    #[test]
    fn free_move_is_accepted() {
        let to = Vec3::new(0.1, 0.0, 0.0);
        assert_eq!(resolve_move(Vec3::ZERO, to, &Body::default(), &[]), to);
    }

    #[test]
    fn blocked_move_stays_put() {
        let wall = Aabb::new(Vec3::new(0.35, 0.0, -5.0), Vec3::new(1.0, 3.0, 5.0));
        let to = Vec3::new(0.1, 0.0, 0.0);
        assert_eq!(resolve_move(Vec3::ZERO, to, &Body::default(), &[wall]), Vec3::ZERO);
    }

    #[test]
    fn diagonal_into_wall_slides_along_it() {
        let wall = Aabb::new(Vec3::new(0.35, 0.0, -5.0), Vec3::new(1.0, 3.0, 5.0));
        let to = Vec3::new(0.1, 0.0, 0.1);
        let result = resolve_move(Vec3::ZERO, to, &Body::default(), &[wall]);
        assert_eq!(result, Vec3::new(0.0, 0.0, 0.1));
    }

    #[test]
    fn body_inside_obstacle_can_walk_out() {
        let stool = Aabb::new(Vec3::new(-0.2, 0.0, -0.2), Vec3::new(0.2, 0.5, 0.2));
        let to = Vec3::new(0.0, 0.0, 0.1);
        assert_eq!(resolve_move(Vec3::ZERO, to, &Body::default(), &[stool]), to);
    }

    #[test]
    fn body_inside_obstacle_cannot_walk_deeper() {
        // Body overlaps the near edge of the box by 0.2 on Z.
        let stool = Aabb::new(Vec3::new(-0.2, 0.0, 0.1), Vec3::new(0.2, 0.5, 0.5));
        let from = Vec3::ZERO;

        let deeper = Vec3::new(0.0, 0.0, 0.08);
        assert_eq!(resolve_move(from, deeper, &Body::default(), &[stool]), from);

        let back_out = Vec3::new(0.0, 0.0, -0.08);
        assert_eq!(resolve_move(from, back_out, &Body::default(), &[stool]), back_out);
    }

    #[test]
    fn body_inside_obstacle_slides_out_sideways() {
        let stool = Aabb::new(Vec3::new(0.1, 0.0, 0.1), Vec3::new(0.5, 0.5, 0.5));
        let to = Vec3::new(-0.08, 0.0, 0.08);
        let result = resolve_move(Vec3::ZERO, to, &Body::default(), &[stool]);
        assert_eq!(result, Vec3::new(-0.08, 0.0, 0.0));
    }

    #[test]
    fn penetration_per_axis() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::new(0.75, 0.5, 2.0), Vec3::new(2.0, 2.0, 3.0));
        assert_eq!(a.penetration(&b), Vec3::new(0.25, 0.5, -1.0));
    }

    #[test]
    fn overhead_obstacle_does_not_block() {
        let shelf = Aabb::from_center_size(Vec3::new(0.0, 2.9, 0.0), Vec3::new(3.0, 0.12, 0.25));
        let to = Vec3::new(0.0, 0.0, 0.1);
        assert_eq!(resolve_move(Vec3::ZERO, to, &Body::default(), &[shelf]), to);
    }
}
