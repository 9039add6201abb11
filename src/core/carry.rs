//=========================================================================
// Carry State Machine
//=========================================================================
//
// Single-slot pickup and delivery rules over a world-owned item list.
//
// Transitions:
// ```text
//   Free ──attempt_pickup()──> Held(actor) ──attempt_deliver()──> Delivered
//                                  │
//                                  └──release_held()──> Free
// ```
//
// Range checks are strict `<`: an item or drop zone exactly at the
// range boundary is out of range.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use log::debug;

//=== Identifiers =========================================================

/// Index-stable identifier of a collectible item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

/// Identifier of an actor that can carry items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(pub u32);

/// Local offset of a carried item relative to its holder (in front of
/// the chest).
pub const CARRY_OFFSET: Vec3 = Vec3::new(0.0, 1.2, 0.4);

//=== Item ================================================================

/// A collectible owned by the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    /// World position while on the ground.
    pub position: Vec3,
    pub held_by: Option<ActorId>,
    pub delivered: bool,
}

impl Item {
    /// Creates a free item on the ground.
    pub fn new(id: ItemId, position: Vec3) -> Self {
        Self {
            id,
            position,
            held_by: None,
            delivered: false,
        }
    }

    /// Returns `true` if the item can be picked up.
    pub fn is_available(&self) -> bool {
        self.held_by.is_none() && !self.delivered
    }
}

//=== Actor ===============================================================

/// A controllable figure with a single carry slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: ActorId,
    pub position: Vec3,
    /// Yaw in radians about +Y; 0 faces +Z.
    pub heading: f32,
    slot: Option<ItemId>,
}

impl Actor {
    /// Creates an actor with an empty slot.
    pub fn new(id: ActorId, position: Vec3) -> Self {
        Self {
            id,
            position,
            heading: 0.0,
            slot: None,
        }
    }

    /// Returns the carried item, if any.
    pub fn held(&self) -> Option<ItemId> {
        self.slot
    }

    pub fn is_carrying(&self) -> bool {
        self.slot.is_some()
    }

    /// World position a carried item should be drawn at.
    pub fn carried_position(&self) -> Vec3 {
        self.position + CARRY_OFFSET
    }
}

//=== Transitions =========================================================

/// Picks up the nearest free item strictly within `max_range`.
///
/// Selection and binding happen in the same call: the returned item is
/// already held by `actor`. Ties go to the first item in slice order.
/// Does nothing while the actor already carries an item.
pub fn attempt_pickup(actor: &mut Actor, items: &mut [Item], max_range: f32) -> Option<ItemId> {
    if actor.is_carrying() {
        return None;
    }

    let mut best: Option<usize> = None;
    let mut best_distance = max_range;

    for (index, item) in items.iter().enumerate() {
        if !item.is_available() {
            continue;
        }
        let distance = actor.position.distance(item.position);
        if distance < best_distance {
            best_distance = distance;
            best = Some(index);
        }
    }

    let item = &mut items[best?];
    item.held_by = Some(actor.id);
    actor.slot = Some(item.id);

    debug!("Actor {:?} picked up {:?} at {:.2}", actor.id, item.id, best_distance);
    Some(item.id)
}

/// Delivers the carried item if the actor is strictly within
/// `drop_range` of `drop_zone`.
///
/// Out of range, or with nothing carried, nothing changes.
pub fn attempt_deliver(
    actor: &mut Actor,
    items: &mut [Item],
    drop_zone: Vec3,
    drop_range: f32,
) -> Option<ItemId> {
    let held = actor.slot?;

    let distance = actor.position.distance(drop_zone);
    if distance >= drop_range {
        return None;
    }

    let item = items.iter_mut().find(|item| item.id == held)?;
    item.held_by = None;
    item.delivered = true;
    item.position = drop_zone;
    actor.slot = None;

    debug!("Actor {:?} delivered {:?} at {:.2}", actor.id, held, distance);
    Some(held)
}

/// Drops the carried item where the actor stands without delivering it.
pub fn release_held(actor: &mut Actor, items: &mut [Item]) -> Option<ItemId> {
    let held = actor.slot.take()?;

    if let Some(item) = items.iter_mut().find(|item| item.id == held) {
        item.held_by = None;
        item.position = Vec3::new(actor.position.x, item.position.y, actor.position.z);
    }
    Some(held)
}

//=========================================================================
// Unit Tests
//=========================================================================
