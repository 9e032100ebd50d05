use std::rc::Rc;

use glam::Vec2;
use crate::api::error::EngineError;
use crate::api::types::{AnimationId, SlotId};
use crate::components::direction::Direction;
use crate::components::entity::Entity;
use crate::core::collision::{Hitbox, Rect};
use crate::systems::control::{ControlScheme, Static};

/// Which animation an actor should show: walking or standing, and which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoseKey {
    pub moving: bool,
    pub facing: Direction,
}

impl PoseKey {
    pub fn new(moving: bool, facing: Direction) -> Self {
        Self { moving, facing }
    }

    fn slot(self) -> usize {
        self.moving as usize * 8 + self.facing.index() as usize
    }
}

/// Maps a pose to one of the entity's animations.
pub trait AnimationSet {
    fn resolve(&self, key: PoseKey) -> Option<AnimationId>;
}

/// Per-pose animation table: standing and moving, eight facings each.
///
/// Missing entries fall back from a diagonal facing to its horizontal, then
/// vertical neighbour, and from moving to standing. A sheet with only
/// left/right/up/down art therefore covers all sixteen poses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionalAnimations {
    table: [Option<AnimationId>; 16],
}

impl DirectionalAnimations {
    pub fn new() -> Self {
        Self::default()
    }

    /// The same animation for every pose.
    pub fn uniform(id: AnimationId) -> Self {
        Self {
            table: [Some(id); 16],
        }
    }

    pub fn with(mut self, key: PoseKey, id: AnimationId) -> Self {
        self.set(key, id);
        self
    }

    /// Set both the standing and moving animation for `facing`.
    pub fn with_facing(self, facing: Direction, standing: AnimationId, moving: AnimationId) -> Self {
        self.with(PoseKey::new(false, facing), standing)
            .with(PoseKey::new(true, facing), moving)
    }

    pub fn set(&mut self, key: PoseKey, id: AnimationId) {
        self.table[key.slot()] = Some(id);
    }

    pub fn clear(&mut self, key: PoseKey) {
        self.table[key.slot()] = None;
    }

    fn lookup(&self, moving: bool, facing: Direction) -> Option<AnimationId> {
        if let Some(id) = self.table[PoseKey::new(moving, facing).slot()] {
            return Some(id);
        }
        if !facing.is_diagonal() {
            return None;
        }
        let (ccw, cw) = (facing.rotate(-1), facing.rotate(1));
        let (first, second) = if matches!(ccw, Direction::East | Direction::West) {
            (ccw, cw)
        } else {
            (cw, ccw)
        };
        self.table[PoseKey::new(moving, first).slot()]
            .or(self.table[PoseKey::new(moving, second).slot()])
    }
}

impl AnimationSet for DirectionalAnimations {
    fn resolve(&self, key: PoseKey) -> Option<AnimationId> {
        self.lookup(key.moving, key.facing).or_else(|| {
            if key.moving {
                self.lookup(false, key.facing)
            } else {
                None
            }
        })
    }
}

/// A pool entry: an entity plus how it moves, animates and collides.
#[derive(Debug, Clone)]
pub struct Actor {
    pub entity: Entity,
    pub animations: DirectionalAnimations,
    /// Offset from the entity position to the draw origin.
    pub hotspot: Vec2,
    /// World units per frame while a control input is held.
    pub speed: f32,
    pub moving: bool,
    pub control: Rc<dyn ControlScheme>,
    /// Non-collidable actors never overlap anything.
    pub collidable: bool,
}

impl Actor {
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            animations: DirectionalAnimations::new(),
            hotspot: Vec2::ZERO,
            speed: 1.0,
            moving: false,
            control: Rc::new(Static),
            collidable: true,
        }
    }

    // -- Builder pattern --

    pub fn with_animations(mut self, animations: DirectionalAnimations) -> Self {
        self.animations = animations;
        self
    }

    pub fn with_hotspot(mut self, x: f32, y: f32) -> Self {
        self.hotspot = Vec2::new(x, y);
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_control(mut self, control: Rc<dyn ControlScheme>) -> Self {
        self.control = control;
        self
    }

    pub fn with_collidable(mut self, collidable: bool) -> Self {
        self.collidable = collidable;
        self
    }

    pub fn pose(&self) -> PoseKey {
        PoseKey::new(self.moving, self.entity.facing)
    }

    /// Point the entity's active animation at the one for the current pose.
    /// Returns false when no animation covers the pose.
    pub fn sync_animation(&mut self) -> bool {
        match self.animations.resolve(self.pose()) {
            Some(id) => self.entity.select_id(id),
            None => false,
        }
    }

    /// Where the sprite's top-left lands in world space.
    pub fn draw_origin(&self) -> Vec2 {
        self.entity.pos - self.hotspot
    }

    /// World-space box of the frame currently shown for this pose.
    pub fn bounds(&self) -> Option<Rect> {
        let animation = match self.animations.resolve(self.pose()) {
            Some(id) => self.entity.animation_by_id(id),
            None => self.entity.active(),
        }?;
        let size = animation.current_frame().size() * self.entity.scale;
        let origin = self.draw_origin();
        Some(Rect::new(origin.x, origin.y, size.x, size.y))
    }

    pub fn overlaps(&self, other: &Actor) -> bool {
        if !self.collidable || !other.collidable {
            return false;
        }
        match (self.bounds(), other.bounds()) {
            (Some(a), Some(b)) => Hitbox::Rect(a).collides(&Hitbox::Rect(b)),
            _ => false,
        }
    }

    pub fn collides_with(&self, hitbox: &Hitbox) -> bool {
        self.collidable
            && self
                .bounds()
                .is_some_and(|bounds| Hitbox::Rect(bounds).collides(hitbox))
    }
}

/// Fixed-capacity slot array of actors.
/// Removal only opens a slot; nothing is ever moved, so a [`SlotId`] stays
/// valid until that slot is filled again.
#[derive(Debug, Clone)]
pub struct EntityPool {
    slots: Vec<Option<Actor>>,
}

impl EntityPool {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Put `actor` in the lowest open slot.
    pub fn add(&mut self, actor: Actor) -> Result<SlotId, EngineError> {
        match self.first_open() {
            Some(slot) => {
                self.slots[slot.0] = Some(actor);
                Ok(slot)
            }
            None => {
                log::debug!("entity pool full ({})", self.capacity());
                Err(EngineError::PoolFull {
                    capacity: self.capacity(),
                })
            }
        }
    }

    /// Write `actor` into `slot`, open or not. Returns whatever was there.
    pub fn set(&mut self, slot: SlotId, actor: Actor) -> Result<Option<Actor>, EngineError> {
        let capacity = self.capacity();
        let entry = self
            .slots
            .get_mut(slot.0)
            .ok_or(EngineError::SlotOutOfRange {
                slot: slot.0,
                capacity,
            })?;
        Ok(entry.replace(actor))
    }

    /// Open `slot`. Returns the actor that was there.
    pub fn remove(&mut self, slot: SlotId) -> Option<Actor> {
        let removed = self.slots.get_mut(slot.0)?.take();
        if removed.is_some() {
            log::debug!("entity slot {} opened", slot.0);
        }
        removed
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    pub fn get(&self, slot: SlotId) -> Option<&Actor> {
        self.slots.get(slot.0)?.as_ref()
    }

    pub fn get_mut(&mut self, slot: SlotId) -> Option<&mut Actor> {
        self.slots.get_mut(slot.0)?.as_mut()
    }

    pub fn is_open(&self, slot: SlotId) -> bool {
        matches!(self.slots.get(slot.0), Some(None))
    }

    /// Occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &Actor)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|a| (SlotId(i), a)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SlotId, &mut Actor)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, s)| s.as_mut().map(|a| (SlotId(i), a)))
    }

    pub fn open_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.capacity() - self.open_count()
    }

    pub fn first_open(&self) -> Option<SlotId> {
        self.slots.iter().position(|s| s.is_none()).map(SlotId)
    }

    pub fn last_occupied(&self) -> Option<SlotId> {
        self.slots.iter().rposition(|s| s.is_some()).map(SlotId)
    }

    /// Other actors whose bounds overlap the actor in `slot`.
    pub fn overlapping(&self, slot: SlotId) -> Vec<SlotId> {
        let Some(actor) = self.get(slot) else {
            return Vec::new();
        };
        self.iter()
            .filter(|(other_slot, other)| *other_slot != slot && actor.overlaps(other))
            .map(|(other_slot, _)| other_slot)
            .collect()
    }
}
