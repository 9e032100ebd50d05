use glam::Vec2;
use crate::api::types::SlotId;
use crate::components::color::Color;
use crate::components::entity::{wrap_angle, Entity};
use crate::core::pool::EntityPool;
use crate::renderer::screen::Screen;

/// Which follow behaviours a camera applies on top of copying the target position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FollowFlags(u8);

impl FollowFlags {
    /// Copy the entity's rotation onto the camera.
    pub const ROTATE_WITH_ENTITY: FollowFlags = FollowFlags(1 << 0);
    /// Rotate the follow offset by the entity's rotation.
    pub const OFFSET_WITH_ROTATION: FollowFlags = FollowFlags(1 << 1);
    /// Zoom to the inverse of the entity's scale.
    pub const INVERT_SCALE_WITH_ENTITY: FollowFlags = FollowFlags(1 << 2);
    /// Multiply the follow offset by the entity's scale.
    pub const OFFSET_WITH_SCALE: FollowFlags = FollowFlags(1 << 3);

    pub const fn empty() -> Self {
        FollowFlags(0)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, flag: FollowFlags) -> bool {
        self.0 & flag.0 == flag.0
    }

    pub fn set(&mut self, flag: FollowFlags, on: bool) {
        if on {
            self.0 |= flag.0;
        } else {
            self.0 &= !flag.0;
        }
    }

    pub fn toggle(&mut self, flag: FollowFlags) {
        self.0 ^= flag.0;
    }
}

impl std::ops::BitOr for FollowFlags {
    type Output = FollowFlags;

    fn bitor(self, rhs: FollowFlags) -> FollowFlags {
        FollowFlags(self.0 | rhs.0)
    }
}

/// Which stages of the world-to-screen transform to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectionMode {
    /// Translate, rotate, zoom, center.
    #[default]
    Full,
    /// Skip the rotation stage.
    NoRotation,
    /// Skip the zoom stage.
    NoStretch,
    /// Translate and center only.
    Flat,
}

impl ProjectionMode {
    pub fn rotates(self) -> bool {
        matches!(self, ProjectionMode::Full | ProjectionMode::NoStretch)
    }

    pub fn stretches(self) -> bool {
        matches!(self, ProjectionMode::Full | ProjectionMode::NoRotation)
    }
}

/// A view onto the world. The camera position maps to the center of the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera center in world space.
    pub pos: Vec2,
    pub zoom: f32,
    rotation: f32,
    /// Multiplied into every draw made through this camera.
    pub color: Color,
    following: Option<SlotId>,
    pub follow_offset: Vec2,
    pub follow_flags: FollowFlags,
}

impl Camera {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            zoom: 1.0,
            rotation: 0.0,
            color: Color::WHITE,
            following: None,
            follow_offset: Vec2::ZERO,
            follow_flags: FollowFlags::empty(),
        }
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.pos += Vec2::new(dx, dy);
    }

    /// Rotation in radians, always in `[0, 2π)`.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn rotate_to(&mut self, radians: f32) {
        self.rotation = wrap_angle(radians);
    }

    pub fn rotate_by(&mut self, radians: f32) {
        self.rotation = wrap_angle(self.rotation + radians);
    }

    pub fn zoom_to(&mut self, zoom: f32) {
        self.zoom = zoom;
    }

    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom += delta;
    }

    // -- Following --

    /// Follow the actor in `slot` of the room's pool.
    pub fn follow(&mut self, slot: SlotId) {
        self.following = Some(slot);
    }

    pub fn clear_follow(&mut self) {
        self.following = None;
    }

    pub fn following(&self) -> Option<SlotId> {
        self.following
    }

    pub fn follow_offset_by(&mut self, dx: f32, dy: f32) {
        self.follow_offset += Vec2::new(dx, dy);
    }

    pub fn follow_offset_to(&mut self, x: f32, y: f32) {
        self.follow_offset = Vec2::new(x, y);
    }

    /// Snap onto `entity` plus the follow offset, applying the follow flags.
    pub fn follow_entity(&mut self, entity: &Entity) {
        let mut offset = self.follow_offset;
        let flags = self.follow_flags;

        if flags.contains(FollowFlags::ROTATE_WITH_ENTITY) {
            self.rotation = entity.rotation();
        }
        if flags.contains(FollowFlags::OFFSET_WITH_ROTATION) {
            offset = Vec2::from_angle(entity.rotation()).rotate(offset);
        }
        if flags.contains(FollowFlags::INVERT_SCALE_WITH_ENTITY) && entity.scale != 0.0 {
            self.zoom = 1.0 / entity.scale;
        }
        if flags.contains(FollowFlags::OFFSET_WITH_SCALE) {
            offset *= entity.scale;
        }

        self.pos = entity.pos + offset;
    }

    /// Follow the target slot in `pool`. Returns false, leaving the camera
    /// untouched, when nothing is followed or the slot is open.
    pub fn move_to_follow(&mut self, pool: &EntityPool) -> bool {
        let Some(slot) = self.following else {
            return false;
        };
        match pool.get(slot) {
            Some(actor) => {
                self.follow_entity(&actor.entity);
                true
            }
            None => false,
        }
    }

    // -- Projection --

    /// Map a world point to screen pixels on `screen`.
    pub fn project(&self, world: Vec2, screen: Screen, mode: ProjectionMode) -> Vec2 {
        let mut p = world - self.pos;
        if mode.rotates() {
            p = Vec2::from_angle(self.rotation).rotate(p);
        }
        if mode.stretches() {
            p *= self.zoom;
        }
        p + screen.half()
    }

    /// Sprite scale after the camera's zoom.
    pub fn draw_scale(&self, scale: f32, mode: ProjectionMode) -> f32 {
        if mode.stretches() { scale * self.zoom } else { scale }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
