use std::f32::consts::TAU;

use glam::Vec2;
use crate::api::error::EngineError;
use crate::api::types::AnimationId;
use crate::components::animation::Animation;
use crate::components::color::Color;
use crate::components::direction::Direction;
use crate::components::flags::EntityFlags;
use crate::components::sprite::Frame;

/// Wrap an angle in radians into `[0, 2π)`. Non-finite input maps to 0.
pub fn wrap_angle(radians: f32) -> f32 {
    if !radians.is_finite() {
        return 0.0;
    }
    let wrapped = radians.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// A positioned, rotatable, scalable and tintable holder of named animations.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Position in world space.
    pub pos: Vec2,
    /// Uniform scale. 1.0 draws frames at their pixel size.
    pub scale: f32,
    rotation: f32,
    /// Blend color applied to every draw.
    pub color: Color,
    /// Compass facing.
    pub facing: Direction,
    pub flags: EntityFlags,
    animations: Vec<(String, Animation)>,
    capacity: usize,
    active: Option<usize>,
}

impl Entity {
    /// Create an entity at (x, y) that can hold up to `capacity` animations.
    pub fn new(x: f32, y: f32, capacity: usize) -> Self {
        Self {
            pos: Vec2::new(x, y),
            scale: 1.0,
            rotation: 0.0,
            color: Color::WHITE,
            facing: Direction::default(),
            flags: EntityFlags::default(),
            animations: Vec::with_capacity(capacity),
            capacity,
            active: None,
        }
    }

    // -- Builder pattern --

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, radians: f32) -> Self {
        self.rotate_to(radians);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_facing(mut self, facing: Direction) -> Self {
        self.facing = facing;
        self
    }

    // -- Transform --

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.pos += Vec2::new(dx, dy);
    }

    pub fn scale_to(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn scale_by(&mut self, delta: f32) {
        self.scale += delta;
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

    /// Step the facing `delta` compass positions (positive is clockwise).
    pub fn turn(&mut self, delta: i32) {
        self.facing = self.facing.rotate(delta);
    }

    // -- Animation table --

    pub fn animation_capacity(&self) -> usize {
        self.capacity
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    /// Attach an animation under `name`.
    /// Re-using a name replaces that animation in place and does not consume capacity.
    pub fn add_animation(
        &mut self,
        name: impl Into<String>,
        animation: Animation,
    ) -> Result<AnimationId, EngineError> {
        let name = name.into();
        if let Some(index) = self.index_of(&name) {
            self.animations[index].1 = animation;
            return Ok(AnimationId(index));
        }
        if self.animations.len() >= self.capacity {
            log::debug!("animation table full ({}), dropping '{}'", self.capacity, name);
            return Err(EngineError::AnimationTableFull {
                capacity: self.capacity,
            });
        }
        self.animations.push((name, animation));
        Ok(AnimationId(self.animations.len() - 1))
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.animations.iter().position(|(n, _)| n == name)
    }

    pub fn animation_id(&self, name: &str) -> Option<AnimationId> {
        self.index_of(name).map(AnimationId)
    }

    pub fn animation(&self, name: &str) -> Option<&Animation> {
        self.index_of(name).map(|i| &self.animations[i].1)
    }

    pub fn animation_mut(&mut self, name: &str) -> Option<&mut Animation> {
        let index = self.index_of(name)?;
        Some(&mut self.animations[index].1)
    }

    pub fn animation_by_id(&self, id: AnimationId) -> Option<&Animation> {
        self.animations.get(id.0).map(|(_, a)| a)
    }

    /// Names in insertion order.
    pub fn animation_names(&self) -> impl Iterator<Item = &str> {
        self.animations.iter().map(|(n, _)| n.as_str())
    }

    /// Make the named animation active. Returns false if no such name exists.
    pub fn select(&mut self, name: &str) -> bool {
        match self.index_of(name) {
            Some(index) => self.select_id(AnimationId(index)),
            None => false,
        }
    }

    /// Make the animation at `id` active. Its cursor is reset only when the
    /// selection actually changes, so re-selecting every frame keeps playback going.
    pub fn select_id(&mut self, id: AnimationId) -> bool {
        if id.0 >= self.animations.len() {
            return false;
        }
        if self.active != Some(id.0) {
            self.active = Some(id.0);
            let (name, animation) = &mut self.animations[id.0];
            animation.reset_cursor();
            log::debug!("active animation -> '{}'", name);
        }
        true
    }

    pub fn active_id(&self) -> Option<AnimationId> {
        self.active.map(AnimationId)
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active.map(|i| self.animations[i].0.as_str())
    }

    pub fn active(&self) -> Option<&Animation> {
        self.active.map(|i| &self.animations[i].1)
    }

    pub fn active_mut(&mut self) -> Option<&mut Animation> {
        let index = self.active?;
        Some(&mut self.animations[index].1)
    }

    /// Tick the active animation and return the frame to draw.
    pub fn play(&mut self) -> Option<&Frame> {
        self.active_mut().map(|a| &*a.play())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sprite::SheetId;
    use std::f32::consts::PI;

    fn anim(speed: i32) -> Animation {
        Animation::strip(SheetId(0), 0, 0, 8, 8, 4, speed).unwrap()
    }

    #[test]
    fn defaults() {
        let e = Entity::new(3.0, 4.0, 2);
        assert_eq!(e.pos, Vec2::new(3.0, 4.0));
        assert_eq!(e.scale, 1.0);
        assert_eq!(e.rotation(), 0.0);
        assert_eq!(e.color, Color::WHITE);
        assert!(e.active().is_none());
    }

    #[test]
    fn animation_table_is_bounded() {
        let mut e = Entity::new(0.0, 0.0, 2);
        assert_eq!(e.add_animation("idle", anim(0)).unwrap(), AnimationId(0));
        assert_eq!(e.add_animation("walk", anim(0)).unwrap(), AnimationId(1));
        let err = e.add_animation("jump", anim(0)).unwrap_err();
        assert!(matches!(err, EngineError::AnimationTableFull { capacity: 2 }));
        assert_eq!(e.animation_count(), 2);

        // replacing an existing name is allowed when full
        assert_eq!(e.add_animation("idle", anim(3)).unwrap(), AnimationId(0));
        assert_eq!(e.animation("idle").unwrap().speed(), 3);
        assert_eq!(e.animation_names().collect::<Vec<_>>(), vec!["idle", "walk"]);
    }

    #[test]
    fn select_unknown_name_is_a_miss() {
        let mut e = Entity::new(0.0, 0.0, 1);
        e.add_animation("idle", anim(0)).unwrap();
        assert!(!e.select("run"));
        assert!(!e.select_id(AnimationId(4)));
        assert!(e.active().is_none());
    }

    #[test]
    fn select_resets_cursor_only_on_change() {
        let mut e = Entity::new(0.0, 0.0, 2);
        e.add_animation("fwd", anim(0)).unwrap();
        e.add_animation("rev", anim(-1)).unwrap();

        assert!(e.select("fwd"));
        e.play();
        e.play();
        assert_eq!(e.active().unwrap().current_index(), 2);

        // same selection keeps the cursor
        assert!(e.select("fwd"));
        assert_eq!(e.active().unwrap().current_index(), 2);

        // reverse animations start from their last frame
        assert!(e.select("rev"));
        assert_eq!(e.active_name(), Some("rev"));
        assert_eq!(e.active().unwrap().current_index(), 3);

        assert!(e.select("fwd"));
        assert_eq!(e.active().unwrap().current_index(), 0);
    }

    #[test]
    fn play_without_active_animation() {
        let mut e = Entity::new(0.0, 0.0, 1);
        assert!(e.play().is_none());
        e.add_animation("idle", anim(0)).unwrap();
        e.select("idle");
        assert_eq!(e.play().unwrap().rect.left, 8);
    }

    #[test]
    fn rotation_wraps_for_any_delta() {
        let mut e = Entity::new(0.0, 0.0, 0);
        for delta in [-100.0, -TAU, -PI, -0.1, 0.0, 0.1, PI, TAU, 3.0 * TAU + 0.5, 1.0e6] {
            e.rotate_by(delta);
            assert!(e.rotation() >= 0.0 && e.rotation() < TAU, "delta {delta}");
        }
        e.rotate_to(-PI / 2.0);
        assert!((e.rotation() - 1.5 * PI).abs() < 1e-5);
        e.rotate_to(-1.0e-9);
        assert!(e.rotation() < TAU);
    }

    #[test]
    fn transform_mutators() {
        let mut e = Entity::new(0.0, 0.0, 0);
        e.move_by(2.0, -3.0);
        e.move_by(1.0, 1.0);
        assert_eq!(e.pos, Vec2::new(3.0, -2.0));
        e.move_to(10.0, 10.0);
        assert_eq!(e.pos, Vec2::new(10.0, 10.0));
        e.scale_by(0.5);
        assert_eq!(e.scale, 1.5);
        e.scale_to(2.0);
        assert_eq!(e.scale, 2.0);
    }

    #[test]
    fn turn_steps_the_compass() {
        let mut e = Entity::new(0.0, 0.0, 0).with_facing(Direction::East);
        e.turn(1);
        assert_eq!(e.facing, Direction::SouthEast);
        e.turn(-2);
        assert_eq!(e.facing, Direction::NorthEast);
        e.turn(-17);
        assert_eq!(e.facing, Direction::North);
    }

    #[test]
    fn wrap_angle_handles_non_finite() {
        assert_eq!(wrap_angle(f32::NAN), 0.0);
        assert_eq!(wrap_angle(f32::INFINITY), 0.0);
    }
}
