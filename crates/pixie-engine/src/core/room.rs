//! A room: the entity pool, its cameras, a scrolling background and static scenery.

use crate::api::types::CameraId;
use crate::components::animation::Animation;
use crate::core::collision::Hitbox;
use crate::core::pool::EntityPool;
use crate::input::snapshot::InputSnapshot;
use crate::renderer::camera::{Camera, ProjectionMode};
use crate::renderer::registry::CameraRegistry;
use crate::renderer::screen::Screen;
use crate::renderer::traits::DrawSink;
use crate::systems::animation::{draw_play, DrawStyle};
use crate::systems::control;
use crate::systems::render::{background_offset, render_pool};

pub struct Room {
    pub pool: EntityPool,
    pub cameras: CameraRegistry,
    /// Drawn behind everything with its top-left at the world origin.
    pub background: Option<Animation>,
    /// Static collision shapes, usually walls of the background.
    pub scenery: Vec<Hitbox>,
}

impl Room {
    pub fn new(pool_capacity: usize) -> Self {
        Self {
            pool: EntityPool::with_capacity(pool_capacity),
            cameras: CameraRegistry::new(),
            background: None,
            scenery: Vec::new(),
        }
    }

    pub fn with_background(mut self, background: Animation) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_scenery(mut self, scenery: Vec<Hitbox>) -> Self {
        self.scenery = scenery;
        self
    }

    /// Run every actor's control scheme against this frame's input.
    pub fn update(&mut self, input: &InputSnapshot) {
        control::update_pool(&mut self.pool, input);
    }

    /// Move each following camera onto its target. Returns how many moved.
    pub fn follow_cameras(&mut self) -> usize {
        self.cameras.follow_all(&self.pool)
    }

    /// True if `hitbox` touches any scenery shape.
    pub fn blocked(&self, hitbox: &Hitbox) -> bool {
        self.scenery.iter().any(|s| s.collides(hitbox))
    }

    /// Render through the main camera, keeping the view inside the background.
    /// Returns false when there is no main camera.
    pub fn render(&mut self, screen: Screen, sink: &mut dyn DrawSink) -> bool {
        match self.cameras.main_id() {
            Some(id) => self.render_with_camera(id, screen, sink),
            None => false,
        }
    }

    /// Render through camera `id`, clamping the scroll to the background.
    pub fn render_with_camera(&mut self, id: CameraId, screen: Screen, sink: &mut dyn DrawSink) -> bool {
        let Some(camera) = self.cameras.get(id) else {
            return false;
        };
        let mut view = camera.clone();

        if let Some(background) = self.background.as_mut() {
            let size = background.current_frame().size();
            let offset = background_offset(camera.pos, screen.size(), size);
            let style = DrawStyle::default().with_tint(camera.color);
            draw_play(background, offset, style, sink);
            // entities go through a camera centered on the clamped view
            view.pos = screen.half() - offset;
        }

        render_pool(&mut self.pool, &view, screen, ProjectionMode::Full, sink);
        true
    }

    /// Render through the main camera with no clamping: the background is
    /// projected like any other world object.
    pub fn render_unconstrained(&mut self, screen: Screen, sink: &mut dyn DrawSink) -> bool {
        let Some(camera) = self.cameras.main() else {
            return false;
        };
        let camera: Camera = camera.clone();

        if let Some(background) = self.background.as_mut() {
            let dest = camera.project(glam::Vec2::ZERO, screen, ProjectionMode::Full);
            let style = DrawStyle {
                scale: camera.zoom,
                rotation: camera.rotation(),
                tint: camera.color,
            };
            draw_play(background, dest, style, sink);
        }

        render_pool(&mut self.pool, &camera, screen, ProjectionMode::Full, sink);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use crate::components::entity::Entity;
    use crate::components::sprite::{Frame, SheetId};
    use crate::core::collision::{Point, Rect};
    use crate::core::pool::{Actor, DirectionalAnimations};
    use crate::input::queue::InputEvent;
    use crate::input::snapshot::Buttons;
    use crate::renderer::traits::DrawCommand;

    fn room_with_player(x: f32, y: f32) -> Room {
        let mut room = Room::new(4)
            .with_background(Animation::still(Frame::new(SheetId(1), 0, 0, 1000, 500)));
        let mut entity = Entity::new(x, y, 1);
        let id = entity
            .add_animation("idle", Animation::strip(SheetId(0), 0, 0, 16, 16, 1, 0).unwrap())
            .unwrap();
        let player = Actor::new(entity)
            .with_animations(DirectionalAnimations::uniform(id))
            .with_control(control::from_mode(1).unwrap())
            .with_speed(4.0);
        let slot = room.pool.add(player).unwrap();
        let mut cam = Camera::new(0.0, 0.0);
        cam.follow(slot);
        room.cameras.add(cam);
        room
    }

    #[test]
    fn render_needs_a_main_camera() {
        let mut room = Room::new(1);
        let mut sink: Vec<DrawCommand> = Vec::new();
        assert!(!room.render(Screen::Top, &mut sink));
        assert!(!room.render_unconstrained(Screen::Top, &mut sink));
        assert!(!room.render_with_camera(CameraId(0), Screen::Top, &mut sink));
    }

    #[test]
    fn update_then_follow_moves_the_camera() {
        let mut room = room_with_player(500.0, 250.0);
        let mut input = InputSnapshot::new();
        input.advance([InputEvent::ButtonsDown { buttons: Buttons::D_RIGHT }]);
        room.update(&input);
        assert_eq!(room.follow_cameras(), 1);
        assert_eq!(room.cameras.main().unwrap().pos, Vec2::new(504.0, 250.0));
    }

    #[test]
    fn clamped_render_keeps_view_inside_background() {
        // player near the top-left corner: the view cannot scroll past 0
        let mut room = room_with_player(20.0, 20.0);
        room.follow_cameras();
        let mut sink: Vec<DrawCommand> = Vec::new();
        assert!(room.render(Screen::Top, &mut sink));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].sheet, SheetId(1));
        assert_eq!(sink[0].dest, Vec2::ZERO);
        // entity drawn at its world position since the view sits at the origin
        assert_eq!(sink[1].dest, Vec2::new(20.0, 20.0));
    }

    #[test]
    fn clamped_render_scrolls_in_the_middle() {
        let mut room = room_with_player(500.0, 250.0);
        room.follow_cameras();
        let mut sink: Vec<DrawCommand> = Vec::new();
        room.render(Screen::Top, &mut sink);
        assert_eq!(sink[0].dest, Vec2::new(-300.0, -130.0));
        assert_eq!(sink[1].dest, Vec2::new(200.0, 120.0));
    }

    #[test]
    fn unconstrained_render_follows_the_camera_exactly() {
        let mut room = room_with_player(20.0, 20.0);
        room.follow_cameras();
        let mut sink: Vec<DrawCommand> = Vec::new();
        assert!(room.render_unconstrained(Screen::Top, &mut sink));
        assert_eq!(sink[0].dest, Vec2::new(180.0, 100.0));
        assert_eq!(sink[1].dest, Vec2::new(200.0, 120.0));
    }

    #[test]
    fn scenery_blocks() {
        let room = Room::new(0).with_scenery(vec![Rect::new(0.0, 0.0, 10.0, 10.0).into()]);
        assert!(room.blocked(&Point::new(5.0, 5.0).into()));
        assert!(!room.blocked(&Point::new(15.0, 5.0).into()));
    }
}
