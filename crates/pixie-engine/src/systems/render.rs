use glam::Vec2;
use crate::components::entity::{wrap_angle, Entity};
use crate::core::pool::EntityPool;
use crate::renderer::camera::{Camera, ProjectionMode};
use crate::renderer::screen::Screen;
use crate::renderer::traits::DrawSink;
use crate::systems::animation::{draw_play, DrawStyle};

/// How an entity draws through `camera`: zoomed scale, combined rotation and tint.
fn camera_style(entity: &Entity, camera: &Camera, mode: ProjectionMode, sprite_rotation: bool) -> DrawStyle {
    let rotation = if sprite_rotation {
        let camera_rotation = if mode.rotates() { camera.rotation() } else { 0.0 };
        wrap_angle(entity.rotation() + camera_rotation)
    } else {
        0.0
    };
    DrawStyle {
        scale: camera.draw_scale(entity.scale, mode),
        rotation,
        tint: entity.color.modulate(camera.color),
    }
}

/// Play `entity`'s active animation at its camera-projected position.
/// `sprite_rotation = false` keeps the sprite upright whatever the rotations.
/// Returns false when the entity has no active animation.
pub fn render_entity(
    entity: &mut Entity,
    camera: &Camera,
    screen: Screen,
    mode: ProjectionMode,
    sprite_rotation: bool,
    sink: &mut dyn DrawSink,
) -> bool {
    let dest = camera.project(entity.pos, screen, mode);
    let style = camera_style(entity, camera, mode, sprite_rotation);
    match entity.active_mut() {
        Some(animation) => {
            draw_play(animation, dest, style, sink);
            true
        }
        None => false,
    }
}

/// Draw every occupied slot: resolve each actor's pose animation and play it
/// at the projected `position - hotspot`. Returns the number of draws.
pub fn render_pool(
    pool: &mut EntityPool,
    camera: &Camera,
    screen: Screen,
    mode: ProjectionMode,
    sink: &mut dyn DrawSink,
) -> usize {
    let mut drawn = 0;
    for (_, actor) in pool.iter_mut() {
        actor.sync_animation();
        let dest = camera.project(actor.draw_origin(), screen, mode);
        let style = camera_style(&actor.entity, camera, mode, true);
        if let Some(animation) = actor.entity.active_mut() {
            draw_play(animation, dest, style, sink);
            drawn += 1;
        }
    }
    drawn
}

/// Per-axis draw offset for a background under a camera, keeping the view
/// inside the background. A background smaller than the screen pins to the origin.
pub fn background_offset(camera_pos: Vec2, screen: Vec2, background: Vec2) -> Vec2 {
    let clamp_axis = |cam: f32, screen: f32, bg: f32| -> f32 {
        let scroll = cam - screen * 0.5;
        -(scroll.min(bg - screen).max(0.0))
    };
    Vec2::new(
        clamp_axis(camera_pos.x, screen.x, background.x),
        clamp_axis(camera_pos.y, screen.y, background.y),
    )
}
