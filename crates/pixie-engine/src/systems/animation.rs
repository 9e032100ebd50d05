//! Animation draw helpers: emit one frame of an animation to a draw sink.

use glam::Vec2;
use crate::components::animation::Animation;
use crate::components::color::Color;
use crate::components::sprite::Frame;
use crate::renderer::traits::{DrawCommand, DrawSink};

/// Per-draw transform and tint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawStyle {
    pub scale: f32,
    /// Radians.
    pub rotation: f32,
    pub tint: Color,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation: 0.0,
            tint: Color::WHITE,
        }
    }
}

impl DrawStyle {
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }
}

/// Draw `frame` so its hotspot lands on `dest`.
pub fn draw_frame(frame: &Frame, dest: Vec2, style: DrawStyle, sink: &mut dyn DrawSink) {
    sink.draw(DrawCommand {
        sheet: frame.sheet,
        source: frame.rect,
        dest: dest - frame.offset.as_vec2() * style.scale,
        scale: style.scale,
        rotation: style.rotation,
        tint: style.tint,
    });
}

/// Draw the frame under the cursor.
pub fn draw_current(animation: &Animation, dest: Vec2, style: DrawStyle, sink: &mut dyn DrawSink) {
    draw_frame(animation.current_frame(), dest, style, sink);
}

/// Step the cursor forward, then draw.
pub fn draw_next(animation: &mut Animation, dest: Vec2, style: DrawStyle, sink: &mut dyn DrawSink) {
    animation.advance_forward();
    draw_frame(animation.current_frame(), dest, style, sink);
}

/// Step the cursor backward, then draw.
pub fn draw_previous(animation: &mut Animation, dest: Vec2, style: DrawStyle, sink: &mut dyn DrawSink) {
    animation.advance_backward();
    draw_frame(animation.current_frame(), dest, style, sink);
}

/// Tick playback and draw whichever frame results.
pub fn draw_play(animation: &mut Animation, dest: Vec2, style: DrawStyle, sink: &mut dyn DrawSink) {
    let frame = *animation.play();
    draw_frame(&frame, dest, style, sink);
}
