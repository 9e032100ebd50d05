//! The draw contract between the engine and whatever actually puts pixels on screen.

use glam::Vec2;
use crate::components::color::Color;
use crate::components::sprite::{FrameRect, SheetId};

/// One sprite blit: a source rect on a sheet, drawn at a screen point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub sheet: SheetId,
    pub source: FrameRect,
    /// Screen-space top-left destination.
    pub dest: Vec2,
    pub scale: f32,
    /// Radians.
    pub rotation: f32,
    pub tint: Color,
}

/// The only rendering collaborator. Implemented by [`DrawBuffer`](super::instance::DrawBuffer)
/// for the host bridge, or by anything else that can blit textured rects.
pub trait DrawSink {
    fn draw(&mut self, command: DrawCommand);
}

impl DrawSink for Vec<DrawCommand> {
    fn draw(&mut self, command: DrawCommand) {
        self.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_collects_commands() {
        let mut sink: Vec<DrawCommand> = Vec::new();
        sink.draw(DrawCommand {
            sheet: SheetId(2),
            source: FrameRect::default(),
            dest: Vec2::new(1.0, 2.0),
            scale: 1.0,
            rotation: 0.0,
            tint: Color::WHITE,
        });
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].sheet, SheetId(2));
    }
}
