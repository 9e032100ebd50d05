use glam::{IVec2, Vec2};

/// Identifies which sprite sheet a frame is cut from.
/// Index into the [`AnimationRegistry`](crate::assets::registry::AnimationRegistry)'s sheet list.
/// The pixels themselves live with the host; frames only carry this handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SheetId(pub u32);

/// Registry metadata for a loaded sprite sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetInfo {
    pub id: SheetId,
    pub name: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Source rectangle inside a sprite sheet, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameRect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl FrameRect {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// One cell of an animation: a sheet handle, a source rect and a render hotspot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub sheet: SheetId,
    pub rect: FrameRect,
    /// Hotspot subtracted from the destination point when drawing.
    pub offset: IVec2,
}

impl Frame {
    pub fn new(sheet: SheetId, left: u32, top: u32, width: u32, height: u32) -> Self {
        Self {
            sheet,
            rect: FrameRect { left, top, width, height },
            offset: IVec2::ZERO,
        }
    }

    pub fn with_offset(mut self, x: i32, y: i32) -> Self {
        self.offset = IVec2::new(x, y);
        self
    }

    pub fn size(&self) -> Vec2 {
        self.rect.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_share_a_sheet_handle() {
        let sheet = SheetId(3);
        let a = Frame::new(sheet, 0, 0, 16, 16);
        let b = Frame::new(sheet, 16, 0, 16, 16).with_offset(8, 15);
        assert_eq!(a.sheet, b.sheet);
        assert_eq!(b.offset, IVec2::new(8, 15));
        assert_eq!(b.size(), Vec2::new(16.0, 16.0));
    }
}
