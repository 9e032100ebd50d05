use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The two physical displays. Both are 240 pixels tall; the top one is wider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Top,
    Bottom,
}

impl Screen {
    pub const HEIGHT: u32 = 240;

    pub fn width(self) -> u32 {
        match self {
            Screen::Top => 400,
            Screen::Bottom => 320,
        }
    }

    pub fn height(self) -> u32 {
        Self::HEIGHT
    }

    /// Pixel size as a vector.
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }

    /// Screen-space center.
    pub fn half(self) -> Vec2 {
        self.size() * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screens_share_height() {
        assert_eq!(Screen::Top.size(), Vec2::new(400.0, 240.0));
        assert_eq!(Screen::Bottom.size(), Vec2::new(320.0, 240.0));
        assert_eq!(Screen::Bottom.half(), Vec2::new(160.0, 120.0));
    }

    #[test]
    fn deserializes_lowercase() {
        let s: Screen = serde_json::from_str("\"bottom\"").unwrap();
        assert_eq!(s, Screen::Bottom);
    }
}
