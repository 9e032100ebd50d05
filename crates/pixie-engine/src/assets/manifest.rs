use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Asset manifest describing sprite sheets and the animations cut from them.
/// Loaded from a JSON file at runtime; pixel data is loaded by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Sprite sheets, in id order.
    pub sheets: Vec<SheetDescriptor>,
    /// Named animations.
    #[serde(default)]
    pub animations: HashMap<String, AnimationDescriptor>,
}

/// Describes a single sprite sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetDescriptor {
    /// Name animations refer to the sheet by.
    pub name: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Relative path to the image, for the host.
    #[serde(default)]
    pub path: Option<String>,
}

/// Describes a named animation. Frames are listed explicitly or as a strip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    /// Sheet name.
    pub sheet: String,
    /// Calls per frame step; negative plays in reverse.
    #[serde(default)]
    pub speed: i32,
    #[serde(default)]
    pub loop_frame: usize,
    #[serde(default)]
    pub frames: Vec<FrameDescriptor>,
    /// Used when `frames` is empty.
    #[serde(default)]
    pub strip: Option<StripDescriptor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameDescriptor {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
    /// Render hotspot.
    #[serde(default)]
    pub x_offset: i32,
    #[serde(default)]
    pub y_offset: i32,
}

/// `count` equally sized frames, left to right.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripDescriptor {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
    pub count: u32,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
