use std::collections::HashMap;
use crate::api::error::EngineError;
use crate::assets::manifest::{AnimationDescriptor, AssetManifest};
use crate::components::animation::Animation;
use crate::components::sprite::{Frame, SheetId, SheetInfo};

/// Sheets and named animation templates, built from an AssetManifest.
/// Entities get their own copies through [`instantiate`](Self::instantiate).
#[derive(Debug, Clone, Default)]
pub struct AnimationRegistry {
    sheets: Vec<SheetInfo>,
    animations: HashMap<String, Animation>,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a parsed AssetManifest. Sheet ids follow manifest order.
    pub fn from_manifest(manifest: &AssetManifest) -> Result<Self, EngineError> {
        let mut reg = Self::new();
        for sheet in &manifest.sheets {
            if reg.sheet(&sheet.name).is_some() {
                log::warn!("duplicate sheet '{}' in manifest, later entry ignored", sheet.name);
                continue;
            }
            reg.add_sheet(&sheet.name, sheet.width, sheet.height);
        }
        // sorted so the first reported error does not depend on hash order
        let mut names: Vec<&String> = manifest.animations.keys().collect();
        names.sort();
        for name in names {
            let animation = reg.build(&manifest.animations[name])?;
            reg.animations.insert(name.clone(), animation);
        }
        log::info!(
            "loaded {} sheets, {} animations",
            reg.sheets.len(),
            reg.animations.len()
        );
        Ok(reg)
    }

    fn build(&self, desc: &AnimationDescriptor) -> Result<Animation, EngineError> {
        let sheet = self
            .sheet(&desc.sheet)
            .ok_or_else(|| EngineError::UnknownSheet(desc.sheet.clone()))?;
        match &desc.strip {
            Some(strip) if desc.frames.is_empty() => {
                let mut animation = Animation::strip(
                    sheet,
                    strip.left,
                    strip.top,
                    strip.width,
                    strip.height,
                    strip.count,
                    desc.speed,
                )?;
                animation.set_loop_frame(desc.loop_frame)?;
                Ok(animation)
            }
            _ => {
                let frames = desc
                    .frames
                    .iter()
                    .map(|f| Frame::new(sheet, f.left, f.top, f.width, f.height).with_offset(f.x_offset, f.y_offset))
                    .collect();
                Animation::new(frames, desc.speed, desc.loop_frame)
            }
        }
    }

    pub fn add_sheet(&mut self, name: impl Into<String>, width: u32, height: u32) -> SheetId {
        let id = SheetId(self.sheets.len() as u32);
        self.sheets.push(SheetInfo {
            id,
            name: name.into(),
            width,
            height,
        });
        id
    }

    /// Register (or replace) a named animation template.
    pub fn add_animation(&mut self, name: impl Into<String>, animation: Animation) {
        self.animations.insert(name.into(), animation);
    }

    /// Look up a sheet id by name.
    pub fn sheet(&self, name: &str) -> Option<SheetId> {
        self.sheets.iter().find(|s| s.name == name).map(|s| s.id)
    }

    pub fn sheet_info(&self, id: SheetId) -> Option<&SheetInfo> {
        self.sheets.get(id.0 as usize)
    }

    pub fn sheets(&self) -> &[SheetInfo] {
        &self.sheets
    }

    /// Look up an animation template by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<&Animation> {
        self.animations.get(name)
    }

    /// A fresh copy of the named animation with its cursor and timer reset.
    pub fn instantiate(&self, name: &str) -> Result<Animation, EngineError> {
        let mut animation = self
            .get(name)
            .cloned()
            .ok_or_else(|| EngineError::UnknownAnimation(name.to_string()))?;
        animation.reset_cursor();
        Ok(animation)
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }
}
