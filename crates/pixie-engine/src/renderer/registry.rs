use glam::Vec2;
use crate::api::error::EngineError;
use crate::api::types::CameraId;
use crate::core::pool::EntityPool;
use crate::renderer::camera::{Camera, ProjectionMode};
use crate::renderer::screen::Screen;

/// The cameras of a room plus the replaceable "main" slot naming the one used by default.
#[derive(Debug, Clone, Default)]
pub struct CameraRegistry {
    cameras: Vec<Camera>,
    main: Option<usize>,
}

impl CameraRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a camera. The first camera added becomes the main camera.
    pub fn add(&mut self, camera: Camera) -> CameraId {
        self.cameras.push(camera);
        let index = self.cameras.len() - 1;
        if self.main.is_none() {
            self.main = Some(index);
        }
        CameraId(index)
    }

    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    pub fn get(&self, id: CameraId) -> Option<&Camera> {
        self.cameras.get(id.0)
    }

    pub fn get_mut(&mut self, id: CameraId) -> Option<&mut Camera> {
        self.cameras.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CameraId, &Camera)> {
        self.cameras.iter().enumerate().map(|(i, c)| (CameraId(i), c))
    }

    pub fn set_main(&mut self, id: CameraId) -> Result<(), EngineError> {
        if id.0 >= self.cameras.len() {
            return Err(EngineError::CameraOutOfRange {
                index: id.0,
                len: self.cameras.len(),
            });
        }
        self.main = Some(id.0);
        Ok(())
    }

    pub fn clear_main(&mut self) {
        self.main = None;
    }

    pub fn main_id(&self) -> Option<CameraId> {
        self.main.map(CameraId)
    }

    pub fn main(&self) -> Option<&Camera> {
        self.main.and_then(|i| self.cameras.get(i))
    }

    pub fn main_mut(&mut self) -> Option<&mut Camera> {
        self.main.and_then(|i| self.cameras.get_mut(i))
    }

    /// Project through the main camera. `None` when no main camera is set.
    pub fn project_main(&self, world: Vec2, screen: Screen, mode: ProjectionMode) -> Option<Vec2> {
        self.main().map(|cam| cam.project(world, screen, mode))
    }

    /// Run [`Camera::move_to_follow`] on every camera. Returns how many moved.
    pub fn follow_all(&mut self, pool: &EntityPool) -> usize {
        let mut moved = 0;
        for cam in &mut self.cameras {
            if cam.move_to_follow(pool) {
                moved += 1;
            }
        }
        moved
    }
}
