pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod assets;

pub use glam;

// Re-export key types at crate root for convenience
pub use api::error::{EngineError, ErrorKind};
pub use api::game::{Game, EngineConfig, EngineContext, RenderContext};
pub use api::types::{AnimationId, CameraId, SlotId};
pub use components::animation::Animation;
pub use components::color::{Channel, Color};
pub use components::direction::Direction;
pub use components::entity::Entity;
pub use components::flags::EntityFlags;
pub use components::sprite::{Frame, FrameRect, SheetId, SheetInfo};
pub use core::collision::{Circle, Collide, Hitbox, Line, Point, Rect};
pub use core::pool::{Actor, AnimationSet, DirectionalAnimations, EntityPool, PoseKey};
pub use core::room::Room;
pub use renderer::camera::{Camera, FollowFlags, ProjectionMode};
pub use renderer::instance::{DrawBuffer, DrawInstance};
pub use renderer::registry::CameraRegistry;
pub use renderer::screen::Screen;
pub use renderer::traits::{DrawCommand, DrawSink};
pub use input::queue::{InputEvent, InputQueue};
pub use input::snapshot::{Buttons, InputSnapshot};
pub use assets::manifest::AssetManifest;
pub use assets::registry::AnimationRegistry;
pub use systems::animation::DrawStyle;
pub use systems::control::ControlScheme;
