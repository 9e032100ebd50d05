pub mod camera;
pub mod instance;
pub mod registry;
pub mod screen;
pub mod traits;

// Re-export key types for convenient access
pub use camera::{Camera, FollowFlags, ProjectionMode};
pub use instance::{DrawBuffer, DrawInstance};
pub use registry::CameraRegistry;
pub use screen::Screen;
pub use traits::{DrawCommand, DrawSink};
