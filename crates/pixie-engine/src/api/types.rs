/// Index of a slot in an [`EntityPool`](crate::core::pool::EntityPool).
/// Slots are never compacted, so an id stays valid until its slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub usize);

/// Position of an animation in an entity's animation table (insertion order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(pub usize);

/// Index of a camera inside a [`CameraRegistry`](crate::renderer::registry::CameraRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CameraId(pub usize);
