use std::fmt;

/// Broad category of an [`EngineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A fixed-size table (entity pool, animation table) is full.
    /// Callers decide whether to retry later or drop the request.
    CapacityExceeded,
    /// An argument was rejected at the boundary.
    InvalidArgument,
}

/// Errors returned by the runtime. None of them are fatal.
#[derive(Debug)]
pub enum EngineError {
    PoolFull { capacity: usize },
    AnimationTableFull { capacity: usize },
    EmptyAnimation,
    LoopFrameOutOfRange { loop_frame: usize, len: usize },
    StripOutOfRange { left: u32, width: u32, count: u32 },
    FlagIndexOutOfRange(u32),
    UnknownDirection(u8),
    UnknownControlMode(u32),
    SlotOutOfRange { slot: usize, capacity: usize },
    CameraOutOfRange { index: usize, len: usize },
    UnknownSheet(String),
    UnknownAnimation(String),
    Manifest(serde_json::Error),
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::PoolFull { .. } | EngineError::AnimationTableFull { .. } => {
                ErrorKind::CapacityExceeded
            }
            _ => ErrorKind::InvalidArgument,
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::PoolFull { capacity } => {
                write!(f, "entity pool is full ({capacity} slots)")
            }
            EngineError::AnimationTableFull { capacity } => {
                write!(f, "animation table is full ({capacity} entries)")
            }
            EngineError::EmptyAnimation => write!(f, "animation needs at least one frame"),
            EngineError::LoopFrameOutOfRange { loop_frame, len } => {
                write!(f, "loop frame {loop_frame} is outside an animation of {len} frames")
            }
            EngineError::StripOutOfRange { left, width, count } => {
                write!(f, "strip of {count} frames {width} wide from x={left} does not fit")
            }
            EngineError::FlagIndexOutOfRange(index) => {
                write!(f, "flag index {index} is outside 0..32")
            }
            EngineError::UnknownDirection(index) => write!(f, "no compass direction {index}"),
            EngineError::UnknownControlMode(mode) => write!(f, "no control scheme for mode {mode}"),
            EngineError::SlotOutOfRange { slot, capacity } => {
                write!(f, "slot {slot} is outside a pool of {capacity}")
            }
            EngineError::CameraOutOfRange { index, len } => {
                write!(f, "camera {index} does not exist ({len} registered)")
            }
            EngineError::UnknownSheet(name) => write!(f, "unknown sprite sheet '{name}'"),
            EngineError::UnknownAnimation(name) => write!(f, "unknown animation '{name}'"),
            EngineError::Manifest(err) => write!(f, "invalid asset manifest: {err}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Manifest(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Manifest(err)
    }
}
