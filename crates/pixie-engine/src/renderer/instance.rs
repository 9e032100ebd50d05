use bytemuck::{Pod, Zeroable};
use crate::renderer::traits::{DrawCommand, DrawSink};

/// Per-draw data read by the host renderer straight out of wasm memory.
/// Must match the host protocol: 13 floats = 52 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct DrawInstance {
    /// Sheet index in the animation registry.
    pub sheet: f32,
    /// Screen-space destination.
    pub x: f32,
    pub y: f32,
    /// Rotation in radians.
    pub rotation: f32,
    pub scale: f32,
    /// Source rect on the sheet, in pixels.
    pub src_left: f32,
    pub src_top: f32,
    pub src_width: f32,
    pub src_height: f32,
    /// Tint, each channel 0.0-1.0.
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl DrawInstance {
    pub const FLOATS: usize = 13;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

impl From<DrawCommand> for DrawInstance {
    fn from(cmd: DrawCommand) -> Self {
        let [r, g, b, a] = cmd.tint.to_f32_array();
        Self {
            sheet: cmd.sheet.0 as f32,
            x: cmd.dest.x,
            y: cmd.dest.y,
            rotation: cmd.rotation,
            scale: cmd.scale,
            src_left: cmd.source.left as f32,
            src_top: cmd.source.top as f32,
            src_width: cmd.source.width as f32,
            src_height: cmd.source.height as f32,
            r,
            g,
            b,
            a,
        }
    }
}

/// Flat buffer of draws for one frame, in submission order.
pub struct DrawBuffer {
    pub instances: Vec<DrawInstance>,
}

impl DrawBuffer {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: DrawInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for direct memory reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// The whole buffer as floats.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for DrawBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSink for DrawBuffer {
    fn draw(&mut self, command: DrawCommand) {
        self.push(command.into());
    }
}
