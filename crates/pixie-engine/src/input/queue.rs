use crate::input::snapshot::Buttons;

/// Input event types the engine understands.
/// Raw hardware polling happens on the host; it reports changes as these events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Buttons in the mask went down.
    ButtonsDown { buttons: Buttons },
    /// Buttons in the mask came up.
    ButtonsUp { buttons: Buttons },
    /// A touch began at screen coordinates (x, y) on the touch screen.
    TouchStart { x: f32, y: f32 },
    /// The touch point moved.
    TouchMove { x: f32, y: f32 },
    /// The touch ended.
    TouchEnd,
    /// Circle pad axes, roughly -156..156 each.
    CirclePad { x: f32, y: f32 },
    /// C-stick axes.
    CStick { x: f32, y: f32 },
    Accelerometer { x: f32, y: f32, z: f32 },
    Gyroscope { roll: f32, pitch: f32, yaw: f32 },
}

/// A queue of input events.
/// The host writes events into the queue; the runner drains them once per frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
