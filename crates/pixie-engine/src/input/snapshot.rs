//! Per-frame, read-only view of the controls.

use glam::{Vec2, Vec3};
use crate::input::queue::InputEvent;

/// Set of buttons, one bit each. Bit positions follow the handheld's key register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Buttons(pub u32);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);
    pub const A: Buttons = Buttons(1 << 0);
    pub const B: Buttons = Buttons(1 << 1);
    pub const SELECT: Buttons = Buttons(1 << 2);
    pub const START: Buttons = Buttons(1 << 3);
    pub const D_RIGHT: Buttons = Buttons(1 << 4);
    pub const D_LEFT: Buttons = Buttons(1 << 5);
    pub const D_UP: Buttons = Buttons(1 << 6);
    pub const D_DOWN: Buttons = Buttons(1 << 7);
    pub const R: Buttons = Buttons(1 << 8);
    pub const L: Buttons = Buttons(1 << 9);
    pub const X: Buttons = Buttons(1 << 10);
    pub const Y: Buttons = Buttons(1 << 11);
    pub const ZL: Buttons = Buttons(1 << 14);
    pub const ZR: Buttons = Buttons(1 << 15);
    pub const TOUCH: Buttons = Buttons(1 << 20);
    pub const C_STICK_RIGHT: Buttons = Buttons(1 << 24);
    pub const C_STICK_LEFT: Buttons = Buttons(1 << 25);
    pub const C_STICK_UP: Buttons = Buttons(1 << 26);
    pub const C_STICK_DOWN: Buttons = Buttons(1 << 27);
    pub const C_PAD_RIGHT: Buttons = Buttons(1 << 28);
    pub const C_PAD_LEFT: Buttons = Buttons(1 << 29);
    pub const C_PAD_UP: Buttons = Buttons(1 << 30);
    pub const C_PAD_DOWN: Buttons = Buttons(1 << 31);

    // d-pad or circle pad
    pub const UP: Buttons = Buttons(Self::D_UP.0 | Self::C_PAD_UP.0);
    pub const DOWN: Buttons = Buttons(Self::D_DOWN.0 | Self::C_PAD_DOWN.0);
    pub const LEFT: Buttons = Buttons(Self::D_LEFT.0 | Self::C_PAD_LEFT.0);
    pub const RIGHT: Buttons = Buttons(Self::D_RIGHT.0 | Self::C_PAD_RIGHT.0);

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every button in `other` is in `self`.
    pub fn contains(self, other: Buttons) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if any button in `other` is in `self`.
    pub fn intersects(self, other: Buttons) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, other: Buttons) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Buttons) {
        self.0 &= !other.0;
    }
}

impl std::ops::BitOr for Buttons {
    type Output = Buttons;

    fn bitor(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for Buttons {
    type Output = Buttons;

    fn bitand(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 & rhs.0)
    }
}

impl std::ops::Not for Buttons {
    type Output = Buttons;

    fn not(self) -> Buttons {
        Buttons(!self.0)
    }
}

/// Everything a frame's update needs to know about the controls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    /// Pressed this frame.
    pub down: Buttons,
    /// Currently held, including those pressed this frame.
    pub held: Buttons,
    /// Released this frame.
    pub released: Buttons,
    pub circle_pad: Vec2,
    pub c_stick: Vec2,
    /// Current touch point while the screen is touched.
    pub touch: Option<Vec2>,
    /// Where the current touch began.
    pub touch_origin: Option<Vec2>,
    pub accel: Vec3,
    /// (roll, pitch, yaw) angular rates.
    pub gyro: Vec3,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame: clear the edge sets, then apply `events` in order.
    pub fn advance(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.down = Buttons::NONE;
        self.released = Buttons::NONE;
        for event in events {
            self.apply(event);
        }
    }

    fn press(&mut self, buttons: Buttons) {
        self.down.insert(buttons & !self.held);
        self.held.insert(buttons);
    }

    fn release(&mut self, buttons: Buttons) {
        self.released.insert(buttons & self.held);
        self.held.remove(buttons);
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::ButtonsDown { buttons } => self.press(buttons),
            InputEvent::ButtonsUp { buttons } => self.release(buttons),
            InputEvent::TouchStart { x, y } => {
                self.press(Buttons::TOUCH);
                self.touch = Some(Vec2::new(x, y));
                self.touch_origin = self.touch;
            }
            InputEvent::TouchMove { x, y } => {
                let p = Vec2::new(x, y);
                if self.touch_origin.is_none() {
                    self.press(Buttons::TOUCH);
                    self.touch_origin = Some(p);
                }
                self.touch = Some(p);
            }
            InputEvent::TouchEnd => {
                self.release(Buttons::TOUCH);
                self.touch = None;
                self.touch_origin = None;
            }
            InputEvent::CirclePad { x, y } => self.circle_pad = Vec2::new(x, y),
            InputEvent::CStick { x, y } => self.c_stick = Vec2::new(x, y),
            InputEvent::Accelerometer { x, y, z } => self.accel = Vec3::new(x, y, z),
            InputEvent::Gyroscope { roll, pitch, yaw } => self.gyro = Vec3::new(roll, pitch, yaw),
        }
    }

    pub fn pressed(&self, buttons: Buttons) -> bool {
        self.down.intersects(buttons)
    }

    pub fn is_held(&self, buttons: Buttons) -> bool {
        self.held.intersects(buttons)
    }

    pub fn was_released(&self, buttons: Buttons) -> bool {
        self.released.intersects(buttons)
    }

    /// How far the touch has dragged from where it began. 0 when not touching.
    pub fn touch_distance(&self) -> f32 {
        match (self.touch, self.touch_origin) {
            (Some(p), Some(o)) => p.distance(o),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_hold_release_edges() {
        let mut input = InputSnapshot::new();
        input.advance([InputEvent::ButtonsDown { buttons: Buttons::A | Buttons::L }]);
        assert!(input.pressed(Buttons::A));
        assert!(input.is_held(Buttons::L));

        // held across frames, but the press edge is gone
        input.advance([]);
        assert!(!input.pressed(Buttons::A));
        assert!(input.is_held(Buttons::A));

        input.advance([InputEvent::ButtonsUp { buttons: Buttons::A }]);
        assert!(input.was_released(Buttons::A));
        assert!(!input.is_held(Buttons::A));
        assert!(input.is_held(Buttons::L));

        input.advance([]);
        assert!(!input.was_released(Buttons::A));
    }

    #[test]
    fn repeated_down_is_not_a_new_press() {
        let mut input = InputSnapshot::new();
        input.advance([InputEvent::ButtonsDown { buttons: Buttons::B }]);
        input.advance([InputEvent::ButtonsDown { buttons: Buttons::B }]);
        assert!(!input.pressed(Buttons::B));
        assert!(input.is_held(Buttons::B));
    }

    #[test]
    fn touch_tracks_origin_and_distance() {
        let mut input = InputSnapshot::new();
        input.advance([InputEvent::TouchStart { x: 10.0, y: 10.0 }]);
        assert!(input.pressed(Buttons::TOUCH));
        assert_eq!(input.touch_distance(), 0.0);

        input.advance([InputEvent::TouchMove { x: 13.0, y: 14.0 }]);
        assert_eq!(input.touch, Some(Vec2::new(13.0, 14.0)));
        assert_eq!(input.touch_origin, Some(Vec2::new(10.0, 10.0)));
        assert!((input.touch_distance() - 5.0).abs() < 1e-6);

        input.advance([InputEvent::TouchEnd]);
        assert!(input.was_released(Buttons::TOUCH));
        assert!(input.touch.is_none());
        assert_eq!(input.touch_distance(), 0.0);
    }

    #[test]
    fn axes_and_motion_sensors() {
        let mut input = InputSnapshot::new();
        input.advance([
            InputEvent::CirclePad { x: 100.0, y: -20.0 },
            InputEvent::CStick { x: 0.5, y: 0.0 },
            InputEvent::Accelerometer { x: 1.0, y: 2.0, z: 3.0 },
            InputEvent::Gyroscope { roll: 4.0, pitch: 5.0, yaw: 6.0 },
        ]);
        assert_eq!(input.circle_pad, Vec2::new(100.0, -20.0));
        assert_eq!(input.c_stick, Vec2::new(0.5, 0.0));
        assert_eq!(input.accel, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(input.gyro, Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn combined_directions_cover_both_pads() {
        assert!(Buttons::UP.contains(Buttons::D_UP));
        assert!(Buttons::UP.contains(Buttons::C_PAD_UP));
        assert!(!Buttons::UP.intersects(Buttons::DOWN));
    }
}
