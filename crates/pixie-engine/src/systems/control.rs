//! Built-in movement schemes for pool actors.
//!
//! Each scheme turns the frame's input into a movement direction. The actor
//! moves by that direction times its speed, faces the 8-way quantization of
//! the move, and counts as moving while any of the scheme's inputs is held.

use std::fmt;
use std::rc::Rc;

use glam::Vec2;
use crate::api::error::EngineError;
use crate::components::direction::Direction;
use crate::core::pool::{Actor, EntityPool};
use crate::input::snapshot::{Buttons, InputSnapshot};
use crate::renderer::screen::Screen;

pub trait ControlScheme: fmt::Debug {
    /// Movement for this frame in units of the actor's speed, or `None` when
    /// none of this scheme's inputs is held.
    fn steer(&self, input: &InputSnapshot) -> Option<Vec2>;

    fn apply(&self, actor: &mut Actor, input: &InputSnapshot) {
        match self.steer(input) {
            Some(direction) => {
                let delta = direction * actor.speed;
                actor.entity.pos += delta;
                if let Some(facing) = Direction::from_vector(delta) {
                    actor.entity.facing = facing;
                }
                actor.moving = true;
            }
            None => actor.moving = false,
        }
    }
}

/// Four buttons mapped to down, right, up, left.
fn steer_buttons(input: &InputSnapshot, [down, right, up, left]: [Buttons; 4]) -> Option<Vec2> {
    if !input.is_held(down | right | up | left) {
        return None;
    }
    let mut v = Vec2::ZERO;
    if input.is_held(down) {
        v.y += 1.0;
    }
    if input.is_held(right) {
        v.x += 1.0;
    }
    if input.is_held(up) {
        v.y -= 1.0;
    }
    if input.is_held(left) {
        v.x -= 1.0;
    }
    Some(v)
}

/// Never moves. `moving` is left as the game set it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Static;

impl ControlScheme for Static {
    fn steer(&self, _input: &InputSnapshot) -> Option<Vec2> {
        None
    }

    fn apply(&self, _actor: &mut Actor, _input: &InputSnapshot) {}
}

macro_rules! button_scheme {
    ($(#[$doc:meta])* $name:ident => [$down:expr, $right:expr, $up:expr, $left:expr]) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl ControlScheme for $name {
            fn steer(&self, input: &InputSnapshot) -> Option<Vec2> {
                steer_buttons(input, [$down, $right, $up, $left])
            }
        }
    };
}

button_scheme!(
    /// D-pad.
    DPad => [Buttons::D_DOWN, Buttons::D_RIGHT, Buttons::D_UP, Buttons::D_LEFT]
);
button_scheme!(
    /// Circle pad, read as four digital directions.
    CirclePad => [Buttons::C_PAD_DOWN, Buttons::C_PAD_RIGHT, Buttons::C_PAD_UP, Buttons::C_PAD_LEFT]
);
button_scheme!(
    /// D-pad or circle pad.
    AnyPad => [Buttons::DOWN, Buttons::RIGHT, Buttons::UP, Buttons::LEFT]
);
button_scheme!(
    CStick => [Buttons::C_STICK_DOWN, Buttons::C_STICK_RIGHT, Buttons::C_STICK_UP, Buttons::C_STICK_LEFT]
);
button_scheme!(
    /// B down, A right, X up, Y left.
    FaceButtons => [Buttons::B, Buttons::A, Buttons::X, Buttons::Y]
);
button_scheme!(
    /// R right, L left. Horizontal only.
    Shoulders => [Buttons::NONE, Buttons::R, Buttons::NONE, Buttons::L]
);
button_scheme!(
    /// ZR down, R right, ZL up, L left.
    ShouldersAndTriggers => [Buttons::ZR, Buttons::R, Buttons::ZL, Buttons::L]
);

/// Steer toward the touch point, faster the further it is from the touch screen's center.
#[derive(Debug, Clone, Copy, Default)]
pub struct Touch;

impl Touch {
    /// Offset from center that maps to one speed unit, per axis.
    pub const REACH: Vec2 = Vec2::new(120.0, 105.0);
}

impl ControlScheme for Touch {
    fn steer(&self, input: &InputSnapshot) -> Option<Vec2> {
        if !input.is_held(Buttons::TOUCH) {
            return None;
        }
        let p = input.touch?;
        Some((p - Screen::Bottom.half()) / Self::REACH)
    }
}

/// Map a numeric control mode to its scheme.
///
/// | mode | scheme |
/// |------|--------|
/// | 0 | [`Static`] |
/// | 1 | [`DPad`] |
/// | 2 | [`CirclePad`] |
/// | 3 | [`AnyPad`] |
/// | 4 | [`CStick`] |
/// | 5 | [`FaceButtons`] |
/// | 6 | [`Shoulders`] |
/// | 7 | [`ShouldersAndTriggers`] |
/// | 8 | [`Touch`] |
pub fn from_mode(mode: u32) -> Result<Rc<dyn ControlScheme>, EngineError> {
    let scheme: Rc<dyn ControlScheme> = match mode {
        0 => Rc::new(Static),
        1 => Rc::new(DPad),
        2 => Rc::new(CirclePad),
        3 => Rc::new(AnyPad),
        4 => Rc::new(CStick),
        5 => Rc::new(FaceButtons),
        6 => Rc::new(Shoulders),
        7 => Rc::new(ShouldersAndTriggers),
        8 => Rc::new(Touch),
        other => return Err(EngineError::UnknownControlMode(other)),
    };
    Ok(scheme)
}

/// Run every occupied actor's control scheme once.
pub fn update_pool(pool: &mut EntityPool, input: &InputSnapshot) {
    for (_, actor) in pool.iter_mut() {
        let control = Rc::clone(&actor.control);
        control.apply(actor, input);
    }
}
