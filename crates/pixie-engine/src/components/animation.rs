//! Frame-sequence playback.
//!
//! An [`Animation`] owns its frames and a cursor. [`Animation::play`] is
//! called once per displayed frame; the signed speed sets how many calls
//! pass between cursor steps and which way the cursor moves.

use crate::api::error::EngineError;
use crate::components::sprite::{Frame, SheetId};

#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    frames: Vec<Frame>,
    /// Calls per step. Negative plays in reverse.
    speed: i32,
    timer: u32,
    loop_frame: usize,
    current: usize,
}

impl Animation {
    /// Most frames [`Animation::strip`] will lay out.
    pub const MAX_STRIP_FRAMES: u32 = 1024;

    /// Build an animation. Fails on an empty frame list or a loop target past the end.
    pub fn new(frames: Vec<Frame>, speed: i32, loop_frame: usize) -> Result<Self, EngineError> {
        if frames.is_empty() {
            return Err(EngineError::EmptyAnimation);
        }
        if loop_frame >= frames.len() {
            return Err(EngineError::LoopFrameOutOfRange {
                loop_frame,
                len: frames.len(),
            });
        }
        let mut anim = Self {
            frames,
            speed,
            timer: 0,
            loop_frame,
            current: 0,
        };
        anim.reset_cursor();
        Ok(anim)
    }

    /// A single still frame.
    pub fn still(frame: Frame) -> Self {
        Self {
            frames: vec![frame],
            speed: 0,
            timer: 0,
            loop_frame: 0,
            current: 0,
        }
    }

    /// `count` equally sized frames laid out left to right starting at (left, top).
    /// Fails when the strip runs past `u32` coordinates or has more than
    /// [`MAX_STRIP_FRAMES`](Self::MAX_STRIP_FRAMES) frames.
    pub fn strip(
        sheet: SheetId,
        left: u32,
        top: u32,
        width: u32,
        height: u32,
        count: u32,
        speed: i32,
    ) -> Result<Self, EngineError> {
        let fits = count <= Self::MAX_STRIP_FRAMES
            && count.checked_mul(width).and_then(|span| left.checked_add(span)).is_some();
        if !fits {
            return Err(EngineError::StripOutOfRange { left, width, count });
        }
        let frames = (0..count)
            .map(|i| Frame::new(sheet, left + i * width, top, width, height))
            .collect();
        Self::new(frames, speed, 0)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false: construction rejects empty frame lists.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: i32) {
        self.speed = speed;
    }

    pub fn is_reverse(&self) -> bool {
        self.speed < 0
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }

    pub fn loop_frame(&self) -> usize {
        self.loop_frame
    }

    pub fn set_loop_frame(&mut self, loop_frame: usize) -> Result<(), EngineError> {
        if loop_frame >= self.frames.len() {
            return Err(EngineError::LoopFrameOutOfRange {
                loop_frame,
                len: self.frames.len(),
            });
        }
        self.loop_frame = loop_frame;
        Ok(())
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.current]
    }

    /// Jump to `index`, wrapping modulo the frame count.
    pub fn set_frame(&mut self, index: usize) {
        self.current = index % self.frames.len();
    }

    /// Step forward. Stepping past the last frame resumes at the loop frame.
    pub fn advance_forward(&mut self) {
        self.current += 1;
        if self.current >= self.frames.len() {
            self.current = self.loop_frame;
        }
    }

    /// Step backward, wrapping from the first frame to the last.
    pub fn advance_backward(&mut self) {
        self.current = match self.current {
            0 => self.frames.len() - 1,
            n => n - 1,
        };
    }

    /// Put the cursor at the start of playback: frame 0 going forward, the last frame in reverse.
    pub fn reset_cursor(&mut self) {
        self.timer = 0;
        self.current = if self.is_reverse() { self.frames.len() - 1 } else { 0 };
    }

    /// Tick once and return the frame to draw.
    /// The cursor steps after `|speed| + 1` calls.
    pub fn play(&mut self) -> &Frame {
        self.timer = self.timer.saturating_add(1);
        if self.timer > self.speed.unsigned_abs() {
            self.timer = 0;
            if self.is_reverse() {
                self.advance_backward();
            } else {
                self.advance_forward();
            }
        }
        self.current_frame()
    }

    /// The frame one step ahead of the cursor, without moving it.
    pub fn peek_next(&self) -> &Frame {
        let mut probe = self.current + 1;
        if probe >= self.frames.len() {
            probe = self.loop_frame;
        }
        &self.frames[probe]
    }

    /// The frame one step behind the cursor, without moving it.
    pub fn peek_previous(&self) -> &Frame {
        let probe = match self.current {
            0 => self.frames.len() - 1,
            n => n - 1,
        };
        &self.frames[probe]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(count: u32, speed: i32) -> Animation {
        Animation::strip(SheetId(0), 0, 0, 8, 8, count, speed).unwrap()
    }

    #[test]
    fn empty_animation_is_rejected() {
        assert!(matches!(Animation::new(Vec::new(), 0, 0), Err(EngineError::EmptyAnimation)));
        assert!(matches!(
            Animation::strip(SheetId(0), 0, 0, 8, 8, 0, 1),
            Err(EngineError::EmptyAnimation)
        ));
    }

    #[test]
    fn strip_rejects_overflowing_layout() {
        assert!(matches!(
            Animation::strip(SheetId(0), 0, 0, 3_000_000_000, 8, 3, 0),
            Err(EngineError::StripOutOfRange { width: 3_000_000_000, count: 3, .. })
        ));
        assert!(matches!(
            Animation::strip(SheetId(0), u32::MAX, 0, 1, 1, 1, 0),
            Err(EngineError::StripOutOfRange { .. })
        ));
        assert!(matches!(
            Animation::strip(SheetId(0), 0, 0, 1, 1, 4_000_000_000, 0),
            Err(EngineError::StripOutOfRange { count: 4_000_000_000, .. })
        ));
        let widest = Animation::strip(SheetId(0), 0, 0, 1, 1, Animation::MAX_STRIP_FRAMES, 0).unwrap();
        assert_eq!(widest.len(), Animation::MAX_STRIP_FRAMES as usize);
    }

    #[test]
    fn loop_frame_must_be_inside() {
        let frames = strip(3, 0).frames().to_vec();
        assert!(matches!(
            Animation::new(frames.clone(), 0, 3),
            Err(EngineError::LoopFrameOutOfRange { loop_frame: 3, len: 3 })
        ));
        let mut anim = Animation::new(frames, 0, 2).unwrap();
        assert!(anim.set_loop_frame(5).is_err());
        assert_eq!(anim.loop_frame(), 2);
    }

    #[test]
    fn strip_lays_frames_left_to_right() {
        let anim = Animation::strip(SheetId(1), 4, 10, 16, 24, 3, 0).unwrap();
        let lefts: Vec<u32> = anim.frames().iter().map(|f| f.rect.left).collect();
        assert_eq!(lefts, vec![4, 20, 36]);
        assert!(anim.frames().iter().all(|f| f.rect.top == 10 && f.sheet == SheetId(1)));
    }

    #[test]
    fn forward_advance_stays_in_range() {
        let mut anim = strip(5, 0);
        for step in 1..=23 {
            anim.advance_forward();
            assert!(anim.current_index() < anim.len());
            assert_eq!(anim.current_index(), step % 5);
        }
    }

    #[test]
    fn forward_advance_resumes_at_loop_frame() {
        let frames = strip(4, 0).frames().to_vec();
        let mut anim = Animation::new(frames, 0, 2).unwrap();
        let seen: Vec<usize> = (0..6)
            .map(|_| {
                anim.advance_forward();
                anim.current_index()
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 3, 2, 3, 2]);
    }

    #[test]
    fn backward_advance_wraps_to_last_frame() {
        let mut anim = strip(3, 0);
        anim.advance_backward();
        assert_eq!(anim.current_index(), 2);
        anim.advance_backward();
        anim.advance_backward();
        assert_eq!(anim.current_index(), 0);
    }

    #[test]
    fn set_frame_wraps_modulo_len() {
        let mut anim = strip(4, 0);
        anim.set_frame(6);
        assert_eq!(anim.current_index(), 2);
        anim.set_frame(3);
        assert_eq!(anim.current_index(), 3);
    }

    #[test]
    fn play_advances_once_per_speed_plus_one_ticks() {
        for speed in [0, 1, 3, 7] {
            let mut anim = strip(16, speed);
            for _ in 0..speed {
                anim.play();
            }
            assert_eq!(anim.current_index(), 0, "speed {speed}");
            anim.play();
            assert_eq!(anim.current_index(), 1, "speed {speed}");
            assert_eq!(anim.timer(), 0);
        }
    }

    #[test]
    fn negative_speed_plays_backward_from_the_end() {
        let mut anim = strip(4, -2);
        assert_eq!(anim.current_index(), 3);
        anim.play();
        anim.play();
        assert_eq!(anim.current_index(), 3);
        anim.play();
        assert_eq!(anim.current_index(), 2);
    }

    #[test]
    fn reset_cursor_follows_direction() {
        let mut anim = strip(4, 1);
        anim.set_frame(2);
        anim.play();
        anim.reset_cursor();
        assert_eq!((anim.current_index(), anim.timer()), (0, 0));

        anim.set_speed(-1);
        anim.reset_cursor();
        assert_eq!(anim.current_index(), 3);
    }

    #[test]
    fn peeks_do_not_move_the_cursor() {
        let mut anim = strip(3, 0);
        assert_eq!(anim.peek_next().rect.left, 8);
        assert_eq!(anim.peek_previous().rect.left, 16);
        anim.set_frame(2);
        assert_eq!(anim.peek_next().rect.left, 0);
        assert_eq!(anim.current_index(), 2);
    }
}
