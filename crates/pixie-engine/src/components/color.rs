//! RGBA blend color with wrapping and saturating channel arithmetic.

/// One of the four channels of a [`Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

/// Blend color applied when drawing. Channels are independent 8-bit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
            Channel::Alpha => self.a,
        }
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut u8 {
        match channel {
            Channel::Red => &mut self.r,
            Channel::Green => &mut self.g,
            Channel::Blue => &mut self.b,
            Channel::Alpha => &mut self.a,
        }
    }

    pub fn set_channel(&mut self, channel: Channel, value: u8) {
        *self.channel_mut(channel) = value;
    }

    /// Add modulo 256: `200 + 100` becomes `44`.
    pub fn wrapping_add_channel(&mut self, channel: Channel, delta: u8) {
        let value = self.channel_mut(channel);
        *value = value.wrapping_add(delta);
    }

    /// Add a signed delta, clamping the result to `0..=255`.
    pub fn saturating_add_channel(&mut self, channel: Channel, delta: i32) {
        let value = self.channel_mut(channel);
        *value = (*value as i32).saturating_add(delta).clamp(0, 255) as u8;
    }

    pub fn wrapping_add(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.wrapping_add_channel(Channel::Red, r);
        self.wrapping_add_channel(Channel::Green, g);
        self.wrapping_add_channel(Channel::Blue, b);
        self.wrapping_add_channel(Channel::Alpha, a);
    }

    pub fn saturating_add(&mut self, r: i32, g: i32, b: i32, a: i32) {
        self.saturating_add_channel(Channel::Red, r);
        self.saturating_add_channel(Channel::Green, g);
        self.saturating_add_channel(Channel::Blue, b);
        self.saturating_add_channel(Channel::Alpha, a);
    }

    /// Channel-wise multiply, treating 255 as 1.0.
    pub fn modulate(self, other: Color) -> Color {
        let mul = |x: u8, y: u8| ((x as u16 * y as u16 + 127) / 255) as u8;
        Color {
            r: mul(self.r, other.r),
            g: mul(self.g, other.g),
            b: mul(self.b, other.b),
            a: mul(self.a, other.a),
        }
    }

    /// Packed `0xRRGGBBAA`.
    pub fn to_rgba8(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }

    /// Channels as `0.0..=1.0` floats, for GPU-facing buffers.
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}
