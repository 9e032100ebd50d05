pub mod animation;
pub mod color;
pub mod direction;
pub mod entity;
pub mod flags;
pub mod sprite;
