pub mod animation;
pub mod control;
pub mod render;
