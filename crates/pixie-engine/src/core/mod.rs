pub mod collision;
pub mod pool;
pub mod room;
