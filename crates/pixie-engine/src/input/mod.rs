pub mod queue;
pub mod snapshot;
