pub mod poll;
pub mod scheduler;
