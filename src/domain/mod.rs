pub mod change;
pub mod tracker;
