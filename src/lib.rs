pub mod doubler;
pub mod standard;
