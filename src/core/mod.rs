pub mod assemble;
pub mod classify;
pub mod events;
pub mod groups;
pub mod packer;

pub use assemble::{assemble, TimelineOutput, TimelineResult};
