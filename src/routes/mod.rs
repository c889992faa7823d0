pub mod events;
pub mod public;
