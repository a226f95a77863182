//! Game module - session state, input, and the fixed-step simulation

pub mod input;
pub mod particles;
pub mod session;
pub mod step;

pub use input::InputState;
pub use particles::Particle;
pub use session::{Session, Status, SHARD_GOAL};
