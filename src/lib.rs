//! Shardfall - a terminal mining sandbox survival game
//!
//! Dig through a destructible world, collect shards, and survive the
//! creatures living in the caves.

pub mod audio;
pub mod combat;
pub mod config;
pub mod entities;
pub mod game;
pub mod ui;
pub mod world;

// Re-export commonly used types
pub use config::Settings;
pub use game::{InputState, Session, Status};
pub use world::{Tile, TileGrid, TileKind};
