//! Runtime configuration read from the environment.

pub mod game;
pub mod store;

pub use game::GameConfig;
pub use store::StoreConfig;
