pub mod orchestrator;

#[cfg(feature = "server")]
pub mod config;

pub use orchestrator::{GameConfig, Orchestrator, SeatConfig};

#[cfg(feature = "server")]
pub use config::ServerConfig;
