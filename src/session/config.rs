use super::orchestrator::GameConfig;
use crate::Chips;
use clap::Parser;

/// Process-level configuration for the `server` binary, parsed via `clap`'s
/// derive API. Library code never reads environment variables or argv
/// directly; everything flows in as this plain struct.
#[derive(Parser, Debug, Clone)]
#[command(name = "holdem-server", about = "Deterministic No-Limit Hold'em core, served over HTTP/WebSocket")]
pub struct ServerConfig {
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub bind_address: String,

    #[arg(long, default_value_t = 1000)]
    pub starting_stack: Chips,

    #[arg(long, default_value_t = 5)]
    pub small_blind: Chips,

    #[arg(long, default_value_t = 10)]
    pub big_blind: Chips,

    /// Whether new games default to exposing AI reasoning in `GameStateView`.
    #[arg(long, default_value_t = false)]
    pub show_ai_thinking: bool,

    #[arg(long, default_value_t = 1000)]
    pub event_log_capacity: usize,

    #[arg(long, default_value_t = 2000)]
    pub monte_carlo_samples: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            starting_stack: 1000,
            small_blind: 5,
            big_blind: 10,
            show_ai_thinking: false,
            event_log_capacity: 1000,
            monte_carlo_samples: 2000,
        }
    }
}

impl From<&ServerConfig> for GameConfig {
    fn from(config: &ServerConfig) -> Self {
        Self {
            starting_stack: config.starting_stack,
            small_blind: config.small_blind,
            big_blind: config.big_blind,
            show_ai_thinking: config.show_ai_thinking,
            event_log_capacity: config.event_log_capacity,
            monte_carlo_samples: config.monte_carlo_samples,
        }
    }
}
