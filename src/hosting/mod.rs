pub mod casino;
pub mod server;

pub use casino::{Casino, GameId};
pub use server::Server;
