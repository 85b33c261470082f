pub mod action;
pub mod event;
pub mod pot;
pub mod seat;
pub mod state;

pub use action::{ActionRequest, ResolvedAction};
pub use event::{Event, EventKind, EventLog};
pub use seat::{Personality, Seat, SeatId};
pub use state::{ResolveOutcome, Table};
