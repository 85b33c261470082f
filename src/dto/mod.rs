pub mod request;
pub mod response;

pub use request::{ActionParseError, ActionRequestDto, CreateGameRequest};
pub use response::{
    AIDecisionView, ErrorView, EventView, GameStateView, HandSummaryView, SeatView,
};
