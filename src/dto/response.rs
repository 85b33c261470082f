use crate::cards::street::Street;
use crate::error::GameError;
use crate::gameplay::seat::{Personality, Seat, SeatId};
use crate::gameplay::state::Table;
use crate::gameplay::Event;
use crate::players::AIDecision;
use crate::session::orchestrator::Orchestrator;
use crate::Chips;
use serde::Serialize;

/// One seat as seen by a particular viewer. Hole cards are only populated
/// for the viewer's own seat, or for any seat that reached showdown this
/// hand — everyone else's are hidden, matching what a real table shows.
#[derive(Debug, Clone, Serialize)]
pub struct SeatView {
    pub seat_id: SeatId,
    pub name: String,
    pub is_human: bool,
    pub personality: Option<String>,
    pub stack: Chips,
    pub current_bet: Chips,
    pub is_active: bool,
    pub is_all_in: bool,
    pub hole_cards: Option<Vec<String>>,
}

fn personality_name(p: Personality) -> String {
    p.to_string()
}

fn seat_view(seat: &Seat, viewer: Option<SeatId>, showdown: bool) -> SeatView {
    let reveal = viewer == Some(seat.id()) || (showdown && seat.is_active());
    let hole_cards = if reveal && !seat.hole_cards().is_empty() {
        Some(seat.hole_cards().iter().map(|c| c.to_string()).collect())
    } else {
        None
    };
    SeatView {
        seat_id: seat.id(),
        name: seat.name().to_string(),
        is_human: seat.is_human(),
        personality: seat.personality().map(personality_name),
        stack: seat.stack(),
        current_bet: seat.current_bet(),
        is_active: seat.is_active(),
        is_all_in: seat.is_all_in(),
        hole_cards,
    }
}

/// The decision telemetry for a seat's most recent AI turn, exposed only
/// when the game's `show_ai_thinking` flag is set.
#[derive(Debug, Clone, Serialize)]
pub struct AIDecisionView {
    pub seat_id: SeatId,
    pub decision: String,
    pub reasoning: String,
    pub hand_strength: f32,
    pub pot_odds: f32,
    pub spr: f32,
    pub confidence: f32,
}

fn ai_decision_view(seat_id: SeatId, decision: &AIDecision) -> AIDecisionView {
    AIDecisionView {
        seat_id,
        decision: format!("{:?}", decision.decision),
        reasoning: decision.reasoning.clone(),
        hand_strength: decision.hand_strength,
        pot_odds: decision.pot_odds,
        spr: decision.spr,
        confidence: decision.confidence,
    }
}

impl AIDecisionView {
    /// Builds the payload for one `ai_action` stream event (§6) from a
    /// single AI move, independent of `GameStateView::render`'s
    /// latest-per-seat snapshot.
    pub fn from_decision(seat_id: SeatId, decision: &AIDecision) -> Self {
        ai_decision_view(seat_id, decision)
    }
}

/// A full snapshot of a game as a particular viewer is allowed to see it.
/// This is the payload behind both `get_state` and every `state_update`
/// event pushed over the WebSocket stream.
#[derive(Debug, Clone, Serialize)]
pub struct GameStateView {
    pub hand_number: u64,
    pub street: String,
    pub board: Vec<String>,
    pub pot: Chips,
    pub current_bet: Chips,
    pub dealer_index: usize,
    pub current_player: Option<SeatId>,
    pub hand_active: bool,
    pub seats: Vec<SeatView>,
    pub ai_decisions: Vec<AIDecisionView>,
}

impl GameStateView {
    pub fn render(orchestrator: &Orchestrator, viewer: Option<SeatId>) -> Self {
        let table = orchestrator.table();
        let showdown = table.street() == Street::Showdown;
        let seats = table
            .seats()
            .iter()
            .map(|s| seat_view(s, viewer, showdown))
            .collect();
        let ai_decisions = if orchestrator.config().show_ai_thinking {
            table
                .seats()
                .iter()
                .filter_map(|s| {
                    orchestrator
                        .last_decision(s.id())
                        .map(|d| ai_decision_view(s.id(), d))
                })
                .collect()
        } else {
            Vec::new()
        };
        Self {
            hand_number: table.hand_number(),
            street: table.street().to_string(),
            board: table.board().iter().map(|c| c.to_string()).collect(),
            pot: table.pot(),
            current_bet: table.current_bet(),
            dealer_index: table.dealer_index(),
            current_player: table.current_player(),
            hand_active: table.is_hand_active(),
            seats,
            ai_decisions,
        }
    }
}

/// One logged entry, reshaped for the wire: `amount`/`pot` as plain
/// integers, `street` as a lowercase string, and no internal enum types
/// leaking across the API boundary.
#[derive(Debug, Clone, Serialize)]
pub struct EventView {
    pub hand_number: u64,
    pub kind: String,
    pub seat: Option<SeatId>,
    pub amount: Chips,
    pub pot: Chips,
    pub street: String,
    pub description: String,
}

impl From<&Event> for EventView {
    fn from(event: &Event) -> Self {
        Self {
            hand_number: event.hand_number,
            kind: format!("{:?}", event.kind),
            seat: event.seat,
            amount: event.amount,
            pot: event.pot,
            street: event.street.to_string(),
            description: event.description.clone(),
        }
    }
}

/// The record of one completed hand: final stacks and its slice of the
/// event log, for a post-hand recap screen.
#[derive(Debug, Clone, Serialize)]
pub struct HandSummaryView {
    pub hand_number: u64,
    pub seats: Vec<SeatView>,
    pub events: Vec<EventView>,
}

impl HandSummaryView {
    pub fn render(orchestrator: &Orchestrator, hand_number: u64) -> Self {
        let table = orchestrator.table();
        let seats = table
            .seats()
            .iter()
            .map(|s| seat_view(s, None, true))
            .collect();
        let events = orchestrator
            .log()
            .for_hand(hand_number)
            .into_iter()
            .map(EventView::from)
            .collect();
        Self {
            hand_number,
            seats,
            events,
        }
    }
}

/// Transport-level error payload; every REST and WebSocket error reply
/// takes this shape so a client only needs one parser.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorView {
    pub error: String,
    pub internal: bool,
}

impl From<&GameError> for ErrorView {
    fn from(error: &GameError) -> Self {
        Self {
            error: error.to_string(),
            internal: error.is_internal(),
        }
    }
}
