use crate::cards::equity::Equity;
use crate::error::{GameError, GameResult};
use crate::gameplay::event::{EventLog, DEFAULT_EVENT_LOG_CAPACITY};
use crate::gameplay::seat::{Personality, SeatId};
use crate::gameplay::state::{ResolveOutcome, Table};
use crate::gameplay::{ActionRequest, ResolvedAction};
use crate::players::{self, AIDecision, Decision, DecisionInput};
use crate::Chips;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashMap;

/// Game-level settings the Session Orchestrator needs; a subset of
/// `ServerConfig` that library code can depend on without the `server`
/// feature's `clap` dependency.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub starting_stack: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub show_ai_thinking: bool,
    pub event_log_capacity: usize,
    pub monte_carlo_samples: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_stack: 1000,
            small_blind: 5,
            big_blind: 10,
            show_ai_thinking: false,
            event_log_capacity: DEFAULT_EVENT_LOG_CAPACITY,
            monte_carlo_samples: Equity::DEFAULT_SAMPLES,
        }
    }
}

/// One seat's setup: display name, and `None` for the human seat or
/// `Some(personality)` for an AI.
pub type SeatConfig = (String, Option<Personality>);

/// Drives one game end to end (§4.G): routes a human action through the Hand
/// State Machine, then processes contiguous AI turns until control returns to
/// a human seat or the hand ends. Owns the single RNG stream that makes a
/// whole session reproducible from its seed — deck shuffles, AI hand-strength
/// sampling, and bluff rolls are all drawn from it in one order.
pub struct Orchestrator {
    table: Table,
    log: EventLog,
    rng: SmallRng,
    config: GameConfig,
    last_decisions: HashMap<SeatId, AIDecision>,
    recent_decisions: Vec<(SeatId, AIDecision)>,
}

impl Orchestrator {
    pub fn new(seats: Vec<SeatConfig>, config: GameConfig, seed: u64) -> Self {
        let configs = seats
            .into_iter()
            .map(|(name, personality)| (name, config.starting_stack, personality))
            .collect();
        let table = Table::new(configs, config.small_blind, config.big_blind);
        let log = EventLog::new(config.event_log_capacity);
        Self {
            table,
            log,
            rng: SmallRng::seed_from_u64(seed),
            config,
            last_decisions: HashMap::new(),
            recent_decisions: Vec::new(),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn log(&self) -> &EventLog {
        &self.log
    }
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
    pub fn last_decision(&self, seat: SeatId) -> Option<&AIDecision> {
        self.last_decisions.get(&seat)
    }

    /// Drains the AI decisions made since the last drain, in the order they
    /// were applied — the source for the transport's `ai_action` events
    /// (§6), one per AI move rather than a single latest-per-seat snapshot.
    pub fn drain_recent_decisions(&mut self) -> Vec<(SeatId, AIDecision)> {
        std::mem::take(&mut self.recent_decisions)
    }

    /// Runs §4.D start-of-hand, then drives any AI seats that act before a
    /// human gets a turn.
    pub fn start_hand(&mut self) -> GameResult<()> {
        self.table.start_hand(&mut self.rng, &mut self.log)?;
        log::info!("hand {} started", self.table.hand_number());
        self.drive_ai()
    }

    /// Applies one human (or externally-driven) action, then drives
    /// contiguous AI turns until control returns to a human or the hand ends.
    pub fn apply_action(
        &mut self,
        seat: SeatId,
        request: ActionRequest,
    ) -> GameResult<ResolvedAction> {
        let resolved = self.table.apply_action(seat, request, &mut self.log)?;
        self.drive_ai()?;
        Ok(resolved)
    }

    /// Forces processing of exactly one AI turn (single-step mode for
    /// real-time streaming). Returns `false` if it's a human's turn, or no
    /// seat can currently act.
    pub fn step(&mut self) -> GameResult<bool> {
        match self.current_ai_turn() {
            Some((seat_id, personality)) => {
                self.act_ai(seat_id, personality)?;
                self.resolve_if_complete()?;
                Ok(true)
            }
            None => {
                self.resolve_if_complete()?;
                Ok(false)
            }
        }
    }

    /// If the betting round completed, transitions streets or resolves
    /// showdown; a no-op while a seat still owes an action.
    pub fn resolve_if_complete(&mut self) -> GameResult<ResolveOutcome> {
        self.table.resolve_if_complete(&mut self.log)
    }

    /// Starts the next hand. Precondition: the current hand is terminal.
    pub fn next_hand(&mut self) -> GameResult<()> {
        if self.table.is_hand_active() {
            return Err(GameError::InvalidAction {
                reason: "current hand is not terminal".into(),
            });
        }
        self.start_hand()
    }

    fn current_ai_turn(&self) -> Option<(SeatId, Personality)> {
        let seat_id = self.table.current_player()?;
        let personality = self.table.seat(seat_id)?.personality()?;
        Some((seat_id, personality))
    }

    fn drive_ai(&mut self) -> GameResult<()> {
        loop {
            match self.current_ai_turn() {
                Some((seat_id, personality)) => self.act_ai(seat_id, personality)?,
                None => match self.table.resolve_if_complete(&mut self.log)? {
                    ResolveOutcome::StreetAdvanced(_) => continue,
                    ResolveOutcome::HandComplete | ResolveOutcome::StillAwaitingAction => break,
                },
            }
        }
        Ok(())
    }

    fn act_ai(&mut self, seat_id: SeatId, personality: Personality) -> GameResult<()> {
        let decision = {
            let input = build_decision_input(&self.table, seat_id, self.config.monte_carlo_samples)?;
            let strategy = players::strategy_for(personality);
            strategy.decide(&input, &mut self.rng)
        };
        let request = match decision.decision {
            Decision::Fold => ActionRequest::Fold,
            Decision::Check => ActionRequest::Check,
            Decision::Call => ActionRequest::Call,
            Decision::Raise(total) => ActionRequest::Raise(total),
        };
        self.last_decisions.insert(seat_id, decision.clone());
        self.recent_decisions.push((seat_id, decision));
        self.table
            .apply_action(seat_id, request, &mut self.log)
            .inspect_err(|e| log::warn!("seat {seat_id} ({personality}) action rejected: {e}"))?;
        Ok(())
    }
}

fn build_decision_input(
    table: &Table,
    seat_id: SeatId,
    monte_carlo_samples: usize,
) -> GameResult<DecisionInput<'_>> {
    let seat = table.seat(seat_id).ok_or_else(|| GameError::InternalConsistency {
        detail: format!("unknown seat {seat_id}"),
    })?;
    if seat.hole_cards().len() != 2 {
        return Err(GameError::InternalConsistency {
            detail: format!("seat {seat_id} has no hole cards to decide with"),
        });
    }
    let hole = [seat.hole_cards()[0], seat.hole_cards()[1]];
    Ok(DecisionInput {
        street: table.street(),
        hole,
        board: table.board(),
        pot: table.pot(),
        current_bet: table.current_bet(),
        seat_current_bet: seat.current_bet(),
        stack: seat.stack(),
        effective_stack: table.effective_stack(seat_id),
        active_opponents: table.active_opponent_count(seat_id),
        min_raise_to: table.min_raise_to(),
        max_raise_to: table.max_raise_to(seat_id),
        big_blind: table.big_blind(),
        monte_carlo_samples,
    })
}
