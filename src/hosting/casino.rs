use crate::dto::{ActionRequestDto, AIDecisionView, CreateGameRequest, GameStateView, HandSummaryView};
use crate::error::{GameError, GameResult};
use crate::gameplay::seat::{Personality, SeatId};
use crate::players::AIDecision;
use crate::session::{GameConfig, Orchestrator, SeatConfig};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tokio::sync::{broadcast, Mutex};

pub type GameId = u64;

const AI_PERSONALITIES: [Personality; 3] = [
    Personality::Conservative,
    Personality::Aggressive,
    Personality::Mathematical,
];

const EVENT_CHANNEL_CAPACITY: usize = 256;

/// One hosted game: its `Orchestrator` behind a lock so concurrent
/// requests serialize, and a broadcast sender so every open WebSocket for
/// this game sees the same event stream.
struct GameEntry {
    orchestrator: Mutex<Orchestrator>,
    events: broadcast::Sender<String>,
}

/// The multi-game registry (§4.K). Holds every in-progress game behind its
/// own lock — one slow or stuck game never blocks another — the way the
/// reference server keeps one room per table rather than a single global
/// mutex.
pub struct Casino {
    games: RwLock<HashMap<GameId, Arc<GameEntry>>>,
    next_id: AtomicU64,
    config: GameConfig,
    seed: AtomicU64,
}

impl Casino {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            config,
            seed: AtomicU64::new(seed),
        }
    }

    /// Seats a human and `ai_count` AI opponents (cycling through the
    /// three personalities), starts the first hand, and returns the new
    /// game's id plus its initial state.
    pub fn create_game(
        &self,
        request: CreateGameRequest,
    ) -> GameResult<(GameId, GameStateView)> {
        let ai_count = request.ai_count.clamp(1, 3);
        let mut seats: Vec<SeatConfig> = vec![(request.human_name, None)];
        for i in 0..ai_count {
            let personality = AI_PERSONALITIES[i % AI_PERSONALITIES.len()];
            seats.push((format!("{personality} bot"), Some(personality)));
        }

        let seed = self.seed.fetch_add(1, Ordering::Relaxed);
        let mut orchestrator = Orchestrator::new(seats, self.config.clone(), seed);
        orchestrator.start_hand()?;
        let decisions = orchestrator.drain_recent_decisions();
        let view = GameStateView::render(&orchestrator, Some(0));

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, _rx) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let entry = Arc::new(GameEntry {
            orchestrator: Mutex::new(orchestrator),
            events: tx,
        });
        for (seat_id, decision) in &decisions {
            Self::broadcast_ai_action(&entry, *seat_id, decision);
        }
        self.games.write().expect("casino lock poisoned").insert(id, entry);
        Ok((id, view))
    }

    pub async fn get_state(&self, id: GameId, viewer: Option<SeatId>) -> GameResult<GameStateView> {
        let entry = self.entry(id)?;
        let guard = entry.orchestrator.lock().await;
        Ok(GameStateView::render(&guard, viewer))
    }

    pub async fn apply_action(
        &self,
        id: GameId,
        seat: SeatId,
        request: ActionRequestDto,
        viewer: Option<SeatId>,
    ) -> GameResult<GameStateView> {
        let request = request.try_into().map_err(|e: crate::dto::ActionParseError| {
            GameError::InvalidAction { reason: e.to_string() }
        })?;
        let entry = self.entry(id)?;
        let (view, game_over, decisions) = {
            let mut guard = entry.orchestrator.lock().await;
            guard.apply_action(seat, request)?;
            guard.resolve_if_complete()?;
            let decisions = guard.drain_recent_decisions();
            let view = GameStateView::render(&guard, viewer);
            let over = !guard.table().is_hand_active() && guard.table().seats_with_chips() < 2;
            (view, over, decisions)
        };
        for (seat_id, decision) in &decisions {
            Self::broadcast_ai_action(&entry, *seat_id, decision);
        }
        Self::broadcast(&entry, "state_update", &view);
        if game_over {
            Self::broadcast(&entry, "game_over", &view);
        }
        Ok(view)
    }

    pub async fn next_hand(&self, id: GameId, viewer: Option<SeatId>) -> GameResult<GameStateView> {
        let entry = self.entry(id)?;
        let (view, decisions) = {
            let mut guard = entry.orchestrator.lock().await;
            guard.next_hand()?;
            let decisions = guard.drain_recent_decisions();
            (GameStateView::render(&guard, viewer), decisions)
        };
        for (seat_id, decision) in &decisions {
            Self::broadcast_ai_action(&entry, *seat_id, decision);
        }
        Self::broadcast(&entry, "state_update", &view);
        Ok(view)
    }

    pub async fn get_hand_summary(&self, id: GameId, hand_number: u64) -> GameResult<HandSummaryView> {
        let entry = self.entry(id)?;
        let guard = entry.orchestrator.lock().await;
        Ok(HandSummaryView::render(&guard, hand_number))
    }

    /// Subscribes to this game's event stream for WebSocket fan-out.
    /// Errors with `GameNotFound` if the game id is unknown.
    pub fn subscribe(&self, id: GameId) -> GameResult<broadcast::Receiver<String>> {
        let entry = self.entry(id)?;
        Ok(entry.events.subscribe())
    }

    fn broadcast(entry: &GameEntry, kind: &str, view: &GameStateView) {
        let payload = serde_json::json!({ "type": kind, "state": view });
        if let Ok(text) = serde_json::to_string(&payload) {
            // no receivers yet is not an error: the human may not have
            // opened a socket for this game.
            let _ = entry.events.send(text);
        }
    }

    /// Emits one `ai_action` event (§6) per AI move, ahead of the
    /// `state_update` that follows it, so a spectator sees each decision
    /// individually instead of only the latest one per seat.
    fn broadcast_ai_action(entry: &GameEntry, seat_id: SeatId, decision: &AIDecision) {
        let view = AIDecisionView::from_decision(seat_id, decision);
        let payload = serde_json::json!({ "type": "ai_action", "decision": view });
        if let Ok(text) = serde_json::to_string(&payload) {
            let _ = entry.events.send(text);
        }
    }

    fn entry(&self, id: GameId) -> GameResult<Arc<GameEntry>> {
        self.games
            .read()
            .expect("casino lock poisoned")
            .get(&id)
            .cloned()
            .ok_or(GameError::GameNotFound)
    }
}
