use crate::cards::card::Card;
use crate::cards::equity::Equity;
use crate::cards::street::Street;
use crate::Chips;
use rand::RngCore;

/// What a strategy chooses. `Raise(total)` names the seat's intended new
/// `current_bet`, same convention as `gameplay::ActionRequest::Raise`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Fold,
    Check,
    Call,
    Raise(Chips),
}

/// The record a strategy emits: the decision plus the telemetry an external
/// analysis layer or a "show AI thinking" UI consumes. Every field here is
/// load-bearing per the component spec; no ad-hoc extra fields are bolted on.
#[derive(Debug, Clone)]
pub struct AIDecision {
    pub decision: Decision,
    pub reasoning: String,
    pub hand_strength: f32,
    pub pot_odds: f32,
    pub spr: f32,
    pub confidence: f32,
}

/// Everything a strategy needs to act, gathered once by the Session
/// Orchestrator so strategies stay pure functions of `(input, rng)`.
pub struct DecisionInput<'a> {
    pub street: Street,
    pub hole: [Card; 2],
    pub board: &'a [Card],
    pub pot: Chips,
    pub current_bet: Chips,
    pub seat_current_bet: Chips,
    pub stack: Chips,
    pub effective_stack: Chips,
    pub active_opponents: usize,
    pub min_raise_to: Chips,
    pub max_raise_to: Chips,
    pub big_blind: Chips,
    pub monte_carlo_samples: usize,
}

impl<'a> DecisionInput<'a> {
    pub fn amount_to_call(&self) -> Chips {
        (self.current_bet - self.seat_current_bet).max(0)
    }

    pub fn pot_odds(&self) -> f32 {
        let to_call = self.amount_to_call();
        if to_call == 0 {
            0.0
        } else {
            to_call as f32 / (self.pot + to_call) as f32
        }
    }

    pub fn spr(&self) -> f32 {
        self.effective_stack as f32 / self.pot.max(1) as f32
    }

    /// Preflop: a heuristic hand-strength table keyed by rank pair and
    /// suitedness. Postflop: win probability against `active_opponents`
    /// random hands (§4.B), mapped directly onto `[0, 1]`.
    pub fn hand_strength(&self, rng: &mut dyn RngCore) -> f32 {
        if self.street == Street::Preflop {
            preflop_heuristic(self.hole)
        } else {
            let opponents = self.active_opponents.max(1);
            Equity::win_probability_with_samples(
                self.hole,
                self.board,
                opponents,
                rng,
                self.monte_carlo_samples,
            )
        }
    }

    /// Clamps a desired raise-to total into the legal range, or `None` if no
    /// raise is legal at all (stack too short of the minimum increment).
    pub fn clamp_raise(&self, desired: Chips) -> Option<Chips> {
        if self.max_raise_to < self.min_raise_to {
            return None;
        }
        Some(desired.clamp(self.min_raise_to, self.max_raise_to))
    }
}

/// A rough preflop hand-strength table: pairs scale with rank, suited
/// non-pairs get a small bump, and a large rank gap is penalized. Not a
/// substitute for postflop equity — only used before any board is dealt.
fn preflop_heuristic(hole: [Card; 2]) -> f32 {
    let (a, b) = (hole[0].rank(), hole[1].rank());
    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
    let hi_v = u8::from(hi) as f32;
    let lo_v = u8::from(lo) as f32;
    let suited = hole[0].suit() == hole[1].suit();

    let score = if hi == lo {
        0.50 + 0.45 * (hi_v / 12.0)
    } else {
        let gap = hi_v - lo_v;
        let mut s = 0.20 + 0.45 * (hi_v / 12.0) + 0.15 * (lo_v / 12.0);
        if suited {
            s += 0.08;
        }
        s -= (gap - 1.0).max(0.0) * 0.015;
        s
    };
    score.clamp(0.03, 0.99)
}

/// A stateless rule-based opponent. Every implementor is a zero-sized type;
/// `decide` is a pure function of `input` plus the shared RNG.
pub trait Strategy: std::fmt::Debug {
    fn decide(&self, input: &DecisionInput, rng: &mut dyn RngCore) -> AIDecision;
}
