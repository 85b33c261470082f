use super::action::{ActionRequest, ResolvedAction};
use super::event::{Event, EventKind, EventLog};
use super::pot;
use super::seat::{Personality, Seat, SeatId};
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::street::Street;
use crate::cards::strength::Strength;
use crate::error::{GameError, GameResult};
use crate::Chips;
use rand::Rng;
use std::collections::HashMap;

/// What `resolve_if_complete` did, so the Session Orchestrator knows whether
/// to keep driving AI turns, advance again, or start the next hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    StillAwaitingAction,
    StreetAdvanced(Street),
    HandComplete,
}

/// The Hand State Machine & Betting Engine (§4.D): blinds, streets, turn
/// order, action legality, pot tracking, side pots, and showdown. Owns every
/// seat's mutable state for one game; no reference to it escapes except
/// through read-only accessors.
#[derive(Debug, Clone)]
pub struct Table {
    seats: Vec<Seat>,
    dealer_index: usize,
    small_blind: Chips,
    big_blind: Chips,
    current_bet: Chips,
    current_player_index: Option<usize>,
    last_raiser_index: Option<usize>,
    min_raise_increment: Chips,
    board: Vec<Card>,
    street: Street,
    deck: Deck,
    hand_number: u64,
    hand_active: bool,
    last_voluntary_actor: Option<SeatId>,
    total_chips: Chips,
}

impl Table {
    pub fn new(
        seats: Vec<(String, Chips, Option<Personality>)>,
        small_blind: Chips,
        big_blind: Chips,
    ) -> Self {
        assert!(seats.len() >= 2 && seats.len() <= 4, "table seats 2 to 4 players");
        let total_chips = seats.iter().map(|(_, stack, _)| *stack).sum();
        let seats = seats
            .into_iter()
            .enumerate()
            .map(|(i, (name, stack, personality))| Seat::new(i, name, stack, personality))
            .collect();
        Self {
            seats,
            dealer_index: 0,
            small_blind,
            big_blind,
            current_bet: 0,
            current_player_index: None,
            last_raiser_index: None,
            min_raise_increment: big_blind,
            board: Vec::new(),
            street: Street::Preflop,
            deck: Deck::seeded(0),
            hand_number: 0,
            hand_active: false,
            last_voluntary_actor: None,
            total_chips,
        }
    }

    // ---- read-only accessors -------------------------------------------------

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seats.get(id)
    }
    pub fn dealer_index(&self) -> usize {
        self.dealer_index
    }
    pub fn small_blind(&self) -> Chips {
        self.small_blind
    }
    pub fn big_blind(&self) -> Chips {
        self.big_blind
    }
    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }
    pub fn current_player(&self) -> Option<SeatId> {
        self.current_player_index
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }
    pub fn is_hand_active(&self) -> bool {
        self.hand_active
    }
    pub fn pot(&self) -> Chips {
        self.seats.iter().map(|s| s.total_invested()).sum()
    }
    pub fn min_raise_increment(&self) -> Chips {
        self.min_raise_increment
    }
    pub fn to_call(&self, id: SeatId) -> Chips {
        let seat = &self.seats[id];
        (self.current_bet - seat.current_bet()).max(0)
    }
    pub fn min_raise_to(&self) -> Chips {
        self.current_bet + self.min_raise_increment
    }
    pub fn max_raise_to(&self, id: SeatId) -> Chips {
        let seat = &self.seats[id];
        seat.current_bet() + seat.stack()
    }
    pub fn effective_stack(&self, id: SeatId) -> Chips {
        let seat = &self.seats[id];
        let acting_total = seat.stack() + seat.current_bet();
        self.seats
            .iter()
            .enumerate()
            .filter(|(i, s)| *i != id && s.is_active())
            .map(|(_, s)| s.stack() + s.current_bet())
            .max()
            .map(|opp_total| acting_total.min(opp_total))
            .unwrap_or(acting_total)
    }
    pub fn active_opponent_count(&self, id: SeatId) -> usize {
        self.seats
            .iter()
            .enumerate()
            .filter(|(i, s)| *i != id && s.is_active())
            .count()
    }
    pub fn seats_with_chips(&self) -> usize {
        self.seats.iter().filter(|s| s.has_chips()).count()
    }

    // ---- start of hand --------------------------------------------------------

    /// Runs §4.D start-of-hand: rotates the dealer, reshuffles, posts blinds,
    /// and hands the turn to the first actor. Errors with `GameOver` if fewer
    /// than two seats still have chips.
    pub fn start_hand(&mut self, rng: &mut impl Rng, log: &mut EventLog) -> GameResult<()> {
        if self.seats_with_chips() < 2 {
            return Err(GameError::GameOver);
        }
        self.hand_number += 1;
        self.rotate_dealer();
        for seat in self.seats.iter_mut() {
            seat.begin_hand();
        }
        self.board.clear();
        self.street = Street::Preflop;
        self.deck = Deck::from_rng(rng);
        self.current_bet = 0;
        self.last_raiser_index = None;
        self.min_raise_increment = self.big_blind;
        self.last_voluntary_actor = None;

        for i in 0..self.seats.len() {
            if self.seats[i].is_active() {
                let a = self.draw_card()?;
                let b = self.draw_card()?;
                self.seats[i].deal_hole(a, b);
                log.push(Event {
                    hand_number: self.hand_number,
                    kind: EventKind::Deal,
                    seat: Some(self.seats[i].id()),
                    action: None,
                    amount: 0,
                    pot: 0,
                    street: self.street,
                    description: format!("{} dealt {} {}", self.seats[i].name(), a, b),
                });
            }
        }

        let n_active = self.seats.iter().filter(|s| s.can_act()).count();
        let (sb_idx, bb_idx) = if n_active == 2 {
            let other = self
                .next_actor_after(self.dealer_index)
                .expect("heads-up must have exactly one opponent");
            (self.dealer_index, other)
        } else {
            let sb = self
                .next_actor_after(self.dealer_index)
                .expect("at least two active seats");
            let bb = self.next_actor_after(sb).expect("at least two active seats");
            (sb, bb)
        };
        self.post_blind(sb_idx, self.small_blind, log)?;
        self.post_blind(bb_idx, self.big_blind, log)?;
        self.current_bet = self.big_blind;
        self.last_raiser_index = Some(bb_idx);
        self.hand_active = true;
        self.current_player_index = self.next_actor_after(bb_idx);
        if self.current_player_index.is_none() {
            // everyone but the blinds is already all-in / busted; let the
            // orchestrator's resolve loop fast-forward straight to showdown.
            self.current_player_index = None;
        }
        Ok(())
    }

    fn draw_card(&mut self) -> GameResult<Card> {
        self.deck.deal_one().ok_or_else(|| GameError::InternalConsistency {
            detail: "deck exhausted while dealing hole cards".into(),
        })
    }

    fn rotate_dealer(&mut self) {
        if self.hand_number == 0 {
            if !self.seats[self.dealer_index].has_chips() {
                let n = self.seats.len();
                for step in 0..n {
                    if self.seats[(self.dealer_index + step) % n].has_chips() {
                        self.dealer_index = (self.dealer_index + step) % n;
                        break;
                    }
                }
            }
            return;
        }
        let n = self.seats.len();
        for step in 1..=n {
            let next = (self.dealer_index + step) % n;
            if self.seats[next].has_chips() {
                self.dealer_index = next;
                return;
            }
        }
    }

    fn post_blind(&mut self, idx: usize, amount: Chips, log: &mut EventLog) -> GameResult<()> {
        let paid = self.seats[idx].commit(amount);
        log.push(Event {
            hand_number: self.hand_number,
            kind: EventKind::BlindPost,
            seat: Some(self.seats[idx].id()),
            action: Some(ResolvedAction::Blind(paid)),
            amount: paid,
            pot: self.pot(),
            street: self.street,
            description: format!("{} posts blind {}", self.seats[idx].name(), paid),
        });
        Ok(())
    }

    /// Next seat (by table order, wrapping) eligible to act: active and not
    /// all-in. `None` if no such seat exists.
    fn next_actor_after(&self, idx: usize) -> Option<usize> {
        let n = self.seats.len();
        for step in 1..=n {
            let i = (idx + step) % n;
            if self.seats[i].can_act() {
                return Some(i);
            }
        }
        None
    }

    fn reopen_others(&mut self, except: usize) {
        for (i, seat) in self.seats.iter_mut().enumerate() {
            if i != except && seat.is_active() {
                seat.reopen();
            }
        }
    }

    // ---- action application ----------------------------------------------------

    /// Validates and applies one action for `seat_id`, mutating seat/pot
    /// state and advancing (or closing) the turn. Rejects without mutating
    /// anything on any legality failure.
    pub fn apply_action(
        &mut self,
        seat_id: SeatId,
        request: ActionRequest,
        log: &mut EventLog,
    ) -> GameResult<ResolvedAction> {
        if !self.hand_active {
            return Err(GameError::InvalidAction {
                reason: "no hand is in progress".into(),
            });
        }
        match self.current_player_index {
            Some(expected) if expected == seat_id => {}
            other => {
                return Err(GameError::NotYourTurn {
                    expected: other,
                    got: seat_id,
                })
            }
        }
        if seat_id >= self.seats.len() {
            return Err(GameError::InvalidAction {
                reason: "unknown seat".into(),
            });
        }

        let resolved = self.resolve(seat_id, request)?;
        self.last_voluntary_actor = Some(seat_id);

        let description = format!("{} {}", self.seats[seat_id].name(), resolved);
        log.push(Event {
            hand_number: self.hand_number,
            kind: EventKind::Action,
            seat: Some(seat_id),
            action: Some(resolved),
            amount: resolved.amount(),
            pot: self.pot(),
            street: self.street,
            description,
        });

        if self.round_complete() {
            self.current_player_index = None;
        } else {
            self.current_player_index = self.next_actor_after(seat_id);
        }
        Ok(resolved)
    }

    fn resolve(&mut self, idx: SeatId, request: ActionRequest) -> GameResult<ResolvedAction> {
        match request {
            ActionRequest::Fold => {
                self.seats[idx].fold();
                Ok(ResolvedAction::Fold)
            }
            ActionRequest::Check => {
                if self.seats[idx].current_bet() != self.current_bet {
                    return Err(GameError::InvalidAction {
                        reason: "cannot check facing a bet".into(),
                    });
                }
                self.seats[idx].mark_acted();
                Ok(ResolvedAction::Check)
            }
            ActionRequest::Call => {
                if self.current_bet == 0 {
                    return Err(GameError::InvalidAction {
                        reason: "nothing to call".into(),
                    });
                }
                let amount = self.to_call(idx);
                self.seats[idx].commit(amount);
                self.seats[idx].mark_acted();
                Ok(ResolvedAction::Call(amount))
            }
            ActionRequest::Raise(total) => {
                if self.seats[idx].has_acted() {
                    return Err(GameError::InvalidAction {
                        reason: "action was not reopened for this seat".into(),
                    });
                }
                if total < self.min_raise_to() {
                    return Err(GameError::BadAmount {
                        reason: format!(
                            "raise must be at least {} (got {total})",
                            self.min_raise_to()
                        ),
                    });
                }
                if total > self.max_raise_to(idx) {
                    return Err(GameError::InsufficientFunds {
                        have: self.seats[idx].stack(),
                        need: total - self.seats[idx].current_bet(),
                    });
                }
                let delta = total - self.seats[idx].current_bet();
                self.seats[idx].commit(delta);
                self.seats[idx].mark_acted();
                self.min_raise_increment = total - self.current_bet;
                self.current_bet = total;
                self.last_raiser_index = Some(idx);
                self.reopen_others(idx);
                Ok(ResolvedAction::Raise(total))
            }
            ActionRequest::AllIn => {
                if self.seats[idx].stack() == 0 {
                    return Err(GameError::InvalidAction {
                        reason: "no chips left to push".into(),
                    });
                }
                let pushed = self.seats[idx].stack();
                self.seats[idx].commit(pushed);
                self.seats[idx].mark_acted();
                let total = self.seats[idx].current_bet();
                let crosses_minimum =
                    total > self.current_bet && total - self.current_bet >= self.min_raise_increment;
                if crosses_minimum {
                    self.min_raise_increment = total - self.current_bet;
                    self.current_bet = total;
                    self.last_raiser_index = Some(idx);
                    self.reopen_others(idx);
                    Ok(ResolvedAction::AllIn { total, reopens: true })
                } else {
                    if total > self.current_bet {
                        self.current_bet = total;
                    }
                    Ok(ResolvedAction::AllIn { total, reopens: false })
                }
            }
        }
    }

    fn round_complete(&self) -> bool {
        let active: Vec<&Seat> = self.seats.iter().filter(|s| s.is_active()).collect();
        if active.len() <= 1 {
            return true;
        }
        active
            .iter()
            .all(|s| s.is_all_in() || (s.has_acted() && s.current_bet() == self.current_bet))
    }

    // ---- street / showdown resolution ------------------------------------------

    /// If betting is still awaiting an action, does nothing. Otherwise
    /// transitions to the next street (dealing community cards), fast-forwards
    /// to showdown when no further betting is possible, or resolves the hand.
    pub fn resolve_if_complete(&mut self, log: &mut EventLog) -> GameResult<ResolveOutcome> {
        if self.current_player_index.is_some() {
            return Ok(ResolveOutcome::StillAwaitingAction);
        }
        if !self.hand_active {
            return Ok(ResolveOutcome::HandComplete);
        }
        let active: Vec<usize> = self
            .seats
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_active())
            .map(|(i, _)| i)
            .collect();
        if active.len() <= 1 {
            self.award_fold_win(active.first().copied(), log)?;
            return Ok(ResolveOutcome::HandComplete);
        }
        if self.street == Street::River {
            self.run_showdown(log)?;
            return Ok(ResolveOutcome::HandComplete);
        }
        let not_all_in = active.iter().filter(|&&i| !self.seats[i].is_all_in()).count();
        if not_all_in <= 1 {
            while self.street != Street::River {
                self.deal_next_street(log)?;
            }
            self.run_showdown(log)?;
            return Ok(ResolveOutcome::HandComplete);
        }
        self.deal_next_street(log)?;
        self.current_player_index = self.next_actor_after(self.dealer_index);
        if self.current_player_index.is_none() {
            while self.street != Street::River {
                self.deal_next_street(log)?;
            }
            self.run_showdown(log)?;
            return Ok(ResolveOutcome::HandComplete);
        }
        Ok(ResolveOutcome::StreetAdvanced(self.street))
    }

    fn deal_next_street(&mut self, log: &mut EventLog) -> GameResult<()> {
        let next = self.street.next();
        let cards = self.deck.deal_n(next.n_dealt());
        if cards.len() != next.n_dealt() {
            return Err(GameError::InternalConsistency {
                detail: "deck exhausted mid-hand".into(),
            });
        }
        self.board.extend_from_slice(&cards);
        self.street = next;
        for seat in self.seats.iter_mut() {
            seat.begin_street();
        }
        self.current_bet = 0;
        self.last_raiser_index = None;
        self.min_raise_increment = self.big_blind;
        let dealt = cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        log.push(Event {
            hand_number: self.hand_number,
            kind: EventKind::Street,
            seat: None,
            action: None,
            amount: 0,
            pot: self.pot(),
            street: self.street,
            description: format!("{} dealt: {dealt}", self.street),
        });
        Ok(())
    }

    fn award_fold_win(&mut self, winner: Option<usize>, log: &mut EventLog) -> GameResult<()> {
        let pot = self.pot();
        let winner_idx = match winner {
            Some(w) => w,
            None => {
                let fallback = self.last_voluntary_actor.ok_or_else(|| {
                    GameError::InternalConsistency {
                        detail: "no active seat and no recorded actor to default the pot to".into(),
                    }
                })?;
                log.push(Event {
                    hand_number: self.hand_number,
                    kind: EventKind::PotAward,
                    seat: Some(fallback),
                    action: None,
                    amount: pot,
                    pot,
                    street: self.street,
                    description: format!(
                        "no seat remained active; pot defaulted to seat {fallback} (last voluntary actor)"
                    ),
                });
                fallback
            }
        };
        self.seats[winner_idx].award(pot);
        log.push(Event {
            hand_number: self.hand_number,
            kind: EventKind::PotAward,
            seat: Some(self.seats[winner_idx].id()),
            action: None,
            amount: pot,
            pot,
            street: self.street,
            description: format!("{} wins {pot} uncontested", self.seats[winner_idx].name()),
        });
        for seat in self.seats.iter_mut() {
            seat.clear_investment();
        }
        self.hand_active = false;
        self.current_player_index = None;
        self.check_chip_conservation()
    }

    fn run_showdown(&mut self, log: &mut EventLog) -> GameResult<()> {
        let entries: Vec<(SeatId, Chips, bool)> = self
            .seats
            .iter()
            .map(|s| (s.id(), s.total_invested(), !s.is_active()))
            .collect();
        let pots = pot::build_side_pots(&entries);
        let seat_order: Vec<SeatId> = self.seats.iter().map(|s| s.id()).collect();

        let mut strengths: HashMap<SeatId, Strength> = HashMap::new();
        for seat in self.seats.iter().filter(|s| s.is_active()) {
            let cards = seat.hole_cards();
            if cards.len() != 2 {
                return Err(GameError::InternalConsistency {
                    detail: format!("seat {} reached showdown without two hole cards", seat.id()),
                });
            }
            let made = Hand::from(vec![cards[0], cards[1]]).union(Hand::from(self.board.clone()));
            strengths.insert(seat.id(), Strength::from(made));
            log.push(Event {
                hand_number: self.hand_number,
                kind: EventKind::Showdown,
                seat: Some(seat.id()),
                action: None,
                amount: 0,
                pot: self.pot(),
                street: Street::Showdown,
                description: format!(
                    "{} shows {} {} ({})",
                    seat.name(),
                    cards[0],
                    cards[1],
                    strengths[&seat.id()].normalize().1
                ),
            });
        }

        let mut payouts: HashMap<SeatId, Chips> = HashMap::new();
        for side_pot in &pots {
            let share = pot::distribute(side_pot, &strengths, &seat_order, self.dealer_index);
            for (id, amount) in share {
                *payouts.entry(id).or_insert(0) += amount;
            }
        }
        let distributed: Chips = payouts.values().sum();
        let built: Chips = pots.iter().map(|p| p.amount).sum();
        if distributed != built {
            return Err(GameError::InternalConsistency {
                detail: format!("side-pot distribution mismatch: paid {distributed}, built {built}"),
            });
        }

        for (id, amount) in &payouts {
            if *amount == 0 {
                continue;
            }
            self.seats[*id].award(*amount);
            log.push(Event {
                hand_number: self.hand_number,
                kind: EventKind::PotAward,
                seat: Some(*id),
                action: None,
                amount: *amount,
                pot: self.pot(),
                street: Street::Showdown,
                description: format!("seat {id} wins {amount}"),
            });
        }

        for seat in self.seats.iter_mut() {
            seat.clear_investment();
        }
        self.street = Street::Showdown;
        self.hand_active = false;
        self.current_player_index = None;
        self.check_chip_conservation()
    }

    fn check_chip_conservation(&self) -> GameResult<()> {
        let total: Chips = self.seats.iter().map(|s| s.stack()).sum();
        if total != self.total_chips {
            return Err(GameError::InternalConsistency {
                detail: format!(
                    "chip conservation violated: stacks sum to {total}, expected {}",
                    self.total_chips
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn two_player_table() -> Table {
        Table::new(
            vec![
                ("p0".into(), 1000, None),
                ("p1".into(), 1000, None),
            ],
            5,
            10,
        )
    }

    fn three_player_table() -> Table {
        Table::new(
            vec![
                ("p0".into(), 1000, None),
                ("p1".into(), 1000, None),
                ("p2".into(), 1000, None),
            ],
            5,
            10,
        )
    }

    #[test]
    fn heads_up_fold_to_blind() {
        let mut table = two_player_table();
        let mut log = EventLog::new(1000);
        let mut rng = SmallRng::seed_from_u64(1);
        table.start_hand(&mut rng, &mut log).unwrap();
        assert_eq!(table.current_player(), Some(0)); // dealer/SB acts first heads-up
        table
            .apply_action(0, ActionRequest::Fold, &mut log)
            .unwrap();
        let outcome = table.resolve_if_complete(&mut log).unwrap();
        assert_eq!(outcome, ResolveOutcome::HandComplete);
        assert_eq!(table.seat(0).unwrap().stack(), 995);
        assert_eq!(table.seat(1).unwrap().stack(), 1005);
        assert_eq!(table.pot(), 0);
    }

    #[test]
    fn bb_option_keeps_round_open_after_all_calls() {
        let mut table = three_player_table();
        let mut log = EventLog::new(1000);
        let mut rng = SmallRng::seed_from_u64(2);
        table.start_hand(&mut rng, &mut log).unwrap();
        // dealer=0, sb=1, bb=2, first to act = 0 (left of bb).
        table
            .apply_action(0, ActionRequest::Call, &mut log)
            .unwrap();
        table
            .apply_action(1, ActionRequest::Call, &mut log)
            .unwrap();
        // everyone has matched 10, but BB (seat 2) hasn't acted: round stays open.
        assert_eq!(table.current_player(), Some(2));
        assert_eq!(
            table.resolve_if_complete(&mut log).unwrap(),
            ResolveOutcome::StillAwaitingAction
        );
        table
            .apply_action(2, ActionRequest::Check, &mut log)
            .unwrap();
        assert_eq!(
            table.resolve_if_complete(&mut log).unwrap(),
            ResolveOutcome::StreetAdvanced(Street::Flop)
        );
        assert_eq!(table.board().len(), 3);
    }

    #[test]
    fn short_all_in_does_not_reopen_action() {
        let mut table = three_player_table();
        let mut log = EventLog::new(1000);
        let mut rng = SmallRng::seed_from_u64(3);
        table.start_hand(&mut rng, &mut log).unwrap();
        // force a known stack for seat1 to create a short all-in.
        table.seats[1] = Seat::new(1, "p1", 45, None);
        table.seats[1].begin_hand();
        table.seats[1].commit(5); // mirror the small blind already posted this hand
        // seat0 opens to 30 (raise increment 20 over the big blind).
        table
            .apply_action(0, ActionRequest::Raise(30), &mut log)
            .unwrap();
        assert_eq!(table.min_raise_increment(), 20);
        // seat1 shoves for 45 total — short of the 50 minimum re-raise.
        let resolved = table
            .apply_action(1, ActionRequest::AllIn, &mut log)
            .unwrap();
        assert_eq!(resolved, ResolvedAction::AllIn { total: 45, reopens: false });
        assert_eq!(table.current_bet(), 45);
        assert_eq!(table.min_raise_increment(), 20);
        // seat0 already acted; a legal raise must clear 45 + 20 = 65, not 50.
        assert!(table.apply_action(0, ActionRequest::Raise(50), &mut log).is_err());
        // but seat0 can still call the short all-in.
        assert!(table
            .apply_action(0, ActionRequest::Call, &mut log)
            .is_ok());
    }

    #[test]
    fn all_call_to_showdown_awards_the_distinct_best_hand() {
        use crate::cards::rank::Rank;
        use crate::cards::suit::Suit;

        let mut table = Table::new(
            vec![
                ("p0".into(), 1000, None),
                ("p1".into(), 1000, None),
                ("p2".into(), 1000, None),
                ("p3".into(), 1000, None),
            ],
            5,
            10,
        );
        let mut log = EventLog::new(1000);
        let mut rng = SmallRng::seed_from_u64(41);
        table.start_hand(&mut rng, &mut log).unwrap();

        // overwrite the randomly dealt hole cards with a hand where seat2
        // ends up with quad kings, uniquely better than anyone else's.
        table.seats[0].deal_hole(Card::from((Rank::Two, Suit::Club)), Card::from((Rank::Three, Suit::Diamond)));
        table.seats[1].deal_hole(Card::from((Rank::Four, Suit::Heart)), Card::from((Rank::Five, Suit::Spade)));
        table.seats[2].deal_hole(Card::from((Rank::King, Suit::Club)), Card::from((Rank::King, Suit::Diamond)));
        table.seats[3].deal_hole(Card::from((Rank::Six, Suit::Diamond)), Card::from((Rank::Seven, Suit::Club)));

        // call down every street with no further raises.
        loop {
            if let Some(seat) = table.current_player() {
                let request = if table.to_call(seat) == 0 {
                    ActionRequest::Check
                } else {
                    ActionRequest::Call
                };
                table.apply_action(seat, request, &mut log).unwrap();
            }
            match table.resolve_if_complete(&mut log).unwrap() {
                ResolveOutcome::HandComplete => break,
                ResolveOutcome::StreetAdvanced(_) => {
                    // force the board to the rigged runout right after it's dealt.
                    table.board = vec![
                        Card::from((Rank::King, Suit::Heart)),
                        Card::from((Rank::King, Suit::Spade)),
                        Card::from((Rank::Two, Suit::Diamond)),
                        Card::from((Rank::Three, Suit::Heart)),
                        Card::from((Rank::Four, Suit::Diamond)),
                    ][..table.board.len()]
                        .to_vec();
                }
                _ => {}
            }
        }

        assert_eq!(table.pot(), 0); // already distributed
        assert_eq!(table.seat(2).unwrap().stack(), 1030); // paid 10, won the 40 pot
        assert_eq!(table.seat(0).unwrap().stack(), 990);
        assert_eq!(table.seat(1).unwrap().stack(), 990);
        assert_eq!(table.seat(3).unwrap().stack(), 990);
        let total: Chips = table.seats().iter().map(|s| s.stack()).sum();
        assert_eq!(total, 4000);
    }

    #[test]
    fn chip_conservation_holds_over_many_hands() {
        let mut table = two_player_table();
        let mut log = EventLog::new(10_000);
        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..20 {
            if table.seats_with_chips() < 2 {
                break;
            }
            table.start_hand(&mut rng, &mut log).unwrap();
            let mut guard = 0;
            loop {
                guard += 1;
                assert!(guard < 200, "hand did not terminate");
                if let Some(actor) = table.current_player() {
                    // always call/check to keep the simulation simple and terminating.
                    let request = if table.to_call(actor) == 0 {
                        ActionRequest::Check
                    } else {
                        ActionRequest::Call
                    };
                    table.apply_action(actor, request, &mut log).unwrap();
                }
                match table.resolve_if_complete(&mut log).unwrap() {
                    ResolveOutcome::HandComplete => break,
                    _ => continue,
                }
            }
            let total: Chips = table.seats().iter().map(|s| s.stack()).sum();
            assert_eq!(total, 2000);
        }
    }
}
