use super::card::Card;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;

/// The 52-card universe, shuffled once per hand and consumed front-to-back.
///
/// `deal_one`/`deal_n` pop from the back of the backing `Vec` so a fresh
/// `Deck` yields cards in shuffled order without ever repeating one.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A fresh, shuffled 52-card deck seeded from the OS's CSPRNG.
    pub fn new() -> Self {
        let mut rng = StdRng::from_os_rng();
        Self::shuffled_with(&mut rng)
    }

    /// A deterministic deck for reproducible tests and seeded Monte Carlo.
    pub fn seeded(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled_with(&mut rng)
    }

    /// A fresh, shuffled deck drawn from a caller-owned RNG stream — used by
    /// the Session Orchestrator so that the whole session's randomness
    /// (deck shuffles, AI decisions, Monte Carlo sampling) is reproducible
    /// from one seed.
    pub fn from_rng(rng: &mut impl Rng) -> Self {
        Self::shuffled_with(rng)
    }

    fn shuffled_with(rng: &mut impl Rng) -> Self {
        let mut cards: Vec<Card> = (0..52u8).map(Card::from).collect();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Cards still waiting to be dealt.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Removes and returns the next card, or `None` if the deck is empty.
    pub fn deal_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Removes and returns the next `k` cards, in deal order.
    ///
    /// Returns fewer than `k` cards if the deck doesn't have that many left;
    /// callers that require an exact count should check `remaining()` first.
    pub fn deal_n(&mut self, k: usize) -> Vec<Card> {
        let mut out = Vec::with_capacity(k);
        for _ in 0..k {
            match self.deal_one() {
                Some(card) => out.push(card),
                None => break,
            }
        }
        out
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
