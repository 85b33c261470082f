use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kickers::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;

/// A made hand's full strength: category plus kickers, ordered so that
/// `Ord::cmp` alone decides a showdown between two `Strength`s.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    ranking: Ranking,
    kickers: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }

    /// Maps this hand to `(strength, category_name)`, `strength ∈ [0, 1]`.
    ///
    /// The 9 `Ranking` categories tile `[0, 1]` into 9 contiguous bands in
    /// declaration order (weak to strong); within a band, `primary_rank`
    /// interpolates linearly from the bottom of the band to the top. This is
    /// the ONLY place a `Ranking` is turned into a scalar strength — the AI
    /// Decision Core and post-hand analysis both call this function so the
    /// two consumers can never drift apart.
    pub fn normalize(&self) -> (f32, &'static str) {
        const N_CATEGORIES: f32 = 9.0;
        const N_RANKS: f32 = 13.0;
        let category = self.ranking.category() as f32;
        let within = f32::from(u8::from(self.ranking.primary_rank())) / (N_RANKS - 1.0);
        let strength = (category + within) / N_CATEGORIES;
        (strength.clamp(0.0, 1.0), self.ranking.category_name())
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let ranking = evaluator.find_ranking();
        let kickers = evaluator.find_kickers(ranking);
        Self { ranking, kickers }
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((ranking, kickers): (Ranking, Kickers)) -> Self {
        Self { ranking, kickers }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.ranking)
    }
}
