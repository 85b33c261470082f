use super::rank::Rank;

/// A poker hand's category and primary rank(s), without kickers.
///
/// Ordered by `#[derive(PartialOrd, Ord)]` — variant declaration order is
/// weak-to-strong, and `Ord::cmp` is the single comparison used everywhere a
/// hand needs to be ranked against another.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),          // 3 kickers
    TwoPair(Rank, Rank),    // 1 kicker
    ThreeOAK(Rank),         // 2 kickers
    Straight(Rank),         // 0 kickers
    Flush(Rank),            // 0 kickers
    FullHouse(Rank, Rank),  // 0 kickers
    FourOAK(Rank),          // 1 kicker
    StraightFlush(Rank),    // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::FourOAK(_) | Ranking::TwoPair(_, _) => 1,
            _ => 0,
        }
    }

    /// Mask of ranks already spoken for by the category itself (pair rank,
    /// trips rank, etc). Used to exclude those ranks when picking kickers.
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::FourOAK(hi)
            | Ranking::ThreeOAK(hi) => !u16::from(hi),
            Ranking::FullHouse(..)
            | Ranking::StraightFlush(..)
            | Ranking::Straight(..)
            | Ranking::Flush(..) => 0,
        }
    }

    /// Ordinal of the hand category, 0 (high card) through 8 (straight flush).
    pub fn category(&self) -> u8 {
        match self {
            Ranking::HighCard(_) => 0,
            Ranking::OnePair(_) => 1,
            Ranking::TwoPair(..) => 2,
            Ranking::ThreeOAK(_) => 3,
            Ranking::Straight(_) => 4,
            Ranking::Flush(_) => 5,
            Ranking::FullHouse(..) => 6,
            Ranking::FourOAK(_) => 7,
            Ranking::StraightFlush(_) => 8,
        }
    }

    /// Human-readable category name.
    pub fn category_name(&self) -> &'static str {
        match self {
            Ranking::HighCard(_) => "high card",
            Ranking::OnePair(_) => "one pair",
            Ranking::TwoPair(..) => "two pair",
            Ranking::ThreeOAK(_) => "three of a kind",
            Ranking::Straight(_) => "straight",
            Ranking::Flush(_) => "flush",
            Ranking::FullHouse(..) => "full house",
            Ranking::FourOAK(_) => "four of a kind",
            Ranking::StraightFlush(_) => "straight flush",
        }
    }

    /// Primary rank used to interpolate strength within a category's band.
    pub fn primary_rank(&self) -> Rank {
        match *self {
            Ranking::HighCard(r)
            | Ranking::OnePair(r)
            | Ranking::ThreeOAK(r)
            | Ranking::Straight(r)
            | Ranking::Flush(r)
            | Ranking::FourOAK(r)
            | Ranking::StraightFlush(r) => r,
            Ranking::TwoPair(hi, _) | Ranking::FullHouse(hi, _) => hi,
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::FullHouse(r1, r2) => write!(f, "full house, {}s full of {}s", r1, r2),
            Ranking::TwoPair(r1, r2) => write!(f, "two pair, {}s and {}s", r1, r2),
            Ranking::HighCard(r) => write!(f, "high card, {}", r),
            Ranking::OnePair(r) => write!(f, "pair of {}s", r),
            Ranking::ThreeOAK(r) => write!(f, "three of a kind, {}s", r),
            Ranking::Straight(r) => write!(f, "straight to the {}", r),
            Ranking::FourOAK(r) => write!(f, "four of a kind, {}s", r),
            Ranking::Flush(r) => write!(f, "flush, {} high", r),
            Ranking::StraightFlush(r) => write!(f, "straight flush to the {}", r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_categories_monotonically() {
        assert!(Ranking::HighCard(Rank::Ace) < Ranking::OnePair(Rank::Two));
        assert!(Ranking::OnePair(Rank::Ace) < Ranking::TwoPair(Rank::Two, Rank::Three));
        assert!(Ranking::FullHouse(Rank::Two, Rank::Three) < Ranking::FourOAK(Rank::Two));
        assert!(Ranking::FourOAK(Rank::Two) < Ranking::StraightFlush(Rank::Two));
    }

    #[test]
    fn category_ordinals_match_declaration_order() {
        assert_eq!(Ranking::HighCard(Rank::Two).category(), 0);
        assert_eq!(Ranking::StraightFlush(Rank::Two).category(), 8);
    }
}
