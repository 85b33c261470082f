use super::{rank::Rank, suit::Suit};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism: 0..52, ordered rank-major (4 suits per rank)
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        (c.rank as u8) * 4 + (c.suit as u8)
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// u64 isomorphism: single bit set at the card's u8 index, for use in Hand bitsets
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}
impl From<u64> for Card {
    fn from(n: u64) -> Self {
        Card::from(n.trailing_zeros() as u8)
    }
}

impl TryFrom<&str> for Card {
    type Error = ();
    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        let mut chars = s.chars();
        let rank = chars.next().ok_or(())?;
        let suit = chars.next().ok_or(())?;
        if chars.next().is_some() {
            return Err(());
        }
        Ok(Card {
            rank: Rank::try_from(rank)?,
            suit: Suit::try_from(suit)?,
        })
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
