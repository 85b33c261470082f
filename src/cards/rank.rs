use std::fmt::{Display, Formatter, Result};

/// A card's rank, independent of suit. Ordered low to high so that
/// `#[derive(PartialOrd, Ord)]` gives the natural comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            0 => Rank::Two,
            1 => Rank::Three,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            12 => Rank::Ace,
            _ => panic!("invalid rank"),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// A rank's single-bit mask within a 16-bit rank-presence bitset, used
/// throughout the evaluator. `Rank::from(bits)` recovers the rank of the
/// highest set bit in such a mask (the high card among the bits set).
impl From<Rank> for u16 {
    fn from(r: Rank) -> u16 {
        1 << (r as u8)
    }
}
impl From<u16> for Rank {
    fn from(bits: u16) -> Rank {
        assert!(bits != 0, "rank mask must have at least one bit set");
        Rank::from(15 - bits.leading_zeros() as u8)
    }
}

impl TryFrom<char> for Rank {
    type Error = ();
    fn try_from(c: char) -> std::result::Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(()),
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "T",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_u8() {
        for n in 0..13u8 {
            assert_eq!(u8::from(Rank::from(n)), n);
        }
    }

    #[test]
    fn bitmask_picks_highest() {
        let bits = u16::from(Rank::Two) | u16::from(Rank::Ten) | u16::from(Rank::Ace);
        assert_eq!(Rank::from(bits), Rank::Ace);
    }

    #[test]
    fn parses_ten_as_t() {
        assert_eq!(Rank::try_from('T').unwrap(), Rank::Ten);
        assert_eq!(Rank::try_from('t').unwrap(), Rank::Ten);
        assert!(Rank::try_from('1').is_err());
    }

    #[test]
    fn orders_low_to_high() {
        assert!(Rank::Two < Rank::Ace);
        assert!(Rank::King < Rank::Ace);
    }
}
