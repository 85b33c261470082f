/// A hand's kicker cards: the ranks left over once the category's own ranks
/// are accounted for. Structurally a rank-presence bitset, semantically
/// distinct from a `Hand` (which is a 52-bit card set).
///
/// Ord compares the raw bitset, which is only meaningful for two `Kickers`
/// drawn from the same `Ranking::n_kickers()` count, as is always the case
/// when comparing two hands of equal `Ranking`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Kickers(u16);

impl From<u16> for Kickers {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:013b}", self.0)
    }
}
