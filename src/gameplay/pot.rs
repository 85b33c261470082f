use super::seat::SeatId;
use crate::cards::strength::Strength;
use crate::Chips;
use std::collections::HashMap;

/// One pot (main or side) built from `total_invested` levels at showdown:
/// an amount, and the seats still eligible to win it (i.e. not folded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidePot {
    pub amount: Chips,
    pub eligible: Vec<SeatId>,
}

/// Builds the ordered list of pots from every seat's `total_invested`,
/// folded or not, per the showdown side-pot rule (§4.D): one pot per
/// distinct investment level, each sized `(level - previous) * contributors`,
/// with eligibility restricted to seats that didn't fold.
pub fn build_side_pots(entries: &[(SeatId, Chips, bool)]) -> Vec<SidePot> {
    let mut levels: Vec<Chips> = entries
        .iter()
        .map(|(_, invested, _)| *invested)
        .filter(|&c| c > 0)
        .collect();
    levels.sort_unstable();
    levels.dedup();

    let mut pots = Vec::with_capacity(levels.len());
    let mut previous = 0;
    for level in levels {
        let contributors: Vec<&(SeatId, Chips, bool)> = entries
            .iter()
            .filter(|(_, invested, _)| *invested >= level)
            .collect();
        let eligible: Vec<SeatId> = contributors
            .iter()
            .filter(|(_, _, folded)| !folded)
            .map(|(id, _, _)| *id)
            .collect();
        let amount = (level - previous) * contributors.len() as Chips;
        if amount > 0 {
            pots.push(SidePot { amount, eligible });
        }
        previous = level;
    }
    pots
}

/// Splits one pot's amount among its best hand(s), crediting the integer
/// share to each and distributing any remainder chip one at a time to
/// winners in seat order starting left of the dealer.
pub fn distribute(
    pot: &SidePot,
    strengths: &HashMap<SeatId, Strength>,
    seat_order: &[SeatId],
    dealer_position: usize,
) -> HashMap<SeatId, Chips> {
    let mut payouts = HashMap::new();
    if pot.eligible.is_empty() || pot.amount == 0 {
        return payouts;
    }
    let best = pot
        .eligible
        .iter()
        .filter_map(|id| strengths.get(id).map(|s| (*id, *s)))
        .max_by_key(|(_, s)| *s)
        .map(|(_, s)| s);
    let Some(best) = best else {
        return payouts;
    };
    let n = seat_order.len().max(1);
    let mut winners: Vec<SeatId> = (1..=n)
        .map(|offset| seat_order[(dealer_position + offset) % n])
        .filter(|id| pot.eligible.contains(id) && strengths.get(id) == Some(&best))
        .collect();
    if winners.is_empty() {
        // seat_order didn't cover every eligible id (e.g. in unit tests); fall
        // back to eligible order so the pot is never silently dropped.
        winners = pot
            .eligible
            .iter()
            .filter(|id| strengths.get(id) == Some(&best))
            .copied()
            .collect();
    }
    let share = pot.amount / winners.len() as Chips;
    let remainder = (pot.amount % winners.len() as Chips) as usize;
    for (i, winner) in winners.iter().enumerate() {
        let extra = if i < remainder { 1 } else { 0 };
        *payouts.entry(*winner).or_insert(0) += share + extra;
    }
    payouts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use crate::cards::hand::Hand;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;

    fn strength(cards: Vec<(Rank, Suit)>) -> Strength {
        Strength::from(Hand::from(
            cards.into_iter().map(Card::from).collect::<Vec<Card>>(),
        ))
    }

    #[test]
    fn single_pot_when_everyone_matches() {
        let entries = vec![(0, 100, false), (1, 100, false), (2, 100, false)];
        let pots = build_side_pots(&entries);
        assert_eq!(pots.len(), 1);
        assert_eq!(pots[0].amount, 300);
        assert_eq!(pots[0].eligible.len(), 3);
    }

    #[test]
    fn two_all_ins_of_different_sizes_build_three_pots() {
        // seat0 all-in 100, seat1 all-in 500, seat2 calls 1000.
        let entries = vec![(0, 100, false), (1, 500, false), (2, 1000, false)];
        let pots = build_side_pots(&entries);
        assert_eq!(pots.len(), 3);
        assert_eq!(pots[0].amount, 300); // 100 * 3
        assert_eq!(pots[1].amount, 800); // 400 * 2
        assert_eq!(pots[2].amount, 1000); // 500 * 1
        assert_eq!(pots[0].eligible, vec![0, 1, 2]);
        assert_eq!(pots[1].eligible, vec![1, 2]);
        assert_eq!(pots[2].eligible, vec![2]);
        let total: Chips = pots.iter().map(|p| p.amount).sum();
        assert_eq!(total, 2100);
    }

    #[test]
    fn folded_seat_contributes_chips_but_is_not_eligible() {
        let entries = vec![(0, 100, true), (1, 100, false)];
        let pots = build_side_pots(&entries);
        assert_eq!(pots.len(), 1);
        assert_eq!(pots[0].amount, 200);
        assert_eq!(pots[0].eligible, vec![1]);
    }

    #[test]
    fn remainder_goes_to_winner_left_of_dealer() {
        let pot = SidePot {
            amount: 10,
            eligible: vec![0, 1, 2],
        };
        let mut strengths = HashMap::new();
        let tie = strength(vec![
            (Rank::Two, Suit::Club),
            (Rank::Seven, Suit::Diamond),
            (Rank::Nine, Suit::Heart),
            (Rank::Jack, Suit::Spade),
            (Rank::King, Suit::Club),
        ]);
        strengths.insert(0, tie);
        strengths.insert(1, tie);
        strengths.insert(2, tie);
        // dealer is seat 2 (position index 2); first eligible left of dealer is seat 0.
        let payouts = distribute(&pot, &strengths, &[0, 1, 2], 2);
        assert_eq!(payouts.values().sum::<Chips>(), 10);
        assert_eq!(payouts[&0], 4);
        assert_eq!(payouts[&1], 3);
        assert_eq!(payouts[&2], 3);
    }

    #[test]
    fn best_hand_takes_the_whole_pot() {
        let pot = SidePot {
            amount: 300,
            eligible: vec![0, 1],
        };
        let mut strengths = HashMap::new();
        strengths.insert(
            0,
            strength(vec![
                (Rank::Ace, Suit::Spade),
                (Rank::Ace, Suit::Heart),
                (Rank::King, Suit::Diamond),
                (Rank::King, Suit::Club),
                (Rank::Queen, Suit::Spade),
            ]),
        );
        strengths.insert(
            1,
            strength(vec![
                (Rank::Two, Suit::Club),
                (Rank::Seven, Suit::Diamond),
                (Rank::Nine, Suit::Heart),
                (Rank::Jack, Suit::Spade),
                (Rank::King, Suit::Club),
            ]),
        );
        let payouts = distribute(&pot, &strengths, &[0, 1], 1);
        assert_eq!(payouts.get(&0), Some(&300));
        assert_eq!(payouts.get(&1), None);
    }
}
