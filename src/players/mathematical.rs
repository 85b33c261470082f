use super::decision::{AIDecision, Decision, DecisionInput, Strategy};
use crate::Chips;
use rand::RngCore;

/// Pure pot-odds / EV play: calls whenever the price is right, raises when
/// there's a clear edge over that price, and never bluffs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mathematical;

impl Strategy for Mathematical {
    fn decide(&self, input: &DecisionInput, rng: &mut dyn RngCore) -> AIDecision {
        let hand_strength = input.hand_strength(rng);
        let pot_odds = input.pot_odds();
        let spr = input.spr();
        let to_call = input.amount_to_call();

        if to_call == 0 {
            if hand_strength < 0.40 {
                return AIDecision {
                    decision: Decision::Check,
                    reasoning: format!("hand strength {hand_strength:.2} too thin to bet — check"),
                    hand_strength,
                    pot_odds,
                    spr,
                    confidence: 1.0 - hand_strength,
                };
            }
            let multiple = if hand_strength < 0.65 { 0.5 } else { 1.0 };
            let desired = input.current_bet + (input.pot as f32 * multiple) as Chips;
            if let Some(raise_to) = input.clamp_raise(desired.max(input.min_raise_to)) {
                return AIDecision {
                    decision: Decision::Raise(raise_to),
                    reasoning: format!(
                        "hand strength {hand_strength:.2} supports a {}pot bet",
                        if multiple >= 1.0 { "" } else { "half-" }
                    ),
                    hand_strength,
                    pot_odds,
                    spr,
                    confidence: hand_strength,
                };
            }
            return AIDecision {
                decision: Decision::Check,
                reasoning: "no legal bet size available — check".to_string(),
                hand_strength,
                pot_odds,
                spr,
                confidence: hand_strength,
            };
        }

        if hand_strength >= pot_odds + 0.20 {
            let raw = (input.pot as f32) * (hand_strength - 0.25);
            let desired = input.current_bet + raw.round() as Chips;
            if let Some(raise_to) = input.clamp_raise(desired.max(input.min_raise_to)) {
                return AIDecision {
                    decision: Decision::Raise(raise_to),
                    reasoning: format!(
                        "edge over pot odds ({hand_strength:.2} ≥ {:.2}) — raising for value",
                        pot_odds + 0.20
                    ),
                    hand_strength,
                    pot_odds,
                    spr,
                    confidence: hand_strength,
                };
            }
        }
        if hand_strength >= pot_odds {
            return AIDecision {
                decision: Decision::Call,
                reasoning: format!(
                    "hand strength {hand_strength:.2} clears pot odds {pot_odds:.2} — call"
                ),
                hand_strength,
                pot_odds,
                spr,
                confidence: hand_strength,
            };
        }
        AIDecision {
            decision: Decision::Fold,
            reasoning: format!(
                "hand strength {hand_strength:.2} below pot odds {pot_odds:.2} — fold"
            ),
            hand_strength,
            pot_odds,
            spr,
            confidence: 1.0 - hand_strength,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use crate::cards::rank::Rank;
    use crate::cards::street::Street;
    use crate::cards::suit::Suit;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn input(hole: [Card; 2], current_bet: i64, pot: i64, stack: i64) -> DecisionInput<'static> {
        DecisionInput {
            street: Street::River,
            hole,
            board: &[],
            pot,
            current_bet,
            seat_current_bet: 0,
            stack,
            effective_stack: stack,
            active_opponents: 1,
            min_raise_to: current_bet + 10,
            max_raise_to: stack,
            big_blind: 10,
            monte_carlo_samples: 200,
        }
    }

    #[test]
    fn calls_exactly_at_the_pot_odds_boundary() {
        let mut rng = SmallRng::seed_from_u64(1);
        let hole = [Card::from((Rank::Ace, Suit::Spade)), Card::from((Rank::Ace, Suit::Heart))];
        let decision = Mathematical.decide(&input(hole, 50, 150, 900), &mut rng);
        assert!(matches!(decision.decision, Decision::Call | Decision::Raise(_)));
    }

    #[test]
    fn folds_when_price_is_bad() {
        let mut rng = SmallRng::seed_from_u64(1);
        let hole = [Card::from((Rank::Seven, Suit::Club)), Card::from((Rank::Two, Suit::Diamond))];
        let decision = Mathematical.decide(&input(hole, 800, 50, 900), &mut rng);
        assert_eq!(decision.decision, Decision::Fold);
    }
}
