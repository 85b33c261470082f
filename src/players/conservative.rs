use super::decision::{AIDecision, Decision, DecisionInput, Strategy};
use rand::RngCore;

/// Tight-passive: folds by default, calls only strong hands, raises only
/// premium ones. Thresholds tighten as SPR rises (more to lose relative to
/// the pot). Never bluffs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Conservative;

impl Conservative {
    fn call_threshold(spr: f32) -> f32 {
        interpolate(spr, 0.55, 0.70)
    }

    fn raise_threshold(spr: f32) -> f32 {
        interpolate(spr, 0.75, 0.85)
    }
}

/// Linearly interpolates between the `spr <= 3` value and the `spr >= 7`
/// value, holding flat outside that band.
fn interpolate(spr: f32, at_low_spr: f32, at_high_spr: f32) -> f32 {
    if spr <= 3.0 {
        at_low_spr
    } else if spr >= 7.0 {
        at_high_spr
    } else {
        let t = (spr - 3.0) / (7.0 - 3.0);
        at_low_spr + t * (at_high_spr - at_low_spr)
    }
}

impl Strategy for Conservative {
    fn decide(&self, input: &DecisionInput, rng: &mut dyn RngCore) -> AIDecision {
        let hand_strength = input.hand_strength(rng);
        let pot_odds = input.pot_odds();
        let spr = input.spr();
        let to_call = input.amount_to_call();
        let call_bar = Self::call_threshold(spr);
        let raise_bar = Self::raise_threshold(spr);

        if to_call == 0 {
            if hand_strength >= raise_bar {
                let sizing = input.big_blind.max(input.pot.min(input.stack));
                if let Some(raise_to) = input.clamp_raise(input.current_bet + sizing) {
                    return AIDecision {
                        decision: Decision::Raise(raise_to),
                        reasoning: format!(
                            "SPR {spr:.1}, premium hand ({hand_strength:.2}) — bet for value"
                        ),
                        hand_strength,
                        pot_odds,
                        spr,
                        confidence: hand_strength,
                    };
                }
            }
            return AIDecision {
                decision: Decision::Check,
                reasoning: format!("SPR {spr:.1}, hand not strong enough to bet — check"),
                hand_strength,
                pot_odds,
                spr,
                confidence: 1.0 - hand_strength,
            };
        }

        if hand_strength >= raise_bar {
            let sizing = input.big_blind.max(input.pot.min(input.stack));
            if let Some(raise_to) = input.clamp_raise(input.current_bet + sizing) {
                return AIDecision {
                    decision: Decision::Raise(raise_to),
                    reasoning: format!(
                        "SPR {spr:.1}, strong enough ({hand_strength:.2} ≥ {raise_bar:.2}) to raise"
                    ),
                    hand_strength,
                    pot_odds,
                    spr,
                    confidence: hand_strength,
                };
            }
        }
        if hand_strength >= call_bar {
            return AIDecision {
                decision: Decision::Call,
                reasoning: format!(
                    "SPR {spr:.1}, hand clears the call bar ({hand_strength:.2} ≥ {call_bar:.2})"
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
                "SPR {spr:.1}, hand too weak to continue ({hand_strength:.2} < {call_bar:.2})"
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

    fn input(hand_strength_hole: [Card; 2], to_call: i64, pot: i64, stack: i64) -> DecisionInput<'static> {
        DecisionInput {
            street: Street::Preflop,
            hole: hand_strength_hole,
            board: &[],
            pot,
            current_bet: to_call,
            seat_current_bet: 0,
            stack,
            effective_stack: stack,
            active_opponents: 1,
            min_raise_to: to_call + 10,
            max_raise_to: stack,
            big_blind: 10,
            monte_carlo_samples: 200,
        }
    }

    #[test]
    fn folds_weak_hands_facing_a_bet() {
        let mut rng = SmallRng::seed_from_u64(1);
        let hole = [Card::from((Rank::Seven, Suit::Club)), Card::from((Rank::Two, Suit::Diamond))];
        let decision = Conservative.decide(&input(hole, 20, 50, 1000), &mut rng);
        assert_eq!(decision.decision, Decision::Fold);
    }

    #[test]
    fn raises_premium_hands() {
        let mut rng = SmallRng::seed_from_u64(1);
        let hole = [Card::from((Rank::Ace, Suit::Spade)), Card::from((Rank::Ace, Suit::Heart))];
        let decision = Conservative.decide(&input(hole, 20, 50, 1000), &mut rng);
        assert!(matches!(decision.decision, Decision::Raise(_)));
    }

    #[test]
    fn checks_back_weak_hands_uncontested() {
        let mut rng = SmallRng::seed_from_u64(1);
        let hole = [Card::from((Rank::Seven, Suit::Club)), Card::from((Rank::Two, Suit::Diamond))];
        let decision = Conservative.decide(&input(hole, 0, 50, 1000), &mut rng);
        assert_eq!(decision.decision, Decision::Check);
    }
}
