use super::decision::{AIDecision, Decision, DecisionInput, Strategy};
use rand::Rng;
use rand::RngCore;

/// Loose-aggressive, with bluffs. Shoves or folds at low SPR, raises big at
/// medium/high SPR, and occasionally bluff-raises regardless of hand
/// strength — capped so the bluff rate never exceeds 0.40.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggressive;

struct Profile {
    raise_threshold: f32,
    call_threshold: f32,
    bluff_probability: f32,
    pot_multiple: f32,
}

impl Aggressive {
    fn profile(spr: f32) -> Profile {
        if spr < 7.0 {
            Profile { raise_threshold: 0.45, call_threshold: 0.30, bluff_probability: 0.15, pot_multiple: 2.5 }
        } else {
            Profile { raise_threshold: 0.55, call_threshold: 0.35, bluff_probability: 0.25, pot_multiple: 2.5 }
        }
    }
}

impl Strategy for Aggressive {
    fn decide(&self, input: &DecisionInput, rng: &mut dyn RngCore) -> AIDecision {
        let hand_strength = input.hand_strength(rng);
        let pot_odds = input.pot_odds();
        let spr = input.spr();
        let to_call = input.amount_to_call();
        let roll: f32 = rng.random();

        if spr <= 3.0 {
            let bluff = roll < 0.10;
            if hand_strength >= 0.40 || bluff {
                let reasoning = if bluff && hand_strength < 0.40 {
                    format!("SPR {spr:.1}, push-or-fold zone — shoving as a bluff")
                } else {
                    format!("SPR {spr:.1}, push-or-fold zone — shoving with {hand_strength:.2}")
                };
                let decision = match input.clamp_raise(input.max_raise_to) {
                    Some(raise_to) => Decision::Raise(raise_to),
                    None if to_call > 0 => Decision::Call,
                    None => Decision::Check,
                };
                return AIDecision {
                    decision,
                    reasoning,
                    hand_strength,
                    pot_odds,
                    spr,
                    confidence: if bluff { 0.10 } else { hand_strength },
                };
            }
            return AIDecision {
                decision: Decision::Fold,
                reasoning: format!("SPR {spr:.1}, push-or-fold zone — too weak to shove"),
                hand_strength,
                pot_odds,
                spr,
                confidence: 1.0 - hand_strength,
            };
        }

        let profile = Self::profile(spr);
        let bluff_probability = profile.bluff_probability.min(0.40);
        let bluff = roll < bluff_probability;

        if hand_strength >= profile.raise_threshold || bluff {
            let desired = input.current_bet + (input.pot as f32 * profile.pot_multiple) as crate::Chips;
            let desired = desired.max(input.min_raise_to);
            if let Some(raise_to) = input.clamp_raise(desired) {
                let reasoning = if bluff && hand_strength < profile.raise_threshold {
                    format!("SPR {spr:.1}, bluff-raising into the field")
                } else {
                    format!(
                        "SPR {spr:.1}, hand clears the raise bar ({hand_strength:.2} ≥ {:.2}) — pressing",
                        profile.raise_threshold
                    )
                };
                return AIDecision {
                    decision: Decision::Raise(raise_to),
                    reasoning,
                    hand_strength,
                    pot_odds,
                    spr,
                    confidence: if bluff { bluff_probability } else { hand_strength },
                };
            }
        }

        if to_call == 0 {
            return AIDecision {
                decision: Decision::Check,
                reasoning: format!("SPR {spr:.1}, not pressing this street — check"),
                hand_strength,
                pot_odds,
                spr,
                confidence: 1.0 - hand_strength,
            };
        }
        if hand_strength >= profile.call_threshold {
            return AIDecision {
                decision: Decision::Call,
                reasoning: format!(
                    "SPR {spr:.1}, hand clears the call bar ({hand_strength:.2} ≥ {:.2})",
                    profile.call_threshold
                ),
                hand_strength,
                pot_odds,
                spr,
                confidence: hand_strength,
            };
        }
        AIDecision {
            decision: Decision::Fold,
            reasoning: format!("SPR {spr:.1}, too weak to continue — folding"),
            hand_strength,
            pot_odds,
            spr,
            confidence: 1.0 - hand_strength,
        }
    }
}
