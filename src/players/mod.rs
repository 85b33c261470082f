pub mod aggressive;
pub mod conservative;
pub mod decision;
pub mod mathematical;

pub use aggressive::Aggressive;
pub use conservative::Conservative;
pub use decision::{AIDecision, Decision, DecisionInput, Strategy};
pub use mathematical::Mathematical;

use crate::gameplay::Personality;

/// Resolves a seat's configured `Personality` to its stateless strategy.
pub fn strategy_for(personality: Personality) -> &'static dyn Strategy {
    match personality {
        Personality::Conservative => &Conservative,
        Personality::Aggressive => &Aggressive,
        Personality::Mathematical => &Mathematical,
    }
}
