use super::card::Card;
use super::hand::Hand;
use super::strength::Strength;
use rand::seq::SliceRandom;
use rand::Rng;

/// Win-probability estimation for a partial hand against `n` random
/// opponents, against the remaining deck.
///
/// Below `EXACT_THRESHOLD` possible runout+opponent deals, every one of them
/// is enumerated; above it, a seeded Monte Carlo sample stands in. Either way
/// ties are credited as `1 / (number tied)`, and the result lands in `[0,1]`.
pub struct Equity;

impl Equity {
    const EXACT_THRESHOLD: u128 = 10_000;
    pub const DEFAULT_SAMPLES: usize = 2_000;
    const MIN_SAMPLES: usize = 100;

    /// `hole` is the hero's two cards; `board` is 0 to 4 known community
    /// cards; `opponents` is the number of random hands dealt against.
    pub fn win_probability(
        hole: [Card; 2],
        board: &[Card],
        opponents: usize,
        rng: &mut impl Rng,
    ) -> f32 {
        Self::win_probability_with_samples(hole, board, opponents, rng, Self::DEFAULT_SAMPLES)
    }

    pub fn win_probability_with_samples(
        hole: [Card; 2],
        board: &[Card],
        opponents: usize,
        rng: &mut impl Rng,
        samples: usize,
    ) -> f32 {
        assert!(board.len() <= 4, "partial board has at most 4 cards");
        let known = Hand::from(vec![hole[0], hole[1]]).union(Hand::from(board.to_vec()));
        let remaining: Vec<Card> = (0..52u8)
            .map(Card::from)
            .filter(|c| !known.contains(*c))
            .collect();
        let runout_len = 5 - board.len();
        let draw_len = runout_len + 2 * opponents;
        if opponents == 0 {
            return 1.0;
        }
        let combos = n_choose_k(remaining.len() as u128, draw_len as u128);
        if combos <= Self::EXACT_THRESHOLD {
            Self::exact(hole, board, &remaining, runout_len, opponents)
        } else {
            Self::monte_carlo(
                hole,
                board,
                &remaining,
                runout_len,
                opponents,
                rng,
                samples.max(Self::MIN_SAMPLES),
            )
        }
    }

    fn exact(
        hole: [Card; 2],
        board: &[Card],
        remaining: &[Card],
        runout_len: usize,
        opponents: usize,
    ) -> f32 {
        let draw_len = runout_len + 2 * opponents;
        let mut total = 0.0f64;
        let mut deals = 0u64;
        combinations(remaining, draw_len, &mut |draw| {
            total += Self::credit(hole, board, draw, runout_len, opponents) as f64;
            deals += 1;
        });
        assert!(deals > 0, "at least one runout must exist");
        (total / deals as f64) as f32
    }

    fn monte_carlo(
        hole: [Card; 2],
        board: &[Card],
        remaining: &[Card],
        runout_len: usize,
        opponents: usize,
        rng: &mut impl Rng,
        samples: usize,
    ) -> f32 {
        let draw_len = runout_len + 2 * opponents;
        let mut pool = remaining.to_vec();
        let mut total = 0.0f64;
        for _ in 0..samples {
            pool.shuffle(rng);
            total += Self::credit(hole, board, &pool[..draw_len], runout_len, opponents) as f64;
        }
        (total / samples as f64) as f32
    }

    /// Given one concrete draw (runout cards followed by each opponent's two
    /// hole cards), returns the hero's credited share of the pot: 1.0 on an
    /// outright win, `1/k` on a k-way tie for best, 0.0 on a loss.
    fn credit(
        hole: [Card; 2],
        board: &[Card],
        draw: &[Card],
        runout_len: usize,
        opponents: usize,
    ) -> f32 {
        let full_board = Hand::from(board.to_vec()).union(Hand::from(draw[..runout_len].to_vec()));
        let hero = Strength::from(Hand::from(vec![hole[0], hole[1]]).union(full_board));
        let mut best = hero;
        let mut winners = 1usize;
        for i in 0..opponents {
            let a = draw[runout_len + 2 * i];
            let b = draw[runout_len + 2 * i + 1];
            let opp = Strength::from(Hand::from(vec![a, b]).union(full_board));
            match opp.cmp(&best) {
                std::cmp::Ordering::Greater => {
                    best = opp;
                    winners = 1;
                }
                std::cmp::Ordering::Equal => winners += 1,
                std::cmp::Ordering::Less => {}
            }
        }
        if best == hero {
            1.0 / winners as f32
        } else {
            0.0
        }
    }
}

fn n_choose_k(n: u128, k: u128) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result = 1u128;
    for i in 0..k {
        result = result.saturating_mul(n - i) / (i + 1);
    }
    result
}

/// Enumerates every `k`-combination of `pool`, invoking `f` with each.
fn combinations<T: Copy>(pool: &[T], k: usize, f: &mut impl FnMut(&[T])) {
    let mut indices: Vec<usize> = (0..k).collect();
    let n = pool.len();
    if k > n {
        return;
    }
    loop {
        let combo: Vec<T> = indices.iter().map(|&i| pool[i]).collect();
        f(&combo);
        let mut i = k;
        loop {
            if i == 0 {
                return;
            }
            i -= 1;
            if indices[i] != i + n - k {
                break;
            }
            if i == 0 {
                return;
            }
        }
        indices[i] += 1;
        for j in i + 1..k {
            indices[j] = indices[j - 1] + 1;
        }
    }
}
