//! Summit-race expectation
//!
//! Four equally able riders race to a summit worth 5, 3, 2 and 1 points
//! for the first through fourth rider over the top. Two of the three
//! competitors are teammates: whichever of the pair climbs slower gets
//! pulled up at the faster teammate's time. The estimator reports the lone
//! rider's mean points over many simulated races, with the random finish
//! order drawn from a caller-supplied generator.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Summit points by finishing place, first through fourth.
pub const POINTS_BY_PLACE: [u32; 4] = [5, 3, 2, 1];

/// Simulate one race and report the lone rider's points.
///
/// Finish times start as a uniformly random permutation of four distinct
/// draws. Both teammates then finish at the faster teammate's draw, and
/// the lone rider places one ahead of every strictly faster time.
pub fn simulate_one_race<R: Rng>(rng: &mut R) -> u32 {
    // Draws 1..=4 stand in for finish times; the lone rider is index 0,
    // the teammates indices 2 and 3.
    let mut times = [1u8, 2, 3, 4];
    times.shuffle(rng);

    let drafted = times[2].min(times[3]);
    times[2] = drafted;
    times[3] = drafted;

    let place = 1 + times[1..].iter().filter(|&&t| t < times[0]).count();
    POINTS_BY_PLACE[place - 1]
}

/// Mean points over `trials` simulated races.
///
/// Returns `None` for zero trials.
pub fn expected_score<R: Rng>(trials: u64, rng: &mut R) -> Option<f64> {
    if trials == 0 {
        return None;
    }

    let mut total = 0u64;
    for _ in 0..trials {
        total += u64::from(simulate_one_race(rng));
    }
    let mean = total as f64 / trials as f64;
    debug!(trials, mean, "race experiment finished");
    Some(mean)
}
