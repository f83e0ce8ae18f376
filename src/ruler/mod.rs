//! Sliced-ruler expectation
//!
//! A ruler is cut at points drawn uniformly at random along its length;
//! the estimator reports the mean length of the piece containing a marked
//! point, averaged over many cut rulers.
//!
//! Sampling never touches ambient randomness: every function that draws
//! takes a caller-supplied generator, so a seeded generator reproduces an
//! estimate exactly.

use rand::Rng;
use tracing::debug;

/// Contiguous piece of a ruler, as the half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ruler {
    /// Left edge, in inches.
    pub start: f64,
    /// Right edge, in inches.
    pub end: f64,
}

impl Ruler {
    /// A piece spanning `[start, end)`.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Length of this piece.
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Whether `x` falls on this piece. A cut point belongs to the piece
    /// on its right.
    pub fn contains(&self, x: f64) -> bool {
        self.start <= x && x < self.end
    }

    /// Cut this piece at `slices` uniformly random interior points,
    /// yielding `slices + 1` pieces that cover it exactly.
    ///
    /// The piece must have positive length.
    pub fn cut<R: Rng>(&self, slices: usize, rng: &mut R) -> Vec<Ruler> {
        let mut nodes = Vec::with_capacity(slices + 2);
        nodes.push(self.start);
        for _ in 0..slices {
            nodes.push(rng.gen_range(self.start..self.end));
        }
        nodes.push(self.end);
        nodes.sort_by(f64::total_cmp);

        nodes.windows(2).map(|w| Ruler::new(w[0], w[1])).collect()
    }
}

/// Locate the piece containing `x`, if any does.
pub fn piece_containing(pieces: &[Ruler], x: f64) -> Option<&Ruler> {
    pieces.iter().find(|piece| piece.contains(x))
}

/// One cutting experiment: how long the ruler is, how often it is cut,
/// and which point's piece gets measured.
#[derive(Debug, Clone, Copy)]
pub struct CutExperiment {
    /// Full length of the ruler before cutting.
    pub ruler_length: f64,
    /// Number of random cut points per ruler.
    pub slices: usize,
    /// The marked point whose piece is measured.
    pub mark: f64,
}

impl CutExperiment {
    /// Cut one ruler and measure the piece containing the mark.
    ///
    /// Returns `None` when the mark is off the ruler.
    pub fn run_one<R: Rng>(&self, rng: &mut R) -> Option<f64> {
        let ruler = Ruler::new(0.0, self.ruler_length);
        let pieces = ruler.cut(self.slices, rng);
        piece_containing(&pieces, self.mark).map(Ruler::length)
    }

    /// Mean measured length over `trials` cut rulers.
    ///
    /// Returns `None` for zero trials or a mark that is off the ruler.
    pub fn expected_length<R: Rng>(&self, trials: u64, rng: &mut R) -> Option<f64> {
        if trials == 0 {
            return None;
        }

        let mut total = 0.0;
        for _ in 0..trials {
            total += self.run_one(rng)?;
        }
        let mean = total / trials as f64;
        debug!(trials, mean, "cut experiment finished");
        Some(mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn cut_pieces_cover_the_ruler() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let pieces = Ruler::new(0.0, 12.0).cut(3, &mut rng);

        assert_eq!(pieces.len(), 4);
        let total: f64 = pieces.iter().map(Ruler::length).sum();
        assert!((total - 12.0).abs() < 1e-9);
        assert_eq!(pieces[0].start, 0.0);
        assert_eq!(pieces[3].end, 12.0);
    }

    #[test]
    fn edges_belong_to_the_piece_on_their_right() {
        let piece = Ruler::new(2.0, 5.0);
        assert!(piece.contains(2.0));
        assert!(!piece.contains(5.0));
    }

    #[test]
    fn exactly_one_piece_contains_the_mark() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let pieces = Ruler::new(0.0, 12.0).cut(3, &mut rng);

        let hits = pieces.iter().filter(|p| p.contains(6.0)).count();
        assert_eq!(hits, 1);
        assert!(piece_containing(&pieces, 6.0).unwrap().contains(6.0));
    }

    #[test]
    fn estimate_approaches_the_known_answer() {
        // The 12-inch, 3-cut, 6-inch-mark riddle: about 5.63 inches.
        let experiment = CutExperiment {
            ruler_length: 12.0,
            slices: 3,
            mark: 6.0,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(538);
        let mean = experiment.expected_length(4_000, &mut rng).unwrap();
        assert!((mean - 5.63).abs() < 0.5, "mean {mean} too far from 5.63");
    }

    #[test]
    fn mark_off_the_ruler_yields_nothing() {
        let experiment = CutExperiment {
            ruler_length: 12.0,
            slices: 3,
            mark: 13.0,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(experiment.expected_length(10, &mut rng), None);
    }

    #[test]
    fn zero_trials_yield_nothing() {
        let experiment = CutExperiment {
            ruler_length: 12.0,
            slices: 3,
            mark: 6.0,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(experiment.expected_length(0, &mut rng), None);
    }
}
