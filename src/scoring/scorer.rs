use super::residue_class::ResidueClass;
use crate::errors::{
    MutScoreError,
    Result,
};
use crate::models::{
    Impact,
    MutationRequest,
    MutationResult,
};
use log::debug;
use rand::rngs::StdRng;
use rand::{
    Rng,
    SeedableRng,
};
use std::ops::Range;

const CONFIDENCE_RANGE: Range<f64> = 0.65..0.95;

/// Heuristic substitution scorer.
///
/// The impact category only depends on which residue table the
/// substitution falls in. Score and confidence are drawn from the wrapped
/// random source, so seed it when outputs need to be reproducible.
///
/// Example:
/// ```
/// use mutscore::models::Impact;
/// use mutscore::scoring::scorer::MockMutationScorer;
/// let mut scorer = MockMutationScorer::seeded(42);
/// let res = scorer.score("MKTAYIAKQR", 3, "V").unwrap();
/// assert_eq!(res.wild_type(), 'T');
/// assert_eq!(res.impact(), Impact::Beneficial);
/// assert!(res.score() >= 78.0 && res.score() < 98.0);
/// ```
#[derive(Debug, Clone)]
pub struct MockMutationScorer<R: Rng = StdRng> {
    rng: R,
}

impl MockMutationScorer<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Seeded scorer when a seed is given, entropy-seeded otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl Default for MockMutationScorer<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> MockMutationScorer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Scores substituting `substitution` at the 1-based `position`.
    pub fn score(
        &mut self,
        sequence: &str,
        position: usize,
        substitution: &str,
    ) -> Result<MutationResult> {
        let mutant = parse_substitution(substitution)?;
        self.score_request(sequence, &MutationRequest::new(position, mutant))
    }

    pub fn score_request(
        &mut self,
        sequence: &str,
        request: &MutationRequest,
    ) -> Result<MutationResult> {
        let wild_type = residue_at(sequence, request.position)?;
        let mutant = request.substitution.to_ascii_uppercase();
        let class = ResidueClass::of(mutant);

        let score = draw_half_open(&mut self.rng, class.score_range());
        let confidence = draw_half_open(&mut self.rng, CONFIDENCE_RANGE);
        debug!(
            "Scored {}{}{} as {:?} ({:.2}, conf {:.2})",
            wild_type, request.position, mutant, class, score, confidence
        );

        Ok(MutationResult::new(
            wild_type,
            mutant,
            request.position,
            class.impact(),
            score,
            confidence,
            class.explanation(wild_type, request.position, mutant),
            class
                .recommendations()
                .iter()
                .map(|x| x.to_string())
                .collect(),
        ))
    }
}

/// Impact category only, without drawing any numbers.
pub fn classify(substitution: &str) -> Result<Impact> {
    let mutant = parse_substitution(substitution)?;
    Ok(ResidueClass::of(mutant.to_ascii_uppercase()).impact())
}

/// Single residue at a 1-based position.
pub fn residue_at(sequence: &str, position: usize) -> Result<char> {
    position
        .checked_sub(1)
        .and_then(|i| sequence.chars().nth(i))
        .ok_or_else(|| MutScoreError::Range {
            position,
            length: sequence.chars().count(),
        })
}

/// Uniform draw from `range` that never returns `range.end`.
///
/// Float `random_range` samples the closed interval, so a draw landing on
/// the upper bound is pulled down to the largest float below it.
fn draw_half_open<R: Rng>(rng: &mut R, range: Range<f64>) -> f64 {
    debug_assert!(range.start > 0.0 && range.start < range.end);
    let end = range.end;
    let x = rng.random_range(range);
    if x < end {
        x
    } else {
        f64::from_bits(end.to_bits() - 1)
    }
}

fn parse_substitution(substitution: &str) -> Result<char> {
    let mut chars = substitution.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c.to_ascii_uppercase()),
        (None, _) => Err(MutScoreError::Value(
            "substitution must not be empty".to_string(),
        )),
        (Some(_), Some(_)) => Err(MutScoreError::Value(format!(
            "substitution must be a single residue, got '{}'",
            substitution
        ))),
    }
}
