use rand::Rng;
use tracing::{debug, warn};

use crate::{
    drink::Drink,
    error::{GenerateError, SuggestionError},
    generator::{Generator, TaxonomyGenerator},
    scorer::{Scorer, ScoringWeights, UserPreference},
};

/// Upper bound on candidates generated for one request.
pub const MAX_CANDIDATES: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub drink: Drink,
    pub score: f64,
    /// Generation order, used as the tie-break.
    pub position: usize,
}

/// Generates, scores and ranks drink candidates.
///
/// Holds no mutable state; every call takes the random generator to use.
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine<G = TaxonomyGenerator> {
    generator: G,
    scorer: Scorer,
}

impl SuggestionEngine<TaxonomyGenerator> {
    pub fn new(weights: ScoringWeights) -> Self {
        Self::with_generator(TaxonomyGenerator, weights)
    }
}

impl<G: Generator> SuggestionEngine<G> {
    pub fn with_generator(generator: G, weights: ScoringWeights) -> Self {
        Self {
            generator,
            scorer: Scorer::new(weights),
        }
    }

    /// One generated drink with tags inferred.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Drink, GenerateError> {
        let mut drink = self.generator.generate(rng)?;
        drink.ensure_tags();
        Ok(drink)
    }

    /// Generates `count` candidates and returns them scored, best first.
    pub fn rank<R: Rng + ?Sized>(
        &self,
        count: usize,
        preference: Option<&UserPreference>,
        rng: &mut R,
    ) -> Result<Vec<ScoredCandidate>, SuggestionError> {
        if count == 0 || count > MAX_CANDIDATES {
            return Err(SuggestionError::InvalidCandidateCount {
                requested: count,
                max: MAX_CANDIDATES,
            });
        }

        let mut candidates = Vec::with_capacity(count);

        for position in 0..count {
            let mut drink = match self.generator.generate(rng) {
                Ok(drink) => drink,
                Err(err) => {
                    warn!(position, error = %err, "Skipping candidate that failed to generate");
                    continue;
                }
            };

            drink.ensure_tags();
            let score = self.scorer.score(&drink, preference, rng);

            candidates.push(ScoredCandidate {
                drink,
                score,
                position,
            });
        }

        if candidates.is_empty() {
            return Err(SuggestionError::InsufficientCandidates { requested: count });
        }

        // sort_by is stable, so equal scores keep generation order
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!(
            requested = count,
            produced = candidates.len(),
            personalized = preference.is_some_and(|p| !p.is_empty()),
            "Ranked suggestion candidates"
        );

        Ok(candidates)
    }

    pub fn suggest<R: Rng + ?Sized>(
        &self,
        count: usize,
        preference: Option<&UserPreference>,
        rng: &mut R,
    ) -> Result<Vec<Drink>, SuggestionError> {
        Ok(self
            .rank(count, preference, rng)?
            .into_iter()
            .map(|c| c.drink)
            .collect())
    }
}
